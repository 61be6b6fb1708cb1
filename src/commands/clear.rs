use crate::command::CommandResult;
use crate::session::Session;

/// Truncate the scrollback, the just-pushed echo of `clear` included.
pub(crate) fn run(session: &mut Session) -> CommandResult {
    session.scrollback.clear();
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use crate::command::submit;
    use crate::session::Session;
    use crate::vfs;

    #[test]
    fn test_clear_empties_scrollback_and_nothing_else() {
        let vfs = vfs::sample();
        let mut session = Session::new();
        submit("cd projects", &mut session, &vfs);
        submit("ls", &mut session, &vfs);
        assert!(!session.scrollback.is_empty());

        submit("clear", &mut session, &vfs);
        assert!(session.scrollback.is_empty());
        assert_eq!(session.cwd, "~/projects");
        assert_eq!(session.history, ["cd projects", "ls", "clear"]);
    }

    #[test]
    fn test_clear_on_empty_scrollback_stays_empty() {
        let vfs = vfs::sample();
        let mut session = Session::new();
        submit("clear", &mut session, &vfs);
        assert!(session.scrollback.is_empty());
    }
}
