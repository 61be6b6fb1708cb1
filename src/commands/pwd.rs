use crate::command::CommandResult;
use crate::render::RenderedLine;
use crate::session::Session;

pub(crate) fn run(session: &Session) -> CommandResult {
    Ok(vec![RenderedLine::text(session.cwd.clone())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::plain;

    #[test]
    fn test_pwd_prints_current_directory() {
        let mut session = Session::new();
        session.cwd = "~/projects/demos".to_string();
        let lines = run(&session).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), "~/projects/demos");
    }
}
