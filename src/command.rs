//! The command interpreter: parse a raw line into a closed set of
//! built-ins, dispatch, and append the result to the scrollback. Both the
//! line editor and the explorer panel funnel through [`submit`] so there is
//! exactly one code path for navigation.

use crate::commands;
use crate::error::ShellError;
use crate::render::{self, RenderedLine};
use crate::session::Session;
use crate::vfs::VirtualFileSystem;

pub type CommandResult = Result<Vec<RenderedLine>, ShellError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Sysinfo,
    Pwd,
    Clear,
    Ls,
    Cd(Option<String>),
    Cat(Option<String>),
    Close,
    Unknown(String),
}

impl Command {
    /// Parse one trimmed, non-empty line: split on single spaces, match the
    /// command token case-insensitively, consume at most one argument. An
    /// empty argument token counts as missing.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split(' ');
        let head = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        match head.as_str() {
            "help" => Command::Help,
            "sysinfo" => Command::Sysinfo,
            "pwd" => Command::Pwd,
            "clear" => Command::Clear,
            "ls" => Command::Ls,
            "cd" => Command::Cd(arg),
            "cat" => Command::Cat(arg),
            "close" => Command::Close,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Run one input line against the session. Empty input is a no-op: no
/// history entry, no echo. Everything else is recorded, echoed, dispatched,
/// and its result (or a single error line) appended after the echo. A
/// failing command never touches `cwd`, `history`, or the open file.
pub fn submit(line: &str, session: &mut Session, vfs: &VirtualFileSystem) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    session.push_history(line);
    session.scrollback.push(RenderedLine::Echo {
        prompt: render::prompt_for(&session.cwd),
        input: line.to_string(),
    });

    let outcome = match Command::parse(line) {
        Command::Help => commands::help::run(),
        Command::Sysinfo => commands::sysinfo::run(session, vfs),
        Command::Pwd => commands::pwd::run(session),
        Command::Clear => commands::clear::run(session),
        Command::Ls => commands::ls::run(session, vfs),
        Command::Cd(arg) => commands::cd::run(arg.as_deref(), session, vfs),
        Command::Cat(arg) => commands::cat::run(arg.as_deref(), session, vfs),
        Command::Close => commands::close::run(session),
        Command::Unknown(token) => Err(ShellError::UnknownCommand(token)),
    };

    match outcome {
        Ok(lines) => session.scrollback.extend(lines),
        Err(e) => session.scrollback.push(RenderedLine::error(e.to_string())),
    }
}

/// Submit whatever is in the input buffer, clearing it first.
pub fn submit_buffer(session: &mut Session, vfs: &VirtualFileSystem) {
    let line = std::mem::take(&mut session.input);
    session.caret = 0;
    submit(&line, session, vfs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::plain;
    use crate::vfs;

    fn run(lines: &[&str]) -> Session {
        let vfs = vfs::sample();
        let mut session = Session::new();
        for l in lines {
            submit(l, &mut session, &vfs);
        }
        session
    }

    #[test]
    fn test_empty_input_is_a_full_noop() {
        let s = run(&["", "   "]);
        assert!(s.scrollback.is_empty());
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_echo_precedes_result() {
        let s = run(&["pwd"]);
        assert_eq!(s.scrollback.len(), 2);
        assert!(matches!(s.scrollback[0], RenderedLine::Echo { .. }));
        assert_eq!(plain(&s.scrollback[1]), "~");
    }

    #[test]
    fn test_echo_carries_prompt_of_the_directory_at_submit_time() {
        let s = run(&["cd projects", "pwd"]);
        let RenderedLine::Echo { prompt, input } = &s.scrollback[1] else {
            panic!("expected echo");
        };
        assert_eq!(prompt, "guest@system:~/projects$");
        assert_eq!(input, "pwd");
        assert_eq!(plain(&s.scrollback[2]), "~/projects");
    }

    #[test]
    fn test_parse_takes_one_arg_and_drops_empty_tokens() {
        assert_eq!(
            Command::parse("cat notes/todo.txt"),
            Command::Cat(Some("notes/todo.txt".to_string()))
        );
        // a doubled space yields an empty token, which counts as no arg
        assert_eq!(Command::parse("cd  projects"), Command::Cd(None));
        assert_eq!(Command::parse("ls -la"), Command::Ls);
    }

    #[test]
    fn test_command_token_is_case_insensitive() {
        let s = run(&["PWD", "Ls"]);
        assert!(!s
            .scrollback
            .iter()
            .any(|l| matches!(l, RenderedLine::Error { .. })));
    }

    #[test]
    fn test_unknown_command_is_recoverable() {
        let s = run(&["frobnicate now", "pwd"]);
        assert_eq!(
            plain(&s.scrollback[1]),
            "Command not found: frobnicate"
        );
        // the session keeps working
        assert_eq!(plain(&s.scrollback[3]), "~");
    }

    #[test]
    fn test_every_nonempty_line_lands_in_history_verbatim() {
        let s = run(&["  cd projects  ", "bogus arg"]);
        assert_eq!(s.history, ["cd projects", "bogus arg"]);
    }

    #[test]
    fn test_failed_command_leaves_state_untouched() {
        let s = run(&["cd projects", "cat about.md", "cd nowhere", "cat nope.md"]);
        assert_eq!(s.cwd, "~/projects");
        assert!(s.open_file.is_none(), "about.md is not under ~/projects");
        let s = run(&["cat about.md", "cd nowhere"]);
        assert_eq!(s.open_file.as_ref().map(|o| o.name.as_str()), Some("about.md"));
        assert_eq!(s.cwd, "~");
    }

    #[test]
    fn test_submit_buffer_consumes_and_resets_input() {
        let vfs = vfs::sample();
        let mut s = Session::new();
        s.set_input("cd projects".to_string());
        submit_buffer(&mut s, &vfs);
        assert_eq!(s.input, "");
        assert_eq!(s.caret, 0);
        assert_eq!(s.cwd, "~/projects");
    }
}
