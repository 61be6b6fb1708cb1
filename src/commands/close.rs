use crate::command::CommandResult;
use crate::error::ShellError;
use crate::render::RenderedLine;
use crate::session::Session;

pub(crate) fn run(session: &mut Session) -> CommandResult {
    match session.open_file.take() {
        Some(open) => Ok(vec![RenderedLine::text(format!("Closed {}", open.name))]),
        None => Err(ShellError::NotFound("close: no file open".to_string())),
    }
}
