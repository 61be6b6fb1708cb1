use crate::command::CommandResult;
use crate::error::ShellError;
use crate::render::RenderedLine;
use crate::session::Session;
use crate::vfs::VirtualFileSystem;

/// List the current directory with the display sort policy (directories
/// first, lexicographic within each group). A missing or non-directory
/// current node is an internal inconsistency surfaced as an error line, not
/// a panic.
pub(crate) fn run(session: &Session, vfs: &VirtualFileSystem) -> CommandResult {
    match vfs.children_sorted(&session.cwd) {
        Ok(entries) => Ok(vec![RenderedLine::Listing { entries }]),
        Err(_) => Err(ShellError::NotFound(
            "Error: Cannot list content of this location.".to_string(),
        )),
    }
}
