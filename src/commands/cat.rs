use crate::command::CommandResult;
use crate::error::ShellError;
use crate::path;
use crate::render::RenderedLine;
use crate::session::{OpenFile, Session};
use crate::vfs::{VfsNode, VirtualFileSystem};

const MARKDOWN_EXT: &str = ".md";

/// Read a file. Markdown goes to the viewer pane: the open-file slot is
/// (re)filled and only a notice lands in the scrollback. Everything else is
/// printed preformatted. The open-file name keeps whatever the user typed,
/// not the resolved path.
pub(crate) fn run(
    arg: Option<&str>,
    session: &mut Session,
    vfs: &VirtualFileSystem,
) -> CommandResult {
    let Some(target) = arg else {
        return Err(ShellError::InvalidArgument("Usage: cat [filename]".to_string()));
    };

    let resolved = path::resolve(&session.cwd, target);
    match vfs.lookup(&resolved) {
        Some(VfsNode::File { content }) => {
            if resolved.ends_with(MARKDOWN_EXT) {
                session.open_file = Some(OpenFile {
                    name: target.to_string(),
                    content: content.clone(),
                });
                Ok(vec![RenderedLine::text(format!("Opening {} ...", target))])
            } else {
                Ok(vec![RenderedLine::Pre { text: content.clone() }])
            }
        }
        _ => Err(ShellError::NotFound(format!(
            "cat: file not found: {}",
            target
        ))),
    }
}
