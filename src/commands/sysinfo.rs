use crate::command::CommandResult;
use crate::render::RenderedLine;
use crate::session::Session;
use crate::vfs::VirtualFileSystem;

/// Fixed info block; the session id and start time are captured once at
/// session creation.
pub(crate) fn run(session: &Session, vfs: &VirtualFileSystem) -> CommandResult {
    let rows = [
        ("HOST", "guest@system".to_string()),
        (
            "KERNEL",
            format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        ),
        ("SHELL", "vsh (read-only)".to_string()),
        ("SESSION", session.id.to_string()),
        (
            "STARTED",
            session.started.format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
        ("VFS", format!("{} nodes mounted read-only", vfs.len())),
    ];
    Ok(rows
        .into_iter()
        .map(|(key, value)| RenderedLine::text(format!("{:<9} {}", key, value)))
        .collect())
}
