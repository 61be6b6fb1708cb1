use crate::command::CommandResult;
use crate::error::ShellError;
use crate::path;
use crate::session::Session;
use crate::vfs::VirtualFileSystem;

/// Change the current directory. A missing argument and `.` are silent
/// no-ops; anything else is resolved against the current directory and must
/// name an existing directory. Navigation never partially applies: on any
/// failure `cwd` is untouched.
pub(crate) fn run(
    arg: Option<&str>,
    session: &mut Session,
    vfs: &VirtualFileSystem,
) -> CommandResult {
    let Some(target) = arg else {
        return Ok(Vec::new());
    };
    if target == "." {
        return Ok(Vec::new());
    }

    let resolved = path::resolve(&session.cwd, target);
    if vfs.is_dir(&resolved) {
        session.cwd = resolved;
        Ok(Vec::new())
    } else {
        // a File target lands here too: same taxonomy
        Err(ShellError::NotFound(format!(
            "cd: no such directory: {}",
            target
        )))
    }
}
