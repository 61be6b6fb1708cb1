use crate::command::CommandResult;
use crate::render::RenderedLine;

const HELP_COMMANDS: &[(&str, &str)] = &[
    ("pwd", "Print working directory"),
    ("ls", "List directory content"),
    ("cd [dir]", "Change directory"),
    ("cat [file]", "Read file content"),
    ("close", "Close the file viewer"),
    ("sysinfo", "Show system information"),
    ("clear", "Clear screen"),
    ("help", "Show this list"),
];

pub(crate) fn run() -> CommandResult {
    let mut lines = vec![RenderedLine::text("AVAILABLE COMMANDS:")];
    lines.extend(
        HELP_COMMANDS
            .iter()
            .map(|(cmd, desc)| RenderedLine::text(format!("{:<12} {}", cmd, desc))),
    );
    Ok(lines)
}
