use thiserror::Error;

/// Non-fatal command failures. Each one renders as a single error line in
/// the scrollback and leaves the session otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A path resolved to no node, or to the wrong kind of node.
    #[error("{0}")]
    NotFound(String),
    /// A required argument was missing.
    #[error("{0}")]
    InvalidArgument(String),
    /// The first token named no built-in.
    #[error("Command not found: {0}")]
    UnknownCommand(String),
}
