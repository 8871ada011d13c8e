use thiserror::Error;

/// Unified error type for relcut operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Command '{program}' failed: {detail}")]
    Command { program: String, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    /// A guard refused the release before any mutation took place.
    /// The payload is the exact message shown to the operator.
    #[error("{0}")]
    Refused(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in relcut
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a command error with context
    pub fn command(program: impl Into<String>, detail: impl Into<String>) -> Self {
        ReleaseError::Command {
            program: program.into(),
            detail: detail.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }
}
