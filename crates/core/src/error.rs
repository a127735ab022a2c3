use std::io;

use crate::command::CommandConfig;

/// Errors that can occur while composing or running commands
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Command '{command}' exited with code {exit_code}")]
    CommandFailed {
        exit_code: i32,
        /// Snapshot of the configuration that produced the failure.
        command: Box<CommandConfig>,
    },

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Custom credentials are not supported by this engine")]
    UnsupportedCredentials,
}

impl Error {
    /// Exit code carried by the error, if it came from a completed process.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

/// Result type alias for commandeer operations
pub type Result<T> = std::result::Result<T, Error>;
