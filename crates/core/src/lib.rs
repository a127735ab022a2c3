//! commandeer - immutable command configuration and composition
//!
//! This crate provides functionality to:
//! - Describe a process invocation as an immutable value (program, arguments,
//!   working directory, credentials, environment, stdin source, exit-code
//!   validation policy)
//! - Materialize the description as a buffered command (output captured
//!   through sinks) or a raw command (streams inherited from the parent)
//! - Pipe bytes, strings, files, readers, or another command's output into a
//!   command's standard input
pub mod args;
pub mod command;
pub mod credentials;
pub mod env;
pub mod error;
pub mod exec;
pub mod pipes;
pub mod validation;

// Re-export commonly used types and traits
pub use args::ArgumentsBuilder;
pub use command::{BufferedCommand, CommandBuilder, CommandConfig, Commander, RawCommand};
pub use credentials::{Credentials, CredentialsBuilder};
pub use env::{EnvVars, EnvironmentBuilder};
pub use error::{Error, Result};
pub use exec::{ExecutionEngine, ExecutionResult, ProcessEngine};
pub use pipes::{InputSource, OutputSink};
pub use validation::ValidationPolicy;

/// Creates a new unified command targeting the specified command-line
/// executable, batch file, or script.
pub fn wrap(program: impl Into<String>) -> Commander {
    Commander::wrap(program)
}
