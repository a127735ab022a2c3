use std::fmt;

use crate::error::Result;
use crate::exec::{ExecutionEngine, ExecutionResult, ProcessEngine};

use super::builder::CommandBuilder;
use super::config::CommandConfig;

/// Command whose standard streams stay attached to the parent's console
/// unless explicitly redirected, for interactive or passthrough execution.
///
/// "Redirect off" means the stream is inherited from the parent process.
/// Redirecting standard input makes the engine feed it from the configured
/// source; redirecting an output stream hands it to the engine, which
/// silently discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    config: CommandConfig,
    redirect_stdin: bool,
    redirect_stdout: bool,
    redirect_stderr: bool,
}

impl RawCommand {
    /// Creates a new raw command targeting the specified executable: stdin
    /// redirected from the (initially empty) source, output inherited.
    pub fn wrap(program: impl Into<String>) -> Self {
        Self::from_config(CommandConfig::new(program))
    }

    /// Wraps an existing configuration with the default redirect flags.
    pub fn from_config(config: CommandConfig) -> Self {
        Self {
            config,
            redirect_stdin: true,
            redirect_stdout: false,
            redirect_stderr: false,
        }
    }

    /// Consumes the command, returning its shared configuration.
    pub fn into_config(self) -> CommandConfig {
        self.config
    }

    /// Whether standard input is fed from the configured source rather than
    /// inherited from the parent's console.
    pub fn redirect_standard_input(&self) -> bool {
        self.redirect_stdin
    }

    /// Whether standard output is owned (and discarded) by the engine rather
    /// than inherited.
    pub fn redirect_standard_output(&self) -> bool {
        self.redirect_stdout
    }

    /// Whether standard error is owned (and discarded) by the engine rather
    /// than inherited.
    pub fn redirect_standard_error(&self) -> bool {
        self.redirect_stderr
    }

    /// Copy with standard input redirection toggled.
    pub fn with_standard_input_redirect(self, redirect: bool) -> Self {
        Self {
            redirect_stdin: redirect,
            ..self
        }
    }

    /// Copy with standard output redirected to the null device.
    pub fn with_standard_output_to_null(self) -> Self {
        Self {
            redirect_stdout: true,
            ..self
        }
    }

    /// Copy with standard error redirected to the null device.
    pub fn with_standard_error_to_null(self) -> Self {
        Self {
            redirect_stderr: true,
            ..self
        }
    }

    /// Copy with all output redirected to the null device.
    pub fn with_hidden_output(self) -> Self {
        Self {
            redirect_stdout: true,
            redirect_stderr: true,
            ..self
        }
    }

    /// Runs this command on a fresh [`ProcessEngine`].
    pub fn execute(&self) -> Result<ExecutionResult> {
        ProcessEngine::new().run_raw(self)
    }
}

impl CommandBuilder for RawCommand {
    fn config(&self) -> &CommandConfig {
        &self.config
    }

    fn map_config(self, f: impl FnOnce(CommandConfig) -> CommandConfig) -> Self {
        Self {
            config: f(self.config),
            redirect_stdin: self.redirect_stdin,
            redirect_stdout: self.redirect_stdout,
            redirect_stderr: self.redirect_stderr,
        }
    }
}

impl fmt::Display for RawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.config, f)
    }
}
