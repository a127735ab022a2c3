use std::fmt;

use crate::error::Result;
use crate::exec::{ExecutionEngine, ExecutionResult, ProcessEngine};
use crate::pipes::OutputSink;

use super::builder::CommandBuilder;
use super::config::CommandConfig;

/// Command whose standard output and standard error are captured through
/// in-process sinks, for programmatic consumption of the output.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferedCommand {
    config: CommandConfig,
    stdout: OutputSink,
    stderr: OutputSink,
}

impl BufferedCommand {
    /// Creates a new buffered command targeting the specified executable,
    /// with both sinks discarding.
    pub fn wrap(program: impl Into<String>) -> Self {
        Self::from_config(CommandConfig::new(program))
    }

    /// Wraps an existing configuration; both sinks start discarding.
    pub fn from_config(config: CommandConfig) -> Self {
        Self {
            config,
            stdout: OutputSink::Null,
            stderr: OutputSink::Null,
        }
    }

    /// Consumes the command, returning its shared configuration.
    pub fn into_config(self) -> CommandConfig {
        self.config
    }

    /// Sink receiving the child's standard output.
    pub fn standard_output(&self) -> &OutputSink {
        &self.stdout
    }

    /// Sink receiving the child's standard error.
    pub fn standard_error(&self) -> &OutputSink {
        &self.stderr
    }

    /// Copy with a different standard output sink.
    pub fn with_standard_output(self, sink: OutputSink) -> Self {
        Self {
            stdout: sink,
            ..self
        }
    }

    /// Copy with a different standard error sink.
    pub fn with_standard_error(self, sink: OutputSink) -> Self {
        Self {
            stderr: sink,
            ..self
        }
    }

    /// Runs this command on a fresh [`ProcessEngine`].
    pub fn execute(&self) -> Result<ExecutionResult> {
        ProcessEngine::new().run_buffered(self)
    }
}

impl CommandBuilder for BufferedCommand {
    fn config(&self) -> &CommandConfig {
        &self.config
    }

    fn map_config(self, f: impl FnOnce(CommandConfig) -> CommandConfig) -> Self {
        Self {
            config: f(self.config),
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }
}

impl fmt::Display for BufferedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.config, f)
    }
}
