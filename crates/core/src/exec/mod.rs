//! Execution contract between the configuration layer and the engine
//!
//! The configuration layer never spawns processes itself; it hands a
//! complete, immutable command to an [`ExecutionEngine`]. The default
//! engine is [`ProcessEngine`]; tests can substitute a fake to observe the
//! exact configuration submitted.

mod process;

pub use process::ProcessEngine;

use std::time::Duration;

use crate::command::{BufferedCommand, RawCommand};
use crate::error::Result;

/// Outcome of a completed, policy-validated invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code reported by the child process. Reported even when the
    /// validation policy accepted a non-zero code.
    pub exit_code: i32,
    /// Wall-clock time between spawn and exit.
    pub run_time: Duration,
}

impl ExecutionResult {
    /// Whether the child exited with code zero.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Narrow interface to the process-execution collaborator: spawn the
/// configured child, pump the configured streams, classify the exit code.
pub trait ExecutionEngine {
    /// Runs a command whose output is captured through its sinks.
    fn run_buffered(&self, command: &BufferedCommand) -> Result<ExecutionResult>;

    /// Runs a command whose standard streams follow its redirect flags.
    fn run_raw(&self, command: &RawCommand) -> Result<ExecutionResult>;
}
