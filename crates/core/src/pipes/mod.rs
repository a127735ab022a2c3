//! Stdin sources and stdout/stderr sinks
//!
//! These are descriptions, not live connections: the execution engine turns
//! them into actual pipes when a command is run.

mod sink;
mod source;

pub use sink::{OutputSink, SharedBuffer, SharedWriter};
pub use source::{InputSource, SharedReader};
