//! Command representations and their shared configuration
//!
//! A command starts life as a [`Commander`], which carries the full immutable
//! configuration but defers the choice of output handling. Converting it with
//! [`Commander::to_buffered`] or [`Commander::to_raw`] commits to one of the
//! two concrete execution styles.

mod buffered;
mod builder;
mod commander;
mod config;
mod pipe_ops;
mod raw;

pub use buffered::BufferedCommand;
pub use builder::CommandBuilder;
pub use commander::Commander;
pub use config::CommandConfig;
pub use raw::RawCommand;
