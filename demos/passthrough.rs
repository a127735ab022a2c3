//! Run a command with its streams attached straight to this terminal.

use anyhow::Result;
use commandeer::{CommandBuilder, ValidationPolicy, wrap};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let result = wrap("git")
        .with_arguments(["status", "--short"])?
        .with_validation(ValidationPolicy::None)
        .to_raw(false)
        .execute()?;

    println!("git exited with {}", result.exit_code);
    Ok(())
}
