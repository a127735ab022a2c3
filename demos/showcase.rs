//! Walk through building, piping, and executing a buffered command.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use commandeer::{OutputSink, wrap};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let buffer = Arc::new(Mutex::new(Vec::new()));
    let cmd = ("cherry\napple\nbanana\n" | wrap("sort"))
        .to_buffered()
        .with_standard_output(OutputSink::to_buffer(buffer.clone()));

    println!("running: {cmd}");
    let result = cmd.execute()?;
    println!("exit code {} after {:?}", result.exit_code, result.run_time);
    print!("{}", String::from_utf8_lossy(&buffer.lock().unwrap()));
    Ok(())
}
