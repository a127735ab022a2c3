//! Default execution engine backed by `std::process`

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::args::split_arguments;
use crate::command::{BufferedCommand, CommandBuilder, CommandConfig, RawCommand};
use crate::error::{Error, Result};
use crate::pipes::{InputSource, OutputSink, SharedBuffer, SharedReader, SharedWriter};

use super::{ExecutionEngine, ExecutionResult};

/// Stateless engine that runs commands as local child processes.
///
/// Standard input sources are fed and non-trivial sinks drained from
/// dedicated threads, so a child that stops reading stdin or floods an
/// output pipe cannot deadlock the caller. Credentials other than the
/// default identity are rejected; this engine cannot impersonate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEngine;

impl ProcessEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for ProcessEngine {
    fn run_buffered(&self, command: &BufferedCommand) -> Result<ExecutionResult> {
        let config = command.config();
        run(
            config,
            StdinSpec::Source(&config.stdin),
            OutSpec::Sink(command.standard_output()),
            OutSpec::Sink(command.standard_error()),
        )
    }

    fn run_raw(&self, command: &RawCommand) -> Result<ExecutionResult> {
        let config = command.config();
        let stdin = if command.redirect_standard_input() {
            StdinSpec::Source(&config.stdin)
        } else {
            StdinSpec::Inherit
        };
        let stdout = if command.redirect_standard_output() {
            OutSpec::Null
        } else {
            OutSpec::Inherit
        };
        let stderr = if command.redirect_standard_error() {
            OutSpec::Null
        } else {
            OutSpec::Inherit
        };
        run(config, stdin, stdout, stderr)
    }
}

#[derive(Clone, Copy)]
enum StdinSpec<'a> {
    Inherit,
    Source(&'a InputSource),
}

#[derive(Clone, Copy)]
enum OutSpec<'a> {
    Inherit,
    Null,
    Sink(&'a OutputSink),
    /// Piped, with the handle left in place for a downstream command.
    Chain,
}

/// A spawned child plus the plumbing that must be joined once it exits.
struct Running {
    config: CommandConfig,
    child: Child,
    threads: Vec<JoinHandle<io::Result<()>>>,
    upstream: Option<Box<Running>>,
}

fn run(
    config: &CommandConfig,
    stdin: StdinSpec<'_>,
    stdout: OutSpec<'_>,
    stderr: OutSpec<'_>,
) -> Result<ExecutionResult> {
    let started = Instant::now();
    let running = spawn_node(config, stdin, stdout, stderr)?;
    let exit_code = finish(running)?;
    Ok(ExecutionResult {
        exit_code,
        run_time: started.elapsed(),
    })
}

fn spawn_node(
    config: &CommandConfig,
    stdin: StdinSpec<'_>,
    stdout: OutSpec<'_>,
    stderr: OutSpec<'_>,
) -> Result<Running> {
    if !config.credentials.is_default() {
        return Err(Error::UnsupportedCredentials);
    }

    let mut cmd = Command::new(&config.program);
    cmd.args(split_arguments(&config.arguments));
    cmd.current_dir(&config.working_dir);
    for (name, value) in &config.env {
        match value {
            Some(value) => {
                cmd.env(name, value);
            }
            None => {
                cmd.env_remove(name);
            }
        }
    }

    // An upstream command spawns first so its live stdout handle can become
    // this child's stdin.
    let mut upstream = None;
    match stdin {
        StdinSpec::Inherit => {
            cmd.stdin(Stdio::inherit());
        }
        StdinSpec::Source(source) => match source {
            InputSource::Null => {
                cmd.stdin(Stdio::null());
            }
            InputSource::Bytes(_) | InputSource::Reader(_) => {
                cmd.stdin(Stdio::piped());
            }
            InputSource::File(path) => {
                cmd.stdin(Stdio::from(File::open(path)?));
            }
            InputSource::Command(up) => {
                let mut running = spawn_node(
                    up.config(),
                    StdinSpec::Source(&up.config().stdin),
                    OutSpec::Chain,
                    OutSpec::Sink(up.standard_error()),
                )?;
                let out = running
                    .child
                    .stdout
                    .take()
                    .ok_or_else(|| io::Error::other("upstream stdout handle unavailable"))?;
                cmd.stdin(Stdio::from(out));
                upstream = Some(Box::new(running));
            }
        },
    }

    let (stdout_stdio, stdout_drain) = out_stdio(stdout)?;
    let (stderr_stdio, stderr_drain) = out_stdio(stderr)?;
    cmd.stdout(stdout_stdio);
    cmd.stderr(stderr_stdio);

    let mut child = cmd.spawn().map_err(|source| Error::Spawn {
        program: config.program.clone(),
        source,
    })?;
    tracing::debug!("spawned '{}' (pid {})", config, child.id());

    let mut threads = Vec::new();
    if let StdinSpec::Source(source) = stdin {
        match source {
            InputSource::Bytes(bytes) => {
                if let Some(handle) = child.stdin.take() {
                    let bytes = bytes.clone();
                    threads.push(thread::spawn(move || feed_bytes(handle, &bytes)));
                }
            }
            InputSource::Reader(reader) => {
                if let Some(handle) = child.stdin.take() {
                    let reader = Arc::clone(reader);
                    threads.push(thread::spawn(move || feed_reader(handle, &reader)));
                }
            }
            _ => {}
        }
    }
    if let Some(sink) = stdout_drain {
        if let Some(out) = child.stdout.take() {
            threads.push(thread::spawn(move || drain(out, &sink)));
        }
    }
    if let Some(sink) = stderr_drain {
        if let Some(err) = child.stderr.take() {
            threads.push(thread::spawn(move || drain(err, &sink)));
        }
    }

    Ok(Running {
        config: config.clone(),
        child,
        threads,
        upstream,
    })
}

/// Picks the `Stdio` for an output stream, returning the sink to drain from
/// a thread when the stream has to be piped.
fn out_stdio(spec: OutSpec<'_>) -> Result<(Stdio, Option<OutputSink>)> {
    match spec {
        OutSpec::Inherit => Ok((Stdio::inherit(), None)),
        OutSpec::Null => Ok((Stdio::null(), None)),
        OutSpec::Chain => Ok((Stdio::piped(), None)),
        OutSpec::Sink(sink) => match sink {
            OutputSink::Null => Ok((Stdio::null(), None)),
            OutputSink::File(path) => Ok((Stdio::from(File::create(path)?), None)),
            OutputSink::Buffer(_) | OutputSink::Writer(_) => {
                Ok((Stdio::piped(), Some(sink.clone())))
            }
        },
    }
}

/// Waits for the child, joins its stream threads, finishes any upstream
/// command, and applies the exit-code validation policy.
fn finish(mut running: Running) -> Result<i32> {
    let status = running.child.wait()?;
    for handle in running.threads {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => return Err(io::Error::other("stream pump thread panicked").into()),
        }
    }
    if let Some(upstream) = running.upstream.take() {
        finish(*upstream)?;
    }

    // A signal-terminated child has no exit code; report -1.
    let exit_code = status.code().unwrap_or(-1);
    tracing::debug!("'{}' exited with code {}", running.config, exit_code);

    if running.config.validation.is_zero_exit_code() && exit_code != 0 {
        return Err(Error::CommandFailed {
            exit_code,
            command: Box::new(running.config),
        });
    }
    Ok(exit_code)
}

/// Writes the whole buffer into the child's stdin, then closes it. A child
/// that stops reading early is not an error.
fn feed_bytes(mut stdin: ChildStdin, bytes: &[u8]) -> io::Result<()> {
    match stdin.write_all(bytes) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Pumps the shared reader into the child's stdin until exhaustion or until
/// the child stops reading.
fn feed_reader(mut stdin: ChildStdin, reader: &SharedReader) -> io::Result<()> {
    let mut reader = reader
        .lock()
        .map_err(|_| io::Error::other("stdin reader lock poisoned"))?;
    match io::copy(&mut *reader, &mut stdin) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e),
        Ok(_) => Ok(()),
    }
}

/// Drains a piped output stream into its sink.
fn drain(reader: impl Read, sink: &OutputSink) -> io::Result<()> {
    match sink {
        OutputSink::Buffer(buffer) => drain_to_buffer(reader, buffer),
        OutputSink::Writer(writer) => drain_to_writer(reader, writer),
        // Null and File never reach a drain thread.
        _ => Ok(()),
    }
}

fn drain_to_buffer(mut reader: impl Read, buffer: &SharedBuffer) -> io::Result<()> {
    let mut chunk = [0u8; 8192];
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            return Ok(());
        }
        buffer
            .lock()
            .map_err(|_| io::Error::other("output buffer lock poisoned"))?
            .extend_from_slice(&chunk[..n]);
    }
}

fn drain_to_writer(mut reader: impl Read, writer: &SharedWriter) -> io::Result<()> {
    let mut writer = writer
        .lock()
        .map_err(|_| io::Error::other("output writer lock poisoned"))?;
    io::copy(&mut reader, &mut *writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use crate::command::Commander;
    use crate::credentials::Credentials;

    use super::*;

    #[test]
    fn custom_credentials_are_rejected_before_spawning() {
        let cmd = Commander::wrap("definitely-not-a-real-program")
            .with_credentials(Credentials {
                username: Some("svc".to_string()),
                ..Credentials::default()
            })
            .to_buffered();

        assert!(matches!(
            ProcessEngine::new().run_buffered(&cmd),
            Err(Error::UnsupportedCredentials)
        ));
    }

    #[test]
    fn spawn_failures_name_the_program() {
        let cmd = Commander::wrap("commandeer-test-no-such-program").to_buffered();
        match ProcessEngine::new().run_buffered(&cmd) {
            Err(Error::Spawn { program, .. }) => {
                assert_eq!(program, "commandeer-test-no-such-program");
            }
            other => panic!("expected a spawn error, got {other:?}"),
        }
    }

    #[test]
    fn a_file_sink_is_created_eagerly() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sink.log");

        let (stdio, drain) = out_stdio(OutSpec::Sink(&OutputSink::to_file(path.clone()))).unwrap();
        drop(stdio);
        assert!(drain.is_none());
        assert!(path.exists());
    }

    #[test]
    fn a_missing_input_file_fails_before_spawning() {
        let cmd = Commander::wrap("commandeer-test-no-such-program")
            .with_standard_input(InputSource::from_file("no-such-input-file.txt"))
            .to_buffered();

        assert!(matches!(
            ProcessEngine::new().run_buffered(&cmd),
            Err(Error::Io(_))
        ));
    }
}
