use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory buffer a sink appends to.
pub type SharedBuffer = Arc<Mutex<Vec<u8>>>;

/// Shared handle to a live writer a sink forwards to.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Where a command's standard output or standard error bytes are delivered.
#[derive(Clone, Default)]
pub enum OutputSink {
    /// Bytes are discarded.
    #[default]
    Null,
    /// Bytes are appended to a shared in-memory buffer.
    Buffer(SharedBuffer),
    /// Bytes are forwarded to a live writer.
    Writer(SharedWriter),
    /// Bytes are written to a file, created fresh on each run.
    File(PathBuf),
}

impl OutputSink {
    /// The discarding sink.
    pub fn null() -> Self {
        OutputSink::Null
    }

    /// Sink appending to a shared in-memory buffer the caller keeps.
    pub fn to_buffer(buffer: SharedBuffer) -> Self {
        OutputSink::Buffer(buffer)
    }

    /// Sink forwarding to a live writer.
    pub fn to_writer(writer: impl Write + Send + 'static) -> Self {
        OutputSink::Writer(Arc::new(Mutex::new(writer)))
    }

    /// Sink writing to a file.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        OutputSink::File(path.into())
    }

    /// Whether this sink discards everything written to it.
    pub fn is_null(&self) -> bool {
        matches!(self, OutputSink::Null)
    }
}

impl PartialEq for OutputSink {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OutputSink::Null, OutputSink::Null) => true,
            (OutputSink::Buffer(a), OutputSink::Buffer(b)) => Arc::ptr_eq(a, b),
            (OutputSink::Writer(a), OutputSink::Writer(b)) => Arc::ptr_eq(a, b),
            (OutputSink::File(a), OutputSink::File(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Null => f.write_str("Null"),
            OutputSink::Buffer(_) => f.write_str("Buffer(..)"),
            OutputSink::Writer(_) => f.write_str("Writer(..)"),
            OutputSink::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}
