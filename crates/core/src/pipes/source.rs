use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::command::BufferedCommand;

/// Shared handle to a live reader that will feed a child's standard input.
pub type SharedReader = Arc<Mutex<dyn Read + Send>>;

/// Where the bytes for a command's standard input originate.
#[derive(Clone, Default)]
pub enum InputSource {
    /// No data; the child sees end-of-file immediately.
    #[default]
    Null,
    /// An in-memory buffer, written in full and then closed.
    Bytes(Vec<u8>),
    /// A file, read until exhaustion.
    File(PathBuf),
    /// A live reader, pumped until exhaustion.
    Reader(SharedReader),
    /// The standard output of another command, run concurrently.
    Command(Box<BufferedCommand>),
}

impl InputSource {
    /// The empty source.
    pub fn null() -> Self {
        InputSource::Null
    }

    /// Source reading from an in-memory byte buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        InputSource::Bytes(bytes.into())
    }

    /// Source reading the UTF-8 encoding of a string. Byte-equivalent to
    /// [`InputSource::from_bytes`] on the same text.
    pub fn from_string(text: impl Into<String>) -> Self {
        InputSource::Bytes(text.into().into_bytes())
    }

    /// Source reading a file until exhaustion.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        InputSource::File(path.into())
    }

    /// Source pumping a live reader until exhaustion.
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        InputSource::Reader(Arc::new(Mutex::new(reader)))
    }

    /// Source reading the live standard output of another command.
    pub fn from_command(command: BufferedCommand) -> Self {
        InputSource::Command(Box::new(command))
    }
}

impl PartialEq for InputSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (InputSource::Null, InputSource::Null) => true,
            (InputSource::Bytes(a), InputSource::Bytes(b)) => a == b,
            (InputSource::File(a), InputSource::File(b)) => a == b,
            (InputSource::Reader(a), InputSource::Reader(b)) => Arc::ptr_eq(a, b),
            (InputSource::Command(a), InputSource::Command(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Null => f.write_str("Null"),
            InputSource::Bytes(bytes) => f.debug_struct("Bytes").field("len", &bytes.len()).finish(),
            InputSource::File(path) => f.debug_tuple("File").field(path).finish(),
            InputSource::Reader(_) => f.write_str("Reader(..)"),
            InputSource::Command(command) => f.debug_tuple("Command").field(command).finish(),
        }
    }
}

impl From<&str> for InputSource {
    fn from(text: &str) -> Self {
        InputSource::from_string(text)
    }
}

impl From<String> for InputSource {
    fn from(text: String) -> Self {
        InputSource::from_string(text)
    }
}

impl From<&[u8]> for InputSource {
    fn from(bytes: &[u8]) -> Self {
        InputSource::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for InputSource {
    fn from(bytes: Vec<u8>) -> Self {
        InputSource::Bytes(bytes)
    }
}

impl From<BufferedCommand> for InputSource {
    fn from(command: BufferedCommand) -> Self {
        InputSource::from_command(command)
    }
}
