//! crates/logging-sink/src/shared_buffer.rs
//! Cloneable in-memory writer for capturing logger output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory writer whose clones all append to the same buffer.
///
/// A logger takes ownership of its writer, so handing it a `SharedBuffer`
/// clone keeps a second handle around for reading back what was printed.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineSink, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let mut sink = LineSink::new(buffer.clone());
/// sink.write_line("✅ done").unwrap();
///
/// assert_eq!(buffer.lines(), ["✅ done"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured bytes.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured bytes decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Returns the captured output split into lines without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.to_string_lossy().lines().map(str::to_owned).collect()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
