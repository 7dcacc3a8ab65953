use std::fmt;
use std::io::{self, Write};

/// Streaming sink that writes newline-terminated lines into an [`io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch buffer.
/// Each call to [`write_line`](Self::write_line) copies the line and its
/// terminator into the scratch buffer and forwards it with one
/// [`write_all`](Write::write_all) followed by a flush, so the writer observes
/// each line as a single request.
///
/// # Examples
///
/// ```
/// use logging_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("[Debug] Hello")?;
/// assert_eq!(sink.get_ref().as_slice(), b"[Debug] Hello\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineSink<W> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W> LineSink<W> {
    /// Creates a sink that writes into `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<io::Stdout> {
    /// Creates a sink bound to the process' standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes `line` followed by a single `\n` and flushes the writer.
    ///
    /// The line is emitted verbatim. Callers that pass text containing its own
    /// newline characters get exactly that text plus one terminator.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.scratch.clear();
        self.scratch.reserve(line.len() + 1);
        self.scratch.extend_from_slice(line.as_bytes());
        self.scratch.push(b'\n');

        self.writer.write_all(&self.scratch)?;
        self.writer.flush()
    }
}
