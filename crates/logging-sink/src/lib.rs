#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output side of the grouped console logger: a
//! [`LineSink`] that owns an [`std::io::Write`] implementor and emits whole,
//! newline-terminated lines, plus a [`SharedBuffer`] writer that lets tests and
//! embedding applications capture what a logger printed.
//!
//! # Design
//!
//! Every call to [`LineSink::write_line`] assembles the line and its terminator
//! in a scratch buffer that is reused across invocations and hands the result
//! to the writer with a single `write_all`. When the underlying writer is
//! line-atomic (stdout is, for writes below the pipe buffer size) concurrent
//! loggers therefore never interleave partial lines.
//!
//! # Invariants
//!
//! - Exactly one `\n` terminates every emitted line; the line body is written
//!   verbatim.
//! - The scratch buffer is reused so repeated writes avoid fresh allocations.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::LineSink;
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.write_line("📢 Test").unwrap();
//! sink.write_line("📢[Network] Test3").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "📢 Test\n📢[Network] Test3\n");
//! ```
//!
//! # See also
//!
//! - `grouped-logger` for the level, group and settings model that assembles
//!   the lines written here.

mod shared_buffer;
mod sink;

pub use shared_buffer::SharedBuffer;
pub use sink::LineSink;
