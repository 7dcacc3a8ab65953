#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `grouped-log` command-line front-end. It prints its
//! message operands, or every line of standard input, as grouped log lines
//! through a [`grouped_logger::Logger`]:
//!
//! ```text
//! $ grouped-log --level emergency --group Coordinator --timestamp Test4
//! 🚒[18:42:07][Coordinator] Test4
//! ```
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts an
//! iterator of arguments together with handles for standard output and error,
//! so the binary and the tests drive exactly the same code. A
//! [`clap`](https://docs.rs/clap/) builder command parses the arguments;
//! settings are resolved from the environment, an optional JSON settings file
//! and the flags, in that order of increasing precedence. [`run_with_input`]
//! additionally takes the reader consulted when no message operands are given.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Message operands are joined with single spaces into one log line.
//! - Without operands, each input line becomes one log line.
//!
//! # Errors
//!
//! Usage errors are rendered by clap on standard error. Every other failure is
//! written as `grouped-log: <error>`. Exit codes are [`EXIT_SUCCESS`],
//! [`EXIT_USAGE`] for invalid arguments or settings, and [`EXIT_IO`] when
//! standard input cannot be read or standard output cannot be written.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(
//!     ["grouped-log", "--no-symbols", "--level", "success", "Hello", "World"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b"[Success] Hello World\n");
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - [`grouped_logger`] for the line format and settings model.
//! - `src/bin/grouped-log.rs` for the binary that wires [`run`] into `main`.

mod arguments;
mod error;
mod settings;

use std::env;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use grouped_logger::Logger;

use crate::arguments::{PROGRAM_NAME, ParsedArgs, parse_args, render_help, render_version};
pub use crate::error::{CliError, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};
use crate::settings::resolve_settings;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Standard input is read when no message operands are given. Returns the
/// process exit code.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run_with_input(arguments, io::stdin().lock(), stdout, stderr)
}

/// Runs the CLI reading message lines from `input` instead of standard input.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    input: In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: BufRead,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => return report(&CliError::from(error), stderr),
    };

    if parsed.show_help {
        return write_banner(&render_help(), stdout);
    }
    if parsed.show_version {
        return write_banner(&render_version(), stdout);
    }

    let result = if parsed.trace {
        execute_traced(&parsed, input, stdout, stderr)
    } else {
        execute(&parsed, input, stdout)
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => report(&error, stderr),
    }
}

fn execute<In, Out>(parsed: &ParsedArgs, input: In, stdout: &mut Out) -> Result<(), CliError>
where
    In: BufRead,
    Out: Write,
{
    let settings = resolve_settings(parsed, |name| env::var_os(name))?;
    let logger = Logger::with_writer(stdout).with_settings(settings);
    let group = parsed.group.as_ref();

    if let Some(message) = parsed.message() {
        logger.try_print(&message, parsed.level, group)?;
        return Ok(());
    }

    let mut count = 0_usize;
    for line in input.lines() {
        let line = line.map_err(CliError::Input)?;
        logger.try_print(&line, parsed.level, group)?;
        count += 1;
    }
    tracing::debug!(group = "Input", lines = count, "standard input exhausted");
    Ok(())
}

/// Runs [`execute`] with a tracing layer collecting diagnostics, then copies
/// them to `stderr`.
#[cfg(feature = "tracing")]
fn execute_traced<In, Out, Err>(
    parsed: &ParsedArgs,
    input: In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> Result<(), CliError>
where
    In: BufRead,
    Out: Write,
    Err: Write,
{
    use std::sync::Arc;

    use grouped_logger::GroupedLayer;
    use logging_sink::SharedBuffer;
    use tracing_subscriber::layer::SubscriberExt;

    let diagnostics = SharedBuffer::new();
    let layer = GroupedLayer::new(Arc::new(Logger::with_writer(diagnostics.clone())));
    let subscriber = tracing_subscriber::registry().with(layer);

    let result = tracing::subscriber::with_default(subscriber, || execute(parsed, input, stdout));
    let _ = stderr.write_all(&diagnostics.contents());
    result
}

#[cfg(not(feature = "tracing"))]
fn execute_traced<In, Out, Err>(
    parsed: &ParsedArgs,
    input: In,
    stdout: &mut Out,
    _stderr: &mut Err,
) -> Result<(), CliError>
where
    In: BufRead,
    Out: Write,
    Err: Write,
{
    execute(parsed, input, stdout)
}

fn write_banner<Out: Write>(text: &str, stdout: &mut Out) -> i32 {
    if stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()).is_err() {
        return EXIT_IO;
    }
    EXIT_SUCCESS
}

fn report<Err: Write>(error: &CliError, stderr: &mut Err) -> i32 {
    let _ = match error {
        CliError::Usage(usage) => write!(stderr, "{}", usage.render()),
        other => writeln!(stderr, "{PROGRAM_NAME}: {other}"),
    };
    error.exit_code()
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}
