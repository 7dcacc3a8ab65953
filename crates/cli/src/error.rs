//! crates/cli/src/error.rs
//! Failures reported by the command-line front-end.

use std::io;
use std::path::PathBuf;

use grouped_logger::{LoggerError, SettingsError};
use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for invalid arguments, settings or settings files.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for I/O failures on standard input or standard output.
pub const EXIT_IO: i32 = 2;

/// Errors surfaced by [`run`](crate::run).
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The resolved settings were invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A settings file could not be read.
    #[error("failed to read settings file '{}': {source}", path.display())]
    ConfigRead {
        /// Path given to `--config`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A settings file was not valid JSON or had unknown fields.
    #[cfg(feature = "serde")]
    #[error("invalid settings file '{}': {source}", path.display())]
    ConfigParse {
        /// Path given to `--config`.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// `--config` was given to a build without settings file support.
    #[cfg(not(feature = "serde"))]
    #[error("cannot load settings file '{}': built without the serde feature", path.display())]
    ConfigUnsupported {
        /// Path given to `--config`.
        path: PathBuf,
    },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    Input(#[source] io::Error),

    /// A log line could not be written.
    #[error(transparent)]
    Log(#[from] LoggerError),
}

impl CliError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::Log(LoggerError::Write(_)) => EXIT_IO,
            _ => EXIT_USAGE,
        }
    }
}
