//! crates/grouped-logger/src/error.rs
//!
//! Error types for settings construction and line emission.

use std::io;

use thiserror::Error;

/// Result type for fallible logger operations.
pub type LoggerResult<T> = Result<T, LoggerError>;

/// Errors raised while building [`Settings`](crate::Settings) from textual configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A timestamp format description failed to parse.
    #[error("invalid timestamp format description '{description}': {source}")]
    InvalidTimestampFormat {
        /// The rejected description.
        description: String,
        /// Parser diagnostic.
        #[source]
        source: time::error::InvalidFormatDescription,
    },
}

/// Errors surfaced by the fallible logger entry points.
///
/// The plain printing methods never return errors; [`Logger::try_print`]
/// reports the write failure they would otherwise drop.
///
/// [`Logger::try_print`]: crate::Logger::try_print
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Writing the assembled line to the output sink failed.
    #[error("failed to write log line: {0}")]
    Write(
        #[from]
        #[source]
        io::Error,
    ),
    /// Settings could not be built.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::error::Error as _;

    #[test]
    fn write_error_from_std_io_error() {
        let io_err = io::Error::new(ErrorKind::BrokenPipe, "stdout closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::Write(_)));
        assert!(err.to_string().contains("failed to write log line"));
        assert!(err.to_string().contains("stdout closed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn settings_error_is_transparent() {
        let settings_err = crate::TimestampFormatter::from_description("[nope]").unwrap_err();
        let rendered = settings_err.to_string();
        let err: LoggerError = settings_err.into();

        assert!(matches!(err, LoggerError::Settings(_)));
        assert_eq!(err.to_string(), rendered);
        assert!(rendered.contains("[nope]"));
    }
}
