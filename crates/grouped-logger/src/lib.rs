#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/grouped-logger/src/lib.rs
//!
//! # Overview
//!
//! `grouped_logger` prints human-readable console lines decorated with a
//! severity [`Level`], an optional named [`Group`] and an optional timestamp:
//!
//! ```text
//! 📢 Test
//! 📢[Network] Test3
//! 🚒[18:42:07][Coordinator] Test4
//! [Success] Hello World
//! ```
//!
//! # Design
//!
//! The crate is split into a configuration model and the [`Logger`]:
//!
//! - [`Level`] is a closed set of nine severities, each with a glyph and a
//!   textual tag. Levels never filter output.
//! - [`Group`] is an open set of named tags with five built-ins.
//! - [`Settings`] bundles a [`Timestamp`] mode (disabled, or enabled with a
//!   [`TimestampFormatter`]) and a [`SymbolMode`].
//! - [`Logger`] holds one `Settings` value, assembles lines with
//!   [`render_line`] and writes them through a [`logging_sink::LineSink`].
//!   [`Logger::shared`] is the process-wide instance writing to stdout.
//!
//! # Invariants
//!
//! - Segments are always emitted in the order level decoration, timestamp,
//!   group, then a single space and the verbatim content.
//! - A print call observes one complete `Settings` value, never a mix of the
//!   values before and after a concurrent [`Logger::set_settings`].
//! - Group names are never blank.
//!
//! # Errors
//!
//! Printing never fails from the caller's point of view. [`Logger::try_print`]
//! surfaces [`LoggerError::Write`] for callers that need to know when the
//! output stream is closed. Building settings from text reports
//! [`SettingsError`].
//!
//! # Examples
//!
//! ```
//! use grouped_logger::{Group, Level, Settings, TimestampFormatter};
//!
//! let log = grouped_logger::shared();
//! log.debug("Test", None);
//! log.print("Test3", Level::Debug, Some(&Group::NETWORK));
//!
//! log.set_settings(Settings::new(TimestampFormatter::clock_time().into()));
//! log.emergency("Test4", Some(&Group::COORDINATOR));
//! # log.set_settings(Settings::default());
//! ```
//!
//! # Features
//!
//! - `serde`: serialization for [`Level`], [`Group`], [`SymbolMode`] and
//!   [`SettingsConfig`].
//! - `tracing`: `GroupedLayer`, a tracing-subscriber layer that prints
//!   tracing events through a logger, and `init_tracing`.

mod clock;
mod config;
mod error;
mod group;
mod level;
mod line;
mod logger;
mod settings;
mod timestamp;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{SYMBOLS_ENV, SettingsConfig, TIMESTAMP_ENV};
pub use error::{LoggerError, LoggerResult, SettingsError};
pub use group::{Group, GroupNameError};
pub use level::{Level, LevelParseError};
pub use line::render_line;
pub use logger::Logger;
pub use settings::{Settings, SymbolMode};
pub use timestamp::{CLOCK_TIME_DESCRIPTION, Timestamp, TimestampFormatter};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{GroupedLayer, init_tracing};

/// Returns the process-wide logger; shorthand for [`Logger::shared`].
pub fn shared() -> &'static Logger {
    Logger::shared()
}

/// Replaces the settings of the process-wide logger.
pub fn set_settings(settings: Settings) {
    Logger::shared().set_settings(settings);
}
