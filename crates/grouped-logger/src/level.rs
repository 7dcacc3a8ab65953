//! crates/grouped-logger/src/level.rs
//! Severity levels and their two display representations.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity attached to a single log line.
///
/// Levels are purely descriptive: every level is always emitted and the
/// variants carry no ordering semantics. Each level renders either as a glyph
/// ([`Level::glyph`]) or as a textual tag ([`Level::tag`]) depending on the
/// active [`SymbolMode`](crate::SymbolMode).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Developer diagnostics. The level used when none is given.
    #[default]
    Debug,
    /// Informational messages.
    Info,
    /// Normal but significant conditions.
    Notice,
    /// Conditions that deserve attention.
    Warning,
    /// Failed operations.
    Error,
    /// Critical conditions.
    Critical,
    /// Conditions requiring immediate action.
    Alert,
    /// The system is unusable.
    Emergency,
    /// Completed operations.
    Success,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
        Self::Success,
    ];

    /// Glyph rendered when symbol mode is enabled.
    ///
    /// ```
    /// use grouped_logger::Level;
    ///
    /// assert_eq!(Level::Debug.glyph(), "📢");
    /// assert_eq!(Level::Success.glyph(), "✅");
    /// ```
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Debug => "\u{1F4E2}",           // 📢
            Self::Info => "\u{2139}\u{FE0F}",     // ℹ️
            Self::Notice => "\u{1F536}",          // 🔶
            Self::Warning => "\u{26A0}\u{FE0F}",  // ⚠️
            Self::Error => "\u{274C}",            // ❌
            Self::Critical => "\u{2757}\u{FE0F}", // ❗️
            Self::Alert => "\u{1F6A8}",           // 🚨
            Self::Emergency => "\u{1F692}",       // 🚒
            Self::Success => "\u{2705}",          // ✅
        }
    }

    /// Textual tag rendered, inside square brackets, when symbol mode is disabled.
    ///
    /// ```
    /// use grouped_logger::Level;
    ///
    /// assert_eq!(Level::Emergency.tag(), "Emergency");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Notice => "Notice",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
            Self::Alert => "Alert",
            Self::Emergency => "Emergency",
            Self::Success => "Success",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing a [`Level`] from an unrecognised string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level '{input}'; expected one of debug, info, notice, warning, error, critical, alert, emergency, success")]
pub struct LevelParseError {
    input: String,
}

impl LevelParseError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    /// Parses a level tag, ignoring ASCII case and surrounding whitespace.
    ///
    /// `warn` is accepted as an alias of [`Level::Warning`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("warn") {
            return Ok(Self::Warning);
        }

        Self::ALL
            .into_iter()
            .find(|level| level.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LevelParseError {
                input: s.to_owned(),
            })
    }
}
