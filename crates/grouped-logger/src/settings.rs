//! crates/grouped-logger/src/settings.rs
//! Decoration settings applied to every assembled line.

use crate::timestamp::Timestamp;

/// Whether levels render as glyphs or as bracketed textual tags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolMode {
    /// Render `[Tag]`.
    Disabled,
    /// Render the level glyph without brackets.
    #[default]
    Enabled,
}

impl SymbolMode {
    /// Reports whether glyphs are rendered.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for SymbolMode {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl From<SymbolMode> for bool {
    fn from(mode: SymbolMode) -> Self {
        mode.is_enabled()
    }
}

/// Immutable decoration configuration: timestamp mode plus symbol mode.
///
/// A [`Logger`](crate::Logger) holds exactly one `Settings` value at a time and
/// replaces it wholesale on [`set_settings`](crate::Logger::set_settings).
///
/// ```
/// use grouped_logger::{Settings, SymbolMode, Timestamp, TimestampFormatter};
///
/// let defaults = Settings::default();
/// assert!(!defaults.timestamp().is_enabled());
/// assert_eq!(defaults.symbols(), SymbolMode::Enabled);
///
/// let stamped = Settings::new(TimestampFormatter::clock_time().into());
/// assert!(stamped.timestamp().is_enabled());
/// assert_eq!(stamped.symbols(), SymbolMode::Enabled);
///
/// let plain = Settings::with_symbols(Timestamp::Disabled, SymbolMode::Disabled);
/// assert_eq!(plain.symbols(), SymbolMode::Disabled);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Settings {
    timestamp: Timestamp,
    symbols: SymbolMode,
}

impl Settings {
    /// Settings with the given timestamp mode and symbols enabled.
    #[must_use]
    pub fn new(timestamp: Timestamp) -> Self {
        Self::with_symbols(timestamp, SymbolMode::Enabled)
    }

    /// Settings with explicit timestamp and symbol modes.
    #[must_use]
    pub const fn with_symbols(timestamp: Timestamp, symbols: SymbolMode) -> Self {
        Self { timestamp, symbols }
    }

    /// The timestamp mode.
    #[must_use]
    pub const fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// The symbol mode.
    #[must_use]
    pub const fn symbols(&self) -> SymbolMode {
        self.symbols
    }
}
