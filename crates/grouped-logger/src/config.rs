//! crates/grouped-logger/src/config.rs
//! Textual settings configuration, loadable from the environment or (with the
//! `serde` feature) from settings files.

use std::env;
use std::ffi::OsString;

use crate::error::SettingsError;
use crate::settings::{Settings, SymbolMode};
use crate::timestamp::{Timestamp, TimestampFormatter};

/// Environment variable holding a timestamp format description. Unset or
/// blank disables timestamps.
pub const TIMESTAMP_ENV: &str = "GROUPED_LOGGER_TIMESTAMP";

/// Environment variable toggling glyphs. `0`, `no`, `false` and `off`
/// (any case) disable them; any other value enables them.
pub const SYMBOLS_ENV: &str = "GROUPED_LOGGER_SYMBOLS";

/// Serializable description of a [`Settings`] value.
///
/// The timestamp formatter is stored as a `time` format description string
/// (for example `[hour]:[minute]:[second]`) so the configuration can live in
/// files and environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SettingsConfig {
    /// Format description for the timestamp segment; `None` disables it.
    pub timestamp_format: Option<String>,
    /// Render glyphs instead of bracketed tags.
    pub symbols: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            timestamp_format: None,
            symbols: true,
        }
    }
}

impl SettingsConfig {
    /// Reads [`TIMESTAMP_ENV`] and [`SYMBOLS_ENV`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var_os(name))
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// ```
    /// use grouped_logger::SettingsConfig;
    ///
    /// let config = SettingsConfig::from_lookup(|name| match name {
    ///     "GROUPED_LOGGER_SYMBOLS" => Some("off".into()),
    ///     _ => None,
    /// });
    /// assert!(!config.symbols);
    /// assert_eq!(config.timestamp_format, None);
    /// ```
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<OsString>,
    {
        let timestamp_format = lookup(TIMESTAMP_ENV)
            .map(|value| value.to_string_lossy().into_owned())
            .filter(|value| !value.trim().is_empty());
        let symbols = lookup(SYMBOLS_ENV).is_none_or(|value| parse_switch(&value));

        Self {
            timestamp_format,
            symbols,
        }
    }

    /// Converts the configuration into [`Settings`], parsing the timestamp
    /// format description. A blank description disables timestamps.
    pub fn to_settings(&self) -> Result<Settings, SettingsError> {
        let timestamp = match self.timestamp_format.as_deref().map(str::trim) {
            None | Some("") => Timestamp::Disabled,
            Some(description) => TimestampFormatter::from_description(description)?.into(),
        };

        Ok(Settings::with_symbols(
            timestamp,
            SymbolMode::from(self.symbols),
        ))
    }
}

fn parse_switch(value: &OsString) -> bool {
    let normalized = value.to_string_lossy();
    let trimmed = normalized.trim();

    !(trimmed.eq_ignore_ascii_case("0")
        || trimmed.eq_ignore_ascii_case("no")
        || trimmed.eq_ignore_ascii_case("false")
        || trimmed.eq_ignore_ascii_case("off"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use time::macros::datetime;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl FnMut(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), OsString::from(value)))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn default_config_matches_default_settings() {
        let settings = SettingsConfig::default().to_settings().unwrap();
        assert!(!settings.timestamp().is_enabled());
        assert_eq!(settings.symbols(), SymbolMode::Enabled);
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(
            SettingsConfig::from_lookup(lookup_from(&[])),
            SettingsConfig::default()
        );
    }

    #[test]
    fn symbol_switch_values() {
        for off in ["0", "no", "FALSE", " off "] {
            let config = SettingsConfig::from_lookup(lookup_from(&[(SYMBOLS_ENV, off)]));
            assert!(!config.symbols, "{off:?} should disable symbols");
        }
        for on in ["1", "yes", "true", "", "anything"] {
            let config = SettingsConfig::from_lookup(lookup_from(&[(SYMBOLS_ENV, on)]));
            assert!(config.symbols, "{on:?} should enable symbols");
        }
    }

    #[test]
    fn blank_timestamp_variable_disables_timestamps() {
        let config = SettingsConfig::from_lookup(lookup_from(&[(TIMESTAMP_ENV, "  ")]));
        assert_eq!(config.timestamp_format, None);
    }

    #[test]
    fn timestamp_variable_builds_formatter() {
        let config = SettingsConfig::from_lookup(lookup_from(&[(TIMESTAMP_ENV, "[hour]h")]));
        let settings = config.to_settings().unwrap();
        let formatter = settings.timestamp().formatter().expect("enabled");
        assert_eq!(formatter.format(datetime!(2020-05-05 07:30 UTC)), "07h");
    }

    #[test]
    fn invalid_timestamp_description_is_reported() {
        let config = SettingsConfig {
            timestamp_format: Some("[hour".to_owned()),
            symbols: true,
        };
        assert!(matches!(
            config.to_settings(),
            Err(SettingsError::InvalidTimestampFormat { .. })
        ));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn missing_fields_take_defaults() {
            let config: SettingsConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(config, SettingsConfig::default());
        }

        #[test]
        fn full_config_round_trips() {
            let config = SettingsConfig {
                timestamp_format: Some("[hour]:[minute]".to_owned()),
                symbols: false,
            };
            let json = serde_json::to_string(&config).unwrap();
            let decoded: SettingsConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, config);
        }

        #[test]
        fn unknown_fields_are_rejected() {
            assert!(serde_json::from_str::<SettingsConfig>(r#"{"emoji": true}"#).is_err());
        }
    }
}
