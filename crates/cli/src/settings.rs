//! crates/cli/src/settings.rs
//! Settings resolution: environment, then settings file, then flags.

use std::ffi::OsString;
use std::path::Path;

use grouped_logger::{Settings, SettingsConfig};

use crate::arguments::ParsedArgs;
use crate::error::CliError;

/// Resolves the settings for one run.
///
/// A `--config` file replaces the environment configuration entirely; the
/// `--timestamp` and `--no-symbols` flags then override individual fields.
pub(crate) fn resolve_settings<F>(parsed: &ParsedArgs, lookup: F) -> Result<Settings, CliError>
where
    F: FnMut(&str) -> Option<OsString>,
{
    let mut config = match parsed.config.as_deref() {
        Some(path) => load_config(path)?,
        None => {
            let config = SettingsConfig::from_lookup(lookup);
            tracing::debug!(
                group = "Config",
                timestamp = ?config.timestamp_format,
                symbols = config.symbols,
                "settings from environment"
            );
            config
        }
    };

    if let Some(format) = &parsed.timestamp {
        config.timestamp_format = Some(format.clone());
    }
    if parsed.no_symbols {
        config.symbols = false;
    }

    Ok(config.to_settings()?)
}

#[cfg(feature = "serde")]
fn load_config(path: &Path) -> Result<SettingsConfig, CliError> {
    tracing::debug!(group = "Config", path = %path.display(), "loading settings file");

    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(feature = "serde"))]
fn load_config(path: &Path) -> Result<SettingsConfig, CliError> {
    Err(CliError::ConfigUnsupported {
        path: path.to_path_buf(),
    })
}
