//! crates/grouped-logger/src/timestamp.rs
//! Timestamp mode: disabled, or enabled together with the formatter to use.

use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;
use time::format_description::{self, BorrowedFormatItem};
use time::macros::format_description;

use crate::error::SettingsError;

/// `HH:mm:ss` clock time, the format most applications install.
const CLOCK_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// Format description string equivalent to [`TimestampFormatter::clock_time`].
pub const CLOCK_TIME_DESCRIPTION: &str = "[hour]:[minute]:[second]";

type FormatFn = dyn Fn(OffsetDateTime) -> String + Send + Sync;

/// Callable that turns the current instant into the text shown between the
/// timestamp brackets.
///
/// Cloning is cheap; clones share the same callable.
#[derive(Clone)]
pub struct TimestampFormatter {
    format: Arc<FormatFn>,
    description: Option<String>,
}

impl TimestampFormatter {
    /// Wraps an arbitrary formatting function.
    ///
    /// ```
    /// use grouped_logger::TimestampFormatter;
    /// use time::macros::datetime;
    ///
    /// let year = TimestampFormatter::new(|now| now.year().to_string());
    /// assert_eq!(year.format(datetime!(2019-03-29 0:00 UTC)), "2019");
    /// ```
    pub fn new<F>(format: F) -> Self
    where
        F: Fn(OffsetDateTime) -> String + Send + Sync + 'static,
    {
        Self {
            format: Arc::new(format),
            description: None,
        }
    }

    /// Builds a formatter from a `time` format description such as
    /// `[year]-[month]-[day] [hour]:[minute]`.
    ///
    /// ```
    /// use grouped_logger::TimestampFormatter;
    /// use time::macros::datetime;
    ///
    /// let formatter = TimestampFormatter::from_description("[month]/[day]")?;
    /// assert_eq!(formatter.format(datetime!(2019-03-29 0:00 UTC)), "03/29");
    /// # Ok::<(), grouped_logger::SettingsError>(())
    /// ```
    pub fn from_description(description: &str) -> Result<Self, SettingsError> {
        let items = format_description::parse_owned::<2>(description).map_err(|source| {
            SettingsError::InvalidTimestampFormat {
                description: description.to_owned(),
                source,
            }
        })?;

        Ok(Self {
            format: Arc::new(move |now: OffsetDateTime| now.format(&items).unwrap_or_default()),
            description: Some(description.to_owned()),
        })
    }

    /// Formatter rendering `HH:mm:ss`.
    #[must_use]
    pub fn clock_time() -> Self {
        Self {
            format: Arc::new(|now: OffsetDateTime| {
                now.format(CLOCK_TIME_FORMAT).unwrap_or_default()
            }),
            description: Some(CLOCK_TIME_DESCRIPTION.to_owned()),
        }
    }

    /// Formats `now`.
    #[must_use]
    pub fn format(&self, now: OffsetDateTime) -> String {
        (self.format)(now)
    }

    /// The format description this formatter was built from, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Debug for TimestampFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimestampFormatter")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Whether a timestamp segment is rendered, and how.
///
/// The formatter only exists in the enabled branch.
#[derive(Clone, Debug, Default)]
pub enum Timestamp {
    /// No timestamp segment.
    #[default]
    Disabled,
    /// Render `[formatter(now)]` after the level decoration.
    Enabled(TimestampFormatter),
}

impl Timestamp {
    /// Enables timestamps using an arbitrary formatting function.
    pub fn enabled<F>(format: F) -> Self
    where
        F: Fn(OffsetDateTime) -> String + Send + Sync + 'static,
    {
        Self::Enabled(TimestampFormatter::new(format))
    }

    /// Reports whether the timestamp segment is rendered.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// The formatter, when enabled.
    #[must_use]
    pub const fn formatter(&self) -> Option<&TimestampFormatter> {
        match self {
            Self::Disabled => None,
            Self::Enabled(formatter) => Some(formatter),
        }
    }
}

impl From<TimestampFormatter> for Timestamp {
    fn from(formatter: TimestampFormatter) -> Self {
        Self::Enabled(formatter)
    }
}

impl From<Option<TimestampFormatter>> for Timestamp {
    fn from(formatter: Option<TimestampFormatter>) -> Self {
        formatter.map_or(Self::Disabled, Self::Enabled)
    }
}
