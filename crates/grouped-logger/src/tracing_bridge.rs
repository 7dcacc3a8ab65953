//! crates/grouped-logger/src/tracing_bridge.rs
//! Bridge between the tracing crate and the grouped logger.
//!
//! [`GroupedLayer`] is a tracing-subscriber layer that renders every tracing
//! event as a grouped console line, so libraries instrumented with the
//! standard macros (`trace!`, `debug!`, `info!`, `warn!`, `error!`) print in
//! the same format as direct [`Logger`] calls.
//!
//! # Field mapping
//!
//! - `message` becomes the line content.
//! - `group` becomes the [`Group`]; blank values render no group.
//! - `level` overrides the severity when it parses as a [`Level`], which makes
//!   `notice`, `critical`, `alert`, `emergency` and `success` reachable.
//! - Any other field is appended to the content as ` name=value`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use grouped_logger::{Logger, init_tracing};
//!
//! init_tracing(Logger::shared()).expect("no other subscriber installed");
//!
//! // Any handle dereferencing to a logger works, e.g. an `Arc<Logger<W>>`.
//!
//! tracing::info!(group = "Network", "connected");
//! tracing::warn!(group = "API", level = "critical", status = 503, "backend down");
//! ```

use std::fmt::{self, Write as _};
use std::io::Write;
use std::ops::Deref;

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::group::Group;
use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that prints events through a [`Logger`].
///
/// `L` is any handle dereferencing to a logger: `&'static Logger` for the
/// process-wide instance or an `Arc<Logger<W>>` for an owned one.
pub struct GroupedLayer<L> {
    logger: L,
}

impl<L> GroupedLayer<L> {
    /// Creates a layer printing through `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a logger level.
    const fn level_from_tracing(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            _ => Level::Debug,
        }
    }
}

impl<L> fmt::Debug for GroupedLayer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupedLayer").finish_non_exhaustive()
    }
}

impl<S, L, W> Layer<S> for GroupedLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Deref<Target = Logger<W>> + Send + Sync + 'static,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = visitor
            .level
            .as_deref()
            .and_then(|text| text.parse().ok())
            .unwrap_or_else(|| Self::level_from_tracing(event.metadata().level()));
        let content = visitor.content();
        let group = visitor.group.and_then(|name| Group::new(name).ok());

        self.logger.print(&content, level, group.as_ref());
    }
}

/// Visitor collecting the content, group and level override of an event.
#[derive(Default)]
struct EventVisitor {
    message: String,
    extras: String,
    group: Option<String>,
    level: Option<String>,
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, text: String) {
        match field.name() {
            "message" => self.message = text,
            "group" => self.group = Some(text),
            "level" => self.level = Some(text),
            name => {
                let _ = write!(self.extras, " {name}={text}");
            }
        }
    }

    fn content(&self) -> String {
        if self.message.is_empty() {
            self.extras.trim_start().to_owned()
        } else {
            format!("{}{}", self.message, self.extras)
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_text(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_owned());
    }
}

/// Installs a [`GroupedLayer`] over `logger` as the global default subscriber.
///
/// Fails when another global subscriber has already been installed.
pub fn init_tracing<L, W>(logger: L) -> Result<(), TryInitError>
where
    L: Deref<Target = Logger<W>> + Send + Sync + 'static,
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(GroupedLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_levels_map_onto_logger_levels() {
        type Bridge = GroupedLayer<&'static Logger<Vec<u8>>>;
        assert_eq!(Bridge::level_from_tracing(&tracing::Level::ERROR), Level::Error);
        assert_eq!(Bridge::level_from_tracing(&tracing::Level::WARN), Level::Warning);
        assert_eq!(Bridge::level_from_tracing(&tracing::Level::INFO), Level::Info);
        assert_eq!(Bridge::level_from_tracing(&tracing::Level::DEBUG), Level::Debug);
        assert_eq!(Bridge::level_from_tracing(&tracing::Level::TRACE), Level::Debug);
    }
}
