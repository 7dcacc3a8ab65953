//! crates/grouped-logger/src/line.rs
//! Deterministic assembly of a single log line.

use time::OffsetDateTime;

use crate::group::Group;
use crate::level::Level;
use crate::settings::Settings;

/// Assembles the line for `content` without a trailing newline.
///
/// Segments appear in a fixed order with nothing between them but their own
/// brackets:
///
/// 1. the level glyph, or `[Tag]` when symbols are disabled;
/// 2. `[timestamp]` when the timestamp mode is enabled;
/// 3. `[group]` when a group is supplied;
/// 4. a single space followed by `content`, verbatim.
///
/// `now` is only invoked when the timestamp mode is enabled.
///
/// ```
/// use grouped_logger::{Group, Level, Settings, render_line};
/// use time::OffsetDateTime;
///
/// let line = render_line(
///     &Settings::default(),
///     OffsetDateTime::now_utc,
///     Level::Debug,
///     Some(&Group::NETWORK),
///     "Test3",
/// );
/// assert_eq!(line, "📢[Network] Test3");
/// ```
pub fn render_line<F>(
    settings: &Settings,
    now: F,
    level: Level,
    group: Option<&Group>,
    content: &str,
) -> String
where
    F: FnOnce() -> OffsetDateTime,
{
    let mut line = String::with_capacity(content.len() + 32);

    if settings.symbols().is_enabled() {
        line.push_str(level.glyph());
    } else {
        push_bracketed(&mut line, level.tag());
    }

    if let Some(formatter) = settings.timestamp().formatter() {
        push_bracketed(&mut line, &formatter.format(now()));
    }

    if let Some(group) = group {
        push_bracketed(&mut line, group.name());
    }

    line.push(' ');
    line.push_str(content);
    line
}

fn push_bracketed(line: &mut String, segment: &str) {
    line.push('[');
    line.push_str(segment);
    line.push(']');
}

#[cfg(test)]
mod tests;
