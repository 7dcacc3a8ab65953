use super::render_line;
use crate::{Group, Level, Settings, SymbolMode, Timestamp, TimestampFormatter};
use time::OffsetDateTime;
use time::macros::datetime;

const INSTANT: OffsetDateTime = datetime!(2019-03-29 18:42:07 UTC);

fn at_instant() -> OffsetDateTime {
    INSTANT
}

fn never_called() -> OffsetDateTime {
    panic!("clock consulted while timestamps are disabled")
}

fn plain() -> Settings {
    Settings::with_symbols(Timestamp::Disabled, SymbolMode::Disabled)
}

fn stamped(symbols: SymbolMode) -> Settings {
    Settings::with_symbols(TimestampFormatter::clock_time().into(), symbols)
}

#[test]
fn symbol_mode_renders_bare_glyph() {
    for level in Level::ALL {
        let line = render_line(&Settings::default(), never_called, level, None, "x");
        assert_eq!(line, format!("{} x", level.glyph()));
    }
}

#[test]
fn text_mode_renders_bracketed_tag() {
    for level in Level::ALL {
        let line = render_line(&plain(), never_called, level, None, "x");
        assert_eq!(line, format!("[{}] x", level.tag()));
    }
}

#[test]
fn timestamp_follows_level_decoration() {
    let line = render_line(&stamped(SymbolMode::Enabled), at_instant, Level::Info, None, "up");
    assert_eq!(line, "ℹ️[18:42:07] up");

    let line = render_line(&stamped(SymbolMode::Disabled), at_instant, Level::Info, None, "up");
    assert_eq!(line, "[Info][18:42:07] up");
}

#[test]
fn group_precedes_content() {
    let line = render_line(&plain(), never_called, Level::Notice, Some(&Group::SYSTEM), "Hi");
    assert_eq!(line, "[Notice][System] Hi");
}

#[test]
fn all_segments_in_fixed_order() {
    let line = render_line(
        &stamped(SymbolMode::Enabled),
        at_instant,
        Level::Emergency,
        Some(&Group::COORDINATOR),
        "Test4",
    );
    assert_eq!(line, "🚒[18:42:07][Coordinator] Test4");
}

#[test]
fn custom_formatter_output_is_wrapped_verbatim() {
    let settings = Settings::new(Timestamp::enabled(|now| format!("t={}", now.unix_timestamp())));
    let line = render_line(&settings, at_instant, Level::Success, None, "done");
    assert_eq!(
        line,
        format!("✅[t={}] done", INSTANT.unix_timestamp())
    );
}

#[test]
fn content_is_not_escaped_or_trimmed() {
    let content = "  [not a group] \u{1b}[1m bold\ttab  ";
    let line = render_line(&Settings::default(), never_called, Level::Debug, None, content);
    assert_eq!(line, format!("📢 {content}"));
}

#[test]
fn empty_content_keeps_single_space() {
    let line = render_line(&plain(), never_called, Level::Alert, None, "");
    assert_eq!(line, "[Alert] ");
}

#[test]
fn exactly_one_space_before_content() {
    let line = render_line(
        &stamped(SymbolMode::Disabled),
        at_instant,
        Level::Critical,
        Some(&Group::API),
        "payload",
    );
    let prefix = line.strip_suffix("payload").expect("content is last");
    assert!(prefix.ends_with("] "));
    assert_eq!(prefix.matches(' ').count(), 1);
}

#[test]
fn no_group_leaves_no_empty_brackets() {
    let line = render_line(&Settings::default(), never_called, Level::Warning, None, "c");
    assert!(!line.contains("[]"));
    assert_eq!(line, "⚠️ c");
}
