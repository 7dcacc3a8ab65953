//! Integration tests for the assembled line format.
//!
//! These tests drive a logger writing into an in-memory buffer and check the
//! exact bytes produced for each combination of symbol mode, timestamp mode
//! and group, including the scenarios of a typical demo application.

use grouped_logger::{
    FixedClock, Group, Level, Logger, Settings, SymbolMode, Timestamp, TimestampFormatter,
};
use logging_sink::SharedBuffer;
use time::OffsetDateTime;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2019-03-30 14:25:36 UTC);

fn capture() -> (Logger<SharedBuffer>, SharedBuffer) {
    let output = SharedBuffer::new();
    let log = Logger::with_writer(output.clone()).with_clock(FixedClock::new(NOW));
    (log, output)
}

fn text_only() -> Settings {
    Settings::with_symbols(Timestamp::Disabled, SymbolMode::Disabled)
}

// ============================================================================
// Reference Scenarios
// ============================================================================

/// Verifies `print("Test")` with default settings.
#[test]
fn default_print_uses_debug_glyph() {
    let (log, output) = capture();
    log.print("Test", Level::default(), None);

    assert_eq!(output.to_string_lossy(), "📢 Test\n");
}

/// Verifies a group segment directly follows the glyph.
#[test]
fn default_print_with_network_group() {
    let (log, output) = capture();
    log.print("Test3", Level::Debug, Some(&Group::NETWORK));

    assert_eq!(output.lines(), ["📢[Network] Test3"]);
}

/// Verifies text mode renders the bracketed tag.
#[test]
fn text_mode_print_renders_debug_tag() {
    let (log, output) = capture();
    log.set_settings(text_only());
    log.print("Hello", Level::Debug, None);

    assert_eq!(output.lines(), ["[Debug] Hello"]);
}

/// Verifies the success convenience method in text mode.
#[test]
fn text_mode_success() {
    let (log, output) = capture();
    log.set_settings(text_only());
    log.success("Hello World", None);

    assert_eq!(output.lines(), ["[Success] Hello World"]);
}

/// Verifies glyph, timestamp, group and content appear in that order.
#[test]
fn timestamped_emergency_with_coordinator_group() {
    let (log, output) = capture();
    log.set_settings(Settings::new(Timestamp::enabled(|now| {
        format!("F({})", now.unix_timestamp())
    })));
    log.print("Test4", Level::Emergency, Some(&Group::COORDINATOR));

    assert_eq!(
        output.lines(),
        [format!("🚒[F({})][Coordinator] Test4", NOW.unix_timestamp())]
    );
}

/// Replays a demo call sequence covering every level and settings mode.
#[test]
fn example_application_sequence() {
    let (log, output) = capture();
    let sync = Group::new("Sync").unwrap();

    log.debug("Test", None);
    log.info("A", None);
    log.notice("B", None);
    log.warning("C", None);
    log.error("Blup", None);
    log.critical("D", None);
    log.alert("E", None);
    log.emergency("F", None);
    log.success("Blah", None);

    log.set_settings(Settings::new(TimestampFormatter::clock_time().into()));
    log.print("Test3", Level::default(), None);
    log.print("Test3", Level::default(), Some(&Group::NETWORK));
    log.print("Test4", Level::Emergency, Some(&Group::COORDINATOR));
    log.print("Test4", Level::Success, Some(&sync));

    log.set_settings(text_only());
    log.print("Hello", Level::default(), None);
    log.print("Hello World", Level::Success, None);
    log.print("Hi", Level::Notice, Some(&Group::SYSTEM));

    assert_eq!(
        output.lines(),
        [
            "📢 Test",
            "ℹ️ A",
            "🔶 B",
            "⚠️ C",
            "❌ Blup",
            "❗️ D",
            "🚨 E",
            "🚒 F",
            "✅ Blah",
            "📢[14:25:36] Test3",
            "📢[14:25:36][Network] Test3",
            "🚒[14:25:36][Coordinator] Test4",
            "✅[14:25:36][Sync] Test4",
            "[Debug] Hello",
            "[Success] Hello World",
            "[Notice][System] Hi",
        ]
    );
}

// ============================================================================
// Segment Properties
// ============================================================================

/// Verifies every level renders its glyph bare and its tag bracketed.
#[test]
fn level_decoration_for_every_level() {
    for level in Level::ALL {
        let (log, output) = capture();
        log.print("x", level, None);
        log.set_settings(text_only());
        log.print("x", level, None);

        assert_eq!(
            output.lines(),
            [format!("{} x", level.glyph()), format!("[{}] x", level.tag())]
        );
    }
}

/// Verifies disabled timestamps never produce a timestamp segment.
#[test]
fn disabled_timestamp_has_no_segment() {
    let (log, output) = capture();
    for group in Group::BUILT_INS {
        log.print("content", Level::Info, Some(&group));
    }

    for (line, group) in output.lines().iter().zip(Group::BUILT_INS) {
        assert_eq!(line, &format!("ℹ️[{}] content", group.name()));
        assert!(!line.contains("14:25"));
    }
}

/// Verifies the timestamp segment sits between the level and the group.
#[test]
fn timestamp_precedes_group() {
    let (log, output) = capture();
    log.set_settings(Settings::with_symbols(
        TimestampFormatter::from_description("[year]-[month]-[day]").unwrap().into(),
        SymbolMode::Disabled,
    ));
    log.warning("disk", Some(&Group::SYSTEM));

    assert_eq!(output.lines(), ["[Warning][2019-03-30][System] disk"]);
}

/// Verifies omitting the group leaves no brackets or extra spaces behind.
#[test]
fn omitted_group_leaves_no_residue() {
    let (log, output) = capture();
    log.set_settings(Settings::new(TimestampFormatter::clock_time().into()));
    log.notice("n", None);

    assert_eq!(output.lines(), ["🔶[14:25:36] n"]);
}

/// Verifies content is emitted verbatim after exactly one space.
#[test]
fn content_is_verbatim() {
    let (log, output) = capture();
    let content = " leading and trailing  [x] % {} \\n";
    log.info(content, Some(&Group::API));

    assert_eq!(output.to_string_lossy(), format!("ℹ️[API] {content}\n"));
}

/// Verifies custom groups render exactly like built-ins.
#[test]
fn custom_group_renders_its_name() {
    let (log, output) = capture();
    let moya = Group::new("Moya").unwrap();
    log.error("timeout", Some(&moya));

    assert_eq!(output.lines(), ["❌[Moya] timeout"]);
}

/// Verifies the formatter runs once per printed line.
#[test]
fn formatter_invoked_per_line() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let (log, _output) = capture();
    log.set_settings(Settings::new(Timestamp::enabled(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        String::from("t")
    })));

    log.debug("one", None);
    log.debug("two", None);
    log.set_settings(Settings::default());
    log.debug("three", None);

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
