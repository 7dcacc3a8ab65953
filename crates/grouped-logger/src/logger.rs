//! crates/grouped-logger/src/logger.rs
//! The logger: current settings plus the sink lines are written to.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use logging_sink::LineSink;

use crate::clock::{Clock, SystemClock};
use crate::error::LoggerResult;
use crate::group::Group;
use crate::level::Level;
use crate::line::render_line;
use crate::settings::Settings;

/// Formats leveled, grouped lines and writes them to an output sink.
///
/// A logger holds exactly one [`Settings`] value. [`set_settings`] swaps it
/// wholesale; every print call takes a snapshot of the current value before
/// assembling its line, so a concurrent swap is observed either entirely or
/// not at all.
///
/// Most applications use the process-wide instance from [`Logger::shared`],
/// which writes to standard output. Embedders and tests can construct their
/// own with [`Logger::with_writer`].
///
/// # Examples
///
/// ```
/// use grouped_logger::{Group, Level, Logger, Settings, SymbolMode, Timestamp};
/// use logging_sink::SharedBuffer;
///
/// let output = SharedBuffer::new();
/// let log = Logger::with_writer(output.clone());
///
/// log.print("Test", Level::default(), None);
/// log.print("Test3", Level::Debug, Some(&Group::NETWORK));
///
/// log.set_settings(Settings::with_symbols(Timestamp::Disabled, SymbolMode::Disabled));
/// log.success("Hello World", None);
///
/// assert_eq!(output.lines(), ["📢 Test", "📢[Network] Test3", "[Success] Hello World"]);
/// ```
///
/// [`set_settings`]: Logger::set_settings
pub struct Logger<W = io::Stdout> {
    settings: RwLock<Arc<Settings>>,
    sink: Mutex<LineSink<W>>,
    clock: Box<dyn Clock>,
}

impl Logger<io::Stdout> {
    /// Creates a logger writing to standard output with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(LineSink::stdout())
    }

    /// Returns the process-wide logger.
    ///
    /// The instance is created on first access through a [`OnceLock`], writes
    /// to standard output, and lives for the rest of the process. It stamps
    /// lines with [`SystemClock`], which falls back to UTC when the local
    /// offset was never readable. Access it once before spawning threads so
    /// the offset is remembered, or install another clock on an owned logger
    /// with [`with_clock`](Self::with_clock).
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<Logger> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }
}

impl Default for Logger<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Logger<W> {
    /// Creates a logger writing to `writer` with default settings and the
    /// system clock.
    pub fn with_writer(writer: W) -> Self {
        Self::with_sink(LineSink::new(writer))
    }

    fn with_sink(sink: LineSink<W>) -> Self {
        SystemClock::remember_local_offset();
        Self {
            settings: RwLock::new(Arc::new(Settings::default())),
            sink: Mutex::new(sink),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the initial settings.
    pub fn with_settings(self, settings: Settings) -> Self {
        Self {
            settings: RwLock::new(Arc::new(settings)),
            ..self
        }
    }

    /// Replaces the clock consulted for timestamp segments.
    pub fn with_clock<C>(self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        Self {
            clock: Box::new(clock),
            ..self
        }
    }

    /// Replaces the active settings. Subsequent prints observe only the new value.
    pub fn set_settings(&self, settings: Settings) {
        let settings = Arc::new(settings);
        *self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner) = settings;
    }

    /// Returns a snapshot of the active settings.
    #[must_use]
    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&*self.settings.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Assembles the line `print` would emit, without the terminator and
    /// without writing it.
    #[must_use]
    pub fn render(&self, content: &str, level: Level, group: Option<&Group>) -> String {
        let settings = self.settings();
        render_line(&settings, || self.clock.now(), level, group, content)
    }

    /// Consumes the logger and returns its writer.
    pub fn into_writer(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Assembles one line and writes it to the sink.
    ///
    /// Write failures are dropped; [`try_print`](Self::try_print) reports them.
    pub fn print(&self, content: &str, level: Level, group: Option<&Group>) {
        let _ = self.try_print(content, level, group);
    }

    /// Assembles one line and writes it to the sink, reporting write failures.
    pub fn try_print(&self, content: &str, level: Level, group: Option<&Group>) -> LoggerResult<()> {
        let line = self.render(content, level, group);
        self.sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_line(&line)?;
        Ok(())
    }

    /// Prints `content` at [`Level::Debug`].
    pub fn debug(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Debug, group);
    }

    /// Prints `content` at [`Level::Info`].
    pub fn info(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Info, group);
    }

    /// Prints `content` at [`Level::Notice`].
    pub fn notice(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Notice, group);
    }

    /// Prints `content` at [`Level::Warning`].
    pub fn warning(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Warning, group);
    }

    /// Prints `content` at [`Level::Error`].
    pub fn error(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Error, group);
    }

    /// Prints `content` at [`Level::Critical`].
    pub fn critical(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Critical, group);
    }

    /// Prints `content` at [`Level::Alert`].
    pub fn alert(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Alert, group);
    }

    /// Prints `content` at [`Level::Emergency`].
    pub fn emergency(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Emergency, group);
    }

    /// Prints `content` at [`Level::Success`].
    pub fn success(&self, content: &str, group: Option<&Group>) {
        self.print(content, Level::Success, group);
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings())
            .finish_non_exhaustive()
    }
}
