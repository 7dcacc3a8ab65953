//! crates/grouped-logger/src/clock.rs
//! Sources of the "current instant" fed to timestamp formatters.

use std::sync::OnceLock;

use time::{OffsetDateTime, UtcOffset};

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Supplies the instant passed to a [`TimestampFormatter`](crate::TimestampFormatter).
///
/// The logger only consults its clock when the active settings enable
/// timestamps. Closures returning an [`OffsetDateTime`] implement the trait.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in the local UTC offset.
///
/// On Linux `time` refuses to read the local offset once the process has more
/// than one thread. The first offset read successfully is remembered and
/// reused in that case, so a clock primed with
/// [`remember_local_offset`](Self::remember_local_offset) before threads are
/// spawned keeps reporting local time. Without a remembered offset the clock
/// reports UTC. Hosts that need a specific offset regardless should install a
/// closure clock with [`Logger::with_clock`](crate::Logger::with_clock).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Reads and remembers the local offset, returning it when it could be
    /// determined.
    ///
    /// Call this early in `main`, while the process is still single-threaded.
    pub fn remember_local_offset() -> Option<UtcOffset> {
        match UtcOffset::current_local_offset() {
            Ok(offset) => Some(*LOCAL_OFFSET.get_or_init(|| offset)),
            Err(_) => LOCAL_OFFSET.get().copied(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        match UtcOffset::local_offset_at(now) {
            Ok(offset) => {
                let _ = LOCAL_OFFSET.set(offset);
                now.to_offset(offset)
            }
            Err(_) => LOCAL_OFFSET.get().map_or(now, |offset| now.to_offset(*offset)),
        }
    }
}

/// Clock frozen at a single instant.
///
/// ```
/// use grouped_logger::{Clock, FixedClock};
/// use time::macros::datetime;
///
/// let clock = FixedClock::new(datetime!(2019-03-29 14:05:09 UTC));
/// assert_eq!(clock.now().hour(), 14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: OffsetDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: OffsetDateTime) -> Self {
        Self { instant }
    }

    /// The reported instant.
    #[must_use]
    pub const fn instant(&self) -> OffsetDateTime {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.instant
    }
}

impl<F> Clock for F
where
    F: Fn() -> OffsetDateTime + Send + Sync,
{
    fn now(&self) -> OffsetDateTime {
        self()
    }
}
