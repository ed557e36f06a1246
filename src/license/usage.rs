//! license::usage
//!
//! Daily run counter with rollover.
//!
//! The counter resets once more than [`RESET_AFTER_HOURS`] hours have passed
//! since the last reset. Rollover is elapsed-time based rather than tied to
//! a calendar day. The counter lives in memory only.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Hours after which the counter rolls over.
pub const RESET_AFTER_HOURS: i64 = 24;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use terminal221b::license::{Clock, ManualClock};
///
/// let clock = ManualClock::default();
/// let start = clock.now();
/// clock.advance(Duration::hours(3));
/// assert_eq!(clock.now() - start, Duration::hours(3));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    /// Set the clock to an absolute time.
    pub fn set(&self, to: DateTime<Utc>) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = to;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Runs recorded in the current window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounter {
    /// Runs since `last_reset`.
    pub runs: u32,
    /// Start of the current window.
    pub last_reset: DateTime<Utc>,
}

impl UsageCounter {
    /// Create a counter whose window starts at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            runs: 0,
            last_reset: now,
        }
    }

    /// Check if the window that began at `last_reset` has elapsed.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now - self.last_reset > Duration::hours(RESET_AFTER_HOURS)
    }

    /// Reset the counter if the window has elapsed.
    ///
    /// Returns true if a reset happened.
    pub fn roll_over(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_stale(now) {
            self.runs = 0;
            self.last_reset = now;
            true
        } else {
            false
        }
    }

    /// Count one run.
    pub fn record(&mut self) {
        self.runs = self.runs.saturating_add(1);
    }
}
