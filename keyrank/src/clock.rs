//! Sources of the current minute.
//!
//! Scoring only ever needs "now" truncated to whole minutes since the Unix
//! epoch. The registry takes the clock as a type parameter so tests and
//! replays can pin or step time explicitly.

use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Provides the current wall-clock time in whole minutes since the Unix epoch.
pub trait Clock {
    /// Current minute since the Unix epoch
    fn now_minute(&self) -> i64;
}

/// Wall clock backed by [`chrono::Utc`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_minute(&self) -> i64 {
        Utc::now().timestamp().div_euclid(60)
    }
}

/// A clock that only moves when told to.
///
/// Useful for tests and for replaying a recorded feed.
#[derive(Debug, Default)]
pub struct ManualClock {
    minute: AtomicI64,
}

impl ManualClock {
    /// Create a clock stopped at `minute`
    pub fn new(minute: i64) -> Self {
        Self {
            minute: AtomicI64::new(minute),
        }
    }

    /// Jump to an absolute minute
    pub fn set(&self, minute: i64) {
        self.minute.store(minute, Ordering::Relaxed);
    }

    /// Move forward (or backward, for negative values) by `minutes`
    pub fn advance(&self, minutes: i64) {
        self.minute.fetch_add(minutes, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_minute(&self) -> i64 {
        self.minute.load(Ordering::Relaxed)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_minute(&self) -> i64 {
        (**self).now_minute()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_minute(&self) -> i64 {
        (**self).now_minute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_in_minutes() {
        let seconds = Utc::now().timestamp();
        let minute = SystemClock.now_minute();
        // Allow for a minute boundary between the two reads
        assert!((minute - seconds / 60).abs() <= 1);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_minute(), 100);

        clock.advance(15);
        assert_eq!(clock.now_minute(), 115);

        clock.advance(-20);
        assert_eq!(clock.now_minute(), 95);

        clock.set(7);
        assert_eq!(clock.now_minute(), 7);
    }

    #[test]
    fn test_shared_clock_sees_updates() {
        let clock = Arc::new(ManualClock::new(0));
        let handle = Arc::clone(&clock);

        handle.advance(42);
        assert_eq!(clock.now_minute(), 42);
        assert_eq!((&*clock).now_minute(), 42);
    }
}
