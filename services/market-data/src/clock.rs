//! Time source for analytics windows and snapshot stamps

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Source of "now" as Unix nanoseconds
pub trait Clock: Send + Sync + Debug {
    fn now_nanos(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i64 {
        // None only past the year 2262
        Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
    }
}

/// Manually driven clock for tests and simulations
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_nanos: i64) -> Self {
        Self {
            now: AtomicI64::new(start_nanos),
        }
    }

    pub fn set(&self, nanos: i64) {
        self.now.store(nanos, Ordering::SeqCst);
    }

    /// Move forward by `nanos` and return the new time.
    pub fn advance(&self, nanos: i64) -> i64 {
        self.now.fetch_add(nanos, Ordering::SeqCst) + nanos
    }

    pub fn advance_secs(&self, secs: i64) -> i64 {
        self.advance(secs.saturating_mul(1_000_000_000))
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_nanos(), 1_000);
        assert_eq!(clock.advance(500), 1_500);
        assert_eq!(clock.advance_secs(1), 1_000_001_500);
        clock.set(7);
        assert_eq!(clock.now_nanos(), 7);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_nanos() > 1_577_836_800_000_000_000);
    }
}
