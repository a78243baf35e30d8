//! # Wall-clock capability for cycle naming.
//!
//! Namespaced cache names embed the current time at second granularity, so
//! the publisher reads time through the [`Clock`] trait instead of touching
//! the system clock directly. [`SystemClock`] is the production source;
//! [`FixedClock`] pins an instant wherever cycle names must be reproducible
//! (tests, demos).

use chrono::{Local, NaiveDateTime};

/// Time source consulted once per cycle, when the cache name is composed.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the instant it was built with.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Pins the clock to `at`.
    #[must_use]
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 45)
            .unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at, "repeated reads stay pinned");
    }
}
