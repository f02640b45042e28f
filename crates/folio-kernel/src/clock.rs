//! Wall-clock access for `date`.

use chrono::{Local, NaiveDateTime};

/// Format used when printing the current date/time.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Source of the current local time.
pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current time as a human-readable string.
    fn display_now(&self) -> String {
        self.now().format(DATE_FORMAT).to_string()
    }
}

/// The system clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant. Used by tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
