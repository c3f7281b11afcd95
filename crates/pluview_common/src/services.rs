//! Service abstractions.
//!
//! The scheduling engine never reads the system clock directly; it asks a
//! [`Clock`]. This keeps availability rules deterministic under test and lets
//! a host drive time itself.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::sync::{Arc, Mutex};

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local date and time, without offset.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock and converts it into a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(at)),
        }
    }

    pub fn set(&self, at: NaiveDateTime) {
        match self.current.lock() {
            Ok(mut guard) => *guard = at,
            Err(poisoned) => *poisoned.into_inner() = at,
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let next = self.now() + by;
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.current.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
