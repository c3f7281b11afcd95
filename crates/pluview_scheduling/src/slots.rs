// --- File: crates/pluview_scheduling/src/slots.rs ---
//! The fixed catalog of meeting start times.

use crate::error::ScheduleError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A candidate meeting start, as a wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u32,
    minute: u32,
}

impl TimeSlot {
    /// Only used for the catalog constants; callers parse or use `from_time`.
    const fn at(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn from_time(time: NaiveTime) -> Self {
        Self::at(time.hour(), time.minute())
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    pub fn to_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ScheduleError::TimeSlotParse(format!("expected HH:MM, got {s:?}")))?;
        let hour: u32 = hour
            .parse()
            .map_err(|_| ScheduleError::TimeSlotParse(format!("bad hour in {s:?}")))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| ScheduleError::TimeSlotParse(format!("bad minute in {s:?}")))?;
        TimeSlot::new(hour, minute)
            .ok_or_else(|| ScheduleError::TimeSlotParse(format!("out of range: {s:?}")))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Morning block, before the lunch gap.
pub const MORNING_SLOTS: [TimeSlot; 6] = [
    TimeSlot::at(9, 0),
    TimeSlot::at(9, 30),
    TimeSlot::at(10, 0),
    TimeSlot::at(10, 30),
    TimeSlot::at(11, 0),
    TimeSlot::at(11, 30),
];

/// Afternoon block; 17:00 is the last bookable start.
pub const AFTERNOON_SLOTS: [TimeSlot; 7] = [
    TimeSlot::at(14, 0),
    TimeSlot::at(14, 30),
    TimeSlot::at(15, 0),
    TimeSlot::at(15, 30),
    TimeSlot::at(16, 0),
    TimeSlot::at(16, 30),
    TimeSlot::at(17, 0),
];

/// Every slot of a day, in booking order.
pub fn all_slots() -> impl Iterator<Item = TimeSlot> + Clone {
    MORNING_SLOTS.into_iter().chain(AFTERNOON_SLOTS)
}

pub fn last_slot() -> TimeSlot {
    AFTERNOON_SLOTS[AFTERNOON_SLOTS.len() - 1]
}

pub fn is_catalog_slot(slot: TimeSlot) -> bool {
    all_slots().any(|candidate| candidate == slot)
}
