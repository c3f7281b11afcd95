// --- File: crates/pluview_scheduling/src/availability.rs ---
//! Which catalog slots are still bookable for a date, given the current time.
//!
//! Everything here is a pure function of `(date, now)`. Nothing is cached, so
//! a caller that asks again after the clock moved always gets the fresh answer.

use crate::slots::{all_slots, TimeSlot};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use pluview_config::SchedulingConfig;
use serde::Serialize;
use tracing::trace;

pub const DEFAULT_LEAD_TIME_MINUTES: u32 = 30;

/// Result of asking for the slots of the (optional) selected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "slots", rename_all = "snake_case")]
pub enum SlotAvailability {
    NoDateSelected,
    /// The date is past, or it is today and every slot falls inside the lead time.
    NoneRemaining,
    Available(Vec<TimeSlot>),
}

impl SlotAvailability {
    pub fn slots(&self) -> &[TimeSlot] {
        match self {
            SlotAvailability::Available(slots) => slots,
            _ => &[],
        }
    }
}

/// Lead-time rule applied to the slot catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityFilter {
    lead_time_minutes: u32,
}

impl Default for AvailabilityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_LEAD_TIME_MINUTES)
    }
}

impl AvailabilityFilter {
    pub fn new(lead_time_minutes: u32) -> Self {
        Self { lead_time_minutes }
    }

    pub fn from_config(config: &SchedulingConfig) -> Self {
        Self::new(config.lead_time_minutes)
    }

    pub fn lead_time_minutes(&self) -> u32 {
        self.lead_time_minutes
    }

    /// Minute of day after which a slot must start to be bookable today.
    pub fn cutoff_minutes(&self, now: NaiveDateTime) -> u32 {
        (now.hour() * 60 + now.minute()).saturating_add(self.lead_time_minutes)
    }

    /// Slots still bookable on `date`. Past days have none; future days get the
    /// full catalog.
    pub fn available_slots(&self, date: NaiveDate, now: NaiveDateTime) -> Vec<TimeSlot> {
        if date < now.date() {
            return Vec::new();
        }
        if date > now.date() {
            return all_slots().collect();
        }
        let cutoff = self.cutoff_minutes(now);
        trace!("Filtering today's slots with cutoff minute {}", cutoff);
        all_slots()
            .filter(|slot| slot.minutes_since_midnight() > cutoff)
            .collect()
    }

    pub fn slot_availability(
        &self,
        selected_date: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> SlotAvailability {
        match selected_date {
            None => SlotAvailability::NoDateSelected,
            Some(date) => {
                let slots = self.available_slots(date, now);
                if slots.is_empty() {
                    SlotAvailability::NoneRemaining
                } else {
                    SlotAvailability::Available(slots)
                }
            }
        }
    }

    pub fn is_bookable(&self, date: NaiveDate, slot: TimeSlot, now: NaiveDateTime) -> bool {
        self.available_slots(date, now).contains(&slot)
    }

    pub fn has_remaining_slots(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        !self.available_slots(date, now).is_empty()
    }

    /// A day can be picked when it is a weekday, not in the past, and (for today)
    /// still has a slot after the lead time.
    pub fn is_selectable(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        if is_weekend(date) || date < now.date() {
            return false;
        }
        date != now.date() || self.has_remaining_slots(date, now)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Catalog slots for `date` with the default 30 minute lead time.
pub fn available_slots(date: NaiveDate, now: NaiveDateTime) -> Vec<TimeSlot> {
    AvailabilityFilter::default().available_slots(date, now)
}
