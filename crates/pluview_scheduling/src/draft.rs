// --- File: crates/pluview_scheduling/src/draft.rs ---
//! The visitor's contact details and meeting pick while the modal is open.

use crate::availability::AvailabilityFilter;
use crate::slots::TimeSlot;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Interest,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Interest => "interest",
            ContactField::Message => "message",
        }
    }
}

/// Where a draft stands in the booking flow. `Submitted` is not a draft stage:
/// submission resets the draft straight back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStage {
    /// Some required contact field is still blank.
    Empty,
    ContactFilled,
    DatePicked,
    SlotPicked,
}

/// Contact fields plus the picked date and time, as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub interest: String,
    pub message: String,
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.selected_time
    }

    pub fn contact_field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Interest => &self.interest,
            ContactField::Message => &self.message,
        }
    }

    /// Stores the raw value. Validation happens when the draft is read.
    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Interest => self.interest = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Picks a meeting day and clears the time. Non-selectable days are ignored.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        now: NaiveDateTime,
        filter: &AvailabilityFilter,
    ) -> bool {
        if !filter.is_selectable(date, now) {
            debug!("Ignoring non-selectable date {}", date);
            return false;
        }
        self.selected_date = Some(date);
        self.selected_time = None;
        true
    }

    pub fn clear_date(&mut self) {
        self.selected_date = None;
        self.selected_time = None;
    }

    /// Picks a time on the selected date; rejected when no date is set or the
    /// slot is not (or no longer) available.
    pub fn select_time(
        &mut self,
        slot: TimeSlot,
        now: NaiveDateTime,
        filter: &AvailabilityFilter,
    ) -> bool {
        let Some(date) = self.selected_date else {
            debug!("Ignoring time {} with no date selected", slot);
            return false;
        };
        if !filter.is_bookable(date, slot, now) {
            debug!("Ignoring unavailable slot {} on {}", slot, date);
            return false;
        }
        self.selected_time = Some(slot);
        true
    }

    pub fn clear_time(&mut self) {
        self.selected_time = None;
    }

    /// Drops a selection the clock has overtaken: the whole pick when the date is
    /// no longer selectable (e.g. after midnight), otherwise just a time that fell
    /// inside the lead time. Returns true if anything was dropped.
    pub fn clear_stale_time(&mut self, now: NaiveDateTime, filter: &AvailabilityFilter) -> bool {
        match (self.selected_date, self.selected_time) {
            (Some(date), _) if !filter.is_selectable(date, now) => {
                debug!("Clearing stale date {}", date);
                self.clear_date();
                true
            }
            (Some(date), Some(slot)) if !filter.is_bookable(date, slot, now) => {
                debug!("Clearing stale slot {} on {}", slot, date);
                self.selected_time = None;
                true
            }
            _ => false,
        }
    }

    /// First required contact field that is still blank.
    pub fn missing_contact_field(&self) -> Option<ContactField> {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Interest,
            ContactField::Message,
        ]
        .into_iter()
        .find(|field| self.contact_field(*field).is_empty())
    }

    pub fn is_contact_valid(&self) -> bool {
        self.missing_contact_field().is_none()
    }

    pub fn is_schedule_valid(&self) -> bool {
        self.is_contact_valid() && self.selected_date.is_some() && self.selected_time.is_some()
    }

    pub fn stage(&self) -> BookingStage {
        if !self.is_contact_valid() {
            BookingStage::Empty
        } else if self.selected_time.is_some() {
            BookingStage::SlotPicked
        } else if self.selected_date.is_some() {
            BookingStage::DatePicked
        } else {
            BookingStage::ContactFilled
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
