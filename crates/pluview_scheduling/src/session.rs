// --- File: crates/pluview_scheduling/src/session.rs ---
//! One open contact modal: the draft, the calendar cursor, the current view,
//! and the clock they are all evaluated against.
//!
//! Hosts call [`BookingSession::tick`] every `tick_interval()` to keep "now"
//! fresh for the lead-time rule. Submitting either outbound link, or closing
//! the modal, discards everything.

use crate::availability::{AvailabilityFilter, SlotAvailability};
use crate::calendar::{CalendarNavigator, MonthGrid};
use crate::draft::{BookingDraft, BookingStage, ContactField};
use crate::error::ScheduleError;
use crate::invite::InviteFormatter;
use crate::slots::TimeSlot;
use chrono::{NaiveDate, NaiveDateTime};
use pluview_common::Clock;
use pluview_config::SchedulingConfig;
use serde::Serialize;
use std::time::Duration as StdDuration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Form,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    EmailCompose,
    CalendarEvent,
}

/// A link the host should open in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    pub kind: LinkKind,
    pub url: String,
}

pub struct BookingSession<C: Clock> {
    clock: C,
    filter: AvailabilityFilter,
    formatter: InviteFormatter,
    navigator: CalendarNavigator,
    draft: BookingDraft,
    view: ViewMode,
    tick_interval: StdDuration,
}

impl<C: Clock> BookingSession<C> {
    pub fn new(clock: C, config: &SchedulingConfig) -> Self {
        let filter = AvailabilityFilter::from_config(config);
        let today = clock.now().date();
        Self {
            navigator: CalendarNavigator::new(today, filter),
            formatter: InviteFormatter::from_config(config),
            filter,
            clock,
            draft: BookingDraft::new(),
            view: ViewMode::Form,
            tick_interval: StdDuration::from_secs(config.tick_interval_seconds),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn navigator(&self) -> &CalendarNavigator {
        &self.navigator
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn stage(&self) -> BookingStage {
        self.draft.stage()
    }

    pub fn tick_interval(&self) -> StdDuration {
        self.tick_interval
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set_contact_field(field, value);
    }

    /// Switches to the calendar; only allowed once the contact fields are filled.
    pub fn open_calendar(&mut self) -> bool {
        if !self.draft.is_contact_valid() {
            debug!("Calendar view requested with incomplete contact fields");
            return false;
        }
        self.view = ViewMode::Calendar;
        true
    }

    pub fn back_to_form(&mut self) {
        self.view = ViewMode::Form;
    }

    pub fn can_go_to_previous_month(&self) -> bool {
        self.navigator.can_go_to_previous_month(self.today())
    }

    pub fn previous_month(&mut self) -> bool {
        let today = self.today();
        self.navigator.go_to_previous_month(today)
    }

    pub fn next_month(&mut self) {
        self.navigator.go_to_next_month();
    }

    pub fn month_grid(&self) -> MonthGrid {
        self.navigator
            .month_grid(self.now(), self.draft.selected_date())
    }

    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        let now = self.now();
        self.draft.select_date(date, now, &self.filter)
    }

    /// Picks a day number of the displayed month.
    pub fn select_day(&mut self, day: u32) -> bool {
        match self.navigator.date_for_day(day) {
            Some(date) => self.select_date(date),
            None => false,
        }
    }

    pub fn deselect_date(&mut self) {
        self.draft.clear_date();
    }

    pub fn select_time(&mut self, slot: TimeSlot) -> bool {
        let now = self.now();
        self.draft.select_time(slot, now, &self.filter)
    }

    pub fn available_slots(&self) -> SlotAvailability {
        self.filter
            .slot_availability(self.draft.selected_date(), self.now())
    }

    /// Re-evaluates the selection against the current time.
    /// Returns true when a selected date or time had to be dropped.
    pub fn tick(&mut self) -> bool {
        let now = self.now();
        self.draft.clear_stale_time(now, &self.filter)
    }

    pub fn can_send_email(&self) -> bool {
        self.draft.is_contact_valid()
    }

    pub fn can_schedule(&self) -> bool {
        self.draft.is_schedule_valid()
    }

    /// Builds the compose link and resets the session. On error nothing changes.
    pub fn send_email(&mut self) -> Result<OutboundLink, ScheduleError> {
        let request = self.formatter.to_email_compose_request(&self.draft)?;
        let url = request.to_url()?;
        info!("Email compose link generated");
        self.close();
        Ok(OutboundLink {
            kind: LinkKind::EmailCompose,
            url,
        })
    }

    /// Builds the calendar link and resets the session. A time that went stale
    /// since it was picked is cleared and reported instead of being submitted.
    pub fn schedule_meeting(&mut self) -> Result<OutboundLink, ScheduleError> {
        let stale = self.draft.selected_time();
        if self.tick() {
            return Err(match stale {
                Some(slot) => ScheduleError::SlotUnavailable(slot.to_string()),
                None => ScheduleError::NoDateSelected,
            });
        }
        let request = self.formatter.to_calendar_event_request(&self.draft)?;
        let url = request.to_url()?;
        info!("Calendar event link generated for {}", request.start);
        self.close();
        Ok(OutboundLink {
            kind: LinkKind::CalendarEvent,
            url,
        })
    }

    /// Dismisses the modal: draft, view and cursor go back to their initial state.
    pub fn close(&mut self) {
        let today = self.today();
        self.draft.reset();
        self.view = ViewMode::Form;
        self.navigator.reset(today);
    }
}
