// --- File: crates/pluview_scheduling/src/lib.rs ---
// Declare modules within this crate
pub mod availability;
pub mod calendar;
pub mod draft;
pub mod error;
pub mod invite;
#[cfg(test)]
mod invite_test;
#[cfg(test)]
mod scheduling_proptest;
pub mod session;
pub mod slots;

pub use availability::{available_slots, AvailabilityFilter, SlotAvailability};
pub use calendar::{days_in_month, first_weekday_of_month, CalendarNavigator, DayCell, MonthGrid, YearMonth};
pub use draft::{BookingDraft, BookingStage, ContactField};
pub use error::ScheduleError;
pub use invite::{
    is_valid_email, sanitize_input, CalendarEventRequest, EmailComposeRequest, InviteFormatter,
};
pub use session::{BookingSession, LinkKind, OutboundLink, ViewMode};
pub use slots::TimeSlot;
