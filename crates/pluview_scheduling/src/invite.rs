// --- File: crates/pluview_scheduling/src/invite.rs ---
//! Turns a finished draft into the two outbound requests the contact modal
//! can open: a webmail compose window and a calendar event template.
//!
//! Every free-text field is sanitized before it is placed in either output,
//! and the submitter's address is checked again here no matter what the
//! draft-level validity said.

use crate::draft::{BookingDraft, ContactField};
use crate::error::ScheduleError;
use chrono::{Duration, NaiveDateTime};
use once_cell::sync::Lazy;
use pluview_config::{SchedulingConfig, DEFAULT_LOCATION, DEFAULT_ORGANIZER_EMAIL};
use regex::Regex;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{debug, warn};

pub const DEFAULT_MAX_FIELD_LENGTH: usize = 500;
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 254;
pub const DEFAULT_MEETING_MINUTES: u32 = 30;
pub const COMPANY_NOT_PROVIDED: &str = "Não informada";

pub const GMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/";
pub const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
/// Local time, no offset: `YYYYMMDDTHHMMSS`.
pub const CALENDAR_DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

static ANGLE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").expect("valid regex"));
static JAVASCRIPT_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("valid regex"));
static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on[A-Za-z0-9_]+=").expect("valid regex"));
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Strips markup and script-looking fragments, trims, and truncates to `max_length` characters.
///
/// Scheme and handler removal repeats until nothing changes, so removing one
/// fragment cannot splice together a new one. This keeps URL parameters tame;
/// it is not an HTML escaper.
pub fn sanitize_input(input: &str, max_length: usize) -> String {
    let mut text = ANGLE_BRACKETS.replace_all(input, "").into_owned();
    loop {
        let without_scheme = JAVASCRIPT_SCHEME.replace_all(&text, "");
        let stripped = EVENT_HANDLER.replace_all(&without_scheme, "").into_owned();
        if stripped == text {
            break;
        }
        text = stripped;
    }
    text.trim().chars().take(max_length).collect()
}

/// `local@domain.tld` shape, no whitespace, at most 254 characters.
pub fn is_valid_email(email: &str) -> bool {
    is_valid_email_with_limit(email, DEFAULT_MAX_EMAIL_LENGTH)
}

pub fn is_valid_email_with_limit(email: &str, max_length: usize) -> bool {
    EMAIL_SHAPE.is_match(email) && email.chars().count() <= max_length
}

/// Contact fields after sanitization; the email is also lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedContact {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub interest: String,
    pub message: String,
}

impl SanitizedContact {
    fn company_or_marker(&self) -> &str {
        self.company.as_deref().unwrap_or(COMPANY_NOT_PROVIDED)
    }

    fn write_summary(&self, out: &mut String) {
        // writing into a String cannot fail
        let _ = write!(
            out,
            "Email: {}\nEmpresa: {}\nInteresse: {}\n\nMensagem:\n{}",
            self.email,
            self.company_or_marker(),
            self.interest,
            self.message
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailComposeRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl EmailComposeRequest {
    /// Gmail compose-window link.
    pub fn to_url(&self) -> Result<String, ScheduleError> {
        let query = serde_urlencoded::to_string([
            ("view", "cm"),
            ("fs", "1"),
            ("to", self.recipient.as_str()),
            ("su", self.subject.as_str()),
            ("body", self.body.as_str()),
        ])?;
        Ok(format!("{GMAIL_COMPOSE_URL}?{query}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEventRequest {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub details: String,
    pub attendees: Vec<String>,
    pub location: String,
}

impl CalendarEventRequest {
    /// `start/end` in local time without offset.
    pub fn dates(&self) -> String {
        format!(
            "{}/{}",
            self.start.format(CALENDAR_DATE_FORMAT),
            self.end.format(CALENDAR_DATE_FORMAT)
        )
    }

    /// Google Calendar event template link, with a Meet conference and guest notifications.
    pub fn to_url(&self) -> Result<String, ScheduleError> {
        let dates = self.dates();
        let attendees = self.attendees.join(",");
        let query = serde_urlencoded::to_string([
            ("action", "TEMPLATE"),
            ("text", self.title.as_str()),
            ("dates", dates.as_str()),
            ("details", self.details.as_str()),
            ("add", attendees.as_str()),
            ("crm", "AVAILABLE"),
            ("trp", "true"),
            ("location", self.location.as_str()),
        ])?;
        Ok(format!("{GOOGLE_CALENDAR_URL}?{query}"))
    }
}

#[derive(Debug, Clone)]
pub struct InviteFormatter {
    organizer_email: String,
    location: String,
    meeting_duration: Duration,
    max_field_length: usize,
    max_email_length: usize,
    /// Accepted interest labels; empty accepts any.
    interests: Vec<String>,
}

impl Default for InviteFormatter {
    fn default() -> Self {
        Self {
            organizer_email: DEFAULT_ORGANIZER_EMAIL.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            meeting_duration: Duration::minutes(DEFAULT_MEETING_MINUTES.into()),
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            interests: SchedulingConfig::default().interests,
        }
    }
}

impl InviteFormatter {
    pub fn from_config(config: &SchedulingConfig) -> Self {
        Self {
            organizer_email: config.organizer_email.clone(),
            location: config.location.clone(),
            meeting_duration: Duration::minutes(config.meeting_duration_minutes.into()),
            max_field_length: config.max_field_length,
            max_email_length: config.max_email_length,
            interests: config.interests.clone(),
        }
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn accepts_interest(&self, interest: &str) -> bool {
        self.interests.is_empty() || self.interests.iter().any(|known| known == interest)
    }

    pub fn organizer_email(&self) -> &str {
        &self.organizer_email
    }

    pub fn meeting_duration(&self) -> Duration {
        self.meeting_duration
    }

    pub fn sanitize(&self, draft: &BookingDraft) -> SanitizedContact {
        let clean = |value: &str| sanitize_input(value, self.max_field_length);
        let company = clean(&draft.company);
        SanitizedContact {
            name: clean(&draft.name),
            email: clean(&draft.email).to_lowercase(),
            company: (!company.is_empty()).then_some(company),
            interest: clean(&draft.interest),
            message: clean(&draft.message),
        }
    }

    /// Sanitized contact data, or the reason the draft cannot leave the modal.
    pub fn checked_contact(&self, draft: &BookingDraft) -> Result<SanitizedContact, ScheduleError> {
        if let Some(field) = draft.missing_contact_field() {
            return Err(ScheduleError::MissingField(field.label()));
        }
        let contact = self.sanitize(draft);
        // a field made only of markup is empty once sanitized
        for (field, value) in [
            (ContactField::Name, &contact.name),
            (ContactField::Interest, &contact.interest),
            (ContactField::Message, &contact.message),
        ] {
            if value.is_empty() {
                return Err(ScheduleError::MissingField(field.label()));
            }
        }
        if !self.accepts_interest(&contact.interest) {
            warn!("Rejecting invite with unknown interest {:?}", contact.interest);
            return Err(ScheduleError::UnknownInterest(contact.interest));
        }
        if !is_valid_email_with_limit(&contact.email, self.max_email_length) {
            warn!("Rejecting invite for invalid email address");
            return Err(ScheduleError::InvalidEmail(contact.email));
        }
        Ok(contact)
    }

    pub fn to_email_compose_request(
        &self,
        draft: &BookingDraft,
    ) -> Result<EmailComposeRequest, ScheduleError> {
        let contact = self.checked_contact(draft)?;
        let subject = format!("[PluView] {} - {}", contact.interest, contact.name);
        let mut body = format!("Nome: {}\n", contact.name);
        contact.write_summary(&mut body);

        debug!("Built email compose request: {}", subject);
        Ok(EmailComposeRequest {
            recipient: self.organizer_email.clone(),
            subject,
            body,
        })
    }

    pub fn to_calendar_event_request(
        &self,
        draft: &BookingDraft,
    ) -> Result<CalendarEventRequest, ScheduleError> {
        if let Some(field) = draft.missing_contact_field() {
            return Err(ScheduleError::MissingField(field.label()));
        }
        let date = draft.selected_date().ok_or(ScheduleError::NoDateSelected)?;
        let slot = draft.selected_time().ok_or(ScheduleError::NoTimeSelected)?;
        let contact = self.checked_contact(draft)?;

        let start = date.and_time(slot.to_time());
        let end = start + self.meeting_duration;
        let title = format!("PluView - {} com {}", contact.interest, contact.name);
        let mut details = format!(
            "Reunião agendada via PluView\n\nParticipante: {}\n",
            contact.name
        );
        contact.write_summary(&mut details);

        debug!("Built calendar event request: {} at {}", title, start);
        Ok(CalendarEventRequest {
            title,
            start,
            end,
            details,
            attendees: vec![self.organizer_email.clone(), contact.email],
            location: self.location.clone(),
        })
    }
}
