use pluview_common::PluviewError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
    #[error("Unknown interest: {0}")]
    UnknownInterest(String),
    #[error("No meeting date selected")]
    NoDateSelected,
    #[error("No meeting time selected")]
    NoTimeSelected,
    #[error("Selected time {0} is no longer available")]
    SlotUnavailable(String),
    #[error("Failed to parse time slot: {0}")]
    TimeSlotParse(String),
    #[error("Failed to encode outbound link: {0}")]
    Encoding(String),
}

impl From<ScheduleError> for PluviewError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::TimeSlotParse(msg) => PluviewError::ParseError(msg),
            ScheduleError::Encoding(msg) => PluviewError::InternalError(msg),
            other => PluviewError::ValidationError(other.to_string()),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for ScheduleError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        ScheduleError::Encoding(err.to_string())
    }
}
