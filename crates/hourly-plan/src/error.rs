use chrono::NaiveDate;
use thiserror::Error;

/// Planning errors. None of these are retried: the computation is deterministic.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No available occurrences between {start} and {end} on {days}")]
    NoAvailableOccurrences {
        start: NaiveDate,
        end: NaiveDate,
        days: String,
    },

    /// Internal guard of the date rollover; reaching it is a bug, not a user error.
    #[error("Calendar overflow: {0}")]
    CalendarOverflow(String),

    #[error(transparent)]
    RfcError(#[from] hourly_rfc::error::RfcError),
}

pub type PlanResult<T> = std::result::Result<T, PlanError>;
