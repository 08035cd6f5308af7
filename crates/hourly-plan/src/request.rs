//! Work requests and the form input they are validated from.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use hourly_rfc::rfc::ical::core::WeekdaySet;
use serde::Deserialize;

use crate::error::{PlanError, PlanResult};

/// Accepted start time layouts: 24-hour first, then 12-hour with an AM/PM marker.
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%I:%M %p", "%I:%M%p"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated request to spread `hours_needed` over a date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub hours_needed: u32,
    pub start_date: NaiveDate,
    /// Last day of the window; strictly after `start_date`.
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub available_days: WeekdaySet,
    /// IANA zone identifier attached to the event timestamps.
    pub time_zone: String,
}

impl TaskRequest {
    /// ## Summary
    /// Checks the fields the planner relies on before any arithmetic runs.
    ///
    /// ## Errors
    /// Returns `PlanError::InvalidRequest` if hours are zero, the window is empty or
    /// inverted, no weekday is selected, or the time zone is unknown.
    pub fn validate(&self) -> PlanResult<()> {
        if self.hours_needed == 0 {
            return Err(invalid("hours needed must be a positive integer"));
        }
        if self.end_date <= self.start_date {
            return Err(invalid(format!(
                "end date {} must be after start date {}",
                self.end_date, self.start_date
            )));
        }
        if self.available_days.is_empty() {
            return Err(invalid("at least one weekday must be selected"));
        }
        self.zone()?;
        Ok(())
    }

    /// ## Summary
    /// The request's time zone, resolved from its IANA identifier.
    ///
    /// ## Errors
    /// Returns `PlanError::InvalidRequest` if the identifier is unknown.
    pub fn zone(&self) -> PlanResult<Tz> {
        parse_time_zone(&self.time_zone)
    }
}

/// Raw form input, exactly as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskForm {
    pub name: String,
    pub location: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub hours: String,
    pub days: Vec<String>,
    pub time_zone: String,
}

impl TaskForm {
    /// ## Summary
    /// Validates the form and converts it into a `TaskRequest`.
    ///
    /// `today` is the caller's current local date; a start date before it is rejected.
    ///
    /// ## Errors
    /// Returns `PlanError::InvalidRequest` describing the first field that fails.
    pub fn into_request(self, today: NaiveDate) -> PlanResult<TaskRequest> {
        let summary = self.name.trim().to_string();
        if summary.is_empty() {
            return Err(invalid("enter an event name"));
        }

        let start_date = parse_date("start date", &self.start_date)?;
        let end_date = parse_date("end date", &self.end_date)?;
        if start_date >= end_date {
            return Err(invalid("end date must be after start date"));
        }
        if start_date < today {
            return Err(invalid("cannot schedule a task starting in the past"));
        }

        let hours_needed = parse_hours(&self.hours)?;
        let start_time = parse_start_time(&self.start_time)?;

        let available_days = WeekdaySet::from_codes(&self.days)
            .map_err(|e| PlanError::InvalidRequest(e.to_string()))?;
        if available_days.is_empty() {
            return Err(invalid("toggle at least one day"));
        }

        let time_zone = self.time_zone.trim().to_string();
        parse_time_zone(&time_zone)?;

        Ok(TaskRequest {
            summary,
            location: self.location.trim().to_string(),
            description: self.description.trim_end().to_string(),
            hours_needed,
            start_date,
            end_date,
            start_time,
            available_days,
            time_zone,
        })
    }
}

/// ## Summary
/// Parses a start time such as `22:30`, `10:30 PM` or `12:05am`.
///
/// ## Errors
/// Returns `PlanError::InvalidRequest` if no accepted layout matches.
pub fn parse_start_time(text: &str) -> PlanResult<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return Err(invalid("enter a time"));
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
        .ok_or_else(|| invalid(format!("'{text}' is not a time of day")))
}

fn parse_date(field: &str, text: &str) -> PlanResult<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return Err(invalid(format!("select a {field}")));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| invalid(format!("{field} '{text}' is not a YYYY-MM-DD date: {e}")))
}

fn parse_hours(text: &str) -> PlanResult<u32> {
    let text = text.trim();
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid(format!(
            "hours needed '{text}' must be a positive integer"
        ))),
        Ok(hours) => Ok(hours),
    }
}

fn parse_time_zone(text: &str) -> PlanResult<Tz> {
    text.parse::<Tz>()
        .map_err(|_e| invalid(format!("unknown time zone '{text}'")))
}

fn invalid(reason: impl Into<String>) -> PlanError {
    PlanError::InvalidRequest(reason.into())
}
