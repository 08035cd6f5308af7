//! The recurring calendar event handed to the persistence side.

use chrono::{NaiveDate, NaiveDateTime};
use hourly_rfc::rfc::ical::core::{RRule, format_extended};
use hourly_rfc::rfc::ical::expand::{ExpansionOptions, expand_rrule};
use hourly_rfc::error::RfcError;
use serde::Serialize;

use super::rollover::{TimeRollover, roll_date};
use crate::error::PlanResult;
use crate::request::TaskRequest;

/// First occurrence of the work block plus the rule that repeats it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub summary: String,
    pub location: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub time_zone: String,
    pub recurrence: RRule,
    /// Local date whose midnight bounds the recurrence; the rule carries it in UTC.
    pub until_date: NaiveDate,
}

/// Wire form of an event, as a calendar API insert body.
#[derive(Debug, Serialize)]
pub struct EventBody<'a> {
    pub summary: &'a str,
    pub location: &'a str,
    pub description: &'a str,
    pub start: EventTime<'a>,
    pub end: EventTime<'a>,
    pub recurrence: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime<'a> {
    pub date_time: String,
    pub time_zone: &'a str,
}

impl ScheduledEvent {
    #[must_use]
    pub fn body(&self) -> EventBody<'_> {
        EventBody {
            summary: &self.summary,
            location: &self.location,
            description: &self.description,
            start: EventTime {
                date_time: format_extended(self.start),
                time_zone: &self.time_zone,
            },
            end: EventTime {
                date_time: format_extended(self.end),
                time_zone: &self.time_zone,
            },
            recurrence: vec![self.recurrence.to_content_line()],
        }
    }

    /// ## Summary
    /// Serializes the insert body as pretty-printed JSON.
    ///
    /// ## Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.body())
    }

    /// ## Summary
    /// Expands the recurrence into local occurrence start times, at most `limit` of them.
    ///
    /// ## Errors
    /// Returns `PlanError::RfcError` if the rule or zone cannot be expanded.
    pub fn occurrences(&self, limit: u16) -> PlanResult<Vec<NaiveDateTime>> {
        let options = ExpansionOptions::default().with_max_instances(limit);
        expand_rrule(
            &self.recurrence.to_string(),
            self.start,
            &self.time_zone,
            &options,
        )
        .map_err(|e| RfcError::from(e).into())
    }
}

/// ## Summary
/// Composes the first occurrence and the recurrence rule into a `ScheduledEvent`.
///
/// The end date is the start date rolled forward by the block's day offset.
///
/// ## Errors
/// Returns `PlanError::CalendarOverflow` if rolling the end date fails.
pub fn assemble_event(
    request: &TaskRequest,
    rollover: &TimeRollover,
    recurrence: RRule,
    until_date: NaiveDate,
) -> PlanResult<ScheduledEvent> {
    let start = request.start_date.and_time(request.start_time);
    let end = roll_date(request.start_date, rollover.day_offset)?.and_time(rollover.end);

    Ok(ScheduledEvent {
        summary: request.summary.clone(),
        location: request.location.clone(),
        description: request.description.clone(),
        start,
        end,
        time_zone: request.time_zone.clone(),
        recurrence,
        until_date,
    })
}
