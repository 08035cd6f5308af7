//! Counting the work occurrences that fit inside a date window.

use chrono::{Datelike, NaiveDate};
use hourly_rfc::rfc::ical::core::{Weekday, WeekdaySet};

use crate::error::{PlanError, PlanResult};

const DAYS_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowAnalysis {
    /// `end - start` in whole days.
    pub days_between: i64,
    /// Weeks touched by the window, rounded up.
    pub weeks: i64,
    /// Always at least one.
    pub effective_occurrences: u32,
}

/// ## Summary
/// Counts how many permitted weekdays fall inside `start..=end`.
///
/// Every started week contributes one occurrence per permitted weekday. Permitted
/// weekdays earlier in the week than `start` are dropped from the first week, and
/// those later than `end` from the last.
///
/// ## Errors
/// Returns `PlanError::InvalidRequest` for an empty or inverted window or an empty
/// weekday set, and `PlanError::NoAvailableOccurrences` if nothing is left after
/// the partial-week discount.
pub fn analyze_window(
    start: NaiveDate,
    end: NaiveDate,
    days: &WeekdaySet,
) -> PlanResult<WindowAnalysis> {
    if end <= start {
        return Err(PlanError::InvalidRequest(format!(
            "window {start}..{end} is empty"
        )));
    }
    if days.is_empty() {
        return Err(PlanError::InvalidRequest(
            "at least one weekday must be selected".to_string(),
        ));
    }

    let days_between = (end - start).num_days();
    let weeks = (days_between + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK;

    let start_day = Weekday::from(start.weekday());
    let end_day = Weekday::from(end.weekday());

    #[expect(
        clippy::cast_possible_wrap,
        reason = "a weekday set holds at most seven days"
    )]
    let (per_week, before_start, after_end) = (
        days.len() as i64,
        days.count_before(start_day) as i64,
        days.count_after(end_day) as i64,
    );

    let effective = per_week * (days_between / DAYS_PER_WEEK + 1) - before_start - after_end;

    tracing::debug!(
        days_between,
        weeks,
        per_week,
        before_start,
        after_end,
        effective,
        "Analyzed window"
    );

    if effective <= 0 {
        return Err(PlanError::NoAvailableOccurrences {
            start,
            end,
            days: days.to_string(),
        });
    }

    let effective_occurrences = u32::try_from(effective).map_err(|_e| {
        PlanError::InvalidRequest(format!("window {start}..{end} is too long"))
    })?;

    Ok(WindowAnalysis {
        days_between,
        weeks,
        effective_occurrences,
    })
}
