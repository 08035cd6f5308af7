//! Weekly recurrence rule for the work block.

use hourly_rfc::rfc::ical::core::{RRule, UtcDateTime, WeekdaySet};

/// ## Summary
/// Builds `FREQ=WEEKLY;INTERVAL=1;UNTIL=<until>;BYDAY=<days>`.
///
/// `days` renders in canonical Monday-first order whatever order it was filled in.
#[must_use]
pub fn build_recurrence(days: &WeekdaySet, until: UtcDateTime) -> RRule {
    let rrule = RRule::weekly()
        .with_interval(1)
        .with_until(until)
        .with_by_day(days.clone());
    tracing::debug!(rrule = %rrule, "Built recurrence rule");
    rrule
}
