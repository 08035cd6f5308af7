//! Runs the planning stages over one request.

use crate::error::PlanResult;
use crate::request::TaskRequest;
use crate::schedule::allocate::{Allocation, allocate_hours};
use crate::schedule::event::{ScheduledEvent, assemble_event};
use crate::schedule::recurrence::build_recurrence;
use crate::schedule::rollover::{TimeRollover, roll_time, until_bound, until_date};
use crate::schedule::window::{WindowAnalysis, analyze_window};

/// Every intermediate result of a planning run, along with the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub window: WindowAnalysis,
    pub allocation: Allocation,
    pub rollover: TimeRollover,
    pub event: ScheduledEvent,
}

/// ## Summary
/// Turns a request into a recurring event, keeping the intermediate results.
///
/// Stages run strictly in order: window analysis, hour allocation, time and date
/// rollover, recurrence rule, event assembly. Nothing is produced unless every
/// stage succeeds.
///
/// ## Errors
/// - `PlanError::InvalidRequest` if the request fails validation
/// - `PlanError::NoAvailableOccurrences` if no permitted weekday falls in the window
/// - `PlanError::CalendarOverflow` if a rolled date is out of range
#[tracing::instrument(skip_all, fields(summary = %request.summary))]
pub fn plan(request: &TaskRequest) -> PlanResult<Plan> {
    request.validate()?;

    let window = analyze_window(request.start_date, request.end_date, &request.available_days)?;
    let allocation = allocate_hours(request.hours_needed, window.effective_occurrences)?;
    let rollover = roll_time(request.start_time, allocation.block)?;
    let until = until_date(request.end_date)?;
    let bound = until_bound(until, request.zone()?)?;
    let recurrence = build_recurrence(&request.available_days, bound);
    let event = assemble_event(request, &rollover, recurrence, until)?;

    tracing::debug!(
        occurrences = window.effective_occurrences,
        hours_per_day = allocation.block.hours_per_day,
        minutes_per_day = allocation.block.minutes_per_day,
        start = %event.start,
        end = %event.end,
        "Planned event"
    );

    Ok(Plan {
        window,
        allocation,
        rollover,
        event,
    })
}

/// ## Summary
/// Turns a request into a recurring event.
///
/// ## Errors
/// See [`plan`].
pub fn plan_event(request: &TaskRequest) -> PlanResult<ScheduledEvent> {
    plan(request).map(|plan| plan.event)
}
