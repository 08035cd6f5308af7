//! Calendar-safe carry from minutes into hours, hours into days, and days into
//! months and years.
//!
//! Overflow is detected by comparing against the month length before a date is
//! constructed, so rolling past the end of a month is an ordinary branch.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Timelike};
use chrono_tz::Tz;
use hourly_rfc::rfc::ical::core::UtcDateTime;

use super::allocate::WorkBlock;
use crate::error::{PlanError, PlanResult};

const MINUTES_PER_HOUR: u64 = 60;
const HOURS_PER_DAY: u64 = 24;

/// Latest start the until bound must still cover, and the block length assumed for it.
const UNTIL_LOOKAHEAD_START_HOUR: u32 = 23;
const UNTIL_LOOKAHEAD_HOURS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRollover {
    /// Wall-clock end of the block.
    pub end: NaiveTime,
    /// Set when the minutes carried into the hour.
    pub hour_carry: bool,
    /// Days between the block's start date and its end date (0 or 1).
    pub day_offset: u32,
}

/// ## Summary
/// Computes the end time-of-day of a block starting at `start`.
///
/// Minutes carry into the hour only when their sum exceeds 60. The block moves to
/// the next day when the start hour plus the whole hours reach 24.
///
/// ## Errors
/// Returns `PlanError::CalendarOverflow` if the wrapped time cannot be represented.
pub fn roll_time(start: NaiveTime, block: WorkBlock) -> PlanResult<TimeRollover> {
    let start_hour = u64::from(start.hour());
    let start_minute = u64::from(start.minute());
    let hours = u64::from(block.hours_per_day);
    let minutes = u64::from(block.minutes_per_day);

    let hour_carry = start_minute + minutes > MINUTES_PER_HOUR;
    let end_hour = (start_hour + hours + u64::from(hour_carry)) % HOURS_PER_DAY;
    let end_minute = (start_minute + minutes) % MINUTES_PER_HOUR;
    let day_offset = u32::from(start_hour + hours >= HOURS_PER_DAY);

    #[expect(
        clippy::cast_possible_truncation,
        reason = "values are reduced modulo 24 and 60"
    )]
    let end = NaiveTime::from_hms_opt(end_hour as u32, end_minute as u32, 0).ok_or_else(|| {
        PlanError::CalendarOverflow(format!("{end_hour:02}:{end_minute:02} is not a time"))
    })?;

    tracing::trace!(%start, %end, hour_carry, day_offset, "Rolled time");

    Ok(TimeRollover {
        end,
        hour_carry,
        day_offset,
    })
}

/// ## Summary
/// Returns `base` moved forward by `day_offset` days.
///
/// The day number is compared with the length of the current month before any
/// date is built; each overflow moves to the next month, and December rolls into
/// January of the next year.
///
/// ## Errors
/// Returns `PlanError::CalendarOverflow` if the result lies outside the supported
/// calendar range.
pub fn roll_date(base: NaiveDate, day_offset: u32) -> PlanResult<NaiveDate> {
    let mut year = base.year();
    let mut month = base.month();
    let mut day = u64::from(base.day()) + u64::from(day_offset);

    loop {
        let month_len = u64::from(days_in_month(year, month));
        if day <= month_len {
            break;
        }
        day -= month_len;
        if month == 12 {
            month = 1;
            year = year.checked_add(1).ok_or_else(|| {
                PlanError::CalendarOverflow(format!("year after {year} is out of range"))
            })?;
        } else {
            month += 1;
        }
    }

    let rolled = u32::try_from(day)
        .ok()
        .and_then(|day| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(|| {
            PlanError::CalendarOverflow(format!(
                "{base} + {day_offset} days gives {year:04}-{month:02}-{day:02}"
            ))
        })?;

    tracing::trace!(%base, day_offset, %rolled, "Rolled date");
    Ok(rolled)
}

/// ## Summary
/// The first local date the recurrence is no longer allowed to reach.
///
/// Assumes the latest plausible block on `end_date` (a two hour block from 23:00),
/// which always spills into the next day. Every block starting on `end_date`
/// starts before midnight of the returned date.
///
/// ## Errors
/// Returns `PlanError::CalendarOverflow` if the rolled date is out of range.
pub fn until_date(end_date: NaiveDate) -> PlanResult<NaiveDate> {
    let latest_start = NaiveTime::from_hms_opt(UNTIL_LOOKAHEAD_START_HOUR, 0, 0)
        .ok_or_else(|| PlanError::CalendarOverflow("lookahead start is not a time".to_string()))?;
    let lookahead = roll_time(latest_start, WorkBlock::new(UNTIL_LOOKAHEAD_HOURS, 0))?;
    roll_date(end_date, lookahead.day_offset)
}

/// ## Summary
/// The UTC instant of local midnight at the start of `until`, in `time_zone`.
///
/// RRULE compares UNTIL against occurrence starts, so the bound falls after every
/// start on the day before `until`; only a start at exactly midnight of `until`
/// would still match the inclusive bound. In UTC
/// this is `<until>T000000Z`. When midnight is skipped by a daylight saving change,
/// the day starts one hour later.
///
/// ## Errors
/// Returns `PlanError::CalendarOverflow` if local midnight cannot be placed in
/// `time_zone`.
pub fn until_bound(until: NaiveDate, time_zone: Tz) -> PlanResult<UtcDateTime> {
    let midnight = until.and_time(NaiveTime::MIN);
    let instant = time_zone
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            midnight
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|shifted| time_zone.from_local_datetime(&shifted).earliest())
        })
        .ok_or_else(|| {
            PlanError::CalendarOverflow(format!(
                "midnight of {until} does not exist in {}",
                time_zone.name()
            ))
        })?;

    let bound = UtcDateTime::from(instant);
    tracing::trace!(%until, zone = time_zone.name(), %bound, "Resolved recurrence bound");
    Ok(bound)
}

/// Number of days in `month` (1-12) of the proleptic Gregorian `year`.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
