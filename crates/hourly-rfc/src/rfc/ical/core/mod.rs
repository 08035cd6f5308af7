//! iCalendar core models (RFC 5545).
//!
//! Only the value types a generated recurring event needs: the recurrence rule,
//! its weekday list and UTC bound, and the date-time renderings.

mod datetime;
mod rrule;

pub use datetime::{BASIC_FORMAT, EXTENDED_FORMAT, UtcDateTime, format_basic, format_extended};
pub use rrule::{RRule, Weekday, WeekdaySet};
