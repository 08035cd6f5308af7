//! iCalendar DATE-TIME value rendering (RFC 5545 §3.3.5).

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// Compact basic format used by DATE-TIME values, without the UTC marker.
pub const BASIC_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Extended ISO-8601 local format, e.g. `2026-10-19T10:00:00`.
pub const EXTENDED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A UTC DATE-TIME (RFC 5545 §3.3.5, form #2).
///
/// Renders as `YYYYMMDDTHHMMSSZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UtcDateTime(NaiveDateTime);

impl<Tz: TimeZone> From<DateTime<Tz>> for UtcDateTime {
    fn from(instant: DateTime<Tz>) -> Self {
        Self(instant.naive_utc())
    }
}

impl fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Z", self.0.format(BASIC_FORMAT))
    }
}

/// Formats a floating local date-time in basic form (`YYYYMMDDTHHMMSS`).
#[must_use]
pub fn format_basic(datetime: NaiveDateTime) -> String {
    datetime.format(BASIC_FORMAT).to_string()
}

/// Formats a floating local date-time in extended ISO-8601 form.
#[must_use]
pub fn format_extended(datetime: NaiveDateTime) -> String {
    datetime.format(EXTENDED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn utc_display() {
        let instant = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(UtcDateTime::from(instant).to_string(), "20270101T000000Z");
    }

    #[test]
    fn offset_instant_renders_in_utc() {
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
        let instant = pacific.with_ymd_and_hms(2026, 10, 31, 0, 0, 0).unwrap();
        assert_eq!(UtcDateTime::from(instant).to_string(), "20261031T070000Z");
    }

    #[test]
    fn local_formats() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_basic(dt), "20261019T090500");
        assert_eq!(format_extended(dt), "2026-10-19T09:05:00");
    }
}
