//! iCalendar RRULE (Recurrence Rule) value type (RFC 5545 §3.3.10, §3.8.5.3).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::UtcDateTime;
use crate::error::{RfcError, RfcResult};

/// Day of the week.
///
/// Declaration order is the canonical order used everywhere a weekday list is
/// rendered: Monday first, Sunday last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in canonical order (Monday through Sunday).
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    ///
    /// English day names (`mon`, `Tuesday`) are accepted as well.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .or_else(|| chrono::Weekday::from_str(s).ok().map(Self::from))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A set of weekdays that always iterates in canonical order.
///
/// Insertion order and duplicates in the input have no effect on the output,
/// so a BYDAY list built from it is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdaySet(BTreeSet<Weekday>);

impl WeekdaySet {
    /// ## Summary
    /// Builds a set from weekday codes such as `["FR", "MO", "we"]`.
    ///
    /// ## Errors
    /// Returns `RfcError::ParseError` for the first code that is not a weekday.
    pub fn from_codes<I, S>(codes: I) -> RfcResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|code| {
                let code = code.as_ref();
                Weekday::parse(code)
                    .ok_or_else(|| RfcError::ParseError(format!("unknown weekday code '{code}'")))
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Number of days in the set that come strictly before `day` in the week.
    #[must_use]
    pub fn count_before(&self, day: Weekday) -> usize {
        self.0.range(..day).count()
    }

    /// Number of days in the set that come strictly after `day` in the week.
    #[must_use]
    pub fn count_after(&self, day: Weekday) -> usize {
        self.iter().filter(|d| *d > day).count()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<_> = self.iter().map(Weekday::as_str).collect();
        write!(f, "{}", codes.join(","))
    }
}

/// Weekly recurrence rule (RFC 5545 §3.3.10, §3.8.5.3).
///
/// Only the rule parts the planner emits are modelled; `FREQ` is always `WEEKLY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RRule {
    /// Recurrence interval. Rendered whenever it is set, including `1`.
    pub interval: Option<u32>,

    /// Inclusive UTC bound of the recurrence.
    pub until: Option<UtcDateTime>,

    /// By-day list.
    pub by_day: WeekdaySet,
}

impl RRule {
    /// Creates a weekly recurrence rule.
    #[must_use]
    pub fn weekly() -> Self {
        Self {
            interval: None,
            until: None,
            by_day: WeekdaySet::default(),
        }
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the until date-time.
    #[must_use]
    pub fn with_until(mut self, until: UtcDateTime) -> Self {
        self.until = Some(until);
        self
    }

    /// Sets the by-day list.
    #[must_use]
    pub fn with_by_day(mut self, days: WeekdaySet) -> Self {
        self.by_day = days;
        self
    }

    /// Renders the rule as an `RRULE:` content line value.
    #[must_use]
    pub fn to_content_line(&self) -> String {
        format!("RRULE:{self}")
    }
}

impl fmt::Display for RRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = vec!["FREQ=WEEKLY".to_string()];

        if let Some(interval) = self.interval {
            parts.push(format!("INTERVAL={interval}"));
        }

        if let Some(ref until) = self.until {
            parts.push(format!("UNTIL={until}"));
        }

        if !self.by_day.is_empty() {
            parts.push(format!("BYDAY={}", self.by_day));
        }

        write!(f, "{}", parts.join(";"))
    }
}
