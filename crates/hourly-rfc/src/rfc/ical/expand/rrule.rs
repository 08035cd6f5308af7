//! RRULE expansion using the `rrule` crate.

use chrono::NaiveDateTime;

use crate::rfc::ical::core::format_basic;

/// Error during recurrence expansion.
#[derive(Debug, thiserror::Error)]
pub enum ExpansionError {
    /// Failed to parse the DTSTART/RRULE pair.
    #[error("Failed to parse RRULE: {0}")]
    ParseError(String),
}

/// Options for recurrence expansion.
#[derive(Debug, Clone)]
pub struct ExpansionOptions {
    /// Maximum number of occurrences to generate.
    pub max_instances: u16,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_instances: 1000, // Default limit to prevent runaway expansion
        }
    }
}

impl ExpansionOptions {
    /// Sets the maximum number of instances.
    #[must_use]
    pub fn with_max_instances(mut self, max: u16) -> Self {
        self.max_instances = max;
        self
    }
}

/// ## Summary
/// Expands a recurrence rule anchored at a zoned local start into occurrence start times.
///
/// `rrule_text` is the rule value without the `RRULE:` prefix. `tzid` is the IANA
/// zone the start is expressed in; the returned values are wall-clock times in that zone.
///
/// ## Errors
///
/// Returns an error if the zone, the start or the rule cannot be parsed by `rrule`.
///
/// ## Side Effects
///
/// None - this is a pure function that performs expansion in memory.
pub fn expand_rrule(
    rrule_text: &str,
    dtstart: NaiveDateTime,
    tzid: &str,
    options: &ExpansionOptions,
) -> Result<Vec<NaiveDateTime>, ExpansionError> {
    let rrule_text = rrule_text.strip_prefix("RRULE:").unwrap_or(rrule_text);
    let rrule_string = format!(
        "DTSTART;TZID={tzid}:{}\nRRULE:{rrule_text}",
        format_basic(dtstart)
    );
    tracing::trace!(rruleset = %rrule_string, "Expanding recurrence");

    let rrule_set = rrule_string
        .parse::<rrule::RRuleSet>()
        .map_err(|e| ExpansionError::ParseError(e.to_string()))?;

    let result = rrule_set.all(options.max_instances);
    if result.limited {
        tracing::debug!(
            max_instances = options.max_instances,
            "Expansion stopped at instance limit"
        );
    }

    Ok(result.dates.iter().map(chrono::DateTime::naive_local).collect())
}
