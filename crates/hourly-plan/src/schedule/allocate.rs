//! Splitting the requested hours across occurrences.

use crate::error::{PlanError, PlanResult};

const MINUTES_PER_HOUR: u32 = 60;

/// Duration of one occurrence of the work block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkBlock {
    pub hours_per_day: u32,
    /// Always below 60.
    pub minutes_per_day: u32,
}

impl WorkBlock {
    #[must_use]
    pub const fn new(hours_per_day: u32, minutes_per_day: u32) -> Self {
        Self {
            hours_per_day,
            minutes_per_day,
        }
    }

    #[must_use]
    pub fn total_minutes(self) -> u64 {
        u64::from(self.hours_per_day) * u64::from(MINUTES_PER_HOUR) + u64::from(self.minutes_per_day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub block: WorkBlock,
    /// Whole hours left over after `hours_per_day` is given to every occurrence.
    pub remainder_hours: u32,
}

/// ## Summary
/// Divides `hours_needed` evenly over `occurrences`.
///
/// The leftover hours are spread as whole minutes, rounded down; sub-minute
/// fractions are dropped rather than carried, so the scheduled total may fall
/// slightly short of `hours_needed`.
///
/// ## Errors
/// Returns `PlanError::InvalidRequest` if `occurrences` is zero.
pub fn allocate_hours(hours_needed: u32, occurrences: u32) -> PlanResult<Allocation> {
    if occurrences == 0 {
        return Err(PlanError::InvalidRequest(
            "cannot allocate hours over zero occurrences".to_string(),
        ));
    }

    let hours_per_day = hours_needed / occurrences;
    let remainder_hours = hours_needed % occurrences;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "remainder_hours < occurrences, so the quotient is below 60"
    )]
    let minutes_per_day = if remainder_hours == 0 {
        0
    } else {
        (u64::from(remainder_hours) * u64::from(MINUTES_PER_HOUR) / u64::from(occurrences)) as u32
    };

    tracing::debug!(
        hours_needed,
        occurrences,
        hours_per_day,
        remainder_hours,
        minutes_per_day,
        "Allocated hours"
    );

    Ok(Allocation {
        block: WorkBlock::new(hours_per_day, minutes_per_day),
        remainder_hours,
    })
}
