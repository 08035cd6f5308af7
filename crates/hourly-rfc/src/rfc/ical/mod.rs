//! iCalendar RFC 5545 support.
//!
//! - `core`: Type definitions for recurrence rules and date-time values
//! - `expand`: Occurrence expansion backed by the `rrule` crate

pub mod core;
pub mod expand;
