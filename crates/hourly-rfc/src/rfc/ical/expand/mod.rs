//! Recurrence expansion for generated events.
//!
//! This module expands RFC 5545 recurrence rules (RRULE) into occurrence start times.

mod rrule;

pub use rrule::{ExpansionError, ExpansionOptions, expand_rrule};
