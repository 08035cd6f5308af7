//! The planning stages, in pipeline order.

pub mod window;
pub mod allocate;
pub mod rollover;
pub mod recurrence;
pub mod event;
