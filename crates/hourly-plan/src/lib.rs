//! Turns a work request (hours needed, a date window, a daily start time and the
//! permitted weekdays) into one recurring calendar event.
//!
//! The pipeline is pure and synchronous:
//! window analysis → hour allocation → time/date rollover → recurrence rule → event.

pub mod error;
pub mod planner;
pub mod request;
pub mod schedule;

pub use planner::{Plan, plan, plan_event};
pub use request::{TaskForm, TaskRequest};
pub use schedule::event::ScheduledEvent;
