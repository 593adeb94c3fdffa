//! Rostering domain models.
//!
//! Reference data (departments, roles, employees, shift templates,
//! requirements, time off) is created and maintained by the surrounding
//! application; the engine reads it through a snapshot and produces
//! [`Assignment`] records in return.
//!
//! # Time model
//!
//! Calendar dates are `chrono::NaiveDate`; shift boundaries are wall-clock
//! `chrono::NaiveTime` pairs that may wrap past midnight. All durations
//! are minute-accurate (see [`ShiftInterval`]); caps expressed in hours
//! convert via `* 60`.

mod assignment;
mod employee;
mod interval;
mod org;
mod requirement;
mod shift_template;
mod time_off;

pub use assignment::{Assignment, Roster};
pub use employee::Employee;
pub use interval::ShiftInterval;
pub use org::{Department, Role};
pub use requirement::Requirement;
pub use shift_template::{ShiftCatalog, ShiftTemplate};
pub use time_off::{TimeOff, TimeOffReason};
