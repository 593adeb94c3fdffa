//! The shift-assignment engine.
//!
//! Single-threaded, synchronous, run-to-completion. The
//! [`ScheduleRunner`] drives one [`AssignmentPlanner`] across a date's
//! requirements; the planner consults an [`AvailabilityFilter`] for the
//! candidate pool, a [`LoadTracker`] for accumulated hours, and the
//! [`OverlapGuard`] for double-booking, emitting a filled or explicitly
//! unfilled [`Assignment`](crate::models::Assignment) per slot.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use shift_roster::engine::{PlanningSnapshot, ScheduleRunner};
//! use shift_roster::models::{Employee, Requirement, ShiftCatalog};
//! use shift_roster::store::MemoryStore;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
//! let snapshot = PlanningSnapshot::new(ShiftCatalog::standard())
//!     .with_employee(
//!         Employee::new("e1", "Ana")
//!             .with_department("icu")
//!             .with_role("nurse")
//!             .available_all_week(),
//!     )
//!     .with_requirement(Requirement::new("icu", date, 12).with_role("nurse"));
//!
//! let mut store = MemoryStore::new();
//! let report = ScheduleRunner::new(&snapshot, &mut store)
//!     .with_seed(42)
//!     .run(date)
//!     .unwrap();
//! assert_eq!(report.filled_count(), 1);
//! ```

mod availability;
mod kpi;
mod load;
mod overlap;
mod planner;
mod report;
mod runner;
pub mod structure;

pub use availability::AvailabilityFilter;
pub use kpi::RosterKpi;
pub use load::LoadTracker;
pub use overlap::OverlapGuard;
pub use planner::{AssignmentPlanner, PlanOutcome};
pub use report::{OverCapEntry, RunEvent, RunReport};
pub use runner::{PlanningSnapshot, ScheduleRunner};
