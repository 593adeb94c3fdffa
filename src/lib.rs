//! Shift-assignment engine.
//!
//! Assigns employees to time-bounded shifts across departments for a
//! given day, subject to hour caps, availability, role eligibility, and
//! shift-overlap constraints. The engine consumes a read-only snapshot
//! of requirements, employees, and the shift-template catalog, and
//! produces assignment records — filled, or explicitly unfilled when a
//! slot cannot be staffed — for a storage collaborator to persist.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `Requirement`,
//!   `ShiftTemplate`, `ShiftCatalog`, `Assignment`, `Roster`, `TimeOff`
//! - **`engine`**: The planner and its collaborators —
//!   `AvailabilityFilter`, `LoadTracker`, `OverlapGuard`,
//!   `AssignmentPlanner`, `ScheduleRunner`
//! - **`store`**: The `AssignmentStore` persistence contract and an
//!   in-memory implementation
//! - **`validation`**: Snapshot integrity checks (duplicate ids,
//!   dangling references)
//! - **`logging`**: `tracing` subscriber setup for embedders
//!
//! # Design
//!
//! Greedy and run-to-completion: per requirement, the required coverage
//! hours are decomposed into template slots, and each slot takes the
//! least-loaded eligible employee who fits their caps and holds no
//! overlapping shift that date. Tie-breaking is random but seedable for
//! reproducible runs. Unstaffable slots become explicit unfilled
//! records, never silent gaps; cap violations inherited from persisted
//! history are reported, never auto-corrected.

pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod validation;

pub use error::{RosterError, RosterResult};
