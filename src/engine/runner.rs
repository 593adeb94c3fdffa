//! Run orchestration.
//!
//! The runner drives the planner across every requirement for a date:
//! purge the date's persisted assignments, seed a fresh load tracker
//! from the surrounding ISO week, plan each requirement, persist each
//! produced record, then report employees left over their weekly cap.
//! A range run repeats this per date in order; later dates see earlier
//! dates' writes through the load seed.
//!
//! Runs are synchronous and run-to-completion. The engine holds no
//! locks; serializing concurrent runs for the same date is the store's
//! concern.

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{RosterError, RosterResult};
use crate::models::{
    Department, Employee, Requirement, Role, Roster, ShiftCatalog, TimeOff,
};
use crate::store::AssignmentStore;

use super::availability::AvailabilityFilter;
use super::load::LoadTracker;
use super::planner::AssignmentPlanner;
use super::report::{OverCapEntry, RunEvent, RunReport};

/// Read-only input for a scheduling run.
///
/// Assembled by the surrounding application from its reference data;
/// the engine never mutates it.
#[derive(Debug, Clone, Default)]
pub struct PlanningSnapshot {
    /// Departments, for reference and validation.
    pub departments: Vec<Department>,
    /// Roles, for reference and validation.
    pub roles: Vec<Role>,
    /// The employee roster.
    pub employees: Vec<Employee>,
    /// Shift-template reference data.
    pub catalog: ShiftCatalog,
    /// Staffing requirements across all dates of interest.
    pub requirements: Vec<Requirement>,
    /// Time-off records gating availability.
    pub time_off: Vec<TimeOff>,
}

impl PlanningSnapshot {
    /// Creates an empty snapshot around a catalog.
    pub fn new(catalog: ShiftCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Adds a department.
    pub fn with_department(mut self, department: Department) -> Self {
        self.departments.push(department);
        self
    }

    /// Adds a role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds a requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Adds a time-off record.
    pub fn with_time_off(mut self, time_off: TimeOff) -> Self {
        self.time_off.push(time_off);
        self
    }

    /// Requirements dated on `date`.
    pub fn requirements_for(&self, date: NaiveDate) -> Vec<&Requirement> {
        self.requirements.iter().filter(|r| r.date == date).collect()
    }
}

/// Drives the planner across a date's requirements.
pub struct ScheduleRunner<'a, S: AssignmentStore> {
    snapshot: &'a PlanningSnapshot,
    store: &'a mut S,
    seed: Option<u64>,
}

impl<'a, S: AssignmentStore> ScheduleRunner<'a, S> {
    /// Creates a runner over a snapshot and a store.
    pub fn new(snapshot: &'a PlanningSnapshot, store: &'a mut S) -> Self {
        Self {
            snapshot,
            store,
            seed: None,
        }
    }

    /// Seeds tie-breaking for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Regenerates one date.
    ///
    /// Deletes the date's persisted assignments, plans every
    /// requirement, persists each produced record, and reports over-cap
    /// employees. A store failure aborts the run for this date — a
    /// partially written date must never look like a completed
    /// schedule.
    pub fn run(&mut self, date: NaiveDate) -> RosterResult<RunReport> {
        let snapshot = self.snapshot;
        let mut events = Vec::new();

        let deleted = self.store.delete_for_date(date)?;
        info!(%date, deleted, "cleared schedule; regenerating");
        events.push(RunEvent::ScheduleCleared { date, deleted });

        let (week_start, week_end) = iso_week_bounds(date);
        let history = self.store.assignments_in_range(week_start, week_end)?;
        let mut load = LoadTracker::seeded(&history);
        debug!(%week_start, %week_end, seeded_from = history.len(), "load tracker seeded");

        let availability = AvailabilityFilter::new(&snapshot.employees, &snapshot.time_off);
        let mut planner = AssignmentPlanner::new(&snapshot.catalog, availability);
        if let Some(seed) = self.seed {
            planner = planner.with_seed(seed);
        }

        let mut roster = Roster::new();
        for requirement in snapshot.requirements_for(date) {
            let outcome = planner.plan(requirement, &mut load, roster.assignments());
            events.extend(outcome.events);
            for assignment in outcome.assignments {
                self.store.insert(&assignment)?;
                roster.push(assignment);
            }
        }

        let over_cap = self.collect_over_cap(&load);
        Ok(RunReport {
            date,
            roster,
            over_cap,
            events,
        })
    }

    /// Regenerates every date in `[start, end]`, in order.
    ///
    /// An end-before-start range is rejected before any mutation.
    pub fn run_range(&mut self, start: NaiveDate, end: NaiveDate) -> RosterResult<Vec<RunReport>> {
        if start > end {
            return Err(RosterError::InvalidDateRange { start, end });
        }

        let mut reports = Vec::new();
        let mut date = start;
        while date <= end {
            reports.push(self.run(date)?);
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        Ok(reports)
    }

    fn collect_over_cap(&self, load: &LoadTracker) -> Vec<OverCapEntry> {
        let mut entries = Vec::new();
        for employee in &self.snapshot.employees {
            if load.over_cap(employee) {
                let entry = OverCapEntry {
                    employee_id: employee.id.clone(),
                    minutes: load.minutes_of(&employee.id),
                    cap_minutes: employee.weekly_cap_minutes(),
                };
                warn!(
                    employee = %entry.employee_id,
                    minutes = entry.minutes,
                    cap = entry.cap_minutes,
                    "employee over weekly cap"
                );
                entries.push(entry);
            }
        }
        entries
    }
}

/// Monday-through-Sunday bounds of the ISO week containing `date`.
fn iso_week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let monday = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
    (monday, sunday)
}
