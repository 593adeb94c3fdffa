//! Greedy slot planner — the engine's core.
//!
//! # Algorithm
//!
//! For one requirement:
//!
//! 1. Decompose the required coverage hours into an ordered list of
//!    template slots.
//! 2. For each slot, order the candidate pool by ascending accumulated
//!    minutes, breaking ties with a seedable shuffle.
//! 3. Place the single lowest-loaded candidate who is not already on
//!    this requirement, stays within their weekly and daily caps, and
//!    does not overlap a shift they already hold that date. No such
//!    candidate → the slot is recorded as an explicit unfilled marker.
//!
//! A missing template is a skip (configuration gap, logged and
//! reported); an empty pool yields one unfilled marker per resolvable
//! slot. Nothing here aborts a run.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::models::{Assignment, Employee, Requirement, ShiftCatalog};

use super::availability::AvailabilityFilter;
use super::load::LoadTracker;
use super::overlap::OverlapGuard;
use super::report::RunEvent;
use super::structure;

/// Assignments and diagnostics produced for one requirement.
#[derive(Debug, Clone, Default)]
pub struct PlanOutcome {
    /// Produced records, filled and unfilled, in slot order.
    pub assignments: Vec<Assignment>,
    /// Diagnostic events, in emission order.
    pub events: Vec<RunEvent>,
}

/// Plans one requirement at a time against shared run state.
///
/// The planner holds typed handles to its collaborators; the
/// [`LoadTracker`] is owned by the caller and passed per call, since its
/// mutation is the run's only side effect.
#[derive(Debug)]
pub struct AssignmentPlanner<'a> {
    catalog: &'a ShiftCatalog,
    availability: AvailabilityFilter<'a>,
    rng: StdRng,
}

impl<'a> AssignmentPlanner<'a> {
    /// Creates a planner with OS-entropy tie-breaking.
    pub fn new(catalog: &'a ShiftCatalog, availability: AvailabilityFilter<'a>) -> Self {
        Self {
            catalog,
            availability,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replaces the tie-break source with a seeded one, for
    /// reproducible planning.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Plans one requirement.
    ///
    /// `existing` is every assignment already visible to the run for
    /// overlap purposes: run-local records from earlier requirements
    /// and, when the caller has not purged them, records still
    /// persisted for the date.
    pub fn plan(
        &mut self,
        requirement: &Requirement,
        load: &mut LoadTracker,
        existing: &[Assignment],
    ) -> PlanOutcome {
        let mut outcome = PlanOutcome::default();
        let slots = structure::decompose(requirement.required_hours, &mut self.rng);
        let candidates = self.availability.candidates(requirement);

        if candidates.is_empty() {
            warn!(
                department = %requirement.department_id,
                date = %requirement.date,
                "no eligible employees; emitting unfilled markers"
            );
            outcome.events.push(RunEvent::NoCandidates {
                department_id: requirement.department_id.clone(),
                date: requirement.date,
            });
            for name in slots {
                match self.catalog.lookup(name) {
                    Ok(template) => outcome.assignments.push(Assignment::unfilled_slot(
                        &requirement.department_id,
                        requirement.date,
                        template,
                    )),
                    Err(_) => self.report_missing(name, &mut outcome),
                }
            }
            return outcome;
        }

        // Employees already placed on this requirement; one slot per
        // person per requirement, even across different templates.
        let mut consumed: HashSet<String> = HashSet::new();

        for name in slots {
            let template = match self.catalog.lookup(name) {
                Ok(template) => template,
                Err(_) => {
                    self.report_missing(name, &mut outcome);
                    continue;
                }
            };
            let interval = template.interval();
            let minutes = interval.duration_minutes();

            let ordered = order_by_load(&candidates, load, &mut self.rng);
            let pick = ordered.into_iter().find(|e| {
                !consumed.contains(&e.id)
                    && load.minutes_of(&e.id) + minutes <= e.weekly_cap_minutes()
                    && load.daily_minutes(&e.id, requirement.date) + minutes
                        <= e.daily_cap_minutes()
                    && !OverlapGuard::would_double_book(&e.id, requirement.date, &interval, existing)
                    && !OverlapGuard::would_double_book(
                        &e.id,
                        requirement.date,
                        &interval,
                        &outcome.assignments,
                    )
            });

            match pick {
                Some(employee) => {
                    debug!(
                        employee = %employee.id,
                        template = %template.name,
                        date = %requirement.date,
                        "slot filled"
                    );
                    let role = employee
                        .first_matching_role(&requirement.required_roles)
                        .map(str::to_string);
                    outcome.assignments.push(Assignment::filled(
                        &employee.id,
                        &requirement.department_id,
                        role,
                        requirement.date,
                        template.start,
                        template.end,
                    ));
                    load.add(&employee.id, requirement.date, minutes);
                    consumed.insert(employee.id.clone());
                }
                None => {
                    debug!(
                        template = %template.name,
                        date = %requirement.date,
                        "slot exhausted its candidates"
                    );
                    outcome.assignments.push(Assignment::unfilled_slot(
                        &requirement.department_id,
                        requirement.date,
                        template,
                    ));
                    outcome.events.push(RunEvent::SlotUnfilled {
                        department_id: requirement.department_id.clone(),
                        date: requirement.date,
                        template: template.name.clone(),
                    });
                }
            }
        }

        outcome
    }

    fn report_missing(&self, name: &str, outcome: &mut PlanOutcome) {
        warn!(template = %name, "shift template missing from catalog; slot skipped");
        outcome.events.push(RunEvent::TemplateMissing {
            name: name.to_string(),
        });
    }
}

/// Candidates by ascending accumulated load; ties fall in shuffled
/// order (the shuffle happens first, the stable sort preserves it
/// within equal loads).
fn order_by_load<'a, R: rand::Rng>(
    candidates: &[&'a Employee],
    load: &LoadTracker,
    rng: &mut R,
) -> Vec<&'a Employee> {
    let mut ordered = candidates.to_vec();
    ordered.shuffle(rng);
    ordered.sort_by_key(|e| load.minutes_of(&e.id));
    ordered
}
