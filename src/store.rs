//! Assignment storage collaborator.
//!
//! The engine never owns persistence. It reads previously persisted
//! assignments to seed load tracking, deletes a date's assignments
//! before regenerating it, and hands each produced assignment back for
//! persistence. [`AssignmentStore`] is that contract; [`MemoryStore`]
//! is the in-process implementation used by tests and by embedders that
//! do not need durability.
//!
//! The delete-then-recreate step is not atomic with the inserts that
//! follow; serializing concurrent runs for the same date is the store's
//! responsibility.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Assignment;

/// Errors from the storage collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A read against the backing store failed.
    #[error("assignment store read failed: {0}")]
    ReadFailed(String),

    /// A write against the backing store failed.
    #[error("assignment store write failed: {0}")]
    WriteFailed(String),

    /// Backend-specific failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for produced assignments.
pub trait AssignmentStore {
    /// All persisted assignments dated within `[start, end]` inclusive.
    fn assignments_in_range(&self, start: NaiveDate, end: NaiveDate)
        -> StoreResult<Vec<Assignment>>;

    /// Deletes every assignment for a date, returning how many were
    /// removed.
    fn delete_for_date(&mut self, date: NaiveDate) -> StoreResult<usize>;

    /// Persists one assignment.
    fn insert(&mut self, assignment: &Assignment) -> StoreResult<()>;

    /// All persisted assignments for a single date.
    fn assignments_for_date(&self, date: NaiveDate) -> StoreResult<Vec<Assignment>> {
        self.assignments_in_range(date, date)
    }
}

/// In-memory assignment store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    assignments: Vec<Assignment>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with persisted history.
    pub fn with_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// All stored assignments, in insertion order.
    pub fn all(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Number of stored assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl AssignmentStore for MemoryStore {
    fn assignments_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Assignment>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| start <= a.date && a.date <= end)
            .cloned()
            .collect())
    }

    fn delete_for_date(&mut self, date: NaiveDate) -> StoreResult<usize> {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.date != date);
        Ok(before - self.assignments.len())
    }

    fn insert(&mut self, assignment: &Assignment) -> StoreResult<()> {
        self.assignments.push(assignment.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn shift(employee: &str, date: NaiveDate) -> Assignment {
        Assignment::filled(
            employee,
            "icu",
            Some("nurse".to_string()),
            date,
            t(8),
            t(20),
        )
    }

    #[test]
    fn test_range_query_inclusive() {
        let store = MemoryStore::with_assignments(vec![
            shift("e1", d(2025, 2, 9)),
            shift("e2", d(2025, 2, 10)),
            shift("e3", d(2025, 2, 11)),
        ]);

        let hits = store
            .assignments_in_range(d(2025, 2, 9), d(2025, 2, 10))
            .unwrap();
        assert_eq!(hits.len(), 2);

        let day = store.assignments_for_date(d(2025, 2, 11)).unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].employee_id.as_deref(), Some("e3"));
    }

    #[test]
    fn test_delete_for_date() {
        let mut store = MemoryStore::with_assignments(vec![
            shift("e1", d(2025, 2, 10)),
            shift("e2", d(2025, 2, 10)),
            shift("e3", d(2025, 2, 11)),
        ]);

        let deleted = store.delete_for_date(d(2025, 2, 10)).unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(store.len(), 1);

        // Deleting an absent date is a no-op.
        let deleted = store.delete_for_date(d(2025, 2, 10)).unwrap();
        assert_eq!(deleted, 0);
    }

    #[test]
    fn test_insert() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.insert(&shift("e1", d(2025, 2, 10))).unwrap();
        assert_eq!(store.len(), 1);
    }
}
