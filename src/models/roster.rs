//! Roster output models.
//!
//! [`ShiftRoster`] is what the decoder produces: one set of employee names
//! per shift index. [`RosterResult`] wraps a roster with the identifying
//! information returned by the HTTP API.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employees assigned to each shift, indexed by shift.
///
/// # Example
///
/// ```
/// use shift_roster::models::ShiftRoster;
///
/// let mut roster = ShiftRoster::new(2);
/// roster.assign(1, "Anna");
/// assert_eq!(roster.shifts_of("Anna"), vec![1]);
/// assert!(roster.shift(0).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftRoster {
    shifts: Vec<BTreeSet<String>>,
}

impl ShiftRoster {
    /// Creates a roster of `num_shifts` empty shifts.
    pub fn new(num_shifts: usize) -> Self {
        Self {
            shifts: vec![BTreeSet::new(); num_shifts],
        }
    }

    /// Adds an employee to a shift. Returns false if the shift does not
    /// exist or the employee was already on it.
    pub fn assign(&mut self, shift: usize, employee: impl Into<String>) -> bool {
        match self.shifts.get_mut(shift) {
            Some(slot) => slot.insert(employee.into()),
            None => false,
        }
    }

    /// Returns the number of shifts.
    pub fn num_shifts(&self) -> usize {
        self.shifts.len()
    }

    /// Returns the employees on a shift.
    pub fn shift(&self, shift: usize) -> Option<&BTreeSet<String>> {
        self.shifts.get(shift)
    }

    /// Iterates over `(shift index, employees)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<String>)> {
        self.shifts.iter().enumerate()
    }

    /// Returns the shift indexes an employee appears on.
    pub fn shifts_of(&self, employee: &str) -> Vec<usize> {
        self.iter()
            .filter(|(_, slot)| slot.contains(employee))
            .map(|(shift, _)| shift)
            .collect()
    }

    /// Returns the total number of employee slots filled.
    pub fn assigned_count(&self) -> usize {
        self.shifts.iter().map(BTreeSet::len).sum()
    }
}

/// One shift of a [`RosterResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Zero-based shift index.
    pub index: usize,
    /// Display label of the shift.
    pub label: String,
    /// Employees on the shift, sorted by name.
    pub employees: Vec<String>,
}

/// A decoded roster with run metadata, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterResult {
    /// Unique identifier of this decode run.
    pub run_id: Uuid,
    /// When the roster was produced.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the roster.
    pub engine_version: String,
    /// Name of the scenario the model was built from.
    pub scenario: String,
    /// Per-shift assignments.
    pub shifts: Vec<ShiftEntry>,
    /// Sum of the chosen preference costs.
    pub total_cost: i64,
    /// Labels of model constraints the chosen sample violates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_roster_is_empty() {
        let roster = ShiftRoster::new(4);
        assert_eq!(roster.num_shifts(), 4);
        assert_eq!(roster.assigned_count(), 0);
        assert!(roster.iter().all(|(_, slot)| slot.is_empty()));
    }

    #[test]
    fn test_assign_out_of_range_is_rejected() {
        let mut roster = ShiftRoster::new(2);
        assert!(!roster.assign(2, "Anna"));
        assert_eq!(roster.assigned_count(), 0);
    }

    #[test]
    fn test_assign_same_employee_twice_to_one_shift() {
        let mut roster = ShiftRoster::new(2);
        assert!(roster.assign(0, "Anna"));
        assert!(!roster.assign(0, "Anna"));
        assert!(roster.assign(1, "Anna"));
        assert_eq!(roster.shifts_of("Anna"), vec![0, 1]);
        assert_eq!(roster.assigned_count(), 2);
    }

    #[test]
    fn test_roster_serializes_as_nested_lists() {
        let mut roster = ShiftRoster::new(2);
        roster.assign(0, "Bill");
        roster.assign(0, "Anna");
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"[["Anna","Bill"],[]]"#);
    }
}
