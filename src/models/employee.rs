//! Employee preference model.
//!
//! This module defines [`EmployeePreference`] and the ordered
//! [`PreferenceTable`] that the model builder turns into decision
//! variables and objective terms.

use serde::{Deserialize, Serialize};

/// An employee and their per-shift preference costs.
///
/// `preferences[s]` is the cost of assigning the employee to shift `s`;
/// lower values are more preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePreference {
    /// Unique name of the employee.
    pub name: String,
    /// Preference cost for each shift index.
    pub preferences: Vec<i64>,
}

impl EmployeePreference {
    /// Creates a new preference entry.
    pub fn new(name: impl Into<String>, preferences: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            preferences,
        }
    }

    /// Returns the cost of the given shift, if the shift index is in range.
    pub fn cost(&self, shift: usize) -> Option<i64> {
        self.preferences.get(shift).copied()
    }
}

/// Ordered table of employee preferences.
///
/// Insertion order is kept so that variables and constraints are generated
/// in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceTable {
    employees: Vec<EmployeePreference>,
}

impl PreferenceTable {
    /// Creates a table from a list of entries.
    pub fn new(employees: Vec<EmployeePreference>) -> Self {
        Self { employees }
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the table has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeePreference> {
        self.employees.iter()
    }

    /// Iterates over employee names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.employees.iter().map(|e| e.name.as_str())
    }

    /// Looks up an employee by name.
    pub fn get(&self, name: &str) -> Option<&EmployeePreference> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Returns true if an employee with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the preference cost of `name` for `shift`.
    pub fn cost(&self, name: &str, shift: usize) -> Option<i64> {
        self.get(name).and_then(|e| e.cost(shift))
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<i64>)> for PreferenceTable {
    fn from_iter<I: IntoIterator<Item = (N, Vec<i64>)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, prefs)| EmployeePreference::new(name, prefs))
                .collect(),
        )
    }
}
