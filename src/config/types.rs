//! Configuration types for scheduling scenarios.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a scenario directory.

use serde::{Deserialize, Serialize};

use crate::models::PreferenceTable;

/// Metadata about the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioMetadata {
    /// Short identifier of the scenario (e.g., "reference").
    pub name: String,
    /// Job label passed to the solver with the model.
    pub label: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Employees configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// Ordered employee preference vectors.
    pub employees: PreferenceTable,
}

/// Two employees named by a pairing rule.
///
/// Written as a two-element list in YAML: `[Bill, Frank]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePair(pub String, pub String);

impl EmployeePair {
    /// Creates a pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self(first.into(), second.into())
    }
}

/// An employee that must not work a given shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailability {
    /// The employee name.
    pub employee: String,
    /// Zero-based shift index.
    pub shift: usize,
}

/// Shift rules from rules.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRules {
    /// Number of shifts each employee chooses from.
    pub num_shifts: usize,
    /// Required number of employees on every shift.
    pub headcount: usize,
    /// Display labels, one per shift. Defaults to "1".."n".
    #[serde(default)]
    pub shift_labels: Vec<String>,
    /// Pairs that must never work the same shift.
    #[serde(default)]
    pub exclusion_pairs: Vec<EmployeePair>,
    /// Pairs that must always work the same shift.
    #[serde(default)]
    pub lockstep_pairs: Vec<EmployeePair>,
    /// Employees barred from specific shifts.
    #[serde(default)]
    pub unavailable: Vec<Unavailability>,
}

impl ShiftRules {
    /// Creates rules with no pairings or unavailability.
    pub fn new(num_shifts: usize, headcount: usize) -> Self {
        Self {
            num_shifts,
            headcount,
            shift_labels: Vec::new(),
            exclusion_pairs: Vec::new(),
            lockstep_pairs: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Returns the display label of a shift.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::config::ShiftRules;
    ///
    /// let rules = ShiftRules::new(4, 2);
    /// assert_eq!(rules.shift_label(0), "1");
    /// assert_eq!(rules.shift_label(3), "4");
    /// ```
    pub fn shift_label(&self, shift: usize) -> String {
        self.shift_labels
            .get(shift)
            .cloned()
            .unwrap_or_else(|| (shift + 1).to_string())
    }
}

/// A complete scheduling scenario.
///
/// Aggregates the metadata, preference table and shift rules loaded from
/// a scenario directory. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    metadata: ScenarioMetadata,
    preferences: PreferenceTable,
    rules: ShiftRules,
}

impl Scenario {
    /// Creates a scenario from its component parts.
    pub fn new(metadata: ScenarioMetadata, preferences: PreferenceTable, rules: ShiftRules) -> Self {
        Self {
            metadata,
            preferences,
            rules,
        }
    }

    /// Returns the scenario metadata.
    pub fn metadata(&self) -> &ScenarioMetadata {
        &self.metadata
    }

    /// Returns the preference table.
    pub fn preferences(&self) -> &PreferenceTable {
        &self.preferences
    }

    /// Returns the shift rules.
    pub fn rules(&self) -> &ShiftRules {
        &self.rules
    }
}
