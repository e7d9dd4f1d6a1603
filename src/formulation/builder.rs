//! Model builder.
//!
//! [`ModelBuilder`] turns a preference table and a set of shift rules into
//! a [`Model`]: one binary variable per (employee, shift), an exactly-one
//! constraint per employee, preference costs as the linear objective, and
//! per-shift exclusion, lock-step and headcount constraints.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::{EmployeePair, Scenario, ShiftRules, Unavailability};
use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Model, PreferenceTable};

use super::objective::{employee_variables, preference_terms};
use super::rules;

/// Default solver job label.
pub const DEFAULT_MODEL_LABEL: &str = "Employee Scheduling";

/// Builds a [`Model`] from preferences and shift rules.
///
/// # Example
///
/// ```
/// use shift_roster::config::EmployeePair;
/// use shift_roster::formulation::ModelBuilder;
/// use shift_roster::models::PreferenceTable;
///
/// let preferences: PreferenceTable = [
///     ("Anna", vec![1, 2]),
///     ("Bill", vec![2, 1]),
/// ]
/// .into_iter()
/// .collect();
///
/// let model = ModelBuilder::new(&preferences, 2)
///     .with_headcount(1)
///     .with_exclusion(EmployeePair::new("Anna", "Bill"))
///     .build()
///     .unwrap();
///
/// assert_eq!(model.variable_count(), 4);
/// // 2 exactly-one + 2 shifts * (exclusion + headcount)
/// assert_eq!(model.constraint_count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct ModelBuilder<'a> {
    preferences: &'a PreferenceTable,
    num_shifts: usize,
    label: String,
    headcount: Option<usize>,
    exclusion_pairs: Vec<EmployeePair>,
    lockstep_pairs: Vec<EmployeePair>,
    unavailable: Vec<Unavailability>,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder with only the exactly-one rule and the objective.
    pub fn new(preferences: &'a PreferenceTable, num_shifts: usize) -> Self {
        Self {
            preferences,
            num_shifts,
            label: DEFAULT_MODEL_LABEL.to_string(),
            headcount: None,
            exclusion_pairs: Vec::new(),
            lockstep_pairs: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Sets the solver job label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Requires `headcount` employees on every shift.
    pub fn with_headcount(mut self, headcount: usize) -> Self {
        self.headcount = Some(headcount);
        self
    }

    /// Adds a pair that must never share a shift.
    pub fn with_exclusion(mut self, pair: EmployeePair) -> Self {
        self.exclusion_pairs.push(pair);
        self
    }

    /// Adds a pair that must always share a shift.
    pub fn with_lockstep(mut self, pair: EmployeePair) -> Self {
        self.lockstep_pairs.push(pair);
        self
    }

    /// Bars an employee from a shift.
    pub fn with_unavailable(mut self, unavailable: Unavailability) -> Self {
        self.unavailable.push(unavailable);
        self
    }

    /// Applies headcount, pairings and unavailability from `rules`.
    ///
    /// The shift count stays the one given to [`ModelBuilder::new`].
    pub fn with_rules(mut self, rules: &ShiftRules) -> Self {
        self.headcount = Some(rules.headcount);
        self.exclusion_pairs.extend(rules.exclusion_pairs.iter().cloned());
        self.lockstep_pairs.extend(rules.lockstep_pairs.iter().cloned());
        self.unavailable.extend(rules.unavailable.iter().cloned());
        self
    }

    /// Builds the model.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScenario` if the shift count is zero, the table is
    /// empty, a name is empty or duplicated, a preference vector has the
    /// wrong length, a pair names the same employee twice or is listed twice,
    /// an unavailable entry is out of range or repeated, the headcount
    /// exceeds the employee count, or two constraints end up with the same
    /// label.
    /// Returns `UnknownEmployee` if a rule names an employee that has no
    /// preferences.
    pub fn build(&self) -> SchedulerResult<Model> {
        self.validate()?;

        let employee_count = self.preferences.len();
        let mut variables = Vec::with_capacity(employee_count * self.num_shifts);
        let mut objective = Vec::with_capacity(employee_count * self.num_shifts);
        let mut constraints = Vec::new();

        for employee in self.preferences.iter() {
            let vars = employee_variables(&employee.name, self.num_shifts);
            variables.extend(vars.iter().cloned());
            constraints.push(rules::exactly_one(&employee.name, vars));
            objective.extend(preference_terms(employee));
        }

        for shift in 0..self.num_shifts {
            for EmployeePair(first, second) in &self.exclusion_pairs {
                constraints.push(rules::exclusion(first, second, shift));
            }
            for EmployeePair(first, second) in &self.lockstep_pairs {
                constraints.push(rules::lockstep(first, second, shift));
            }
            if let Some(headcount) = self.headcount {
                constraints.push(rules::headcount(self.preferences.names(), shift, headcount));
            }
        }

        for Unavailability { employee, shift } in &self.unavailable {
            constraints.push(rules::unavailable(employee, *shift));
        }

        // Names may contain the separator, so distinct pairs can still render
        // the same label.
        let mut labels = HashSet::with_capacity(constraints.len());
        if let Some(clash) = constraints.iter().find(|c| !labels.insert(c.label.as_str())) {
            return Err(SchedulerError::invalid_scenario(format!(
                "constraint label '{}' is generated more than once",
                clash.label
            )));
        }

        info!(
            label = %self.label,
            variables = variables.len(),
            constraints = constraints.len(),
            "Model built"
        );

        Ok(Model::from_parts(
            self.label.clone(),
            self.num_shifts,
            variables,
            objective,
            constraints,
        ))
    }

    fn validate(&self) -> SchedulerResult<()> {
        if self.num_shifts == 0 {
            return Err(SchedulerError::invalid_scenario(
                "shift count must be positive",
            ));
        }
        if self.preferences.is_empty() {
            return Err(SchedulerError::invalid_scenario(
                "at least one employee is required",
            ));
        }

        let mut seen = HashSet::new();
        for employee in self.preferences.iter() {
            if employee.name.is_empty() {
                return Err(SchedulerError::invalid_scenario(
                    "employee names must not be empty",
                ));
            }
            if !seen.insert(employee.name.as_str()) {
                return Err(SchedulerError::invalid_scenario(format!(
                    "duplicate employee '{}'",
                    employee.name
                )));
            }
            if employee.preferences.len() != self.num_shifts {
                return Err(SchedulerError::invalid_scenario(format!(
                    "employee '{}' has {} preferences, expected {}",
                    employee.name,
                    employee.preferences.len(),
                    self.num_shifts
                )));
            }
        }

        for (rule, pairs) in [
            ("exclusion", &self.exclusion_pairs),
            ("lockstep", &self.lockstep_pairs),
        ] {
            let mut seen_pairs = HashSet::new();
            for EmployeePair(first, second) in pairs {
                self.check_known(rule, first)?;
                self.check_known(rule, second)?;
                if first == second {
                    return Err(SchedulerError::invalid_scenario(format!(
                        "{rule} pair names '{first}' twice"
                    )));
                }
                let key = if first < second {
                    (first.as_str(), second.as_str())
                } else {
                    (second.as_str(), first.as_str())
                };
                if !seen_pairs.insert(key) {
                    return Err(SchedulerError::invalid_scenario(format!(
                        "{rule} pair ('{first}', '{second}') is listed more than once"
                    )));
                }
            }
        }

        let mut seen_unavailable = HashSet::new();
        for Unavailability { employee, shift } in &self.unavailable {
            self.check_known("unavailable", employee)?;
            if *shift >= self.num_shifts {
                return Err(SchedulerError::invalid_scenario(format!(
                    "'{employee}' is unavailable for shift {shift}, but only {} shifts exist",
                    self.num_shifts
                )));
            }
            if !seen_unavailable.insert((employee.as_str(), *shift)) {
                return Err(SchedulerError::invalid_scenario(format!(
                    "'{employee}' is listed as unavailable for shift {shift} more than once"
                )));
            }
        }

        if let Some(headcount) = self.headcount {
            if headcount > self.preferences.len() {
                return Err(SchedulerError::invalid_scenario(format!(
                    "headcount {headcount} exceeds the {} available employees",
                    self.preferences.len()
                )));
            }
        }

        debug!(
            employees = self.preferences.len(),
            num_shifts = self.num_shifts,
            "Scenario validated"
        );
        Ok(())
    }

    fn check_known(&self, rule: &str, employee: &str) -> SchedulerResult<()> {
        if self.preferences.contains(employee) {
            Ok(())
        } else {
            Err(SchedulerError::UnknownEmployee {
                rule: rule.to_string(),
                employee: employee.to_string(),
            })
        }
    }
}

/// Builds the model for a preference table under the given shift rules.
pub fn build_model(preferences: &PreferenceTable, rules: &ShiftRules) -> SchedulerResult<Model> {
    ModelBuilder::new(preferences, rules.num_shifts)
        .with_rules(rules)
        .build()
}

/// Builds the model for a scenario, labelled with the scenario's job label.
pub fn build_scenario_model(scenario: &Scenario) -> SchedulerResult<Model> {
    ModelBuilder::new(scenario.preferences(), scenario.rules().num_shifts)
        .with_label(scenario.metadata().label.clone())
        .with_rules(scenario.rules())
        .build()
}
