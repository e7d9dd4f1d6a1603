//! Solver samples and validated assignments.
//!
//! A [`Sample`] is what the external solver hands back: string labels
//! mapped to numeric values plus a feasibility flag. An [`Assignment`] is
//! the validated form the decoder works on, with labels parsed into
//! [`ShiftVar`]s and values restricted to 0/1.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

use super::ShiftVar;

/// One candidate solution returned by the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Variable label to value. Decision variables are expected to be 0 or 1.
    pub sample: BTreeMap<String, Decimal>,
    /// Whether the solver considers this sample feasible.
    pub is_feasible: bool,
    /// Objective value reported by the solver, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<Decimal>,
}

impl Sample {
    /// Builds a sample from a validated assignment.
    pub fn from_assignment(assignment: &Assignment, is_feasible: bool) -> Self {
        let sample = assignment
            .iter()
            .map(|(var, on)| (var.label(), if on { Decimal::ONE } else { Decimal::ZERO }))
            .collect();
        Self {
            sample,
            is_feasible,
            energy: None,
        }
    }

    /// Sets the reported energy.
    pub fn with_energy(mut self, energy: impl Into<Decimal>) -> Self {
        self.energy = Some(energy.into());
        self
    }
}

/// Ordered collection of samples as returned by the solver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Samples in solver order.
    pub samples: Vec<Sample>,
}

impl SampleSet {
    /// Creates a sample set.
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples at all.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates over the feasible samples, keeping solver order.
    pub fn feasible(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter().filter(|s| s.is_feasible)
    }

    /// Returns the first feasible sample.
    ///
    /// # Errors
    ///
    /// Returns `NoFeasibleSolution` when no sample is flagged feasible.
    pub fn first_feasible(&self) -> SchedulerResult<&Sample> {
        self.feasible()
            .next()
            .ok_or(SchedulerError::NoFeasibleSolution {
                samples: self.samples.len(),
            })
    }
}

/// A validated 0/1 assignment of decision variables.
///
/// Variables missing from the assignment read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<ShiftVar, bool>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a solver sample.
    ///
    /// # Errors
    ///
    /// - `InvalidVariableLabel` if a label does not parse
    /// - `NonBinaryValue` if a value is neither 0 nor 1
    pub fn from_sample(sample: &Sample) -> SchedulerResult<Self> {
        let mut values = BTreeMap::new();
        for (label, value) in &sample.sample {
            let var = ShiftVar::parse(label)?;
            let on = if *value == Decimal::ONE {
                true
            } else if value.is_zero() {
                false
            } else {
                return Err(SchedulerError::NonBinaryValue {
                    label: label.clone(),
                    value: value.to_string(),
                });
            };
            values.insert(var, on);
        }
        Ok(Self { values })
    }

    /// Sets the value of a variable.
    pub fn set(&mut self, var: ShiftVar, on: bool) {
        self.values.insert(var, on);
    }

    /// Returns the value of a variable (0 when absent).
    pub fn value(&self, var: &ShiftVar) -> bool {
        self.values.get(var).copied().unwrap_or(false)
    }

    /// Returns the number of variables with an explicit value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no variable has an explicit value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all explicit values.
    pub fn iter(&self) -> impl Iterator<Item = (&ShiftVar, bool)> {
        self.values.iter().map(|(var, on)| (var, *on))
    }

    /// Iterates over the variables set to 1.
    pub fn selected(&self) -> impl Iterator<Item = &ShiftVar> {
        self.values.iter().filter(|(_, on)| **on).map(|(var, _)| var)
    }
}

impl FromIterator<(ShiftVar, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (ShiftVar, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
