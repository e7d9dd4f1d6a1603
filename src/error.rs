//! Error types for the shift roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading a scenario, building the
//! model, solving it, or decoding a solver sample.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The stage of a scheduling run in which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Loading the scenario configuration.
    Config,
    /// Building the constrained model.
    Build,
    /// Calling the external solver and selecting a sample.
    Solve,
    /// Decoding a sample into a roster.
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Build => "build",
            Stage::Solve => "solve",
            Stage::Decode => "decode",
        };
        f.write_str(name)
    }
}

/// The main error type for the shift roster engine.
///
/// # Example
///
/// ```
/// use shift_roster::error::{SchedulerError, Stage};
///
/// let error = SchedulerError::NoFeasibleSolution { samples: 12 };
/// assert_eq!(error.stage(), Stage::Solve);
/// assert_eq!(
///     error.to_string(),
///     "Solver returned no feasible sample (12 samples inspected)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The scenario violates a precondition of the model builder.
    #[error("Invalid scenario: {message}")]
    InvalidScenario {
        /// A description of what made the scenario invalid.
        message: String,
    },

    /// A shift rule names an employee missing from the preference table.
    #[error("Rule '{rule}' references unknown employee '{employee}'")]
    UnknownEmployee {
        /// The rule that referenced the employee.
        rule: String,
        /// The employee name that was not found.
        employee: String,
    },

    /// The external solver failed to produce a sample set.
    #[error("Solver failed: {message}")]
    SolverFailed {
        /// A description of the solver failure.
        message: String,
    },

    /// The solver returned samples, but none of them is feasible.
    #[error("Solver returned no feasible sample ({samples} samples inspected)")]
    NoFeasibleSolution {
        /// The number of samples that were inspected.
        samples: usize,
    },

    /// A variable label could not be parsed back into (employee, shift).
    #[error("Invalid variable label '{label}'")]
    InvalidVariableLabel {
        /// The label that failed to parse.
        label: String,
    },

    /// A sample assigned a value other than 0 or 1 to a decision variable.
    #[error("Variable '{label}' has non-binary value {value}")]
    NonBinaryValue {
        /// The variable label.
        label: String,
        /// The offending value, as reported by the solver.
        value: String,
    },

    /// A decoded variable refers to a shift outside the roster.
    #[error("Variable '{label}' refers to shift {shift}, but only {num_shifts} shifts exist")]
    ShiftOutOfRange {
        /// The variable label.
        label: String,
        /// The decoded shift index.
        shift: usize,
        /// The number of shifts in the roster.
        num_shifts: usize,
    },
}

impl SchedulerError {
    /// Returns the stage of the run this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            SchedulerError::ConfigNotFound { .. } | SchedulerError::ConfigParseError { .. } => {
                Stage::Config
            }
            SchedulerError::InvalidScenario { .. } | SchedulerError::UnknownEmployee { .. } => {
                Stage::Build
            }
            SchedulerError::SolverFailed { .. } | SchedulerError::NoFeasibleSolution { .. } => {
                Stage::Solve
            }
            SchedulerError::InvalidVariableLabel { .. }
            | SchedulerError::NonBinaryValue { .. }
            | SchedulerError::ShiftOutOfRange { .. } => Stage::Decode,
        }
    }

    pub(crate) fn invalid_scenario(message: impl Into<String>) -> Self {
        SchedulerError::InvalidScenario {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return SchedulerError.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
