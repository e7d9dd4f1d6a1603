//! Core data models for the shift roster engine.
//!
//! This module contains the preference table, decision variables, the
//! constrained model, solver samples and the decoded roster.

mod assignment;
mod employee;
mod model;
mod roster;
mod variable;

pub use assignment::{Assignment, Sample, SampleSet};
pub use employee::{EmployeePreference, PreferenceTable};
pub use model::{Constraint, ConstraintKind, Evaluation, LinearTerm, Model, Sense};
pub use roster::{RosterResult, ShiftEntry, ShiftRoster};
pub use variable::{LABEL_PREFIX, LABEL_SEPARATOR, ShiftVar};
