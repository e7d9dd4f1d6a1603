//! Model formulation for shift scheduling.
//!
//! This module turns a preference table and shift rules into the
//! constrained binary model handed to the solver: decision variables,
//! the preference objective, and exactly-one, exclusion, lock-step,
//! headcount and unavailability constraints.

mod builder;
mod objective;
mod rules;

pub use builder::{DEFAULT_MODEL_LABEL, ModelBuilder, build_model, build_scenario_model};
pub use objective::{employee_variables, preference_terms};
pub use rules::{exactly_one, exclusion, headcount, lockstep, unavailable};
