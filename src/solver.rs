//! Solver boundary and the build-solve-decode pipeline.
//!
//! The solving engine is an external collaborator behind the [`Solver`]
//! trait: it receives a finished [`Model`] and returns a [`SampleSet`].
//! This crate only selects the first feasible sample and decodes it.

use tracing::{info, warn};

use crate::config::Scenario;
use crate::decoding::decode;
use crate::error::{SchedulerError, SchedulerResult};
use crate::formulation::build_scenario_model;
use crate::models::{Assignment, Evaluation, Model, SampleSet, ShiftRoster};

/// An external constrained-model solver.
///
/// Implementations make one blocking call per model. Closures of the form
/// `Fn(&Model) -> SchedulerResult<SampleSet>` implement the trait, which is
/// convenient for fakes in tests.
pub trait Solver {
    /// Solves the model, returning candidate samples in solver order.
    fn solve(&self, model: &Model) -> SchedulerResult<SampleSet>;
}

impl<F> Solver for F
where
    F: Fn(&Model) -> SchedulerResult<SampleSet>,
{
    fn solve(&self, model: &Model) -> SchedulerResult<SampleSet> {
        self(model)
    }
}

/// The decoded result of one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    /// Index of the chosen sample in the solver's sample set.
    pub sample_index: usize,
    /// The decoded roster.
    pub roster: ShiftRoster,
    /// Objective value and violated constraints of the chosen sample.
    pub evaluation: Evaluation,
}

/// Selects the first feasible sample and decodes it against `model`.
///
/// # Errors
///
/// - `NoFeasibleSolution` if no sample is flagged feasible
/// - `InvalidVariableLabel`, `NonBinaryValue` or `ShiftOutOfRange` if the
///   chosen sample is malformed
pub fn decode_first_feasible(model: &Model, samples: &SampleSet) -> SchedulerResult<ScheduleOutcome> {
    let sample_index = samples
        .samples
        .iter()
        .position(|s| s.is_feasible)
        .ok_or(SchedulerError::NoFeasibleSolution {
            samples: samples.len(),
        })?;
    let sample = &samples.samples[sample_index];

    let assignment = Assignment::from_sample(sample)?;
    let roster = decode(&assignment, model.num_shifts())?;
    let evaluation = model.evaluate(&assignment);

    if !evaluation.is_feasible() {
        warn!(
            sample_index,
            violations = ?evaluation.violations,
            "Sample flagged feasible by the solver violates model constraints"
        );
    }

    Ok(ScheduleOutcome {
        sample_index,
        roster,
        evaluation,
    })
}

/// Builds the scenario's model, solves it, and decodes the first feasible
/// sample.
pub fn schedule<S: Solver + ?Sized>(
    scenario: &Scenario,
    solver: &S,
) -> SchedulerResult<ScheduleOutcome> {
    let model = build_scenario_model(scenario)?;

    info!(label = %model.label(), "Submitting model to solver");
    let samples = solver.solve(&model)?;
    info!(
        samples = samples.len(),
        feasible = samples.feasible().count(),
        "Solver returned samples"
    );

    let outcome = decode_first_feasible(&model, &samples)?;
    info!(
        sample_index = outcome.sample_index,
        energy = outcome.evaluation.energy,
        "Roster decoded"
    );
    Ok(outcome)
}
