//! Integration tests for the shift roster engine.
//!
//! This test suite covers the full build -> solve -> decode pipeline on the
//! reference scenario:
//! - Model shape and objective coefficients
//! - Coverage, exactly-one and pairing properties of decoded rosters
//! - First-feasible selection and failure stages
//! - Decoder behaviour on arbitrary assignments (property tests)
//!
//! The solver is a fake: it enumerates every one-employee-one-shift
//! assignment and flags feasibility with `Model::evaluate`.

use std::collections::BTreeSet;

use proptest::prelude::*;

use shift_roster::config::{ConfigLoader, EmployeePair, Scenario, ShiftRules};
use shift_roster::decoding::{decode, decode_sample};
use shift_roster::error::{SchedulerError, SchedulerResult, Stage};
use shift_roster::formulation::{build_model, build_scenario_model, ModelBuilder};
use shift_roster::models::{Assignment, Model, Sample, SampleSet, ShiftRoster, ShiftVar};
use shift_roster::solver::{schedule, Solver};

// =============================================================================
// Test Helpers
// =============================================================================

const EMPLOYEES: [&str; 8] = [
    "Anna", "Bill", "Chris", "Diane", "Erica", "Frank", "George", "Harriet",
];

fn reference() -> Scenario {
    ConfigLoader::load("./config/reference")
        .expect("Failed to load config")
        .scenario()
        .clone()
}

/// Builds the assignment where `employees[i]` works `choices[i]`.
fn one_hot(employees: &[&str], choices: &[usize], num_shifts: usize) -> Assignment {
    employees
        .iter()
        .zip(choices)
        .flat_map(|(name, chosen)| {
            (0..num_shifts).map(move |shift| (ShiftVar::new(*name, shift), shift == *chosen))
        })
        .collect()
}

/// Fake solver that enumerates every one-hot assignment of the model's
/// employees. Feasible samples are returned in ascending energy, after
/// `leading_infeasible` infeasible ones.
struct EnumeratingSolver {
    leading_infeasible: usize,
}

impl EnumeratingSolver {
    fn employees(model: &Model) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for var in model.variables() {
            if names.last().map(String::as_str) != Some(var.employee()) {
                names.push(var.employee().to_string());
            }
        }
        names
    }

    fn feasible_assignments(model: &Model) -> Vec<(i64, Assignment)> {
        let names = Self::employees(model);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let shifts = model.num_shifts();
        let total = shifts.pow(refs.len() as u32);

        let mut feasible = Vec::new();
        for code in 0..total {
            let mut rest = code;
            let mut choices = vec![0; refs.len()];
            for slot in choices.iter_mut().rev() {
                *slot = rest % shifts;
                rest /= shifts;
            }
            let assignment = one_hot(&refs, &choices, shifts);
            let evaluation = model.evaluate(&assignment);
            if evaluation.is_feasible() {
                feasible.push((evaluation.energy, assignment));
            }
        }
        feasible.sort_by_key(|(energy, _)| *energy);
        feasible
    }
}

impl Solver for EnumeratingSolver {
    fn solve(&self, model: &Model) -> SchedulerResult<SampleSet> {
        let names = Self::employees(model);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        // Everybody on shift 0 violates every headcount constraint.
        let crowded = one_hot(&refs, &vec![0; refs.len()], model.num_shifts());
        let mut samples: Vec<Sample> = (0..self.leading_infeasible)
            .map(|_| Sample::from_assignment(&crowded, false))
            .collect();

        samples.extend(
            Self::feasible_assignments(model)
                .into_iter()
                .map(|(energy, a)| Sample::from_assignment(&a, true).with_energy(energy)),
        );
        Ok(SampleSet::new(samples))
    }
}

fn assert_roster_properties(roster: &ShiftRoster, headcount: usize) {
    // Coverage
    for (shift, employees) in roster.iter() {
        assert_eq!(
            employees.len(),
            headcount,
            "shift {shift} has {:?}",
            employees
        );
    }

    // Exactly one slot per employee
    for name in EMPLOYEES {
        assert_eq!(roster.shifts_of(name).len(), 1, "{name} in {roster:?}");
    }

    // Pairing
    assert_ne!(roster.shifts_of("Bill"), roster.shifts_of("Frank"));
    assert_eq!(roster.shifts_of("Erica"), roster.shifts_of("Harriet"));

    // Disjoint slots covering everybody
    let union: BTreeSet<&str> = roster
        .iter()
        .flat_map(|(_, employees)| employees.iter().map(String::as_str))
        .collect();
    assert_eq!(union, EMPLOYEES.into_iter().collect());
    assert_eq!(roster.assigned_count(), EMPLOYEES.len());
}

// =============================================================================
// Model Builder
// =============================================================================

#[test]
fn test_reference_model_shape() {
    let model = build_scenario_model(&reference()).unwrap();

    assert_eq!(model.variable_count(), 8 * 4);
    assert_eq!(model.constraint_count(), 8 + 4 * 3);
    assert_eq!(model.label(), "Training - Employee Scheduling");
}

#[test]
fn test_objective_coefficient_equals_preference() {
    let scenario = reference();
    let model = build_model(scenario.preferences(), scenario.rules()).unwrap();

    for name in EMPLOYEES {
        for shift in 0..4 {
            assert_eq!(
                model.objective_coefficient(&ShiftVar::new(name, shift)),
                scenario.preferences().cost(name, shift),
                "coefficient of x_{name}_{shift}"
            );
        }
    }
}

#[test]
fn test_model_json_uses_string_labels() {
    let model = build_scenario_model(&reference()).unwrap();
    let json = serde_json::to_value(&model).unwrap();

    assert_eq!(json["variables"][0], "x_Anna_0");
    assert_eq!(json["objective"][3]["variable"], "x_Anna_3");
    assert_eq!(json["objective"][3]["bias"], 100);

    let labels: Vec<&str> = json["constraints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels[0], "discrete_Anna");
    assert!(labels.contains(&"exclusion_Bill_Frank_3"));
    assert!(labels.contains(&"lockstep_Erica_Harriet_0"));
    assert!(labels.contains(&"headcount_2"));
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn test_reference_schedule_is_optimal_and_valid() {
    let solver = EnumeratingSolver {
        leading_infeasible: 0,
    };
    let outcome = schedule(&reference(), &solver).unwrap();

    assert_eq!(outcome.sample_index, 0);
    assert_eq!(outcome.evaluation.energy, 12);
    assert!(outcome.evaluation.is_feasible());
    assert_roster_properties(&outcome.roster, 2);

    // Both optimal rosters agree on everybody except Bill and Frank.
    assert_eq!(outcome.roster.shifts_of("Anna"), vec![0]);
    assert_eq!(outcome.roster.shifts_of("Erica"), vec![1]);
    assert_eq!(outcome.roster.shifts_of("Diane"), vec![2]);
    assert_eq!(outcome.roster.shifts_of("Chris"), vec![3]);
    assert_eq!(outcome.roster.shifts_of("George"), vec![3]);
}

#[test]
fn test_infeasible_samples_are_skipped() {
    let solver = EnumeratingSolver {
        leading_infeasible: 3,
    };
    let outcome = schedule(&reference(), &solver).unwrap();

    assert_eq!(outcome.sample_index, 3);
    assert_roster_properties(&outcome.roster, 2);
}

#[test]
fn test_every_feasible_assignment_decodes_to_valid_roster() {
    let model = build_scenario_model(&reference()).unwrap();
    let feasible = EnumeratingSolver::feasible_assignments(&model);

    assert_eq!(feasible.len(), 288);
    for (_, assignment) in &feasible {
        let roster = decode(assignment, model.num_shifts()).unwrap();
        assert_roster_properties(&roster, 2);
    }
}

#[test]
fn test_every_feasible_sample_round_trips_through_labels() {
    let model = build_scenario_model(&reference()).unwrap();

    for (_, assignment) in EnumeratingSolver::feasible_assignments(&model).iter().take(20) {
        let sample = Sample::from_assignment(assignment, true);
        let from_labels = decode_sample(&sample, 4).unwrap();
        let direct = decode(assignment, 4).unwrap();
        assert_eq!(from_labels, direct);
    }
}

#[test]
fn test_overconstrained_scenario_has_no_feasible_sample() {
    let scenario = reference();
    let mut rules = scenario.rules().clone();
    // Erica and Harriet always together, but never together: impossible.
    rules.exclusion_pairs.push(EmployeePair::new("Erica", "Harriet"));
    let scenario = Scenario::new(
        scenario.metadata().clone(),
        scenario.preferences().clone(),
        rules,
    );

    let solver = EnumeratingSolver {
        leading_infeasible: 2,
    };
    let err = schedule(&scenario, &solver).unwrap_err();

    assert!(matches!(err, SchedulerError::NoFeasibleSolution { samples: 2 }));
    assert_eq!(err.stage(), Stage::Solve);
}

#[test]
fn test_unavailability_moves_employee() {
    let scenario = reference();
    let model = ModelBuilder::new(scenario.preferences(), 4)
        .with_rules(scenario.rules())
        .with_unavailable(shift_roster::config::Unavailability {
            employee: "Anna".to_string(),
            shift: 0,
        })
        .build()
        .unwrap();

    let feasible = EnumeratingSolver::feasible_assignments(&model);
    assert!(!feasible.is_empty());
    for (_, assignment) in &feasible {
        let roster = decode(assignment, 4).unwrap();
        assert_ne!(roster.shifts_of("Anna"), vec![0]);
    }
}

#[test]
fn test_build_error_reported_with_stage() {
    let scenario = reference();
    let rules = ShiftRules {
        num_shifts: 3,
        ..scenario.rules().clone()
    };
    let err = build_model(scenario.preferences(), &rules).unwrap_err();

    assert!(matches!(err, SchedulerError::InvalidScenario { .. }));
    assert_eq!(err.stage(), Stage::Build);
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #[test]
    fn decoded_one_hot_places_everyone_once(choices in prop::collection::vec(0usize..4, 8)) {
        let assignment = one_hot(&EMPLOYEES, &choices, 4);
        let roster = decode(&assignment, 4).unwrap();

        for (name, chosen) in EMPLOYEES.iter().zip(&choices) {
            prop_assert_eq!(roster.shifts_of(name), vec![*chosen]);
        }
        prop_assert_eq!(roster.assigned_count(), 8);
    }

    #[test]
    fn feasible_assignments_satisfy_roster_properties(
        choices in prop::collection::vec(0usize..4, 8)
    ) {
        let model = build_scenario_model(&reference()).unwrap();
        let assignment = one_hot(&EMPLOYEES, &choices, 4);
        let evaluation = model.evaluate(&assignment);

        let roster = decode(&assignment, 4).unwrap();
        let coverage_ok = roster.iter().all(|(_, e)| e.len() == 2);
        let pairing_ok = roster.shifts_of("Bill") != roster.shifts_of("Frank")
            && roster.shifts_of("Erica") == roster.shifts_of("Harriet");

        prop_assert_eq!(evaluation.is_feasible(), coverage_ok && pairing_ok);

        let expected_energy: i64 = EMPLOYEES
            .iter()
            .zip(&choices)
            .map(|(name, shift)| model.objective_coefficient(&ShiftVar::new(*name, *shift)).unwrap())
            .sum();
        prop_assert_eq!(evaluation.energy, expected_energy);
    }

    #[test]
    fn label_round_trip(employee in "[A-Za-z][A-Za-z0-9_ ]{0,16}", shift in 0usize..64) {
        let var = ShiftVar::new(employee.clone(), shift);
        let parsed: ShiftVar = var.label().parse().unwrap();
        prop_assert_eq!(parsed, var);
    }
}
