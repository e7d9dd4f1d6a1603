//! The constrained binary model handed to the solver.
//!
//! A [`Model`] is built once by the model builder and is read-only
//! afterwards. It serializes to the structure the solver boundary expects:
//! string variable labels, a list of linear objective terms, and labelled
//! `discrete` or `linear` constraints.

use serde::{Deserialize, Serialize};

use super::{Assignment, ShiftVar};

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    /// `lhs == rhs`
    #[serde(rename = "==")]
    Eq,
    /// `lhs <= rhs`
    #[serde(rename = "<=")]
    Le,
    /// `lhs >= rhs`
    #[serde(rename = ">=")]
    Ge,
}

impl Sense {
    /// Returns true if `lhs OP rhs` holds.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Sense::Eq => lhs == rhs,
            Sense::Le => lhs <= rhs,
            Sense::Ge => lhs >= rhs,
        }
    }
}

/// A `(variable, bias)` pair of a linear expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearTerm {
    /// The decision variable.
    pub variable: ShiftVar,
    /// Its coefficient.
    pub bias: i64,
}

impl LinearTerm {
    /// Creates a term.
    pub fn new(variable: ShiftVar, bias: i64) -> Self {
        Self { variable, bias }
    }
}

/// Evaluates `sum(bias * value)` under an assignment.
pub(crate) fn linear_value(terms: &[LinearTerm], assignment: &Assignment) -> i64 {
    terms
        .iter()
        .filter(|t| assignment.value(&t.variable))
        .map(|t| t.bias)
        .sum()
}

/// The body of a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Exactly one of the variables equals 1.
    Discrete {
        /// The variables of the group.
        variables: Vec<ShiftVar>,
    },
    /// `sum(bias_i * var_i) OP rhs`.
    Linear {
        /// Left-hand side terms.
        terms: Vec<LinearTerm>,
        /// Comparison operator.
        sense: Sense,
        /// Right-hand side constant.
        rhs: i64,
    },
}

/// A labelled hard constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Unique label within the model.
    pub label: String,
    /// The constraint body.
    #[serde(flatten)]
    pub kind: ConstraintKind,
}

impl Constraint {
    /// Creates an exactly-one constraint.
    pub fn discrete(label: impl Into<String>, variables: Vec<ShiftVar>) -> Self {
        Self {
            label: label.into(),
            kind: ConstraintKind::Discrete { variables },
        }
    }

    /// Creates a linear constraint.
    pub fn linear(
        label: impl Into<String>,
        terms: Vec<LinearTerm>,
        sense: Sense,
        rhs: i64,
    ) -> Self {
        Self {
            label: label.into(),
            kind: ConstraintKind::Linear { terms, sense, rhs },
        }
    }

    /// Returns true if the assignment satisfies this constraint.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        match &self.kind {
            ConstraintKind::Discrete { variables } => {
                variables.iter().filter(|v| assignment.value(v)).count() == 1
            }
            ConstraintKind::Linear { terms, sense, rhs } => {
                sense.holds(linear_value(terms, assignment), *rhs)
            }
        }
    }
}

/// Result of checking an assignment against a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Objective value of the assignment.
    pub energy: i64,
    /// Labels of the constraints the assignment violates.
    pub violations: Vec<String>,
}

impl Evaluation {
    /// Returns true if no constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Binary variables, a linear objective to minimise, and hard constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    label: String,
    num_shifts: usize,
    variables: Vec<ShiftVar>,
    objective: Vec<LinearTerm>,
    constraints: Vec<Constraint>,
}

impl Model {
    pub(crate) fn from_parts(
        label: String,
        num_shifts: usize,
        variables: Vec<ShiftVar>,
        objective: Vec<LinearTerm>,
        constraints: Vec<Constraint>,
    ) -> Self {
        Self {
            label,
            num_shifts,
            variables,
            objective,
            constraints,
        }
    }

    /// Returns the job label passed to the solver.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of shifts the model was built for.
    pub fn num_shifts(&self) -> usize {
        self.num_shifts
    }

    /// Returns all decision variables in creation order.
    pub fn variables(&self) -> &[ShiftVar] {
        &self.variables
    }

    /// Returns the objective terms.
    pub fn objective(&self) -> &[LinearTerm] {
        &self.objective
    }

    /// Returns all constraints in creation order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the number of decision variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Looks up a constraint by label.
    pub fn constraint(&self, label: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.label == label)
    }

    /// Returns the objective coefficient of a variable.
    pub fn objective_coefficient(&self, var: &ShiftVar) -> Option<i64> {
        self.objective
            .iter()
            .find(|t| &t.variable == var)
            .map(|t| t.bias)
    }

    /// Computes the objective value and the violated constraints.
    ///
    /// This is a plain check of one assignment, the same check a solver
    /// performs when it flags samples as feasible.
    pub fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        let energy = linear_value(&self.objective, assignment);
        let violations = self
            .constraints
            .iter()
            .filter(|c| !c.is_satisfied(assignment))
            .map(|c| c.label.clone())
            .collect();
        Evaluation { energy, violations }
    }
}
