//! Objective construction.
//!
//! Preferences become linear objective terms: the coefficient of
//! `x_<employee>_<shift>` is the employee's cost for that shift. No
//! quadratic or cross-employee terms are produced.

use crate::models::{EmployeePreference, LinearTerm, ShiftVar};

/// Returns the decision variables of one employee, one per shift.
pub fn employee_variables(employee: &str, num_shifts: usize) -> Vec<ShiftVar> {
    (0..num_shifts)
        .map(|shift| ShiftVar::new(employee, shift))
        .collect()
}

/// Returns the objective terms contributed by one employee.
///
/// The preference vector must have `num_shifts` entries; the builder checks
/// this before calling.
///
/// # Examples
///
/// ```
/// use shift_roster::formulation::preference_terms;
/// use shift_roster::models::EmployeePreference;
///
/// let anna = EmployeePreference::new("Anna", vec![1, 2, 3, 100]);
/// let terms = preference_terms(&anna);
/// assert_eq!(terms.len(), 4);
/// assert_eq!(terms[3].variable.label(), "x_Anna_3");
/// assert_eq!(terms[3].bias, 100);
/// ```
pub fn preference_terms(employee: &EmployeePreference) -> Vec<LinearTerm> {
    employee
        .preferences
        .iter()
        .enumerate()
        .map(|(shift, cost)| LinearTerm::new(ShiftVar::new(employee.name.as_str(), shift), *cost))
        .collect()
}
