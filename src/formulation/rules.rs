//! Constraint construction for the shift rules.
//!
//! Every function here returns one labelled [`Constraint`]:
//!
//! | rule        | encoding                         | label                        |
//! |-------------|----------------------------------|------------------------------|
//! | exactly one | `discrete(x_e_0 .. x_e_n)`       | `discrete_<e>`               |
//! | exclusion   | `x_a_i + x_b_i <= 1`             | `exclusion_<a>_<b>_<i>`      |
//! | lock-step   | `x_c_i - x_d_i == 0`             | `lockstep_<c>_<d>_<i>`       |
//! | headcount   | `sum_e x_e_i == headcount`       | `headcount_<i>`              |
//! | unavailable | `x_e_i == 0`                     | `unavailable_<e>_<i>`        |

use crate::models::{Constraint, LinearTerm, Sense, ShiftVar};

/// Employee works exactly one of the given variables.
pub fn exactly_one(employee: &str, variables: Vec<ShiftVar>) -> Constraint {
    Constraint::discrete(format!("discrete_{employee}"), variables)
}

/// `first` and `second` never both work `shift`.
pub fn exclusion(first: &str, second: &str, shift: usize) -> Constraint {
    Constraint::linear(
        format!("exclusion_{first}_{second}_{shift}"),
        vec![
            LinearTerm::new(ShiftVar::new(first, shift), 1),
            LinearTerm::new(ShiftVar::new(second, shift), 1),
        ],
        Sense::Le,
        1,
    )
}

/// `first` works `shift` exactly when `second` does.
pub fn lockstep(first: &str, second: &str, shift: usize) -> Constraint {
    Constraint::linear(
        format!("lockstep_{first}_{second}_{shift}"),
        vec![
            LinearTerm::new(ShiftVar::new(first, shift), 1),
            LinearTerm::new(ShiftVar::new(second, shift), -1),
        ],
        Sense::Eq,
        0,
    )
}

/// Exactly `headcount` of `employees` work `shift`.
pub fn headcount<'a>(
    employees: impl IntoIterator<Item = &'a str>,
    shift: usize,
    headcount: usize,
) -> Constraint {
    let terms = employees
        .into_iter()
        .map(|employee| LinearTerm::new(ShiftVar::new(employee, shift), 1))
        .collect();
    Constraint::linear(
        format!("headcount_{shift}"),
        terms,
        Sense::Eq,
        headcount as i64,
    )
}

/// `employee` never works `shift`.
pub fn unavailable(employee: &str, shift: usize) -> Constraint {
    Constraint::linear(
        format!("unavailable_{employee}_{shift}"),
        vec![LinearTerm::new(ShiftVar::new(employee, shift), 1)],
        Sense::Eq,
        0,
    )
}
