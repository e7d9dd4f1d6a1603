//! Decision variable identifiers.
//!
//! A [`ShiftVar`] names the binary variable "employee `e` works shift `s`".
//! Inside the crate it is carried as a plain (employee, shift) pair; the
//! string form `x_<employee>_<shift>` only exists at the serialization
//! boundary, where the solver expects string labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Prefix of every variable label.
pub const LABEL_PREFIX: &str = "x";

/// Separator between the label prefix, employee name and shift index.
pub const LABEL_SEPARATOR: char = '_';

/// Binary decision variable for one (employee, shift) pair.
///
/// Labels are parsed from the right: the shift index is whatever follows
/// the last separator, so employee names may themselves contain `_`.
///
/// # Examples
///
/// ```
/// use shift_roster::models::ShiftVar;
///
/// let var = ShiftVar::new("Mary_Ann", 2);
/// assert_eq!(var.label(), "x_Mary_Ann_2");
///
/// let parsed: ShiftVar = "x_Mary_Ann_2".parse().unwrap();
/// assert_eq!(parsed, var);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ShiftVar {
    employee: String,
    shift: usize,
}

impl ShiftVar {
    /// Creates the variable for `employee` working `shift`.
    pub fn new(employee: impl Into<String>, shift: usize) -> Self {
        Self {
            employee: employee.into(),
            shift,
        }
    }

    /// Returns the employee name.
    pub fn employee(&self) -> &str {
        &self.employee
    }

    /// Returns the shift index.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Renders the solver-facing label.
    pub fn label(&self) -> String {
        format!(
            "{LABEL_PREFIX}{LABEL_SEPARATOR}{}{LABEL_SEPARATOR}{}",
            self.employee, self.shift
        )
    }

    /// Parses a solver-facing label back into a variable.
    pub fn parse(label: &str) -> Result<Self, SchedulerError> {
        let invalid = || SchedulerError::InvalidVariableLabel {
            label: label.to_string(),
        };

        let rest = label
            .strip_prefix(LABEL_PREFIX)
            .and_then(|rest| rest.strip_prefix(LABEL_SEPARATOR))
            .ok_or_else(invalid)?;
        let (employee, shift) = rest.rsplit_once(LABEL_SEPARATOR).ok_or_else(invalid)?;

        if employee.is_empty() || shift.is_empty() || !shift.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        // Only the canonical rendering is accepted: "x_Anna_07" is not "x_Anna_7".
        if shift.len() > 1 && shift.starts_with('0') {
            return Err(invalid());
        }
        let shift = shift.parse::<usize>().map_err(|_| invalid())?;

        Ok(Self::new(employee, shift))
    }
}

impl fmt::Display for ShiftVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for ShiftVar {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ShiftVar> for String {
    fn from(var: ShiftVar) -> Self {
        var.label()
    }
}

impl TryFrom<String> for ShiftVar {
    type Error = SchedulerError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::parse(&label)
    }
}
