//! Solution decoding.
//!
//! Turns one feasible assignment into a [`ShiftRoster`]. The decoder does
//! not re-check the exactly-one rule: an employee assigned to several
//! shifts (or none) shows up several times (or not at all), exactly as the
//! assignment encodes it.

use tracing::debug;

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Assignment, Sample, ShiftRoster};

/// Decodes a validated assignment into a roster of `num_shifts` shifts.
///
/// # Errors
///
/// Returns `ShiftOutOfRange` if a selected variable refers to a shift index
/// of `num_shifts` or above.
///
/// # Example
///
/// ```
/// use shift_roster::decoding::decode;
/// use shift_roster::models::{Assignment, ShiftVar};
///
/// let assignment: Assignment = [
///     (ShiftVar::new("Anna", 0), true),
///     (ShiftVar::new("Anna", 1), false),
///     (ShiftVar::new("Bill", 1), true),
/// ]
/// .into_iter()
/// .collect();
///
/// let roster = decode(&assignment, 2).unwrap();
/// assert!(roster.shift(0).unwrap().contains("Anna"));
/// assert!(roster.shift(1).unwrap().contains("Bill"));
/// ```
pub fn decode(assignment: &Assignment, num_shifts: usize) -> SchedulerResult<ShiftRoster> {
    let mut roster = ShiftRoster::new(num_shifts);

    for var in assignment.selected() {
        if var.shift() >= num_shifts {
            return Err(SchedulerError::ShiftOutOfRange {
                label: var.label(),
                shift: var.shift(),
                num_shifts,
            });
        }
        roster.assign(var.shift(), var.employee());
    }

    debug!(
        num_shifts,
        assigned = roster.assigned_count(),
        "Decoded assignment"
    );
    Ok(roster)
}

/// Validates a raw solver sample and decodes it.
///
/// # Errors
///
/// Returns `InvalidVariableLabel` or `NonBinaryValue` for a malformed
/// sample, and `ShiftOutOfRange` as [`decode`] does.
pub fn decode_sample(sample: &Sample, num_shifts: usize) -> SchedulerResult<ShiftRoster> {
    let assignment = Assignment::from_sample(sample)?;
    decode(&assignment, num_shifts)
}
