//! Single-step evolution of a row under a [`CellRule`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AutomatonError;
use crate::rule::{CellRule, Neighborhood};

/// How neighbors past the ends of a row are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Boundary {
    /// A missing neighbor equals the edge cell itself (`a | a b c | c`).
    #[default]
    Reflect,
    /// The row is a ring: the left neighbor of the first cell is the last cell.
    Wrap,
    /// Missing neighbors read as a fixed state.
    Constant(u8),
}

impl Boundary {
    /// Zero padding.
    pub const ZERO: Self = Self::Constant(0);
}

/// Returns the neighborhood of cell `index` in `row`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn neighborhood(row: &[u8], index: usize, boundary: Boundary) -> Neighborhood {
    let center = row[index];
    let last = row.len() - 1;

    let left = if index > 0 {
        row[index - 1]
    } else {
        match boundary {
            Boundary::Reflect => center,
            Boundary::Wrap => row[last],
            Boundary::Constant(state) => state,
        }
    };

    let right = if index < last {
        row[index + 1]
    } else {
        match boundary {
            Boundary::Reflect => center,
            Boundary::Wrap => row[0],
            Boundary::Constant(state) => state,
        }
    };

    Neighborhood::new(left, center, right)
}

/// Checks that every cell of `row` is a state `rule` has entries for.
pub fn validate_row<R: CellRule + ?Sized>(rule: &R, row: &[u8]) -> Result<(), AutomatonError> {
    let states = rule.states();
    match row.iter().position(|&value| value >= states) {
        Some(index) => Err(AutomatonError::InvalidCell {
            index,
            value: row[index],
            states,
        }),
        None => Ok(()),
    }
}

/// Checks `row` and a [`Boundary::Constant`] state against the alphabet of `rule`.
pub(crate) fn validate_step<R: CellRule + ?Sized>(
    rule: &R,
    row: &[u8],
    boundary: Boundary,
) -> Result<(), AutomatonError> {
    if let Boundary::Constant(state) = boundary {
        validate_row(rule, &[state])?;
    }
    validate_row(rule, row)
}

/// Produces the next row from `row`.
///
/// Fails with [`AutomatonError::InvalidCell`] if a cell of `row`, or a
/// [`Boundary::Constant`] state, is outside the alphabet of `rule`. The input
/// row is never modified.
pub fn step<R: CellRule + ?Sized>(
    rule: &R,
    row: &[u8],
    boundary: Boundary,
) -> Result<Vec<u8>, AutomatonError> {
    validate_step(rule, row, boundary)?;
    Ok(step_unchecked(rule, row, boundary))
}

/// [`step`] without the alphabet check; the caller has already validated.
#[cfg(not(feature = "parallel"))]
pub(crate) fn step_unchecked<R: CellRule + ?Sized>(
    rule: &R,
    row: &[u8],
    boundary: Boundary,
) -> Vec<u8> {
    (0..row.len())
        .map(|i| rule.next_state(neighborhood(row, i, boundary)))
        .collect()
}

/// [`step`] without the alphabet check, evaluating cells in parallel.
#[cfg(feature = "parallel")]
pub(crate) fn step_unchecked<R: CellRule + ?Sized>(
    rule: &R,
    row: &[u8],
    boundary: Boundary,
) -> Vec<u8> {
    use rayon::prelude::*;

    (0..row.len())
        .into_par_iter()
        .map(|i| rule.next_state(neighborhood(row, i, boundary)))
        .collect()
}
