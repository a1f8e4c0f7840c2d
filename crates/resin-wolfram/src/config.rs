//! Run configuration and the default seed row.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AutomatonError;
use crate::evolve::Boundary;

/// Shape of the default initial row: all zero except one active cell.
///
/// The active cell sits at `row_length / 2 + center_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeedConfig {
    /// Number of cells in the row.
    pub row_length: usize,
    /// Offset of the active cell from the midpoint.
    pub center_offset: isize,
    /// State of the active cell (None = the rule's default active state).
    pub active_value: Option<u8>,
}

impl SeedConfig {
    /// Creates a seed of the given length with the active cell just right of center.
    pub fn new(row_length: usize) -> Self {
        Self {
            row_length,
            center_offset: 1,
            active_value: None,
        }
    }

    /// Sets the offset of the active cell from the midpoint.
    pub fn with_center_offset(mut self, center_offset: isize) -> Self {
        self.center_offset = center_offset;
        self
    }

    /// Sets the state of the active cell.
    pub fn with_active_value(mut self, active_value: u8) -> Self {
        self.active_value = Some(active_value);
        self
    }

    /// Index of the active cell.
    pub fn active_index(&self) -> Result<usize, AutomatonError> {
        let index = (self.row_length / 2) as isize + self.center_offset;
        if index < 0 || index as usize >= self.row_length {
            return Err(AutomatonError::SeedOutOfBounds {
                index,
                row_length: self.row_length,
            });
        }
        Ok(index as usize)
    }

    /// Builds the seed row, using `default_active` when no active value is set.
    pub fn build(&self, default_active: u8) -> Result<Vec<u8>, AutomatonError> {
        let index = self.active_index()?;
        let mut row = vec![0; self.row_length];
        row[index] = self.active_value.unwrap_or(default_active);
        Ok(row)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::new(1001)
    }
}

/// Everything a run needs besides the rule itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Number of steps to take; the history holds one more row than this.
    pub iterations: usize,
    /// Edge handling.
    pub boundary: Boundary,
    /// Default row, used only when `initial_row` is None.
    pub seed: SeedConfig,
    /// Explicit initial row.
    pub initial_row: Option<Vec<u8>>,
}

impl RunConfig {
    /// Creates a configuration running for `iterations` steps from the default seed.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            boundary: Boundary::default(),
            seed: SeedConfig::default(),
            initial_row: None,
        }
    }

    /// Sets the edge handling.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the default seed.
    pub fn with_seed(mut self, seed: SeedConfig) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the active state of the default seed (the "start color").
    pub fn with_start_color(mut self, start_color: u8) -> Self {
        self.seed.active_value = Some(start_color);
        self
    }

    /// Starts from an explicit row instead of the seed.
    pub fn with_initial_row(mut self, row: Vec<u8>) -> Self {
        self.initial_row = Some(row);
        self
    }

    /// Returns the row a run starts from.
    ///
    /// The seed row is only built when no explicit row was given.
    pub fn initial_row(&self, default_active: u8) -> Result<Vec<u8>, AutomatonError> {
        match &self.initial_row {
            Some(row) => Ok(row.clone()),
            None => self.seed.build(default_active),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(500)
    }
}
