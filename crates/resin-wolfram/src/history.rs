//! The row-by-row history of a run.

#[cfg(feature = "serde")]
use serde::Serialize;

/// All rows produced by a run, oldest first.
///
/// Row 0 is the initial row, row `i` is the state after `i` steps. Every row
/// has the same width as the initial row. The history only ever grows at the
/// end.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct History {
    /// Number of cell states, used to scale intensities.
    states: u8,
    /// Generations, oldest first.
    rows: Vec<Vec<u8>>,
}

impl History {
    /// Starts a history from an initial row.
    pub fn new(initial: Vec<u8>, states: u8) -> Self {
        Self {
            states,
            rows: vec![initial],
        }
    }

    /// Starts a history with room for `generations` more rows.
    pub fn with_capacity(initial: Vec<u8>, states: u8, generations: usize) -> Self {
        let mut rows = Vec::with_capacity(generations + 1);
        rows.push(initial);
        Self { states, rows }
    }

    /// Appends the next generation.
    pub(crate) fn push(&mut self, row: Vec<u8>) {
        debug_assert_eq!(row.len(), self.width(), "rows must share one width");
        self.rows.push(row);
    }

    /// Number of rows (generations + 1).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a history holds at least its initial row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of steps taken since the initial row.
    pub fn generations(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of cell states.
    pub fn states(&self) -> u8 {
        self.states
    }

    /// Gets a row by generation.
    pub fn row(&self, generation: usize) -> Option<&[u8]> {
        self.rows.get(generation).map(Vec::as_slice)
    }

    /// The initial row.
    pub fn first(&self) -> &[u8] {
        &self.rows[0]
    }

    /// The most recent row.
    pub fn last(&self) -> &[u8] {
        &self.rows[self.rows.len() - 1]
    }

    /// All rows, oldest first.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Iterates over rows, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Consumes the history, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }

    /// Number of non-zero cells in a generation.
    pub fn population(&self, generation: usize) -> Option<usize> {
        self.row(generation)
            .map(|row| row.iter().filter(|&&c| c != 0).count())
    }

    /// Indices of the non-zero cells in a generation.
    pub fn active_cells(&self, generation: usize) -> Option<Vec<usize>> {
        self.row(generation).map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c != 0)
                .map(|(i, _)| i)
                .collect()
        })
    }

    /// Every cell divided by the largest state, in `[0, 1]`.
    ///
    /// This is the form a renderer consumes; a binary history maps to 0 and 1,
    /// a 3-color history to 0, 0.5 and 1.
    pub fn intensities(&self) -> Vec<Vec<f32>> {
        let max = self.states.saturating_sub(1).max(1) as f32;
        self.rows
            .iter()
            .map(|row| row.iter().map(|&c| c as f32 / max).collect())
            .collect()
    }
}
