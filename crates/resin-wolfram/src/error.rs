//! Error types for resin-wolfram.

use thiserror::Error;

/// Errors that can occur while building rules or running an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Elementary rule number does not fit in 8 bits.
    #[error("elementary rule {0} out of range (0-255)")]
    RuleOutOfRange(u32),

    /// Totalistic code has more than 7 base-3 digits.
    #[error("totalistic code {0} out of range (0-{max})", max = crate::TotalisticRule::MAX_CODE)]
    CodeOutOfRange(u32),

    /// A cell holds a state the rule has no entry for.
    #[error("cell {index} has state {value}, but the rule only has {states} states")]
    InvalidCell {
        /// Position of the offending cell.
        index: usize,
        /// The state found there.
        value: u8,
        /// Number of states the rule understands.
        states: u8,
    },

    /// The default seed cell falls outside the row.
    #[error("seed cell {index} lies outside a row of length {row_length}")]
    SeedOutOfBounds {
        /// Requested active index.
        index: isize,
        /// Configured row length.
        row_length: usize,
    },
}
