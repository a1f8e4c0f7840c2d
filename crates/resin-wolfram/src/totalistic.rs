//! 3-color totalistic rule tables.
//!
//! A totalistic rule only looks at the sum of its neighborhood, so the
//! 27 possible ternary neighborhoods collapse onto 7 sums (0..=6). The
//! table is keyed by that integer sum; the average (`sum / 3`) is what the
//! codes are traditionally described in terms of, and is only used for
//! display.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AutomatonError;
use crate::rule::{CellRule, Neighborhood, positional_digits};

const SUMS: usize = 7;

/// A 3-color totalistic rule over a 3-cell neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct TotalisticRule {
    /// Code number (0-2186).
    code: u16,
    /// Output state indexed by neighborhood sum.
    table: [u8; SUMS],
}

/// One row of a totalistic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TotalisticEntry {
    /// Neighborhood sum (0-6).
    pub sum: u8,
    /// State produced for that sum.
    pub output: u8,
}

impl TotalisticEntry {
    /// Neighborhood average, `sum / 3`.
    pub fn average(&self) -> f32 {
        self.sum as f32 / 3.0
    }
}

impl TotalisticRule {
    /// Number of cell states.
    pub const STATES: u8 = 3;

    /// Number of distinct neighborhood sums.
    pub const SUMS: usize = SUMS;

    /// Largest valid code, `3^7 - 1`.
    pub const MAX_CODE: u32 = 2186;

    /// Derives the rule table for a code.
    ///
    /// Codes above [`Self::MAX_CODE`] would need an eighth digit and are rejected.
    pub fn new(code: u32) -> Result<Self, AutomatonError> {
        if code > Self::MAX_CODE {
            return Err(AutomatonError::CodeOutOfRange(code));
        }

        let digits: [u8; SUMS] = positional_digits(code, Self::STATES as u32);
        let mut table = [0u8; SUMS];
        // Digits are most significant first, sums run from 6 down to 0.
        for (sum, digit) in (0..SUMS).rev().zip(digits) {
            table[sum] = digit;
        }
        log::debug!("derived totalistic code {code}: {digits:?}");

        Ok(Self {
            code: code as u16,
            table,
        })
    }

    /// Returns the code number.
    pub fn code(&self) -> u32 {
        self.code as u32
    }

    /// Returns the output for a neighborhood sum, or `None` past 6.
    pub fn output_for_sum(&self, sum: u8) -> Option<u8> {
        self.table.get(sum as usize).copied()
    }

    /// All 7 entries, highest sum (average 2.00) first.
    pub fn entries(&self) -> [TotalisticEntry; SUMS] {
        std::array::from_fn(|slot| {
            let sum = SUMS - 1 - slot;
            TotalisticEntry {
                sum: sum as u8,
                output: self.table[sum],
            }
        })
    }
}

impl CellRule for TotalisticRule {
    fn states(&self) -> u8 {
        Self::STATES
    }

    fn next_state(&self, neighborhood: Neighborhood) -> u8 {
        debug_assert!(neighborhood.sum() < SUMS as u16, "sum out of range in {neighborhood}");
        self.table[neighborhood.sum() as usize]
    }
}

impl TryFrom<u32> for TotalisticRule {
    type Error = AutomatonError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<TotalisticRule> for u32 {
    fn from(rule: TotalisticRule) -> Self {
        rule.code()
    }
}

/// Base-3 expansion, highest sum first.
impl fmt::Display for TotalisticRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            write!(f, "{}", entry.output)?;
        }
        Ok(())
    }
}

/// Totalistic codes worth looking at, with the seed color they are usually run from.
pub mod totalistic_codes {
    /// Code 1023 - Sierpinski-like nesting (start color 2).
    pub const CODE_1023: (u32, u8) = (1023, 2);

    /// Code 219 - pillars (start color 1).
    pub const CODE_219: (u32, u8) = (219, 1);

    /// Code 1599 - long-lived irregular pattern (start color 1).
    pub const CODE_1599: (u32, u8) = (1599, 1);

    /// Code 1041 - chaotic (start color 2).
    pub const CODE_1041: (u32, u8) = (1041, 2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_1023_table() {
        let rule = TotalisticRule::new(1023).unwrap();
        let outputs: Vec<u8> = rule.entries().iter().map(|e| e.output).collect();
        assert_eq!(outputs, [1, 1, 0, 1, 2, 2, 0]);
        assert_eq!(rule.output_for_sum(6), Some(1));
        assert_eq!(rule.output_for_sum(2), Some(2));
        assert_eq!(rule.output_for_sum(0), Some(0));
        assert_eq!(rule.output_for_sum(7), None);
        assert_eq!(rule.to_string(), "1101220");
    }

    #[test]
    fn test_entries_descend_by_average() {
        let rule = TotalisticRule::new(0).unwrap();
        let averages: Vec<String> = rule
            .entries()
            .iter()
            .map(|e| format!("{:.2}", e.average()))
            .collect();
        assert_eq!(
            averages,
            ["2.00", "1.67", "1.33", "1.00", "0.67", "0.33", "0.00"]
        );
    }

    #[test]
    fn test_order_does_not_matter() {
        let rule = TotalisticRule::new(1599).unwrap();
        let a = rule.next_state(Neighborhood::new(2, 0, 1));
        let b = rule.next_state(Neighborhood::new(0, 1, 2));
        let c = rule.next_state(Neighborhood::new(1, 1, 1));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_max_code() {
        let rule = TotalisticRule::new(TotalisticRule::MAX_CODE).unwrap();
        assert!(rule.entries().iter().all(|e| e.output == 2));
        assert_eq!(
            TotalisticRule::new(2187),
            Err(AutomatonError::CodeOutOfRange(2187))
        );
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let first = TotalisticRule::new(1041).unwrap();
        let second = TotalisticRule::new(1041).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.entries(), second.entries());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_entry_json() {
        let rule = TotalisticRule::new(1023).unwrap();
        let json = serde_json::to_string(&rule.entries()[0]).unwrap();
        assert_eq!(json, r#"{"sum":6,"output":1}"#);
        let entry: TotalisticEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, rule.entries()[0]);
    }

    #[test]
    fn test_default_active_state() {
        let rule = TotalisticRule::new(219).unwrap();
        assert_eq!(rule.states(), 3);
        assert_eq!(rule.default_active_state(), 2);
    }
}
