//! Local transition rules and elementary (binary) rule tables.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AutomatonError;

/// A local transition function over a 3-cell neighborhood.
///
/// Implementors are immutable lookup tables: `next_state` must be a pure
/// function of the neighborhood and must be total over `0..states()`.
/// Rules are shared read-only between cells, hence `Sync`.
pub trait CellRule: Sync {
    /// Number of distinct cell states (the alphabet is `0..states()`).
    fn states(&self) -> u8;

    /// State a default seed cell starts in.
    fn default_active_state(&self) -> u8 {
        self.states() - 1
    }

    /// Returns the next state of a cell given its neighborhood.
    fn next_state(&self, neighborhood: Neighborhood) -> u8;
}

impl<R: CellRule + ?Sized> CellRule for &R {
    fn states(&self) -> u8 {
        (**self).states()
    }

    fn default_active_state(&self) -> u8 {
        (**self).default_active_state()
    }

    fn next_state(&self, neighborhood: Neighborhood) -> u8 {
        (**self).next_state(neighborhood)
    }
}

/// The (left, center, right) window around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighborhood {
    /// Left neighbor.
    pub left: u8,
    /// The cell itself.
    pub center: u8,
    /// Right neighbor.
    pub right: u8,
}

impl Neighborhood {
    /// Creates a neighborhood from its three cells.
    pub const fn new(left: u8, center: u8, right: u8) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Index of a binary neighborhood (0-7), reading the cells as bits.
    ///
    /// Only meaningful when every cell is 0 or 1.
    pub const fn binary_index(self) -> usize {
        ((self.left as usize) << 2) | ((self.center as usize) << 1) | self.right as usize
    }

    /// Sum of the three cells, widened so any states add without overflow.
    pub const fn sum(self) -> u16 {
        self.left as u16 + self.center as u16 + self.right as u16
    }

    /// All 8 binary neighborhoods in canonical order, "111" first and "000" last.
    pub fn binary_patterns() -> [Neighborhood; 8] {
        std::array::from_fn(|slot| {
            let index = 7 - slot;
            Neighborhood::new((index >> 2) as u8 & 1, (index >> 1) as u8 & 1, index as u8 & 1)
        })
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.center, self.right)
    }
}

/// Splits `value` into `N` digits of the given base, most significant first.
///
/// Digits beyond the `N` places are folded into the first digit, which is
/// why callers range-check their identifiers beforehand.
pub(crate) fn positional_digits<const N: usize>(mut value: u32, base: u32) -> [u8; N] {
    let mut digits = [0u8; N];
    for (slot, place) in (0..N as u32).rev().enumerate() {
        let weight = base.pow(place);
        digits[slot] = (value / weight) as u8;
        value %= weight;
    }
    digits
}

/// A Wolfram elementary rule (2 states, 3-cell neighborhood).
///
/// The table is derived once from the rule number and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct ElementaryRule {
    /// Rule number (0-255).
    rule: u8,
    /// Output state indexed by [`Neighborhood::binary_index`].
    table: [u8; 8],
}

impl ElementaryRule {
    /// Derives the rule table for a rule number.
    pub fn new(rule: u8) -> Self {
        let digits: [u8; 8] = positional_digits(rule as u32, 2);
        let mut table = [0u8; 8];
        for (pattern, digit) in Neighborhood::binary_patterns().into_iter().zip(digits) {
            table[pattern.binary_index()] = digit;
        }
        log::debug!("derived elementary rule {rule}: {digits:?}");
        Self { rule, table }
    }

    /// Returns the rule number.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Returns the output for a binary neighborhood.
    pub fn output(&self, neighborhood: Neighborhood) -> u8 {
        debug_assert!(
            neighborhood.left < 2 && neighborhood.center < 2 && neighborhood.right < 2,
            "non-binary neighborhood {neighborhood}"
        );
        self.table[neighborhood.binary_index()]
    }

    /// All 8 (pattern, output) entries in canonical order, "111" first.
    pub fn entries(&self) -> [(Neighborhood, u8); 8] {
        Neighborhood::binary_patterns().map(|pattern| (pattern, self.output(pattern)))
    }
}

impl CellRule for ElementaryRule {
    fn states(&self) -> u8 {
        2
    }

    fn next_state(&self, neighborhood: Neighborhood) -> u8 {
        self.output(neighborhood)
    }
}

impl From<u8> for ElementaryRule {
    fn from(rule: u8) -> Self {
        Self::new(rule)
    }
}

impl From<ElementaryRule> for u8 {
    fn from(rule: ElementaryRule) -> Self {
        rule.rule
    }
}

impl TryFrom<u32> for ElementaryRule {
    type Error = AutomatonError;

    fn try_from(rule: u32) -> Result<Self, Self::Error> {
        u8::try_from(rule)
            .map(Self::new)
            .map_err(|_| AutomatonError::RuleOutOfRange(rule))
    }
}

/// Binary expansion, highest bit ("111") first.
impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, output) in self.entries() {
            write!(f, "{output}")?;
        }
        Ok(())
    }
}

/// Common elementary rules.
pub mod elementary_rules {
    /// Rule 30 - chaotic, used for random number generation.
    pub const RULE_30: u8 = 30;

    /// Rule 90 - Sierpinski triangle.
    pub const RULE_90: u8 = 90;

    /// Rule 110 - Turing complete.
    pub const RULE_110: u8 = 110;

    /// Rule 135 - inverse of rule 30.
    pub const RULE_135: u8 = 135;

    /// Rule 184 - traffic flow model.
    pub const RULE_184: u8 = 184;
}
