//! Iterating a rule into a [`History`].

use crate::AutomatonError;
use crate::config::RunConfig;
use crate::evolve::{Boundary, step, step_unchecked, validate_step};
use crate::history::History;
use crate::rule::{CellRule, ElementaryRule};
use crate::totalistic::TotalisticRule;

/// A rule paired with its edge handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation<R> {
    rule: R,
    boundary: Boundary,
}

impl<R: CellRule> Simulation<R> {
    /// Creates a simulation with reflecting edges.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            boundary: Boundary::default(),
        }
    }

    /// Sets the edge handling.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns the rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Returns the edge handling.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Advances `row` by one generation.
    pub fn step(&self, row: &[u8]) -> Result<Vec<u8>, AutomatonError> {
        step(&self.rule, row, self.boundary)
    }

    /// Runs `iterations` steps from `initial`, keeping every generation.
    ///
    /// The initial row is checked against the rule's alphabet before the
    /// first step; after that every row is valid by construction.
    pub fn run(&self, initial: Vec<u8>, iterations: usize) -> Result<History, AutomatonError> {
        validate_step(&self.rule, &initial, self.boundary)?;
        log::debug!(
            "running {} steps over {} cells ({:?} boundary)",
            iterations,
            initial.len(),
            self.boundary
        );

        let mut history = History::with_capacity(initial, self.rule.states(), iterations);
        for generation in 1..=iterations {
            let next = step_unchecked(&self.rule, history.last(), self.boundary);
            log::trace!(
                "generation {generation}: {} active",
                next.iter().filter(|&&c| c != 0).count()
            );
            history.push(next);
        }
        Ok(history)
    }

    /// Runs with the iteration count, edges and starting row from `config`.
    ///
    /// The boundary in `config` replaces this simulation's boundary.
    pub fn run_config(&self, config: &RunConfig) -> Result<History, AutomatonError> {
        let initial = config.initial_row(self.rule.default_active_state())?;
        self.with_boundary_ref(config.boundary)
            .run(initial, config.iterations)
    }

    fn with_boundary_ref(&self, boundary: Boundary) -> Simulation<&R> {
        Simulation {
            rule: &self.rule,
            boundary,
        }
    }
}

/// Runs an elementary rule.
///
/// ```
/// use rhizome_resin_wolfram::{RunConfig, elementary_1d};
///
/// let history = elementary_1d(110, &RunConfig::new(10)).unwrap();
/// assert_eq!(history.len(), 11);
/// assert_eq!(history.width(), 1001);
/// ```
pub fn elementary_1d(rule: u8, config: &RunConfig) -> Result<History, AutomatonError> {
    Simulation::new(ElementaryRule::new(rule)).run_config(config)
}

/// Runs a 3-color totalistic code.
///
/// The default seed starts in state 2 unless `config` sets a start color.
pub fn totalistic_1d(code: u32, config: &RunConfig) -> Result<History, AutomatonError> {
    Simulation::new(TotalisticRule::new(code)?).run_config(config)
}
