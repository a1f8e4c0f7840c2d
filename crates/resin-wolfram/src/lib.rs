//! One-dimensional cellular automata: Wolfram elementary rules and
//! 3-color totalistic codes.
//!
//! A rule number (0-255) or totalistic code (0-2186) is decomposed into the
//! digits of a lookup table once; each generation then maps every cell's
//! (left, center, right) neighborhood through that table. Rows past the edges
//! reflect by default, so an edge cell sees itself as its missing neighbor.
//!
//! # Example
//!
//! ```
//! use rhizome_resin_wolfram::{Boundary, ElementaryRule, RunConfig, Simulation, totalistic_1d};
//!
//! // Rule 90 from a single cell: the Sierpinski triangle.
//! let sim = Simulation::new(ElementaryRule::new(90));
//! let history = sim.run(vec![0, 0, 0, 1, 0, 0, 0], 2).unwrap();
//! assert_eq!(history.last(), &[0, 1, 0, 0, 0, 1, 0]);
//!
//! // Code 1023 from the default 1001-cell seed, wrapping at the edges.
//! let config = RunConfig::new(100).with_boundary(Boundary::Wrap);
//! let history = totalistic_1d(1023, &config).unwrap();
//! assert_eq!(history.len(), 101);
//! ```

mod config;
mod error;
mod evolve;
mod history;
mod rule;
mod simulation;
mod totalistic;

pub use config::{RunConfig, SeedConfig};
pub use error::AutomatonError;
pub use evolve::{Boundary, neighborhood, step, validate_row};
pub use history::History;
pub use rule::{CellRule, ElementaryRule, Neighborhood, elementary_rules};
pub use simulation::{Simulation, elementary_1d, totalistic_1d};
pub use totalistic::{TotalisticEntry, TotalisticRule, totalistic_codes};

/// Run with: cargo test -p rhizome-resin-wolfram --features invariant-tests
#[cfg(all(test, feature = "invariant-tests"))]
mod invariant_tests;
