//! Domain layer: puzzle entities and the balance engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod atom;
pub mod catalog;
pub mod coefficients;
pub mod engine;
pub mod error;
pub mod molecule;

pub use atom::AtomSymbol;
pub use catalog::CATALOG;
pub use coefficients::{CoefficientAssignment, MAX_COEFFICIENT, MIN_COEFFICIENT};
pub use engine::{compute_tally, diff, is_balanced, AtomBalance, AtomTally, Tallies};
pub use error::{DomainError, DomainResult};
pub use molecule::{MoleculeInfo, ReactionProblem, Side};
