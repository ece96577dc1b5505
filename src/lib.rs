//! eqbalance: chemical equation balancing puzzle
//!
//! Layers, innermost first:
//! - `domain`: atoms, molecules, the problem catalog and the balance engine
//! - `application`: puzzle state transitions and the puzzle service
//! - `infrastructure`: selector and service wiring
//! - `cli`: arguments, rendering and the interactive session

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
