//! Application layer: session state and services
//!
//! This layer orchestrates domain logic; it performs no terminal I/O.

pub mod error;
pub mod error_ext;
pub mod services;
pub mod state;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use state::{PuzzleState, Verdict};
