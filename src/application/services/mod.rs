//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod puzzle;

pub use puzzle::{AuditEntry, Evaluation, Hint, PuzzleService};
