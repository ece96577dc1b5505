//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid requests against the puzzle model.
/// An unbalanced equation is not one of them: that is a normal verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("problem {index} not found (catalog has {available} problems)")]
    ProblemNotFound { index: usize, available: usize },

    #[error("slot {slot} out of range (equation has {slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error("expected {expected} coefficients, got {actual}")]
    CoefficientCount { expected: usize, actual: usize },

    #[error("coefficient {value} out of range [{min}, {max}]")]
    CoefficientRange { value: u32, min: u32, max: u32 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
