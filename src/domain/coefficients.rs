//! Coefficient assignment for the slots of one equation

use crate::domain::error::{DomainError, DomainResult};

/// Smallest coefficient the stepper allows.
pub const MIN_COEFFICIENT: u32 = 1;

/// Largest coefficient the stepper allows.
pub const MAX_COEFFICIENT: u32 = 9;

/// One coefficient per molecule slot, left side first, then right side.
///
/// Every value stays within `[MIN_COEFFICIENT, MAX_COEFFICIENT]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoefficientAssignment(Vec<u32>);

impl CoefficientAssignment {
    /// All slots set to 1.
    pub fn ones(slots: usize) -> Self {
        Self(vec![MIN_COEFFICIENT; slots])
    }

    /// Build from explicit values, rejecting wrong length or out-of-range entries.
    pub fn from_values(values: &[u32], slots: usize) -> DomainResult<Self> {
        if values.len() != slots {
            return Err(DomainError::CoefficientCount {
                expected: slots,
                actual: values.len(),
            });
        }
        if let Some(&value) = values
            .iter()
            .find(|v| !(MIN_COEFFICIENT..=MAX_COEFFICIENT).contains(*v))
        {
            return Err(DomainError::CoefficientRange {
                value,
                min: MIN_COEFFICIENT,
                max: MAX_COEFFICIENT,
            });
        }
        Ok(Self(values.to_vec()))
    }

    pub fn get(&self, slot: usize) -> Option<u32> {
        self.0.get(slot).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Add `delta` to one slot, clamping into the allowed range.
    pub fn apply_delta(&self, slot: usize, delta: i32) -> DomainResult<Self> {
        let current = self.get(slot).ok_or(DomainError::SlotOutOfRange {
            slot,
            slots: self.0.len(),
        })?;
        let stepped = (i64::from(current) + i64::from(delta))
            .clamp(i64::from(MIN_COEFFICIENT), i64::from(MAX_COEFFICIENT));

        let mut next = self.0.clone();
        next[slot] = stepped as u32;
        Ok(Self(next))
    }
}
