//! Puzzle session state with reducer-style transitions
//!
//! Every transition takes `&self` and returns the next state. Tallies are
//! derived from (problem, coefficients) and memoized per state value, so a
//! transition always starts with an empty memo.

use std::cell::OnceCell;

use tracing::debug;

use crate::domain::{
    AtomBalance, CoefficientAssignment, DomainError, DomainResult, ReactionProblem, Tallies,
};

/// Outcome of an explicit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Balanced,
    /// Rows of the atoms whose counts differ
    Unbalanced { mismatched: Vec<AtomBalance> },
}

impl Verdict {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Verdict::Balanced)
    }
}

/// Active problem, its coefficients, and the success flag.
#[derive(Debug, Clone)]
pub struct PuzzleState<'c> {
    catalog: &'c [ReactionProblem],
    problem_index: usize,
    coefficients: CoefficientAssignment,
    solved: bool,
    tallies: OnceCell<Tallies>,
}

impl<'c> PuzzleState<'c> {
    /// Start on problem `index` with every coefficient at 1.
    pub fn new(catalog: &'c [ReactionProblem], index: usize) -> DomainResult<Self> {
        let problem = catalog.get(index).ok_or(DomainError::ProblemNotFound {
            index,
            available: catalog.len(),
        })?;
        Ok(Self {
            catalog,
            problem_index: index,
            coefficients: CoefficientAssignment::ones(problem.slot_count()),
            solved: false,
            tallies: OnceCell::new(),
        })
    }

    /// Start from explicit coefficients (validated against the [1, 9] range).
    pub fn with_coefficients(
        catalog: &'c [ReactionProblem],
        index: usize,
        values: &[u32],
    ) -> DomainResult<Self> {
        let state = Self::new(catalog, index)?;
        let slots = state.problem().slot_count();
        let coefficients = CoefficientAssignment::from_values(values, slots)?;
        Ok(Self {
            coefficients,
            ..state
        })
    }

    pub fn catalog(&self) -> &'c [ReactionProblem] {
        self.catalog
    }

    pub fn problem_index(&self) -> usize {
        self.problem_index
    }

    pub fn problem(&self) -> &'c ReactionProblem {
        // index validated on construction and on every switch
        &self.catalog[self.problem_index]
    }

    pub fn coefficients(&self) -> &CoefficientAssignment {
        &self.coefficients
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Tallies for the current coefficients.
    pub fn tallies(&self) -> &Tallies {
        self.tallies
            .get_or_init(|| Tallies::compute(self.problem(), self.coefficients.as_slice()))
    }

    /// Switch problem: coefficients reset to all ones, success cleared.
    pub fn select_problem(&self, index: usize) -> DomainResult<Self> {
        debug!("select_problem: {} -> {}", self.problem_index, index);
        Self::new(self.catalog, index)
    }

    /// Step one coefficient by `delta`, clamped to [1, 9]. Clears success.
    pub fn apply_delta(&self, slot: usize, delta: i32) -> DomainResult<Self> {
        let coefficients = self.coefficients.apply_delta(slot, delta)?;
        debug!(
            "apply_delta: slot={} delta={} -> {:?}",
            slot,
            delta,
            coefficients.as_slice()
        );
        Ok(Self {
            catalog: self.catalog,
            problem_index: self.problem_index,
            coefficients,
            solved: false,
            tallies: OnceCell::new(),
        })
    }

    /// Verify the equation. A balanced equation sets the success flag;
    /// otherwise coefficients and flag are left as they are.
    pub fn check(&self) -> (Self, Verdict) {
        let tallies = self.tallies();
        if tallies.is_balanced() {
            debug!("check: balanced {:?}", self.coefficients.as_slice());
            let mut next = self.clone();
            next.solved = true;
            (next, Verdict::Balanced)
        } else {
            let mismatched: Vec<_> = tallies
                .diff()
                .into_iter()
                .filter(|row| !row.matched)
                .collect();
            debug!("check: {} mismatched atoms", mismatched.len());
            (self.clone(), Verdict::Unbalanced { mismatched })
        }
    }

    /// Leave the success screen; coefficients stay as they are.
    pub fn dismiss_success(&self) -> Self {
        let mut next = self.clone();
        next.solved = false;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AtomSymbol;
    use crate::domain::CATALOG;

    #[test]
    fn tallies_are_recomputed_after_a_step() {
        let state = PuzzleState::new(&CATALOG, 0).unwrap();
        assert_eq!(state.tallies().left.get(AtomSymbol::H), 2);
        let next = state.apply_delta(0, 1).unwrap();
        assert_eq!(next.tallies().left.get(AtomSymbol::H), 4);
        assert_eq!(state.tallies().left.get(AtomSymbol::H), 2);
    }

    #[test]
    fn new_rejects_unknown_problem() {
        let err = PuzzleState::new(&CATALOG, 3).unwrap_err();
        assert_eq!(
            err,
            DomainError::ProblemNotFound {
                index: 3,
                available: 3
            }
        );
    }

    #[test]
    fn with_coefficients_validates_length() {
        assert!(PuzzleState::with_coefficients(&CATALOG, 0, &[2, 1]).is_err());
        assert!(PuzzleState::with_coefficients(&CATALOG, 0, &[2, 1, 2]).is_ok());
    }
}
