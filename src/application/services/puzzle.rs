//! Puzzle service
//!
//! Entry point for the presentation layer: resolves problems from the
//! catalog, starts sessions, evaluates one-shot answers, and serves hints
//! from the catalog's reference coefficients.

use tracing::debug;

use crate::application::state::{PuzzleState, Verdict};
use crate::application::ApplicationResult;
use crate::domain::{AtomBalance, DomainError, DomainResult, ReactionProblem, Tallies};

/// Result of evaluating one coefficient assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub tallies: Tallies,
    pub rows: Vec<AtomBalance>,
    pub balanced: bool,
}

/// Suggestion for the first slot that differs from the reference answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Zero-based slot index
    pub slot: usize,
    pub formula: &'static str,
    pub current: u32,
    pub suggested: u32,
}

/// Audit result for one catalog problem at its reference coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub index: usize,
    pub title: &'static str,
    pub slot_count: usize,
    pub reference_len: usize,
    /// None when the reference length does not match the slot count
    pub balanced: Option<bool>,
}

impl AuditEntry {
    pub fn is_ok(&self) -> bool {
        self.reference_len == self.slot_count && self.balanced == Some(true)
    }
}

/// Service over a read-only problem catalog.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleService {
    catalog: &'static [ReactionProblem],
}

impl PuzzleService {
    pub fn new(catalog: &'static [ReactionProblem]) -> Self {
        Self { catalog }
    }

    pub fn problems(&self) -> &'static [ReactionProblem] {
        self.catalog
    }

    pub fn problem(&self, index: usize) -> DomainResult<&'static ReactionProblem> {
        self.catalog.get(index).ok_or(DomainError::ProblemNotFound {
            index,
            available: self.catalog.len(),
        })
    }

    /// Fresh session on problem `index`.
    pub fn start(&self, index: usize) -> ApplicationResult<PuzzleState<'static>> {
        debug!("start: problem={}", index);
        Ok(PuzzleState::new(self.catalog, index)?)
    }

    /// Session on problem `index` with explicit coefficients, or all ones.
    pub fn start_with(
        &self,
        index: usize,
        values: Option<&[u32]>,
    ) -> ApplicationResult<PuzzleState<'static>> {
        match values {
            Some(values) => Ok(PuzzleState::with_coefficients(self.catalog, index, values)?),
            None => self.start(index),
        }
    }

    /// Evaluate explicit coefficients without keeping a session.
    pub fn evaluate(&self, index: usize, values: &[u32]) -> ApplicationResult<Evaluation> {
        let state = PuzzleState::with_coefficients(self.catalog, index, values)?;
        let (_, verdict) = state.check();
        let tallies = state.tallies().clone();
        let rows = tallies.diff();
        debug!("evaluate: problem={} balanced={}", index, verdict.is_balanced());
        Ok(Evaluation {
            balanced: verdict == Verdict::Balanced,
            tallies,
            rows,
        })
    }

    /// First slot whose coefficient differs from the reference coefficients.
    ///
    /// `None` when the current tallies already balance, a balanced multiple of
    /// the reference included, since `check` accepts any balanced assignment.
    pub fn hint(&self, state: &PuzzleState<'_>) -> Option<Hint> {
        if state.tallies().is_balanced() {
            return None;
        }
        let problem = state.problem();
        problem
            .reference_coefficients
            .iter()
            .zip(state.coefficients().as_slice())
            .enumerate()
            .find(|(_, (reference, current))| reference != current)
            .and_then(|(slot, (&suggested, &current))| {
                problem.slot(slot).map(|(_, molecule)| Hint {
                    slot,
                    formula: molecule.formula,
                    current,
                    suggested,
                })
            })
    }

    /// Check every problem at its reference coefficients.
    pub fn audit_catalog(&self) -> Vec<AuditEntry> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(index, problem)| {
                let reference = problem.reference_coefficients;
                let balanced = (reference.len() == problem.slot_count())
                    .then(|| Tallies::compute(problem, reference).is_balanced());
                debug!("audit: {} balanced={:?}", problem.title, balanced);
                AuditEntry {
                    index,
                    title: problem.title,
                    slot_count: problem.slot_count(),
                    reference_len: reference.len(),
                    balanced,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CATALOG;

    #[test]
    fn problem_lookup_reports_catalog_size() {
        let service = PuzzleService::new(&CATALOG);
        assert!(service.problem(2).is_ok());
        assert_eq!(
            service.problem(7).unwrap_err(),
            DomainError::ProblemNotFound {
                index: 7,
                available: 3
            }
        );
    }

    #[test]
    fn start_with_none_uses_all_ones() {
        let service = PuzzleService::new(&CATALOG);
        let state = service.start_with(2, None).unwrap();
        assert_eq!(state.coefficients().as_slice(), &[1, 1, 1, 1]);
    }
}
