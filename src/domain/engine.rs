//! Balance engine: per-side atom tallies and the balance comparison
//!
//! Everything here is a pure function of the molecule data and the
//! coefficients. The comparison runs over the union of atoms seen on either
//! side, so an atom that only appears on one side is always a mismatch.

use crate::domain::atom::AtomSymbol;
use crate::domain::molecule::{MoleculeInfo, ReactionProblem, Side};

/// Total atom counts on one side of an equation.
///
/// Entries keep the order in which atoms were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomTally {
    entries: Vec<(AtomSymbol, u32)>,
}

impl AtomTally {
    /// Count for `atom`; 0 when absent.
    pub fn get(&self, atom: AtomSymbol) -> u32 {
        self.entries
            .iter()
            .find(|(symbol, _)| *symbol == atom)
            .map_or(0, |(_, count)| *count)
    }

    pub fn contains(&self, atom: AtomSymbol) -> bool {
        self.entries.iter().any(|(symbol, _)| *symbol == atom)
    }

    /// Atoms present in this tally, in first-seen order.
    pub fn atoms(&self) -> impl Iterator<Item = AtomSymbol> + '_ {
        self.entries.iter().map(|(symbol, _)| *symbol)
    }

    fn add(&mut self, atom: AtomSymbol, amount: u32) {
        match self.entries.iter_mut().find(|(symbol, _)| *symbol == atom) {
            Some((_, count)) => *count += amount,
            None => self.entries.push((atom, amount)),
        }
    }
}

impl FromIterator<(AtomSymbol, u32)> for AtomTally {
    fn from_iter<I: IntoIterator<Item = (AtomSymbol, u32)>>(iter: I) -> Self {
        let mut tally = AtomTally::default();
        for (atom, count) in iter {
            tally.add(atom, count);
        }
        tally
    }
}

/// Sum atom counts over `molecules`, weighting molecule `i` by
/// `coefficients[offset + i]`.
///
/// The result has a key for every atom with a non-zero count in some
/// molecule, even when that molecule's coefficient is 0.
///
/// # Panics
///
/// Panics if `coefficients` has fewer than `offset + molecules.len()` entries.
pub fn compute_tally(
    molecules: &[MoleculeInfo],
    coefficients: &[u32],
    offset: usize,
) -> AtomTally {
    assert!(
        coefficients.len() >= offset + molecules.len(),
        "coefficient slice too short: need {} entries, got {}",
        offset + molecules.len(),
        coefficients.len()
    );

    let mut tally = AtomTally::default();
    for (index, molecule) in molecules.iter().enumerate() {
        let coefficient = coefficients[offset + index];
        for &(atom, count) in molecule.atoms.iter().filter(|(_, count)| *count > 0) {
            tally.add(atom, count * coefficient);
        }
    }
    tally
}

/// True iff every atom in the union of both tallies has equal counts.
pub fn is_balanced(left: &AtomTally, right: &AtomTally) -> bool {
    union_atoms(left, right).all(|atom| left.get(atom) == right.get(atom))
}

/// Per-atom comparison row used for the diagnostic display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomBalance {
    pub atom: AtomSymbol,
    pub left: u32,
    pub right: u32,
    pub matched: bool,
}

/// Compare both tallies over the union of their atoms.
///
/// Rows are ordered by first appearance, scanning left then right.
pub fn diff(left: &AtomTally, right: &AtomTally) -> Vec<AtomBalance> {
    union_atoms(left, right)
        .map(|atom| {
            let (l, r) = (left.get(atom), right.get(atom));
            AtomBalance {
                atom,
                left: l,
                right: r,
                matched: l == r,
            }
        })
        .collect()
}

fn union_atoms<'a>(
    left: &'a AtomTally,
    right: &'a AtomTally,
) -> impl Iterator<Item = AtomSymbol> + 'a {
    let right_only = right.atoms().filter(move |atom| !left.contains(*atom));
    left.atoms().chain(right_only)
}

/// Both sides of a problem tallied for one coefficient assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tallies {
    pub left: AtomTally,
    pub right: AtomTally,
}

impl Tallies {
    /// # Panics
    ///
    /// Panics if `coefficients` is shorter than the problem's slot count.
    pub fn compute(problem: &ReactionProblem, coefficients: &[u32]) -> Self {
        Self {
            left: compute_tally(problem.left, coefficients, problem.side_offset(Side::Left)),
            right: compute_tally(problem.right, coefficients, problem.side_offset(Side::Right)),
        }
    }

    pub fn side(&self, side: Side) -> &AtomTally {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.left, &self.right)
    }

    pub fn diff(&self) -> Vec<AtomBalance> {
        diff(&self.left, &self.right)
    }
}
