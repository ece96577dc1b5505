//! Molecules and reaction problems

use crate::domain::atom::AtomSymbol;

/// Side of a reaction equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Reactants (反応前)
    Left,
    /// Products (反応後)
    Right,
}

/// One chemical species with a fixed composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoleculeInfo {
    /// Display formula, e.g. "H₂O"
    pub formula: &'static str,
    /// Display name, e.g. "水"
    pub name: &'static str,
    /// Atom counts per molecule, in declaration order
    pub atoms: &'static [(AtomSymbol, u32)],
}

impl MoleculeInfo {
    /// One symbol per atom occurrence, in declaration order.
    pub fn atom_glyphs(&self) -> Vec<AtomSymbol> {
        self.atoms
            .iter()
            .flat_map(|(symbol, count)| std::iter::repeat(*symbol).take(*count as usize))
            .collect()
    }
}

/// A catalog problem: the unbalanced skeleton equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionProblem {
    pub title: &'static str,
    pub left: &'static [MoleculeInfo],
    pub right: &'static [MoleculeInfo],
    /// Textbook coefficients, one per slot. Only used for hints and the catalog audit.
    pub reference_coefficients: &'static [u32],
}

impl ReactionProblem {
    /// Number of coefficient slots: `left.len() + right.len()`.
    pub fn slot_count(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Molecules on one side.
    pub fn side(&self, side: Side) -> &'static [MoleculeInfo] {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Slot index of the first molecule on `side`.
    pub fn side_offset(&self, side: Side) -> usize {
        match side {
            Side::Left => 0,
            Side::Right => self.left.len(),
        }
    }

    /// Resolve a slot index into its side and molecule.
    pub fn slot(&self, index: usize) -> Option<(Side, &'static MoleculeInfo)> {
        if index < self.left.len() {
            Some((Side::Left, &self.left[index]))
        } else {
            self.right
                .get(index - self.left.len())
                .map(|molecule| (Side::Right, molecule))
        }
    }
}
