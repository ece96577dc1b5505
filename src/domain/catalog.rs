//! Built-in problem catalog (trusted, compile-time data)

use crate::domain::atom::AtomSymbol::{Ag, C, H, Na, O};
use crate::domain::molecule::{MoleculeInfo, ReactionProblem};

const HYDROGEN: MoleculeInfo = MoleculeInfo {
    formula: "H₂",
    name: "水素",
    atoms: &[(H, 2)],
};

const OXYGEN: MoleculeInfo = MoleculeInfo {
    formula: "O₂",
    name: "酸素",
    atoms: &[(O, 2)],
};

const WATER: MoleculeInfo = MoleculeInfo {
    formula: "H₂O",
    name: "水",
    atoms: &[(H, 2), (O, 1)],
};

const SILVER_OXIDE: MoleculeInfo = MoleculeInfo {
    formula: "Ag₂O",
    name: "酸化銀",
    atoms: &[(Ag, 2), (O, 1)],
};

const SILVER: MoleculeInfo = MoleculeInfo {
    formula: "Ag",
    name: "銀",
    atoms: &[(Ag, 1)],
};

const SODIUM_BICARBONATE: MoleculeInfo = MoleculeInfo {
    formula: "NaHCO₃",
    name: "炭酸水素ナトリウム",
    atoms: &[(Na, 1), (H, 1), (C, 1), (O, 3)],
};

const SODIUM_CARBONATE: MoleculeInfo = MoleculeInfo {
    formula: "Na₂CO₃",
    name: "炭酸ナトリウム",
    atoms: &[(Na, 2), (C, 1), (O, 3)],
};

const CARBON_DIOXIDE: MoleculeInfo = MoleculeInfo {
    formula: "CO₂",
    name: "二酸化炭素",
    atoms: &[(C, 1), (O, 2)],
};

/// The three puzzles, in selector order.
pub static CATALOG: [ReactionProblem; 3] = [
    ReactionProblem {
        title: "水の合成",
        left: &[HYDROGEN, OXYGEN],
        right: &[WATER],
        reference_coefficients: &[2, 1, 2],
    },
    ReactionProblem {
        title: "酸化銀の分解",
        left: &[SILVER_OXIDE],
        right: &[SILVER, OXYGEN],
        reference_coefficients: &[2, 4, 1],
    },
    ReactionProblem {
        title: "炭酸水素ナトリウムの分解",
        left: &[SODIUM_BICARBONATE],
        right: &[SODIUM_CARBONATE, WATER, CARBON_DIOXIDE],
        reference_coefficients: &[2, 1, 1, 1],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_coefficients_cover_every_slot() {
        for problem in &CATALOG {
            assert_eq!(
                problem.reference_coefficients.len(),
                problem.slot_count(),
                "{}",
                problem.title
            );
        }
    }

    #[test]
    fn every_molecule_has_at_least_one_atom() {
        for problem in &CATALOG {
            for molecule in problem.left.iter().chain(problem.right) {
                assert!(!molecule.atoms.is_empty(), "{}", molecule.formula);
                assert!(molecule.atoms.iter().all(|(_, n)| *n > 0));
            }
        }
    }
}
