//! Atom symbols used by the problem catalog

use std::fmt;

/// Element symbol of an atom appearing in a catalog molecule.
///
/// The set is closed: it holds exactly the elements the catalog needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AtomSymbol {
    H,
    O,
    Ag,
    Na,
    C,
}

impl AtomSymbol {
    /// All symbols in declaration order.
    pub const ALL: [AtomSymbol; 5] = [
        AtomSymbol::H,
        AtomSymbol::O,
        AtomSymbol::Ag,
        AtomSymbol::Na,
        AtomSymbol::C,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            AtomSymbol::H => "H",
            AtomSymbol::O => "O",
            AtomSymbol::Ag => "Ag",
            AtomSymbol::Na => "Na",
            AtomSymbol::C => "C",
        }
    }
}

impl fmt::Display for AtomSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
