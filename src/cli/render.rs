//! Terminal rendering of the puzzle board
//!
//! All functions return strings; the caller decides where they go.
//! Coloring goes through `colored`, so NO_COLOR and the `color` setting apply.

use colored::{Color, ColoredString, Colorize};
use itertools::Itertools;

use crate::application::PuzzleState;
use crate::config::Settings;
use crate::domain::{AtomBalance, AtomSymbol, MoleculeInfo, ReactionProblem, Side};

pub const APP_TITLE: &str = "化学反応式パズル";
pub const APP_SUBTITLE: &str = "左右の原子の数を一致させよう！";
pub const LEFT_HEADING: &str = "反応前（左辺）";
pub const RIGHT_HEADING: &str = "反応後（右辺）";
pub const SUCCESS_TITLE: &str = "正解！！";
pub const SUCCESS_MESSAGE: &str = "化学反応式が完成したね！";
pub const SUCCESS_RETRY: &str = "もう一度やる";
pub const FAILURE_NOTICE: &str = "左右の原子の数が一致していません。もう一度考えてみよう！";

/// Glyph colors for one atom symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomStyle {
    pub label: &'static str,
    pub fg: Color,
    pub bg: Color,
}

const ORANGE: Color = Color::TrueColor {
    r: 251,
    g: 146,
    b: 60,
};
const GREY: Color = Color::TrueColor {
    r: 156,
    g: 163,
    b: 175,
};
const CHARCOAL: Color = Color::TrueColor {
    r: 31,
    g: 41,
    b: 55,
};

/// Style lookup over the closed set of atom symbols.
pub const fn atom_style(atom: AtomSymbol) -> AtomStyle {
    match atom {
        AtomSymbol::H => AtomStyle {
            label: "H",
            fg: Color::Black,
            bg: Color::BrightWhite,
        },
        AtomSymbol::O => AtomStyle {
            label: "O",
            fg: Color::BrightWhite,
            bg: Color::Red,
        },
        AtomSymbol::Ag => AtomStyle {
            label: "Ag",
            fg: Color::BrightWhite,
            bg: GREY,
        },
        AtomSymbol::Na => AtomStyle {
            label: "Na",
            fg: Color::BrightWhite,
            bg: ORANGE,
        },
        AtomSymbol::C => AtomStyle {
            label: "C",
            fg: Color::BrightWhite,
            bg: CHARCOAL,
        },
    }
}

/// One atom occurrence, e.g. `(O)`.
pub fn atom_glyph(atom: AtomSymbol) -> ColoredString {
    let style = atom_style(atom);
    format!("({})", style.label).color(style.fg).on_color(style.bg).bold()
}

/// `coefficient` copies of the molecule, each a bracketed cluster of atom
/// glyphs captioned with the formula. A coefficient of 0 draws nothing.
pub fn render_molecule(info: &MoleculeInfo, coefficient: u32) -> String {
    let cluster = format!(
        "[{} {}]",
        info.atom_glyphs().into_iter().map(atom_glyph).join(""),
        info.formula.blue()
    );
    std::iter::repeat(cluster)
        .take(coefficient as usize)
        .join(" ")
}

/// Visual clusters for one side, one line per visible molecule.
pub fn render_side(problem: &ReactionProblem, coefficients: &[u32], side: Side) -> String {
    let heading = match side {
        Side::Left => LEFT_HEADING.on_blue(),
        Side::Right => RIGHT_HEADING.on_red(),
    };
    let offset = problem.side_offset(side);
    let lines = problem
        .side(side)
        .iter()
        .enumerate()
        .filter_map(|(index, molecule)| {
            let coefficient = coefficients.get(offset + index).copied().unwrap_or(0);
            (coefficient > 0).then(|| {
                format!(
                    "  {:<8} {}",
                    molecule.name.dimmed(),
                    render_molecule(molecule, coefficient)
                )
            })
        })
        .join("\n");
    format!("{}\n{}", heading.bold(), lines)
}

/// Equation with stepper slots: `[1] 2 H₂ + [2] 1 O₂  →  [3] 2 H₂O`.
pub fn render_equation(problem: &ReactionProblem, coefficients: &[u32]) -> String {
    let terms = |side: Side| {
        let offset = problem.side_offset(side);
        problem
            .side(side)
            .iter()
            .enumerate()
            .map(|(index, molecule)| {
                let slot = offset + index;
                let coefficient = coefficients.get(slot).copied().unwrap_or(0);
                format!(
                    "{} {} {}",
                    format!("[{}]", slot + 1).dimmed(),
                    coefficient.to_string().blue().bold(),
                    molecule.formula.bold()
                )
            })
            .join(&format!(" {} ", "+".dimmed()))
    };
    format!(
        "{}  {}  {}",
        terms(Side::Left),
        "→".cyan().bold(),
        terms(Side::Right)
    )
}

/// One badge per atom: `H: 左 4 → 右 4 ✓` in green, or red with ✗.
pub fn render_diagnostics(rows: &[AtomBalance]) -> String {
    rows.iter()
        .map(|row| {
            let text = format!("{}: 左 {} → 右 {}", row.atom, row.left, row.right);
            if row.matched {
                format!("{} {}", text.green(), "✓".green().bold())
            } else {
                format!("{} {}", text.red(), "✗".red().bold())
            }
        })
        .join("   ")
}

/// Problem selector row; the active problem is highlighted.
pub fn render_selector(problems: &[ReactionProblem], active: usize) -> String {
    problems
        .iter()
        .enumerate()
        .map(|(index, problem)| {
            let label = format!("{} {}", index + 1, problem.title);
            if index == active {
                format!("▶ {}", label).on_blue().bold().to_string()
            } else {
                format!("  {}", label).blue().to_string()
            }
        })
        .join("  ")
}

/// Full board for the current state.
pub fn render_board(state: &PuzzleState<'_>, settings: &Settings) -> String {
    let problem = state.problem();
    let coefficients = state.coefficients().as_slice();

    let mut sections = vec![
        format!("━━ {} ━━", APP_TITLE).cyan().bold().to_string(),
        APP_SUBTITLE.dimmed().to_string(),
        render_selector(state.catalog(), state.problem_index()),
    ];
    if settings.show_atoms {
        sections.push(render_side(problem, coefficients, Side::Left));
        sections.push(render_side(problem, coefficients, Side::Right));
    }
    sections.push(render_equation(problem, coefficients));
    if settings.live_diagnostics {
        sections.push(render_diagnostics(&state.tallies().diff()));
    }
    sections.join("\n\n")
}

/// Success takeover shown instead of the board.
pub fn render_success() -> String {
    let rule = "━".repeat(32);
    [
        rule.green().to_string(),
        format!("  \\(^o^)/  {}", SUCCESS_TITLE).green().bold().to_string(),
        format!("  {}", SUCCESS_MESSAGE).green().to_string(),
        format!("  [Enter] {}", SUCCESS_RETRY).on_green().bold().to_string(),
        rule.green().to_string(),
    ]
    .join("\n")
}

/// Blocking notice shown after a failed check.
pub fn render_failure_notice(mismatched: &[AtomBalance]) -> String {
    format!(
        "{} {}\n{}\n{}",
        "✗".red().bold(),
        FAILURE_NOTICE.red().bold(),
        render_diagnostics(mismatched),
        "[Enter] OK".dimmed()
    )
}
