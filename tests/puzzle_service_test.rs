//! PuzzleService: evaluation, hints and the catalog audit

use eqbalance::application::services::PuzzleService;
use eqbalance::application::ApplicationError;
use eqbalance::domain::{AtomSymbol, DomainError, MoleculeInfo, ReactionProblem, CATALOG};
use eqbalance::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn service() -> PuzzleService {
    PuzzleService::new(&CATALOG)
}

#[test]
fn given_reference_answer_when_evaluating_then_balanced() {
    let evaluation = service().evaluate(2, &[2, 1, 1, 1]).unwrap();

    assert!(evaluation.balanced);
    assert_eq!(evaluation.rows.len(), 4);
    assert!(evaluation.rows.iter().all(|row| row.matched));
}

#[test]
fn given_wrong_answer_when_evaluating_then_rows_show_mismatch() {
    let evaluation = service().evaluate(1, &[1, 1, 1]).unwrap();

    assert!(!evaluation.balanced);
    let silver = evaluation
        .rows
        .iter()
        .find(|row| row.atom == AtomSymbol::Ag)
        .unwrap();
    assert_eq!((silver.left, silver.right), (2, 1));
    assert!(!silver.matched);
}

#[test]
fn given_wrong_length_when_evaluating_then_count_error() {
    let err = service().evaluate(0, &[2, 1]).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::CoefficientCount {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn given_fresh_water_state_when_hinting_then_first_differing_slot_is_suggested() {
    let service = service();
    let state = service.start(0).unwrap();

    let hint = service.hint(&state).unwrap();

    assert_eq!(hint.slot, 0);
    assert_eq!(hint.formula, "H₂");
    assert_eq!((hint.current, hint.suggested), (1, 2));
}

#[test]
fn given_partially_solved_state_when_hinting_then_skips_matching_slots() {
    let service = service();
    let state = service.start_with(1, Some(&[2, 1, 1])).unwrap();

    let hint = service.hint(&state).unwrap();

    assert_eq!(hint.slot, 1);
    assert_eq!(hint.formula, "Ag");
    assert_eq!(hint.suggested, 4);
}

#[test]
fn given_balanced_multiple_when_hinting_then_no_hint() {
    let service = service();
    let state = service.start_with(0, Some(&[4, 2, 4])).unwrap();

    assert!(service.hint(&state).is_none());
}

#[test]
fn given_builtin_catalog_when_auditing_then_every_problem_passes() {
    let entries = service().audit_catalog();

    assert_eq!(entries.len(), CATALOG.len());
    for entry in &entries {
        assert!(entry.is_ok(), "{entry:?}");
    }
}

static BROKEN: [ReactionProblem; 2] = [
    ReactionProblem {
        title: "wrong answer",
        left: &[MoleculeInfo {
            formula: "H₂",
            name: "水素",
            atoms: &[(AtomSymbol::H, 2)],
        }],
        right: &[MoleculeInfo {
            formula: "H",
            name: "水素原子",
            atoms: &[(AtomSymbol::H, 1)],
        }],
        reference_coefficients: &[1, 1],
    },
    ReactionProblem {
        title: "short answer",
        left: &[MoleculeInfo {
            formula: "O₂",
            name: "酸素",
            atoms: &[(AtomSymbol::O, 2)],
        }],
        right: &[MoleculeInfo {
            formula: "O",
            name: "酸素原子",
            atoms: &[(AtomSymbol::O, 1)],
        }],
        reference_coefficients: &[1],
    },
];

#[test]
fn given_broken_catalog_when_auditing_then_reports_each_defect() {
    let entries = PuzzleService::new(&BROKEN).audit_catalog();

    assert_eq!(entries[0].balanced, Some(false));
    assert!(!entries[0].is_ok());

    assert_eq!(entries[1].balanced, None);
    assert_eq!((entries[1].slot_count, entries[1].reference_len), (2, 1));
    assert!(!entries[1].is_ok());
}
