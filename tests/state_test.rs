//! Puzzle state transitions

use rstest::rstest;

use eqbalance::application::{PuzzleState, Verdict};
use eqbalance::domain::{AtomSymbol, DomainError, MAX_COEFFICIENT, MIN_COEFFICIENT, CATALOG};
use eqbalance::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_new_state_when_created_then_all_coefficients_are_one() {
    let state = PuzzleState::new(&CATALOG, 2).unwrap();

    assert_eq!(state.coefficients().as_slice(), &[1, 1, 1, 1]);
    assert!(!state.is_solved());
}

#[test]
fn given_unknown_problem_when_created_then_not_found() {
    let err = PuzzleState::new(&CATALOG, 3).unwrap_err();

    assert_eq!(
        err,
        DomainError::ProblemNotFound {
            index: 3,
            available: 3
        }
    );
}

#[rstest]
#[case::floor(-1, MIN_COEFFICIENT)]
#[case::far_below(-20, MIN_COEFFICIENT)]
#[case::ceiling(20, MAX_COEFFICIENT)]
#[case::step(1, 2)]
fn given_delta_when_stepping_then_coefficient_is_clamped(
    #[case] delta: i32,
    #[case] expected: u32,
) {
    let state = PuzzleState::new(&CATALOG, 0).unwrap();

    let next = state.apply_delta(1, delta).unwrap();

    assert_eq!(next.coefficients().get(1), Some(expected));
    assert_eq!(next.coefficients().get(0), Some(1));
    // previous value untouched
    assert_eq!(state.coefficients().get(1), Some(1));
}

#[test]
fn given_nine_when_incrementing_then_stays_nine() {
    let state = PuzzleState::with_coefficients(&CATALOG, 0, &[9, 1, 1]).unwrap();

    let next = state.apply_delta(0, 1).unwrap();

    assert_eq!(next.coefficients().get(0), Some(9));
}

#[test]
fn given_out_of_range_slot_when_stepping_then_error() {
    let state = PuzzleState::new(&CATALOG, 0).unwrap();

    let err = state.apply_delta(3, 1).unwrap_err();

    assert_eq!(err, DomainError::SlotOutOfRange { slot: 3, slots: 3 });
}

#[test]
fn given_stepped_state_when_switching_problem_then_coefficients_reset() {
    let state = PuzzleState::new(&CATALOG, 0)
        .unwrap()
        .apply_delta(0, 1)
        .unwrap()
        .apply_delta(2, 1)
        .unwrap();

    let next = state.select_problem(2).unwrap();

    assert_eq!(next.problem_index(), 2);
    assert_eq!(next.coefficients().as_slice(), &[1, 1, 1, 1]);
    assert!(!next.is_solved());
}

#[test]
fn given_solved_state_when_switching_problem_then_success_and_coefficients_reset() {
    let (solved, verdict) = PuzzleState::with_coefficients(&CATALOG, 0, &[2, 1, 2])
        .unwrap()
        .check();
    assert_eq!(verdict, Verdict::Balanced);
    assert!(solved.is_solved());

    let next = solved.select_problem(1).unwrap();

    assert!(!next.is_solved());
    assert_eq!(next.problem_index(), 1);
    assert_eq!(next.coefficients().as_slice(), &[1, 1, 1]);
}

#[test]
fn given_balanced_coefficients_when_checking_then_solved_until_dismissed() {
    let state = PuzzleState::with_coefficients(&CATALOG, 0, &[2, 1, 2]).unwrap();

    let (solved, verdict) = state.check();
    assert_eq!(verdict, Verdict::Balanced);
    assert!(solved.is_solved());

    let dismissed = solved.dismiss_success();
    assert!(!dismissed.is_solved());
    assert_eq!(dismissed.coefficients().as_slice(), &[2, 1, 2]);
}

#[test]
fn given_unbalanced_coefficients_when_checking_then_reports_mismatches_only() {
    let state = PuzzleState::new(&CATALOG, 0).unwrap();

    let (next, verdict) = state.check();

    assert!(!next.is_solved());
    assert_eq!(next.coefficients().as_slice(), &[1, 1, 1]);
    match verdict {
        Verdict::Unbalanced { mismatched } => {
            assert_eq!(mismatched.len(), 1);
            assert_eq!(mismatched[0].atom, AtomSymbol::O);
        }
        Verdict::Balanced => panic!("water at all ones must not balance"),
    }
}

#[test]
fn given_solved_state_when_stepping_then_success_is_cleared() {
    let (solved, _) = PuzzleState::with_coefficients(&CATALOG, 0, &[2, 1, 2])
        .unwrap()
        .check();

    let next = solved.apply_delta(0, 1).unwrap();

    assert!(!next.is_solved());
    assert!(!next.tallies().is_balanced());
}

#[test]
fn given_invalid_coefficient_when_constructing_then_range_error() {
    let err = PuzzleState::with_coefficients(&CATALOG, 0, &[0, 1, 1]).unwrap_err();

    assert_eq!(
        err,
        DomainError::CoefficientRange {
            value: 0,
            min: MIN_COEFFICIENT,
            max: MAX_COEFFICIENT
        }
    );
}
