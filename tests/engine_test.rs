//! Balance engine over the built-in catalog

use rstest::rstest;

use eqbalance::domain::{compute_tally, diff, is_balanced, AtomSymbol, Side, Tallies, CATALOG};
use eqbalance::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case::water(0, &[2, 1, 2])]
#[case::silver_oxide(1, &[2, 4, 1])]
#[case::sodium_bicarbonate(2, &[2, 1, 1, 1])]
fn given_reference_answer_when_tallying_then_sides_balance(
    #[case] index: usize,
    #[case] coefficients: &[u32],
) {
    let tallies = Tallies::compute(&CATALOG[index], coefficients);

    assert!(tallies.is_balanced());
    assert!(tallies.diff().iter().all(|row| row.matched));
}

#[rstest]
#[case::water_doubled(0, &[4, 2, 4])]
#[case::silver_oxide_doubled(1, &[4, 8, 2])]
fn given_multiple_of_answer_when_tallying_then_still_balanced(
    #[case] index: usize,
    #[case] coefficients: &[u32],
) {
    assert!(Tallies::compute(&CATALOG[index], coefficients).is_balanced());
}

#[test]
fn given_water_at_all_ones_when_diffing_then_only_oxygen_mismatches() {
    let water = &CATALOG[0];
    let tallies = Tallies::compute(water, &[1, 1, 1]);

    assert!(!tallies.is_balanced());
    let rows = tallies.diff();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].atom, AtomSymbol::H);
    assert_eq!((rows[0].left, rows[0].right), (2, 2));
    assert!(rows[0].matched);

    assert_eq!(rows[1].atom, AtomSymbol::O);
    assert_eq!((rows[1].left, rows[1].right), (2, 1));
    assert!(!rows[1].matched);
}

#[test]
fn given_silver_oxide_answer_when_tallying_then_counts_match_expected() {
    let problem = &CATALOG[1];
    let tallies = Tallies::compute(problem, &[2, 4, 1]);

    assert_eq!(tallies.side(Side::Left).get(AtomSymbol::Ag), 4);
    assert_eq!(tallies.side(Side::Left).get(AtomSymbol::O), 2);
    assert_eq!(tallies.side(Side::Right).get(AtomSymbol::Ag), 4);
    assert_eq!(tallies.side(Side::Right).get(AtomSymbol::O), 2);
}

#[test]
fn given_right_side_offset_when_tallying_then_reads_trailing_coefficients() {
    let problem = &CATALOG[2];
    let coefficients = [2, 1, 1, 1];

    let right = compute_tally(problem.right, &coefficients, problem.side_offset(Side::Right));

    assert_eq!(right.get(AtomSymbol::Na), 2);
    assert_eq!(right.get(AtomSymbol::H), 2);
    assert_eq!(right.get(AtomSymbol::C), 2);
    assert_eq!(right.get(AtomSymbol::O), 6);
}

#[test]
fn given_any_assignment_when_comparing_then_balance_is_symmetric() {
    for (index, problem) in CATALOG.iter().enumerate() {
        for value in 1..=3 {
            let coefficients = vec![value; problem.slot_count()];
            let left = compute_tally(problem.left, &coefficients, 0);
            let right = compute_tally(problem.right, &coefficients, problem.left.len());

            assert_eq!(
                is_balanced(&left, &right),
                is_balanced(&right, &left),
                "problem {index} at {value}"
            );
            assert_eq!(diff(&left, &right).len(), diff(&right, &left).len());
        }
    }
}
