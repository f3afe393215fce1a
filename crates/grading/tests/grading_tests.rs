use grading::*;
use plane_types::{points_from_pairs, Point};
use proptest::prelude::*;

fn pts(pairs: &[[f64; 2]]) -> Vec<Point> {
    points_from_pairs(pairs)
}

// ── Validator ────────────────────────────────────────────────────────────

#[test]
fn same_set_different_order_is_correct() {
    let verdict = validate_submission(&pts(&[[0.0, 0.0], [1.0, 1.0]]), &pts(&[[1.0, 1.0], [0.0, 0.0]]));
    assert!(verdict.correct);
    assert_eq!(verdict.message, "Correct! The transformation is accurate.");
}

#[test]
fn wrong_count_cites_required_number() {
    let expected = pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    let verdict = validate_submission(&expected, &pts(&[[0.0, 0.0], [1.0, 1.0]]));
    assert!(!verdict.correct);
    assert!(verdict.message.contains('3'), "message was {:?}", verdict.message);
}

#[test]
fn mismatched_point_is_incorrect() {
    let verdict = validate_submission(&pts(&[[0.0, 0.0], [1.0, 1.0]]), &pts(&[[0.0, 0.0], [1.0, 2.0]]));
    assert_eq!(verdict, Verdict::incorrect());
}

#[test]
fn duplicates_must_be_matched_individually() {
    let expected = pts(&[[1.0, 1.0], [1.0, 1.0]]);
    assert!(validate_submission(&expected, &pts(&[[1.0, 1.0], [1.0, 1.0]])).correct);
    assert!(!validate_submission(&expected, &pts(&[[1.0, 1.0], [2.0, 2.0]])).correct);
}

#[test]
fn empty_submission_for_empty_answer_is_correct() {
    assert!(validate_submission(&[], &[]).correct);
}

#[test]
fn negative_zero_matches_zero() {
    assert!(validate_submission(&[Point::new(-0.0, 2.0)], &[Point::new(0.0, 2.0)]).correct);
}

#[test]
fn verdict_serializes_flat() {
    let json = serde_json::to_value(Verdict::wrong_count(5)).unwrap();
    assert_eq!(json["correct"], false);
    assert_eq!(json["message"], "You must plot exactly 5 points.");
}

// ── Orderer ──────────────────────────────────────────────────────────────

#[test]
fn orderer_aligns_with_expected_sequence() {
    let expected = pts(&[[-2.0, -1.0], [0.0, -3.0], [2.0, -1.0]]);
    let student = pts(&[[2.0, -1.0], [-2.0, -1.0], [0.0, -3.0]]);
    assert_eq!(order_student_points(&expected, &student), expected);
}

#[test]
fn orderer_uses_nearest_when_not_exact() {
    let expected = pts(&[[0.0, 0.0], [10.0, 0.0]]);
    let student = pts(&[[9.0, 1.0], [1.0, 0.0]]);
    assert_eq!(
        order_student_points(&expected, &student),
        pts(&[[1.0, 0.0], [9.0, 1.0]])
    );
}

#[test]
fn orderer_breaks_ties_by_scan_order() {
    let expected = pts(&[[0.0, 0.0]]);
    let student = pts(&[[1.0, 0.0], [-1.0, 0.0]]);
    assert_eq!(order_student_points(&expected, &student), student);
}

#[test]
fn excess_points_keep_relative_order() {
    let expected = pts(&[[5.0, 5.0]]);
    let student = pts(&[[0.0, 1.0], [5.0, 5.0], [0.0, 2.0], [0.0, 3.0]]);
    assert_eq!(
        order_student_points(&expected, &student),
        pts(&[[5.0, 5.0], [0.0, 1.0], [0.0, 2.0], [0.0, 3.0]])
    );
}

#[test]
fn fewer_student_points_than_expected() {
    let expected = pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    let student = pts(&[[2.0, 2.0]]);
    assert_eq!(order_student_points(&expected, &student), student);
}

fn arb_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-6i32..6, -6i32..6), 0..7)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(f64::from(x), f64::from(y))).collect())
}

fn sort_key(points: &[Point]) -> Vec<(i64, i64)> {
    let mut keys: Vec<(i64, i64)> = points.iter().map(|p| (p.x as i64, p.y as i64)).collect();
    keys.sort();
    keys
}

proptest! {
    #[test]
    fn orderer_output_is_a_permutation(expected in arb_points(), student in arb_points()) {
        let ordered = order_student_points(&expected, &student);
        prop_assert_eq!(sort_key(&ordered), sort_key(&student));
    }

    #[test]
    fn ordering_never_changes_the_verdict(expected in arb_points(), student in arb_points()) {
        let ordered = order_student_points(&expected, &student);
        prop_assert_eq!(
            validate_submission(&expected, &ordered),
            validate_submission(&expected, &student)
        );
    }

    #[test]
    fn any_permutation_of_the_answer_is_correct(expected in arb_points(), seed in any::<u64>()) {
        let mut shuffled = expected.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
        }
        prop_assert!(validate_submission(&expected, &shuffled).correct);
    }
}
