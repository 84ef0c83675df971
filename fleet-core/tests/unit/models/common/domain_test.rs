use super::*;

parameterized_test! {can_validate_interval, (start, end, expected), {
    can_validate_interval_impl(start, end, expected);
}}

can_validate_interval! {
    case01_valid: (0, 10, true),
    case02_empty: (10, 10, false),
    case03_reversed: (10, 0, false),
    case04_negative: (-10, -5, true),
}

fn can_validate_interval_impl(start: Timestamp, end: Timestamp, expected: bool) {
    let interval = TimeInterval::new(start, end);

    assert_eq!(interval.is_valid(), expected);
    assert_eq!(interval.validate().is_ok(), expected);
    assert_eq!(TimeInterval::try_new(start, end).is_ok(), expected);
}

#[test]
fn can_report_invalid_interval_bounds() {
    let result = TimeInterval::try_new(20, 10);

    assert_eq!(result, Err(ScheduleError::InvalidInterval { start: 20, end: 10 }));
}

parameterized_test! {can_check_intersection, (first, second, expected), {
    can_check_intersection_impl(first, second, expected);
}}

can_check_intersection! {
    case01_same: ((0, 10), (0, 10), true),
    case02_inside: ((0, 10), (2, 5), true),
    case03_partial_left: ((0, 10), (-5, 1), true),
    case04_partial_right: ((0, 10), (9, 20), true),
    case05_touch_end: ((0, 10), (10, 20), false),
    case06_touch_start: ((10, 20), (0, 10), false),
    case07_disjoint: ((0, 10), (15, 20), false),
}

fn can_check_intersection_impl(first: (Timestamp, Timestamp), second: (Timestamp, Timestamp), expected: bool) {
    let first = TimeInterval::new(first.0, first.1);
    let second = TimeInterval::new(second.0, second.1);

    assert_eq!(first.intersects(&second), expected);
}

#[test]
fn can_check_contains_with_exclusive_end() {
    let interval = TimeInterval::new(10, 20);

    assert!(!interval.contains(9));
    assert!(interval.contains(10));
    assert!(interval.contains(19));
    assert!(!interval.contains(20));
    assert_eq!(interval.duration(), 10);
}

#[test]
fn can_display_interval() {
    assert_eq!(TimeInterval::new(1, 2).to_string(), "[1, 2)");
}
