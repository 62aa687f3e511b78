use calculator::*;

// ═══════════════════════════════════════════════════════════════════════
// add
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_add() {
    assert_eq!(add(&[2.0, 2.0]), 4.0);
    assert_eq!(add(&[1.0, 1.0, 1.0]), 3.0);
    assert_eq!(add(&[5.0, 0.0, 0.0, 0.0]), 5.0);
}

#[test]
fn test_add_empty_is_zero() {
    assert_eq!(add(&[]), 0.0);
}

#[test]
fn test_add_commutative() {
    let samples = [(0.1, 0.2), (-3.5, 1e10), (7.0, -7.0), (1e-300, 2.5)];
    for (a, b) in samples {
        assert_eq!(add(&[a, b]), add(&[b, a]));
    }
}

#[test]
fn test_add_associative_within_tolerance() {
    let (a, b, c) = (0.1, 0.2, 0.3);
    let grouped_left = add(&[add(&[a, b]), c]);
    let grouped_right = add(&[a, add(&[b, c])]);
    assert!((grouped_left - grouped_right).abs() < 1e-12);
    assert!((add(&[a, b, c]) - grouped_left).abs() < 1e-12);
}

#[test]
fn test_add_matches_operator_plus() {
    let mut x = 0.123_f64;
    for _ in 0..100 {
        x = (x * 9301.0 + 49297.0) % 233280.0 / 233280.0;
        let y = 1.0 - x / 3.0;
        assert_eq!(add(&[x, y]), x + y);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// subtract
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_subtract() {
    assert_eq!(subtract(&[2.0, 1.0]), 1.0);
    assert_eq!(subtract(&[6.0, -2.0]), 8.0);
    assert_eq!(subtract(&[12.0, -1.0, 1.0, 0.0]), 12.0);
    assert_eq!(subtract(&[12.0, 0.25, 0.25]), 11.5);
}

#[test]
fn test_subtract_degenerate() {
    assert_eq!(subtract(&[]), 0.0);
    assert_eq!(subtract(&[-4.25]), -4.25);
}

// ═══════════════════════════════════════════════════════════════════════
// multiply
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_multiply() {
    assert_eq!(multiply(&[2.0, 1.0]), 2.0);
    assert_eq!(multiply(&[2.0, 6.0, -1.0]), -12.0);
    assert_eq!(multiply(&[12.0, 0.5, 1.0, 1.0]), 6.0);
}

#[test]
fn test_multiply_by_zero() {
    assert_eq!(multiply(&[12.0, 0.0]), 0.0);
    assert_eq!(multiply(&[0.0, 3.0, -8.0]), 0.0);
}

#[test]
fn test_multiply_empty_is_one() {
    assert_eq!(multiply(&[]), 1.0);
}

// ═══════════════════════════════════════════════════════════════════════
// divide
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_divide_chain() {
    assert_eq!(divide(&[8.0, 4.0, 2.0, 1.0]), Ok(1.0));
}

#[test]
fn test_divide_by_zero_anywhere_after_first() {
    assert!(matches!(
        divide(&[1.0, 0.0, 1.0]),
        Err(CalcError::DivisionByZero { .. })
    ));
    assert!(matches!(
        divide(&[1.0, 1.0, 0.0]),
        Err(CalcError::DivisionByZero { .. })
    ));
}

#[test]
fn test_divide_by_zero_reports_inputs() {
    assert_eq!(
        divide(&[3.0, 2.0, 0.0]),
        Err(CalcError::DivisionByZero {
            inputs: vec![3.0, 2.0, 0.0]
        })
    );
}

#[test]
fn test_divide_degenerate() {
    assert_eq!(divide(&[]), Ok(1.0));
    assert_eq!(divide(&[4.0]), Ok(4.0));
    assert_eq!(divide(&[0.0]), Ok(0.0));
}

// ═══════════════════════════════════════════════════════════════════════
// sqrt
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sqrt() {
    assert_eq!(sqrt(4.0), Ok(2.0));
    assert_eq!(sqrt(0.25), Ok(0.5));
    assert_eq!(sqrt(2.0), Ok(2.0_f64.sqrt()));
}

#[test]
fn test_sqrt_rejects_non_positive() {
    for x in [0.0, -0.0, -1.0, -1e-300, f64::NEG_INFINITY] {
        assert!(
            matches!(sqrt(x), Err(CalcError::InvalidArgument { .. })),
            "sqrt({x}) should fail"
        );
    }
}
