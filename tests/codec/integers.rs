//! Integration tests for the integer segment codec

use sortkey_codec::{
    INT_WIDTH, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, decode_int, encode_f64, encode_int,
};

// =============================================================================
// Boundary Values
// =============================================================================

#[test]
fn zero_is_all_zero_digits() {
    let expected = format!("[P]{}", "0".repeat(INT_WIDTH));
    assert_eq!(encode_int(0).unwrap(), expected.as_str());
}

#[test]
fn max_safe_round_trips() {
    let token = encode_int(MAX_SAFE_INTEGER).unwrap();
    assert_eq!(decode_int(token.as_str()).unwrap(), MAX_SAFE_INTEGER);
}

#[test]
fn min_safe_round_trips() {
    let token = encode_int(MIN_SAFE_INTEGER).unwrap();
    assert_eq!(decode_int(token.as_str()).unwrap(), MIN_SAFE_INTEGER);
}

#[test]
fn negative_zero_encodes_as_zero() {
    assert_eq!(encode_f64(-0.0).unwrap(), encode_int(0).unwrap());
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn rejects_non_integers_and_non_finite() {
    for n in [1.1, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, -f64::MAX] {
        assert!(encode_f64(n).unwrap_err().is_invalid_value(), "{n}");
    }
}

#[test]
fn rejects_magnitudes_beyond_safe_range() {
    assert!(encode_int(MAX_SAFE_INTEGER + 1).is_err());
    assert!(encode_int(MIN_SAFE_INTEGER - 1).is_err());
}

#[test]
fn decode_names_offending_tag() {
    let err = decode_int("[S]test").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("[S]"));
    assert!(msg.contains("[P]"));
    assert!(msg.contains("[N]"));
}
