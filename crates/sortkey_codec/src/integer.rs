//! Integer segment codec.
//!
//! Integers are written as a tag plus a fixed-width decimal payload:
//!
//! - `n >= 0` becomes `[P]` followed by `n` zero-padded to [`INT_WIDTH`] digits.
//! - `n < 0` becomes `[N]` followed by `MAX_SAFE_INTEGER + n`, padded the same way.
//!
//! `[N]` sorts before `[P]`, fixed width makes digit strings compare like
//! numbers, and the complement maps more-negative inputs to smaller
//! payloads, so byte order of tokens equals numeric order of inputs.
//!
//! The safe range is `±(2^53 − 1)`, the largest integers an IEEE 754 double
//! holds exactly. Keeping this bound (rather than the full `i64` range)
//! keeps keys identical to ones written by clients that store numbers as
//! doubles.

use sortkey_foundation::{Error, Result, SegmentKind};

use crate::leading_tag;
use crate::token::IntToken;

/// Largest integer that can be encoded (`2^53 − 1`).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Smallest integer that can be encoded (`−(2^53 − 1)`).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Number of decimal digits in every integer payload.
pub const INT_WIDTH: usize = 16;

/// Tags accepted by [`decode_int`], in the order error messages list them.
const INT_KINDS: [SegmentKind; 2] = [SegmentKind::NonNegativeInt, SegmentKind::NegativeInt];

/// Returns true if `n` lies within the safe-integer range.
#[must_use]
pub const fn is_safe_integer(n: i64) -> bool {
    n >= MIN_SAFE_INTEGER && n <= MAX_SAFE_INTEGER
}

/// Encodes an integer as an order-preserving token.
///
/// # Errors
///
/// Returns an `InvalidValue` error if `n` is outside the safe-integer range.
pub fn encode_int(n: i64) -> Result<IntToken> {
    if !is_safe_integer(n) {
        return Err(Error::unsafe_integer(n));
    }

    let (kind, payload) = if n >= 0 {
        (SegmentKind::NonNegativeInt, n)
    } else {
        (SegmentKind::NegativeInt, MAX_SAFE_INTEGER + n)
    };

    Ok(IntToken::new_unchecked(format!(
        "{}{payload:0width$}",
        kind.tag(),
        width = INT_WIDTH
    )))
}

/// Encodes a floating-point number that holds an integral value.
///
/// `-0.0` is normalized to `0`.
///
/// # Errors
///
/// Returns an `InvalidValue` error for NaN, infinities, values with a
/// fractional part, and magnitudes outside the safe-integer range.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn encode_f64(n: f64) -> Result<IntToken> {
    if !n.is_finite() || n.fract() != 0.0 || n.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(Error::unsafe_integer(n));
    }
    encode_int(n as i64)
}

/// Returns true if the token carries one of the integer tags.
#[must_use]
pub fn is_int_token(token: &str) -> bool {
    SegmentKind::from_token(token).is_some_and(SegmentKind::is_int)
}

/// Decodes an integer token.
///
/// # Errors
///
/// Returns an `InvalidFormat` error naming the offending tag if the token
/// does not start with `[P]` or `[N]`, or an `InvalidDigits` error if the
/// payload is not exactly [`INT_WIDTH`] digits within the safe range. An
/// `[N]` payload of `MAX_SAFE_INTEGER` would decode to zero and is rejected.
pub fn decode_int(token: &str) -> Result<i64> {
    let kind = SegmentKind::from_token(token)
        .filter(|kind| kind.is_int())
        .ok_or_else(|| Error::invalid_format(leading_tag(token), &INT_KINDS))?;

    let digits = &token[SegmentKind::TAG_LEN..];
    let payload = parse_payload(digits)?;
    match kind {
        // Zero is only ever written as `[P]`.
        SegmentKind::NegativeInt if payload == MAX_SAFE_INTEGER => {
            Err(Error::invalid_digits(digits))
        }
        SegmentKind::NegativeInt => Ok(payload - MAX_SAFE_INTEGER),
        _ => Ok(payload),
    }
}

fn parse_payload(digits: &str) -> Result<i64> {
    if digits.len() != INT_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_digits(digits));
    }
    match digits.parse::<i64>() {
        Ok(value) if value <= MAX_SAFE_INTEGER => Ok(value),
        _ => Err(Error::invalid_digits(digits)),
    }
}
