//! Text segment codec.
//!
//! Text is tagged with `[S]` and otherwise written verbatim. The alphabet is
//! restricted to `[A-Za-z0-9_-][A-Za-z0-9_.-]*`: every allowed byte sorts
//! above the `#` separator and none can be mistaken for a tag, so byte order
//! of tokens equals byte order of the original strings.

use sortkey_foundation::{Error, Result, SegmentKind};

use crate::leading_tag;
use crate::token::TextToken;

fn is_leading_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Returns true if `text` may be used as a text segment.
///
/// A leading `.` is rejected.
#[must_use]
pub fn is_valid_text(text: &str) -> bool {
    match text.as_bytes().split_first() {
        Some((&first, rest)) => {
            is_leading_byte(first) && rest.iter().all(|&b| is_leading_byte(b) || b == b'.')
        }
        None => false,
    }
}

/// Encodes text as an order-preserving token.
///
/// # Errors
///
/// Returns an `InvalidValue` error if the text is empty or contains
/// characters outside the segment alphabet.
pub fn encode_text(text: &str) -> Result<TextToken> {
    if !is_valid_text(text) {
        return Err(Error::invalid_text(text));
    }
    let mut token = String::with_capacity(SegmentKind::TAG_LEN + text.len());
    token.push_str(SegmentKind::Text.tag());
    token.push_str(text);
    Ok(TextToken::new_unchecked(token))
}

/// Returns true if the token carries the text tag.
#[must_use]
pub fn is_text_token(token: &str) -> bool {
    SegmentKind::from_token(token) == Some(SegmentKind::Text)
}

/// Strips the text tag and returns the payload unchanged.
///
/// # Errors
///
/// Returns an `InvalidFormat` error if the token does not start with `[S]`.
pub fn decode_text(token: &str) -> Result<&str> {
    token
        .strip_prefix(SegmentKind::Text.tag())
        .ok_or_else(|| Error::invalid_format(leading_tag(token), &[SegmentKind::Text]))
}
