//! Order-preserving codecs for tuple keys.
//!
//! A tuple of text and integer segments is encoded into a single string
//! whose byte order matches the tuple order, and whose prefixes are the
//! keys of the tuple's leading runs:
//!
//! ```
//! use sortkey_codec::{decode, key, Segment};
//!
//! let key = key!("app", "uuid", "deployments", 1, "events", 10_000_000)?;
//! assert_eq!(
//!     key,
//!     "[S]app#[S]uuid#[S]deployments#[P]0000000000000001#[S]events#[P]0000000010000000#"
//! );
//! assert!(key.starts_with(&key!("app", "uuid", "deployments", 1)?));
//! assert_eq!(decode(key.as_str())?[3], Segment::Int(1));
//! # Ok::<(), sortkey_codec::Error>(())
//! ```
//!
//! This crate provides:
//! - [`integer`] - Fixed-width integer tokens (`[N]`/`[P]`)
//! - [`text`] - Restricted-alphabet text tokens (`[S]`)
//! - [`tuple`] - Composite keys, [`KeyBuilder`] and the [`key!`] macro
//! - [`ser`] - Serializing Rust values straight into keys
//! - [`scan`] - Prefix ranges for sorted stores

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod scan;
pub mod ser;
pub mod text;
pub mod token;
pub mod tuple;

pub use integer::{
    INT_WIDTH, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, decode_int, encode_f64, encode_int,
    is_int_token, is_safe_integer,
};
pub use scan::{KeyRange, filter_prefixed, is_descendant, prefix_range};
pub use ser::to_key;
pub use sortkey_foundation::{Error, ErrorContext, ErrorKind, Result, Segment, SegmentKind};
pub use text::{decode_text, encode_text, is_text_token, is_valid_text};
pub use token::{IntToken, Key, TextToken};
pub use tuple::{KeyBuilder, SEPARATOR, decode, decode_segment, encode, encode_segment};

/// Returns the tag-sized head of a token for error messages.
///
/// Falls back to the whole token when it is shorter than a tag.
pub(crate) fn leading_tag(token: &str) -> &str {
    token.get(..SegmentKind::TAG_LEN).unwrap_or(token)
}
