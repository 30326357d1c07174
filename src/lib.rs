//! Sortkey - Order-preserving string keys for tuples
//!
//! This crate re-exports all layers of the sortkey system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: sortkey_codec       — Integer/text segment codecs, tuple keys, prefix scans
//! Layer 0: sortkey_foundation  — Core types (Segment, SegmentKind, Error)
//! ```

pub use sortkey_codec as codec;
pub use sortkey_foundation as foundation;

pub use sortkey_codec::{Key, decode, encode, key, to_key};
pub use sortkey_foundation::{Error, Result, Segment};
