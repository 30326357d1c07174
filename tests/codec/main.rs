//! Integration tests for Layer 1: Codec
//!
//! Tests for segment codecs, tuple keys, ordering, serialization, and prefix scans.

mod integers;
mod scans;
mod text;
mod tuples;
