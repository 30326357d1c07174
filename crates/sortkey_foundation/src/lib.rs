//! Core types for sortkey.
//!
//! This crate provides:
//! - [`Segment`] - A single text or integer value within a tuple key
//! - [`SegmentKind`] - The type tags that order segments across kinds
//! - [`Error`] - Rich error types with segment context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod segment;

pub use error::{Error, ErrorContext, ErrorKind, InvalidValue};
pub use segment::{Segment, SegmentKind};

/// Result type alias using sortkey's Error type.
pub type Result<T> = std::result::Result<T, Error>;
