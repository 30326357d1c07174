//! Error types for the sortkey codecs.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::segment::SegmentKind;

/// The main error type for sortkey operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", context_suffix(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about which segment caused the error.
    pub context: Option<ErrorContext>,
}

#[allow(clippy::ref_option)]
fn context_suffix(context: &Option<ErrorContext>) -> String {
    context
        .as_ref()
        .map(|ctx| format!(" ({ctx})"))
        .unwrap_or_default()
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a number that is not a safe integer.
    #[must_use]
    pub fn unsafe_integer(value: impl fmt::Display) -> Self {
        Self::new(ErrorKind::InvalidValue(InvalidValue::UnsafeInteger(
            value.to_string(),
        )))
    }

    /// Creates an error for text containing characters outside the segment alphabet.
    #[must_use]
    pub fn invalid_text(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue(InvalidValue::InvalidText(
            text.into(),
        )))
    }

    /// Creates an error for a token whose tag is not one of `expected`.
    #[must_use]
    pub fn invalid_format(tag: impl Into<String>, expected: &[SegmentKind]) -> Self {
        Self::new(ErrorKind::InvalidFormat {
            tag: tag.into(),
            expected: expected.to_vec(),
        })
    }

    /// Creates an error for a tuple element that is neither text nor integer.
    #[must_use]
    pub fn unsupported_type(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedType { kind: kind.into() })
    }

    /// Creates an error for an integer token with a malformed payload.
    #[must_use]
    pub fn invalid_digits(payload: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDigits(payload.into()))
    }

    /// Creates an error for a key that does not follow the key grammar.
    #[must_use]
    pub fn malformed_key(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedKey(reason.into()))
    }

    /// Returns true if an input value could not be encoded.
    #[must_use]
    pub const fn is_invalid_value(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidValue(_))
    }

    /// Returns true if a token could not be decoded.
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidFormat { .. }
                | ErrorKind::InvalidDigits(_)
                | ErrorKind::MalformedKey(_)
        )
    }

    /// Returns true if a tuple element had an unsupported type.
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedType { .. })
    }

    /// Returns the position of the offending segment, if known.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.context.as_ref().map(|ctx| ctx.index)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A value cannot be represented as a segment.
    #[error("{0}")]
    InvalidValue(InvalidValue),

    /// A token carries an unrecognized or missing type tag.
    #[error("invalid segment tag {tag:?}, expected {}", expected_tags(.expected))]
    InvalidFormat {
        /// The leading characters of the token in place of a tag.
        tag: String,
        /// The tags that would have been accepted.
        expected: Vec<SegmentKind>,
    },

    /// An integer token payload is not a fixed-width safe integer.
    #[error("invalid integer payload {0:?}")]
    InvalidDigits(String),

    /// A key string breaks the key grammar outside any single token.
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// A tuple element is neither text nor an integer.
    #[error("only text or integer segments are supported, got {kind}")]
    UnsupportedType {
        /// Description of the observed kind.
        kind: String,
    },

    /// Free-form message raised through a serializer.
    #[error("{0}")]
    Message(String),
}

fn expected_tags(expected: &[SegmentKind]) -> String {
    expected
        .iter()
        .map(|kind| format!("{:?}", kind.tag()))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Reasons an input value was rejected at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// Non-integral, non-finite, or out-of-range number.
    UnsafeInteger(String),
    /// Text outside `[A-Za-z0-9_-][A-Za-z0-9_.-]*`.
    InvalidText(String),
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsafeInteger(value) => {
                write!(f, "only safe integer values may be encoded, got {value}")
            }
            Self::InvalidText(text) => {
                write!(f, "segment contains invalid characters: {text:?}")
            }
        }
    }
}

/// Identifies the segment of a tuple that caused an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Zero-based position of the segment within the tuple.
    pub index: usize,
    /// The raw token or value at that position.
    pub token: String,
}

impl ErrorContext {
    /// Creates a context for the segment at `index`.
    #[must_use]
    pub fn new(index: usize, token: impl Into<String>) -> Self {
        Self {
            index,
            token: token.into(),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segments[{}] = {}", self.index, self.token)
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::new(ErrorKind::Message(msg.to_string()))
    }
}
