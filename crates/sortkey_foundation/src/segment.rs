//! Segment values and their type tags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One value within a tuple key.
///
/// The derived ordering is the natural tuple-element order: every integer
/// sorts before every text segment, integers compare numerically and text
/// compares byte-wise. Comparing two `Vec<Segment>` therefore gives the
/// tuple order that encoded keys reproduce.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Segment {
    /// Signed integer within the safe-integer range.
    Int(i64),
    /// Text restricted to `[A-Za-z0-9_-][A-Za-z0-9_.-]*`.
    Text(String),
}

impl Segment {
    /// Returns the type tag this segment encodes with.
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        match self {
            Self::Int(n) if *n < 0 => SegmentKind::NegativeInt,
            Self::Int(_) => SegmentKind::NonNegativeInt,
            Self::Text(_) => SegmentKind::Text,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Attempts to extract a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// `i64` is the only integer conversion so that unsuffixed literals infer as
// `i64` and can span the whole safe range.
impl From<i64> for Segment {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// The type tag at the front of every encoded token.
///
/// Variants are declared in the byte order of their tags
/// (`[N]` < `[P]` < `[S]`), so the derived `Ord` agrees with how the
/// tags compare inside a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    /// Integer below zero, tagged `[N]`.
    NegativeInt,
    /// Integer at or above zero, tagged `[P]`.
    NonNegativeInt,
    /// Text, tagged `[S]`.
    Text,
}

impl SegmentKind {
    /// Every kind, in tag order.
    pub const ALL: [Self; 3] = [Self::NegativeInt, Self::NonNegativeInt, Self::Text];

    /// Length in bytes of every tag.
    pub const TAG_LEN: usize = 3;

    /// Returns the three-character tag for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::NegativeInt => "[N]",
            Self::NonNegativeInt => "[P]",
            Self::Text => "[S]",
        }
    }

    /// Reads the tag at the front of a raw token.
    ///
    /// Returns `None` if the token is shorter than a tag or the tag is unknown.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.get(..Self::TAG_LEN)? {
            "[N]" => Some(Self::NegativeInt),
            "[P]" => Some(Self::NonNegativeInt),
            "[S]" => Some(Self::Text),
            _ => None,
        }
    }

    /// Returns true for the two integer tags.
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::NegativeInt | Self::NonNegativeInt)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
