//! Prefix scans over sorted keys.
//!
//! The key of a partial tuple is a literal prefix of the key of every tuple
//! that extends it, so a hierarchical query is a byte range in any sorted
//! store. [`KeyRange`] is that range; it implements [`RangeBounds<str>`] and
//! can be handed straight to `BTreeMap::range`.

use std::ops::{Bound, RangeBounds};

use crate::token::Key;
use crate::tuple::SEPARATOR;

/// The byte that follows [`SEPARATOR`].
const SEPARATOR_SUCCESSOR: char = '$';

/// Half-open range `[start, end)` covering every key under a prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRange {
    start: String,
    end: Option<String>,
}

impl KeyRange {
    /// Returns the inclusive lower bound (the prefix itself).
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the exclusive upper bound, or `None` when unbounded.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Returns true if `key` lies inside the range.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        key >= self.start.as_str() && self.end.as_deref().is_none_or(|end| key < end)
    }
}

impl RangeBounds<str> for KeyRange {
    fn start_bound(&self) -> Bound<&str> {
        Bound::Included(self.start.as_str())
    }

    fn end_bound(&self) -> Bound<&str> {
        match &self.end {
            Some(end) => Bound::Excluded(end.as_str()),
            None => Bound::Unbounded,
        }
    }
}

/// Returns the range of keys that start with `prefix`.
///
/// The upper bound swaps the prefix's final `#` for `$`, the next byte. The
/// empty prefix covers every key and has no upper bound.
#[must_use]
pub fn prefix_range(prefix: &Key) -> KeyRange {
    let start = prefix.as_str().to_owned();
    let end = prefix.as_str().strip_suffix(SEPARATOR).map(|body| {
        let mut end = String::with_capacity(prefix.len());
        end.push_str(body);
        end.push(SEPARATOR_SUCCESSOR);
        end
    });
    KeyRange { start, end }
}

/// Keeps the keys that start with `prefix`, preserving input order.
pub fn filter_prefixed<'a, I>(keys: I, prefix: &'a Key) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    keys.into_iter()
        .filter(move |key| key.starts_with(prefix.as_str()))
}

/// Returns true if `key` extends `prefix` by at least one segment.
#[must_use]
pub fn is_descendant(key: &str, prefix: &Key) -> bool {
    key.len() > prefix.len() && key.starts_with(prefix.as_str())
}
