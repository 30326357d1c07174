//! Validated string wrappers for encoded tokens and keys.
//!
//! Each wrapper can only be produced by this crate's encoders (or by
//! [`Key::parse`], which checks the full key grammar), so holding one is
//! proof that the string inside is well formed.

use std::borrow::Borrow;
use std::fmt;

use sortkey_foundation::{Result, Segment};

use crate::tuple::{self, SEPARATOR};

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub(crate) fn new_unchecked(raw: String) -> Self {
                Self(raw)
            }

            /// Returns the encoded string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the encoded string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }

            /// Returns the length of the encoded string in bytes.
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns true if the encoded string is empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_newtype! {
    /// An encoded integer segment: `[P]` or `[N]` followed by 16 digits.
    IntToken
}

string_newtype! {
    /// An encoded text segment: `[S]` followed by the text verbatim.
    TextToken
}

string_newtype! {
    /// A composite key: every token followed by `#`.
    ///
    /// Keys compare byte-wise in the same order as the tuples they encode.
    Key
}

impl Key {
    /// Returns the key of the empty tuple.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Validates a raw key string against the key grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not terminated by `#`, contains an
    /// empty token, or any token fails to decode or carries invalid text.
    pub fn parse(raw: &str) -> Result<Self> {
        tuple::validate_key(raw)?;
        Ok(Self(raw.to_owned()))
    }

    /// Decodes this key back into its segments.
    ///
    /// # Errors
    ///
    /// Keys built by this crate always decode; the error case exists for
    /// parity with [`tuple::decode`].
    pub fn decode(&self) -> Result<Vec<Segment>> {
        tuple::decode(&self.0)
    }

    /// Iterates over the tokens of this key, without separators.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_terminator(SEPARATOR)
    }

    /// Returns the number of segments in this key.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.0.matches(SEPARATOR).count()
    }

    /// Returns true if `prefix` is a literal prefix of this key.
    ///
    /// Because every token is terminated, this holds exactly when the
    /// prefix's tuple is a leading run of this key's tuple.
    #[must_use]
    pub fn starts_with(&self, prefix: &Key) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Returns the key of the tuple without its last segment.
    ///
    /// Returns `None` for the empty key.
    #[must_use]
    pub fn parent(&self) -> Option<Key> {
        let body = self.0.strip_suffix(SEPARATOR)?;
        let cut = body.rfind(SEPARATOR).map_or(0, |pos| pos + 1);
        Some(Self(self.0[..cut].to_owned()))
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<&str> for Key {
    type Error = sortkey_foundation::Error;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}
