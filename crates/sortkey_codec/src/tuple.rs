//! Tuple codec: composite keys built from segment tokens.
//!
//! A key is every segment's token followed by [`SEPARATOR`], including the
//! last one. The trailing separator is what makes prefixes work: the key of
//! `(a, b)` is a literal prefix of the key of `(a, b, c)`, and since `#`
//! sorts below every payload byte, shorter tuples sort before their
//! extensions.

use sortkey_foundation::{Error, ErrorContext, Result, Segment, SegmentKind};
use tracing::{debug, trace};

use crate::integer::{decode_int, encode_f64, encode_int};
use crate::leading_tag;
use crate::text::{decode_text, encode_text, is_valid_text};
use crate::token::Key;

/// Terminates every token in a key.
pub const SEPARATOR: char = '#';

/// Encodes a single segment into its typed token.
///
/// # Errors
///
/// Returns an `InvalidValue` error if the segment is out of range or
/// contains invalid characters.
pub fn encode_segment(segment: &Segment) -> Result<String> {
    match segment {
        Segment::Int(n) => encode_int(*n).map(String::from),
        Segment::Text(s) => encode_text(s).map(String::from),
    }
}

/// Decodes a single token, dispatching on its tag.
///
/// # Errors
///
/// Returns an `InvalidFormat` error if the tag is missing or unknown, or
/// if an integer payload is malformed.
pub fn decode_segment(token: &str) -> Result<Segment> {
    match SegmentKind::from_token(token) {
        Some(kind) if kind.is_int() => decode_int(token).map(Segment::Int),
        Some(SegmentKind::Text) => decode_text(token).map(|s| Segment::Text(s.to_owned())),
        _ => Err(Error::invalid_format(leading_tag(token), &SegmentKind::ALL)),
    }
}

/// Encodes a tuple into a composite key.
///
/// # Errors
///
/// Returns the first segment error, with the offending index and value
/// attached as context.
pub fn encode(segments: &[Segment]) -> Result<Key> {
    let mut builder = KeyBuilder::new();
    for segment in segments {
        builder.push(segment)?;
    }
    let key = builder.build();
    trace!(segments = segments.len(), key = %key, "encoded key");
    Ok(key)
}

/// Decodes a composite key back into its segments.
///
/// Empty tokens (including the one after the trailing separator) are
/// skipped, so `""` decodes to the empty tuple.
///
/// # Errors
///
/// Returns an `InvalidFormat` error naming the offending index and raw token.
pub fn decode(key: &str) -> Result<Vec<Segment>> {
    key.split(SEPARATOR)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            decode_segment(token).map_err(|err| {
                debug!(index, token, error = %err, "rejected key segment");
                err.with_context(ErrorContext::new(index, token))
            })
        })
        .collect()
}

/// Checks a raw key against the full key grammar.
///
/// Stricter than [`decode`]: the key must be terminated, tokens must be
/// non-empty, and text payloads must use the segment alphabet.
pub(crate) fn validate_key(raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Ok(());
    }
    let Some(body) = raw.strip_suffix(SEPARATOR) else {
        return Err(Error::malformed_key(format!(
            "{raw:?} does not end with {SEPARATOR:?}"
        )));
    };

    for (index, token) in body.split(SEPARATOR).enumerate() {
        let context = || ErrorContext::new(index, token);
        if token.is_empty() {
            return Err(Error::malformed_key("empty token").with_context(context()));
        }
        let segment = decode_segment(token).map_err(|err| err.with_context(context()))?;
        if let Segment::Text(text) = segment {
            if !is_valid_text(&text) {
                return Err(Error::invalid_text(text).with_context(context()));
            }
        }
    }
    Ok(())
}

/// Builds a key one segment at a time.
///
/// ```
/// use sortkey_codec::KeyBuilder;
///
/// let mut builder = KeyBuilder::new();
/// builder.push_text("app")?.push_int(1)?;
/// assert_eq!(builder.build(), "[S]app#[P]0000000000000001#");
/// # Ok::<(), sortkey_codec::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyBuilder {
    buf: String,
    segments: usize,
}

impl KeyBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder continuing from an existing key.
    #[must_use]
    pub fn from_key(key: Key) -> Self {
        let segments = key.segment_count();
        Self {
            buf: key.into_string(),
            segments,
        }
    }

    /// Returns the number of segments pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments
    }

    /// Returns true if no segments have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments == 0
    }

    /// Appends a segment.
    ///
    /// # Errors
    ///
    /// Returns the segment's encode error with its index attached.
    pub fn push(&mut self, segment: &Segment) -> Result<&mut Self> {
        match segment {
            Segment::Int(n) => self.push_int(*n),
            Segment::Text(s) => self.push_text(s),
        }
    }

    /// Appends an integer segment.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidValue` error if `n` is outside the safe range.
    pub fn push_int(&mut self, n: i64) -> Result<&mut Self> {
        let token = encode_int(n).map_err(|err| self.reject(err, n.to_string()))?;
        Ok(self.append(token.as_str()))
    }

    /// Appends an integral floating-point segment.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidValue` error unless `n` is a safe integer.
    pub fn push_f64(&mut self, n: f64) -> Result<&mut Self> {
        let token = encode_f64(n).map_err(|err| self.reject(err, n.to_string()))?;
        Ok(self.append(token.as_str()))
    }

    /// Appends a text segment.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidValue` error if the text contains invalid characters.
    pub fn push_text(&mut self, text: &str) -> Result<&mut Self> {
        let token = encode_text(text).map_err(|err| self.reject(err, text))?;
        Ok(self.append(token.as_str()))
    }

    /// Appends a segment, consuming and returning the builder.
    ///
    /// # Errors
    ///
    /// Returns the segment's encode error with its index attached.
    pub fn with(mut self, segment: impl Into<Segment>) -> Result<Self> {
        self.push(&segment.into())?;
        Ok(self)
    }

    /// Finishes the key.
    #[must_use]
    pub fn build(self) -> Key {
        Key::new_unchecked(self.buf)
    }

    /// Attaches the position of the next segment to an error.
    pub(crate) fn reject(&self, err: Error, raw: impl Into<String>) -> Error {
        let context = ErrorContext::new(self.segments, raw);
        debug!(index = context.index, token = %context.token, error = %err, "rejected segment");
        err.with_context(context)
    }

    fn append(&mut self, token: &str) -> &mut Self {
        self.buf.push_str(token);
        self.buf.push(SEPARATOR);
        self.segments += 1;
        self
    }
}

/// Encodes a tuple written inline into a [`Key`].
///
/// Each argument is converted with `Into<Segment>`, so string slices,
/// `String`s and integers can be mixed freely.
///
/// ```
/// use sortkey_codec::key;
///
/// let key = key!("app", "uuid", "deployments", 1)?;
/// assert_eq!(key, "[S]app#[S]uuid#[S]deployments#[P]0000000000000001#");
/// # Ok::<(), sortkey_codec::Error>(())
/// ```
#[macro_export]
macro_rules! key {
    ($($segment:expr),* $(,)?) => {{
        let builder: $crate::Result<$crate::KeyBuilder> = Ok($crate::KeyBuilder::new());
        $(
            let builder = builder.and_then(|builder| builder.with($segment));
        )*
        builder.map($crate::KeyBuilder::build)
    }};
}
