//! Serialize Rust values directly into keys.
//!
//! [`to_key`] accepts anything implementing [`Serialize`] whose shape is a
//! flat tuple of text and integers: tuples, tuple structs, sequences, or a
//! single scalar (a one-segment key). A top-level `()` is the empty tuple
//! and encodes to the empty key, like an empty sequence. Strings and unit
//! enum variants become text segments; integers and integral floats become integer segments.
//! Every other shape is rejected with an `UnsupportedType` error naming the
//! offending position.
//!
//! ```
//! use sortkey_codec::to_key;
//!
//! #[derive(serde::Serialize)]
//! struct DeploymentId<'a>(&'a str, u32);
//!
//! let key = to_key(&DeploymentId("app", 7))?;
//! assert_eq!(key, "[S]app#[P]0000000000000007#");
//! # Ok::<(), sortkey_codec::Error>(())
//! ```

use serde::Serialize;
use serde::ser::{self, Impossible};
use sortkey_foundation::{Error, Result};

use crate::token::Key;
use crate::tuple::KeyBuilder;

/// Serializes a value into a composite key.
///
/// # Errors
///
/// Returns an `UnsupportedType` error for booleans, chars, bytes, options
/// holding nothing, maps, structs, data-carrying enum variants, nested
/// sequences and `()` inside a tuple, and the usual segment errors for out-of-range numbers or
/// invalid text.
pub fn to_key<T: Serialize + ?Sized>(value: &T) -> Result<Key> {
    let mut builder = KeyBuilder::new();
    value.serialize(KeySerializer {
        builder: &mut builder,
        nested: false,
    })?;
    Ok(builder.build())
}

/// Writes segments into a [`KeyBuilder`].
///
/// At the top level a sequence opens the tuple; inside it (`nested`) only
/// scalars are accepted.
struct KeySerializer<'a> {
    builder: &'a mut KeyBuilder,
    nested: bool,
}

impl KeySerializer<'_> {
    fn unsupported(&self, kind: &str) -> Error {
        self.builder.reject(Error::unsupported_type(kind), format!("<{kind}>"))
    }

    fn push_u64(self, v: u64) -> Result<()> {
        match i64::try_from(v) {
            Ok(n) => self.push_i64(n),
            Err(_) => Err(self.builder.reject(Error::unsafe_integer(v), v.to_string())),
        }
    }

    fn push_i64(self, v: i64) -> Result<()> {
        self.builder.push_int(v).map(|_| ())
    }
}

impl<'a> ser::Serializer for KeySerializer<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SegmentSeq<'a>;
    type SerializeTuple = SegmentSeq<'a>;
    type SerializeTupleStruct = SegmentSeq<'a>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Impossible<(), Error>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<()> {
        Err(self.unsupported("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.push_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.push_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.push_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.push_i64(v)
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        match i64::try_from(v) {
            Ok(n) => self.push_i64(n),
            Err(_) => Err(self.builder.reject(Error::unsafe_integer(v), v.to_string())),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.push_i64(i64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.push_i64(i64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.push_i64(i64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.push_u64(v)
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        match u64::try_from(v) {
            Ok(n) => self.push_u64(n),
            Err(_) => Err(self.builder.reject(Error::unsafe_integer(v), v.to_string())),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.builder.push_f64(v).map(|_| ())
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(self.unsupported("char"))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.builder.push_text(v).map(|_| ())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(self.unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<()> {
        Err(self.unsupported("none"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        if self.nested {
            return Err(self.unsupported("unit"));
        }
        Ok(())
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<()> {
        Err(self.unsupported(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(self.unsupported(&format!("{name}::{variant}")))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SegmentSeq<'a>> {
        if self.nested {
            return Err(self.unsupported("sequence"));
        }
        Ok(SegmentSeq {
            builder: self.builder,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SegmentSeq<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SegmentSeq<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.unsupported(&format!("{name}::{variant}")))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(self.unsupported("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(self.unsupported(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.unsupported(&format!("{name}::{variant}")))
    }
}

/// The elements of the top-level tuple.
struct SegmentSeq<'a> {
    builder: &'a mut KeyBuilder,
}

impl SegmentSeq<'_> {
    fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(KeySerializer {
            builder: &mut *self.builder,
            nested: true,
        })
    }
}

impl ser::SerializeSeq for SegmentSeq<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTuple for SegmentSeq<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for SegmentSeq<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
