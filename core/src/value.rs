//! This module includes the in-memory representation of a data element's value.
//!
//! Primitive values are kept as raw bytes.
//! Multi-byte binary values are held in little endian,
//! regardless of the byte order of the transfer syntax they were read from,
//! so that the same content always compares equal in memory.

use crate::header::{EmptyObject, HasLength, Length};
use smallvec::SmallVec;
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// Type alias for the in-memory pixel data fragment data.
pub type InMemFragment = Vec<u8>;

/// An error type for an attempt of accessing a value
/// in an incompatible format.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConvertValueError {
    /// The value is a sequence or a pixel sequence,
    /// and cannot be seen as primitive data.
    #[snafu(display("value is not primitive"))]
    NotPrimitive { backtrace: Backtrace },
    /// The value is too short for the requested type.
    #[snafu(display("value has {} bytes, {} required", got, required))]
    NotEnoughBytes {
        required: usize,
        got: usize,
        backtrace: Backtrace,
    },
}

/// The raw bytes of a primitive DICOM value.
///
/// Values read from a data set keep every byte covered by the element length,
/// including the trailing padding byte of odd-sized content.
/// The textual accessors strip that padding.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PrimitiveValue(Vec<u8>);

impl PrimitiveValue {
    /// Create an empty value.
    #[inline]
    pub fn empty() -> Self {
        PrimitiveValue(Vec::new())
    }

    /// Create a value from its raw bytes.
    #[inline]
    pub fn new(bytes: Vec<u8>) -> Self {
        PrimitiveValue(bytes)
    }

    /// Create a value from a sequence of unsigned 16-bit integers.
    pub fn from_u16s(values: &[u16]) -> Self {
        PrimitiveValue(values.iter().flat_map(|v| v.to_le_bytes()).collect())
    }

    /// Create a value from a sequence of unsigned 32-bit integers.
    pub fn from_u32s(values: &[u32]) -> Self {
        PrimitiveValue(values.iter().flat_map(|v| v.to_le_bytes()).collect())
    }

    /// Create a multi-valued text value,
    /// joining the given strings with the backslash delimiter.
    pub fn from_strs<S: AsRef<str>>(values: &[S]) -> Self {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\\");
        PrimitiveValue(joined.into_bytes())
    }

    /// Obtain the raw bytes of the value.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the raw bytes of the value.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The number of bytes in the value.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the value holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the value as text, keeping any padding.
    ///
    /// Invalid UTF-8 sequences are replaced.
    pub fn to_raw_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Interpret the value as text,
    /// removing trailing space and NUL padding.
    pub fn to_str(&self) -> Cow<'_, str> {
        match self.to_raw_str() {
            Cow::Borrowed(s) => Cow::Borrowed(trim_padding(s)),
            Cow::Owned(s) => Cow::Owned(trim_padding(&s).to_string()),
        }
    }

    /// Interpret the value as backslash-separated text,
    /// removing trailing padding from each value.
    pub fn to_multi_str(&self) -> Vec<String> {
        let text = self.to_str();
        if text.is_empty() {
            return Vec::new();
        }
        text.split('\\')
            .map(|s| trim_padding(s).to_string())
            .collect()
    }

    /// Interpret the value as a sequence of unsigned 16-bit integers.
    /// A trailing incomplete word is ignored.
    pub fn to_multi_u16(&self) -> Vec<u16> {
        self.0
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect()
    }

    /// Interpret the value as a sequence of unsigned 32-bit integers.
    /// A trailing incomplete word is ignored.
    pub fn to_multi_u32(&self) -> Vec<u32> {
        self.0
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// Retrieve the first unsigned 16-bit integer of the value.
    pub fn to_u16(&self) -> Result<u16, ConvertValueError> {
        match self.0.as_slice() {
            [a, b, ..] => Ok(u16::from_le_bytes([*a, *b])),
            _ => NotEnoughBytesSnafu {
                required: 2_usize,
                got: self.0.len(),
            }
            .fail(),
        }
    }

    /// Retrieve the first unsigned 32-bit integer of the value.
    pub fn to_u32(&self) -> Result<u32, ConvertValueError> {
        match self.0.as_slice() {
            [a, b, c, d, ..] => Ok(u32::from_le_bytes([*a, *b, *c, *d])),
            _ => NotEnoughBytesSnafu {
                required: 4_usize,
                got: self.0.len(),
            }
            .fail(),
        }
    }
}

fn trim_padding(s: &str) -> &str {
    s.trim_end_matches(|c| c == ' ' || c == '\0')
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(bytes: Vec<u8>) -> Self {
        PrimitiveValue(bytes)
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(bytes: &[u8]) -> Self {
        PrimitiveValue(bytes.to_vec())
    }
}

impl From<&str> for PrimitiveValue {
    fn from(text: &str) -> Self {
        PrimitiveValue(text.as_bytes().to_vec())
    }
}

impl From<String> for PrimitiveValue {
    fn from(text: String) -> Self {
        PrimitiveValue(text.into_bytes())
    }
}

/// Representation of a full DICOM value, which may be either primitive or
/// a sequence of other DICOM objects.
///
/// `I` is the type of the nested data set items.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I = EmptyObject> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A complex sequence of items.
    Sequence {
        /// Item collection.
        items: C<I>,
        /// The size in bytes as declared when the sequence was read
        /// (can be undefined).
        size: Length,
    },
    /// An encapsulated pixel data sequence.
    PixelSequence {
        /// The value contents of the offset table.
        offset_table: C<u32>,
        /// The sequence of compressed fragments.
        fragments: C<InMemFragment>,
    },
}

impl<I> Value<I> {
    /// Construct a DICOM data set sequence value.
    pub fn new_sequence<T>(items: T, size: Length) -> Self
    where
        T: Into<C<I>>,
    {
        Value::Sequence {
            items: items.into(),
            size,
        }
    }

    /// Construct an encapsulated pixel data sequence value
    /// from a basic offset table and a list of fragments.
    pub fn new_pixel_sequence<T>(offset_table: C<u32>, fragments: T) -> Self
    where
        T: Into<C<InMemFragment>>,
    {
        Value::PixelSequence {
            offset_table,
            fragments: fragments.into(),
        }
    }

    /// The natural element length of this value:
    /// the byte count of primitive values,
    /// or undefined for sequences.
    pub fn length(&self) -> Length {
        match self {
            Value::Primitive(v) => Length(v.len() as u32),
            Value::Sequence { .. } | Value::PixelSequence { .. } => Length::UNDEFINED,
        }
    }

    /// Get a reference to the primitive value, if it is one.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Get the items of a sequence value, if it is one.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Retrieve the items of a sequence value by ownership,
    /// if it is one.
    pub fn into_items(self) -> Option<C<I>> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Get the fragments of a pixel sequence, if it is one.
    pub fn fragments(&self) -> Option<&[InMemFragment]> {
        match self {
            Value::PixelSequence { fragments, .. } => Some(fragments),
            _ => None,
        }
    }

    /// Get the basic offset table of a pixel sequence, if it is one.
    pub fn offset_table(&self) -> Option<&C<u32>> {
        match self {
            Value::PixelSequence { offset_table, .. } => Some(offset_table),
            _ => None,
        }
    }

    fn require_primitive(&self) -> Result<&PrimitiveValue, ConvertValueError> {
        match self {
            Value::Primitive(v) => Ok(v),
            _ => NotPrimitiveSnafu.fail(),
        }
    }

    /// Interpret the primitive value as text with padding removed.
    pub fn to_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        self.require_primitive().map(PrimitiveValue::to_str)
    }

    /// Interpret the primitive value as text, keeping any padding.
    pub fn to_raw_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        self.require_primitive().map(PrimitiveValue::to_raw_str)
    }

    /// Interpret the primitive value as backslash-separated text.
    pub fn to_multi_str(&self) -> Result<Vec<String>, ConvertValueError> {
        self.require_primitive().map(PrimitiveValue::to_multi_str)
    }

    /// Obtain the raw bytes of the primitive value.
    pub fn to_bytes(&self) -> Result<&[u8], ConvertValueError> {
        self.require_primitive().map(PrimitiveValue::as_bytes)
    }

    /// Retrieve the first unsigned 16-bit integer of the primitive value.
    pub fn to_u16(&self) -> Result<u16, ConvertValueError> {
        self.require_primitive()?.to_u16()
    }

    /// Retrieve the first unsigned 32-bit integer of the primitive value.
    pub fn to_u32(&self) -> Result<u32, ConvertValueError> {
        self.require_primitive()?.to_u32()
    }
}

impl<I> HasLength for Value<I> {
    fn length(&self) -> Length {
        Value::length(self)
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<&str> for Value<I> {
    fn from(v: &str) -> Self {
        Value::Primitive(v.into())
    }
}

impl<I> From<String> for Value<I> {
    fn from(v: String) -> Self {
        Value::Primitive(v.into())
    }
}

impl<I> From<Vec<u8>> for Value<I> {
    fn from(v: Vec<u8>) -> Self {
        Value::Primitive(v.into())
    }
}

impl<I> From<&[u8]> for Value<I> {
    fn from(v: &[u8]) -> Self {
        Value::Primitive(v.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accessors_strip_padding() {
        let v = PrimitiveValue::from("1.2.3.4\0");
        assert_eq!(v.len(), 8);
        assert_eq!(v.to_raw_str(), "1.2.3.4\0");
        assert_eq!(v.to_str(), "1.2.3.4");

        let v = PrimitiveValue::from("ORIGINAL\\PRIMARY \\AXIAL ");
        assert_eq!(v.to_multi_str(), vec!["ORIGINAL", "PRIMARY", "AXIAL"]);

        assert!(PrimitiveValue::empty().to_multi_str().is_empty());
    }

    #[test]
    fn integers_are_little_endian() {
        let v = PrimitiveValue::from_u16s(&[0x0102, 0x0304]);
        assert_eq!(v.as_bytes(), &[0x02, 0x01, 0x04, 0x03]);
        assert_eq!(v.to_u16().unwrap(), 0x0102);
        assert_eq!(v.to_multi_u16(), vec![0x0102, 0x0304]);

        let v = PrimitiveValue::from_u32s(&[0x0A0B_0C0D]);
        assert_eq!(v.to_u32().unwrap(), 0x0A0B_0C0D);
        assert!(matches!(
            PrimitiveValue::from(&[1u8][..]).to_u16(),
            Err(ConvertValueError::NotEnoughBytes { required: 2, got: 1, .. })
        ));
    }

    #[test]
    fn sequence_values_are_not_primitive() {
        let v: Value<u8> = Value::new_sequence(vec![1u8, 2u8], Length::UNDEFINED);
        assert_eq!(v.items(), Some(&[1u8, 2u8][..]));
        assert!(v.length().is_undefined());
        assert!(matches!(
            v.to_str(),
            Err(ConvertValueError::NotPrimitive { .. })
        ));

        let p: Value = Value::new_pixel_sequence(C::new(), vec![vec![0xFFu8, 0xD8]]);
        assert_eq!(p.fragments().map(|f| f.len()), Some(1));
        assert_eq!(p.offset_table().map(|t| t.len()), Some(0));
    }
}
