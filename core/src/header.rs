//! This modules contains an assortment of types required for interpreting DICOM data elements.
//! It comprises a variety of basic data types, such as the DICOM attribute tag, the
//! value representation and its encoding rules, the element header,
//! and the element composite type.

use crate::value::{ConvertValueError, PrimitiveValue, Value, C};
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// It is named `length` to make it distinct from the conventional method
    /// signature `len(&self) -> usize` for the number of elements of a
    /// collection.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements or encapsulated pixel data.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
#[allow(clippy::len_without_is_empty)]
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE000)
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE00D)
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE0DD)
    }

    /// Check whether this is the header of an encapsulated pixel data.
    fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag() == Tag(0x7FE0, 0x0010) && self.length().is_undefined()
    }
}

/// Stub type representing a non-existing DICOM object.
///
/// This type cannot be instantiated.
/// This makes it so that `Value<EmptyObject>` is sure to be either a primitive
/// value or a sequence with no items.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum EmptyObject {}

/// A data type that represents and owns a DICOM data element.
///
/// This type is capable of representing any data element fully in memory,
/// whether it be a primitive value,
/// a nested data set (where each item contains an object of type `I`),
/// or an encapsulated pixel data sequence.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement<I = EmptyObject> {
    header: DataElementHeader,
    value: Value<I>,
}

impl<I> HasLength for DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl<I> Header for DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl<I> HasLength for &DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        (**self).length()
    }
}

impl<I> Header for &DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        (**self).tag()
    }
}

impl<I> DataElement<I> {
    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: Length(0),
            },
            value: PrimitiveValue::empty().into(),
        }
    }

    /// Create a data element from the given parts,
    /// where the length is inferred from the value.
    ///
    /// Primitive values take their byte count as the length,
    /// before any padding is applied.
    /// Sequences and pixel sequences are given an undefined length,
    /// as their encoded size depends on the transfer syntax.
    ///
    /// This method will not check whether the value representation is
    /// compatible with the given value.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        let value = value.into();
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: value.length(),
            },
            value,
        }
    }

    /// Create a data element from the given parts.
    ///
    /// This method will not check
    /// whether the length accurately represents the given value's byte length,
    /// nor whether the value representation is compatible with the value.
    /// Encoders will refuse to write primitive elements
    /// whose length does not match the value.
    pub fn new_with_len<T>(tag: Tag, vr: VR, length: Length, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: length,
            },
            value: value.into(),
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation, which may be unknown or not
    /// applicable.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Split the element into its header and value.
    pub fn into_parts(self) -> (DataElementHeader, Value<I>) {
        (self.header, self.value)
    }

    /// Check whether the declared length agrees with the value.
    ///
    /// Primitive values must have a defined length
    /// equal to their byte count.
    /// Sequences and pixel sequences are always consistent,
    /// since their encoded length is computed when writing.
    pub fn length_matches_value(&self) -> bool {
        match &self.value {
            Value::Primitive(v) => self.header.len.get() == Some(v.len() as u32),
            Value::Sequence { .. } | Value::PixelSequence { .. } => true,
        }
    }

    /// Retrieve the element's value as a single clean string,
    /// with no trailing padding.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        self.value.to_str()
    }

    /// Retrieve the element's value as a single raw string,
    /// with trailing padding kept.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_raw_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        self.value.to_raw_str()
    }

    /// Convert the full value into a sequence of strings,
    /// split by the backslash delimiter.
    pub fn to_multi_str(&self) -> Result<Vec<String>, ConvertValueError> {
        self.value.to_multi_str()
    }

    /// Retrieve the raw bytes of the primitive value.
    pub fn to_bytes(&self) -> Result<&[u8], ConvertValueError> {
        self.value.to_bytes()
    }

    /// Retrieve the first unsigned 16-bit integer of the value.
    pub fn to_u16(&self) -> Result<u16, ConvertValueError> {
        self.value.to_u16()
    }

    /// Retrieve the first unsigned 32-bit integer of the value.
    pub fn to_u32(&self) -> Result<u32, ConvertValueError> {
        self.value.to_u32()
    }

    /// Retrieve the items of a sequence value, if it is one.
    pub fn items(&self) -> Option<&[I]> {
        self.value.items()
    }

    /// Retrieve the fragments of an encapsulated pixel data value,
    /// if it is one.
    pub fn fragments(&self) -> Option<&[Vec<u8>]> {
        self.value.fragments()
    }

    /// Retrieve the basic offset table of an encapsulated pixel data value,
    /// if it is one.
    pub fn offset_table(&self) -> Option<&C<u32>> {
        self.value.offset_table()
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation, which can be unknown.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ or the length is undefined.
    #[inline]
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.length().is_undefined()
    }
}

impl From<SequenceItemHeader> for DataElementHeader {
    fn from(value: SequenceItemHeader) -> DataElementHeader {
        DataElementHeader {
            tag: value.tag(),
            vr: VR::UN,
            len: value.length(),
        }
    }
}

/// Data type for describing a sequence item data element.
/// If the element represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be 0xFFFFFFFF if undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, a sequence item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag(0xFFFE, 0xE000) => Ok(SequenceItemHeader::Item { len }),
            Tag(0xFFFE, 0xE00D) => {
                // delimiters should not have a positive length
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag(0xFFFE, 0xE0DD) => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    #[inline]
    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    #[inline]
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag(0xFFFE, 0xE000),
            SequenceItemHeader::ItemDelimiter => Tag(0xFFFE, 0xE00D),
            SequenceItemHeader::SequenceDelimiter => Tag(0xFFFE, 0xE0DD),
        }
    }
}

macro_rules! value_representations {
    ($($(#[$doc:meta])* $vr:ident),* $(,)?) => {
        /// A DICOM value representation.
        #[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
        pub enum VR {
            $($(#[$doc])* $vr,)*
        }

        impl VR {
            /// Every value representation, in alphabetical order.
            pub const ALL: &'static [VR] = &[$(VR::$vr),*];

            /// The two upper case letters naming this VR.
            pub fn to_string(self) -> &'static str {
                match self {
                    $(VR::$vr => stringify!($vr),)*
                }
            }
        }

        impl FromStr for VR {
            type Err = &'static str;

            /// Only exact two-letter upper case codes are recognized.
            fn from_str(code: &str) -> std::result::Result<Self, Self::Err> {
                match code {
                    $(stringify!($vr) => Ok(VR::$vr),)*
                    _ => Err("no such value representation"),
                }
            }
        }
    };
}

value_representations! {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// URI or URL
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// The VR spelled by two bytes, as found in explicit VR element headers.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(&chars).ok()?.parse().ok()
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether the value length field of this VR is 32 bits wide
    /// in explicit VR transfer syntaxes.
    ///
    /// PS3.5 7.1.2: OB, OD, OF, OL, OV, OW, SQ, SV, UC, UN, UR, UT and UV
    /// are followed by two reserved bytes and a 32-bit length.
    /// All other VRs have a 16-bit length field.
    pub fn has_32bit_length(self) -> bool {
        use VR::*;
        matches!(
            self,
            OB | OD | OF | OL | OV | OW | SQ | SV | UC | UN | UR | UT | UV
        )
    }

    /// Whether values of this VR are a sequence of nested items
    /// rather than primitive bytes.
    #[inline]
    pub fn is_sequence(self) -> bool {
        self == VR::SQ
    }

    /// Whether values of this VR are character strings.
    pub fn is_text(self) -> bool {
        use VR::*;
        matches!(
            self,
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR | UT
        )
    }

    /// The byte used to pad odd-length values to an even length.
    ///
    /// Text values are padded with a space,
    /// with the exception of UIDs, which are padded with NUL
    /// like all binary values.
    pub fn padding(self) -> u8 {
        match self {
            VR::UI => 0,
            vr if vr.is_text() => b' ',
            _ => 0,
        }
    }

    /// The size in bytes of each word whose byte order
    /// depends on the transfer syntax.
    ///
    /// Text and byte-oriented values have a word size of 1,
    /// meaning that they are never swapped.
    pub fn word_size(self) -> usize {
        use VR::*;
        match self {
            US | SS | OW | AT => 2,
            UL | SL | FL | OF | OL => 4,
            FD | OD | SV | UV | OV => 8,
            _ => 1,
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are totally ordered by group, then by element,
/// which is also the order in which elements are serialized.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag refers to a private attribute,
    /// which is the case for odd group numbers.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 % 2 == 1
    }

    /// Whether this tag is the group length element of its group.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// The length of an element value or of a sequence or item, in bytes.
///
/// `0xFFFF_FFFF` on the wire means the length is undefined,
/// and the content ends at a delimitation item instead.
/// An undefined length is unlike any number:
/// it equals nothing (not even itself),
/// orders against nothing,
/// and absorbs any addition.
///
/// ```
/// # use dcmkit_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert!((Length::defined(64) + Length::UNDEFINED).is_undefined());
/// assert!(Length::defined(16) < Length::defined(64));
/// assert_eq!(Length::UNDEFINED.partial_cmp(&Length::defined(64)), None);
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

impl Length {
    /// The reserved undefined length.
    pub const UNDEFINED: Self = Length(u32::MAX);

    /// Wrap a raw length as read from the wire, undefined or not.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// A defined length of `len` bytes.
    ///
    /// # Panic
    ///
    /// Panics if `len` is the reserved undefined value.
    #[inline]
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, u32::MAX, "0xFFFF_FFFF is the undefined length");
        Length(len)
    }

    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        self.0 != u32::MAX
    }

    /// The number of bytes, or `None` when undefined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        Some(self.0).filter(|&len| len != u32::MAX)
    }

    /// Compare the raw values,
    /// so that two undefined lengths are equal here.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(len: u32) -> Self {
        Length(len)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        matches!((self.get(), rhs.get()), (Some(a), Some(b)) if a == b)
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        Some(self.get()?.cmp(&rhs.get()?))
    }
}

impl std::ops::Add<Length> for Length {
    type Output = Self;

    fn add(self, rhs: Length) -> Self::Output {
        match (self.get(), rhs.get()) {
            (Some(a), Some(b)) => {
                let sum = a + b;
                debug_assert_ne!(sum, u32::MAX, "length overflow into the undefined value");
                Length(sum)
            }
            _ => Length::UNDEFINED,
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "Length({})", len),
            None => f.write_str("Length(Undefined)"),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "{}", len),
            None => f.write_str("U/L"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_ordering_is_group_then_element() {
        let mut tags = vec![
            Tag(0x0010, 0x0010),
            Tag(0x0008, 0x0018),
            Tag(0x0008, 0x0016),
            Tag(0x7FE0, 0x0010),
            Tag(0x0002, 0x0010),
        ];
        tags.sort();
        assert_eq!(
            tags,
            vec![
                Tag(0x0002, 0x0010),
                Tag(0x0008, 0x0016),
                Tag(0x0008, 0x0018),
                Tag(0x0010, 0x0010),
                Tag(0x7FE0, 0x0010),
            ]
        );
    }

    #[test]
    fn private_tags_have_odd_groups() {
        assert!(Tag(0x0009, 0x0010).is_private());
        assert!(Tag(0x7FE1, 0x1001).is_private());
        assert!(!Tag(0x0008, 0x0018).is_private());
        assert!(Tag(0x0002, 0x0000).is_group_length());
    }

    #[test]
    fn tag_display() {
        assert_eq!(Tag(0x0008, 0x0018).to_string(), "(0008,0018)");
        assert_eq!(format!("{:?}", Tag(0x7FE0, 0x0010)), "Tag(0x7FE0, 0x0010)");
    }

    #[test]
    fn vr_length_field_width() {
        for vr in [VR::OB, VR::OW, VR::SQ, VR::UN, VR::UT, VR::UC, VR::UR, VR::OV] {
            assert!(vr.has_32bit_length(), "{} should have a 32-bit length", vr);
        }
        for vr in [VR::AE, VR::CS, VR::UI, VR::US, VR::UL, VR::FD, VR::PN, VR::AT] {
            assert!(!vr.has_32bit_length(), "{} should have a 16-bit length", vr);
        }
    }

    #[test]
    fn vr_padding() {
        assert_eq!(VR::UI.padding(), 0);
        assert_eq!(VR::CS.padding(), b' ');
        assert_eq!(VR::PN.padding(), b' ');
        assert_eq!(VR::OB.padding(), 0);
        assert_eq!(VR::UN.padding(), 0);
    }

    #[test]
    fn vr_binary_round_trip() {
        assert_eq!(VR::from_binary(*b"SQ"), Some(VR::SQ));
        assert_eq!(VR::from_binary(*b"ZZ"), None);
        assert_eq!(VR::from_binary([0x00, 0xFF]), None);
        assert_eq!(VR::UV.to_bytes(), *b"UV");
        assert_eq!(VR::ALL.len(), 34);
        for &vr in VR::ALL {
            assert_eq!(VR::from_binary(vr.to_bytes()), Some(vr));
        }
    }

    #[test]
    fn undefined_lengths() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert!(Length::UNDEFINED.inner_eq(Length(0xFFFF_FFFF)));
        assert_eq!(Length(20) + Length(4), Length(24));
    }

    #[test]
    fn sequence_item_headers() {
        assert_eq!(
            SequenceItemHeader::new((0xFFFE, 0xE000), Length(12)).unwrap(),
            SequenceItemHeader::Item { len: Length(12) },
        );
        assert_eq!(
            SequenceItemHeader::new((0xFFFE, 0xE0DD), Length(0)).unwrap(),
            SequenceItemHeader::SequenceDelimiter,
        );
        assert!(matches!(
            SequenceItemHeader::new((0xFFFE, 0xE00D), Length(4)),
            Err(SequenceItemHeaderError::UnexpectedDelimiterLength { .. })
        ));
        assert!(matches!(
            SequenceItemHeader::new((0x0008, 0x0018), Length(0)),
            Err(SequenceItemHeaderError::UnexpectedTag { .. })
        ));
    }

    #[test]
    fn element_string_value() {
        let element: DataElement = DataElement::new(Tag(0x0008, 0x0018), VR::UI, "1.2.3.4");
        assert_eq!(element.length(), Length(7));
        assert_eq!(element.to_str().unwrap(), "1.2.3.4");
        assert!(element.length_matches_value());

        let bad: DataElement =
            DataElement::new_with_len(Tag(0x0008, 0x0018), VR::UI, Length(10), "1.2.3.4");
        assert!(!bad.length_matches_value());
    }
}
