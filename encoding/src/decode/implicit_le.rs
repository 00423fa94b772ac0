//! Implicit VR Little Endian syntax transfer implementation

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{
    read_header_tag, read_item_header, BasicDecode, Decode, ReadLengthSnafu, ReadTagSnafu, Result,
};
use byteordered::Endianness;
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmkit_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmkit_core::{Tag, VR};
use dcmkit_dictionary_std::StandardDataDictionary;
use snafu::ResultExt;
use std::fmt;
use std::io::Read;

/// An ImplicitVRLittleEndianDecoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element decoder for the Implicit VR Little Endian transfer syntax.
/// This type contains a reference to an attribute dictionary for resolving
/// value representations.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
    basic: LittleEndianBasicDecoder,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .field("basic", &self.basic)
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: dictionary,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        let tag = read_header_tag(&mut *source, Endianness::Little)?;
        let len = self.basic.decode_ul(source).context(ReadLengthSnafu)?;

        // pixel data and overlay data are always OW here,
        // everything else is resolved through the dictionary
        let vr = if tag == Tag(0x7FE0, 0x0010) || (tag.0 >> 8 == 0x60 && tag.1 == 0x3000) {
            VR::OW
        } else {
            self.dict
                .by_tag(tag)
                .map(|entry| entry.vr())
                .unwrap_or(VR::UN)
        };
        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        read_item_header(&self.basic, source)
    }

    #[inline]
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }
}

impl_decode_from!(impl<D: DataDictionary> for ImplicitVRLittleEndianDecoder<D>);

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use dcmkit_core::dictionary::StubDataDictionary;
    use dcmkit_core::header::{HasLength, Header, Length};
    use dcmkit_core::{Tag, VR};
    use std::io::Cursor;

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x08, 0x00, 0x18, 0x00,         // (0008,0018) SOP Instance UID
            0x08, 0x00, 0x00, 0x00,     // Length: 8
                b'1', b'.', b'2', b'.', b'3', b'.', b'4', 0x00,
        0x09, 0x00, 0x01, 0x10,         // (0009,1001) private, unknown
            0x04, 0x00, 0x00, 0x00,     // Length: 4
                0x01, 0x02, 0x03, 0x04,
        0xE0, 0x7F, 0x10, 0x00,         // (7FE0,0010) Pixel Data
            0x02, 0x00, 0x00, 0x00,     // Length: 2
                0xFF, 0x00,
    ];

    #[test]
    fn decode_with_std_dict() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x0018));
        assert_eq!(elem.vr(), VR::UI);
        assert_eq!(elem.length(), Length(8));
        assert_eq!(bytes_read, 8);
        cursor.set_position(cursor.position() + 8);

        // unknown attributes fall back to UN with a 32-bit length
        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0009, 0x1001));
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(elem.length(), Length(4));
        cursor.set_position(cursor.position() + 4);

        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(elem.vr(), VR::OW);
    }

    #[test]
    fn decode_with_stub_dict() {
        let dec = ImplicitVRLittleEndianDecoder::with_dict(StubDataDictionary);
        let mut cursor = Cursor::new(RAW);
        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x0018));
        assert_eq!(elem.vr(), VR::UN);
    }
}
