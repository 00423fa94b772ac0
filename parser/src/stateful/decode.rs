//! This module provides a stateful decoder of DICOM data,
//! which binds an element header decoder to a byte source
//! and keeps track of the number of bytes consumed.
//!
//! Primitive values are read as raw bytes.
//! Multi-byte binary values read from a big endian source
//! are brought to little endian so that the in-memory form
//! does not depend on the transfer syntax.

use crate::util::swap_words;
use dcmkit_core::header::{DataElementHeader, HasLength, Header, SequenceItemHeader};
use dcmkit_core::{PrimitiveValue, Tag};
use dcmkit_encoding::decode::basic::{BasicDecoder, LittleEndianBasicDecoder};
use dcmkit_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dcmkit_encoding::decode::{BasicDecode, DecodeFrom};
use dcmkit_encoding::transfer_syntax::{DynDecoder, Endianness, TransferSyntax};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{self, Read};
use std::ops::DerefMut;

/// The largest number of bytes reserved up front when reading a value.
/// Larger values grow the buffer as data actually arrives,
/// so that a bogus length cannot trigger a huge allocation.
const MAX_PREALLOC: usize = 1 << 20;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unsupported transfer syntax {}", ts))]
    UnsupportedTransferSyntax {
        ts: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dcmkit_encoding::decode::Error,
    },
    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dcmkit_encoding::decode::Error,
    },
    #[snafu(display(
        "Value of element {} at position {} is truncated: {} bytes declared, only {} available",
        tag,
        position,
        len,
        read
    ))]
    TruncatedValue {
        tag: Tag,
        position: u64,
        len: u32,
        read: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not read value data at position {}", position))]
    ReadValueData {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Undefined value length of element {} at position {}", tag, position))]
    UndefinedValueLength {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Element {} at position {} is not primitive", tag, position))]
    NonPrimitiveType {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Whether the error signals that the source was already exhausted
    /// at the start of an element header,
    /// as opposed to ending in the middle of one.
    pub fn is_end_of_source(&self) -> bool {
        matches!(
            self,
            Error::DecodeElementHeader {
                source: dcmkit_encoding::decode::Error::EndOfSource { .. },
                ..
            } | Error::DecodeItemHeader {
                source: dcmkit_encoding::decode::Error::EndOfSource { .. },
                ..
            }
        )
    }

    /// Whether the source ended before a header or value was complete.
    pub fn is_truncation(&self) -> bool {
        match self {
            Error::TruncatedValue { .. } => true,
            Error::DecodeElementHeader { source, .. } | Error::DecodeItemHeader { source, .. } => {
                source.is_eof()
            }
            _ => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub trait StatefulDecode {
    type Reader: Read;

    /// Same as `Decode::decode_header` over the bound source.
    fn decode_header(&mut self) -> Result<DataElementHeader>;

    /// Same as `Decode::decode_item_header` over the bound source.
    fn decode_item_header(&mut self) -> Result<SequenceItemHeader>;

    /// Eagerly read the following data in the source
    /// as the primitive value of the element with the given header.
    ///
    /// Exactly the number of bytes declared in the header are read.
    /// Binary values are brought to little endian.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O problems,
    /// if the source ends before the declared length,
    /// or if the header describes a sequence or an undefined length.
    fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue>;

    /// Read the following `length` bytes of the source into `vec`,
    /// without any interpretation.
    fn read_to_vec(&mut self, length: u32, vec: &mut Vec<u8>) -> Result<()>;

    /// Read the following `length` bytes of the source
    /// as 32-bit unsigned integers in the source's byte order,
    /// appending them to `vec`.
    fn read_u32_to_vec(&mut self, length: u32, vec: &mut Vec<u32>) -> Result<()>;

    /// Retrieve the current position of the decoder,
    /// as the number of bytes read so far plus the initial offset.
    fn position(&self) -> u64;
}

/// Alias for a dynamically resolved DICOM stateful decoder. Although the data
/// source may be known at compile time, the required decoder may vary
/// according to an object's transfer syntax.
pub type DynStatefulDecoder<'s> =
    StatefulDecoder<DynDecoder<dyn Read + 's>, BasicDecoder, Box<dyn Read + 's>>;

/// A stateful abstraction for the full DICOM content reading process.
/// This type encapsulates the necessary codecs in order
/// to be as autonomous as possible in the DICOM content reading
/// process.
/// `S` is the generic parameter type for the original source,
/// `D` is the parameter type that the decoder interprets as,
/// whereas `BD` is the parameter type for the basic decoder.
#[derive(Debug)]
pub struct StatefulDecoder<D, BD, S> {
    from: S,
    decoder: D,
    basic: BD,
    position: u64,
}

impl<'s> DynStatefulDecoder<'s> {
    /// Create a new DICOM stateful decoder for the given transfer syntax,
    /// starting at the given position.
    pub fn new_with<S: 's>(from: S, ts: &TransferSyntax, position: u64) -> Result<Self>
    where
        S: Read,
    {
        let basic = ts.basic_decoder();
        let decoder = ts
            .decoder()
            .context(UnsupportedTransferSyntaxSnafu { ts: ts.uid() })?;

        Ok(StatefulDecoder::new_with_position(
            Box::new(from) as Box<dyn Read + 's>,
            decoder,
            basic,
            position,
        ))
    }
}

/// Type alias for the DICOM parser of a file's Meta group.
pub type FileHeaderParser<S> =
    StatefulDecoder<ExplicitVRLittleEndianDecoder, LittleEndianBasicDecoder, S>;

impl<S> FileHeaderParser<S>
where
    S: Read,
{
    /// Create a new DICOM stateful decoder for reading the file meta header,
    /// which is always in _Explicit VR Little Endian_.
    pub fn file_header_parser(from: S) -> Self {
        StatefulDecoder {
            from,
            basic: LittleEndianBasicDecoder,
            decoder: ExplicitVRLittleEndianDecoder::default(),
            position: 0,
        }
    }
}

impl<D, BD, S> StatefulDecoder<D, BD, S> {
    /// Create a new DICOM stateful decoder from its parts.
    #[inline]
    pub fn new(from: S, decoder: D, basic: BD) -> StatefulDecoder<D, BD, S> {
        Self::new_with_position(from, decoder, basic, 0)
    }

    /// Create a new DICOM stateful decoder from its parts,
    /// while assuming a base reading position.
    ///
    /// `position` should be calculated with care.
    /// Decoding or parsing errors may occur
    /// if this position does not match the real position of the reader.
    pub fn new_with_position(from: S, decoder: D, basic: BD, position: u64) -> Self {
        StatefulDecoder {
            from,
            decoder,
            basic,
            position,
        }
    }

    /// Unwrap the stateful decoder, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.from
    }
}

impl<D, T, BD, S> StatefulDecoder<D, BD, S>
where
    D: DecodeFrom<T>,
    BD: BasicDecode,
    S: DerefMut<Target = T> + Read,
    T: ?Sized + Read,
{
    /// Read exactly `len` bytes into `buf`, or report how many were available.
    fn read_exact_len(&mut self, tag: Tag, len: u32, buf: &mut Vec<u8>) -> Result<()> {
        let start = buf.len();
        buf.reserve((len as usize).min(MAX_PREALLOC));
        let read = (&mut self.from)
            .take(u64::from(len))
            .read_to_end(buf)
            .context(ReadValueDataSnafu {
                position: self.position,
            })? as u64;
        if read < u64::from(len) {
            buf.truncate(start);
            return TruncatedValueSnafu {
                tag,
                position: self.position,
                len,
                read,
            }
            .fail();
        }
        self.position += read;
        Ok(())
    }
}

impl<S, T, D, BD> StatefulDecode for StatefulDecoder<D, BD, S>
where
    D: DecodeFrom<T>,
    BD: BasicDecode,
    S: DerefMut<Target = T> + Read,
    T: ?Sized + Read,
{
    type Reader = S;

    fn decode_header(&mut self) -> Result<DataElementHeader> {
        let (header, bytes_read) = self
            .decoder
            .decode_header(&mut *self.from)
            .context(DecodeElementHeaderSnafu {
                position: self.position,
            })?;
        self.position += bytes_read as u64;
        Ok(header)
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let header = self
            .decoder
            .decode_item_header(&mut *self.from)
            .context(DecodeItemHeaderSnafu {
                position: self.position,
            })?;
        self.position += 8;
        Ok(header)
    }

    fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        if header.vr().is_sequence() {
            return NonPrimitiveTypeSnafu {
                tag: header.tag(),
                position: self.position,
            }
            .fail();
        }
        let len = header.length().get().context(UndefinedValueLengthSnafu {
            tag: header.tag(),
            position: self.position,
        })?;

        let mut buf = Vec::new();
        self.read_exact_len(header.tag(), len, &mut buf)?;
        if self.basic.endianness() == Endianness::Big {
            swap_words(&mut buf, header.vr().word_size());
        }
        Ok(PrimitiveValue::new(buf))
    }

    fn read_to_vec(&mut self, length: u32, vec: &mut Vec<u8>) -> Result<()> {
        self.read_exact_len(Tag(0xFFFE, 0xE000), length, vec)
    }

    fn read_u32_to_vec(&mut self, length: u32, vec: &mut Vec<u32>) -> Result<()> {
        let mut buf = Vec::new();
        self.read_exact_len(Tag(0xFFFE, 0xE000), length, &mut buf)?;
        let start = vec.len();
        vec.resize(start + buf.len() / 4, 0);
        self.basic
            .decode_ul_into(&buf[..], &mut vec[start..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, StatefulDecode, StatefulDecoder};
    use dcmkit_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use dcmkit_core::{Tag, VR};
    use dcmkit_encoding::decode::basic::{BigEndianBasicDecoder, LittleEndianBasicDecoder};
    use dcmkit_encoding::decode::explicit_be::ExplicitVRBigEndianDecoder;
    use dcmkit_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;

    #[rustfmt::skip]
    const RAW_LE: &[u8] = &[
        // (0008,0018) UI, len 8, "1.2.3.4\0"
        0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x08, 0x00,
        b'1', b'.', b'2', b'.', b'3', b'.', b'4', 0x00,
        // (0028,0010) US, len 2, 512
        0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
        0x00, 0x02,
    ];

    #[test]
    fn decode_elements_and_track_position() {
        let mut cursor = RAW_LE;
        let mut decoder = StatefulDecoder::new(
            &mut cursor,
            ExplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
        );

        let header = decoder.decode_header().unwrap();
        assert_eq!(header.tag(), Tag(0x0008, 0x0018));
        assert_eq!(header.vr(), VR::UI);
        assert_eq!(header.length(), Length(8));
        assert_eq!(decoder.position(), 8);

        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value.as_bytes(), b"1.2.3.4\0");
        assert_eq!(value.to_str(), "1.2.3.4");
        assert_eq!(decoder.position(), 16);

        let header = decoder.decode_header().unwrap();
        assert_eq!(header.tag(), Tag(0x0028, 0x0010));
        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value.to_u16().unwrap(), 512);
        assert_eq!(decoder.position(), RAW_LE.len() as u64);

        let err = decoder.decode_header().unwrap_err();
        assert!(err.is_end_of_source());
    }

    #[test]
    fn big_endian_values_are_stored_little_endian() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            // (0028,0010) US, len 2, 512
            0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02,
            0x02, 0x00,
            // (0018,0050) DS, len 2, "1 "
            0x00, 0x18, 0x00, 0x50, b'D', b'S', 0x00, 0x02,
            b'1', b' ',
        ];
        let mut cursor = raw;
        let mut decoder = StatefulDecoder::new_with_position(
            &mut cursor,
            ExplicitVRBigEndianDecoder::default(),
            BigEndianBasicDecoder,
            132,
        );

        let header = decoder.decode_header().unwrap();
        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value.as_bytes(), &[0x00, 0x02]);
        assert_eq!(value.to_u16().unwrap(), 512);

        let header = decoder.decode_header().unwrap();
        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value.as_bytes(), b"1 ");
        assert_eq!(decoder.position(), 132 + raw.len() as u64);
    }

    #[test]
    fn truncated_value_names_tag_and_position() {
        #[rustfmt::skip]
        let mut raw = vec![
            // (0010,0010) OB, len 100
            0x10, 0x00, 0x10, 0x00, b'O', b'B', 0x00, 0x00,
            0x64, 0x00, 0x00, 0x00,
        ];
        raw.extend(std::iter::repeat(0xAA).take(50));

        let mut cursor = &raw[..];
        let mut decoder = StatefulDecoder::new(
            &mut cursor,
            ExplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
        );
        let header = decoder.decode_header().unwrap();
        let err = decoder.read_value(&header).unwrap_err();
        match err {
            Error::TruncatedValue {
                tag,
                position,
                len,
                read,
                ..
            } => {
                assert_eq!(tag, Tag(0x0010, 0x0010));
                assert_eq!(position, 12);
                assert_eq!(len, 100);
                assert_eq!(read, 50);
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn read_items_and_offset_table() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            // item, len 8
            0xFE, 0xFF, 0x00, 0xE0, 0x08, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x10, 0x00, 0x00, 0x00,
            // sequence delimiter
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let mut cursor = raw;
        let mut decoder = StatefulDecoder::new(
            &mut cursor,
            ExplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
        );
        let item = decoder.decode_item_header().unwrap();
        assert_eq!(item, SequenceItemHeader::Item { len: Length(8) });
        let mut table = Vec::new();
        decoder.read_u32_to_vec(8, &mut table).unwrap();
        assert_eq!(table, vec![0, 16]);
        assert_eq!(
            decoder.decode_item_header().unwrap(),
            SequenceItemHeader::SequenceDelimiter
        );
        assert_eq!(decoder.position(), raw.len() as u64);
    }
}
