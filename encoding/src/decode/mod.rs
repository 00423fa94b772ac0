//! This module contains all DICOM data element decoding logic.

use self::explicit_le::ExplicitVRLittleEndianDecoder;
use self::implicit_le::{ImplicitVRLittleEndianDecoder, StandardImplicitVRLittleEndianDecoder};
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmkit_core::header::{
    DataElementHeader, Length, SequenceItemHeader, SequenceItemHeaderError,
};
use dcmkit_core::{Tag, VR};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};

/// Implement [`DecodeFrom`] for any source
/// by forwarding to the type's [`Decode`] implementation.
macro_rules! impl_decode_from {
    (impl$(<$($g:ident: $b:path),*>)? for $t:ty) => {
        impl<S: ?Sized + std::io::Read $($(, $g: $b)*)?> $crate::decode::DecodeFrom<S> for $t {
            #[inline]
            fn decode_header(
                &self,
                source: &mut S,
            ) -> $crate::decode::Result<(::dcmkit_core::header::DataElementHeader, usize)> {
                $crate::decode::Decode::decode_header(self, source)
            }

            #[inline]
            fn decode_item_header(
                &self,
                source: &mut S,
            ) -> $crate::decode::Result<::dcmkit_core::header::SequenceItemHeader> {
                $crate::decode::Decode::decode_item_header(self, source)
            }

            #[inline]
            fn decode_tag(&self, source: &mut S) -> $crate::decode::Result<::dcmkit_core::Tag> {
                $crate::decode::Decode::decode_tag(self, source)
            }
        }
    };
}

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

/// Module-level error type:
/// for errors which may occur while decoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The source ended cleanly before the next element header.
    #[snafu(display("No more data elements in the source"))]
    EndOfSource { backtrace: Backtrace },
    #[snafu(display("Failed to read the beginning (tag) of the header"))]
    ReadHeaderTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the item header"))]
    ReadItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's item length field"))]
    ReadItemLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader {
        #[snafu(backtrace)]
        source: SequenceItemHeaderError,
    },
}

impl Error {
    /// Whether the error was caused by the source
    /// reaching its end before the header was complete.
    pub fn is_eof(&self) -> bool {
        let io_error = match self {
            Error::ReadHeaderTag { source, .. }
            | Error::ReadItemHeader { source, .. }
            | Error::ReadItemLength { source, .. }
            | Error::ReadTag { source, .. }
            | Error::ReadReserved { source, .. }
            | Error::ReadLength { source, .. }
            | Error::ReadVr { source, .. } => source,
            Error::EndOfSource { .. } | Error::BadSequenceHeader { .. } => return false,
        };
        io_error.kind() == io::ErrorKind::UnexpectedEof
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Read the tag which opens a data element header.
///
/// Unlike a plain `read_exact`, this tells apart a source
/// which is already exhausted ([`Error::EndOfSource`])
/// from one which ends in the middle of the tag ([`Error::ReadHeaderTag`]).
pub(crate) fn read_header_tag<S>(source: &mut S, endianness: Endianness) -> Result<Tag>
where
    S: ?Sized + Read,
{
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return EndOfSourceSnafu.fail(),
            Ok(0) => {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                    .context(ReadHeaderTagSnafu)
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e).context(ReadHeaderTagSnafu),
        }
    }
    let tag = match endianness {
        Endianness::Little => Tag(
            LittleEndian::read_u16(&buf[0..2]),
            LittleEndian::read_u16(&buf[2..4]),
        ),
        Endianness::Big => Tag(
            BigEndian::read_u16(&buf[0..2]),
            BigEndian::read_u16(&buf[2..4]),
        ),
    };
    Ok(tag)
}

/// Read an explicit VR data element header in the byte order of `basic`.
///
/// Returns the header and the number of bytes it took.
pub(crate) fn read_explicit_header<B, S>(
    basic: &B,
    source: &mut S,
) -> Result<(DataElementHeader, usize)>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    let tag = read_header_tag(&mut *source, basic.endianness())?;

    if tag.group() == 0xFFFE {
        // items and delimiters carry no VR
        let len = basic.decode_ul(&mut *source).context(ReadItemLengthSnafu)?;
        return Ok((DataElementHeader::new(tag, VR::UN, Length(len)), 8));
    }

    let mut vr_bytes = [0u8; 2];
    source.read_exact(&mut vr_bytes).context(ReadVrSnafu)?;
    let vr = VR::from_binary(vr_bytes).unwrap_or_else(|| {
        tracing::warn!(
            "Unknown value representation {:02X?} in element {}, assuming UN",
            vr_bytes,
            tag
        );
        VR::UN
    });

    let (len, header_len) = if vr.has_32bit_length() {
        // two reserved bytes, then a 32-bit length
        let mut reserved = [0u8; 2];
        source.read_exact(&mut reserved).context(ReadReservedSnafu)?;
        let len = basic.decode_ul(&mut *source).context(ReadLengthSnafu)?;
        (len, 12)
    } else {
        let len = basic.decode_us(&mut *source).context(ReadLengthSnafu)?;
        (u32::from(len), 8)
    };

    Ok((DataElementHeader::new(tag, vr, Length(len)), header_len))
}

/// Read an item header or delimiter,
/// which is always a tag and a 32-bit length regardless of VR explicitness.
pub(crate) fn read_item_header<B, S>(basic: &B, source: &mut S) -> Result<SequenceItemHeader>
where
    B: BasicDecode,
    S: ?Sized + Read,
{
    let tag = basic.decode_tag(&mut *source).context(ReadItemHeaderSnafu)?;
    let len = basic.decode_ul(&mut *source).context(ReadItemLengthSnafu)?;
    SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
}

/// Obtain the default data element decoder.
/// According to the standard, data elements are encoded in Implicit
/// VR Little Endian by default.
pub fn default_reader() -> StandardImplicitVRLittleEndianDecoder {
    ImplicitVRLittleEndianDecoder::default()
}

/// Obtain a data element decoder for reading the data elements in a DICOM
/// file's Meta information. According to the standard, these are always
/// encoded in Explicit VR Little Endian.
pub fn file_header_decoder() -> ExplicitVRLittleEndianDecoder {
    ExplicitVRLittleEndianDecoder::default()
}

/// Type trait for reading and decoding basic data values from a data source.
///
/// This trait aims to provide methods for reading binary numbers based on the
/// source's endianness. Unlike `Decode`, this trait is not object safe.
/// However, it doesn't have to because there are, and only will be, two
/// possible implementations (`LittleEndianBasicDecoder` and
/// `BigEndianBasicDecoder`), plus the dynamic `BasicDecoder`.
pub trait BasicDecode {
    /// Retrieve the source's endianness, as expected by this decoder.
    fn endianness(&self) -> Endianness;

    /// Decode an unsigned short value from the given source.
    fn decode_us<S>(&self, source: S) -> std::io::Result<u16>
    where
        S: Read;

    /// Decode an unsigned long value from the given source.
    fn decode_ul<S>(&self, source: S) -> std::io::Result<u32>
    where
        S: Read;

    /// Decode a sequence of unsigned long values from the given source
    /// into the given destination.
    fn decode_ul_into<S>(&self, source: S, target: &mut [u32]) -> std::io::Result<()>
    where
        S: Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, mut source: S) -> std::io::Result<Tag>
    where
        S: Read,
    {
        let g = self.decode_us(&mut source)?;
        let e = self.decode_us(source)?;
        Ok(Tag(g, e))
    }
}

impl<'a, T: ?Sized> BasicDecode for &'a T
where
    T: BasicDecode,
{
    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }

    fn decode_us<S>(&self, source: S) -> std::io::Result<u16>
    where
        S: Read,
    {
        (**self).decode_us(source)
    }

    fn decode_ul<S>(&self, source: S) -> std::io::Result<u32>
    where
        S: Read,
    {
        (**self).decode_ul(source)
    }

    fn decode_ul_into<S>(&self, source: S, target: &mut [u32]) -> std::io::Result<()>
    where
        S: Read,
    {
        (**self).decode_ul_into(source, target)
    }

    fn decode_tag<S>(&self, source: S) -> std::io::Result<Tag>
    where
        S: Read,
    {
        (**self).decode_tag(source)
    }
}

/// Type trait for reading and decoding DICOM data elements.
///
/// The specific behaviour of decoding, even when abstracted from the original source,
/// may depend on the transfer syntax.
pub trait Decode {
    /// Fetch and decode the next data element header from the given source.
    /// This method returns only the header of the element. At the end of this operation, the source
    /// will be pointing at the element's value data, which should be read or skipped as necessary.
    ///
    /// Decoding an item or sequence delimiter is considered valid, and so should be properly handled
    /// by the decoder. The value representation in this case should be `UN`.
    ///
    /// Returns the expected header and the exact number of bytes read from the source.
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read;

    /// Fetch and decode the next sequence item head from the given source. It is a separate method
    /// because value representation is always implicit when reading item headers and delimiters.
    /// This method returns only the header of the item. At the end of this operation, the source
    /// will be pointing at the beginning of the item's data, which should be traversed if necessary.
    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read;
}

impl<'a, T: ?Sized> Decode for &'a T
where
    T: Decode,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        (**self).decode_header(source)
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        (**self).decode_item_header(source)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        (**self).decode_tag(source)
    }
}

/// Type trait for reading and decoding DICOM data elements from a specific source
/// reader type.
///
/// Unlike [`Decode`], this trait is object safe,
/// which makes it suitable for decoders selected at run-time
/// from a transfer syntax.
pub trait DecodeFrom<S: ?Sized + Read> {
    /// Fetch and decode the next data element header from the given source.
    /// See [`Decode::decode_header`].
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)>;

    /// Fetch and decode the next sequence item head from the given source.
    /// See [`Decode::decode_item_header`].
    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader>;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag(&self, source: &mut S) -> Result<Tag>;
}

impl<S: ?Sized, T: ?Sized> DecodeFrom<S> for &T
where
    S: Read,
    T: DecodeFrom<S>,
{
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        (**self).decode_header(source)
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        (**self).decode_item_header(source)
    }

    fn decode_tag(&self, source: &mut S) -> Result<Tag> {
        (**self).decode_tag(source)
    }
}

impl<S: ?Sized, T: ?Sized> DecodeFrom<S> for Box<T>
where
    S: Read,
    T: DecodeFrom<S>,
{
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        (**self).decode_header(source)
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        (**self).decode_item_header(source)
    }

    fn decode_tag(&self, source: &mut S) -> Result<Tag> {
        (**self).decode_tag(source)
    }
}
