//! This module contains all DICOM data element encoding logic.
use byteordered::Endianness;
use dcmkit_core::{DataElementHeader, Tag, VR};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

/// Module-level error type:
/// for errors which may occur while encoding DICOM data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write tag"))]
    WriteTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write element header"))]
    WriteHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item header"))]
    WriteItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item delimiter"))]
    WriteItemDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write sequence delimiter"))]
    WriteSequenceDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write pixel data offset table"))]
    WriteOffsetTable {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display(
        "Length {} of element {} does not fit in the 16-bit length field of {}",
        len,
        tag,
        vr
    ))]
    LengthTooLarge {
        tag: Tag,
        vr: VR,
        len: u32,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Type trait for an encoder of basic data properties.
///
/// Everything else an [`Encode`] implementation writes
/// can be expressed with these two integer writers.
pub trait BasicEncode {
    /// Retrieve the encoder's endianness.
    fn endianness(&self) -> Endianness;

    /// Encode an unsigned short value to the given writer.
    fn encode_us<W>(&self, to: W, value: u16) -> io::Result<()>
    where
        W: Write;

    /// Encode an unsigned long value to the given writer.
    fn encode_ul<W>(&self, to: W, value: u32) -> io::Result<()>
    where
        W: Write;
}

impl<T: ?Sized> BasicEncode for &T
where
    T: BasicEncode,
{
    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }

    fn encode_us<W>(&self, to: W, value: u16) -> io::Result<()>
    where
        W: Write,
    {
        (**self).encode_us(to, value)
    }

    fn encode_ul<W>(&self, to: W, value: u32) -> io::Result<()>
    where
        W: Write,
    {
        (**self).encode_ul(to, value)
    }
}

/// Write a tag followed by a 32-bit length.
///
/// This is the whole header of items, delimiters
/// and implicit VR data elements.
pub(crate) fn write_tag_and_len<E, W>(enc: &E, mut to: W, tag: Tag, len: u32) -> io::Result<()>
where
    E: ?Sized + BasicEncode,
    W: Write,
{
    enc.encode_us(&mut to, tag.group())?;
    enc.encode_us(&mut to, tag.element())?;
    enc.encode_ul(&mut to, len)
}

/// Write an explicit VR data element header in the encoder's byte order.
pub(crate) fn write_explicit_header<E, W>(enc: &E, mut to: W, de: DataElementHeader) -> Result<usize>
where
    E: ?Sized + BasicEncode,
    W: Write,
{
    let (tag, vr, len) = (de.tag, de.vr, de.len.0);
    if tag.group() == 0xFFFE {
        // item and delimiter tags carry no VR
        write_tag_and_len(enc, &mut to, tag, len).context(WriteHeaderSnafu)?;
        return Ok(8);
    }

    let wide = vr.has_32bit_length();
    ensure!(
        wide || len <= u32::from(u16::MAX),
        LengthTooLargeSnafu { tag, vr, len }
    );
    let mut write = || -> io::Result<usize> {
        enc.encode_us(&mut to, tag.group())?;
        enc.encode_us(&mut to, tag.element())?;
        to.write_all(&vr.to_bytes())?;
        if wide {
            // two reserved bytes, then the 32-bit length
            to.write_all(&[0, 0])?;
            enc.encode_ul(&mut to, len)?;
            Ok(12)
        } else {
            enc.encode_us(&mut to, len as u16)?;
            Ok(8)
        }
    };
    write().context(WriteHeaderSnafu)
}

/// Type trait for a data element encoder.
///
/// Only the element header layout differs between transfer syntaxes.
/// Tags, item headers, delimiters and offset tables
/// follow from the byte order of the underlying [`BasicEncode`].
pub trait Encode: BasicEncode {
    /// Encode and write an element tag.
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        self.encode_us(&mut to, tag.group())
            .and_then(|_| self.encode_us(&mut to, tag.element()))
            .context(WriteTagSnafu)
    }

    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written on success.
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write;

    /// Encode and write a DICOM sequence item header to the given destination.
    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        write_tag_and_len(self, to, Tag(0xFFFE, 0xE000), len).context(WriteItemHeaderSnafu)
    }

    /// Encode and write a DICOM sequence item delimiter to the given destination.
    fn encode_item_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        write_tag_and_len(self, to, Tag(0xFFFE, 0xE00D), 0).context(WriteItemDelimiterSnafu)
    }

    /// Encode and write a DICOM sequence delimiter to the given destination.
    fn encode_sequence_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write,
    {
        write_tag_and_len(self, to, Tag(0xFFFE, 0xE0DD), 0).context(WriteSequenceDelimiterSnafu)
    }

    /// Encode and write the basic offset table of an encapsulated pixel
    /// data sequence, including its item header.
    /// Returns the number of bytes effectively written on success.
    fn encode_offset_table<W>(&self, mut to: W, offset_table: &[u32]) -> Result<usize>
    where
        W: Write,
    {
        let len = offset_table.len() as u32 * 4;
        self.encode_item_header(&mut to, len)?;
        for &offset in offset_table {
            self.encode_ul(&mut to, offset)
                .context(WriteOffsetTableSnafu)?;
        }
        Ok(8 + len as usize)
    }
}

impl<T: ?Sized> Encode for &T
where
    T: Encode,
{
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        (**self).encode_element_header(to, de)
    }
}

/// Type trait for a data element encoder to a single known writer type `W`.
///
/// Unlike [`Encode`], this trait is object safe.
pub trait EncodeTo<W: ?Sized> {
    /// Encode and write an element tag.
    fn encode_tag(&self, to: &mut W, tag: Tag) -> Result<()>
    where
        W: Write;

    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written on success.
    fn encode_element_header(&self, to: &mut W, de: DataElementHeader) -> Result<usize>
    where
        W: Write;

    /// Encode and write a DICOM sequence item header to the given destination.
    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()>
    where
        W: Write;

    /// Encode and write a DICOM sequence item delimiter to the given destination.
    fn encode_item_delimiter(&self, to: &mut W) -> Result<()>
    where
        W: Write;

    /// Encode and write a DICOM sequence delimiter to the given destination.
    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()>
    where
        W: Write;

    /// Encode and write the basic offset table of an encapsulated pixel
    /// data sequence, including its item header.
    fn encode_offset_table(&self, to: &mut W, offset_table: &[u32]) -> Result<usize>
    where
        W: Write;

    /// Retrieve the byte order of the values written by this encoder.
    fn endianness(&self) -> Endianness;
}

/// A type binding an encoder to a specific writer type,
/// making it usable as an [`EncodeTo`] trait object.
pub struct EncoderFor<T, W: ?Sized> {
    inner: T,
    phantom: PhantomData<W>,
}

impl<T: fmt::Debug, W: ?Sized> fmt::Debug for EncoderFor<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EncoderFor")
            .field("inner", &self.inner)
            .field("phantom", &self.phantom)
            .finish()
    }
}

impl<T, W: ?Sized> Default for EncoderFor<T, W>
where
    T: Default,
{
    fn default() -> Self {
        EncoderFor {
            inner: T::default(),
            phantom: PhantomData,
        }
    }
}

impl<T, W: ?Sized> EncoderFor<T, W> {
    /// Using a generic encoder, create a new encoder specifically for the given
    /// writer of type `W`.
    pub fn new(encoder: T) -> Self {
        EncoderFor {
            inner: encoder,
            phantom: PhantomData,
        }
    }
}

impl<T, W: ?Sized> EncodeTo<W> for EncoderFor<T, W>
where
    T: Encode,
    W: Write,
{
    fn encode_tag(&self, to: &mut W, tag: Tag) -> Result<()> {
        self.inner.encode_tag(to, tag)
    }

    fn encode_element_header(&self, to: &mut W, de: DataElementHeader) -> Result<usize> {
        self.inner.encode_element_header(to, de)
    }

    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()> {
        self.inner.encode_item_header(to, len)
    }

    fn encode_item_delimiter(&self, to: &mut W) -> Result<()> {
        self.inner.encode_item_delimiter(to)
    }

    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()> {
        self.inner.encode_sequence_delimiter(to)
    }

    fn encode_offset_table(&self, to: &mut W, offset_table: &[u32]) -> Result<usize> {
        self.inner.encode_offset_table(to, offset_table)
    }

    fn endianness(&self) -> Endianness {
        self.inner.endianness()
    }
}

impl<T: ?Sized, W: ?Sized> EncodeTo<W> for Box<T>
where
    T: EncodeTo<W>,
    W: Write,
{
    fn encode_tag(&self, to: &mut W, tag: Tag) -> Result<()> {
        (**self).encode_tag(to, tag)
    }

    fn encode_element_header(&self, to: &mut W, de: DataElementHeader) -> Result<usize> {
        (**self).encode_element_header(to, de)
    }

    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()> {
        (**self).encode_item_header(to, len)
    }

    fn encode_item_delimiter(&self, to: &mut W) -> Result<()> {
        (**self).encode_item_delimiter(to)
    }

    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()> {
        (**self).encode_sequence_delimiter(to)
    }

    fn encode_offset_table(&self, to: &mut W, offset_table: &[u32]) -> Result<usize> {
        (**self).encode_offset_table(to, offset_table)
    }

    fn endianness(&self) -> Endianness {
        (**self).endianness()
    }
}
