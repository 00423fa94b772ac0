//! Module holding a stateful DICOM data encoding abstraction.
//!
//! The [`StatefulEncoder`] writes element headers and raw values
//! while applying the necessary padding to conform to DICOM encoding rules,
//! and converts binary values to the byte order of the target syntax.

use crate::util::{even_len, swap_words};
use dcmkit_core::{DataElementHeader, Length, PrimitiveValue};
use dcmkit_encoding::encode::EncodeTo;
use dcmkit_encoding::transfer_syntax::{DynEncoder, Endianness};
use dcmkit_encoding::TransferSyntax;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Encoding in transfer syntax {} is unsupported", ts))]
    UnsupportedTransferSyntax {
        ts: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to encode a data piece at position {}", position))]
    EncodeData {
        position: u64,
        #[snafu(backtrace)]
        source: dcmkit_encoding::encode::Error,
    },

    #[snafu(display("Could not write value data at position {}", position))]
    WriteValueData {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Also called a printer, this encoder type provides a stateful mid-level
/// abstraction for writing DICOM content. Unlike `Encode`,
/// the stateful encoder knows how to pad values
/// and keeps track of how many bytes were written.
/// `W` is the write target and `E` is the encoder.
#[derive(Debug)]
pub struct StatefulEncoder<W, E> {
    to: W,
    encoder: E,
    bytes_written: u64,
}

pub type DynStatefulEncoder<'w> =
    StatefulEncoder<Box<dyn Write + 'w>, DynEncoder<'w, Box<dyn Write + 'w>>>;

impl<W, E> StatefulEncoder<W, E> {
    pub fn new(to: W, encoder: E) -> Self {
        StatefulEncoder {
            to,
            encoder,
            bytes_written: 0,
        }
    }

    /// Retrieve the number of bytes written so far by this printer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl<'w> DynStatefulEncoder<'w> {
    pub fn from_transfer_syntax(to: Box<dyn Write + 'w>, ts: &TransferSyntax) -> Result<Self> {
        let encoder = ts
            .encoder_for()
            .context(UnsupportedTransferSyntaxSnafu { ts: ts.uid() })?;
        Ok(StatefulEncoder::new(to, encoder))
    }
}

impl<W, E> StatefulEncoder<W, E>
where
    W: Write,
    E: EncodeTo<W>,
{
    /// Encode and write a data element header.
    ///
    /// Defined lengths are rounded up to an even number.
    pub fn encode_element_header(&mut self, mut de: DataElementHeader) -> Result<()> {
        if let Some(len) = de.len.get() {
            de.len = Length(even_len(len))
        }
        let bytes = self
            .encoder
            .encode_element_header(&mut self.to, de)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += bytes as u64;
        Ok(())
    }

    /// Encode and write an item header,
    /// where `len` is the specified length of the item
    /// (can be `0xFFFF_FFFF` for undefined length).
    pub fn encode_item_header(&mut self, len: u32) -> Result<()> {
        let len = if len == 0xFFFF_FFFF {
            len
        } else {
            even_len(len)
        };
        self.encoder
            .encode_item_header(&mut self.to, len)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write an item delimiter.
    pub fn encode_item_delimiter(&mut self) -> Result<()> {
        self.encoder
            .encode_item_delimiter(&mut self.to)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write a sequence delimiter.
    pub fn encode_sequence_delimiter(&mut self) -> Result<()> {
        self.encoder
            .encode_sequence_delimiter(&mut self.to)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write the basic offset table of a pixel sequence,
    /// including its item header.
    pub fn encode_offset_table(&mut self, table: &[u32]) -> Result<()> {
        let bytes = self
            .encoder
            .encode_offset_table(&mut self.to, table)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += bytes as u64;
        Ok(())
    }

    /// Write the given bytes directly to the inner writer.
    ///
    /// Note that this method
    /// (unlike [`write_bytes`](StatefulEncoder::write_bytes))
    /// does not perform any additional padding.
    pub fn write_raw_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.to.write_all(bytes).context(WriteValueDataSnafu {
            position: self.bytes_written,
        })?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Write a value as a bunch of bytes directly to the inner writer,
    /// padding it with `pad` to an even number of bytes.
    pub fn write_bytes(&mut self, bytes: &[u8], pad: u8) -> Result<()> {
        self.write_raw_bytes(bytes)?;
        if bytes.len() % 2 != 0 {
            self.write_raw_bytes(&[pad])?;
        }
        Ok(())
    }

    /// Write the value of a primitive element whose header
    /// was already written.
    ///
    /// Binary values are converted to the byte order of the encoder,
    /// and odd-length values are padded according to the header's VR.
    pub fn write_primitive_value(
        &mut self,
        de: &DataElementHeader,
        value: &PrimitiveValue,
    ) -> Result<()> {
        let word_size = de.vr().word_size();
        let bytes = if self.encoder.endianness() == Endianness::Big && word_size > 1 {
            let mut data = value.as_bytes().to_vec();
            swap_words(&mut data, word_size);
            Cow::Owned(data)
        } else {
            Cow::Borrowed(value.as_bytes())
        };
        self.write_bytes(&bytes, de.vr().padding())
    }

    /// Encode and write a data element with a primitive value.
    ///
    /// The length property of the header is ignored,
    /// the padded byte length of the value is used instead.
    pub fn encode_primitive_element(
        &mut self,
        de: &DataElementHeader,
        value: &PrimitiveValue,
    ) -> Result<()> {
        let header = DataElementHeader::new(de.tag, de.vr, Length(value.len() as u32));
        self.encode_element_header(header)?;
        self.write_primitive_value(&header, value)
    }

    /// Flush the inner writer.
    pub fn flush(&mut self) -> Result<()> {
        self.to.flush().context(WriteValueDataSnafu {
            position: self.bytes_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::StatefulEncoder;
    use dcmkit_core::{DataElementHeader, Length, PrimitiveValue, Tag, VR};
    use dcmkit_encoding::encode::explicit_be::ExplicitVRBigEndianEncoder;
    use dcmkit_encoding::encode::explicit_le::ExplicitVRLittleEndianEncoder;
    use dcmkit_encoding::encode::EncoderFor;

    /// Odd lengthed values are padded with a space (PN)
    #[test]
    fn encode_odd_length_element_pn() {
        let header = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(9));
        let value = PrimitiveValue::from("Dall^John");
        let mut out: Vec<u8> = Vec::new();

        {
            let mut encoder = StatefulEncoder::new(
                &mut out,
                EncoderFor::new(ExplicitVRLittleEndianEncoder::default()),
            );
            encoder.encode_primitive_element(&header, &value).unwrap();
            assert_eq!(encoder.bytes_written(), 18);
        }

        #[rustfmt::skip]
        assert_eq!(&out, &[
            0x10, 0x00, 0x10, 0x00, // tag
            b'P', b'N', // VR
            0x0A, 0x00, // length
            // ---------- value ----------
            b'D', b'a', b'l', b'l', b'^', b'J', b'o', b'h', b'n', b' ',
        ]);
    }

    /// Odd lengthed values are padded with NUL (UIDs)
    #[test]
    fn encode_odd_length_element_uid() {
        let header = DataElementHeader::new(Tag(0x0008, 0x0018), VR::UI, Length(7));
        let value = PrimitiveValue::from("1.2.3.4");
        let mut out: Vec<u8> = Vec::new();

        {
            let mut encoder = StatefulEncoder::new(
                &mut out,
                EncoderFor::new(ExplicitVRLittleEndianEncoder::default()),
            );
            encoder.encode_primitive_element(&header, &value).unwrap();
        }

        #[rustfmt::skip]
        assert_eq!(&out, &[
            0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x08, 0x00,
            b'1', b'.', b'2', b'.', b'3', b'.', b'4', 0x00,
        ]);
    }

    /// Odd lengthed item values are encoded with even padding
    #[test]
    fn encode_odd_length_item_bytes() {
        let mut out: Vec<u8> = Vec::new();

        {
            let mut encoder = StatefulEncoder::new(
                &mut out,
                EncoderFor::new(ExplicitVRLittleEndianEncoder::default()),
            );
            encoder.encode_item_header(9).unwrap();
            encoder.write_bytes(&[5; 9], 0).unwrap();
            assert_eq!(encoder.bytes_written(), 18);
        }

        #[rustfmt::skip]
        assert_eq!(&out, &[
            0xFE, 0xFF, 0x00, 0xE0, // tag (0xFFFE, 0xE000)
            0x0A, 0x00, 0x00, 0x00, // length
            // ---------- value ----------
            5, 5, 5, 5, 5, 5, 5, 5, 5, 0,
        ]);
    }

    #[test]
    fn big_endian_output_swaps_words() {
        let header = DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(2));
        let value = PrimitiveValue::from_u16s(&[512]);
        let mut out: Vec<u8> = Vec::new();

        {
            let mut encoder = StatefulEncoder::new(
                &mut out,
                EncoderFor::new(ExplicitVRBigEndianEncoder::default()),
            );
            encoder.encode_primitive_element(&header, &value).unwrap();
        }

        #[rustfmt::skip]
        assert_eq!(&out, &[
            0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02,
            0x02, 0x00,
        ]);
    }
}
