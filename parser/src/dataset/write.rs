//! A stateful device for printing a DICOM data set in sequential order,
//! the counterpart of [`DataSetReader`](super::DataSetReader).
//!
//! The writer consumes [`DataToken`]s and turns them into bytes
//! in the given transfer syntax.
//! Sequence and item delimiters are only written
//! for sequences and items of undefined length.
use crate::dataset::{DataToken, SeqTokenType};
use crate::stateful::encode::{Error as EncoderError, StatefulEncoder};
use dcmkit_core::{DataElementHeader, Length, Tag, VR};
use dcmkit_encoding::encode::EncodeTo;
use dcmkit_encoding::transfer_syntax::DynEncoder;
use dcmkit_encoding::TransferSyntax;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Unsupported transfer syntax for encoding
    #[snafu(display("Unsupported transfer syntax {} ({})", ts_uid, ts_alias))]
    UnsupportedTransferSyntax {
        ts_uid: &'static str,
        ts_alias: &'static str,
        backtrace: Backtrace,
    },
    /// Unexpected token
    #[snafu(display("Unexpected token {}", token))]
    UnexpectedToken {
        token: DataToken,
        backtrace: Backtrace,
    },
    WriteHeader {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    WriteItemHeader {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    WriteItemDelimiter {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    WriteSequenceDelimiter {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    WriteOffsetTable {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    WriteValue {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    FlushOutput {
        #[snafu(backtrace)]
        source: EncoderError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// How sequences and items are delimited in the output.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum SequenceLengthStrategy {
    /// Write the lengths declared by the incoming tokens,
    /// emitting delimiters only where a length is undefined.
    #[default]
    Explicit,
    /// Write every data set sequence and item with undefined length,
    /// closed by the respective delimiter.
    Undefined,
}

/// The set of options for the data set writer.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct DataSetWriterOptions {
    /// the strategy for encoding sequence and item lengths
    pub sequence_length: SequenceLengthStrategy,
}

impl DataSetWriterOptions {
    /// Replace the sequence length strategy of the options.
    pub fn sequence_length(mut self, sequence_length: SequenceLengthStrategy) -> Self {
        self.sequence_length = sequence_length;
        self
    }
}

/// A token representing a sequence or item start.
#[derive(Debug)]
struct SeqToken {
    /// Whether it is the start of a sequence or the start of an item.
    typ: SeqTokenType,
    /// The length of the value as written to the output,
    /// can be unknown.
    len: Length,
    /// Whether it belongs to an encapsulated pixel data element.
    pixel_data: bool,
}

/// A stateful device for printing a DICOM data set in sequential order.
/// This is analogous to the [`DataSetReader`](super::DataSetReader) type
/// for converting data set tokens to bytes.
#[derive(Debug)]
pub struct DataSetWriter<W, E> {
    printer: StatefulEncoder<W, E>,
    options: DataSetWriterOptions,
    seq_tokens: Vec<SeqToken>,
    last_de: Option<DataElementHeader>,
    /// the next pixel item is the basic offset table
    offset_table_next: bool,
    /// the basic offset table item header was deferred
    offset_table_pending: bool,
}

impl<'w, W: 'w> DataSetWriter<W, DynEncoder<'w, W>>
where
    W: Write,
{
    /// Create a data set writer for the given transfer syntax.
    pub fn with_ts(to: W, ts: &TransferSyntax) -> Result<Self> {
        Self::with_ts_options(to, ts, DataSetWriterOptions::default())
    }

    /// Create a data set writer for the given transfer syntax
    /// and writer options.
    pub fn with_ts_options(
        to: W,
        ts: &TransferSyntax,
        options: DataSetWriterOptions,
    ) -> Result<Self> {
        let encoder = ts.encoder_for().context(UnsupportedTransferSyntaxSnafu {
            ts_uid: ts.uid(),
            ts_alias: ts.name(),
        })?;
        Ok(DataSetWriter::new_with_options(to, encoder, options))
    }
}

impl<W, E> DataSetWriter<W, E> {
    pub fn new(to: W, encoder: E) -> Self {
        Self::new_with_options(to, encoder, DataSetWriterOptions::default())
    }

    pub fn new_with_options(to: W, encoder: E, options: DataSetWriterOptions) -> Self {
        DataSetWriter {
            printer: StatefulEncoder::new(to, encoder),
            options,
            seq_tokens: Vec::new(),
            last_de: None,
            offset_table_next: false,
            offset_table_pending: false,
        }
    }

    /// Retrieve the number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.printer.bytes_written()
    }
}

impl<W, E> DataSetWriter<W, E>
where
    W: Write,
    E: EncodeTo<W>,
{
    /// Feed the given sequence of tokens which are part of the same data set.
    #[inline]
    pub fn write_sequence<I>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = DataToken>,
    {
        for token in tokens {
            self.write(token)?;
        }

        Ok(())
    }

    /// Feed the given data set token for writing the data set.
    pub fn write(&mut self, token: DataToken) -> Result<()> {
        // adjust the logic of sequence printing:
        // explicit length sequences or items should not print
        // the respective delimiter
        match token {
            DataToken::SequenceStart { tag, len } => {
                let len = self.effective_len(len);
                self.seq_tokens.push(SeqToken {
                    typ: SeqTokenType::Sequence,
                    len,
                    pixel_data: false,
                });
                self.printer
                    .encode_element_header(DataElementHeader::new(tag, VR::SQ, len))
                    .context(WriteHeaderSnafu)
            }
            DataToken::PixelSequenceStart => {
                self.seq_tokens.push(SeqToken {
                    typ: SeqTokenType::Sequence,
                    len: Length::UNDEFINED,
                    pixel_data: true,
                });
                self.offset_table_next = true;
                self.printer
                    .encode_element_header(DataElementHeader::new(
                        Tag(0x7FE0, 0x0010),
                        VR::OB,
                        Length::UNDEFINED,
                    ))
                    .context(WriteHeaderSnafu)
            }
            DataToken::ItemStart { len } if self.in_pixel_sequence() => {
                self.seq_tokens.push(SeqToken {
                    typ: SeqTokenType::Item,
                    len,
                    pixel_data: true,
                });
                if self.offset_table_next {
                    // written together with the table
                    self.offset_table_next = false;
                    self.offset_table_pending = true;
                    return Ok(());
                }
                self.printer
                    .encode_item_header(len.0)
                    .context(WriteItemHeaderSnafu)
            }
            DataToken::ItemStart { len } => {
                let len = self.effective_len(len);
                self.seq_tokens.push(SeqToken {
                    typ: SeqTokenType::Item,
                    len,
                    pixel_data: false,
                });
                self.printer
                    .encode_item_header(len.0)
                    .context(WriteItemHeaderSnafu)
            }
            DataToken::OffsetTable(table) if self.offset_table_pending => {
                self.offset_table_pending = false;
                self.printer
                    .encode_offset_table(&table)
                    .context(WriteOffsetTableSnafu)
            }
            DataToken::ItemEnd => {
                if self.offset_table_pending {
                    self.offset_table_pending = false;
                    self.printer
                        .encode_offset_table(&[])
                        .context(WriteOffsetTableSnafu)?;
                }
                // only write if it's an unknown length item
                match self.seq_tokens.pop() {
                    Some(SeqToken {
                        typ: SeqTokenType::Item,
                        len,
                        ..
                    }) => {
                        if len.is_undefined() {
                            self.printer
                                .encode_item_delimiter()
                                .context(WriteItemDelimiterSnafu)?;
                        }
                        Ok(())
                    }
                    _ => UnexpectedTokenSnafu { token }.fail(),
                }
            }
            DataToken::SequenceEnd => {
                // only write if it's an unknown length sequence
                match self.seq_tokens.pop() {
                    Some(SeqToken {
                        typ: SeqTokenType::Sequence,
                        len,
                        pixel_data,
                    }) => {
                        if pixel_data && self.offset_table_next {
                            // empty pixel sequences still carry an offset table
                            self.offset_table_next = false;
                            self.printer
                                .encode_offset_table(&[])
                                .context(WriteOffsetTableSnafu)?;
                        }
                        if len.is_undefined() {
                            self.printer
                                .encode_sequence_delimiter()
                                .context(WriteSequenceDelimiterSnafu)?;
                        }
                        Ok(())
                    }
                    _ => UnexpectedTokenSnafu { token }.fail(),
                }
            }
            DataToken::ElementHeader(header) => {
                self.printer
                    .encode_element_header(header)
                    .context(WriteHeaderSnafu)?;
                self.last_de = Some(header);
                Ok(())
            }
            DataToken::PrimitiveValue(ref value) => {
                let header = match self.last_de.take() {
                    Some(header) => header,
                    None => return UnexpectedTokenSnafu { token }.fail(),
                };
                self.printer
                    .write_primitive_value(&header, value)
                    .context(WriteValueSnafu)
            }
            DataToken::ItemValue(ref data) if self.in_pixel_sequence() => self
                .printer
                .write_bytes(data, 0)
                .context(WriteValueSnafu),
            token @ DataToken::ItemValue(_) | token @ DataToken::OffsetTable(_) => {
                UnexpectedTokenSnafu { token }.fail()
            }
        }
    }

    /// Flush the inner writer.
    pub fn flush(&mut self) -> Result<()> {
        self.printer.flush().context(FlushOutputSnafu)
    }

    fn in_pixel_sequence(&self) -> bool {
        matches!(
            self.seq_tokens.last(),
            Some(SeqToken {
                pixel_data: true,
                ..
            })
        )
    }

    fn effective_len(&self, len: Length) -> Length {
        match self.options.sequence_length {
            SequenceLengthStrategy::Explicit => len,
            SequenceLengthStrategy::Undefined => Length::UNDEFINED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::DataToken;
    use super::{DataSetWriter, DataSetWriterOptions, Error, SequenceLengthStrategy};
    use dcmkit_core::{
        header::{DataElementHeader, Length},
        value::PrimitiveValue,
        Tag, VR,
    };
    use dcmkit_encoding::encode::explicit_le::ExplicitVRLittleEndianEncoder;
    use dcmkit_encoding::encode::EncoderFor;

    fn write_tokens<I>(tokens: I, options: DataSetWriterOptions) -> Vec<u8>
    where
        I: IntoIterator<Item = DataToken>,
    {
        let mut raw_out: Vec<u8> = vec![];
        let encoder = EncoderFor::new(ExplicitVRLittleEndianEncoder::default());
        let mut dset_writer = DataSetWriter::new_with_options(&mut raw_out, encoder, options);

        dset_writer.write_sequence(tokens).unwrap();

        raw_out
    }

    fn validate_dataset_writer<I>(tokens: I, ground_truth: &[u8])
    where
        I: IntoIterator<Item = DataToken>,
    {
        let raw_out = write_tokens(tokens, Default::default());
        assert_eq!(raw_out, ground_truth);
    }

    fn region_sequence_tokens(seq_len: Length, item_lens: [Length; 2]) -> Vec<DataToken> {
        vec![
            DataToken::SequenceStart {
                tag: Tag(0x0018, 0x6011),
                len: seq_len,
            },
            DataToken::ItemStart { len: item_lens[0] },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6012),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from_u16s(&[1])),
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6014),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from_u16s(&[2])),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: item_lens[1] },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6012),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from_u16s(&[4])),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("TEST")),
        ]
    }

    #[test]
    fn write_sequence_explicit() {
        let tokens = region_sequence_tokens(Length(46), [Length(20), Length(10)]);

        #[rustfmt::skip]
        static GROUND_TRUTH: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, // sequence tag: (0018,6011) SequenceOfUltrasoundRegions
            b'S', b'Q', // VR
            0x00, 0x00, // reserved
            0x2e, 0x00, 0x00, 0x00, // length: 28 + 18 = 46 (#= 2)
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x14, 0x00, 0x00, 0x00, // item length: 20 (#= 2)
            // -- 20 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 1
            // -- 30 --
            0x18, 0x00, 0x14, 0x60, b'U', b'S', 0x02, 0x00, 0x02, 0x00, // (0018, 6014) RegionDataType, len = 2, value = 2
            // -- 40 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x0a, 0x00, 0x00, 0x00, // item length: 10 (#= 1)
            // -- 48 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x04, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 4
            // -- 58 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        validate_dataset_writer(tokens, GROUND_TRUTH);
    }

    #[test]
    fn write_sequence_implicit_length() {
        let tokens = region_sequence_tokens(
            Length::UNDEFINED,
            [Length::UNDEFINED, Length::UNDEFINED],
        );

        #[rustfmt::skip]
        static GROUND_TRUTH: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, // sequence tag: (0018,6011) SequenceOfUltrasoundRegions
            b'S', b'Q', // VR
            0x00, 0x00, // reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0xff, 0xff, 0xff, 0xff, // item length: undefined
            // -- 20 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 1
            // -- 30 --
            0x18, 0x00, 0x14, 0x60, b'U', b'S', 0x02, 0x00, 0x02, 0x00, // (0018, 6014) RegionDataType, len = 2, value = 2
            // -- 40 --
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
            // -- 48 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0xff, 0xff, 0xff, 0xff, // item length: undefined
            // -- 56 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x04, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 4
            // -- 66 --
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
            // -- 74 --
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00, // sequence end
            // -- 82 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        validate_dataset_writer(tokens.clone(), GROUND_TRUTH);

        // forcing undefined lengths yields the same output from explicit tokens
        let out = write_tokens(
            region_sequence_tokens(Length(46), [Length(20), Length(10)]),
            DataSetWriterOptions::default().sequence_length(SequenceLengthStrategy::Undefined),
        );
        assert_eq!(out, GROUND_TRUTH);
    }

    #[test]
    fn write_encapsulated_pixeldata() {
        let tokens = vec![
            DataToken::PixelSequenceStart,
            DataToken::ItemStart { len: Length(4) },
            DataToken::OffsetTable(vec![16]),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(4) },
            DataToken::ItemValue(vec![0x99; 4]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];

        #[rustfmt::skip]
        static GROUND_TRUTH: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0, 0010) PixelData
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 -- Basic offset table
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x04, 0x00, 0x00, 0x00, // item length: 4
            // -- 20 -- item value
            0x10, 0x00, 0x00, 0x00, // 16
            // -- 24 -- First fragment of pixel data
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x04, 0x00, 0x00, 0x00, // item length: 4
            // -- 32 -- Compressed Fragment
            0x99, 0x99, 0x99, 0x99,
            // -- 36 -- End of pixel data
            0xfe, 0xff, 0xdd, 0xe0, // sequence end tag
            0x00, 0x00, 0x00, 0x00,
        ];

        validate_dataset_writer(tokens, GROUND_TRUTH);
    }

    #[test]
    fn write_encapsulated_pixeldata_empty_offset_table() {
        let tokens = vec![
            DataToken::PixelSequenceStart,
            DataToken::ItemStart { len: Length(0) },
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(2) },
            DataToken::ItemValue(vec![0x42; 2]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];

        #[rustfmt::skip]
        static GROUND_TRUTH: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, b'O', b'B', 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0x00, 0xe0, 0x02, 0x00, 0x00, 0x00,
            0x42, 0x42,
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];

        validate_dataset_writer(tokens, GROUND_TRUTH);
    }

    #[test]
    fn unbalanced_tokens_are_rejected() {
        let mut raw_out: Vec<u8> = vec![];
        let encoder = EncoderFor::new(ExplicitVRLittleEndianEncoder::default());
        let mut dset_writer = DataSetWriter::new(&mut raw_out, encoder);

        let err = dset_writer.write(DataToken::SequenceEnd).unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));

        let err = dset_writer
            .write(DataToken::PrimitiveValue(PrimitiveValue::from("X")))
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));
    }
}
