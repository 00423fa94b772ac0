//! This module contains a mid-level abstraction for reading DICOM content
//! sequentially.
//!
//! The rest of the crate is used to obtain DICOM element headers and values.
//! At this level, headers and values are treated as tokens which can be used
//! to form a syntax tree of a full data set.
//!
//! The reader keeps an explicit stack of the sequences and items
//! currently open, so nesting depth never translates into recursion.
use crate::stateful::decode::{DynStatefulDecoder, Error as DecoderError, StatefulDecode};
use dcmkit_core::header::{DataElementHeader, Header, Length, SequenceItemHeader};
use dcmkit_core::{Tag, VR};
use dcmkit_encoding::transfer_syntax::TransferSyntax;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::Read;
use std::iter::Iterator;

use super::{DataToken, SeqTokenType};

/// The default maximum number of nested sequences.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not create decoder"))]
    CreateDecoder {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read item header"))]
    ReadItemHeader {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read element header"))]
    ReadHeader {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read {} value bytes for element tagged {}", len, tag))]
    ReadValue {
        len: u32,
        tag: Tag,
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read {} bytes for item value", len))]
    ReadItemValue {
        len: u32,
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display(
        "Inconsistent sequence end: expected end at {} bytes but read {}",
        end_of_sequence,
        bytes_read
    ))]
    InconsistentSequenceEnd {
        end_of_sequence: u64,
        bytes_read: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected item tag {} while reading element header", tag))]
    UnexpectedItemTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Undefined pixel item length at position {}", position))]
    UndefinedItemLength { position: u64, backtrace: Backtrace },
    #[snafu(display(
        "Data ended at position {} with {} sequence(s) or item(s) still open",
        position,
        open
    ))]
    UnterminatedSequence {
        position: u64,
        open: usize,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Sequence {} at position {} exceeds the maximum nesting depth of {}",
        tag,
        position,
        max_depth
    ))]
    DepthExceeded {
        tag: Tag,
        position: u64,
        max_depth: u32,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Element {} at position {} has an odd value length {}",
        tag,
        position,
        len
    ))]
    OddValueLength {
        tag: Tag,
        position: u64,
        len: u32,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A sequence or item which the reader has entered but not yet left.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Scope {
    kind: SeqTokenType,
    /// declared length of the content, possibly undefined
    len: Length,
    /// inside encapsulated pixel data
    pixel_data: bool,
    /// decoder position at the start of the content
    start: u64,
}

impl Scope {
    /// The position right past the content, if the length is defined.
    fn end(&self) -> Option<u64> {
        self.len.get().map(|len| self.start + u64::from(len))
    }

    /// Whether this scope adds a level of data set nesting.
    fn is_nested_data_set(&self) -> bool {
        self.kind == SeqTokenType::Sequence && !self.pixel_data
    }
}

/// How to handle primitive elements with an odd value length.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum OddLengthStrategy {
    /// Reject the element with [`Error::OddValueLength`].
    #[default]
    Fail,
    /// Read the declared number of bytes as they are.
    Accept,
}

/// The set of options for the data set reader.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct DataSetReaderOptions {
    /// the position of the reader as received at building time
    pub base_offset: u64,
    /// the maximum number of nested sequences
    pub max_depth: u32,
    /// the policy for odd value lengths
    pub odd_length: OddLengthStrategy,
}

impl Default for DataSetReaderOptions {
    fn default() -> Self {
        DataSetReaderOptions {
            base_offset: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            odd_length: OddLengthStrategy::default(),
        }
    }
}

impl DataSetReaderOptions {
    /// Replace the base reader offset of the options.
    pub fn base_offset(mut self, base_offset: u64) -> Self {
        self.base_offset = base_offset;
        self
    }

    /// Replace the maximum nesting depth of the options.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the odd length policy of the options.
    pub fn odd_length(mut self, odd_length: OddLengthStrategy) -> Self {
        self.odd_length = odd_length;
        self
    }
}

/// A higher-level reader for retrieving structure in a DICOM data set from an
/// arbitrary data source.
///
/// Iterating yields [`DataToken`]s in file order.
/// After the first error, the iterator is fused.
#[derive(Debug)]
pub struct DataSetReader<S> {
    decoder: S,
    options: DataSetReaderOptions,
    /// at sequence level, so an item header or sequence delimiter comes next
    expect_item: bool,
    /// the next pixel data fragment is the basic offset table
    offset_table_next: bool,
    /// the innermost scope may have reached its declared end
    check_end: bool,
    /// sequences and items entered, innermost last
    scopes: Vec<Scope>,
    /// number of open data set sequences
    depth: u32,
    fused: bool,
    /// header whose value is to be read next
    pending_header: Option<DataElementHeader>,
}

impl<'s> DataSetReader<DynStatefulDecoder<'s>> {
    /// Create a new data set reader over the given source,
    /// decoding it with the given transfer syntax.
    #[inline]
    pub fn new_with_ts<R>(source: R, ts: &TransferSyntax) -> Result<Self>
    where
        R: Read + 's,
    {
        Self::new_with_ts_options(source, ts, Default::default())
    }

    /// Create a new data set reader over the given source,
    /// decoding it with the given transfer syntax and options.
    pub fn new_with_ts_options<R>(
        source: R,
        ts: &TransferSyntax,
        options: DataSetReaderOptions,
    ) -> Result<Self>
    where
        R: Read + 's,
    {
        let decoder = DynStatefulDecoder::new_with(source, ts, options.base_offset)
            .context(CreateDecoderSnafu)?;
        Ok(DataSetReader::new(decoder, options))
    }
}

impl<S> DataSetReader<S> {
    /// Create a new iterator with the given stateful decoder and options.
    pub fn new(decoder: S, options: DataSetReaderOptions) -> Self {
        DataSetReader {
            decoder,
            options,
            expect_item: false,
            offset_table_next: false,
            check_end: false,
            scopes: Vec::new(),
            depth: 0,
            fused: false,
            pending_header: None,
        }
    }

    pub fn options(&self) -> &DataSetReaderOptions {
        &self.options
    }

    /// Unwrap the reader, returning the underlying stateful decoder.
    pub fn into_decoder(self) -> S {
        self.decoder
    }
}

impl<S> Iterator for DataSetReader<S>
where
    S: StatefulDecode,
{
    type Item = Result<DataToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let token = self.next_token();
        if matches!(token, Some(Err(_))) {
            self.fused = true;
        }
        token
    }
}

impl<S> DataSetReader<S>
where
    S: StatefulDecode,
{
    /// Retrieve the current position of the underlying decoder.
    pub fn position(&self) -> u64 {
        self.decoder.position()
    }

    fn next_token(&mut self) -> Option<Result<DataToken>> {
        if self.check_end {
            match self.close_finished_scope() {
                Ok(None) => {}
                Ok(Some(token)) => return Some(Ok(token)),
                Err(e) => return Some(Err(e)),
            }
        }

        if self.expect_item {
            return Some(self.read_item_start());
        }

        match self.scopes.last() {
            Some(scope) if scope.kind == SeqTokenType::Item && scope.pixel_data => {
                let len = scope.len;
                return Some(self.read_fragment(len));
            }
            _ => {}
        }

        if let Some(header) = self.pending_header.take() {
            return Some(self.read_pending_value(header));
        }

        self.read_header().transpose()
    }

    /// Read the next element header at data set level.
    ///
    /// Returns `None` when the source ends cleanly between elements.
    fn read_header(&mut self) -> Result<Option<DataToken>> {
        loop {
            let position = self.decoder.position();
            let header = match self.decoder.decode_header() {
                Ok(header) => header,
                Err(e) if e.is_end_of_source() => {
                    ensure!(
                        self.scopes.is_empty(),
                        UnterminatedSequenceSnafu {
                            position,
                            open: self.scopes.len(),
                        }
                    );
                    self.fused = true;
                    return Ok(None);
                }
                Err(e) => return Err(e).context(ReadHeaderSnafu),
            };

            match header.tag {
                Tag(0xFFFE, 0xE00D) if self.scopes.is_empty() => {
                    tracing::warn!(
                        "Item delimitation item outside of a sequence in position {}",
                        position
                    );
                }
                Tag(0xFFFE, 0xE00D) => {
                    self.close_scope();
                    self.expect_item = true;
                    self.check_end = true;
                    return Ok(Some(DataToken::ItemEnd));
                }
                Tag(0xFFFE, 0xE0DD) => {
                    tracing::warn!(
                        "Sequence delimitation item outside of a sequence in position {}",
                        position
                    );
                }
                _ if header.is_encapsulated_pixeldata() => {
                    self.pending_header = Some(header);
                    return Ok(Some(DataToken::PixelSequenceStart));
                }
                // any other element of undefined length is read as a sequence
                _ if header.vr == VR::SQ || header.len.is_undefined() => {
                    let DataElementHeader { tag, len, .. } = header;
                    self.enter_sequence(tag, len, position)?;
                    return Ok(Some(DataToken::SequenceStart { tag, len }));
                }
                _ => {
                    if let Some(len) = header.len.get() {
                        ensure!(
                            len % 2 == 0 || self.options.odd_length == OddLengthStrategy::Accept,
                            OddValueLengthSnafu {
                                tag: header.tag,
                                position,
                                len,
                            }
                        );
                    }
                    self.pending_header = Some(header);
                    return Ok(Some(DataToken::ElementHeader(header)));
                }
            }
        }
    }

    fn read_pending_value(&mut self, header: DataElementHeader) -> Result<DataToken> {
        if header.is_encapsulated_pixeldata() {
            return self.read_pixel_sequence_start();
        }
        let value = self.decoder.read_value(&header).context(ReadValueSnafu {
            len: header.len.0,
            tag: header.tag,
        })?;
        self.check_end = true;
        Ok(DataToken::PrimitiveValue(value))
    }

    /// Read the content of the current pixel data item.
    fn read_fragment(&mut self, len: Length) -> Result<DataToken> {
        let len = len.get().context(UndefinedItemLengthSnafu {
            position: self.decoder.position(),
        })?;
        self.check_end = true;

        if std::mem::take(&mut self.offset_table_next) {
            let mut offset_table = Vec::new();
            self.decoder
                .read_u32_to_vec(len, &mut offset_table)
                .context(ReadItemValueSnafu { len })?;
            Ok(DataToken::OffsetTable(offset_table))
        } else {
            let mut fragment = Vec::new();
            self.decoder
                .read_to_vec(len, &mut fragment)
                .context(ReadItemValueSnafu { len })?;
            Ok(DataToken::ItemValue(fragment))
        }
    }

    /// Decode an item header, or fail if the data ends first.
    fn next_item_header(&mut self) -> Result<SequenceItemHeader> {
        let position = self.decoder.position();
        match self.decoder.decode_item_header() {
            Ok(header) => Ok(header),
            Err(e) if e.is_end_of_source() || e.is_truncation() => UnterminatedSequenceSnafu {
                position,
                open: self.scopes.len(),
            }
            .fail(),
            Err(e) => Err(e).context(ReadItemHeaderSnafu),
        }
    }

    /// Read what follows at sequence level:
    /// either a new item or the end of the sequence.
    fn read_item_start(&mut self) -> Result<DataToken> {
        loop {
            let position = self.decoder.position();
            match self.next_item_header()? {
                SequenceItemHeader::Item { len } => {
                    self.expect_item = false;
                    let pixel_data = self.scopes.last().map_or(false, |s| s.pixel_data);
                    self.open_scope(SeqTokenType::Item, len, pixel_data);
                    if len == Length(0) {
                        self.check_end = true;
                    }
                    return Ok(DataToken::ItemStart { len });
                }
                SequenceItemHeader::ItemDelimiter => {
                    // no item to close here
                    tracing::warn!(
                        "Item delimitation item between sequence items in position {}",
                        position
                    );
                }
                SequenceItemHeader::SequenceDelimiter => {
                    self.close_scope();
                    self.expect_item = false;
                    self.check_end = true;
                    return Ok(DataToken::SequenceEnd);
                }
            }
        }
    }

    fn read_pixel_sequence_start(&mut self) -> Result<DataToken> {
        self.open_scope(SeqTokenType::Sequence, Length::UNDEFINED, true);

        match self.next_item_header()? {
            SequenceItemHeader::Item { len } => {
                self.expect_item = false;
                self.open_scope(SeqTokenType::Item, len, true);
                // the first item holds the basic offset table
                if len == Length(0) {
                    self.check_end = true;
                } else {
                    self.offset_table_next = true;
                }
                Ok(DataToken::ItemStart { len })
            }
            SequenceItemHeader::SequenceDelimiter => {
                self.close_scope();
                self.expect_item = false;
                self.check_end = true;
                Ok(DataToken::SequenceEnd)
            }
            item => UnexpectedItemTagSnafu { tag: item.tag() }.fail(),
        }
    }

    fn enter_sequence(&mut self, tag: Tag, len: Length, position: u64) -> Result<()> {
        let max_depth = self.options.max_depth;
        ensure!(
            self.depth < max_depth,
            DepthExceededSnafu {
                tag,
                position,
                max_depth,
            }
        );
        self.expect_item = true;
        self.open_scope(SeqTokenType::Sequence, len, false);
        if len == Length(0) {
            self.check_end = true;
        }
        Ok(())
    }

    /// Close the innermost scope if its defined length has been consumed.
    fn close_finished_scope(&mut self) -> Result<Option<DataToken>> {
        let bytes_read = self.decoder.position();
        if let Some(scope) = self.scopes.last().copied() {
            if let Some(end_of_sequence) = scope.end() {
                ensure!(
                    end_of_sequence >= bytes_read,
                    InconsistentSequenceEndSnafu {
                        end_of_sequence,
                        bytes_read,
                    }
                );
                if end_of_sequence == bytes_read {
                    self.close_scope();
                    // leaving an item goes back to sequence level
                    self.expect_item = scope.kind == SeqTokenType::Item;
                    return Ok(Some(match scope.kind {
                        SeqTokenType::Sequence => DataToken::SequenceEnd,
                        SeqTokenType::Item => DataToken::ItemEnd,
                    }));
                }
            }
        }
        self.check_end = false;
        Ok(None)
    }

    fn open_scope(&mut self, kind: SeqTokenType, len: Length, pixel_data: bool) {
        let scope = Scope {
            kind,
            len,
            pixel_data,
            start: self.decoder.position(),
        };
        if scope.is_nested_data_set() {
            self.depth += 1;
        }
        self.scopes.push(scope);
    }

    fn close_scope(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            if scope.is_nested_data_set() {
                self.depth -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSetReader, DataToken, Error, OddLengthStrategy, StatefulDecode};
    use crate::stateful::decode::StatefulDecoder;
    use dcmkit_core::header::{DataElementHeader, Length};
    use dcmkit_core::value::PrimitiveValue;
    use dcmkit_core::{Tag, VR};
    use dcmkit_encoding::decode::basic::LittleEndianBasicDecoder;
    use dcmkit_encoding::decode::{
        explicit_le::ExplicitVRLittleEndianDecoder, implicit_le::ImplicitVRLittleEndianDecoder,
    };

    fn validate_dataset_reader_implicit_vr<I>(data: &[u8], ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
    {
        let mut cursor = data;
        let parser = StatefulDecoder::new(
            &mut cursor,
            ImplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
        );

        validate_dataset_reader(data, parser, ground_truth)
    }

    fn validate_dataset_reader_explicit_vr<I>(data: &[u8], ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
    {
        let mut cursor = data;
        let parser = StatefulDecoder::new(
            &mut cursor,
            ExplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
        );

        validate_dataset_reader(data, parser, ground_truth)
    }

    fn validate_dataset_reader<I, D>(data: &[u8], parser: D, ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
        D: StatefulDecode,
    {
        let mut dset_reader = DataSetReader::new(parser, Default::default());

        let iter = &mut dset_reader;
        let ground_truth = ground_truth.into_iter();

        for gt_token in ground_truth {
            let token = iter
                .next()
                .expect("expecting more tokens from reader")
                .expect("should fetch the next token without an error");
            assert_eq!(
                token, gt_token,
                "Got token {:2?} ; but expected {:2?}",
                token, gt_token
            );
        }

        let extra: Vec<_> = iter.collect();
        assert_eq!(
            extra.len(), // we have already read all of them
            0,
            "extraneous tokens remaining: {:?}",
            extra,
        );
        assert_eq!(
            dset_reader.position(),
            data.len() as u64,
            "Decoder position did not match end of data",
        );
    }

    fn explicit_reader(data: &[u8]) -> DataSetReader<impl StatefulDecode + '_> {
        explicit_reader_with(data, Default::default())
    }

    fn explicit_reader_with(
        data: &[u8],
        options: super::DataSetReaderOptions,
    ) -> DataSetReader<impl StatefulDecode + '_> {
        let parser = StatefulDecoder::new(
            Box::new(data),
            ExplicitVRLittleEndianDecoder::default(),
            LittleEndianBasicDecoder,
        );
        DataSetReader::new(parser, options)
    }

    #[test]
    fn read_sequence_explicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
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

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0018, 0x6011),
                len: Length(46),
            },
            DataToken::ItemStart { len: Length(20) },
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
            DataToken::ItemStart { len: Length(10) },
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
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_empty_sequence_explicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // SequenceStart: (0008,2218) ; len = 0
            0x08, 0x00, 0x18, 0x22,
            b'S', b'Q', // VR: SQ
            0x00, 0x00, // Reserved
            0x00, 0x00, 0x00, 0x00, // Length: 0
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x2218),
                len: Length(0),
            },
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    /// Gracefully ignore a stray item end tag in the data set.
    #[test]
    fn ignore_trailing_item_delimitation_item() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
        ];

        let ground_truth = vec![
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("TEST")),
            // no item end
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_sequence_undefined_length() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
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
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
            // -- 38 --
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00, // sequence end
            // -- 46 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0018, 0x6011),
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6012),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from_u16s(&[1])),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("TEST")),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_implicit_len_sequence_implicit_vr_unknown() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x33, 0x55, 0x33, 0x55, // sequence tag: (5533,5533) «private, unknown attribute»
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 8 --
            0xfe, 0xff, 0x00, 0xe0, // item begin
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 16 --
            0xfe, 0xff, 0x0d, 0xe0, // item end
            0x00, 0x00, 0x00, 0x00, // length is always zero
            // -- 24 --
            0xfe, 0xff, 0xdd, 0xe0,
            0x00, 0x00, 0x00, 0x00, // sequence end
            // -- 32 --
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x5533, 0x5533),
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_implicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_defined_len_sequence_implicit_vr() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x40, 0x00, 0x75, 0x02, // (0040,0275) RequestAttributesSequence
            0x16, 0x00, 0x00, 0x00, // length: 22
            // -- 8 --
            0xfe, 0xff, 0x00, 0xe0, // item begin
            0x0e, 0x00, 0x00, 0x00, // length: 14
            // -- 16 --
            0x40, 0x00, 0x01, 0x10, // (0040,1001) RequestedProcedureID
            0x06, 0x00, 0x00, 0x00, // length: 6
            b'R', b'P', b'0', b'0', b'0', b'1',
            // -- 30 --
            0x10, 0x00, 0x20, 0x00, // (0010,0020) PatientID
            0x02, 0x00, 0x00, 0x00, // length: 2
            b'4', b'2',
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0040, 0x0275),
                len: Length(22),
            },
            DataToken::ItemStart { len: Length(14) },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0040, 0x1001),
                vr: VR::SH,
                len: Length(6),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("RP0001")),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0010, 0x0020),
                vr: VR::LO,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("42")),
        ];

        validate_dataset_reader_implicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_unknown_tag_implicit_vr_as_un() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x09, 0x00, 0x02, 0x10, // (0009,1002) «private, unknown attribute»
            0x04, 0x00, 0x00, 0x00, // length: 4
            b'A', b'B', b'C', b'D',
        ];

        let ground_truth = vec![
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0009, 0x1002),
                vr: VR::UN,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("ABCD")),
        ];

        validate_dataset_reader_implicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_encapsulated_pixeldata() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0, 0010) PixelData
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 -- Basic offset table
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x00, 0x00, 0x00, 0x00, // item length: 0
            // -- 20 -- First fragment of pixel data
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x20, 0x00, 0x00, 0x00, // item length: 32
            // -- 28 -- Compressed Fragment
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            // -- 60 -- End of pixel data
            0xfe, 0xff, 0xdd, 0xe0, // sequence end tag
            0x00, 0x00, 0x00, 0x00,
            // -- 68 -- padding
            0xfc, 0xff, 0xfc, 0xff, // (fffc,fffc) DataSetTrailingPadding
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0x08, 0x00, 0x00, 0x00, // length: 8
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let ground_truth = vec![
            DataToken::PixelSequenceStart,
            DataToken::ItemStart { len: Length(0) },
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(32) },
            DataToken::ItemValue(vec![0x99; 32]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader::new(
                Tag(0xfffc, 0xfffc),
                VR::OB,
                Length(8),
            )),
            DataToken::PrimitiveValue(PrimitiveValue::new(vec![0; 8])),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_encapsulated_pixeldata_with_offset_table() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
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

        let ground_truth = vec![
            DataToken::PixelSequenceStart,
            DataToken::ItemStart { len: Length(4) },
            DataToken::OffsetTable(vec![16]),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(4) },
            DataToken::ItemValue(vec![0x99; 4]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_dataset_in_dataset() {
        #[rustfmt::skip]
        const DATA: &[u8; 138] = &[
            // 0: (2001, 9000) private sequence
            0x01, 0x20, 0x00, 0x90, //
            // length: undefined
            0xFF, 0xFF, 0xFF, 0xFF, //
            // 8: Item start
            0xFE, 0xFF, 0x00, 0xE0, //
            // Item length explicit (114 bytes)
            0x72, 0x00, 0x00, 0x00, //
            // 16: (0008,1115) ReferencedSeriesSequence
            0x08, 0x00, 0x15, 0x11, //
            // length: undefined
            0xFF, 0xFF, 0xFF, 0xFF, //
            // 24: Item start
            0xFE, 0xFF, 0x00, 0xE0, //
            // Item length undefined
            0xFF, 0xFF, 0xFF, 0xFF, //
            // 32: (0008,1140) ReferencedImageSequence
            0x08, 0x00, 0x40, 0x11, //
            // length: undefined
            0xFF, 0xFF, 0xFF, 0xFF, //
            // 40: Item start
            0xFE, 0xFF, 0x00, 0xE0, //
            // Item length undefined
            0xFF, 0xFF, 0xFF, 0xFF, //
            // 48: (0008,1150) ReferencedSOPClassUID
            0x08, 0x00, 0x50, 0x11, //
            // length: 26
            0x1a, 0x00, 0x00, 0x00, //
            // Value: "1.2.840.10008.5.1.4.1.1.7\0" (SecondaryCaptureImageStorage)
            b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
            b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'7', b'\0',
            // 82: Item End (ReferencedImageSequence)
            0xFE, 0xFF, 0x0D, 0xE0, //
            0x00, 0x00, 0x00, 0x00, //
            // 90: Sequence End (ReferencedImageSequence)
            0xFE, 0xFF, 0xDD, 0xE0, //
            0x00, 0x00, 0x00, 0x00, //
            // 98: Item End (ReferencedSeriesSequence)
            0xFE, 0xFF, 0x0D, 0xE0, //
            0x00, 0x00, 0x00, 0x00, //
            // 106: Sequence End (ReferencedSeriesSequence)
            0xFE, 0xFF, 0xDD, 0xE0, //
            0x00, 0x00, 0x00, 0x00, //
            // 114: (0020,4000) ImageComments (LT)
            0x20, 0x00, 0x00, 0x40, //
            // length: 8
            0x08, 0x00, 0x00, 0x00, //
            b'I', b'D', b'E', b'N', b'T', b'I', b'T', b'Y', //
            // 130: Sequence end
            0xFE, 0xFF, 0xDD, 0xE0, //
            0x00, 0x00, 0x00, 0x00, //
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x2001, 0x9000),
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart { len: Length(114) },
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x1115),
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x1140),
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0008, 0x1150),
                vr: VR::UI,
                len: Length(26),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.7\0")),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(8),
            }),
            DataToken::PrimitiveValue(PrimitiveValue::from("IDENTITY")),
            DataToken::ItemEnd, // inserted automatically
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_implicit_vr(DATA, ground_truth);
    }

    #[test]
    fn unterminated_sequence_is_an_error() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, b'S', b'Q', 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff, // length: undefined
            0xfe, 0xff, 0x00, 0xe0,
            0xff, 0xff, 0xff, 0xff, // item length: undefined
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00,
            // no delimiters
        ];

        let tokens: Vec<_> = explicit_reader(DATA).collect();
        assert_eq!(tokens.len(), 5);
        assert!(tokens[..4].iter().all(|t| t.is_ok()));
        assert!(matches!(
            tokens[4],
            Err(Error::UnterminatedSequence { open: 2, .. })
        ));
    }

    #[test]
    fn nesting_beyond_max_depth_is_rejected() {
        // 3 nested sequences with undefined length
        let mut data = Vec::new();
        for _ in 0..3 {
            #[rustfmt::skip]
            data.extend_from_slice(&[
                0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00,
                0xff, 0xff, 0xff, 0xff,
                0xfe, 0xff, 0x00, 0xe0,
                0xff, 0xff, 0xff, 0xff,
            ]);
        }

        let tokens: Vec<_> =
            explicit_reader_with(&data, super::DataSetReaderOptions::default().max_depth(2))
                .collect();
        let err = tokens
            .into_iter()
            .find_map(|t| t.err())
            .expect("should fail");
        assert!(matches!(err, Error::DepthExceeded { max_depth: 2, .. }));
    }

    #[test]
    fn odd_value_length_policy() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x03, 0x00, // (0010,0010) PatientName, len = 3
            b'A', b'^', b'B',
        ];

        let mut reader = explicit_reader(DATA);
        assert!(matches!(
            reader.next(),
            Some(Err(Error::OddValueLength { len: 3, .. }))
        ));
        assert!(reader.next().is_none());

        let tokens: Vec<_> = explicit_reader_with(
            DATA,
            super::DataSetReaderOptions::default().odd_length(OddLengthStrategy::Accept),
        )
        .collect::<Result<_, _>>()
        .unwrap();
        assert_eq!(
            tokens,
            vec![
                DataToken::ElementHeader(DataElementHeader::new(
                    Tag(0x0010, 0x0010),
                    VR::PN,
                    Length(3)
                )),
                DataToken::PrimitiveValue(PrimitiveValue::from("A^B")),
            ]
        );
    }

    #[test]
    fn truncated_value_is_an_error() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x64, 0x00, // (0020,4000) ImageComments, len = 100
            b'T', b'E', b'S', b'T',
        ];

        let mut reader = explicit_reader(DATA);
        assert!(matches!(reader.next(), Some(Ok(DataToken::ElementHeader(_)))));
        match reader.next() {
            Some(Err(Error::ReadValue { tag, len, source, .. })) => {
                assert_eq!(tag, Tag(0x0020, 0x4000));
                assert_eq!(len, 100);
                assert!(source.is_truncation());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn bogus_offset_table_length_is_a_truncation() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, b'O', b'B', 0x00, 0x00, // (7FE0,0010) PixelData
            0xff, 0xff, 0xff, 0xff, // length: undefined
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0xf0, 0xff, 0xff, 0xff, // item length: 0xFFFFFFF0
            0x10, 0x00, 0x00, 0x00,
        ];

        let mut reader = explicit_reader(DATA);
        assert!(matches!(reader.next(), Some(Ok(DataToken::PixelSequenceStart))));
        assert!(matches!(
            reader.next(),
            Some(Ok(DataToken::ItemStart { len: Length(0xFFFF_FFF0) }))
        ));
        match reader.next() {
            Some(Err(Error::ReadItemValue { len, source, .. })) => {
                assert_eq!(len, 0xFFFF_FFF0);
                assert!(source.is_truncation());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
