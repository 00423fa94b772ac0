//! This module contains the implementation for an in-memory DICOM object.
//!
//! Use [`InMemDicomObject`] for your DICOM data set construction needs.
//! Values of this type support infallible insertion, removal, and retrieval
//! of elements by DICOM tag,
//! or name (keyword) with a data element dictionary look-up.
//!
//! If you wish to build a complete DICOM file,
//! you can start from an `InMemDicomObject`
//! and complement it with a [file meta group table](crate::meta)
//! (see [`with_meta`](InMemDicomObject::with_meta)
//! and [`with_exact_meta`](InMemDicomObject::with_exact_meta)).
//!
//! # Example
//!
//! A new DICOM data set can be built by providing a sequence of data elements.
//! Insertion and removal methods are also available.
//!
//! ```
//! # use dcmkit_core::{DataElement, VR, Tag};
//! # use dcmkit_core::value::PrimitiveValue;
//! # use dcmkit_dictionary_std::tags;
//! # use dcmkit_object::InMemDicomObject;
//! let mut obj = InMemDicomObject::from_element_iter(vec![
//!     DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "2.25.60156688944589400766024286894543900794"),
//!     // ...
//! ]);
//!
//! // continue adding elements
//! obj.put(DataElement::new(tags::MODALITY, VR::CS, "CT"));
//! assert_eq!(obj.element(tags::MODALITY).unwrap().to_str().unwrap(), "CT");
//! ```
use dcmkit_core::dictionary::DataDictionary;
use dcmkit_core::header::{HasLength, Header};
use dcmkit_core::value::{Value, C};
use dcmkit_core::{DataElement, Length, Tag, VR};
use dcmkit_dictionary_std::{tags, StandardDataDictionary};
use dcmkit_encoding::transfer_syntax::TransferSyntax;
use dcmkit_parser::dataset::{
    DataSetReader, DataSetReaderOptions, DataSetWriter, DataSetWriterOptions, DataToken,
};
use dcmkit_parser::stateful::decode::StatefulDecode;
use smallvec::SmallVec;
use snafu::{OptionExt, ResultExt};
use std::collections::btree_map::{self, BTreeMap};
use std::io::{Read, Write};

use crate::file::FileDicomObject;
use crate::meta::{FileMetaTable, FileMetaTableBuilder};
use crate::tokens::InMemObjectTokens;
use crate::{
    AccessByNameError, AccessError, BuildMetaTableSnafu, CreateParserSnafu, CreatePrinterSnafu,
    LengthMismatchSnafu, MissingElementValueSnafu, NoSuchAttributeNameSnafu,
    NoSuchDataElementTagSnafu, PrematureEndSnafu, PrintDataSetSnafu, ReadError,
    ReadTokenSnafu, ReadUnsupportedTransferSyntaxSnafu, UnexpectedTokenSnafu, WithMetaError,
    WriteError, WriteUnsupportedTransferSyntaxSnafu,
};

/// A full in-memory DICOM data element.
pub type InMemElement = DataElement<InMemDicomObject>;

/// A pixel data fragment held in memory.
pub type InMemFragment = dcmkit_core::value::InMemFragment;

type ParserResult<T> = dcmkit_parser::dataset::read::Result<T>;

/// A DICOM object that is fully contained in memory.
///
/// Elements are kept in ascending tag order,
/// and at most one element exists per tag.
///
/// See the [module-level documentation](self)
/// for more details.
#[derive(Debug, Clone)]
pub struct InMemDicomObject {
    /// the element map
    entries: BTreeMap<Tag, InMemElement>,
    /// The length of the DICOM object in bytes.
    /// It is usually undefined, unless it is part of an item
    /// in a sequence with a specified length in its item header.
    len: Length,
}

impl Default for InMemDicomObject {
    fn default() -> Self {
        InMemDicomObject::new_empty()
    }
}

/// Data sets are compared element by element.
/// The declared lengths of data sets and sequences are ignored,
/// as they depend on how the data was encoded.
impl PartialEq for InMemDicomObject {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(e1, e2)| elements_eq(e1, e2))
    }
}

fn elements_eq(e1: &InMemElement, e2: &InMemElement) -> bool {
    if e1.tag() != e2.tag() || e1.vr() != e2.vr() {
        return false;
    }
    match (e1.value(), e2.value()) {
        (Value::Sequence { items: items1, .. }, Value::Sequence { items: items2, .. }) => {
            items1 == items2
        }
        (v1, v2) => e1.length().inner_eq(e2.length()) && v1 == v2,
    }
}

impl HasLength for InMemDicomObject {
    fn length(&self) -> Length {
        self.len
    }
}

impl InMemDicomObject {
    /// Create a new empty DICOM object.
    pub fn new_empty() -> Self {
        InMemDicomObject {
            entries: BTreeMap::new(),
            len: Length::UNDEFINED,
        }
    }

    /// Construct a DICOM object from a sequence of elements.
    ///
    /// If more than one element has the same tag,
    /// the last one is kept.
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        let mut obj = InMemDicomObject::new_empty();
        for elem in iter {
            if let Some(old) = obj.put(elem) {
                tracing::debug!("Replaced duplicate element {}", old.tag());
            }
        }
        obj
    }

    /// Read an object from a data set reader,
    /// consuming all of its tokens.
    pub fn read_dataset<S>(mut reader: DataSetReader<S>) -> Result<Self, ReadError>
    where
        S: StatefulDecode,
    {
        Self::build_object(&mut reader, false, Length::UNDEFINED)
    }

    /// Read an object from a source,
    /// using the given transfer syntax.
    ///
    /// The source must be positioned at the start of the data set,
    /// after any file meta group.
    pub fn read_dataset_with_ts<S>(from: S, ts: &TransferSyntax) -> Result<Self, ReadError>
    where
        S: Read,
    {
        Self::read_dataset_with_ts_options(from, ts, DataSetReaderOptions::default())
    }

    /// Read an object from a source,
    /// using the given transfer syntax and reader options.
    ///
    /// Data set adapters of the transfer syntax (such as deflate)
    /// are applied to the source.
    pub fn read_dataset_with_ts_options<S>(
        from: S,
        ts: &TransferSyntax,
        options: DataSetReaderOptions,
    ) -> Result<Self, ReadError>
    where
        S: Read,
    {
        if !ts.fully_supported() {
            return ReadUnsupportedTransferSyntaxSnafu { uid: ts.uid() }.fail();
        }
        let from: Box<dyn Read + '_> = match ts.data_adapter() {
            Some(adapter) => adapter.adapt_reader(Box::new(from)),
            None => Box::new(from),
        };
        let reader =
            DataSetReader::new_with_ts_options(from, ts, options).context(CreateParserSnafu)?;
        Self::read_dataset(reader)
    }

    // Standard methods follow. They are not placed as a trait implementation
    // because they may require outputs to reference the lifetime of self,
    // which is not possible without GATs.

    /// The number of elements in this object.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this object has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&InMemElement, AccessError> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a particular DICOM element by its tag,
    /// or `None` if it is not present.
    pub fn element_opt(&self, tag: Tag) -> Option<&InMemElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a particular DICOM element by its name (keyword)
    /// or tag expression.
    pub fn element_by_name(&self, name: &str) -> Result<&InMemElement, AccessByNameError> {
        let tag = self.lookup_name(name)?;
        self.element(tag).map_err(|e| e.into_access_by_name(name))
    }

    /// Insert a data element to the object, replacing (and returning) any
    /// previous element of the same attribute.
    pub fn put(&mut self, elt: InMemElement) -> Option<InMemElement> {
        self.entries.insert(elt.tag(), elt)
    }

    /// Remove a DICOM element by its tag,
    /// reporting whether it was present.
    pub fn remove_element(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Remove and return a particular DICOM element by its tag.
    pub fn take_element(&mut self, tag: Tag) -> Result<InMemElement, AccessError> {
        self.entries
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Iterate over the elements of this object in ascending tag order.
    pub fn iter(&self) -> btree_map::Values<'_, Tag, InMemElement> {
        self.entries.values()
    }

    /// Iterate over the tags present in this object.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Retrieve the value of an element as a clean string,
    /// or `None` if the element is absent or not textual.
    pub(crate) fn string_value(&self, tag: Tag) -> Option<String> {
        self.element_opt(tag)
            .and_then(|e| e.to_str().ok())
            .map(|s| s.into_owned())
    }

    /// Check that every primitive element in this object
    /// (and in nested items) declares a length matching its value.
    pub fn validate_lengths(&self) -> Result<(), WriteError> {
        for elem in self.iter() {
            match elem.value() {
                Value::Primitive(v) => {
                    if !elem.length_matches_value() {
                        return LengthMismatchSnafu {
                            tag: elem.tag(),
                            declared: elem.length(),
                            actual: v.len(),
                        }
                        .fail();
                    }
                }
                Value::Sequence { items, .. } => {
                    for item in items {
                        item.validate_lengths()?;
                    }
                }
                Value::PixelSequence { .. } => {}
            }
        }
        Ok(())
    }

    /// Write this object's data set into the given writer,
    /// with the given transfer syntax,
    /// without preamble, magic code, nor file meta group.
    pub fn write_dataset_with_ts<W>(&self, to: W, ts: &TransferSyntax) -> Result<(), WriteError>
    where
        W: Write,
    {
        self.write_dataset_with_ts_options(to, ts, DataSetWriterOptions::default())
    }

    /// Write this object's data set into the given writer,
    /// with the given transfer syntax and writer options,
    /// without preamble, magic code, nor file meta group.
    ///
    /// Element lengths are validated before any byte is written.
    pub fn write_dataset_with_ts_options<W>(
        &self,
        to: W,
        ts: &TransferSyntax,
        options: DataSetWriterOptions,
    ) -> Result<(), WriteError>
    where
        W: Write,
    {
        if !ts.fully_supported() {
            return WriteUnsupportedTransferSyntaxSnafu { uid: ts.uid() }.fail();
        }
        self.validate_lengths()?;

        let to: Box<dyn Write + '_> = match ts.data_adapter() {
            Some(adapter) => adapter.adapt_writer(Box::new(to)),
            None => Box::new(to),
        };
        let mut dset_writer =
            DataSetWriter::with_ts_options(to, ts, options).context(CreatePrinterSnafu)?;

        dset_writer
            .write_sequence(InMemObjectTokens::new(self, ts.explicit_vr()))
            .context(PrintDataSetSnafu)?;
        dset_writer.flush().context(PrintDataSetSnafu)?;

        Ok(())
    }

    /// Encapsulate this object to contain a file meta group
    /// as described exactly by the given table.
    ///
    /// **Note:** this method will not adjust the file meta group
    /// to be semantically valid for the object.
    pub fn with_exact_meta(self, meta: FileMetaTable) -> FileDicomObject<Self> {
        FileDicomObject::new(meta, self)
    }

    /// Encapsulate this object to contain a file meta group,
    /// created through the given file meta table builder.
    ///
    /// The attributes _Media Storage SOP Class UID_
    /// and _Media Storage SOP Instance UID_
    /// are filled in with the contents of the object
    /// when _SOP Class UID_ and _SOP Instance UID_ are present.
    /// A complete file meta group should still provide
    /// the transfer syntax.
    pub fn with_meta(
        self,
        mut meta: FileMetaTableBuilder,
    ) -> Result<FileDicomObject<Self>, WithMetaError> {
        if let Some(uid) = self.string_value(tags::SOP_CLASS_UID) {
            meta = meta.media_storage_sop_class_uid(uid);
        }
        if let Some(uid) = self.string_value(tags::SOP_INSTANCE_UID) {
            meta = meta.media_storage_sop_instance_uid(uid);
        }
        Ok(FileDicomObject::new(
            meta.build().context(BuildMetaTableSnafu)?,
            self,
        ))
    }

    // private methods

    /// Build an object by consuming a data set parser.
    ///
    /// Nesting is bounded by the reader's depth limit.
    fn build_object<I: ?Sized>(dataset: &mut I, in_item: bool, len: Length) -> Result<Self, ReadError>
    where
        I: Iterator<Item = ParserResult<DataToken>>,
    {
        let mut obj = InMemDicomObject {
            entries: BTreeMap::new(),
            len,
        };
        // perform a structured parsing of incoming tokens
        while let Some(token) = dataset.next() {
            let elem = match token.context(ReadTokenSnafu)? {
                DataToken::PixelSequenceStart => {
                    let value = InMemDicomObject::build_encapsulated_data(&mut *dataset)?;
                    DataElement::new(Tag(0x7fe0, 0x0010), VR::OB, value)
                }
                DataToken::ElementHeader(header) => {
                    // fetch respective value, place it in the entries
                    let next_token = dataset.next().context(MissingElementValueSnafu)?;
                    match next_token.context(ReadTokenSnafu)? {
                        DataToken::PrimitiveValue(v) => InMemElement::new_with_len(
                            header.tag,
                            header.vr,
                            header.len,
                            Value::Primitive(v),
                        ),
                        token => {
                            return UnexpectedTokenSnafu {
                                token: Box::new(token),
                            }
                            .fail();
                        }
                    }
                }
                DataToken::SequenceStart { tag, len } => {
                    // delegate sequence building to another function
                    let items = Self::build_sequence(&mut *dataset)?;
                    DataElement::new_with_len(
                        tag,
                        VR::SQ,
                        len,
                        Value::Sequence { items, size: len },
                    )
                }
                DataToken::ItemEnd if in_item => {
                    // end of item, leave now
                    return Ok(obj);
                }
                token => {
                    return UnexpectedTokenSnafu {
                        token: Box::new(token),
                    }
                    .fail()
                }
            };
            if let Some(old) = obj.put(elem) {
                tracing::debug!("Duplicate element {} in data set, keeping the last", old.tag());
            }
        }

        if in_item {
            // the item was not closed
            return PrematureEndSnafu.fail();
        }
        Ok(obj)
    }

    /// Build an encapsulated pixel data by collecting all fragments into an
    /// in-memory DICOM value.
    fn build_encapsulated_data<I>(dataset: I) -> Result<Value<InMemDicomObject>, ReadError>
    where
        I: Iterator<Item = ParserResult<DataToken>>,
    {
        // continue fetching tokens to retrieve:
        // - the offset table
        // - the various compressed fragments
        let mut offset_table = None;

        let mut fragments = C::new();

        for token in dataset {
            match token.context(ReadTokenSnafu)? {
                DataToken::OffsetTable(table) => {
                    offset_table = Some(table);
                }
                DataToken::ItemValue(data) => {
                    fragments.push(data);
                }
                DataToken::ItemEnd => {
                    // at the end of the first item ensure the presence of
                    // an empty offset_table here, so that the next items
                    // are seen as compressed fragments
                    if offset_table.is_none() {
                        offset_table = Some(Vec::new())
                    }
                }
                DataToken::ItemStart { len: _ } => { /* no-op */ }
                DataToken::SequenceEnd => {
                    return Ok(Value::PixelSequence {
                        fragments,
                        offset_table: offset_table.unwrap_or_default().into(),
                    });
                }
                // the following variants are unexpected
                token @ DataToken::ElementHeader(_)
                | token @ DataToken::PixelSequenceStart
                | token @ DataToken::SequenceStart { .. }
                | token @ DataToken::PrimitiveValue(_) => {
                    return UnexpectedTokenSnafu {
                        token: Box::new(token),
                    }
                    .fail();
                }
            }
        }

        PrematureEndSnafu.fail()
    }

    /// Build a DICOM sequence by consuming a data set parser.
    fn build_sequence<I: ?Sized>(dataset: &mut I) -> Result<C<InMemDicomObject>, ReadError>
    where
        I: Iterator<Item = ParserResult<DataToken>>,
    {
        let mut items: C<_> = SmallVec::new();
        while let Some(token) = dataset.next() {
            match token.context(ReadTokenSnafu)? {
                DataToken::ItemStart { len } => {
                    items.push(Self::build_object(&mut *dataset, true, len)?);
                }
                DataToken::SequenceEnd => {
                    return Ok(items);
                }
                token => {
                    return UnexpectedTokenSnafu {
                        token: Box::new(token),
                    }
                    .fail()
                }
            };
        }

        // iterator fully consumed without a sequence delimiter
        PrematureEndSnafu.fail()
    }

    fn lookup_name(&self, name: &str) -> Result<Tag, AccessByNameError> {
        StandardDataDictionary
            .parse_tag(name)
            .context(NoSuchAttributeNameSnafu { name })
    }
}

impl<'a> IntoIterator for &'a InMemDicomObject {
    type Item = &'a InMemElement;
    type IntoIter = btree_map::Values<'a, Tag, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for InMemDicomObject {
    type Item = InMemElement;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Base iterator type for an in-memory DICOM object.
#[derive(Debug)]
pub struct Iter {
    inner: btree_map::IntoIter<Tag, InMemElement>,
}

impl Iterator for Iter {
    type Item = InMemElement;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|x| x.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn count(self) -> usize {
        self.inner.count()
    }
}

impl Extend<InMemElement> for InMemDicomObject {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = InMemElement>,
    {
        self.entries.extend(iter.into_iter().map(|e| (e.tag(), e)))
    }
}

impl std::iter::FromIterator<InMemElement> for InMemDicomObject {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        InMemDicomObject::from_element_iter(iter)
    }
}
