//! Module containing data structures and readers of DICOM file meta information tables.
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmkit_core::header::{DataElement, HasLength, Header};
use dcmkit_core::value::PrimitiveValue;
use dcmkit_core::{Length, Tag, VR};
use dcmkit_encoding::decode::{self, Decode};
use dcmkit_encoding::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use dcmkit_encoding::encode::EncoderFor;
use dcmkit_parser::dataset::{DataSetWriter, DataToken};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{BufRead, Read, Write};

/// The magic code found right before the file meta group.
pub const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// The largest number of bytes reserved before reading an element value.
const MAX_PREALLOC: usize = 1 << 16;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The file meta group parser could not read
    /// the magic code `DICM` from its source.
    #[snafu(display("Could not start reading DICOM data"))]
    ReadMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The file meta group parser could not fetch
    /// the value of a data element from its source.
    #[snafu(display("Could not read data value"))]
    ReadValueData {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The source ended before the full value of a meta element was read.
    #[snafu(display(
        "Value of element {} is truncated: {} of {} bytes available",
        tag,
        read,
        len
    ))]
    TruncatedValue {
        tag: Tag,
        len: u32,
        read: u64,
        backtrace: Backtrace,
    },

    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data"))]
    NotDicom { backtrace: Backtrace },

    /// An issue occurred while decoding the next data element
    /// in the file meta data set.
    #[snafu(display("Could not decode data element"))]
    DecodeElement {
        #[snafu(backtrace)]
        source: dcmkit_encoding::decode::Error,
    },

    /// A data element with an unexpected tag was retrieved:
    /// the parser was expecting another tag first,
    /// or at least one that is part of the the file meta group.
    #[snafu(display("Unexpected data element tagged {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },

    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// The value length of a data elements in the file meta group
    /// was unexpected.
    #[snafu(display("Unexpected length {} for data element tagged {}", length, tag))]
    UnexpectedDataValueLength {
        tag: Tag,
        length: Length,
        backtrace: Backtrace,
    },

    /// The value length of a data element is undefined,
    /// but knowing the length is required in its context.
    #[snafu(display("Undefined value length for data element tagged {}", tag))]
    UndefinedValueLength { tag: Tag, backtrace: Backtrace },

    /// The file meta group data set could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteSet {
        #[snafu(backtrace)]
        source: dcmkit_parser::dataset::write::Error,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM File Meta Information Table.
///
/// This data type contains the relevant parts of the file meta information table, as
/// specified in [1].
///
/// String fields keep their trailing padding as found in the source;
/// use the accessor methods for the clean values.
///
/// [1]: http://dicom.nema.org/medical/dicom/current/output/chtml/part06/chapter_7.html
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length,
    /// as last read or computed.
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: String,

    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
    /// Sending Application Entity Title
    pub sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title
    pub receiving_application_entity_title: Option<String>,
    /// Private Information Creator UID
    pub private_information_creator_uid: Option<String>,
    /// Private Information
    pub private_information: Option<Vec<u8>>,
}

/// Remove trailing null characters and spaces from a text value.
fn trim_value(s: &str) -> &str {
    s.trim_end_matches(|c| c == '\0' || c == ' ')
}

/// Read the value of a meta group element,
/// keeping track of the bytes consumed.
///
/// The buffer only grows as data arrives,
/// so a bogus length fails with `TruncatedValue`
/// instead of reserving it all up front.
fn read_body<S>(source: &mut S, tag: Tag, len: u32, consumed: &mut u64) -> Result<Vec<u8>>
where
    S: ?Sized + BufRead,
{
    let mut v = Vec::with_capacity((len as usize).min(MAX_PREALLOC));
    let read = (&mut *source)
        .take(u64::from(len))
        .read_to_end(&mut v)
        .context(ReadValueDataSnafu)? as u64;
    ensure!(
        read == u64::from(len),
        TruncatedValueSnafu { tag, len, read }
    );
    *consumed += read;
    Ok(v)
}

fn read_str_body<S>(source: &mut S, tag: Tag, len: u32, consumed: &mut u64) -> Result<String>
where
    S: ?Sized + BufRead,
{
    let v = read_body(source, tag, len, consumed)?;
    Ok(String::from_utf8_lossy(&v).into_owned())
}

/// Check whether the next element in the source belongs to group 0002,
/// without consuming it.
pub(crate) fn next_is_meta_element<S>(source: &mut S) -> Result<bool>
where
    S: ?Sized + BufRead,
{
    let buf = source.fill_buf().context(ReadValueDataSnafu)?;
    Ok(buf.len() >= 2 && LittleEndian::read_u16(&buf[0..2]) == 0x0002)
}

impl FileMetaTable {
    /// Read the magic code `DICM` followed by the file meta group.
    pub fn from_reader<R: BufRead>(mut file: R) -> Result<Self> {
        let mut buff: [u8; 4] = [0; 4];
        file.read_exact(&mut buff).context(ReadMagicCodeSnafu)?;
        ensure!(buff == DICM_MAGIC_CODE, NotDicomSnafu);
        Self::read_group(&mut file).map(|(table, _)| table)
    }

    /// Read the file meta group elements from the source,
    /// which must be positioned right after the magic code.
    ///
    /// Returns the table and the number of bytes consumed.
    /// The group length element is used to delimit the group when present.
    /// Otherwise, elements are read for as long as they belong to group 0002.
    pub(crate) fn read_group<S>(file: &mut S) -> Result<(Self, u64)>
    where
        S: ?Sized + BufRead,
    {
        let decoder = decode::file_header_decoder();
        let mut builder = FileMetaTableBuilder::new();
        let mut consumed: u64 = 0;
        let mut group_end: Option<u64> = None;

        loop {
            match group_end {
                Some(end) if consumed >= end => break,
                None if !next_is_meta_element(file)? => break,
                _ => {}
            }

            let (elem, bytes_read) = decoder.decode_header(file).context(DecodeElementSnafu)?;
            consumed += bytes_read as u64;
            let tag = elem.tag();
            let elem_len = elem
                .length()
                .get()
                .context(UndefinedValueLengthSnafu { tag })?;

            builder = match tag {
                Tag(0x0002, 0x0000) => {
                    ensure!(
                        elem_len == 4,
                        UnexpectedDataValueLengthSnafu {
                            tag,
                            length: elem.length(),
                        }
                    );
                    let v = read_body(file, tag, elem_len, &mut consumed)?;
                    let group_length = LittleEndian::read_u32(&v);
                    group_end = Some(consumed + u64::from(group_length));
                    builder.group_length(group_length)
                }
                Tag(0x0002, 0x0001) => {
                    ensure!(
                        elem_len == 2,
                        UnexpectedDataValueLengthSnafu {
                            tag,
                            length: elem.length(),
                        }
                    );
                    let v = read_body(file, tag, elem_len, &mut consumed)?;
                    builder.information_version([v[0], v[1]])
                }
                Tag(0x0002, 0x0002) => builder.media_storage_sop_class_uid(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0003) => builder.media_storage_sop_instance_uid(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0010) => {
                    builder.transfer_syntax(read_str_body(file, tag, elem_len, &mut consumed)?)
                }
                Tag(0x0002, 0x0012) => builder.implementation_class_uid(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0013) => builder.implementation_version_name(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0016) => builder.source_application_entity_title(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0017) => builder.sending_application_entity_title(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0018) => builder.receiving_application_entity_title(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0100) => builder.private_information_creator_uid(
                    read_str_body(file, tag, elem_len, &mut consumed)?,
                ),
                Tag(0x0002, 0x0102) => {
                    builder.private_information(read_body(file, tag, elem_len, &mut consumed)?)
                }
                Tag(0x0002, _) => {
                    tracing::debug!("Skipping unknown file meta element {}", tag);
                    read_body(file, tag, elem_len, &mut consumed)?;
                    builder
                }
                tag => return UnexpectedTagSnafu { tag }.fail(),
            };
        }

        let table = builder.build()?;
        Ok((table, consumed))
    }

    /// Retrieve the transfer syntax UID, without trailing padding.
    pub fn transfer_syntax(&self) -> &str {
        trim_value(&self.transfer_syntax)
    }

    /// Retrieve the media storage SOP class UID, without trailing padding.
    pub fn media_storage_sop_class_uid(&self) -> &str {
        trim_value(&self.media_storage_sop_class_uid)
    }

    /// Retrieve the media storage SOP instance UID, without trailing padding.
    pub fn media_storage_sop_instance_uid(&self) -> &str {
        trim_value(&self.media_storage_sop_instance_uid)
    }

    /// Retrieve the implementation class UID, without trailing padding.
    pub fn implementation_class_uid(&self) -> &str {
        trim_value(&self.implementation_class_uid)
    }

    /// Set the transfer syntax UID, padding it as needed.
    pub fn set_transfer_syntax(&mut self, uid: &str) {
        self.transfer_syntax = ui_padded(uid);
        self.update_information_group_length();
    }

    /// Recompute the group length from the elements currently in the table.
    pub fn update_information_group_length(&mut self) {
        self.information_group_length = self.calculate_information_group_length();
    }

    fn calculate_information_group_length(&self) -> u32 {
        self.body_elements()
            .map(|e| encoded_meta_element_len(&e))
            .sum()
    }

    /// All elements of the table except for the group length.
    fn body_elements(&self) -> impl Iterator<Item = DataElement> {
        fn text(tag: Tag, vr: VR, value: &str) -> DataElement {
            DataElement::new(tag, vr, PrimitiveValue::from(value))
        }

        let required = vec![
            DataElement::new(
                Tag(0x0002, 0x0001),
                VR::OB,
                PrimitiveValue::from(&self.information_version[..]),
            ),
            text(Tag(0x0002, 0x0002), VR::UI, &self.media_storage_sop_class_uid),
            text(
                Tag(0x0002, 0x0003),
                VR::UI,
                &self.media_storage_sop_instance_uid,
            ),
            text(Tag(0x0002, 0x0010), VR::UI, &self.transfer_syntax),
            text(Tag(0x0002, 0x0012), VR::UI, &self.implementation_class_uid),
        ];

        let optional = vec![
            (Tag(0x0002, 0x0013), VR::SH, &self.implementation_version_name),
            (
                Tag(0x0002, 0x0016),
                VR::AE,
                &self.source_application_entity_title,
            ),
            (
                Tag(0x0002, 0x0017),
                VR::AE,
                &self.sending_application_entity_title,
            ),
            (
                Tag(0x0002, 0x0018),
                VR::AE,
                &self.receiving_application_entity_title,
            ),
            (
                Tag(0x0002, 0x0100),
                VR::UI,
                &self.private_information_creator_uid,
            ),
        ]
        .into_iter()
        .filter_map(|(tag, vr, v)| v.as_ref().map(|v| text(tag, vr, v)))
        .collect::<Vec<_>>();

        let private = self
            .private_information
            .as_ref()
            .map(|v| DataElement::new(Tag(0x0002, 0x0102), VR::OB, PrimitiveValue::from(&v[..])));

        itertools::chain(itertools::chain(required, optional), private)
    }

    /// Obtain the elements of this table in ascending tag order,
    /// starting with a freshly computed group length.
    pub fn to_element_iter(&self) -> impl Iterator<Item = DataElement> {
        let group_length = self.calculate_information_group_length();
        let group_length_element = DataElement::new(
            Tag(0x0002, 0x0000),
            VR::UL,
            PrimitiveValue::from_u32s(&[group_length]),
        );
        itertools::chain(std::iter::once(group_length_element), self.body_elements())
    }

    /// Write the file meta group as Explicit VR Little Endian,
    /// without the preceding magic code.
    ///
    /// The group length is always recomputed.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut dset = DataSetWriter::new(
            writer,
            EncoderFor::new(ExplicitVRLittleEndianEncoder::default()),
        );
        dset.write_sequence(self.to_element_iter().flat_map(|e| {
            let (header, value) = e.into_parts();
            let value = value.primitive().cloned().unwrap_or_else(PrimitiveValue::empty);
            let header = dcmkit_core::DataElementHeader::new(
                header.tag,
                header.vr,
                Length(value.len() as u32),
            );
            [DataToken::ElementHeader(header), DataToken::PrimitiveValue(value)]
        }))
        .context(WriteSetSnafu)?;
        dset.flush().context(WriteSetSnafu)
    }
}

/// The number of bytes an element of the file meta group
/// takes up when encoded.
fn encoded_meta_element_len(elem: &DataElement) -> u32 {
    let header_len = if elem.vr().has_32bit_length() { 12 } else { 8 };
    let value_len = elem.value().primitive().map(|v| v.len()).unwrap_or(0) as u32;
    header_len + value_len + (value_len & 1)
}

/// A builder for DICOM meta information tables.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    /// File Meta Information Group Length (UL)
    information_group_length: Option<u32>,
    /// File Meta Information Version (OB)
    information_version: Option<[u8; 2]>,
    /// Media Storage SOP Class UID (UI)
    media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID (UI)
    media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID (UI)
    transfer_syntax: Option<String>,
    /// Implementation Class UID (UI)
    implementation_class_uid: Option<String>,

    /// Implementation Version Name (SH)
    implementation_version_name: Option<String>,
    /// Source Application Entity Title (AE)
    source_application_entity_title: Option<String>,
    /// Sending Application Entity Title (AE)
    sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title (AE)
    receiving_application_entity_title: Option<String>,
    /// Private Information Creator UID (UI)
    private_information_creator_uid: Option<String>,
    /// Private Information (OB)
    private_information: Option<Vec<u8>>,
}

/// Ensure that the string is even lengthed, by adding a trailing character
/// if not.
#[inline]
fn padded<T>(s: T, pad: char) -> String
where
    T: Into<String>,
{
    let mut s = s.into();
    if s.len() % 2 == 1 {
        s.push(pad);
    }
    s
}

/// Ensure that the string is even lengthed with trailing '\0's.
fn ui_padded<T>(s: T) -> String
where
    T: Into<String>,
{
    padded(s, '\0')
}

/// Ensure that the string is even lengthed with trailing spaces.
fn txt_padded<T>(s: T) -> String
where
    T: Into<String>,
{
    padded(s, ' ')
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Define the meta information group length.
    ///
    /// This value is only informative:
    /// the group length is recomputed whenever the table is written.
    pub fn group_length(mut self, value: u32) -> FileMetaTableBuilder {
        self.information_group_length = Some(value);
        self
    }

    /// Define the meta information version.
    pub fn information_version(mut self, value: [u8; 2]) -> FileMetaTableBuilder {
        self.information_version = Some(value);
        self
    }

    /// Define the media storage SOP class UID.
    pub fn media_storage_sop_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_class_uid = Some(ui_padded(value));
        self
    }

    /// Define the media storage SOP instance UID.
    pub fn media_storage_sop_instance_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_instance_uid = Some(ui_padded(value));
        self
    }

    /// Define the transfer syntax UID.
    pub fn transfer_syntax<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.transfer_syntax = Some(ui_padded(value));
        self
    }

    /// Define the implementation class UID.
    pub fn implementation_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_class_uid = Some(ui_padded(value));
        self
    }

    /// Define the implementation version name.
    pub fn implementation_version_name<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_version_name = Some(txt_padded(value));
        self
    }

    /// Define the source application entity title.
    pub fn source_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.source_application_entity_title = Some(txt_padded(value));
        self
    }

    /// Define the sending application entity title.
    pub fn sending_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.sending_application_entity_title = Some(txt_padded(value));
        self
    }

    /// Define the receiving application entity title.
    pub fn receiving_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.receiving_application_entity_title = Some(txt_padded(value));
        self
    }

    /// Define the private information creator UID.
    pub fn private_information_creator_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.private_information_creator_uid = Some(ui_padded(value));
        self
    }

    /// Define the private information as a vector of bytes.
    pub fn private_information<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<Vec<u8>>,
    {
        self.private_information = Some(value.into());
        self
    }

    /// Build the table.
    ///
    /// The media storage SOP class and instance UIDs
    /// and the transfer syntax are required.
    /// When not given, the information version defaults to `[0, 1]`,
    /// and the implementation class UID and version name
    /// default to the ones of this toolkit.
    pub fn build(self) -> Result<FileMetaTable> {
        let information_version = self.information_version.unwrap_or([0, 1]);
        let media_storage_sop_class_uid =
            self.media_storage_sop_class_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPClassUID",
                })?;
        let media_storage_sop_instance_uid =
            self.media_storage_sop_instance_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPInstanceUID",
                })?;
        let transfer_syntax = self.transfer_syntax.context(MissingElementSnafu {
            alias: "TransferSyntax",
        })?;
        let (implementation_class_uid, implementation_version_name) =
            match self.implementation_class_uid {
                Some(uid) => (uid, self.implementation_version_name),
                None => (
                    ui_padded(IMPLEMENTATION_CLASS_UID),
                    Some(
                        self.implementation_version_name
                            .unwrap_or_else(|| txt_padded(IMPLEMENTATION_VERSION_NAME)),
                    ),
                ),
            };

        let mut table = FileMetaTable {
            information_group_length: 0,
            information_version,
            media_storage_sop_class_uid,
            media_storage_sop_instance_uid,
            transfer_syntax,
            implementation_class_uid,
            implementation_version_name,
            source_application_entity_title: self.source_application_entity_title,
            sending_application_entity_title: self.sending_application_entity_title,
            receiving_application_entity_title: self.receiving_application_entity_title,
            private_information_creator_uid: self.private_information_creator_uid,
            private_information: self.private_information,
        };
        match self.information_group_length {
            Some(len) => table.information_group_length = len,
            None => table.update_information_group_length(),
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, FileMetaTable, FileMetaTableBuilder};
    use dcmkit_core::value::PrimitiveValue;
    use dcmkit_core::{DataElement, Tag, VR};

    #[rustfmt::skip]
    const TEST_META_1: &[u8] = &[
        // magic code
        b'D', b'I', b'C', b'M',
        // File Meta Information Group Length: (0000,0002) ; UL ; 4 ; 200
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0xc8, 0x00, 0x00, 0x00,
        // File Meta Information Version: (0002, 0001) ; OB ; 2 ; [0x00, 0x01]
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // Media Storage SOP Class UID (0002, 0002) ; UI ; 26 ; "1.2.840.10008.5.1.4.1.1.1\0"
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e,
        0x31, 0x2e, 0x31, 0x00,
        // Media Storage SOP Instance UID (0002, 0003) ; UI ; 56 ; "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567\0"
        0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x38, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x2e, 0x34,
        0x2e, 0x35, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x2e, 0x31, 0x32, 0x33,
        0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
        0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x2e, 0x31, 0x32, 0x33, 0x34,
        0x35, 0x36, 0x37, 0x00,
        // Transfer Syntax UID (0002, 0010) ; UI ; 20 ; "1.2.840.10008.1.2.1\0"
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e, 0x31, 0x00,
        // Implementation Class UID (0002, 0012) ; UI ; 20 ; "1.2.345.6.7890.1.234"
        0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x34, 0x35,
        0x2e, 0x36, 0x2e, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x2e, 0x32, 0x33, 0x34,
        // optional elements:

        // Implementation Version Name (0002,0013) ; SH ; "DCMKIT_TEST_269 "
        0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x10, 0x00, b'D', b'C', b'M', b'K', b'I', b'T', b'_',
        b'T', b'E', b'S', b'T', b'_', b'2', b'6', b'9', b' ',
        // Source Application Entity Title (0002, 0016) ; AE ; 0 (no data)
        0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x00, 0x00,
    ];

    fn test_table() -> FileMetaTable {
        FileMetaTable {
            information_group_length: 200,
            information_version: [0u8, 1u8],
            media_storage_sop_class_uid: "1.2.840.10008.5.1.4.1.1.1\0".to_owned(),
            media_storage_sop_instance_uid:
                "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567\0".to_owned(),
            transfer_syntax: "1.2.840.10008.1.2.1\0".to_owned(),
            implementation_class_uid: "1.2.345.6.7890.1.234".to_owned(),
            implementation_version_name: Some("DCMKIT_TEST_269 ".to_owned()),
            source_application_entity_title: Some("".to_owned()),
            sending_application_entity_title: None,
            receiving_application_entity_title: None,
            private_information_creator_uid: None,
            private_information: None,
        }
    }

    #[test]
    fn read_meta_table_from_reader() {
        let table = FileMetaTable::from_reader(TEST_META_1).unwrap();

        assert_eq!(table, test_table());
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
        assert_eq!(table.media_storage_sop_class_uid(), "1.2.840.10008.5.1.4.1.1.1");
    }

    #[test]
    fn read_meta_table_reports_bytes_consumed() {
        let mut source = &TEST_META_1[4..];
        let (_, consumed) = FileMetaTable::read_group(&mut source).unwrap();
        assert_eq!(consumed, 12 + 200);
        assert!(source.is_empty());
    }

    #[test]
    fn read_meta_table_without_group_length() {
        // drop the group length element,
        // then append the beginning of the main data set
        let mut data = TEST_META_1[16..].to_vec();
        data.extend_from_slice(&[0x08, 0x00, 0x16, 0x00, b'U', b'I', 0x00, 0x00]);
        let mut source = &data[..];
        let (table, consumed) = FileMetaTable::read_group(&mut source).unwrap();
        assert_eq!(consumed, 200);
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
        // the data set element is left untouched
        assert_eq!(source.len(), 8);
    }

    #[test]
    fn read_meta_table_with_bogus_length_is_truncated() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            b'D', b'I', b'C', b'M',
            // Private Information (0002,0102) ; OB ; 0xFFFFFFF0
            0x02, 0x00, 0x02, 0x01, b'O', b'B', 0x00, 0x00, 0xF0, 0xFF, 0xFF, 0xFF,
            // only four bytes follow
            0x01, 0x02, 0x03, 0x04,
        ];
        let err = FileMetaTable::from_reader(data).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedValue {
                tag: Tag(0x0002, 0x0102),
                len: 0xFFFF_FFF0,
                read: 4,
                ..
            }
        ));
    }

    #[test]
    fn read_meta_table_rejects_missing_magic() {
        let mut data = TEST_META_1.to_vec();
        data[0] = b'X';
        let err = FileMetaTable::from_reader(&data[..]).unwrap_err();
        assert!(matches!(err, Error::NotDicom { .. }));
    }

    #[test]
    fn create_meta_table_with_builder() {
        let table = FileMetaTableBuilder::new()
            .information_version([0, 1])
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
            .media_storage_sop_instance_uid(
                "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567",
            )
            .transfer_syntax("1.2.840.10008.1.2.1")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .implementation_version_name("DCMKIT_TEST_269")
            .source_application_entity_title("")
            .build()
            .unwrap();

        assert_eq!(table.information_group_length, 200);
        assert_eq!(table, test_table());
    }

    #[test]
    fn builder_fills_in_implementation_defaults() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("2.25.1")
            .transfer_syntax("1.2.840.10008.1.2")
            .build()
            .unwrap();

        assert_eq!(table.information_version, [0, 1]);
        assert_eq!(table.implementation_class_uid(), crate::IMPLEMENTATION_CLASS_UID);
        assert!(table.implementation_version_name.is_some());
    }

    #[test]
    fn builder_requires_transfer_syntax() {
        let err = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("2.25.1")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingElement {
                alias: "TransferSyntax",
                ..
            }
        ));
    }

    #[test]
    fn meta_table_into_elements() {
        let gt = vec![
            DataElement::new(
                Tag(0x0002, 0x0000),
                VR::UL,
                PrimitiveValue::from_u32s(&[200]),
            ),
            DataElement::new(Tag(0x0002, 0x0001), VR::OB, PrimitiveValue::from(&[0u8, 1][..])),
            DataElement::new(
                Tag(0x0002, 0x0002),
                VR::UI,
                PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.1\0"),
            ),
            DataElement::new(
                Tag(0x0002, 0x0003),
                VR::UI,
                PrimitiveValue::from("1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567\0"),
            ),
            DataElement::new(
                Tag(0x0002, 0x0010),
                VR::UI,
                PrimitiveValue::from("1.2.840.10008.1.2.1\0"),
            ),
            DataElement::new(
                Tag(0x0002, 0x0012),
                VR::UI,
                PrimitiveValue::from("1.2.345.6.7890.1.234"),
            ),
            DataElement::new(
                Tag(0x0002, 0x0013),
                VR::SH,
                PrimitiveValue::from("DCMKIT_TEST_269 "),
            ),
            DataElement::new(Tag(0x0002, 0x0016), VR::AE, PrimitiveValue::from("")),
        ];

        let elems: Vec<_> = test_table().to_element_iter().collect();
        assert_eq!(elems, gt);
    }

    #[test]
    fn write_meta_table_recomputes_group_length() {
        let mut table = test_table();
        // stale value
        table.information_group_length = 9999;

        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        assert_eq!(&out[..], &TEST_META_1[4..]);
    }
}
