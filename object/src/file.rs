//! Reading and writing DICOM files:
//! preamble, magic code, file meta group and main data set.
use dcmkit_core::Tag;
use dcmkit_dictionary_std::{tags, uids};
use dcmkit_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use dcmkit_parser::dataset::{
    DataSetReaderOptions, DataSetWriterOptions, OddLengthStrategy, SequenceLengthStrategy,
};
use dcmkit_parser::dataset::read::DEFAULT_MAX_DEPTH;
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{OptionExt, ResultExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::mem::InMemDicomObject;
use crate::meta::{self, FileMetaTable, FileMetaTableBuilder, DICM_MAGIC_CODE};
use crate::{
    DefaultDicomObject, FlushOutputSnafu, NotDicomSnafu, OpenFileSnafu, ParseMetaDataSetSnafu,
    PrintMetaDataSetSnafu, ReadError, ReadPreambleBytesSnafu,
    ReadUnsupportedTransferSyntaxSnafu, WriteError, WriteFileSnafu, WriteMagicCodeSnafu,
    WritePreambleSnafu, WriteUnsupportedTransferSyntaxSnafu,
};

/// The size of the file preamble in bytes.
pub const PREAMBLE_LENGTH: usize = 128;

/// Create a DICOM object by reading from a byte source.
///
/// Whether the source starts with a 128-byte preamble
/// is detected automatically.
pub fn from_reader<F>(file: F) -> Result<DefaultDicomObject, ReadError>
where
    F: Read,
{
    OpenFileOptions::new().from_reader(file)
}

/// Create a DICOM object by reading from a file.
///
/// This function assumes the standard file encoding structure: 128-byte
/// preamble, file meta group, and the rest of the data set.
/// Files without a preamble are also accepted.
pub fn open_file<P>(path: P) -> Result<DefaultDicomObject, ReadError>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Create a DICOM object from the full contents of a DICOM file in memory.
pub fn read_bytes(bytes: &[u8]) -> Result<DefaultDicomObject, ReadError> {
    OpenFileOptions::new().read_bytes(bytes)
}

/// A builder type for opening a DICOM file with additional options.
///
/// This builder exposes additional properties
/// to configure the reading of a DICOM file.
///
/// # Example
///
/// Create a `OpenFileOptions`,
/// call adaptor methods in a chain,
/// and finish the operation with [`.open_file()`](OpenFileOptions::open_file).
///
/// ```no_run
/// # use dcmkit_object::{OpenFileOptions, ReadPreamble};
/// let file = OpenFileOptions::new()
///     .read_preamble(ReadPreamble::Always)
///     .force(true)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    force: bool,
    read_preamble: ReadPreamble,
    max_depth: u32,
    odd_length: OddLengthStrategy,
}

impl Default for OpenFileOptions {
    fn default() -> Self {
        OpenFileOptions {
            force: false,
            read_preamble: ReadPreamble::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            odd_length: OddLengthStrategy::default(),
        }
    }
}

/// An enumerate of supported options for
/// whether to read the 128-byte DICOM file preamble.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Look for the magic code after a preamble,
    /// then at the very beginning of the source.
    Auto,
    /// Never read the preamble,
    /// thus assuming that the original source does not have it.
    Never,
    /// Always read the preamble first,
    /// thus assuming that the original source always has it.
    Always,
}

impl Default for ReadPreamble {
    fn default() -> Self {
        ReadPreamble::Auto
    }
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set whether to read sources lacking the `DICM` magic code.
    ///
    /// In this lenient mode,
    /// a file meta group is still read if one is found where the
    /// data set begins.
    /// Otherwise, the data set is decoded as Implicit VR Little Endian
    /// and a file meta table is synthesized
    /// from its SOP class and instance UIDs.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set whether to read the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the maximum sequence nesting depth accepted.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set what to do with odd value lengths.
    pub fn odd_length(mut self, odd_length: OddLengthStrategy) -> Self {
        self.odd_length = odd_length;
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DefaultDicomObject, ReadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        self.from_reader(file)
    }

    /// Obtain a DICOM object from the full contents of a file in memory.
    pub fn read_bytes(self, bytes: &[u8]) -> Result<DefaultDicomObject, ReadError> {
        self.from_reader(bytes)
    }

    /// Obtain a DICOM object by reading from a byte source.
    pub fn from_reader<R>(self, mut from: R) -> Result<DefaultDicomObject, ReadError>
    where
        R: Read,
    {
        let mut head = [0u8; PREAMBLE_LENGTH + 4];
        let head_len = match self.read_preamble {
            ReadPreamble::Never => read_head(&mut from, &mut head[..4]),
            ReadPreamble::Auto | ReadPreamble::Always => read_head(&mut from, &mut head),
        }
        .context(ReadPreambleBytesSnafu)?;
        let head = &head[..head_len];

        // where the data set (or meta group) starts within the head,
        // the preamble, and whether the magic code was found
        let full = head_len == PREAMBLE_LENGTH + 4;
        let (start, preamble, magic) = match self.read_preamble {
            ReadPreamble::Never if head == &DICM_MAGIC_CODE[..] => (4, None, true),
            ReadPreamble::Never => (0, None, false),
            _ if full && &head[PREAMBLE_LENGTH..] == &DICM_MAGIC_CODE[..] => {
                (head_len, Some(preamble_of(head)), true)
            }
            ReadPreamble::Auto if head.starts_with(&DICM_MAGIC_CODE) => (4, None, true),
            ReadPreamble::Auto if !full => (0, None, false),
            ReadPreamble::Always if !full => (head_len, None, false),
            _ => (head_len, Some(preamble_of(head)), false),
        };

        if !magic {
            if !self.force {
                return NotDicomSnafu.fail();
            }
            tracing::warn!(
                "No DICM magic code found, reading data from offset {}",
                start
            );
        }

        self.read_rest(&head[start..], from, start as u64, preamble)
    }

    /// Read the file meta group (if any) and the main data set,
    /// which begin with `pending` and continue with `from`.
    fn read_rest<R>(
        &self,
        pending: &[u8],
        from: R,
        offset: u64,
        preamble: Option<[u8; PREAMBLE_LENGTH]>,
    ) -> Result<DefaultDicomObject, ReadError>
    where
        R: Read,
    {
        let mut source = BufReader::new(pending.chain(from));

        let has_meta =
            meta::next_is_meta_element(&mut source).context(ParseMetaDataSetSnafu)?;
        let (meta, offset) = if has_meta {
            let (meta, consumed) =
                FileMetaTable::read_group(&mut source).context(ParseMetaDataSetSnafu)?;
            (Some(meta), offset + consumed)
        } else {
            (None, offset)
        };

        let ts: &TransferSyntax = match &meta {
            Some(meta) => TransferSyntaxRegistry.get(meta.transfer_syntax()).context(
                ReadUnsupportedTransferSyntaxSnafu {
                    uid: meta.transfer_syntax(),
                },
            )?,
            None => &dcmkit_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN,
        };

        let options = DataSetReaderOptions::default()
            .base_offset(offset)
            .max_depth(self.max_depth)
            .odd_length(self.odd_length);
        let obj = InMemDicomObject::read_dataset_with_ts_options(source, ts, options)?;

        let meta = match meta {
            Some(meta) => meta,
            None => synthesize_meta(&obj).context(ParseMetaDataSetSnafu)?,
        };

        Ok(FileDicomObject {
            meta,
            obj,
            preamble,
        })
    }
}

/// Read as many bytes as possible into `buf`,
/// stopping early only at the end of the source.
fn read_head<R: Read>(from: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match from.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn preamble_of(head: &[u8]) -> [u8; PREAMBLE_LENGTH] {
    let mut preamble = [0; PREAMBLE_LENGTH];
    preamble.copy_from_slice(&head[..PREAMBLE_LENGTH]);
    preamble
}

/// Build a file meta table for a data set read without one.
fn synthesize_meta(obj: &InMemDicomObject) -> Result<FileMetaTable, meta::Error> {
    let uid_of = |tag: Tag| obj.string_value(tag).unwrap_or_default();
    FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(uid_of(tags::SOP_CLASS_UID))
        .media_storage_sop_instance_uid(uid_of(tags::SOP_INSTANCE_UID))
        .transfer_syntax(uids::IMPLICIT_VR_LITTLE_ENDIAN)
        .build()
}

/// Options for writing a DICOM file.
#[derive(Debug, Default, Copy, Clone)]
#[non_exhaustive]
pub struct WriteOptions {
    /// How sequence and item lengths are written.
    pub sequence_length: SequenceLengthStrategy,
}

impl WriteOptions {
    pub fn new() -> Self {
        WriteOptions::default()
    }

    /// Set how sequence and item lengths are written.
    pub fn sequence_length(mut self, sequence_length: SequenceLengthStrategy) -> Self {
        self.sequence_length = sequence_length;
        self
    }
}

/// A root DICOM object retrieved from a standard DICOM file,
/// containing additional information from the file meta group
/// in a separate table value.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDicomObject<O> {
    meta: FileMetaTable,
    obj: O,
    preamble: Option<[u8; PREAMBLE_LENGTH]>,
}

impl<O> FileDicomObject<O> {
    /// Combine a file meta table and a data set into a file object,
    /// with no preamble bytes.
    pub fn new(meta: FileMetaTable, obj: O) -> Self {
        FileDicomObject {
            meta,
            obj,
            preamble: None,
        }
    }

    /// Retrieve the processed meta header table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// Retrieve a mutable reference to the processed meta header table.
    ///
    /// Considerable care should be taken when modifying this table,
    /// as it may influence object reading and writing operations.
    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    /// Retrieve the 128-byte preamble read from the file, if any.
    ///
    /// Files written from an object without one get a zeroed preamble.
    pub fn preamble(&self) -> Option<&[u8; PREAMBLE_LENGTH]> {
        self.preamble.as_ref()
    }

    /// Replace the preamble bytes.
    pub fn set_preamble(&mut self, preamble: Option<[u8; PREAMBLE_LENGTH]>) {
        self.preamble = preamble;
    }

    /// Retrieve the inner DICOM object structure, discarding the meta table.
    pub fn into_inner(self) -> O {
        self.obj
    }

    /// Split the file object into its meta table and inner object.
    pub fn into_parts(self) -> (FileMetaTable, O) {
        (self.meta, self.obj)
    }
}

impl<O> Deref for FileDicomObject<O> {
    type Target = O;

    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl<O> DerefMut for FileDicomObject<O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}

impl FileDicomObject<InMemDicomObject> {
    /// Write the entire object as a DICOM file
    /// into the given file path.
    /// Preamble, magic code, and file meta group will be included
    /// before the inner object.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        self.write_to_file_with_options(path, WriteOptions::default())
    }

    /// Write the entire object as a DICOM file
    /// into the given file path, with the given options.
    pub fn write_to_file_with_options<P: AsRef<Path>>(
        &self,
        path: P,
        options: WriteOptions,
    ) -> Result<(), WriteError> {
        let path = path.as_ref();
        let ts = self.transfer_syntax()?;
        self.obj.validate_lengths()?;
        let file = File::create(path).context(WriteFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);
        self.write_parts(&mut to, ts, options)?;
        to.flush().context(WriteFileSnafu { filename: path })
    }

    /// Write the entire object as a DICOM file
    /// into the given writer.
    /// Preamble, magic code, and file meta group will be included
    /// before the inner object.
    pub fn write_all<W: Write>(&self, to: W) -> Result<(), WriteError> {
        self.write_all_with_options(to, WriteOptions::default())
    }

    /// Write the entire object as a DICOM file
    /// into the given writer, with the given options.
    ///
    /// Nothing is written if the transfer syntax is not supported
    /// or an element length does not match its value.
    pub fn write_all_with_options<W: Write>(
        &self,
        to: W,
        options: WriteOptions,
    ) -> Result<(), WriteError> {
        let ts = self.transfer_syntax()?;
        self.obj.validate_lengths()?;
        let mut to = BufWriter::new(to);
        self.write_parts(&mut to, ts, options)?;
        to.flush().context(FlushOutputSnafu)
    }

    /// Encode the entire object as the bytes of a DICOM file.
    pub fn to_bytes(&self) -> Result<Vec<u8>, WriteError> {
        let mut out = Vec::new();
        self.write_all(&mut out)?;
        Ok(out)
    }

    /// Write the file meta group set into the given writer.
    ///
    /// This is equivalent to `self.meta().write(to)`.
    pub fn write_meta<W: Write>(&self, to: W) -> Result<(), WriteError> {
        self.meta.write(to).context(PrintMetaDataSetSnafu)
    }

    /// Write the inner data set into the given writer,
    /// without preamble, magic code, nor file meta group.
    ///
    /// The transfer syntax is selected from the file meta table.
    pub fn write_dataset<W: Write>(&self, to: W) -> Result<(), WriteError> {
        let ts = self.transfer_syntax()?;
        self.obj.write_dataset_with_ts(to, ts)
    }

    fn transfer_syntax(&self) -> Result<&'static TransferSyntax, WriteError> {
        TransferSyntaxRegistry
            .get(self.meta.transfer_syntax())
            .context(WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax(),
            })
    }

    fn write_parts<W: Write>(
        &self,
        mut to: W,
        ts: &TransferSyntax,
        options: WriteOptions,
    ) -> Result<(), WriteError> {
        // write preamble
        let preamble = self.preamble.unwrap_or([0; PREAMBLE_LENGTH]);
        to.write_all(&preamble[..]).context(WritePreambleSnafu)?;

        // write magic sequence
        to.write_all(&DICM_MAGIC_CODE).context(WriteMagicCodeSnafu)?;

        // write meta group
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;

        let options = DataSetWriterOptions::default().sequence_length(options.sequence_length);
        self.obj.write_dataset_with_ts_options(to, ts, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem::InMemElement;
    use dcmkit_core::value::PrimitiveValue;
    use dcmkit_core::{DataElement, VR};

    #[rustfmt::skip]
    const IMPLICIT_DATASET: &[u8] = &[
        // (0008,0016) SOPClassUID
        0x08, 0x00, 0x16, 0x00, 0x1a, 0x00, 0x00, 0x00,
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
        b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'7', 0x00,
        // (0008,0018) SOPInstanceUID
        0x08, 0x00, 0x18, 0x00, 0x06, 0x00, 0x00, 0x00,
        b'2', b'.', b'2', b'5', b'.', b'1',
        // (0010,0010) PatientName
        0x10, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00,
        b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
    ];

    fn sample_file() -> DefaultDicomObject {
        let obj = InMemDicomObject::from_element_iter(vec![
            DataElement::new(
                tags::SOP_CLASS_UID,
                VR::UI,
                PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.7\0"),
            ),
            DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, PrimitiveValue::from("2.25.1")),
            DataElement::new(tags::PATIENT_NAME, VR::PN, PrimitiveValue::from("Doe^John")),
        ]);
        obj.with_meta(FileMetaTableBuilder::new().transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN))
            .unwrap()
    }

    #[test]
    fn write_and_read_file_bytes() {
        let file = sample_file();
        let bytes = file.to_bytes().unwrap();
        assert_eq!(&bytes[..128], &[0; 128][..]);
        assert_eq!(&bytes[128..132], b"DICM");

        let back = read_bytes(&bytes).unwrap();
        assert_eq!(back.meta().transfer_syntax(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(
            back.meta().media_storage_sop_class_uid(),
            uids::SECONDARY_CAPTURE_IMAGE_STORAGE
        );
        assert_eq!(back.meta().media_storage_sop_instance_uid(), "2.25.1");
        assert_eq!(&*back, &*file);
        assert_eq!(back.preamble(), Some(&[0; 128]));
    }

    #[test]
    fn preamble_bytes_are_kept() {
        let mut file = sample_file();
        let mut preamble = [0; PREAMBLE_LENGTH];
        preamble[0] = b'I';
        preamble[1] = b'I';
        file.set_preamble(Some(preamble));

        let bytes = file.to_bytes().unwrap();
        let back = read_bytes(&bytes).unwrap();
        assert_eq!(back.preamble(), Some(&preamble));
        assert_eq!(&back.to_bytes().unwrap(), &bytes);
    }

    #[test]
    fn read_file_without_preamble() {
        let bytes = sample_file().to_bytes().unwrap();

        let back = read_bytes(&bytes[128..]).unwrap();
        assert!(back.preamble().is_none());
        assert_eq!(
            back.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
            "Doe^John"
        );

        let back = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Never)
            .read_bytes(&bytes[128..])
            .unwrap();
        assert_eq!(back.meta().media_storage_sop_instance_uid(), "2.25.1");
    }

    #[test]
    fn missing_magic_code_is_rejected() {
        let mut bytes = vec![0; 128];
        bytes.extend_from_slice(IMPLICIT_DATASET);

        let err = read_bytes(&bytes).unwrap_err();
        assert!(matches!(err, ReadError::NotDicom { .. }));
    }

    #[test]
    fn lenient_mode_reads_implicit_data_set() {
        let mut bytes = vec![0; 132];
        bytes.extend_from_slice(IMPLICIT_DATASET);

        let file = OpenFileOptions::new().force(true).read_bytes(&bytes).unwrap();
        assert_eq!(file.meta().transfer_syntax(), uids::IMPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(file.meta().media_storage_sop_class_uid(), "1.2.840.10008.5.1.4.1.1.7");
        assert_eq!(file.meta().media_storage_sop_instance_uid(), "2.25.1");
        assert_eq!(
            file.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
            "Doe^John"
        );
    }

    #[test]
    fn lenient_mode_reads_meta_group_without_magic() {
        let bytes = sample_file().to_bytes().unwrap();
        // replace the magic code with garbage
        let mut bytes = bytes.clone();
        bytes[128..132].copy_from_slice(b"XXXX");

        let file = OpenFileOptions::new().force(true).read_bytes(&bytes).unwrap();
        assert_eq!(file.meta().transfer_syntax(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(
            file.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
            "Doe^John"
        );
    }

    #[test]
    fn lenient_mode_with_short_source() {
        let file = OpenFileOptions::new()
            .force(true)
            .read_bytes(IMPLICIT_DATASET)
            .unwrap();
        assert_eq!(file.meta().media_storage_sop_instance_uid(), "2.25.1");
    }

    #[test]
    fn write_rejects_length_mismatch_without_output() {
        let mut file = sample_file();
        let bad: InMemElement = DataElement::new_with_len(
            tags::PATIENT_ID,
            VR::LO,
            dcmkit_core::Length(3),
            PrimitiveValue::from("1234"),
        );
        file.put(bad);

        let mut out = Vec::new();
        let err = file.write_all(&mut out).unwrap_err();
        assert!(matches!(err, WriteError::LengthMismatch { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn write_and_open_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.dcm");
        let file = sample_file();
        file.write_to_file(&path).unwrap();

        let back = open_file(&path).unwrap();
        assert_eq!(&*back, &*file);
        assert!(matches!(
            open_file(dir.path().join("missing.dcm")),
            Err(ReadError::OpenFile { .. })
        ));
    }
}
