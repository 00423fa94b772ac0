//! This crate contains a high-level abstraction for reading and manipulating
//! DICOM objects.
//! At this level, objects are comparable to a dictionary of elements,
//! in which some of them can have DICOM objects themselves.
//!
//! Loading a DICOM file can be done with ease via the function [`open_file`].
//! For additional file reading options, use [`OpenFileOptions`].
//! New DICOM instances can be built from scratch using [`InMemDicomObject`]
//! (see the [`mem`] module for more details).
//!
//! # Examples
//!
//! Read an object and fetch some attributes:
//!
//! ```no_run
//! use dcmkit_dictionary_std::tags;
//! use dcmkit_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//!
//! let patient_name = obj.element(tags::PATIENT_NAME)?.to_str()?;
//! let modality = obj.element_by_name("Modality")?.to_str()?;
//! # Ok(())
//! # }
//! ```
//!
//! DICOM objects can be serialized back into DICOM encoded bytes.
//! Writing a file requires a [file meta table],
//! which can be built with a [`FileMetaTableBuilder`]:
//!
//! [file meta table]: crate::meta::FileMetaTable
//!
//! ```
//! # use dcmkit_object::{InMemDicomObject, FileMetaTableBuilder};
//! # use dcmkit_core::{DataElement, Tag, VR};
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use dcmkit_dictionary_std::uids;
//!
//! let mut obj = InMemDicomObject::new_empty();
//! obj.put(DataElement::new(Tag(0x0010, 0x0010), VR::PN, "Doe^John"));
//!
//! let file_obj = obj.with_meta(
//!     FileMetaTableBuilder::new()
//!         .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
//!         .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
//!         .media_storage_sop_instance_uid("2.25.1234"),
//! )?;
//! let bytes = file_obj.to_bytes()?;
//! assert_eq!(&bytes[128..132], b"DICM");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! Converting an object to another transfer syntax is done
//! through the [`Transcode`] trait,
//! and DICOMDIR files are read with [`DicomDir`].
use dcmkit_core::Tag;
use snafu::{Backtrace, Snafu};

pub mod dicomdir;
pub mod file;
pub mod mem;
pub mod meta;
pub mod tokens;
pub mod transcode;

pub use crate::dicomdir::{reconstruct, DicomDir, DirectoryRecord, RecordType};
pub use crate::file::{
    from_reader, open_file, read_bytes, FileDicomObject, OpenFileOptions, ReadPreamble,
    WriteOptions,
};
pub use crate::mem::{InMemDicomObject, InMemElement};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::transcode::{ConvertOptions, Transcode};
pub use dcmkit_dictionary_std::StandardDataDictionary;
pub use dcmkit_parser::dataset::{OddLengthStrategy, SequenceLengthStrategy};

/// The in-memory data set type: a mapping from tags to data elements.
pub type DataSet = InMemDicomObject;

/// The default file object type: a data set with its file meta group.
pub type DefaultDicomObject = FileDicomObject<InMemDicomObject>;

/// The implementation class UID written to new file meta groups.
///
/// Generated as per the standard, part 5, section B.2.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.302417385939140617146802327416372418823";

/// The implementation version name written to new file meta groups.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMKIT 0.3";

/// An error which may occur when loading a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read from file '{}'", filename.display()))]
    ReadFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// The `DICM` magic code was not found where expected
    #[snafu(display("Not a DICOM file: missing `DICM` magic code"))]
    NotDicom { backtrace: Backtrace },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not create data set parser"))]
    CreateParser {
        #[snafu(backtrace)]
        source: dcmkit_parser::dataset::read::Error,
    },
    #[snafu(display("Could not read data set token"))]
    ReadToken {
        #[snafu(backtrace)]
        source: dcmkit_parser::dataset::read::Error,
    },
    #[snafu(display("Missing element value after header token"))]
    MissingElementValue { backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Unexpected token {:?}", token))]
    UnexpectedToken {
        token: Box<dcmkit_parser::dataset::DataToken>,
        backtrace: Backtrace,
    },
    #[snafu(display("Premature data set end"))]
    PrematureEnd { backtrace: Backtrace },
}

/// An error which may occur when writing a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not create data set printer"))]
    CreatePrinter {
        #[snafu(backtrace)]
        source: dcmkit_parser::dataset::write::Error,
    },
    #[snafu(display("Could not print meta group data set"))]
    PrintMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not print data set"))]
    PrintDataSet {
        #[snafu(backtrace)]
        source: dcmkit_parser::dataset::write::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not flush output"))]
    FlushOutput {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// A primitive element declares a length other than its value size
    #[snafu(display(
        "Element {} declares length {} but its value has {} bytes",
        tag,
        declared,
        actual
    ))]
    LengthMismatch {
        tag: Tag,
        declared: dcmkit_core::Length,
        actual: usize,
        backtrace: Backtrace,
    },
}

/// An error which may occur when looking up a DICOM object's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
}

impl AccessError {
    pub fn into_access_by_name(self, alias: impl Into<String>) -> AccessByNameError {
        match self {
            AccessError::NoSuchDataElementTag { tag, backtrace } => {
                AccessByNameError::NoSuchDataElementAlias {
                    tag,
                    alias: alias.into(),
                    backtrace,
                }
            }
        }
    }
}

/// An error which may occur when looking up a DICOM object's attributes
/// by a keyword (or alias) instead of by tag.
///
/// These accesses incur a look-up at the data element dictionary,
/// which may fail if no such entry exists.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AccessByNameError {
    #[snafu(display("No such data element {} (with tag {})", alias, tag))]
    NoSuchDataElementAlias {
        tag: Tag,
        alias: String,
        backtrace: Backtrace,
    },

    /// Could not resolve attribute name from the data dictionary
    #[snafu(display("Unknown data attribute named `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum WithMetaError {
    /// Could not build file meta table
    BuildMetaTable {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
}
