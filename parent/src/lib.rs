//! # dcmkit
//!
//! This crate serves as a parent for the library crates of the dcmkit project,
//! and offers the main entry points of the toolkit as plain functions.
//!
//! The member crates are also available independently,
//! under the `dcmkit-` prefix.
//! For instance, the module `object`
//! lives in the crate named `dcmkit-object`.
//!
//! ## Entry points
//!
//! - [`decode`] and [`encode`] read and write a bare data set
//!   in a given transfer syntax.
//! - [`read_file`] and [`write_file`] handle complete DICOM files,
//!   with preamble, magic code and file meta group.
//! - [`convert`] produces a copy of a file object
//!   for another transfer syntax.
//! - [`reconstruct_directory`] rebuilds the patient/study/series tree
//!   of a DICOMDIR from its flat list of records.
//!
//! ## Modules
//!
//! - [`object`] holds the in-memory data set,
//!   the file container and DICOMDIR support.
//! - [`core`] contains the data types that the other crates rely on,
//!   including [`Tag`](dcmkit_core::Tag), [`VR`](dcmkit_core::VR),
//!   values and [data elements](dcmkit_core::DataElement).
//! - The standard data dictionary is in [`dictionary_std`],
//!   with constants for known tags and UIDs.
//! - [`transfer_syntax`] is the registry of known transfer syntaxes.
//! - [`encoding`] and [`parser`] contain the lower level
//!   element codecs and data set readers and writers.
//!
//! ## Example
//!
//! ```
//! use dcmkit::core::{DataElement, VR};
//! use dcmkit::dictionary_std::tags;
//! use dcmkit::object::InMemDicomObject;
//! use dcmkit::transfer_syntax::entries::EXPLICIT_VR_LITTLE_ENDIAN;
//! # fn run() -> Result<(), dcmkit::Error> {
//! let obj = InMemDicomObject::from_element_iter(vec![
//!     DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4"),
//! ]);
//! let bytes = dcmkit::encode(&obj, &EXPLICIT_VR_LITTLE_ENDIAN)?;
//! assert_eq!(bytes.len(), 16);
//! let back = dcmkit::decode(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN)?;
//! // the value was padded to an even length
//! let uid = back.element(tags::SOP_INSTANCE_UID).unwrap();
//! assert_eq!(uid.value().primitive().unwrap().as_bytes(), b"1.2.3.4\0");
//! assert_eq!(uid.to_str().unwrap(), "1.2.3.4");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub use dcmkit_core as core;
pub use dcmkit_dictionary_std as dictionary_std;
pub use dcmkit_encoding as encoding;
pub use dcmkit_object as object;
pub use dcmkit_parser as parser;
pub use dcmkit_transfer_syntax_registry as transfer_syntax;

use dcmkit_encoding::{TransferSyntax, TransferSyntaxIndex};
use dcmkit_object::{
    DefaultDicomObject, DirectoryRecord, InMemDicomObject, OpenFileOptions, ReadError,
    ReadPreamble, Transcode, WriteError,
};
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{OptionExt, ResultExt, Snafu};

/// An error from one of the toolkit's entry points.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The transfer syntax UID is not in the registry
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String },
    /// Could not decode the data
    #[snafu(display("Could not decode DICOM data"))]
    Decode { source: ReadError },
    /// Could not encode the data
    #[snafu(display("Could not encode DICOM data"))]
    Encode { source: WriteError },
    /// Could not convert the object
    #[snafu(display("Could not convert DICOM object"))]
    Convert {
        source: dcmkit_object::transcode::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Look up a transfer syntax in the registry by its UID.
///
/// Trailing padding in `uid` is ignored.
pub fn lookup_transfer_syntax(uid: &str) -> Result<&'static TransferSyntax> {
    TransferSyntaxRegistry
        .get(uid)
        .context(UnsupportedTransferSyntaxSnafu { uid })
}

/// Decode a bare data set encoded in the given transfer syntax.
pub fn decode(bytes: &[u8], ts: &TransferSyntax) -> Result<InMemDicomObject> {
    InMemDicomObject::read_dataset_with_ts(bytes, ts).context(DecodeSnafu)
}

/// Encode a data set in the given transfer syntax,
/// without preamble, magic code, nor file meta group.
pub fn encode(obj: &InMemDicomObject, ts: &TransferSyntax) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    obj.write_dataset_with_ts(&mut out, ts)
        .context(EncodeSnafu)?;
    Ok(out)
}

/// Read a complete DICOM file from memory.
///
/// In lenient mode,
/// a missing `DICM` magic code is tolerated:
/// reading proceeds at offset 132,
/// and a data set without a file meta group
/// is read as _Implicit VR Little Endian_.
pub fn read_file(bytes: &[u8], lenient: bool) -> Result<DefaultDicomObject> {
    let options = if lenient {
        OpenFileOptions::new().force(true)
    } else {
        OpenFileOptions::new().read_preamble(ReadPreamble::Always)
    };
    options.read_bytes(bytes).context(DecodeSnafu)
}

/// Write a complete DICOM file into memory.
pub fn write_file(file: &DefaultDicomObject) -> Result<Vec<u8>> {
    file.to_bytes().context(EncodeSnafu)
}

/// Produce a copy of the file object for the target transfer syntax,
/// with a rebuilt file meta group.
pub fn convert(file: &DefaultDicomObject, ts: &TransferSyntax) -> Result<DefaultDicomObject> {
    file.transcode(ts).context(ConvertSnafu)
}

/// Rebuild the patient/study/series hierarchy
/// of a flat list of directory records in file order.
pub fn reconstruct_directory(records: Vec<DirectoryRecord>) -> Vec<DirectoryRecord> {
    dcmkit_object::reconstruct(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::{DataElement, VR};
    use dcmkit_dictionary_std::{tags, uids};
    use dcmkit_object::FileMetaTableBuilder;
    use dcmkit_transfer_syntax_registry::entries::{
        EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };
    use rstest::rstest;

    fn sample_file() -> DefaultDicomObject {
        InMemDicomObject::from_element_iter(vec![
            DataElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7\0"),
            DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "2.25.77\0"),
            DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
        ])
        .with_meta(FileMetaTableBuilder::new().transfer_syntax(uids::IMPLICIT_VR_LITTLE_ENDIAN))
        .unwrap()
    }

    #[test]
    fn lookup_known_and_unknown_syntaxes() {
        assert_eq!(
            lookup_transfer_syntax("1.2.840.10008.1.2.1\0").unwrap().uid(),
            uids::EXPLICIT_VR_LITTLE_ENDIAN
        );
        assert!(matches!(
            lookup_transfer_syntax("1.2.3.4.5"),
            Err(Error::UnsupportedTransferSyntax { ref uid }) if uid == "1.2.3.4.5"
        ));
    }

    #[test]
    fn file_entry_points() {
        let bytes = write_file(&sample_file()).unwrap();
        let file = read_file(&bytes, false).unwrap();
        assert_eq!(&*file, &*sample_file());

        let converted = convert(&file, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            converted.meta().transfer_syntax(),
            uids::EXPLICIT_VR_LITTLE_ENDIAN
        );
        assert_eq!(&*converted, &*file);
    }

    #[rstest]
    #[case(false, false)]
    #[case(true, true)]
    fn short_input_needs_lenient_mode(#[case] lenient: bool, #[case] accepted: bool) {
        let bytes = encode(&sample_file(), &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert!(bytes.len() < 132);
        assert_eq!(read_file(&bytes, lenient).is_ok(), accepted);
    }

    #[test]
    fn encode_then_decode() {
        let obj = (*sample_file()).clone();
        let bytes = encode(&obj, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(decode(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap(), obj);
    }

    #[test]
    fn directory_entry_point() {
        let record = |name: &str| {
            DirectoryRecord::from_item(InMemDicomObject::from_element_iter(vec![
                DataElement::new(tags::DIRECTORY_RECORD_TYPE, VR::CS, name),
            ]))
        };
        let patients = reconstruct_directory(vec![
            record("PATIENT"),
            record("STUDY"),
            record("SERIES"),
            record("IMAGE"),
        ]);
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].children[0].children[0].children.len(), 1);
    }
}
