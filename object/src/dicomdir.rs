//! Reading DICOMDIR files and rebuilding their record hierarchy.
//!
//! A DICOMDIR holds a flat list of directory records
//! in its _Directory Record Sequence_.
//! [`reconstruct`] turns such a list into a forest of
//! patient → study → series → leaf records,
//! following the order of the records in the file.
//! The offset fields linking records to one another
//! are read and kept, but not used to assemble the tree.
//!
//! # Example
//!
//! ```no_run
//! use dcmkit_object::DicomDir;
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let dicomdir = DicomDir::open("media/DICOMDIR")?;
//! for patient in dicomdir.patients() {
//!     println!("{} studies", patient.children.len());
//! }
//! for path in dicomdir.referenced_files("media") {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
use dcmkit_core::Tag;
use dcmkit_dictionary_std::{tags, uids};
use snafu::{ensure, OptionExt, ResultExt, Snafu};
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::file::OpenFileOptions;
use crate::mem::InMemDicomObject;
use crate::{DefaultDicomObject, ReadError};

/// An error which may occur when reading a DICOMDIR.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum DicomDirError {
    /// Could not read the DICOMDIR file
    #[snafu(display("Could not read DICOMDIR file"))]
    Open {
        #[snafu(backtrace)]
        source: ReadError,
    },
    /// The file is not a media storage directory
    #[snafu(display(
        "Not a DICOMDIR: media storage SOP class is `{}`",
        sop_class_uid
    ))]
    NotADirectory { sop_class_uid: String },
    /// The file has no _Directory Record Sequence_
    #[snafu(display("Missing directory record sequence"))]
    MissingRecordSequence,
}

pub type Result<T, E = DicomDirError> = std::result::Result<T, E>;

macro_rules! record_types {
    ($($variant:ident => $name:literal,)*) => {
        /// The type of a directory record,
        /// as in _Directory Record Type_ (0004,1430).
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum RecordType {
            $(
                #[doc = $name]
                $variant,
            )*
            /// A record type not known to this crate
            Other(String),
        }

        impl RecordType {
            /// Interpret a _Directory Record Type_ value.
            /// Trailing padding is ignored.
            pub fn parse(value: &str) -> Self {
                match value.trim_end_matches(|c| c == ' ' || c == '\0') {
                    $($name => RecordType::$variant,)*
                    other => RecordType::Other(other.to_string()),
                }
            }

            /// The defined term of this record type.
            pub fn as_str(&self) -> &str {
                match self {
                    $(RecordType::$variant => $name,)*
                    RecordType::Other(name) => name.as_str(),
                }
            }
        }
    };
}

record_types! {
    Patient => "PATIENT",
    Study => "STUDY",
    Series => "SERIES",
    Image => "IMAGE",
    RtDose => "RT DOSE",
    RtStructureSet => "RT STRUCTURE SET",
    RtPlan => "RT PLAN",
    RtTreatRecord => "RT TREAT RECORD",
    Presentation => "PRESENTATION",
    Waveform => "WAVEFORM",
    SrDocument => "SR DOCUMENT",
    KeyObjectDoc => "KEY OBJECT DOC",
    Spectroscopy => "SPECTROSCOPY",
    RawData => "RAW DATA",
    Registration => "REGISTRATION",
    Fiducial => "FIDUCIAL",
    HangingProtocol => "HANGING PROTOCOL",
    EncapDoc => "ENCAP DOC",
    Hl7StrucDoc => "HL7 STRUC DOC",
    ValueMap => "VALUE MAP",
    Stereometric => "STEREOMETRIC",
    Palette => "PALETTE",
    Implant => "IMPLANT",
    Measurement => "MEASUREMENT",
    Surface => "SURFACE",
    SurfaceScan => "SURFACE SCAN",
    Tract => "TRACT",
    Assessment => "ASSESSMENT",
    Radiotherapy => "RADIOTHERAPY",
    Plan => "PLAN",
    Private => "PRIVATE",
}

impl RecordType {
    /// Whether this record type is one of
    /// patient, study, or series.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            RecordType::Patient | RecordType::Study | RecordType::Series
        )
    }

    /// Whether records of this type are placed under a series.
    pub fn is_leaf(&self) -> bool {
        !self.is_structural() && !matches!(self, RecordType::Other(_))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single directory record.
///
/// The attributes which describe the record itself
/// are lifted into fields.
/// All other attributes of the record item
/// remain in `attributes`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryRecord {
    pub record_type: RecordType,
    /// Record In-use Flag; records are in use unless the flag is zero
    pub in_use: bool,
    /// Offset of the Next Directory Record, as read
    pub offset_next: u32,
    /// Offset of Referenced Lower-Level Directory Entity, as read
    pub offset_lower: u32,
    /// The components of the Referenced File ID
    pub referenced_file_id: Option<Vec<String>>,
    pub referenced_sop_class_uid: Option<String>,
    pub referenced_sop_instance_uid: Option<String>,
    pub referenced_transfer_syntax_uid: Option<String>,
    pub attributes: InMemDicomObject,
    /// Records below this one.
    /// Only filled in by [`reconstruct`].
    pub children: Vec<DirectoryRecord>,
}

impl DirectoryRecord {
    /// Create a record from an item of the _Directory Record Sequence_.
    pub fn from_item(mut item: InMemDicomObject) -> Self {
        let mut take_str = |tag: Tag| {
            item.take_element(tag)
                .ok()
                .and_then(|e| e.to_str().ok().map(|s| s.into_owned()))
        };

        let record_type =
            RecordType::parse(&take_str(tags::DIRECTORY_RECORD_TYPE).unwrap_or_default());
        let referenced_sop_class_uid = take_str(tags::REFERENCED_SOP_CLASS_UID_IN_FILE);
        let referenced_sop_instance_uid = take_str(tags::REFERENCED_SOP_INSTANCE_UID_IN_FILE);
        let referenced_transfer_syntax_uid =
            take_str(tags::REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE);

        let referenced_file_id = item
            .take_element(tags::REFERENCED_FILE_ID)
            .ok()
            .and_then(|e| e.to_multi_str().ok())
            .filter(|parts| !parts.is_empty());
        let in_use = item
            .take_element(tags::RECORD_IN_USE_FLAG)
            .ok()
            .and_then(|e| e.to_u16().ok())
            .map_or(true, |flag| flag != 0);
        let mut take_offset = |tag: Tag| {
            item.take_element(tag)
                .ok()
                .and_then(|e| e.to_u32().ok())
                .unwrap_or(0)
        };
        let offset_next = take_offset(tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD);
        let offset_lower = take_offset(tags::OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY);

        DirectoryRecord {
            record_type,
            in_use,
            offset_next,
            offset_lower,
            referenced_file_id,
            referenced_sop_class_uid,
            referenced_sop_instance_uid,
            referenced_transfer_syntax_uid,
            attributes: item,
            children: Vec::new(),
        }
    }

    /// The path to the referenced file,
    /// by joining the Referenced File ID components onto `base`.
    ///
    /// Returns `None` if any component is not a plain file name,
    /// such as `..`, an absolute path or a name with separators,
    /// so that the result never leaves `base`.
    pub fn referenced_file_path(&self, base: impl AsRef<Path>) -> Option<PathBuf> {
        let parts = self.referenced_file_id.as_ref()?;
        let mut path = base.as_ref().to_path_buf();
        for part in parts {
            let mut components = Path::new(part).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(name)), None) => path.push(name),
                _ => {
                    tracing::warn!("Ignoring unsafe referenced file ID component {:?}", part);
                    return None;
                }
            }
        }
        Some(path)
    }

    /// Iterate over this record and all records below it,
    /// depth first.
    pub fn iter(&self) -> Records<'_> {
        Records { stack: vec![self] }
    }
}

/// Depth-first iterator over a record tree.
#[derive(Debug)]
pub struct Records<'a> {
    stack: Vec<&'a DirectoryRecord>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a DirectoryRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.stack.pop()?;
        self.stack.extend(record.children.iter().rev());
        Some(record)
    }
}

/// Records under construction, one per level.
#[derive(Debug, Default)]
struct Levels {
    patients: Vec<DirectoryRecord>,
    patient: Option<DirectoryRecord>,
    study: Option<DirectoryRecord>,
    series: Option<DirectoryRecord>,
}

impl Levels {
    fn close_series(&mut self) {
        if let Some(series) = self.series.take() {
            match &mut self.study {
                Some(study) => study.children.push(series),
                None => tracing::debug!("Dropping series record outside of a study"),
            }
        }
    }

    fn close_study(&mut self) {
        self.close_series();
        if let Some(study) = self.study.take() {
            match &mut self.patient {
                Some(patient) => patient.children.push(study),
                None => tracing::debug!("Dropping study record outside of a patient"),
            }
        }
    }

    fn close_patient(&mut self) {
        self.close_study();
        if let Some(patient) = self.patient.take() {
            self.patients.push(patient);
        }
    }
}

/// Rebuild the record hierarchy from a flat list of directory records
/// in file order.
///
/// Each record is placed under the latest record of the level above.
/// Records of unknown type are skipped,
/// as are records which appear before any record
/// of the level above them.
pub fn reconstruct(records: Vec<DirectoryRecord>) -> Vec<DirectoryRecord> {
    let mut levels = Levels::default();
    for record in records {
        match record.record_type {
            RecordType::Patient => {
                levels.close_patient();
                levels.patient = Some(record);
            }
            RecordType::Study => {
                levels.close_study();
                levels.study = Some(record);
            }
            RecordType::Series => {
                levels.close_series();
                levels.series = Some(record);
            }
            RecordType::Other(ref name) => {
                tracing::debug!("Skipping directory record of unknown type `{}`", name);
            }
            _ => match &mut levels.series {
                Some(series) => series.children.push(record),
                None => tracing::debug!(
                    "Dropping {} record outside of a series",
                    record.record_type
                ),
            },
        }
    }
    levels.close_patient();
    levels.patients
}

/// A DICOMDIR file with its records.
#[derive(Debug, Clone)]
pub struct DicomDir {
    file: DefaultDicomObject,
    records: Vec<DirectoryRecord>,
    patients: Vec<DirectoryRecord>,
}

impl DicomDir {
    /// Read a DICOMDIR file from the given path.
    pub fn open<P>(path: P) -> Result<DicomDir>
    where
        P: AsRef<Path>,
    {
        let file = OpenFileOptions::new().open_file(path).context(OpenSnafu)?;
        Self::from_file(file)
    }

    /// Interpret a DICOM file object as a DICOMDIR.
    ///
    /// Fails if the media storage SOP class
    /// is not the media storage directory storage class.
    pub fn from_file(file: DefaultDicomObject) -> Result<DicomDir> {
        let sop_class_uid = file.meta().media_storage_sop_class_uid();
        ensure!(
            sop_class_uid == uids::MEDIA_STORAGE_DIRECTORY_STORAGE,
            NotADirectorySnafu { sop_class_uid }
        );

        let records: Vec<_> = file
            .element_opt(tags::DIRECTORY_RECORD_SEQUENCE)
            .and_then(|e| e.items())
            .context(MissingRecordSequenceSnafu)?
            .iter()
            .cloned()
            .map(DirectoryRecord::from_item)
            .collect();
        let patients = reconstruct(records.clone());

        Ok(DicomDir {
            file,
            records,
            patients,
        })
    }

    /// The File-set ID, if any.
    pub fn file_set_id(&self) -> Option<String> {
        self.file
            .string_value(tags::FILE_SET_ID)
            .filter(|id| !id.is_empty())
    }

    /// All records as found in the file, in file order.
    pub fn records(&self) -> &[DirectoryRecord] {
        &self.records
    }

    /// The reconstructed record trees, one per patient.
    pub fn patients(&self) -> &[DirectoryRecord] {
        &self.patients
    }

    /// The paths of the files referenced by leaf records in the tree,
    /// relative to `base`.
    pub fn referenced_files<'a>(
        &'a self,
        base: impl AsRef<Path> + 'a,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        self.patients
            .iter()
            .flat_map(DirectoryRecord::iter)
            .filter(|record| record.record_type.is_leaf())
            .filter_map(move |record| record.referenced_file_path(base.as_ref()))
    }

    /// The underlying file object.
    pub fn file(&self) -> &DefaultDicomObject {
        &self.file
    }

    pub fn into_file(self) -> DefaultDicomObject {
        self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::FileMetaTableBuilder;
    use crate::{read_bytes, FileDicomObject};
    use dcmkit_core::value::{PrimitiveValue, Value};
    use dcmkit_core::{DataElement, Length, VR};

    fn record(record_type: &str, file_id: &[&str]) -> InMemDicomObject {
        let mut item = InMemDicomObject::from_element_iter(vec![
            DataElement::new(
                tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD,
                VR::UL,
                PrimitiveValue::from_u32s(&[0]),
            ),
            DataElement::new(
                tags::RECORD_IN_USE_FLAG,
                VR::US,
                PrimitiveValue::from_u16s(&[0xFFFF]),
            ),
            DataElement::new(
                tags::OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY,
                VR::UL,
                PrimitiveValue::from_u32s(&[0]),
            ),
            DataElement::new(tags::DIRECTORY_RECORD_TYPE, VR::CS, record_type),
        ]);
        if !file_id.is_empty() {
            item.put(DataElement::new(
                tags::REFERENCED_FILE_ID,
                VR::CS,
                PrimitiveValue::from_strs(file_id),
            ));
            item.put(DataElement::new(
                tags::REFERENCED_SOP_INSTANCE_UID_IN_FILE,
                VR::UI,
                "2.25.7\0",
            ));
        }
        item
    }

    fn flat(items: Vec<InMemDicomObject>) -> Vec<DirectoryRecord> {
        items.into_iter().map(DirectoryRecord::from_item).collect()
    }

    fn types(records: &[DirectoryRecord]) -> Vec<&RecordType> {
        records.iter().map(|r| &r.record_type).collect()
    }

    #[test]
    fn record_type_names() {
        assert_eq!(RecordType::parse("PATIENT "), RecordType::Patient);
        assert_eq!(RecordType::parse("SR DOCUMENT"), RecordType::SrDocument);
        assert_eq!(
            RecordType::parse("TOPIC"),
            RecordType::Other("TOPIC".to_string())
        );
        assert_eq!(RecordType::RtStructureSet.to_string(), "RT STRUCTURE SET");
        assert!(RecordType::Series.is_structural());
        assert!(RecordType::Presentation.is_leaf());
        assert!(!RecordType::Other("TOPIC".into()).is_leaf());
    }

    #[test]
    fn record_fields_are_lifted() {
        let mut item = record("IMAGE", &["DIR1", "IMG0001"]);
        item.put(DataElement::new(
            tags::RECORD_IN_USE_FLAG,
            VR::US,
            PrimitiveValue::from_u16s(&[0]),
        ));
        item.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));

        let record = DirectoryRecord::from_item(item);
        assert_eq!(record.record_type, RecordType::Image);
        assert!(!record.in_use);
        assert_eq!(
            record.referenced_file_id,
            Some(vec!["DIR1".to_string(), "IMG0001".to_string()])
        );
        assert_eq!(record.referenced_sop_instance_uid.as_deref(), Some("2.25.7"));
        assert_eq!(record.referenced_sop_class_uid, None);
        assert_eq!(
            record.attributes.tags().collect::<Vec<_>>(),
            vec![tags::PATIENT_NAME]
        );
        assert_eq!(
            record.referenced_file_path("/media"),
            Some(Path::new("/media").join("DIR1").join("IMG0001"))
        );
    }

    #[test]
    fn referenced_file_path_stays_under_base() {
        let path_of = |file_id: &[&str]| {
            DirectoryRecord::from_item(record("IMAGE", file_id)).referenced_file_path("media")
        };

        assert_eq!(
            path_of(&["DIR1", "IMG0001"]),
            Some(Path::new("media").join("DIR1").join("IMG0001"))
        );
        assert_eq!(path_of(&["..", "..", "etc", "passwd"]), None);
        assert_eq!(path_of(&["/etc", "passwd"]), None);
        assert_eq!(path_of(&["DIR1/../../secret"]), None);
        assert_eq!(path_of(&["."]), None);
    }

    #[test]
    fn reconstruct_patient_study_series_tree() {
        let records = flat(vec![
            record("PATIENT", &[]),
            record("STUDY", &[]),
            record("SERIES", &[]),
            record("IMAGE", &["A"]),
            record("IMAGE", &["B"]),
            record("SERIES", &[]),
            record("IMAGE", &["C"]),
        ]);

        let patients = reconstruct(records);
        assert_eq!(patients.len(), 1);
        let studies = &patients[0].children;
        assert_eq!(studies.len(), 1);
        let series = &studies[0].children;
        assert_eq!(types(series), vec![&RecordType::Series, &RecordType::Series]);
        assert_eq!(series[0].children.len(), 2);
        assert_eq!(series[1].children.len(), 1);
        assert_eq!(
            series[1].children[0].referenced_file_id,
            Some(vec!["C".to_string()])
        );
    }

    #[test]
    fn reconstruct_several_patients() {
        let records = flat(vec![
            record("PATIENT", &[]),
            record("STUDY", &[]),
            record("PATIENT", &[]),
            record("STUDY", &[]),
            record("STUDY", &[]),
            record("SERIES", &[]),
            record("SR DOCUMENT", &["SR"]),
        ]);

        let patients = reconstruct(records);
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].children.len(), 1);
        assert_eq!(patients[1].children.len(), 2);
        assert!(patients[1].children[0].children.is_empty());
        assert_eq!(
            types(&patients[1].children[1].children[0].children),
            vec![&RecordType::SrDocument]
        );
    }

    #[test]
    fn unknown_and_orphan_records_are_skipped() {
        let records = flat(vec![
            record("IMAGE", &["ORPHAN"]),
            record("PATIENT", &[]),
            record("TOPIC", &[]),
            record("STUDY", &[]),
            record("IMAGE", &["NO_SERIES"]),
            record("SERIES", &[]),
            record("PRIVATE", &["P"]),
        ]);

        let patients = reconstruct(records);
        assert_eq!(patients.len(), 1);
        let leaves: Vec<_> = patients[0]
            .iter()
            .filter(|r| r.record_type.is_leaf())
            .collect();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].record_type, RecordType::Private);
    }

    #[test]
    fn inactive_records_are_kept() {
        let mut inactive = record("IMAGE", &["OLD"]);
        inactive.put(DataElement::new(
            tags::RECORD_IN_USE_FLAG,
            VR::US,
            PrimitiveValue::from_u16s(&[0]),
        ));
        let records = flat(vec![
            record("PATIENT", &[]),
            record("STUDY", &[]),
            record("SERIES", &[]),
            inactive,
        ]);

        let patients = reconstruct(records);
        let image = &patients[0].children[0].children[0].children[0];
        assert!(!image.in_use);
    }

    fn dicomdir_file(sop_class_uid: &str) -> FileDicomObject<InMemDicomObject> {
        let items = vec![
            record("PATIENT", &[]),
            record("STUDY", &[]),
            record("SERIES", &[]),
            record("IMAGE", &["DIR1", "IMG1"]),
            record("IMAGE", &["DIR1", "IMG2"]),
        ];
        let obj = InMemDicomObject::from_element_iter(vec![
            DataElement::new(tags::FILE_SET_ID, VR::CS, "MYSET "),
            DataElement::new(
                tags::DIRECTORY_RECORD_SEQUENCE,
                VR::SQ,
                Value::new_sequence(items, Length::UNDEFINED),
            ),
        ]);
        FileDicomObject::new(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid(sop_class_uid)
                .media_storage_sop_instance_uid("2.25.42")
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .build()
                .unwrap(),
            obj,
        )
    }

    #[test]
    fn read_dicomdir_from_bytes() {
        let bytes = dicomdir_file(uids::MEDIA_STORAGE_DIRECTORY_STORAGE)
            .to_bytes()
            .unwrap();
        let dicomdir = DicomDir::from_file(read_bytes(&bytes).unwrap()).unwrap();

        assert_eq!(dicomdir.file_set_id().as_deref(), Some("MYSET"));
        assert_eq!(dicomdir.records().len(), 5);
        assert_eq!(dicomdir.patients().len(), 1);
        let files: Vec<_> = dicomdir.referenced_files("base").collect();
        assert_eq!(
            files,
            vec![
                Path::new("base").join("DIR1").join("IMG1"),
                Path::new("base").join("DIR1").join("IMG2"),
            ]
        );
    }

    #[test]
    fn reject_other_sop_classes() {
        let err = DicomDir::from_file(dicomdir_file(uids::SECONDARY_CAPTURE_IMAGE_STORAGE))
            .unwrap_err();
        assert!(matches!(err, DicomDirError::NotADirectory { .. }));
    }

    #[test]
    fn open_dicomdir_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DICOMDIR");
        dicomdir_file(uids::MEDIA_STORAGE_DIRECTORY_STORAGE)
            .write_to_file(&path)
            .unwrap();

        let dicomdir = DicomDir::open(&path).unwrap();
        assert_eq!(dicomdir.referenced_files(dir.path()).count(), 2);

        let err = DicomDir::open(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, DicomDirError::Open { .. }));
    }
}
