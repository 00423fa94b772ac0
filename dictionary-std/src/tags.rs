//! Data element tag declarations
//!
//! Each constant maps an attribute alias to its tag.
//! Repeating group attributes are declared with the group's open digits zeroed.
//!
//! The same records make up the entries of the standard data dictionary.

use dcmkit_core::dictionary::{DataDictionaryEntryRef, TagRange::*};
use dcmkit_core::header::{Tag, VR};

type E<'a> = DataDictionaryEntryRef<'a>;

/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// PrivateInformationCreatorUID (0002,0100) UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// FileSetID (0004,1130) CS
#[rustfmt::skip]
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// FileSetDescriptorFileID (0004,1141) CS
#[rustfmt::skip]
pub const FILE_SET_DESCRIPTOR_FILE_ID: Tag = Tag(0x0004, 0x1141);
/// SpecificCharacterSetOfFileSetDescriptorFile (0004,1142) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE: Tag = Tag(0x0004, 0x1142);
/// OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity (0004,1200) UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity (0004,1202) UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// FileSetConsistencyFlag (0004,1212) US
#[rustfmt::skip]
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// DirectoryRecordSequence (0004,1220) SQ
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// OffsetOfTheNextDirectoryRecord (0004,1400) UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// RecordInUseFlag (0004,1410) US
#[rustfmt::skip]
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// OffsetOfReferencedLowerLevelDirectoryEntity (0004,1420) UL
#[rustfmt::skip]
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// DirectoryRecordType (0004,1430) CS
#[rustfmt::skip]
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// PrivateRecordUID (0004,1432) UI
#[rustfmt::skip]
pub const PRIVATE_RECORD_UID: Tag = Tag(0x0004, 0x1432);
/// ReferencedFileID (0004,1500) CS
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// MRDRDirectoryRecordOffset (0004,1504) UL
#[rustfmt::skip]
pub const MRDR_DIRECTORY_RECORD_OFFSET: Tag = Tag(0x0004, 0x1504);
/// ReferencedSOPClassUIDInFile (0004,1510) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// ReferencedSOPInstanceUIDInFile (0004,1511) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// ReferencedTransferSyntaxUIDInFile (0004,1512) UI
#[rustfmt::skip]
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// ReferencedRelatedGeneralSOPClassUIDInFile (0004,151A) UI
#[rustfmt::skip]
pub const REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x151A);
/// NumberOfReferences (0004,1600) UL
#[rustfmt::skip]
pub const NUMBER_OF_REFERENCES: Tag = Tag(0x0004, 0x1600);
/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// LanguageCodeSequence (0008,0006) SQ
#[rustfmt::skip]
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// IssuerOfAccessionNumberSequence (0008,0051) SQ
#[rustfmt::skip]
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// QueryRetrieveLevel (0008,0052) CS
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// RetrieveAETitle (0008,0054) AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// InstanceAvailability (0008,0056) CS
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// FailedSOPInstanceUIDList (0008,0058) UI
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// ConversionType (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// PresentationIntentType (0008,0068) CS
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// InstitutionCodeSequence (0008,0082) SQ
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// ReferringPhysicianAddress (0008,0092) ST
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// ReferringPhysicianTelephoneNumbers (0008,0094) SH
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// ReferringPhysicianIdentificationSequence (0008,0096) SQ
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// CodeValue (0008,0100) SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodingSchemeVersion (0008,0103) SH
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// CodeMeaning (0008,0104) LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// MappingResource (0008,0105) CS
#[rustfmt::skip]
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);
/// ContextGroupVersion (0008,0106) DT
#[rustfmt::skip]
pub const CONTEXT_GROUP_VERSION: Tag = Tag(0x0008, 0x0106);
/// ContextIdentifier (0008,010F) CS
#[rustfmt::skip]
pub const CONTEXT_IDENTIFIER: Tag = Tag(0x0008, 0x010F);
/// CodingSchemeIdentificationSequence (0008,0110) SQ
#[rustfmt::skip]
pub const CODING_SCHEME_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0110);
/// EquivalentCodeSequence (0008,0121) SQ
#[rustfmt::skip]
pub const EQUIVALENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0121);
/// TimezoneOffsetFromUTC (0008,0201) SH
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// StationName (0008,1010) SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PhysiciansOfRecord (0008,1048) PN
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// PhysiciansOfRecordIdentificationSequence (0008,1049) SQ
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1049);
/// PerformingPhysicianName (0008,1050) PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// PerformingPhysicianIdentificationSequence (0008,1052) SQ
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1052);
/// NameOfPhysiciansReadingStudy (0008,1060) PN
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// PhysiciansReadingStudyIdentificationSequence (0008,1062) SQ
#[rustfmt::skip]
pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1062);
/// OperatorsName (0008,1070) PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// OperatorIdentificationSequence (0008,1072) SQ
#[rustfmt::skip]
pub const OPERATOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1072);
/// AdmittingDiagnosesDescription (0008,1080) LO
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// AdmittingDiagnosesCodeSequence (0008,1084) SQ
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1084);
/// ManufacturerModelName (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedPatientSequence (0008,1120) SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// ReferencedVisitSequence (0008,1125) SQ
#[rustfmt::skip]
pub const REFERENCED_VISIT_SEQUENCE: Tag = Tag(0x0008, 0x1125);
/// ReferencedStereometricInstanceSequence (0008,1134) SQ
#[rustfmt::skip]
pub const REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x1134);
/// ReferencedWaveformSequence (0008,113A) SQ
#[rustfmt::skip]
pub const REFERENCED_WAVEFORM_SEQUENCE: Tag = Tag(0x0008, 0x113A);
/// ReferencedImageSequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedInstanceSequence (0008,114A) SQ
#[rustfmt::skip]
pub const REFERENCED_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114A);
/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// ReferencedFrameNumber (0008,1160) IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// FrameExtractionSequence (0008,1164) SQ
#[rustfmt::skip]
pub const FRAME_EXTRACTION_SEQUENCE: Tag = Tag(0x0008, 0x1164);
/// TransactionUID (0008,1195) UI
#[rustfmt::skip]
pub const TRANSACTION_UID: Tag = Tag(0x0008, 0x1195);
/// FailureReason (0008,1197) US
#[rustfmt::skip]
pub const FAILURE_REASON: Tag = Tag(0x0008, 0x1197);
/// FailedSOPSequence (0008,1198) SQ
#[rustfmt::skip]
pub const FAILED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1198);
/// ReferencedSOPSequence (0008,1199) SQ
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// StudiesContainingOtherReferencedInstancesSequence (0008,1200) SQ
#[rustfmt::skip]
pub const STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE: Tag = Tag(0x0008, 0x1200);
/// RelatedSeriesSequence (0008,1250) SQ
#[rustfmt::skip]
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// DerivationDescription (0008,2111) ST
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// AnatomicRegionSequence (0008,2218) SQ
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// AnatomicRegionModifierSequence (0008,2220) SQ
#[rustfmt::skip]
pub const ANATOMIC_REGION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2220);
/// PrimaryAnatomicStructureSequence (0008,2228) SQ
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE: Tag = Tag(0x0008, 0x2228);
/// PrimaryAnatomicStructureModifierSequence (0008,2230) SQ
#[rustfmt::skip]
pub const PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2230);
/// AlternateRepresentationSequence (0008,3001) SQ
#[rustfmt::skip]
pub const ALTERNATE_REPRESENTATION_SEQUENCE: Tag = Tag(0x0008, 0x3001);
/// FrameType (0008,9007) CS
#[rustfmt::skip]
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// ReferencedImageEvidenceSequence (0008,9092) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9092);
/// ReferencedRawDataSequence (0008,9121) SQ
#[rustfmt::skip]
pub const REFERENCED_RAW_DATA_SEQUENCE: Tag = Tag(0x0008, 0x9121);
/// DerivationImageSequence (0008,9124) SQ
#[rustfmt::skip]
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x9124);
/// SourceImageEvidenceSequence (0008,9154) SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9154);
/// DerivationCodeSequence (0008,9215) SQ
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// ReferencedPresentationStateSequence (0008,9237) SQ
#[rustfmt::skip]
pub const REFERENCED_PRESENTATION_STATE_SEQUENCE: Tag = Tag(0x0008, 0x9237);
/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// IssuerOfPatientIDQualifiersSequence (0010,0024) SQ
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE: Tag = Tag(0x0010, 0x0024);
/// SourcePatientGroupIdentificationSequence (0010,0026) SQ
#[rustfmt::skip]
pub const SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0026);
/// GroupOfPatientsIdentificationSequence (0010,0027) SQ
#[rustfmt::skip]
pub const GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0027);
/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientInsurancePlanCodeSequence (0010,0050) SQ
#[rustfmt::skip]
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// PatientPrimaryLanguageCodeSequence (0010,0101) SQ
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0101);
/// PatientPrimaryLanguageModifierCodeSequence (0010,0102) SQ
#[rustfmt::skip]
pub const PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0102);
/// QualityControlSubject (0010,0200) CS
#[rustfmt::skip]
pub const QUALITY_CONTROL_SUBJECT: Tag = Tag(0x0010, 0x0200);
/// QualityControlSubjectTypeCodeSequence (0010,0201) SQ
#[rustfmt::skip]
pub const QUALITY_CONTROL_SUBJECT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0201);
/// OtherPatientNames (0010,1001) PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// OtherPatientIDsSequence (0010,1002) SQ
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientSizeCodeSequence (0010,1021) SQ
#[rustfmt::skip]
pub const PATIENT_SIZE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x1021);
/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040) LO
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// ReferencedPatientPhotoSequence (0010,1100) SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_PHOTO_SEQUENCE: Tag = Tag(0x0010, 0x1100);
/// MedicalAlerts (0010,2000) LO
#[rustfmt::skip]
pub const MEDICAL_ALERTS: Tag = Tag(0x0010, 0x2000);
/// Allergies (0010,2110) LO
#[rustfmt::skip]
pub const ALLERGIES: Tag = Tag(0x0010, 0x2110);
/// EthnicGroup (0010,2160) SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation (0010,2180) SH
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// AdditionalPatientHistory (0010,21B0) LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PregnancyStatus (0010,21C0) US
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// PatientSpeciesCodeSequence (0010,2202) SQ
#[rustfmt::skip]
pub const PATIENT_SPECIES_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2202);
/// PatientBreedCodeSequence (0010,2293) SQ
#[rustfmt::skip]
pub const PATIENT_BREED_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2293);
/// BreedRegistrationSequence (0010,2294) SQ
#[rustfmt::skip]
pub const BREED_REGISTRATION_SEQUENCE: Tag = Tag(0x0010, 0x2294);
/// BreedRegistryCodeSequence (0010,2296) SQ
#[rustfmt::skip]
pub const BREED_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2296);
/// PatientComments (0010,4000) LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// PatientIdentityRemoved (0012,0062) CS
#[rustfmt::skip]
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// DeidentificationMethod (0012,0063) LO
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// DeidentificationMethodCodeSequence (0012,0064) SQ
#[rustfmt::skip]
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// ConsentForClinicalTrialUseSequence (0012,0083) SQ
#[rustfmt::skip]
pub const CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE: Tag = Tag(0x0012, 0x0083);
/// ContrastBolusAgent (0018,0010) LO
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// ContrastBolusAgentSequence (0018,0012) SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT_SEQUENCE: Tag = Tag(0x0018, 0x0012);
/// ContrastBolusAdministrationRouteSequence (0018,0014) SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE: Tag = Tag(0x0018, 0x0014);
/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanOptions (0018,0022) CS
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// InterventionDrugInformationSequence (0018,0026) SQ
#[rustfmt::skip]
pub const INTERVENTION_DRUG_INFORMATION_SEQUENCE: Tag = Tag(0x0018, 0x0026);
/// InterventionDrugCodeSequence (0018,0029) SQ
#[rustfmt::skip]
pub const INTERVENTION_DRUG_CODE_SEQUENCE: Tag = Tag(0x0018, 0x0029);
/// AdditionalDrugSequence (0018,002A) SQ
#[rustfmt::skip]
pub const ADDITIONAL_DRUG_SEQUENCE: Tag = Tag(0x0018, 0x002A);
/// InterventionSequence (0018,0036) SQ
#[rustfmt::skip]
pub const INTERVENTION_SEQUENCE: Tag = Tag(0x0018, 0x0036);
/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SpacingBetweenSlices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SecondaryCaptureDeviceManufacturer (0018,1016) LO
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1016);
/// SecondaryCaptureDeviceManufacturerModelName (0018,1018) LO
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x1018);
/// SoftwareVersions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ExposureTime (0018,1150) IS
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// ImagerPixelSpacing (0018,1164) DS
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// PatientPosition (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// ProjectionEponymousNameCodeSequence (0018,5104) SQ
#[rustfmt::skip]
pub const PROJECTION_EPONYMOUS_NAME_CODE_SEQUENCE: Tag = Tag(0x0018, 0x5104);
/// SequenceOfUltrasoundRegions (0018,6011) SQ
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// ContentQualification (0018,9004) CS
#[rustfmt::skip]
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// MRImagingModifierSequence (0018,9006) SQ
#[rustfmt::skip]
pub const MR_IMAGING_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9006);
/// MRReceiveCoilSequence (0018,9042) SQ
#[rustfmt::skip]
pub const MR_RECEIVE_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9042);
/// MRTransmitCoilSequence (0018,9049) SQ
#[rustfmt::skip]
pub const MR_TRANSMIT_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9049);
/// MRSpectroscopyFOVGeometrySequence (0018,9103) SQ
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9103);
/// MRTimingAndRelatedParametersSequence (0018,9112) SQ
#[rustfmt::skip]
pub const MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9112);
/// MREchoSequence (0018,9114) SQ
#[rustfmt::skip]
pub const MR_ECHO_SEQUENCE: Tag = Tag(0x0018, 0x9114);
/// MRModifierSequence (0018,9115) SQ
#[rustfmt::skip]
pub const MR_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9115);
/// MRDiffusionSequence (0018,9117) SQ
#[rustfmt::skip]
pub const MR_DIFFUSION_SEQUENCE: Tag = Tag(0x0018, 0x9117);
/// CardiacSynchronizationSequence (0018,9118) SQ
#[rustfmt::skip]
pub const CARDIAC_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9118);
/// MRAveragesSequence (0018,9119) SQ
#[rustfmt::skip]
pub const MR_AVERAGES_SEQUENCE: Tag = Tag(0x0018, 0x9119);
/// MRFOVGeometrySequence (0018,9125) SQ
#[rustfmt::skip]
pub const MRFOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9125);
/// VolumeLocalizationSequence (0018,9126) SQ
#[rustfmt::skip]
pub const VOLUME_LOCALIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9126);
/// MRMetaboliteMapSequence (0018,9152) SQ
#[rustfmt::skip]
pub const MR_METABOLITE_MAP_SEQUENCE: Tag = Tag(0x0018, 0x9152);
/// OperatingModeSequence (0018,9176) SQ
#[rustfmt::skip]
pub const OPERATING_MODE_SEQUENCE: Tag = Tag(0x0018, 0x9176);
/// MRVelocityEncodingSequence (0018,9197) SQ
#[rustfmt::skip]
pub const MR_VELOCITY_ENCODING_SEQUENCE: Tag = Tag(0x0018, 0x9197);
/// MRImageFrameTypeSequence (0018,9226) SQ
#[rustfmt::skip]
pub const MR_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9226);
/// MRSpectroscopyFrameTypeSequence (0018,9227) SQ
#[rustfmt::skip]
pub const MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9227);
/// CTAcquisitionTypeSequence (0018,9301) SQ
#[rustfmt::skip]
pub const CT_ACQUISITION_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9301);
/// CTAcquisitionDetailsSequence (0018,9304) SQ
#[rustfmt::skip]
pub const CT_ACQUISITION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9304);
/// CTTableDynamicsSequence (0018,9308) SQ
#[rustfmt::skip]
pub const CT_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9308);
/// CTGeometrySequence (0018,9312) SQ
#[rustfmt::skip]
pub const CT_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9312);
/// CTReconstructionSequence (0018,9314) SQ
#[rustfmt::skip]
pub const CT_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9314);
/// CTExposureSequence (0018,9321) SQ
#[rustfmt::skip]
pub const CT_EXPOSURE_SEQUENCE: Tag = Tag(0x0018, 0x9321);
/// CTXRayDetailsSequence (0018,9325) SQ
#[rustfmt::skip]
pub const CT_X_RAY_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9325);
/// CTPositionSequence (0018,9326) SQ
#[rustfmt::skip]
pub const CT_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9326);
/// CTImageFrameTypeSequence (0018,9329) SQ
#[rustfmt::skip]
pub const CT_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9329);
/// ContrastBolusIngredientCodeSequence (0018,9338) SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9338);
/// ContrastBolusUsageSequence (0018,9341) SQ
#[rustfmt::skip]
pub const CONTRAST_BOLUS_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9341);
/// CTDIPhantomTypeCodeSequence (0018,9346) SQ
#[rustfmt::skip]
pub const CTDI_PHANTOM_TYPE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9346);
/// CTAdditionalXRaySourceSequence (0018,9360) SQ
#[rustfmt::skip]
pub const CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE: Tag = Tag(0x0018, 0x9360);
/// ProjectionPixelCalibrationSequence (0018,9401) SQ
#[rustfmt::skip]
pub const PROJECTION_PIXEL_CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9401);
/// PositionerPositionSequence (0018,9405) SQ
#[rustfmt::skip]
pub const POSITIONER_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9405);
/// TablePositionSequence (0018,9406) SQ
#[rustfmt::skip]
pub const TABLE_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9406);
/// CollimatorShapeSequence (0018,9407) SQ
#[rustfmt::skip]
pub const COLLIMATOR_SHAPE_SEQUENCE: Tag = Tag(0x0018, 0x9407);
/// XAXRFFrameCharacteristicsSequence (0018,9412) SQ
#[rustfmt::skip]
pub const XAXRF_FRAME_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0018, 0x9412);
/// FrameAcquisitionSequence (0018,9417) SQ
#[rustfmt::skip]
pub const FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9417);
/// FieldOfViewSequence (0018,9432) SQ
#[rustfmt::skip]
pub const FIELD_OF_VIEW_SEQUENCE: Tag = Tag(0x0018, 0x9432);
/// FrameDetectorParametersSequence (0018,9451) SQ
#[rustfmt::skip]
pub const FRAME_DETECTOR_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9451);
/// CalibrationSequence (0018,9455) SQ
#[rustfmt::skip]
pub const CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9455);
/// ObjectThicknessSequence (0018,9456) SQ
#[rustfmt::skip]
pub const OBJECT_THICKNESS_SEQUENCE: Tag = Tag(0x0018, 0x9456);
/// IsocenterReferenceSystemSequence (0018,9462) SQ
#[rustfmt::skip]
pub const ISOCENTER_REFERENCE_SYSTEM_SEQUENCE: Tag = Tag(0x0018, 0x9462);
/// FrameDisplayShutterSequence (0018,9472) SQ
#[rustfmt::skip]
pub const FRAME_DISPLAY_SHUTTER_SEQUENCE: Tag = Tag(0x0018, 0x9472);
/// IrradiationEventIdentificationSequence (0018,9477) SQ
#[rustfmt::skip]
pub const IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x9477);
/// XRay3DFrameTypeSequence (0018,9504) SQ
#[rustfmt::skip]
pub const X_RAY3D_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9504);
/// ContributingSourcesSequence (0018,9506) SQ
#[rustfmt::skip]
pub const CONTRIBUTING_SOURCES_SEQUENCE: Tag = Tag(0x0018, 0x9506);
/// XRay3DAcquisitionSequence (0018,9507) SQ
#[rustfmt::skip]
pub const X_RAY3D_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9507);
/// XRay3DReconstructionSequence (0018,9530) SQ
#[rustfmt::skip]
pub const X_RAY3D_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9530);
/// PETFrameAcquisitionSequence (0018,9732) SQ
#[rustfmt::skip]
pub const PET_FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9732);
/// PETDetectorMotionDetailsSequence (0018,9733) SQ
#[rustfmt::skip]
pub const PET_DETECTOR_MOTION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9733);
/// PETTableDynamicsSequence (0018,9734) SQ
#[rustfmt::skip]
pub const PET_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9734);
/// PETPositionSequence (0018,9735) SQ
#[rustfmt::skip]
pub const PET_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9735);
/// PETFrameCorrectionFactorsSequence (0018,9736) SQ
#[rustfmt::skip]
pub const PET_FRAME_CORRECTION_FACTORS_SEQUENCE: Tag = Tag(0x0018, 0x9736);
/// RadiopharmaceuticalUsageSequence (0018,9737) SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9737);
/// PETReconstructionSequence (0018,9749) SQ
#[rustfmt::skip]
pub const PET_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9749);
/// PETFrameTypeSequence (0018,9751) SQ
#[rustfmt::skip]
pub const PET_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9751);
/// PatientPhysiologicalStateSequence (0018,9771) SQ
#[rustfmt::skip]
pub const PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE: Tag = Tag(0x0018, 0x9771);
/// PatientPhysiologicalStateCodeSequence (0018,9772) SQ
#[rustfmt::skip]
pub const PATIENT_PHYSIOLOGICAL_STATE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9772);
/// ExcludedIntervalsSequence (0018,9803) SQ
#[rustfmt::skip]
pub const EXCLUDED_INTERVALS_SEQUENCE: Tag = Tag(0x0018, 0x9803);
/// ContributingEquipmentSequence (0018,A001) SQ
#[rustfmt::skip]
pub const CONTRIBUTING_EQUIPMENT_SEQUENCE: Tag = Tag(0x0018, 0xA001);
/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// ImageLaterality (0020,0062) CS
#[rustfmt::skip]
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// SynchronizationFrameOfReferenceUID (0020,0200) UI
#[rustfmt::skip]
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// PositionReferenceIndicator (0020,1040) LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// NumberOfStudyRelatedSeries (0020,1206) IS
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// NumberOfStudyRelatedInstances (0020,1208) IS
#[rustfmt::skip]
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// NumberOfSeriesRelatedInstances (0020,1209) IS
#[rustfmt::skip]
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);
/// ImageComments (0020,4000) LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// FrameAnatomySequence (0020,9071) SQ
#[rustfmt::skip]
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
/// FrameContentSequence (0020,9111) SQ
#[rustfmt::skip]
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// PlanePositionSequence (0020,9113) SQ
#[rustfmt::skip]
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// PlaneOrientationSequence (0020,9116) SQ
#[rustfmt::skip]
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// DimensionOrganizationSequence (0020,9221) SQ
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// DimensionIndexSequence (0020,9222) SQ
#[rustfmt::skip]
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// RespiratorySynchronizationSequence (0020,9253) SQ
#[rustfmt::skip]
pub const RESPIRATORY_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9253);
/// PlanePositionVolumeSequence (0020,930E) SQ
#[rustfmt::skip]
pub const PLANE_POSITION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930E);
/// PlaneOrientationVolumeSequence (0020,930F) SQ
#[rustfmt::skip]
pub const PLANE_ORIENTATION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930F);
/// TemporalPositionSequence (0020,9310) SQ
#[rustfmt::skip]
pub const TEMPORAL_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9310);
/// DimensionOrganizationType (0020,9311) CS
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_TYPE: Tag = Tag(0x0020, 0x9311);
/// ContributingSOPInstancesReferenceSequence (0020,9529) SQ
#[rustfmt::skip]
pub const CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE: Tag = Tag(0x0020, 0x9529);
/// AcquisitionDeviceTypeCodeSequence (0022,0015) SQ
#[rustfmt::skip]
pub const ACQUISITION_DEVICE_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0015);
/// IlluminationTypeCodeSequence (0022,0016) SQ
#[rustfmt::skip]
pub const ILLUMINATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0016);
/// LightPathFilterTypeStackCodeSequence (0022,0017) SQ
#[rustfmt::skip]
pub const LIGHT_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0017);
/// ImagePathFilterTypeStackCodeSequence (0022,0018) SQ
#[rustfmt::skip]
pub const IMAGE_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0018);
/// LensesCodeSequence (0022,0019) SQ
#[rustfmt::skip]
pub const LENSES_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0019);
/// ChannelDescriptionCodeSequence (0022,001A) SQ
#[rustfmt::skip]
pub const CHANNEL_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0022, 0x001A);
/// RefractiveStateSequence (0022,001B) SQ
#[rustfmt::skip]
pub const REFRACTIVE_STATE_SEQUENCE: Tag = Tag(0x0022, 0x001B);
/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034) IS
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// PaletteColorLookupTableUID (0028,1199) UI
#[rustfmt::skip]
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// RedPaletteColorLookupTableData (0028,1201) OW
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// BreastImplantPresent (0028,1300) CS
#[rustfmt::skip]
pub const BREAST_IMPLANT_PRESENT: Tag = Tag(0x0028, 0x1300);
/// PartialView (0028,1350) CS
#[rustfmt::skip]
pub const PARTIAL_VIEW: Tag = Tag(0x0028, 0x1350);
/// PartialViewCodeSequence (0028,1352) SQ
#[rustfmt::skip]
pub const PARTIAL_VIEW_CODE_SEQUENCE: Tag = Tag(0x0028, 0x1352);
/// DataFrameAssignmentSequence (0028,1401) SQ
#[rustfmt::skip]
pub const DATA_FRAME_ASSIGNMENT_SEQUENCE: Tag = Tag(0x0028, 0x1401);
/// BlendingLUT1Sequence (0028,1404) SQ
#[rustfmt::skip]
pub const BLENDING_LUT1_SEQUENCE: Tag = Tag(0x0028, 0x1404);
/// EnhancedPaletteColorLookupTableSequence (0028,140B) SQ
#[rustfmt::skip]
pub const ENHANCED_PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE: Tag = Tag(0x0028, 0x140B);
/// BlendingLUT2Sequence (0028,140C) SQ
#[rustfmt::skip]
pub const BLENDING_LUT2_SEQUENCE: Tag = Tag(0x0028, 0x140C);
/// ICCProfile (0028,2000) OB
#[rustfmt::skip]
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);
/// ColorSpace (0028,2002) CS
#[rustfmt::skip]
pub const COLOR_SPACE: Tag = Tag(0x0028, 0x2002);
/// LossyImageCompression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LossyImageCompressionMethod (0028,2114) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// ModalityLUTSequence (0028,3000) SQ
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUTExplanation (0028,3003) LO
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// VOILUTSequence (0028,3010) SQ
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// SoftcopyVOILUTSequence (0028,3110) SQ
#[rustfmt::skip]
pub const SOFTCOPY_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3110);
/// RepresentativeFrameNumber (0028,6010) US
#[rustfmt::skip]
pub const REPRESENTATIVE_FRAME_NUMBER: Tag = Tag(0x0028, 0x6010);
/// MaskSubtractionSequence (0028,6100) SQ
#[rustfmt::skip]
pub const MASK_SUBTRACTION_SEQUENCE: Tag = Tag(0x0028, 0x6100);
/// PixelMeasuresSequence (0028,9110) SQ
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// FrameVOILUTSequence (0028,9132) SQ
#[rustfmt::skip]
pub const FRAME_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// PixelValueTransformationSequence (0028,9145) SQ
#[rustfmt::skip]
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// FramePixelShiftSequence (0028,9415) SQ
#[rustfmt::skip]
pub const FRAME_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9415);
/// PixelIntensityRelationshipLUTSequence (0028,9422) SQ
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9422);
/// FramePixelDataPropertiesSequence (0028,9443) SQ
#[rustfmt::skip]
pub const FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE: Tag = Tag(0x0028, 0x9443);
/// PixelShiftSequence (0028,9501) SQ
#[rustfmt::skip]
pub const PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9501);
/// RegionPixelShiftSequence (0028,9505) SQ
#[rustfmt::skip]
pub const REGION_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9505);
/// RequestingPhysicianIdentificationSequence (0032,1031) SQ
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0032, 0x1031);
/// RequestingPhysician (0032,1032) PN
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestingService (0032,1033) LO
#[rustfmt::skip]
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// RequestingServiceCodeSequence (0032,1034) SQ
#[rustfmt::skip]
pub const REQUESTING_SERVICE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1034);
/// RequestedProcedureDescription (0032,1060) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestedProcedureCodeSequence (0032,1064) SQ
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// RequestedContrastAgent (0032,1070) LO
#[rustfmt::skip]
pub const REQUESTED_CONTRAST_AGENT: Tag = Tag(0x0032, 0x1070);
/// ReferencedPatientAliasSequence (0038,0004) SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_ALIAS_SEQUENCE: Tag = Tag(0x0038, 0x0004);
/// AdmissionID (0038,0010) LO
#[rustfmt::skip]
pub const ADMISSION_ID: Tag = Tag(0x0038, 0x0010);
/// IssuerOfAdmissionIDSequence (0038,0014) SQ
#[rustfmt::skip]
pub const ISSUER_OF_ADMISSION_ID_SEQUENCE: Tag = Tag(0x0038, 0x0014);
/// SpecialNeeds (0038,0050) LO
#[rustfmt::skip]
pub const SPECIAL_NEEDS: Tag = Tag(0x0038, 0x0050);
/// IssuerOfServiceEpisodeIDSequence (0038,0064) SQ
#[rustfmt::skip]
pub const ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE: Tag = Tag(0x0038, 0x0064);
/// PertinentDocumentsSequence (0038,0100) SQ
#[rustfmt::skip]
pub const PERTINENT_DOCUMENTS_SEQUENCE: Tag = Tag(0x0038, 0x0100);
/// PertinentResourcesSequence (0038,0101) SQ
#[rustfmt::skip]
pub const PERTINENT_RESOURCES_SEQUENCE: Tag = Tag(0x0038, 0x0101);
/// CurrentPatientLocation (0038,0300) LO
#[rustfmt::skip]
pub const CURRENT_PATIENT_LOCATION: Tag = Tag(0x0038, 0x0300);
/// PatientState (0038,0500) LO
#[rustfmt::skip]
pub const PATIENT_STATE: Tag = Tag(0x0038, 0x0500);
/// PatientClinicalTrialParticipationSequence (0038,0502) SQ
#[rustfmt::skip]
pub const PATIENT_CLINICAL_TRIAL_PARTICIPATION_SEQUENCE: Tag = Tag(0x0038, 0x0502);
/// NumberOfWaveformChannels (003A,0005) US
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_CHANNELS: Tag = Tag(0x003A, 0x0005);
/// NumberOfWaveformSamples (003A,0010) UL
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_SAMPLES: Tag = Tag(0x003A, 0x0010);
/// SamplingFrequency (003A,001A) DS
#[rustfmt::skip]
pub const SAMPLING_FREQUENCY: Tag = Tag(0x003A, 0x001A);
/// ChannelDefinitionSequence (003A,0200) SQ
#[rustfmt::skip]
pub const CHANNEL_DEFINITION_SEQUENCE: Tag = Tag(0x003A, 0x0200);
/// ChannelSourceSequence (003A,0208) SQ
#[rustfmt::skip]
pub const CHANNEL_SOURCE_SEQUENCE: Tag = Tag(0x003A, 0x0208);
/// ChannelSourceModifiersSequence (003A,0209) SQ
#[rustfmt::skip]
pub const CHANNEL_SOURCE_MODIFIERS_SEQUENCE: Tag = Tag(0x003A, 0x0209);
/// SourceWaveformSequence (003A,020A) SQ
#[rustfmt::skip]
pub const SOURCE_WAVEFORM_SEQUENCE: Tag = Tag(0x003A, 0x020A);
/// ChannelSensitivityUnitsSequence (003A,0211) SQ
#[rustfmt::skip]
pub const CHANNEL_SENSITIVITY_UNITS_SEQUENCE: Tag = Tag(0x003A, 0x0211);
/// MultiplexedAudioChannelsDescriptionCodeSequence (003A,0300) SQ
#[rustfmt::skip]
pub const MULTIPLEXED_AUDIO_CHANNELS_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x003A, 0x0300);
/// ScheduledStationAETitle (0040,0001) AE
#[rustfmt::skip]
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// ScheduledProcedureStepStartDate (0040,0002) DA
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// ScheduledProcedureStepStartTime (0040,0003) TM
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// ScheduledPerformingPhysicianName (0040,0006) PN
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// ScheduledProcedureStepDescription (0040,0007) LO
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// ScheduledProtocolCodeSequence (0040,0008) SQ
#[rustfmt::skip]
pub const SCHEDULED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0008);
/// ScheduledProcedureStepID (0040,0009) SH
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// ScheduledPerformingPhysicianIdentificationSequence (0040,000B) SQ
#[rustfmt::skip]
pub const SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x000B);
/// ScheduledStationName (0040,0010) SH
#[rustfmt::skip]
pub const SCHEDULED_STATION_NAME: Tag = Tag(0x0040, 0x0010);
/// OrderPlacerIdentifierSequence (0040,0026) SQ
#[rustfmt::skip]
pub const ORDER_PLACER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0026);
/// OrderFillerIdentifierSequence (0040,0027) SQ
#[rustfmt::skip]
pub const ORDER_FILLER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0027);
/// AssigningFacilitySequence (0040,0036) SQ
#[rustfmt::skip]
pub const ASSIGNING_FACILITY_SEQUENCE: Tag = Tag(0x0040, 0x0036);
/// AssigningJurisdictionCodeSequence (0040,0039) SQ
#[rustfmt::skip]
pub const ASSIGNING_JURISDICTION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0039);
/// AssigningAgencyOrDepartmentCodeSequence (0040,003A) SQ
#[rustfmt::skip]
pub const ASSIGNING_AGENCY_OR_DEPARTMENT_CODE_SEQUENCE: Tag = Tag(0x0040, 0x003A);
/// ScheduledProcedureStepSequence (0040,0100) SQ
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// ReferencedNonImageCompositeSOPInstanceSequence (0040,0220) SQ
#[rustfmt::skip]
pub const REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0040, 0x0220);
/// PerformedStationAETitle (0040,0241) AE
#[rustfmt::skip]
pub const PERFORMED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0241);
/// PerformedProcedureStepStartDate (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepID (0040,0253) SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// PerformedProtocolCodeSequence (0040,0260) SQ
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// ScheduledStepAttributesSequence (0040,0270) SQ
#[rustfmt::skip]
pub const SCHEDULED_STEP_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0270);
/// RequestAttributesSequence (0040,0275) SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// PerformedProcedureStepDiscontinuationReasonCodeSequence (0040,0281) SQ
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0281);
/// BillingItemSequence (0040,0296) SQ
#[rustfmt::skip]
pub const BILLING_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0296);
/// ExposureDoseSequence (0040,030E) SQ
#[rustfmt::skip]
pub const EXPOSURE_DOSE_SEQUENCE: Tag = Tag(0x0040, 0x030E);
/// BillingProcedureStepSequence (0040,0320) SQ
#[rustfmt::skip]
pub const BILLING_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0320);
/// FilmConsumptionSequence (0040,0321) SQ
#[rustfmt::skip]
pub const FILM_CONSUMPTION_SEQUENCE: Tag = Tag(0x0040, 0x0321);
/// BillingSuppliesAndDevicesSequence (0040,0324) SQ
#[rustfmt::skip]
pub const BILLING_SUPPLIES_AND_DEVICES_SEQUENCE: Tag = Tag(0x0040, 0x0324);
/// PerformedSeriesSequence (0040,0340) SQ
#[rustfmt::skip]
pub const PERFORMED_SERIES_SEQUENCE: Tag = Tag(0x0040, 0x0340);
/// ProtocolContextSequence (0040,0440) SQ
#[rustfmt::skip]
pub const PROTOCOL_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0440);
/// ContentItemModifierSequence (0040,0441) SQ
#[rustfmt::skip]
pub const CONTENT_ITEM_MODIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0441);
/// ScheduledSpecimenSequence (0040,0500) SQ
#[rustfmt::skip]
pub const SCHEDULED_SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0500);
/// ContainerIdentifier (0040,0512) LO
#[rustfmt::skip]
pub const CONTAINER_IDENTIFIER: Tag = Tag(0x0040, 0x0512);
/// IssuerOfTheContainerIdentifierSequence (0040,0513) SQ
#[rustfmt::skip]
pub const ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0513);
/// AlternateContainerIdentifierSequence (0040,0515) SQ
#[rustfmt::skip]
pub const ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0515);
/// ContainerTypeCodeSequence (0040,0518) SQ
#[rustfmt::skip]
pub const CONTAINER_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0518);
/// ContainerComponentSequence (0040,0520) SQ
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_SEQUENCE: Tag = Tag(0x0040, 0x0520);
/// SpecimenIdentifier (0040,0551) LO
#[rustfmt::skip]
pub const SPECIMEN_IDENTIFIER: Tag = Tag(0x0040, 0x0551);
/// SpecimenUID (0040,0554) UI
#[rustfmt::skip]
pub const SPECIMEN_UID: Tag = Tag(0x0040, 0x0554);
/// AcquisitionContextSequence (0040,0555) SQ
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// SpecimenDescriptionSequence (0040,0560) SQ
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_SEQUENCE: Tag = Tag(0x0040, 0x0560);
/// IssuerOfTheSpecimenIdentifierSequence (0040,0562) SQ
#[rustfmt::skip]
pub const ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0562);
/// SpecimenTypeCodeSequence (0040,059A) SQ
#[rustfmt::skip]
pub const SPECIMEN_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x059A);
/// SpecimenPreparationSequence (0040,0610) SQ
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_SEQUENCE: Tag = Tag(0x0040, 0x0610);
/// SpecimenPreparationStepContentItemSequence (0040,0612) SQ
#[rustfmt::skip]
pub const SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0612);
/// MeasurementUnitsCodeSequence (0040,08EA) SQ
#[rustfmt::skip]
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// RequestedProcedureID (0040,1001) SH
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// ReasonForRequestedProcedureCodeSequence (0040,100A) SQ
#[rustfmt::skip]
pub const REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x100A);
/// IntendedRecipientsOfResultsIdentificationSequence (0040,1011) SQ
#[rustfmt::skip]
pub const INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x1011);
/// ReasonForPerformedProcedureCodeSequence (0040,1012) SQ
#[rustfmt::skip]
pub const REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1012);
/// PersonIdentificationCodeSequence (0040,1101) SQ
#[rustfmt::skip]
pub const PERSON_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1101);
/// PlacerOrderNumberImagingServiceRequest (0040,2016) LO
#[rustfmt::skip]
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2016);
/// FillerOrderNumberImagingServiceRequest (0040,2017) LO
#[rustfmt::skip]
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2017);
/// ReferencedImageRealWorldValueMappingSequence (0040,9094) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9094);
/// RealWorldValueMappingSequence (0040,9096) SQ
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// PixelValueMappingCodeSequence (0040,9098) SQ
#[rustfmt::skip]
pub const PIXEL_VALUE_MAPPING_CODE_SEQUENCE: Tag = Tag(0x0040, 0x9098);
/// RelationshipType (0040,A010) CS
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// VerifyingOrganization (0040,A027) LO
#[rustfmt::skip]
pub const VERIFYING_ORGANIZATION: Tag = Tag(0x0040, 0xA027);
/// VerificationDateTime (0040,A030) DT
#[rustfmt::skip]
pub const VERIFICATION_DATE_TIME: Tag = Tag(0x0040, 0xA030);
/// ObservationDateTime (0040,A032) DT
#[rustfmt::skip]
pub const OBSERVATION_DATE_TIME: Tag = Tag(0x0040, 0xA032);
/// ValueType (0040,A040) CS
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// ConceptNameCodeSequence (0040,A043) SQ
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// ContinuityOfContent (0040,A050) CS
#[rustfmt::skip]
pub const CONTINUITY_OF_CONTENT: Tag = Tag(0x0040, 0xA050);
/// VerifyingObserverSequence (0040,A073) SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// VerifyingObserverName (0040,A075) PN
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// AuthorObserverSequence (0040,A078) SQ
#[rustfmt::skip]
pub const AUTHOR_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA078);
/// ParticipantSequence (0040,A07A) SQ
#[rustfmt::skip]
pub const PARTICIPANT_SEQUENCE: Tag = Tag(0x0040, 0xA07A);
/// CustodialOrganizationSequence (0040,A07C) SQ
#[rustfmt::skip]
pub const CUSTODIAL_ORGANIZATION_SEQUENCE: Tag = Tag(0x0040, 0xA07C);
/// VerifyingObserverIdentificationCodeSequence (0040,A088) SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA088);
/// DateTime (0040,A120) DT
#[rustfmt::skip]
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date (0040,A121) DA
#[rustfmt::skip]
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time (0040,A122) TM
#[rustfmt::skip]
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// PersonName (0040,A123) PN
#[rustfmt::skip]
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID (0040,A124) UI
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// TextValue (0040,A160) UT
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// ConceptCodeSequence (0040,A168) SQ
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// PurposeOfReferenceCodeSequence (0040,A170) SQ
#[rustfmt::skip]
pub const PURPOSE_OF_REFERENCE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA170);
/// ModifierCodeSequence (0040,A195) SQ
#[rustfmt::skip]
pub const MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA195);
/// MeasuredValueSequence (0040,A300) SQ
#[rustfmt::skip]
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// NumericValueQualifierCodeSequence (0040,A301) SQ
#[rustfmt::skip]
pub const NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA301);
/// NumericValue (0040,A30A) DS
#[rustfmt::skip]
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// PredecessorDocumentsSequence (0040,A360) SQ
#[rustfmt::skip]
pub const PREDECESSOR_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA360);
/// ReferencedRequestSequence (0040,A370) SQ
#[rustfmt::skip]
pub const REFERENCED_REQUEST_SEQUENCE: Tag = Tag(0x0040, 0xA370);
/// PerformedProcedureCodeSequence (0040,A372) SQ
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA372);
/// CurrentRequestedProcedureEvidenceSequence (0040,A375) SQ
#[rustfmt::skip]
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// PertinentOtherEvidenceSequence (0040,A385) SQ
#[rustfmt::skip]
pub const PERTINENT_OTHER_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA385);
/// HL7StructuredDocumentReferenceSequence (0040,A390) SQ
#[rustfmt::skip]
pub const HL7_STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE: Tag = Tag(0x0040, 0xA390);
/// CompletionFlag (0040,A491) CS
#[rustfmt::skip]
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// VerificationFlag (0040,A493) CS
#[rustfmt::skip]
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// ContentTemplateSequence (0040,A504) SQ
#[rustfmt::skip]
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// IdenticalDocumentsSequence (0040,A525) SQ
#[rustfmt::skip]
pub const IDENTICAL_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA525);
/// ContentSequence (0040,A730) SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// DocumentTitle (0042,0010) ST
#[rustfmt::skip]
pub const DOCUMENT_TITLE: Tag = Tag(0x0042, 0x0010);
/// EncapsulatedDocument (0042,0011) OB
#[rustfmt::skip]
pub const ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0011);
/// MIMETypeOfEncapsulatedDocument (0042,0012) LO
#[rustfmt::skip]
pub const MIME_TYPE_OF_ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0012);
/// SourceInstanceSequence (0042,0013) SQ
#[rustfmt::skip]
pub const SOURCE_INSTANCE_SEQUENCE: Tag = Tag(0x0042, 0x0013);
/// OpticalPathSequence (0048,0105) SQ
#[rustfmt::skip]
pub const OPTICAL_PATH_SEQUENCE: Tag = Tag(0x0048, 0x0105);
/// PlanePositionSlideSequence (0048,021A) SQ
#[rustfmt::skip]
pub const PLANE_POSITION_SLIDE_SEQUENCE: Tag = Tag(0x0048, 0x021A);
/// DeviceSequence (0050,0010) SQ
#[rustfmt::skip]
pub const DEVICE_SEQUENCE: Tag = Tag(0x0050, 0x0010);
/// ContainerComponentTypeCodeSequence (0050,0012) SQ
#[rustfmt::skip]
pub const CONTAINER_COMPONENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0050, 0x0012);
/// NumberOfEnergyWindows (0054,0011) US
#[rustfmt::skip]
pub const NUMBER_OF_ENERGY_WINDOWS: Tag = Tag(0x0054, 0x0011);
/// EnergyWindowInformationSequence (0054,0012) SQ
#[rustfmt::skip]
pub const ENERGY_WINDOW_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0012);
/// EnergyWindowRangeSequence (0054,0013) SQ
#[rustfmt::skip]
pub const ENERGY_WINDOW_RANGE_SEQUENCE: Tag = Tag(0x0054, 0x0013);
/// RadiopharmaceuticalInformationSequence (0054,0016) SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// NumberOfDetectors (0054,0021) US
#[rustfmt::skip]
pub const NUMBER_OF_DETECTORS: Tag = Tag(0x0054, 0x0021);
/// DetectorInformationSequence (0054,0022) SQ
#[rustfmt::skip]
pub const DETECTOR_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0022);
/// RotationInformationSequence (0054,0052) SQ
#[rustfmt::skip]
pub const ROTATION_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0052);
/// GatedInformationSequence (0054,0062) SQ
#[rustfmt::skip]
pub const GATED_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0062);
/// DataInformationSequence (0054,0063) SQ
#[rustfmt::skip]
pub const DATA_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0063);
/// TimeSlotInformationSequence (0054,0072) SQ
#[rustfmt::skip]
pub const TIME_SLOT_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0072);
/// NumberOfSlices (0054,0081) US
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// ViewCodeSequence (0054,0220) SQ
#[rustfmt::skip]
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
/// ViewModifierCodeSequence (0054,0222) SQ
#[rustfmt::skip]
pub const VIEW_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0222);
/// RadionuclideCodeSequence (0054,0300) SQ
#[rustfmt::skip]
pub const RADIONUCLIDE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0300);
/// AdministrationRouteCodeSequence (0054,0302) SQ
#[rustfmt::skip]
pub const ADMINISTRATION_ROUTE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0302);
/// RadiopharmaceuticalCodeSequence (0054,0304) SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0304);
/// CalibrationDataSequence (0054,0306) SQ
#[rustfmt::skip]
pub const CALIBRATION_DATA_SEQUENCE: Tag = Tag(0x0054, 0x0306);
/// PatientOrientationCodeSequence (0054,0410) SQ
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0410);
/// PatientOrientationModifierCodeSequence (0054,0412) SQ
#[rustfmt::skip]
pub const PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0412);
/// PatientGantryRelationshipCodeSequence (0054,0414) SQ
#[rustfmt::skip]
pub const PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0414);
/// SeriesType (0054,1000) CS
#[rustfmt::skip]
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
/// Units (0054,1001) CS
#[rustfmt::skip]
pub const UNITS: Tag = Tag(0x0054, 0x1001);
/// CountsSource (0054,1002) CS
#[rustfmt::skip]
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
/// AttenuationCorrectionMethod (0054,1101) LO
#[rustfmt::skip]
pub const ATTENUATION_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1101);
/// DecayCorrection (0054,1102) CS
#[rustfmt::skip]
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
/// FrameReferenceTime (0054,1300) DS
#[rustfmt::skip]
pub const FRAME_REFERENCE_TIME: Tag = Tag(0x0054, 0x1300);
/// HistogramSequence (0060,3000) SQ
#[rustfmt::skip]
pub const HISTOGRAM_SEQUENCE: Tag = Tag(0x0060, 0x3000);
/// SegmentationType (0062,0001) CS
#[rustfmt::skip]
pub const SEGMENTATION_TYPE: Tag = Tag(0x0062, 0x0001);
/// SegmentSequence (0062,0002) SQ
#[rustfmt::skip]
pub const SEGMENT_SEQUENCE: Tag = Tag(0x0062, 0x0002);
/// SegmentedPropertyCategoryCodeSequence (0062,0003) SQ
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0003);
/// SegmentNumber (0062,0004) US
#[rustfmt::skip]
pub const SEGMENT_NUMBER: Tag = Tag(0x0062, 0x0004);
/// SegmentLabel (0062,0005) LO
#[rustfmt::skip]
pub const SEGMENT_LABEL: Tag = Tag(0x0062, 0x0005);
/// SegmentAlgorithmType (0062,0008) CS
#[rustfmt::skip]
pub const SEGMENT_ALGORITHM_TYPE: Tag = Tag(0x0062, 0x0008);
/// SegmentIdentificationSequence (0062,000A) SQ
#[rustfmt::skip]
pub const SEGMENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0062, 0x000A);
/// ReferencedSegmentNumber (0062,000B) US
#[rustfmt::skip]
pub const REFERENCED_SEGMENT_NUMBER: Tag = Tag(0x0062, 0x000B);
/// SegmentedPropertyTypeCodeSequence (0062,000F) SQ
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE: Tag = Tag(0x0062, 0x000F);
/// SegmentedPropertyTypeModifierCodeSequence (0062,0011) SQ
#[rustfmt::skip]
pub const SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0011);
/// DeformableRegistrationSequence (0064,0002) SQ
#[rustfmt::skip]
pub const DEFORMABLE_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0002);
/// DeformableRegistrationGridSequence (0064,0005) SQ
#[rustfmt::skip]
pub const DEFORMABLE_REGISTRATION_GRID_SEQUENCE: Tag = Tag(0x0064, 0x0005);
/// PreDeformationMatrixRegistrationSequence (0064,000F) SQ
#[rustfmt::skip]
pub const PRE_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x000F);
/// PostDeformationMatrixRegistrationSequence (0064,0010) SQ
#[rustfmt::skip]
pub const POST_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0010);
/// SurfaceSequence (0066,0002) SQ
#[rustfmt::skip]
pub const SURFACE_SEQUENCE: Tag = Tag(0x0066, 0x0002);
/// SurfacePointsSequence (0066,0011) SQ
#[rustfmt::skip]
pub const SURFACE_POINTS_SEQUENCE: Tag = Tag(0x0066, 0x0011);
/// SurfacePointsNormalsSequence (0066,0012) SQ
#[rustfmt::skip]
pub const SURFACE_POINTS_NORMALS_SEQUENCE: Tag = Tag(0x0066, 0x0012);
/// SurfaceMeshPrimitivesSequence (0066,0013) SQ
#[rustfmt::skip]
pub const SURFACE_MESH_PRIMITIVES_SEQUENCE: Tag = Tag(0x0066, 0x0013);
/// PointCoordinatesData (0066,0016) OF
#[rustfmt::skip]
pub const POINT_COORDINATES_DATA: Tag = Tag(0x0066, 0x0016);
/// AlgorithmFamilyCodeSequence (0066,002F) SQ
#[rustfmt::skip]
pub const ALGORITHM_FAMILY_CODE_SEQUENCE: Tag = Tag(0x0066, 0x002F);
/// AlgorithmNameCodeSequence (0066,0030) SQ
#[rustfmt::skip]
pub const ALGORITHM_NAME_CODE_SEQUENCE: Tag = Tag(0x0066, 0x0030);
/// AlgorithmVersion (0066,0031) LO
#[rustfmt::skip]
pub const ALGORITHM_VERSION: Tag = Tag(0x0066, 0x0031);
/// AlgorithmName (0066,0036) LO
#[rustfmt::skip]
pub const ALGORITHM_NAME: Tag = Tag(0x0066, 0x0036);
/// GraphicAnnotationSequence (0070,0001) SQ
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// GraphicLayer (0070,0002) CS
#[rustfmt::skip]
pub const GRAPHIC_LAYER: Tag = Tag(0x0070, 0x0002);
/// UnformattedTextValue (0070,0006) ST
#[rustfmt::skip]
pub const UNFORMATTED_TEXT_VALUE: Tag = Tag(0x0070, 0x0006);
/// TextObjectSequence (0070,0008) SQ
#[rustfmt::skip]
pub const TEXT_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0008);
/// GraphicObjectSequence (0070,0009) SQ
#[rustfmt::skip]
pub const GRAPHIC_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0009);
/// GraphicData (0070,0022) FL
#[rustfmt::skip]
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
/// GraphicType (0070,0023) CS
#[rustfmt::skip]
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
/// ImageHorizontalFlip (0070,0041) CS
#[rustfmt::skip]
pub const IMAGE_HORIZONTAL_FLIP: Tag = Tag(0x0070, 0x0041);
/// ImageRotation (0070,0042) US
#[rustfmt::skip]
pub const IMAGE_ROTATION: Tag = Tag(0x0070, 0x0042);
/// DisplayedAreaSelectionSequence (0070,005A) SQ
#[rustfmt::skip]
pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Tag = Tag(0x0070, 0x005A);
/// GraphicLayerSequence (0070,0060) SQ
#[rustfmt::skip]
pub const GRAPHIC_LAYER_SEQUENCE: Tag = Tag(0x0070, 0x0060);
/// ContentLabel (0070,0080) CS
#[rustfmt::skip]
pub const CONTENT_LABEL: Tag = Tag(0x0070, 0x0080);
/// ContentDescription (0070,0081) LO
#[rustfmt::skip]
pub const CONTENT_DESCRIPTION: Tag = Tag(0x0070, 0x0081);
/// PresentationCreationDate (0070,0082) DA
#[rustfmt::skip]
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// PresentationCreationTime (0070,0083) TM
#[rustfmt::skip]
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// ContentCreatorName (0070,0084) PN
#[rustfmt::skip]
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// ContentCreatorIdentificationCodeSequence (0070,0086) SQ
#[rustfmt::skip]
pub const CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0086);
/// AlternateContentDescriptionSequence (0070,0087) SQ
#[rustfmt::skip]
pub const ALTERNATE_CONTENT_DESCRIPTION_SEQUENCE: Tag = Tag(0x0070, 0x0087);
/// RegistrationSequence (0070,0308) SQ
#[rustfmt::skip]
pub const REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0308);
/// MatrixRegistrationSequence (0070,0309) SQ
#[rustfmt::skip]
pub const MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0309);
/// MatrixSequence (0070,030A) SQ
#[rustfmt::skip]
pub const MATRIX_SEQUENCE: Tag = Tag(0x0070, 0x030A);
/// RegistrationTypeCodeSequence (0070,030D) SQ
#[rustfmt::skip]
pub const REGISTRATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0070, 0x030D);
/// UsedFiducialsSequence (0070,0314) SQ
#[rustfmt::skip]
pub const USED_FIDUCIALS_SEQUENCE: Tag = Tag(0x0070, 0x0314);
/// FiducialSetSequence (0070,031C) SQ
#[rustfmt::skip]
pub const FIDUCIAL_SET_SEQUENCE: Tag = Tag(0x0070, 0x031C);
/// FiducialSequence (0070,031E) SQ
#[rustfmt::skip]
pub const FIDUCIAL_SEQUENCE: Tag = Tag(0x0070, 0x031E);
/// BlendingSequence (0070,0402) SQ
#[rustfmt::skip]
pub const BLENDING_SEQUENCE: Tag = Tag(0x0070, 0x0402);
/// ReferencedSpatialRegistrationSequence (0070,0404) SQ
#[rustfmt::skip]
pub const REFERENCED_SPATIAL_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0404);
/// HangingProtocolDefinitionSequence (0072,000C) SQ
#[rustfmt::skip]
pub const HANGING_PROTOCOL_DEFINITION_SEQUENCE: Tag = Tag(0x0072, 0x000C);
/// HangingProtocolUserIdentificationCodeSequence (0072,000E) SQ
#[rustfmt::skip]
pub const HANGING_PROTOCOL_USER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0072, 0x000E);
/// ImageSetsSequence (0072,0020) SQ
#[rustfmt::skip]
pub const IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0020);
/// ImageSetSelectorSequence (0072,0022) SQ
#[rustfmt::skip]
pub const IMAGE_SET_SELECTOR_SEQUENCE: Tag = Tag(0x0072, 0x0022);
/// TimeBasedImageSetsSequence (0072,0030) SQ
#[rustfmt::skip]
pub const TIME_BASED_IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0030);
/// DisplaySetsSequence (0072,0200) SQ
#[rustfmt::skip]
pub const DISPLAY_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0200);
/// StorageMediaFileSetUID (0088,0140) UI
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// IconImageSequence (0088,0200) SQ
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// DigitalSignatureUID (0400,0100) UI
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_UID: Tag = Tag(0x0400, 0x0100);
/// DigitalSignaturePurposeCodeSequence (0400,0401) SQ
#[rustfmt::skip]
pub const DIGITAL_SIGNATURE_PURPOSE_CODE_SEQUENCE: Tag = Tag(0x0400, 0x0401);
/// ReferencedDigitalSignatureSequence (0400,0402) SQ
#[rustfmt::skip]
pub const REFERENCED_DIGITAL_SIGNATURE_SEQUENCE: Tag = Tag(0x0400, 0x0402);
/// ReferencedSOPInstanceMACSequence (0400,0403) SQ
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_MAC_SEQUENCE: Tag = Tag(0x0400, 0x0403);
/// EncryptedAttributesSequence (0400,0500) SQ
#[rustfmt::skip]
pub const ENCRYPTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0500);
/// ModifiedAttributesSequence (0400,0550) SQ
#[rustfmt::skip]
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// OriginalAttributesSequence (0400,0561) SQ
#[rustfmt::skip]
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// PresentationLUTSequence (2050,0010) SQ
#[rustfmt::skip]
pub const PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0010);
/// PresentationLUTShape (2050,0020) CS
#[rustfmt::skip]
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// RTImageLabel (3002,0002) SH
#[rustfmt::skip]
pub const RT_IMAGE_LABEL: Tag = Tag(0x3002, 0x0002);
/// ExposureSequence (3002,0030) SQ
#[rustfmt::skip]
pub const EXPOSURE_SEQUENCE: Tag = Tag(0x3002, 0x0030);
/// DoseUnits (3004,0002) CS
#[rustfmt::skip]
pub const DOSE_UNITS: Tag = Tag(0x3004, 0x0002);
/// DoseType (3004,0004) CS
#[rustfmt::skip]
pub const DOSE_TYPE: Tag = Tag(0x3004, 0x0004);
/// DoseSummation (3004,000A) CS
#[rustfmt::skip]
pub const DOSE_SUMMATION: Tag = Tag(0x3004, 0x000A);
/// GridFrameOffsetVector (3004,000C) DS
#[rustfmt::skip]
pub const GRID_FRAME_OFFSET_VECTOR: Tag = Tag(0x3004, 0x000C);
/// DoseGridScaling (3004,000E) DS
#[rustfmt::skip]
pub const DOSE_GRID_SCALING: Tag = Tag(0x3004, 0x000E);
/// RTDoseROISequence (3004,0010) SQ
#[rustfmt::skip]
pub const RT_DOSE_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0010);
/// DVHSequence (3004,0050) SQ
#[rustfmt::skip]
pub const DVH_SEQUENCE: Tag = Tag(0x3004, 0x0050);
/// DVHData (3004,0058) DS
#[rustfmt::skip]
pub const DVH_DATA: Tag = Tag(0x3004, 0x0058);
/// DVHReferencedROISequence (3004,0060) SQ
#[rustfmt::skip]
pub const DVH_REFERENCED_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0060);
/// StructureSetLabel (3006,0002) SH
#[rustfmt::skip]
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// StructureSetDate (3006,0008) DA
#[rustfmt::skip]
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// StructureSetTime (3006,0009) TM
#[rustfmt::skip]
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// ReferencedFrameOfReferenceSequence (3006,0010) SQ
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// RTReferencedStudySequence (3006,0012) SQ
#[rustfmt::skip]
pub const RT_REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x3006, 0x0012);
/// RTReferencedSeriesSequence (3006,0014) SQ
#[rustfmt::skip]
pub const RT_REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x0014);
/// ContourImageSequence (3006,0016) SQ
#[rustfmt::skip]
pub const CONTOUR_IMAGE_SEQUENCE: Tag = Tag(0x3006, 0x0016);
/// StructureSetROISequence (3006,0020) SQ
#[rustfmt::skip]
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROINumber (3006,0022) IS
#[rustfmt::skip]
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// ReferencedFrameOfReferenceUID (3006,0024) UI
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROIName (3006,0026) LO
#[rustfmt::skip]
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROIDisplayColor (3006,002A) IS
#[rustfmt::skip]
pub const ROI_DISPLAY_COLOR: Tag = Tag(0x3006, 0x002A);
/// RTRelatedROISequence (3006,0030) SQ
#[rustfmt::skip]
pub const RT_RELATED_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0030);
/// ROIGenerationAlgorithm (3006,0036) CS
#[rustfmt::skip]
pub const ROI_GENERATION_ALGORITHM: Tag = Tag(0x3006, 0x0036);
/// ROIContourSequence (3006,0039) SQ
#[rustfmt::skip]
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// ContourSequence (3006,0040) SQ
#[rustfmt::skip]
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// ContourGeometricType (3006,0042) CS
#[rustfmt::skip]
pub const CONTOUR_GEOMETRIC_TYPE: Tag = Tag(0x3006, 0x0042);
/// NumberOfContourPoints (3006,0046) IS
#[rustfmt::skip]
pub const NUMBER_OF_CONTOUR_POINTS: Tag = Tag(0x3006, 0x0046);
/// ContourNumber (3006,0048) IS
#[rustfmt::skip]
pub const CONTOUR_NUMBER: Tag = Tag(0x3006, 0x0048);
/// ContourData (3006,0050) DS
#[rustfmt::skip]
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// RTROIObservationsSequence (3006,0080) SQ
#[rustfmt::skip]
pub const RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x0080);
/// ObservationNumber (3006,0082) IS
#[rustfmt::skip]
pub const OBSERVATION_NUMBER: Tag = Tag(0x3006, 0x0082);
/// ReferencedROINumber (3006,0084) IS
#[rustfmt::skip]
pub const REFERENCED_ROI_NUMBER: Tag = Tag(0x3006, 0x0084);
/// RTROIIdentificationCodeSequence (3006,0086) SQ
#[rustfmt::skip]
pub const RTROI_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x3006, 0x0086);
/// RelatedRTROIObservationsSequence (3006,00A0) SQ
#[rustfmt::skip]
pub const RELATED_RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x00A0);
/// RTROIInterpretedType (3006,00A4) CS
#[rustfmt::skip]
pub const RTROI_INTERPRETED_TYPE: Tag = Tag(0x3006, 0x00A4);
/// ROIInterpreter (3006,00A6) PN
#[rustfmt::skip]
pub const ROI_INTERPRETER: Tag = Tag(0x3006, 0x00A6);
/// ROIPhysicalPropertiesSequence (3006,00B0) SQ
#[rustfmt::skip]
pub const ROI_PHYSICAL_PROPERTIES_SEQUENCE: Tag = Tag(0x3006, 0x00B0);
/// FrameOfReferenceRelationshipSequence (3006,00C0) SQ
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_RELATIONSHIP_SEQUENCE: Tag = Tag(0x3006, 0x00C0);
/// RTPlanLabel (300A,0002) SH
#[rustfmt::skip]
pub const RT_PLAN_LABEL: Tag = Tag(0x300A, 0x0002);
/// RTPlanDate (300A,0006) DA
#[rustfmt::skip]
pub const RT_PLAN_DATE: Tag = Tag(0x300A, 0x0006);
/// RTPlanTime (300A,0007) TM
#[rustfmt::skip]
pub const RT_PLAN_TIME: Tag = Tag(0x300A, 0x0007);
/// RTPlanGeometry (300A,000C) CS
#[rustfmt::skip]
pub const RT_PLAN_GEOMETRY: Tag = Tag(0x300A, 0x000C);
/// DoseReferenceSequence (300A,0010) SQ
#[rustfmt::skip]
pub const DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300A, 0x0010);
/// DoseReferenceNumber (300A,0012) IS
#[rustfmt::skip]
pub const DOSE_REFERENCE_NUMBER: Tag = Tag(0x300A, 0x0012);
/// ToleranceTableSequence (300A,0040) SQ
#[rustfmt::skip]
pub const TOLERANCE_TABLE_SEQUENCE: Tag = Tag(0x300A, 0x0040);
/// BeamLimitingDeviceToleranceSequence (300A,0042) SQ
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_TOLERANCE_SEQUENCE: Tag = Tag(0x300A, 0x0042);
/// FractionGroupSequence (300A,0070) SQ
#[rustfmt::skip]
pub const FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x0070);
/// FractionGroupNumber (300A,0071) IS
#[rustfmt::skip]
pub const FRACTION_GROUP_NUMBER: Tag = Tag(0x300A, 0x0071);
/// NumberOfFractionsPlanned (300A,0078) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRACTIONS_PLANNED: Tag = Tag(0x300A, 0x0078);
/// NumberOfBeams (300A,0080) IS
#[rustfmt::skip]
pub const NUMBER_OF_BEAMS: Tag = Tag(0x300A, 0x0080);
/// BeamDose (300A,0084) DS
#[rustfmt::skip]
pub const BEAM_DOSE: Tag = Tag(0x300A, 0x0084);
/// BeamMeterset (300A,0086) DS
#[rustfmt::skip]
pub const BEAM_METERSET: Tag = Tag(0x300A, 0x0086);
/// BeamSequence (300A,00B0) SQ
#[rustfmt::skip]
pub const BEAM_SEQUENCE: Tag = Tag(0x300A, 0x00B0);
/// BeamLimitingDeviceSequence (300A,00B6) SQ
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x00B6);
/// BeamNumber (300A,00C0) IS
#[rustfmt::skip]
pub const BEAM_NUMBER: Tag = Tag(0x300A, 0x00C0);
/// BeamName (300A,00C2) LO
#[rustfmt::skip]
pub const BEAM_NAME: Tag = Tag(0x300A, 0x00C2);
/// RadiationType (300A,00C6) CS
#[rustfmt::skip]
pub const RADIATION_TYPE: Tag = Tag(0x300A, 0x00C6);
/// PlannedVerificationImageSequence (300A,00CA) SQ
#[rustfmt::skip]
pub const PLANNED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300A, 0x00CA);
/// WedgeSequence (300A,00D1) SQ
#[rustfmt::skip]
pub const WEDGE_SEQUENCE: Tag = Tag(0x300A, 0x00D1);
/// CompensatorSequence (300A,00E3) SQ
#[rustfmt::skip]
pub const COMPENSATOR_SEQUENCE: Tag = Tag(0x300A, 0x00E3);
/// BlockSequence (300A,00F4) SQ
#[rustfmt::skip]
pub const BLOCK_SEQUENCE: Tag = Tag(0x300A, 0x00F4);
/// ApplicatorSequence (300A,0107) SQ
#[rustfmt::skip]
pub const APPLICATOR_SEQUENCE: Tag = Tag(0x300A, 0x0107);
/// NumberOfControlPoints (300A,0110) IS
#[rustfmt::skip]
pub const NUMBER_OF_CONTROL_POINTS: Tag = Tag(0x300A, 0x0110);
/// ControlPointSequence (300A,0111) SQ
#[rustfmt::skip]
pub const CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x0111);
/// ControlPointIndex (300A,0112) IS
#[rustfmt::skip]
pub const CONTROL_POINT_INDEX: Tag = Tag(0x300A, 0x0112);
/// WedgePositionSequence (300A,0116) SQ
#[rustfmt::skip]
pub const WEDGE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x0116);
/// BeamLimitingDevicePositionSequence (300A,011A) SQ
#[rustfmt::skip]
pub const BEAM_LIMITING_DEVICE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x011A);
/// PatientSetupSequence (300A,0180) SQ
#[rustfmt::skip]
pub const PATIENT_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0180);
/// FixationDeviceSequence (300A,0190) SQ
#[rustfmt::skip]
pub const FIXATION_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0190);
/// ShieldingDeviceSequence (300A,01A0) SQ
#[rustfmt::skip]
pub const SHIELDING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01A0);
/// SetupDeviceSequence (300A,01B4) SQ
#[rustfmt::skip]
pub const SETUP_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01B4);
/// SourceSequence (300A,0210) SQ
#[rustfmt::skip]
pub const SOURCE_SEQUENCE: Tag = Tag(0x300A, 0x0210);
/// ApplicationSetupSequence (300A,0230) SQ
#[rustfmt::skip]
pub const APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0230);
/// ChannelSequence (300A,0280) SQ
#[rustfmt::skip]
pub const CHANNEL_SEQUENCE: Tag = Tag(0x300A, 0x0280);
/// BrachyControlPointSequence (300A,02D0) SQ
#[rustfmt::skip]
pub const BRACHY_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x02D0);
/// GeneralAccessorySequence (300A,0420) SQ
#[rustfmt::skip]
pub const GENERAL_ACCESSORY_SEQUENCE: Tag = Tag(0x300A, 0x0420);
/// ReferencedRTPlanSequence (300C,0002) SQ
#[rustfmt::skip]
pub const REFERENCED_RT_PLAN_SEQUENCE: Tag = Tag(0x300C, 0x0002);
/// ReferencedBeamSequence (300C,0004) SQ
#[rustfmt::skip]
pub const REFERENCED_BEAM_SEQUENCE: Tag = Tag(0x300C, 0x0004);
/// ReferencedBeamNumber (300C,0006) IS
#[rustfmt::skip]
pub const REFERENCED_BEAM_NUMBER: Tag = Tag(0x300C, 0x0006);
/// ReferencedBrachyApplicationSetupSequence (300C,000A) SQ
#[rustfmt::skip]
pub const REFERENCED_BRACHY_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300C, 0x000A);
/// ReferencedFractionGroupSequence (300C,0020) SQ
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300C, 0x0020);
/// ReferencedFractionGroupNumber (300C,0022) IS
#[rustfmt::skip]
pub const REFERENCED_FRACTION_GROUP_NUMBER: Tag = Tag(0x300C, 0x0022);
/// ReferencedVerificationImageSequence (300C,0040) SQ
#[rustfmt::skip]
pub const REFERENCED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0040);
/// ReferencedReferenceImageSequence (300C,0042) SQ
#[rustfmt::skip]
pub const REFERENCED_REFERENCE_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0042);
/// ReferencedDoseReferenceSequence (300C,0050) SQ
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0050);
/// ReferencedDoseReferenceNumber (300C,0051) IS
#[rustfmt::skip]
pub const REFERENCED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x300C, 0x0051);
/// BrachyReferencedDoseReferenceSequence (300C,0055) SQ
#[rustfmt::skip]
pub const BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0055);
/// ReferencedStructureSetSequence (300C,0060) SQ
#[rustfmt::skip]
pub const REFERENCED_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x300C, 0x0060);
/// ReferencedDoseSequence (300C,0080) SQ
#[rustfmt::skip]
pub const REFERENCED_DOSE_SEQUENCE: Tag = Tag(0x300C, 0x0080);
/// ApprovalStatus (300E,0002) CS
#[rustfmt::skip]
pub const APPROVAL_STATUS: Tag = Tag(0x300E, 0x0002);
/// ReviewDate (300E,0004) DA
#[rustfmt::skip]
pub const REVIEW_DATE: Tag = Tag(0x300E, 0x0004);
/// ReviewTime (300E,0005) TM
#[rustfmt::skip]
pub const REVIEW_TIME: Tag = Tag(0x300E, 0x0005);
/// ReviewerName (300E,0008) PN
#[rustfmt::skip]
pub const REVIEWER_NAME: Tag = Tag(0x300E, 0x0008);
/// MACParametersSequence (4FFE,0001) SQ
#[rustfmt::skip]
pub const MAC_PARAMETERS_SEQUENCE: Tag = Tag(0x4FFE, 0x0001);
/// SharedFunctionalGroupsSequence (5200,9229) SQ
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// WaveformSequence (5400,0100) SQ
#[rustfmt::skip]
pub const WAVEFORM_SEQUENCE: Tag = Tag(0x5400, 0x0100);
/// PixelData (7FE0,0010) OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// Item (FFFE,E000) UN
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) UN
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) UN
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);
/// OverlayRows (60xx,0010) US
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (60xx,0011) US
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType (60xx,0040) CS
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin (60xx,0050) SS
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated (60xx,0100) US
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (60xx,0102) US
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData (60xx,3000) OW
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E<'static>] = &[
    E { tag: Single(Tag(0x0002, 0x0000)), alias: "FileMetaInformationGroupLength", vr: VR::UL },
    E { tag: Single(Tag(0x0002, 0x0001)), alias: "FileMetaInformationVersion", vr: VR::OB },
    E { tag: Single(Tag(0x0002, 0x0002)), alias: "MediaStorageSOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0003)), alias: "MediaStorageSOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0010)), alias: "TransferSyntaxUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0012)), alias: "ImplementationClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0013)), alias: "ImplementationVersionName", vr: VR::SH },
    E { tag: Single(Tag(0x0002, 0x0016)), alias: "SourceApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0017)), alias: "SendingApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0018)), alias: "ReceivingApplicationEntityTitle", vr: VR::AE },
    E { tag: Single(Tag(0x0002, 0x0100)), alias: "PrivateInformationCreatorUID", vr: VR::UI },
    E { tag: Single(Tag(0x0002, 0x0102)), alias: "PrivateInformation", vr: VR::OB },
    E { tag: Single(Tag(0x0004, 0x1130)), alias: "FileSetID", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1141)), alias: "FileSetDescriptorFileID", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1142)), alias: "SpecificCharacterSetOfFileSetDescriptorFile", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1200)), alias: "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1202)), alias: "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1212)), alias: "FileSetConsistencyFlag", vr: VR::US },
    E { tag: Single(Tag(0x0004, 0x1220)), alias: "DirectoryRecordSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0004, 0x1400)), alias: "OffsetOfTheNextDirectoryRecord", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1410)), alias: "RecordInUseFlag", vr: VR::US },
    E { tag: Single(Tag(0x0004, 0x1420)), alias: "OffsetOfReferencedLowerLevelDirectoryEntity", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1430)), alias: "DirectoryRecordType", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1432)), alias: "PrivateRecordUID", vr: VR::UI },
    E { tag: Single(Tag(0x0004, 0x1500)), alias: "ReferencedFileID", vr: VR::CS },
    E { tag: Single(Tag(0x0004, 0x1504)), alias: "MRDRDirectoryRecordOffset", vr: VR::UL },
    E { tag: Single(Tag(0x0004, 0x1510)), alias: "ReferencedSOPClassUIDInFile", vr: VR::UI },
    E { tag: Single(Tag(0x0004, 0x1511)), alias: "ReferencedSOPInstanceUIDInFile", vr: VR::UI },
    E { tag: Single(Tag(0x0004, 0x1512)), alias: "ReferencedTransferSyntaxUIDInFile", vr: VR::UI },
    E { tag: Single(Tag(0x0004, 0x151A)), alias: "ReferencedRelatedGeneralSOPClassUIDInFile", vr: VR::UI },
    E { tag: Single(Tag(0x0004, 0x1600)), alias: "NumberOfReferences", vr: VR::UL },
    E { tag: Single(Tag(0x0008, 0x0005)), alias: "SpecificCharacterSet", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0006)), alias: "LanguageCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0008)), alias: "ImageType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0012)), alias: "InstanceCreationDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0013)), alias: "InstanceCreationTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0014)), alias: "InstanceCreatorUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0016)), alias: "SOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0018)), alias: "SOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0020)), alias: "StudyDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0021)), alias: "SeriesDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0022)), alias: "AcquisitionDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x0023)), alias: "ContentDate", vr: VR::DA },
    E { tag: Single(Tag(0x0008, 0x002A)), alias: "AcquisitionDateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0008, 0x0030)), alias: "StudyTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0031)), alias: "SeriesTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0032)), alias: "AcquisitionTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0033)), alias: "ContentTime", vr: VR::TM },
    E { tag: Single(Tag(0x0008, 0x0050)), alias: "AccessionNumber", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0051)), alias: "IssuerOfAccessionNumberSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0052)), alias: "QueryRetrieveLevel", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0054)), alias: "RetrieveAETitle", vr: VR::AE },
    E { tag: Single(Tag(0x0008, 0x0056)), alias: "InstanceAvailability", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0058)), alias: "FailedSOPInstanceUIDList", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x0060)), alias: "Modality", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0061)), alias: "ModalitiesInStudy", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0064)), alias: "ConversionType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0068)), alias: "PresentationIntentType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0070)), alias: "Manufacturer", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0080)), alias: "InstitutionName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0081)), alias: "InstitutionAddress", vr: VR::ST },
    E { tag: Single(Tag(0x0008, 0x0082)), alias: "InstitutionCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0090)), alias: "ReferringPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x0092)), alias: "ReferringPhysicianAddress", vr: VR::ST },
    E { tag: Single(Tag(0x0008, 0x0094)), alias: "ReferringPhysicianTelephoneNumbers", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0096)), alias: "ReferringPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0100)), alias: "CodeValue", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0102)), alias: "CodingSchemeDesignator", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0103)), alias: "CodingSchemeVersion", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x0104)), alias: "CodeMeaning", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x0105)), alias: "MappingResource", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0106)), alias: "ContextGroupVersion", vr: VR::DT },
    E { tag: Single(Tag(0x0008, 0x010F)), alias: "ContextIdentifier", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x0110)), alias: "CodingSchemeIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0121)), alias: "EquivalentCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x0201)), alias: "TimezoneOffsetFromUTC", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x1010)), alias: "StationName", vr: VR::SH },
    E { tag: Single(Tag(0x0008, 0x1030)), alias: "StudyDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1032)), alias: "ProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x103E)), alias: "SeriesDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1040)), alias: "InstitutionalDepartmentName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1048)), alias: "PhysiciansOfRecord", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1049)), alias: "PhysiciansOfRecordIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1050)), alias: "PerformingPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1052)), alias: "PerformingPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1060)), alias: "NameOfPhysiciansReadingStudy", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1062)), alias: "PhysiciansReadingStudyIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1070)), alias: "OperatorsName", vr: VR::PN },
    E { tag: Single(Tag(0x0008, 0x1072)), alias: "OperatorIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1080)), alias: "AdmittingDiagnosesDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1084)), alias: "AdmittingDiagnosesCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1090)), alias: "ManufacturerModelName", vr: VR::LO },
    E { tag: Single(Tag(0x0008, 0x1110)), alias: "ReferencedStudySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1111)), alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1115)), alias: "ReferencedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1120)), alias: "ReferencedPatientSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1125)), alias: "ReferencedVisitSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1134)), alias: "ReferencedStereometricInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x113A)), alias: "ReferencedWaveformSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1140)), alias: "ReferencedImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x114A)), alias: "ReferencedInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1150)), alias: "ReferencedSOPClassUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1155)), alias: "ReferencedSOPInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1160)), alias: "ReferencedFrameNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0008, 0x1164)), alias: "FrameExtractionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1195)), alias: "TransactionUID", vr: VR::UI },
    E { tag: Single(Tag(0x0008, 0x1197)), alias: "FailureReason", vr: VR::US },
    E { tag: Single(Tag(0x0008, 0x1198)), alias: "FailedSOPSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1199)), alias: "ReferencedSOPSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1200)), alias: "StudiesContainingOtherReferencedInstancesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x1250)), alias: "RelatedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2111)), alias: "DerivationDescription", vr: VR::ST },
    E { tag: Single(Tag(0x0008, 0x2112)), alias: "SourceImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2218)), alias: "AnatomicRegionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2220)), alias: "AnatomicRegionModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2228)), alias: "PrimaryAnatomicStructureSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x2230)), alias: "PrimaryAnatomicStructureModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x3001)), alias: "AlternateRepresentationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9007)), alias: "FrameType", vr: VR::CS },
    E { tag: Single(Tag(0x0008, 0x9092)), alias: "ReferencedImageEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9121)), alias: "ReferencedRawDataSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9124)), alias: "DerivationImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9154)), alias: "SourceImageEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9215)), alias: "DerivationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0008, 0x9237)), alias: "ReferencedPresentationStateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0010)), alias: "PatientName", vr: VR::PN },
    E { tag: Single(Tag(0x0010, 0x0020)), alias: "PatientID", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x0021)), alias: "IssuerOfPatientID", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x0024)), alias: "IssuerOfPatientIDQualifiersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0026)), alias: "SourcePatientGroupIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0027)), alias: "GroupOfPatientsIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0030)), alias: "PatientBirthDate", vr: VR::DA },
    E { tag: Single(Tag(0x0010, 0x0032)), alias: "PatientBirthTime", vr: VR::TM },
    E { tag: Single(Tag(0x0010, 0x0040)), alias: "PatientSex", vr: VR::CS },
    E { tag: Single(Tag(0x0010, 0x0050)), alias: "PatientInsurancePlanCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0101)), alias: "PatientPrimaryLanguageCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0102)), alias: "PatientPrimaryLanguageModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x0200)), alias: "QualityControlSubject", vr: VR::CS },
    E { tag: Single(Tag(0x0010, 0x0201)), alias: "QualityControlSubjectTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x1001)), alias: "OtherPatientNames", vr: VR::PN },
    E { tag: Single(Tag(0x0010, 0x1002)), alias: "OtherPatientIDsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x1010)), alias: "PatientAge", vr: VR::AS },
    E { tag: Single(Tag(0x0010, 0x1020)), alias: "PatientSize", vr: VR::DS },
    E { tag: Single(Tag(0x0010, 0x1021)), alias: "PatientSizeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x1030)), alias: "PatientWeight", vr: VR::DS },
    E { tag: Single(Tag(0x0010, 0x1040)), alias: "PatientAddress", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x1100)), alias: "ReferencedPatientPhotoSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2000)), alias: "MedicalAlerts", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x2110)), alias: "Allergies", vr: VR::LO },
    E { tag: Single(Tag(0x0010, 0x2160)), alias: "EthnicGroup", vr: VR::SH },
    E { tag: Single(Tag(0x0010, 0x2180)), alias: "Occupation", vr: VR::SH },
    E { tag: Single(Tag(0x0010, 0x21B0)), alias: "AdditionalPatientHistory", vr: VR::LT },
    E { tag: Single(Tag(0x0010, 0x21C0)), alias: "PregnancyStatus", vr: VR::US },
    E { tag: Single(Tag(0x0010, 0x2202)), alias: "PatientSpeciesCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2293)), alias: "PatientBreedCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2294)), alias: "BreedRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x2296)), alias: "BreedRegistryCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0010, 0x4000)), alias: "PatientComments", vr: VR::LT },
    E { tag: Single(Tag(0x0012, 0x0062)), alias: "PatientIdentityRemoved", vr: VR::CS },
    E { tag: Single(Tag(0x0012, 0x0063)), alias: "DeidentificationMethod", vr: VR::LO },
    E { tag: Single(Tag(0x0012, 0x0064)), alias: "DeidentificationMethodCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0012, 0x0083)), alias: "ConsentForClinicalTrialUseSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0010)), alias: "ContrastBolusAgent", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x0012)), alias: "ContrastBolusAgentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0014)), alias: "ContrastBolusAdministrationRouteSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0015)), alias: "BodyPartExamined", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0022)), alias: "ScanOptions", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x0026)), alias: "InterventionDrugInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0029)), alias: "InterventionDrugCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x002A)), alias: "AdditionalDrugSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0036)), alias: "InterventionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x0050)), alias: "SliceThickness", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0060)), alias: "KVP", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x0088)), alias: "SpacingBetweenSlices", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x1000)), alias: "DeviceSerialNumber", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1016)), alias: "SecondaryCaptureDeviceManufacturer", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1018)), alias: "SecondaryCaptureDeviceManufacturerModelName", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1020)), alias: "SoftwareVersions", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1030)), alias: "ProtocolName", vr: VR::LO },
    E { tag: Single(Tag(0x0018, 0x1150)), alias: "ExposureTime", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1151)), alias: "XRayTubeCurrent", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1152)), alias: "Exposure", vr: VR::IS },
    E { tag: Single(Tag(0x0018, 0x1164)), alias: "ImagerPixelSpacing", vr: VR::DS },
    E { tag: Single(Tag(0x0018, 0x5100)), alias: "PatientPosition", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x5104)), alias: "ProjectionEponymousNameCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x6011)), alias: "SequenceOfUltrasoundRegions", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9004)), alias: "ContentQualification", vr: VR::CS },
    E { tag: Single(Tag(0x0018, 0x9006)), alias: "MRImagingModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9042)), alias: "MRReceiveCoilSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9049)), alias: "MRTransmitCoilSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9103)), alias: "MRSpectroscopyFOVGeometrySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9112)), alias: "MRTimingAndRelatedParametersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9114)), alias: "MREchoSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9115)), alias: "MRModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9117)), alias: "MRDiffusionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9118)), alias: "CardiacSynchronizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9119)), alias: "MRAveragesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9125)), alias: "MRFOVGeometrySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9126)), alias: "VolumeLocalizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9152)), alias: "MRMetaboliteMapSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9176)), alias: "OperatingModeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9197)), alias: "MRVelocityEncodingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9226)), alias: "MRImageFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9227)), alias: "MRSpectroscopyFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9301)), alias: "CTAcquisitionTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9304)), alias: "CTAcquisitionDetailsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9308)), alias: "CTTableDynamicsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9312)), alias: "CTGeometrySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9314)), alias: "CTReconstructionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9321)), alias: "CTExposureSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9325)), alias: "CTXRayDetailsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9326)), alias: "CTPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9329)), alias: "CTImageFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9338)), alias: "ContrastBolusIngredientCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9341)), alias: "ContrastBolusUsageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9346)), alias: "CTDIPhantomTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9360)), alias: "CTAdditionalXRaySourceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9401)), alias: "ProjectionPixelCalibrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9405)), alias: "PositionerPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9406)), alias: "TablePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9407)), alias: "CollimatorShapeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9412)), alias: "XAXRFFrameCharacteristicsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9417)), alias: "FrameAcquisitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9432)), alias: "FieldOfViewSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9451)), alias: "FrameDetectorParametersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9455)), alias: "CalibrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9456)), alias: "ObjectThicknessSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9462)), alias: "IsocenterReferenceSystemSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9472)), alias: "FrameDisplayShutterSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9477)), alias: "IrradiationEventIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9504)), alias: "XRay3DFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9506)), alias: "ContributingSourcesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9507)), alias: "XRay3DAcquisitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9530)), alias: "XRay3DReconstructionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9732)), alias: "PETFrameAcquisitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9733)), alias: "PETDetectorMotionDetailsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9734)), alias: "PETTableDynamicsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9735)), alias: "PETPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9736)), alias: "PETFrameCorrectionFactorsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9737)), alias: "RadiopharmaceuticalUsageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9749)), alias: "PETReconstructionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9751)), alias: "PETFrameTypeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9771)), alias: "PatientPhysiologicalStateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9772)), alias: "PatientPhysiologicalStateCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0x9803)), alias: "ExcludedIntervalsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0018, 0xA001)), alias: "ContributingEquipmentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x000D)), alias: "StudyInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x000E)), alias: "SeriesInstanceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x0010)), alias: "StudyID", vr: VR::SH },
    E { tag: Single(Tag(0x0020, 0x0011)), alias: "SeriesNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0012)), alias: "AcquisitionNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0013)), alias: "InstanceNumber", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x0020)), alias: "PatientOrientation", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0032)), alias: "ImagePositionPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x0037)), alias: "ImageOrientationPatient", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x0052)), alias: "FrameOfReferenceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x0060)), alias: "Laterality", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0062)), alias: "ImageLaterality", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x0200)), alias: "SynchronizationFrameOfReferenceUID", vr: VR::UI },
    E { tag: Single(Tag(0x0020, 0x1040)), alias: "PositionReferenceIndicator", vr: VR::LO },
    E { tag: Single(Tag(0x0020, 0x1041)), alias: "SliceLocation", vr: VR::DS },
    E { tag: Single(Tag(0x0020, 0x1206)), alias: "NumberOfStudyRelatedSeries", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x1208)), alias: "NumberOfStudyRelatedInstances", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x1209)), alias: "NumberOfSeriesRelatedInstances", vr: VR::IS },
    E { tag: Single(Tag(0x0020, 0x4000)), alias: "ImageComments", vr: VR::LT },
    E { tag: Single(Tag(0x0020, 0x9071)), alias: "FrameAnatomySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9111)), alias: "FrameContentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9113)), alias: "PlanePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9116)), alias: "PlaneOrientationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9221)), alias: "DimensionOrganizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9222)), alias: "DimensionIndexSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9253)), alias: "RespiratorySynchronizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x930E)), alias: "PlanePositionVolumeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x930F)), alias: "PlaneOrientationVolumeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9310)), alias: "TemporalPositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0020, 0x9311)), alias: "DimensionOrganizationType", vr: VR::CS },
    E { tag: Single(Tag(0x0020, 0x9529)), alias: "ContributingSOPInstancesReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0015)), alias: "AcquisitionDeviceTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0016)), alias: "IlluminationTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0017)), alias: "LightPathFilterTypeStackCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0018)), alias: "ImagePathFilterTypeStackCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x0019)), alias: "LensesCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x001A)), alias: "ChannelDescriptionCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0022, 0x001B)), alias: "RefractiveStateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x0002)), alias: "SamplesPerPixel", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0004)), alias: "PhotometricInterpretation", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x0006)), alias: "PlanarConfiguration", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0008)), alias: "NumberOfFrames", vr: VR::IS },
    E { tag: Single(Tag(0x0028, 0x0009)), alias: "FrameIncrementPointer", vr: VR::AT },
    E { tag: Single(Tag(0x0028, 0x0010)), alias: "Rows", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0011)), alias: "Columns", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0030)), alias: "PixelSpacing", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x0034)), alias: "PixelAspectRatio", vr: VR::IS },
    E { tag: Single(Tag(0x0028, 0x0100)), alias: "BitsAllocated", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0101)), alias: "BitsStored", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0102)), alias: "HighBit", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x0103)), alias: "PixelRepresentation", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x1050)), alias: "WindowCenter", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1051)), alias: "WindowWidth", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1052)), alias: "RescaleIntercept", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1053)), alias: "RescaleSlope", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x1054)), alias: "RescaleType", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x1199)), alias: "PaletteColorLookupTableUID", vr: VR::UI },
    E { tag: Single(Tag(0x0028, 0x1201)), alias: "RedPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1202)), alias: "GreenPaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1203)), alias: "BluePaletteColorLookupTableData", vr: VR::OW },
    E { tag: Single(Tag(0x0028, 0x1300)), alias: "BreastImplantPresent", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1350)), alias: "PartialView", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x1352)), alias: "PartialViewCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x1401)), alias: "DataFrameAssignmentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x1404)), alias: "BlendingLUT1Sequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x140B)), alias: "EnhancedPaletteColorLookupTableSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x140C)), alias: "BlendingLUT2Sequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x2000)), alias: "ICCProfile", vr: VR::OB },
    E { tag: Single(Tag(0x0028, 0x2002)), alias: "ColorSpace", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x2110)), alias: "LossyImageCompression", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x2112)), alias: "LossyImageCompressionRatio", vr: VR::DS },
    E { tag: Single(Tag(0x0028, 0x2114)), alias: "LossyImageCompressionMethod", vr: VR::CS },
    E { tag: Single(Tag(0x0028, 0x3000)), alias: "ModalityLUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x3003)), alias: "LUTExplanation", vr: VR::LO },
    E { tag: Single(Tag(0x0028, 0x3010)), alias: "VOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x3110)), alias: "SoftcopyVOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x6010)), alias: "RepresentativeFrameNumber", vr: VR::US },
    E { tag: Single(Tag(0x0028, 0x6100)), alias: "MaskSubtractionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9110)), alias: "PixelMeasuresSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9132)), alias: "FrameVOILUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9145)), alias: "PixelValueTransformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9415)), alias: "FramePixelShiftSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9422)), alias: "PixelIntensityRelationshipLUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9443)), alias: "FramePixelDataPropertiesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9501)), alias: "PixelShiftSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0028, 0x9505)), alias: "RegionPixelShiftSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x1031)), alias: "RequestingPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x1032)), alias: "RequestingPhysician", vr: VR::PN },
    E { tag: Single(Tag(0x0032, 0x1033)), alias: "RequestingService", vr: VR::LO },
    E { tag: Single(Tag(0x0032, 0x1034)), alias: "RequestingServiceCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x1060)), alias: "RequestedProcedureDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0032, 0x1064)), alias: "RequestedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0032, 0x1070)), alias: "RequestedContrastAgent", vr: VR::LO },
    E { tag: Single(Tag(0x0038, 0x0004)), alias: "ReferencedPatientAliasSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0010)), alias: "AdmissionID", vr: VR::LO },
    E { tag: Single(Tag(0x0038, 0x0014)), alias: "IssuerOfAdmissionIDSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0050)), alias: "SpecialNeeds", vr: VR::LO },
    E { tag: Single(Tag(0x0038, 0x0064)), alias: "IssuerOfServiceEpisodeIDSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0100)), alias: "PertinentDocumentsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0101)), alias: "PertinentResourcesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0038, 0x0300)), alias: "CurrentPatientLocation", vr: VR::LO },
    E { tag: Single(Tag(0x0038, 0x0500)), alias: "PatientState", vr: VR::LO },
    E { tag: Single(Tag(0x0038, 0x0502)), alias: "PatientClinicalTrialParticipationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0005)), alias: "NumberOfWaveformChannels", vr: VR::US },
    E { tag: Single(Tag(0x003A, 0x0010)), alias: "NumberOfWaveformSamples", vr: VR::UL },
    E { tag: Single(Tag(0x003A, 0x001A)), alias: "SamplingFrequency", vr: VR::DS },
    E { tag: Single(Tag(0x003A, 0x0200)), alias: "ChannelDefinitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0208)), alias: "ChannelSourceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0209)), alias: "ChannelSourceModifiersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x020A)), alias: "SourceWaveformSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0211)), alias: "ChannelSensitivityUnitsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x003A, 0x0300)), alias: "MultiplexedAudioChannelsDescriptionCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0001)), alias: "ScheduledStationAETitle", vr: VR::AE },
    E { tag: Single(Tag(0x0040, 0x0002)), alias: "ScheduledProcedureStepStartDate", vr: VR::DA },
    E { tag: Single(Tag(0x0040, 0x0003)), alias: "ScheduledProcedureStepStartTime", vr: VR::TM },
    E { tag: Single(Tag(0x0040, 0x0006)), alias: "ScheduledPerformingPhysicianName", vr: VR::PN },
    E { tag: Single(Tag(0x0040, 0x0007)), alias: "ScheduledProcedureStepDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0008)), alias: "ScheduledProtocolCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0009)), alias: "ScheduledProcedureStepID", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x000B)), alias: "ScheduledPerformingPhysicianIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0010)), alias: "ScheduledStationName", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x0026)), alias: "OrderPlacerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0027)), alias: "OrderFillerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0036)), alias: "AssigningFacilitySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0039)), alias: "AssigningJurisdictionCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x003A)), alias: "AssigningAgencyOrDepartmentCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0100)), alias: "ScheduledProcedureStepSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0220)), alias: "ReferencedNonImageCompositeSOPInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0241)), alias: "PerformedStationAETitle", vr: VR::AE },
    E { tag: Single(Tag(0x0040, 0x0244)), alias: "PerformedProcedureStepStartDate", vr: VR::DA },
    E { tag: Single(Tag(0x0040, 0x0245)), alias: "PerformedProcedureStepStartTime", vr: VR::TM },
    E { tag: Single(Tag(0x0040, 0x0253)), alias: "PerformedProcedureStepID", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x0254)), alias: "PerformedProcedureStepDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0260)), alias: "PerformedProtocolCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0270)), alias: "ScheduledStepAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0275)), alias: "RequestAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0281)), alias: "PerformedProcedureStepDiscontinuationReasonCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0296)), alias: "BillingItemSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x030E)), alias: "ExposureDoseSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0320)), alias: "BillingProcedureStepSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0321)), alias: "FilmConsumptionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0324)), alias: "BillingSuppliesAndDevicesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0340)), alias: "PerformedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0440)), alias: "ProtocolContextSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0441)), alias: "ContentItemModifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0500)), alias: "ScheduledSpecimenSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0512)), alias: "ContainerIdentifier", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0513)), alias: "IssuerOfTheContainerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0515)), alias: "AlternateContainerIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0518)), alias: "ContainerTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0520)), alias: "ContainerComponentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0551)), alias: "SpecimenIdentifier", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x0554)), alias: "SpecimenUID", vr: VR::UI },
    E { tag: Single(Tag(0x0040, 0x0555)), alias: "AcquisitionContextSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0560)), alias: "SpecimenDescriptionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0562)), alias: "IssuerOfTheSpecimenIdentifierSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x059A)), alias: "SpecimenTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0610)), alias: "SpecimenPreparationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x0612)), alias: "SpecimenPreparationStepContentItemSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x08EA)), alias: "MeasurementUnitsCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1001)), alias: "RequestedProcedureID", vr: VR::SH },
    E { tag: Single(Tag(0x0040, 0x100A)), alias: "ReasonForRequestedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1011)), alias: "IntendedRecipientsOfResultsIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1012)), alias: "ReasonForPerformedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x1101)), alias: "PersonIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x2016)), alias: "PlacerOrderNumberImagingServiceRequest", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x2017)), alias: "FillerOrderNumberImagingServiceRequest", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0x9094)), alias: "ReferencedImageRealWorldValueMappingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x9096)), alias: "RealWorldValueMappingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0x9098)), alias: "PixelValueMappingCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA010)), alias: "RelationshipType", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA027)), alias: "VerifyingOrganization", vr: VR::LO },
    E { tag: Single(Tag(0x0040, 0xA030)), alias: "VerificationDateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0040, 0xA032)), alias: "ObservationDateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0040, 0xA040)), alias: "ValueType", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA043)), alias: "ConceptNameCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA050)), alias: "ContinuityOfContent", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA073)), alias: "VerifyingObserverSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA075)), alias: "VerifyingObserverName", vr: VR::PN },
    E { tag: Single(Tag(0x0040, 0xA078)), alias: "AuthorObserverSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA07A)), alias: "ParticipantSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA07C)), alias: "CustodialOrganizationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA088)), alias: "VerifyingObserverIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA120)), alias: "DateTime", vr: VR::DT },
    E { tag: Single(Tag(0x0040, 0xA121)), alias: "Date", vr: VR::DA },
    E { tag: Single(Tag(0x0040, 0xA122)), alias: "Time", vr: VR::TM },
    E { tag: Single(Tag(0x0040, 0xA123)), alias: "PersonName", vr: VR::PN },
    E { tag: Single(Tag(0x0040, 0xA124)), alias: "UID", vr: VR::UI },
    E { tag: Single(Tag(0x0040, 0xA160)), alias: "TextValue", vr: VR::UT },
    E { tag: Single(Tag(0x0040, 0xA168)), alias: "ConceptCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA170)), alias: "PurposeOfReferenceCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA195)), alias: "ModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA300)), alias: "MeasuredValueSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA301)), alias: "NumericValueQualifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA30A)), alias: "NumericValue", vr: VR::DS },
    E { tag: Single(Tag(0x0040, 0xA360)), alias: "PredecessorDocumentsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA370)), alias: "ReferencedRequestSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA372)), alias: "PerformedProcedureCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA375)), alias: "CurrentRequestedProcedureEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA385)), alias: "PertinentOtherEvidenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA390)), alias: "HL7StructuredDocumentReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA491)), alias: "CompletionFlag", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA493)), alias: "VerificationFlag", vr: VR::CS },
    E { tag: Single(Tag(0x0040, 0xA504)), alias: "ContentTemplateSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA525)), alias: "IdenticalDocumentsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0040, 0xA730)), alias: "ContentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0042, 0x0010)), alias: "DocumentTitle", vr: VR::ST },
    E { tag: Single(Tag(0x0042, 0x0011)), alias: "EncapsulatedDocument", vr: VR::OB },
    E { tag: Single(Tag(0x0042, 0x0012)), alias: "MIMETypeOfEncapsulatedDocument", vr: VR::LO },
    E { tag: Single(Tag(0x0042, 0x0013)), alias: "SourceInstanceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x0105)), alias: "OpticalPathSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0048, 0x021A)), alias: "PlanePositionSlideSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0050, 0x0010)), alias: "DeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0050, 0x0012)), alias: "ContainerComponentTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0011)), alias: "NumberOfEnergyWindows", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0012)), alias: "EnergyWindowInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0013)), alias: "EnergyWindowRangeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0016)), alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0021)), alias: "NumberOfDetectors", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0022)), alias: "DetectorInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0052)), alias: "RotationInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0062)), alias: "GatedInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0063)), alias: "DataInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0072)), alias: "TimeSlotInformationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0081)), alias: "NumberOfSlices", vr: VR::US },
    E { tag: Single(Tag(0x0054, 0x0220)), alias: "ViewCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0222)), alias: "ViewModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0300)), alias: "RadionuclideCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0302)), alias: "AdministrationRouteCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0304)), alias: "RadiopharmaceuticalCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0306)), alias: "CalibrationDataSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0410)), alias: "PatientOrientationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0412)), alias: "PatientOrientationModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x0414)), alias: "PatientGantryRelationshipCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0054, 0x1000)), alias: "SeriesType", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1001)), alias: "Units", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1002)), alias: "CountsSource", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1101)), alias: "AttenuationCorrectionMethod", vr: VR::LO },
    E { tag: Single(Tag(0x0054, 0x1102)), alias: "DecayCorrection", vr: VR::CS },
    E { tag: Single(Tag(0x0054, 0x1300)), alias: "FrameReferenceTime", vr: VR::DS },
    E { tag: Single(Tag(0x0060, 0x3000)), alias: "HistogramSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0001)), alias: "SegmentationType", vr: VR::CS },
    E { tag: Single(Tag(0x0062, 0x0002)), alias: "SegmentSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0003)), alias: "SegmentedPropertyCategoryCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0004)), alias: "SegmentNumber", vr: VR::US },
    E { tag: Single(Tag(0x0062, 0x0005)), alias: "SegmentLabel", vr: VR::LO },
    E { tag: Single(Tag(0x0062, 0x0008)), alias: "SegmentAlgorithmType", vr: VR::CS },
    E { tag: Single(Tag(0x0062, 0x000A)), alias: "SegmentIdentificationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x000B)), alias: "ReferencedSegmentNumber", vr: VR::US },
    E { tag: Single(Tag(0x0062, 0x000F)), alias: "SegmentedPropertyTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0062, 0x0011)), alias: "SegmentedPropertyTypeModifierCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x0002)), alias: "DeformableRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x0005)), alias: "DeformableRegistrationGridSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x000F)), alias: "PreDeformationMatrixRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0064, 0x0010)), alias: "PostDeformationMatrixRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0002)), alias: "SurfaceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0011)), alias: "SurfacePointsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0012)), alias: "SurfacePointsNormalsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0013)), alias: "SurfaceMeshPrimitivesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0016)), alias: "PointCoordinatesData", vr: VR::OF },
    E { tag: Single(Tag(0x0066, 0x002F)), alias: "AlgorithmFamilyCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0030)), alias: "AlgorithmNameCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0066, 0x0031)), alias: "AlgorithmVersion", vr: VR::LO },
    E { tag: Single(Tag(0x0066, 0x0036)), alias: "AlgorithmName", vr: VR::LO },
    E { tag: Single(Tag(0x0070, 0x0001)), alias: "GraphicAnnotationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0002)), alias: "GraphicLayer", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0006)), alias: "UnformattedTextValue", vr: VR::ST },
    E { tag: Single(Tag(0x0070, 0x0008)), alias: "TextObjectSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0009)), alias: "GraphicObjectSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0022)), alias: "GraphicData", vr: VR::FL },
    E { tag: Single(Tag(0x0070, 0x0023)), alias: "GraphicType", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0041)), alias: "ImageHorizontalFlip", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0042)), alias: "ImageRotation", vr: VR::US },
    E { tag: Single(Tag(0x0070, 0x005A)), alias: "DisplayedAreaSelectionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0060)), alias: "GraphicLayerSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0080)), alias: "ContentLabel", vr: VR::CS },
    E { tag: Single(Tag(0x0070, 0x0081)), alias: "ContentDescription", vr: VR::LO },
    E { tag: Single(Tag(0x0070, 0x0082)), alias: "PresentationCreationDate", vr: VR::DA },
    E { tag: Single(Tag(0x0070, 0x0083)), alias: "PresentationCreationTime", vr: VR::TM },
    E { tag: Single(Tag(0x0070, 0x0084)), alias: "ContentCreatorName", vr: VR::PN },
    E { tag: Single(Tag(0x0070, 0x0086)), alias: "ContentCreatorIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0087)), alias: "AlternateContentDescriptionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0308)), alias: "RegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0309)), alias: "MatrixRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x030A)), alias: "MatrixSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x030D)), alias: "RegistrationTypeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0314)), alias: "UsedFiducialsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x031C)), alias: "FiducialSetSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x031E)), alias: "FiducialSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0402)), alias: "BlendingSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0070, 0x0404)), alias: "ReferencedSpatialRegistrationSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x000C)), alias: "HangingProtocolDefinitionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x000E)), alias: "HangingProtocolUserIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0020)), alias: "ImageSetsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0022)), alias: "ImageSetSelectorSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0030)), alias: "TimeBasedImageSetsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0072, 0x0200)), alias: "DisplaySetsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0088, 0x0140)), alias: "StorageMediaFileSetUID", vr: VR::UI },
    E { tag: Single(Tag(0x0088, 0x0200)), alias: "IconImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0100)), alias: "DigitalSignatureUID", vr: VR::UI },
    E { tag: Single(Tag(0x0400, 0x0401)), alias: "DigitalSignaturePurposeCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0402)), alias: "ReferencedDigitalSignatureSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0403)), alias: "ReferencedSOPInstanceMACSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0500)), alias: "EncryptedAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0550)), alias: "ModifiedAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x0400, 0x0561)), alias: "OriginalAttributesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x2050, 0x0010)), alias: "PresentationLUTSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x2050, 0x0020)), alias: "PresentationLUTShape", vr: VR::CS },
    E { tag: Single(Tag(0x3002, 0x0002)), alias: "RTImageLabel", vr: VR::SH },
    E { tag: Single(Tag(0x3002, 0x0030)), alias: "ExposureSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3004, 0x0002)), alias: "DoseUnits", vr: VR::CS },
    E { tag: Single(Tag(0x3004, 0x0004)), alias: "DoseType", vr: VR::CS },
    E { tag: Single(Tag(0x3004, 0x000A)), alias: "DoseSummation", vr: VR::CS },
    E { tag: Single(Tag(0x3004, 0x000C)), alias: "GridFrameOffsetVector", vr: VR::DS },
    E { tag: Single(Tag(0x3004, 0x000E)), alias: "DoseGridScaling", vr: VR::DS },
    E { tag: Single(Tag(0x3004, 0x0010)), alias: "RTDoseROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3004, 0x0050)), alias: "DVHSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3004, 0x0058)), alias: "DVHData", vr: VR::DS },
    E { tag: Single(Tag(0x3004, 0x0060)), alias: "DVHReferencedROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0002)), alias: "StructureSetLabel", vr: VR::SH },
    E { tag: Single(Tag(0x3006, 0x0008)), alias: "StructureSetDate", vr: VR::DA },
    E { tag: Single(Tag(0x3006, 0x0009)), alias: "StructureSetTime", vr: VR::TM },
    E { tag: Single(Tag(0x3006, 0x0010)), alias: "ReferencedFrameOfReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0012)), alias: "RTReferencedStudySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0014)), alias: "RTReferencedSeriesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0016)), alias: "ContourImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0020)), alias: "StructureSetROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0022)), alias: "ROINumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0024)), alias: "ReferencedFrameOfReferenceUID", vr: VR::UI },
    E { tag: Single(Tag(0x3006, 0x0026)), alias: "ROIName", vr: VR::LO },
    E { tag: Single(Tag(0x3006, 0x002A)), alias: "ROIDisplayColor", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0030)), alias: "RTRelatedROISequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0036)), alias: "ROIGenerationAlgorithm", vr: VR::CS },
    E { tag: Single(Tag(0x3006, 0x0039)), alias: "ROIContourSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0040)), alias: "ContourSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0042)), alias: "ContourGeometricType", vr: VR::CS },
    E { tag: Single(Tag(0x3006, 0x0046)), alias: "NumberOfContourPoints", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0048)), alias: "ContourNumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0050)), alias: "ContourData", vr: VR::DS },
    E { tag: Single(Tag(0x3006, 0x0080)), alias: "RTROIObservationsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x0082)), alias: "ObservationNumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0084)), alias: "ReferencedROINumber", vr: VR::IS },
    E { tag: Single(Tag(0x3006, 0x0086)), alias: "RTROIIdentificationCodeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x00A0)), alias: "RelatedRTROIObservationsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x00A4)), alias: "RTROIInterpretedType", vr: VR::CS },
    E { tag: Single(Tag(0x3006, 0x00A6)), alias: "ROIInterpreter", vr: VR::PN },
    E { tag: Single(Tag(0x3006, 0x00B0)), alias: "ROIPhysicalPropertiesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x3006, 0x00C0)), alias: "FrameOfReferenceRelationshipSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0002)), alias: "RTPlanLabel", vr: VR::SH },
    E { tag: Single(Tag(0x300A, 0x0006)), alias: "RTPlanDate", vr: VR::DA },
    E { tag: Single(Tag(0x300A, 0x0007)), alias: "RTPlanTime", vr: VR::TM },
    E { tag: Single(Tag(0x300A, 0x000C)), alias: "RTPlanGeometry", vr: VR::CS },
    E { tag: Single(Tag(0x300A, 0x0010)), alias: "DoseReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0012)), alias: "DoseReferenceNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0040)), alias: "ToleranceTableSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0042)), alias: "BeamLimitingDeviceToleranceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0070)), alias: "FractionGroupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0071)), alias: "FractionGroupNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0078)), alias: "NumberOfFractionsPlanned", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0080)), alias: "NumberOfBeams", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0084)), alias: "BeamDose", vr: VR::DS },
    E { tag: Single(Tag(0x300A, 0x0086)), alias: "BeamMeterset", vr: VR::DS },
    E { tag: Single(Tag(0x300A, 0x00B0)), alias: "BeamSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00B6)), alias: "BeamLimitingDeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00C0)), alias: "BeamNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x00C2)), alias: "BeamName", vr: VR::LO },
    E { tag: Single(Tag(0x300A, 0x00C6)), alias: "RadiationType", vr: VR::CS },
    E { tag: Single(Tag(0x300A, 0x00CA)), alias: "PlannedVerificationImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00D1)), alias: "WedgeSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00E3)), alias: "CompensatorSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x00F4)), alias: "BlockSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0107)), alias: "ApplicatorSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0110)), alias: "NumberOfControlPoints", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0111)), alias: "ControlPointSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0112)), alias: "ControlPointIndex", vr: VR::IS },
    E { tag: Single(Tag(0x300A, 0x0116)), alias: "WedgePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x011A)), alias: "BeamLimitingDevicePositionSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0180)), alias: "PatientSetupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0190)), alias: "FixationDeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x01A0)), alias: "ShieldingDeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x01B4)), alias: "SetupDeviceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0210)), alias: "SourceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0230)), alias: "ApplicationSetupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0280)), alias: "ChannelSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x02D0)), alias: "BrachyControlPointSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300A, 0x0420)), alias: "GeneralAccessorySequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0002)), alias: "ReferencedRTPlanSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0004)), alias: "ReferencedBeamSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0006)), alias: "ReferencedBeamNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300C, 0x000A)), alias: "ReferencedBrachyApplicationSetupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0020)), alias: "ReferencedFractionGroupSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0022)), alias: "ReferencedFractionGroupNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300C, 0x0040)), alias: "ReferencedVerificationImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0042)), alias: "ReferencedReferenceImageSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0050)), alias: "ReferencedDoseReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0051)), alias: "ReferencedDoseReferenceNumber", vr: VR::IS },
    E { tag: Single(Tag(0x300C, 0x0055)), alias: "BrachyReferencedDoseReferenceSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0060)), alias: "ReferencedStructureSetSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300C, 0x0080)), alias: "ReferencedDoseSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x300E, 0x0002)), alias: "ApprovalStatus", vr: VR::CS },
    E { tag: Single(Tag(0x300E, 0x0004)), alias: "ReviewDate", vr: VR::DA },
    E { tag: Single(Tag(0x300E, 0x0005)), alias: "ReviewTime", vr: VR::TM },
    E { tag: Single(Tag(0x300E, 0x0008)), alias: "ReviewerName", vr: VR::PN },
    E { tag: Single(Tag(0x4FFE, 0x0001)), alias: "MACParametersSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x5200, 0x9229)), alias: "SharedFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x5200, 0x9230)), alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x5400, 0x0100)), alias: "WaveformSequence", vr: VR::SQ },
    E { tag: Single(Tag(0x7FE0, 0x0010)), alias: "PixelData", vr: VR::OW },
    E { tag: Single(Tag(0xFFFA, 0xFFFA)), alias: "DigitalSignaturesSequence", vr: VR::SQ },
    E { tag: Single(Tag(0xFFFE, 0xE000)), alias: "Item", vr: VR::UN },
    E { tag: Single(Tag(0xFFFE, 0xE00D)), alias: "ItemDelimitationItem", vr: VR::UN },
    E { tag: Single(Tag(0xFFFE, 0xE0DD)), alias: "SequenceDelimitationItem", vr: VR::UN },
    E { tag: Group100(Tag(0x6000, 0x0010)), alias: "OverlayRows", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0011)), alias: "OverlayColumns", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0040)), alias: "OverlayType", vr: VR::CS },
    E { tag: Group100(Tag(0x6000, 0x0050)), alias: "OverlayOrigin", vr: VR::SS },
    E { tag: Group100(Tag(0x6000, 0x0100)), alias: "OverlayBitsAllocated", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x0102)), alias: "OverlayBitPosition", vr: VR::US },
    E { tag: Group100(Tag(0x6000, 0x3000)), alias: "OverlayData", vr: VR::OW },
];
