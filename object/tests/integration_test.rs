use dcmkit_core::value::{PrimitiveValue, Value};
use dcmkit_core::{DataElement, Length, Tag, VR};
use dcmkit_dictionary_std::{tags, uids};
use dcmkit_encoding::TransferSyntax;
use dcmkit_object::{
    read_bytes, DefaultDicomObject, FileMetaTableBuilder, InMemDicomObject, OpenFileOptions,
    ReadError, ReadPreamble, SequenceLengthStrategy, Transcode, WriteOptions,
};
use dcmkit_parser::dataset::read::Error as ParseError;
use dcmkit_transfer_syntax_registry::entries::{
    EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
};
use rstest::rstest;

fn referenced_image(instance_uid: &str) -> InMemDicomObject {
    InMemDicomObject::from_element_iter(vec![
        DataElement::new(
            tags::REFERENCED_SOP_CLASS_UID,
            VR::UI,
            "1.2.840.10008.5.1.4.1.1.7\0",
        ),
        DataElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, instance_uid),
    ])
}

/// A small image with a nested sequence and native pixel data.
/// Every value has an even length.
fn sample_object() -> InMemDicomObject {
    InMemDicomObject::from_element_iter(vec![
        DataElement::new(tags::PIXEL_DATA, VR::OW, PrimitiveValue::from_u16s(&[1, 2, 3, 0x1234])),
        DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
        DataElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7\0"),
        DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "2.25.1234\0"),
        DataElement::new(tags::MODALITY, VR::CS, "OT"),
        DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from_u16s(&[2])),
        DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from_u16s(&[2])),
        DataElement::new(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            Value::new_sequence(
                vec![referenced_image("2.25.11\0"), referenced_image("2.25.12\0")],
                Length::UNDEFINED,
            ),
        ),
    ])
}

fn sample_file(ts: &TransferSyntax) -> DefaultDicomObject {
    sample_object()
        .with_meta(FileMetaTableBuilder::new().transfer_syntax(ts.uid()))
        .unwrap()
}

#[rstest]
#[case(&IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_BIG_ENDIAN)]
fn file_round_trip(#[case] ts: &TransferSyntax) {
    let file = sample_file(ts);
    let bytes = file.to_bytes().unwrap();

    let back = read_bytes(&bytes).unwrap();
    assert_eq!(back.meta().transfer_syntax(), ts.uid());
    assert_eq!(&*back, &*file);

    let pixels = back.element(tags::PIXEL_DATA).unwrap();
    assert_eq!(pixels.vr(), VR::OW);
    assert_eq!(
        pixels.value().primitive().unwrap().as_bytes(),
        &[1, 0, 2, 0, 3, 0, 0x34, 0x12]
    );
}

#[cfg(feature = "deflate")]
#[test]
fn deflated_file_round_trip() {
    use dcmkit_transfer_syntax_registry::entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN;

    let file = sample_file(&DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);
    let bytes = file.to_bytes().unwrap();
    let back = read_bytes(&bytes).unwrap();
    assert_eq!(&*back, &*file);
}

#[cfg(feature = "deflate")]
#[test]
fn deflated_write_into_full_sink_fails() {
    use dcmkit_transfer_syntax_registry::entries::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN;

    let mut buf = [0_u8; 8];
    let result =
        sample_object().write_dataset_with_ts(&mut buf[..], &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);
    assert!(result.is_err());
}

#[rstest]
#[case(SequenceLengthStrategy::Explicit)]
#[case(SequenceLengthStrategy::Undefined)]
fn sequence_length_strategies_decode_alike(#[case] strategy: SequenceLengthStrategy) {
    let file = sample_file(&EXPLICIT_VR_LITTLE_ENDIAN);
    let mut bytes = Vec::new();
    file.write_all_with_options(&mut bytes, WriteOptions::new().sequence_length(strategy))
        .unwrap();

    let back = read_bytes(&bytes).unwrap();
    assert_eq!(&*back, &*file);

    let items = back
        .element(tags::REFERENCED_IMAGE_SEQUENCE)
        .unwrap()
        .items()
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[1]
            .element(tags::REFERENCED_SOP_INSTANCE_UID)
            .unwrap()
            .to_str()
            .unwrap(),
        "2.25.12"
    );
}

#[test]
fn elements_are_written_in_tag_order() {
    let obj = InMemDicomObject::from_element_iter(vec![
        DataElement::new(tags::PATIENT_ID, VR::LO, "ID01"),
        DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "2.25.1\0"),
        DataElement::new(tags::MODALITY, VR::CS, "OT"),
        DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
    ]);
    let mut bytes = Vec::new();
    obj.write_dataset_with_ts(&mut bytes, &EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap();

    // walk the headers: tag, 2-byte VR, 2-byte length
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let group = u16::from_le_bytes([bytes[pos], bytes[pos + 1]]);
        let element = u16::from_le_bytes([bytes[pos + 2], bytes[pos + 3]]);
        let len = u16::from_le_bytes([bytes[pos + 6], bytes[pos + 7]]) as usize;
        found.push(Tag(group, element));
        pos += 8 + len;
    }
    assert_eq!(
        found,
        vec![
            tags::SOP_INSTANCE_UID,
            tags::MODALITY,
            tags::PATIENT_NAME,
            tags::PATIENT_ID,
        ]
    );
}

#[test]
fn minimal_explicit_round_trip_keeps_padding() {
    let obj = InMemDicomObject::from_element_iter(vec![DataElement::new(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        "1.2.3.4",
    )]);
    let mut bytes = Vec::new();
    obj.write_dataset_with_ts(&mut bytes, &EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap();

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x08, 0x00,
        b'1', b'.', b'2', b'.', b'3', b'.', b'4', 0x00,
    ];
    assert_eq!(&bytes[..], expected);

    let back = InMemDicomObject::read_dataset_with_ts(&bytes[..], &EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap();
    let elem = back.element(tags::SOP_INSTANCE_UID).unwrap();
    assert_eq!(elem.vr(), VR::UI);
    assert_eq!(elem.value().primitive().unwrap().as_bytes(), b"1.2.3.4\0");
    assert_eq!(elem.to_str().unwrap(), "1.2.3.4");
}

#[test]
fn implicit_unknown_tag_is_read_as_un() {
    #[rustfmt::skip]
    let bytes: &[u8] = &[
        // (0009,1001) private, not in the dictionary
        0x09, 0x00, 0x01, 0x10, 0x04, 0x00, 0x00, 0x00,
        0xDE, 0xAD, 0xBE, 0xEF,
    ];
    let obj = InMemDicomObject::read_dataset_with_ts(bytes, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let elem = obj.element(Tag(0x0009, 0x1001)).unwrap();
    assert_eq!(elem.vr(), VR::UN);
    assert_eq!(
        elem.value().primitive().unwrap().as_bytes(),
        &[0xDE, 0xAD, 0xBE, 0xEF]
    );
}

fn private_sequence_object() -> InMemDicomObject {
    InMemDicomObject::from_element_iter(vec![
        DataElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME"),
        DataElement::new(
            Tag(0x0009, 0x1001),
            VR::SQ,
            Value::new_sequence(
                vec![InMemDicomObject::from_element_iter(vec![DataElement::new(
                    tags::PATIENT_NAME,
                    VR::PN,
                    "Doe^John",
                )])],
                Length::UNDEFINED,
            ),
        ),
    ])
}

#[rstest]
#[case(&IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_BIG_ENDIAN)]
fn private_sequence_round_trip(#[case] ts: &TransferSyntax) {
    let obj = private_sequence_object();
    let mut bytes = Vec::new();
    obj.write_dataset_with_ts(&mut bytes, ts).unwrap();

    let back = InMemDicomObject::read_dataset_with_ts(&bytes[..], ts).unwrap();
    let elem = back.element(Tag(0x0009, 0x1001)).unwrap();
    assert_eq!(elem.vr(), VR::SQ);
    assert_eq!(elem.items().map(|items| items.len()), Some(1));
    assert_eq!(back, obj);
}

#[test]
fn convert_private_sequence_to_implicit() {
    let file = private_sequence_object()
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("2.25.99")
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN),
        )
        .unwrap();

    let converted = file.transcode(&IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let back = read_bytes(&converted.to_bytes().unwrap()).unwrap();
    assert_eq!(back.meta().transfer_syntax(), uids::IMPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(&*back, &private_sequence_object());
}

#[test]
fn convert_implicit_to_explicit() {
    let file = sample_file(&IMPLICIT_VR_LITTLE_ENDIAN);
    let file = read_bytes(&file.to_bytes().unwrap()).unwrap();

    let converted = file.transcode(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(
        converted.meta().transfer_syntax(),
        uids::EXPLICIT_VR_LITTLE_ENDIAN
    );
    assert_eq!(converted.meta().media_storage_sop_instance_uid(), "2.25.1234");

    let bytes = converted.to_bytes().unwrap();
    let back = read_bytes(&bytes).unwrap();
    assert_eq!(back.meta().transfer_syntax(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(
        back.tags().collect::<Vec<_>>(),
        file.tags().collect::<Vec<_>>()
    );
    assert_eq!(&*back, &*file);
}

#[test]
fn truncated_value_reports_tag() {
    // declares 100 bytes for the patient name, supplies 50
    let mut bytes = vec![0x10, 0x00, 0x10, 0x00, b'P', b'N', 100, 0x00];
    bytes.extend(std::iter::repeat(b'A').take(50));

    let err = InMemDicomObject::read_dataset_with_ts(&bytes[..], &EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap_err();
    assert!(matches!(
        err,
        ReadError::ReadToken {
            source: ParseError::ReadValue { tag, len: 100, .. },
            ..
        } if tag == tags::PATIENT_NAME
    ));
}

#[test]
fn unterminated_sequence_fails() {
    #[rustfmt::skip]
    let bytes: &[u8] = &[
        // (0008,1140) SQ, undefined length
        0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
        // (0008,1155) UI "2.25"
        0x08, 0x00, 0x55, 0x11, b'U', b'I', 0x04, 0x00, b'2', b'.', b'2', b'5',
    ];
    let err =
        InMemDicomObject::read_dataset_with_ts(bytes, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
    assert!(matches!(
        err,
        ReadError::ReadToken {
            source: ParseError::UnterminatedSequence { open: 2, .. },
            ..
        }
    ));
}

fn nested(depth: usize) -> InMemDicomObject {
    let mut obj = InMemDicomObject::from_element_iter(vec![DataElement::new(
        tags::PATIENT_ID,
        VR::LO,
        "ID01",
    )]);
    for _ in 0..depth {
        obj = InMemDicomObject::from_element_iter(vec![DataElement::new(
            tags::CONTENT_SEQUENCE,
            VR::SQ,
            Value::new_sequence(vec![obj], Length::UNDEFINED),
        )]);
    }
    obj
}

#[test]
fn nesting_depth_is_bounded() {
    let file = nested(70)
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("2.25.9"),
        )
        .unwrap();
    let bytes = file.to_bytes().unwrap();

    let err = read_bytes(&bytes).unwrap_err();
    assert!(matches!(
        err,
        ReadError::ReadToken {
            source: ParseError::DepthExceeded { max_depth: 64, .. },
            ..
        }
    ));

    let back = OpenFileOptions::new()
        .max_depth(128)
        .read_bytes(&bytes)
        .unwrap();
    assert_eq!(&*back, &*file);
}

#[test]
fn file_boundary_rules() {
    let bytes = sample_file(&EXPLICIT_VR_LITTLE_ENDIAN).to_bytes().unwrap();

    // too short to hold a preamble and magic code
    let err = OpenFileOptions::new()
        .read_preamble(ReadPreamble::Always)
        .read_bytes(&bytes[..100])
        .unwrap_err();
    assert!(matches!(err, ReadError::NotDicom { .. }));

    // lenient reading starts at offset 132 regardless of the magic code
    let mut broken = bytes.clone();
    broken[128..132].copy_from_slice(b"NOPE");
    assert!(matches!(
        read_bytes(&broken),
        Err(ReadError::NotDicom { .. })
    ));
    let file = OpenFileOptions::new().force(true).read_bytes(&broken).unwrap();
    assert_eq!(
        file.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
        "Doe^John"
    );
}
