//! Token streams written by the data set writer
//! and read back by the data set reader.

use dcmkit_core::header::{DataElementHeader, Length};
use dcmkit_core::value::PrimitiveValue;
use dcmkit_core::{Tag, VR};
use dcmkit_encoding::TransferSyntax;
use dcmkit_parser::dataset::{DataSetWriterOptions, SequenceLengthStrategy};
use dcmkit_parser::{DataSetReader, DataSetWriter, DataToken};
use dcmkit_transfer_syntax_registry::entries::{
    EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
};
use rstest::rstest;

fn tokens() -> Vec<DataToken> {
    vec![
        DataToken::ElementHeader(DataElementHeader::new(
            Tag(0x0008, 0x0018),
            VR::UI,
            Length(8),
        )),
        DataToken::PrimitiveValue(PrimitiveValue::from("1.2.3.4\0")),
        DataToken::SequenceStart {
            tag: Tag(0x0008, 0x1140),
            len: Length::UNDEFINED,
        },
        DataToken::ItemStart {
            len: Length::UNDEFINED,
        },
        DataToken::ElementHeader(DataElementHeader::new(
            Tag(0x0008, 0x1150),
            VR::UI,
            Length(4),
        )),
        DataToken::PrimitiveValue(PrimitiveValue::from("1.2\0")),
        DataToken::ItemEnd,
        DataToken::SequenceEnd,
        DataToken::ElementHeader(DataElementHeader::new(
            Tag(0x0028, 0x0010),
            VR::US,
            Length(2),
        )),
        DataToken::PrimitiveValue(PrimitiveValue::from_u16s(&[512])),
    ]
}

fn write(ts: &TransferSyntax, strategy: SequenceLengthStrategy) -> Vec<u8> {
    let mut out = Vec::new();
    let options = DataSetWriterOptions::default().sequence_length(strategy);
    let mut writer = DataSetWriter::with_ts_options(&mut out, ts, options).unwrap();
    writer.write_sequence(tokens()).unwrap();
    writer.flush().unwrap();
    drop(writer);
    out
}

#[rstest]
fn tokens_survive_a_round_trip(
    #[values(
        &IMPLICIT_VR_LITTLE_ENDIAN,
        &EXPLICIT_VR_LITTLE_ENDIAN,
        &EXPLICIT_VR_BIG_ENDIAN
    )]
    ts: &TransferSyntax,
    #[values(SequenceLengthStrategy::Explicit, SequenceLengthStrategy::Undefined)]
    strategy: SequenceLengthStrategy,
) {
    let bytes = write(ts, strategy);

    let reader = DataSetReader::new_with_ts(&bytes[..], ts).unwrap();
    let read: Vec<DataToken> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(read, tokens());
}

#[test]
fn big_endian_output_differs_only_in_byte_order() {
    let le = write(&EXPLICIT_VR_LITTLE_ENDIAN, SequenceLengthStrategy::Explicit);
    let be = write(&EXPLICIT_VR_BIG_ENDIAN, SequenceLengthStrategy::Explicit);
    assert_eq!(le.len(), be.len());
    // (0028,0010) US 512 closes both streams
    assert_eq!(&le[le.len() - 10..], &[0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02]);
    assert_eq!(&be[be.len() - 10..], &[0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00]);
}
