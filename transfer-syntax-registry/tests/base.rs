//! Registry tests, to ensure that transfer syntaxes are properly
//! registered and described.

use dcmkit_encoding::byteordered::Endianness;
use dcmkit_encoding::transfer_syntax::TransferSyntaxIndex;
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use rstest::rstest;

#[rstest]
#[case("1.2.840.10008.1.2", Endianness::Little, false)]
#[case("1.2.840.10008.1.2\0", Endianness::Little, false)]
#[case("1.2.840.10008.1.2.1", Endianness::Little, true)]
#[case("1.2.840.10008.1.2.2", Endianness::Big, true)]
fn contains_base_ts(#[case] uid: &str, #[case] endianness: Endianness, #[case] explicit: bool) {
    let ts = TransferSyntaxRegistry
        .get(uid)
        .expect("transfer syntax should be registered");
    assert_eq!(ts.uid(), uid.trim_end_matches('\0'));
    assert!(ts.fully_supported());
    assert!(!ts.is_encapsulated_pixel_data());
    assert_eq!(ts.endianness(), endianness);
    assert_eq!(ts.explicit_vr(), explicit);
    assert!(ts.decoder().is_some());
    assert!(ts.encoder().is_some());
}

#[rstest]
#[case("1.2.840.10008.1.2.1.98")]
#[case("1.2.840.10008.1.2.4.50")]
#[case("1.2.840.10008.1.2.4.51")]
#[case("1.2.840.10008.1.2.4.57")]
#[case("1.2.840.10008.1.2.4.70")]
#[case("1.2.840.10008.1.2.4.80")]
#[case("1.2.840.10008.1.2.4.81")]
#[case("1.2.840.10008.1.2.4.90")]
#[case("1.2.840.10008.1.2.4.91")]
#[case("1.2.840.10008.1.2.4.92")]
#[case("1.2.840.10008.1.2.4.93")]
#[case("1.2.840.10008.1.2.5")]
fn contains_encapsulated_ts(#[case] uid: &str) {
    let ts = TransferSyntaxRegistry
        .get(uid)
        .expect("transfer syntax should be registered");
    assert!(ts.is_encapsulated_pixel_data());
    assert!(ts.explicit_vr());
    assert_eq!(ts.endianness(), Endianness::Little);
    // data sets remain readable, only the pixel data is opaque
    assert!(ts.decoder().is_some());
}

#[cfg(feature = "deflate")]
#[test]
fn deflated_is_fully_supported() {
    let ts = TransferSyntaxRegistry
        .get("1.2.840.10008.1.2.1.99")
        .expect("transfer syntax should be registered");
    assert!(ts.fully_supported());
    assert!(ts.data_adapter().is_some());
}

#[cfg(not(feature = "deflate"))]
#[test]
fn deflated_is_a_stub() {
    let ts = TransferSyntaxRegistry
        .get("1.2.840.10008.1.2.1.99")
        .expect("transfer syntax should be registered");
    assert!(ts.unsupported());
    assert!(ts.decoder().is_none());
}

#[test]
fn unknown_ts_is_absent() {
    assert!(TransferSyntaxRegistry.get("1.2.3.4.5").is_none());
    assert!(TransferSyntaxRegistry.get("").is_none());
}
