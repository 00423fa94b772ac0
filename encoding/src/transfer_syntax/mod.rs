//! Module containing the DICOM Transfer Syntax data structure and related methods.
//! The `TransferSyntax` describes how a data set is laid out in binary form
//! and provides the element header decoders and encoders for it.
//!
//! This crate does not host specific transfer syntaxes. Instead, they are
//! declared in the `dcmkit-transfer-syntax-registry` crate, which provides an
//! implementation of [`TransferSyntaxIndex`].

use crate::decode::basic::BasicDecoder;
use crate::decode::explicit_be::ExplicitVRBigEndianDecoder;
use crate::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use crate::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use crate::decode::DecodeFrom;
use crate::encode::explicit_be::ExplicitVRBigEndianEncoder;
use crate::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use crate::encode::implicit_le::ImplicitVRLittleEndianEncoder;
use crate::encode::{EncodeTo, EncoderFor};
use std::fmt;
use std::io::{Read, Write};

pub use byteordered::Endianness;

/// A decoder with its type erased.
pub type DynDecoder<S> = Box<dyn DecodeFrom<S>>;

/// An encoder with its type erased.
pub type DynEncoder<'w, W> = Box<dyn EncodeTo<W> + 'w>;

/// A DICOM transfer syntax specifier.
///
/// Descriptors are plain values, usually declared as constants
/// and looked up by UID through a [`TransferSyntaxIndex`].
#[derive(Debug, Clone)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements and implemented capabilities.
    codec: Codec,
}

/// Trait for containers of transfer syntax specifiers.
///
/// Types implementing this trait are held responsible for populating
/// themselves with a set of transfer syntaxes, which can be fully supported,
/// partially supported, or not supported. Usually, only one implementation
/// of this trait is used for the entire program.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of trailing null characters (`\0`) or spaces in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

/// A description and possible implementation regarding
/// the encoding and decoding requirements of a transfer syntax.
/// This is also used as a means to describe whether pixel data is encapsulated.
#[derive(Debug, Clone, Copy)]
pub enum Codec {
    /// No codec is given, nor is it required.
    None,
    /// Custom encoding and decoding of the entire data set is required, but
    /// not supported. This is used by the stub of
    /// _Deflated Explicit VR Little Endian_ when compression is disabled.
    Unsupported,
    /// The pixel data is encapsulated.
    /// Data sets can be parsed and written as usual,
    /// with the pixel data kept in its encapsulated form.
    EncapsulatedPixelData,
    /// A full, custom data set codec is required and provided.
    Dataset(&'static dyn DataRWAdapter),
}

/// An adapter of byte read and write streams,
/// applied to the whole data set after the file meta group.
pub trait DataRWAdapter: fmt::Debug + Send + Sync {
    /// Adapt a byte reader.
    fn adapt_reader<'r>(&self, reader: Box<dyn Read + 'r>) -> Box<dyn Read + 'r>;

    /// Adapt a byte writer.
    ///
    /// The adapted writer is flushed once after the whole data set,
    /// and must write out any trailing state at that point,
    /// reporting failures from `flush`.
    fn adapt_writer<'w>(&self, writer: Box<dyn Write + 'w>) -> Box<dyn Write + 'w>;
}

impl TransferSyntax {
    /** Create a new transfer syntax descriptor.
     *
     * Note that only transfer syntax implementors are expected to construct
     * TS descriptors from scratch. For a practical usage of transfer syntaxes,
     * one should look up an existing transfer syntax registry by UID.
     */
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether the value representation of each element is written out.
    pub const fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain the codec kind of this transfer syntax.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Check whether this transfer syntax specifier provides a complete
    /// implementation for reading and writing data sets.
    pub fn fully_supported(&self) -> bool {
        matches!(
            self.codec,
            Codec::None | Codec::Dataset(_) | Codec::EncapsulatedPixelData
        )
    }

    /// Check whether reading and writing of data sets is unsupported.
    /// If this is `true`, encoding and decoding will not be available.
    pub fn unsupported(&self) -> bool {
        matches!(self.codec, Codec::Unsupported)
    }

    /// Check whether the pixel data is encapsulated
    /// (compressed, fragmented and of undefined length)
    /// in this transfer syntax.
    pub fn is_encapsulated_pixel_data(&self) -> bool {
        matches!(self.codec, Codec::EncapsulatedPixelData)
    }

    /// Check whether the pixel data is stored in its native form.
    pub fn is_native_pixel_data(&self) -> bool {
        !self.is_encapsulated_pixel_data()
    }

    /// Retrieve the data set adapter of this transfer syntax, if any.
    pub fn data_adapter(&self) -> Option<&'static dyn DataRWAdapter> {
        match self.codec {
            Codec::Dataset(adapter) => Some(adapter),
            _ => None,
        }
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax.
    /// Can yield none if decoding is not supported.
    ///
    /// The resulting decoder does not consider data set compression rules.
    /// The consumer of this method needs to adapt the reader
    /// (see [`data_adapter`](Self::data_adapter)) before using the decoder.
    pub fn decoder<'s>(&self) -> Option<DynDecoder<dyn Read + 's>> {
        self.decoder_for()
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax
    /// and given reader type.
    /// Can yield none if decoding is not supported.
    pub fn decoder_for<S>(&self) -> Option<DynDecoder<S>>
    where
        S: ?Sized + Read,
    {
        if self.unsupported() {
            return None;
        }
        match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => {
                Some(Box::new(ImplicitVRLittleEndianDecoder::default()))
            }
            (Endianness::Little, true) => Some(Box::new(ExplicitVRLittleEndianDecoder::default())),
            (Endianness::Big, true) => Some(Box::new(ExplicitVRBigEndianDecoder::default())),
            _ => None,
        }
    }

    /// Retrieve the appropriate data element encoder for this transfer syntax.
    /// Can yield none if encoding is not supported. The resulting encoder does not
    /// consider data set compression rules.
    pub fn encoder<'w>(&self) -> Option<DynEncoder<'w, dyn Write + 'w>> {
        self.encoder_for()
    }

    /// Retrieve the appropriate data element encoder for this transfer syntax
    /// and the given writer type.
    pub fn encoder_for<'w, W>(&self) -> Option<DynEncoder<'w, W>>
    where
        W: ?Sized + Write + 'w,
    {
        if self.unsupported() {
            return None;
        }
        match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Some(Box::new(EncoderFor::new(
                ImplicitVRLittleEndianEncoder::default(),
            ))),
            (Endianness::Little, true) => Some(Box::new(EncoderFor::new(
                ExplicitVRLittleEndianEncoder::default(),
            ))),
            (Endianness::Big, true) => Some(Box::new(EncoderFor::new(
                ExplicitVRBigEndianEncoder::default(),
            ))),
            _ => None,
        }
    }

    /// Obtain a dynamic basic decoder, based on this transfer syntax' expected endianness.
    pub fn basic_decoder(&self) -> BasicDecoder {
        BasicDecoder::from(self.endianness())
    }
}

impl PartialEq for TransferSyntax {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_core::Tag;

    const IMPLICIT: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2",
        "Implicit VR Little Endian",
        Endianness::Little,
        false,
        Codec::None,
    );

    const EXPLICIT_BE: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2.2",
        "Explicit VR Big Endian",
        Endianness::Big,
        true,
        Codec::None,
    );

    const STUB: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2.1.99",
        "Deflated Explicit VR Little Endian",
        Endianness::Little,
        true,
        Codec::Unsupported,
    );

    #[test]
    fn decoders_follow_byte_order() {
        let decoder = IMPLICIT.decoder().unwrap();
        let mut source: &[u8] = &[0x08, 0x00, 0x18, 0x00];
        assert_eq!(
            decoder.decode_tag(&mut source).unwrap(),
            Tag(0x0008, 0x0018)
        );

        let decoder = EXPLICIT_BE.decoder().unwrap();
        let mut source: &[u8] = &[0x00, 0x08, 0x00, 0x18];
        assert_eq!(
            decoder.decode_tag(&mut source).unwrap(),
            Tag(0x0008, 0x0018)
        );
        assert_eq!(EXPLICIT_BE.basic_decoder(), BasicDecoder::BE(crate::decode::basic::BigEndianBasicDecoder));
    }

    #[test]
    fn unsupported_syntax_has_no_codecs() {
        assert!(STUB.unsupported());
        assert!(!STUB.fully_supported());
        assert!(STUB.decoder().is_none());
        assert!(STUB.encoder().is_none());
        assert!(STUB.data_adapter().is_none());
    }

    #[test]
    fn encapsulation_flag() {
        let jpeg = TransferSyntax::new(
            "1.2.840.10008.1.2.4.50",
            "JPEG Baseline (Process 1)",
            Endianness::Little,
            true,
            Codec::EncapsulatedPixelData,
        );
        assert!(jpeg.is_encapsulated_pixel_data());
        assert!(jpeg.fully_supported());
        assert!(IMPLICIT.is_native_pixel_data());
        assert_ne!(jpeg, IMPLICIT);
        assert_eq!(jpeg.to_string(), "JPEG Baseline (Process 1) (1.2.840.10008.1.2.4.50)");
    }
}
