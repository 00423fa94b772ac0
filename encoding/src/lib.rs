//! DICOM encoding and decoding primitives.
//!
//! This crate provides interfaces and data structures for reading and writing
//! data element headers in accordance to the DICOM standard.
//! This crate also hosts the concept of [transfer syntax specifier],
//! which can be used to produce DICOM encoders and decoders at run-time.
//!
//! Element values are not interpreted here:
//! reading and writing whole data sets is the responsibility
//! of the `dcmkit-parser` crate.
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]

pub mod adapters;
pub mod decode;
pub mod encode;
pub mod transfer_syntax;

pub use adapters::{PixelCodecError, PixelDataCodec, PixelDataInfo};
pub use byteordered;
pub use decode::Decode;
pub use encode::Encode;
pub use transfer_syntax::{Codec, DataRWAdapter, TransferSyntax, TransferSyntaxIndex};
