//! This crate provides interfaces and data structures for reading and writing
//! DICOM data sets as streams of tokens.
//!
//! - The [`stateful`] module contains the stateful decoder and encoder,
//!   which read and write element headers and values
//!   while keeping track of the current byte position.
//! - The [`dataset`] module contains a token-based reader and writer
//!   of whole data sets, including nested sequences
//!   and encapsulated pixel data.
//!
//! For the time being, all APIs are based on synchronous I/O.
pub mod dataset;
pub mod stateful {
    pub mod decode;
    pub mod encode;
}

mod util;

pub use dataset::{DataSetReader, DataSetReaderOptions, DataSetWriter, DataToken};
pub use stateful::decode::{DynStatefulDecoder, StatefulDecode, StatefulDecoder};
pub use stateful::encode::{DynStatefulEncoder, StatefulEncoder};
