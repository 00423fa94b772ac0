#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmkit containing the concepts
//! and data structures shared by every layer of the toolkit.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types for DICOM element headers,
//!   including DICOM tags, value representations and value lengths.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing the attribute's typical value representation.
//! - [`value`] holds the in-memory value of data elements,
//!   which may be raw primitive bytes, a sequence of nested items,
//!   or a sequence of encapsulated pixel data fragments.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::DataDictionary;
pub use header::{DataElement, DataElementHeader, Length, Tag, VR};
pub use value::{PrimitiveValue, Value as DicomValue};

// re-export crates that are part of the public API
pub use smallvec;
