//! This crate implements the standard DICOM attribute dictionary and constants.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: Contains the DICOM attributes known to the toolkit,
//!   including the whole File Meta Information group
//!   and the Basic Directory attributes.
//!   It is what implicit VR decoders consult
//!   to recover the value representation of each element.
//!
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;

pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
