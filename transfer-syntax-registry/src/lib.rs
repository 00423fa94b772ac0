//! This crate contains the DICOM transfer syntax registry.
//!
//! The transfer syntax registry maps a DICOM UID of a transfer syntax into the
//! respective transfer syntax specifier.
//! The registry is built once, on first use, and is never modified afterwards.
//!
//! ```
//! use dcmkit_encoding::TransferSyntaxIndex;
//! use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
//!
//! let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1").unwrap();
//! assert_eq!(ts.name(), "Explicit VR Little Endian");
//! assert!(ts.explicit_vr());
//! ```
//!
//! Deflated Explicit VR Little Endian is only fully supported
//! with the `deflate` Cargo feature, which is enabled by default.
//! Without it, the registry knows the transfer syntax
//! but reports it as unsupported.

use dcmkit_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

pub mod entries;

#[cfg(feature = "deflate")]
mod deflate;

/// Main implementation of a registry of DICOM transfer syntaxes.
///
/// Consumers would usually not interact with this type directly,
/// but through the [`TransferSyntaxIndex`] trait.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &'static TransferSyntax> {
        get_registry().m.values()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        get_registry().get(uid)
    }
}

/// Data type for the inner map of the registry.
struct TransferSyntaxRegistryImpl {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistryImpl {
    /// Obtain a DICOM codec by transfer syntax UID.
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        // UIDs read from a data set may carry their padding
        let ts_uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        let ts = self.m.get(ts_uid);
        if ts.is_none() {
            tracing::debug!("Unknown transfer syntax `{}`", ts_uid);
        }
        ts
    }

    fn register(&mut self, ts: TransferSyntax) {
        if let Some(previous) = self.m.insert(ts.uid(), ts) {
            tracing::warn!("Transfer syntax {} registered twice", previous.uid());
        }
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistryImpl = {
        let mut registry = TransferSyntaxRegistryImpl { m: HashMap::new() };
        for ts in entries::ALL {
            registry.register(ts.clone());
        }
        registry
    };
}

/// Retrieve the default transfer syntax:
/// Implicit VR Little Endian.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

fn get_registry() -> &'static TransferSyntaxRegistryImpl {
    &REGISTRY
}
