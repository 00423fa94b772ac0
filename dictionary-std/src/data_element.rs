//! The run-time standard attribute dictionary.
use crate::tags::ENTRIES;
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntryRef, TagRange};
use dcmkit_core::header::Tag;
use dcmkit_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

type Entry = DataDictionaryEntryRef<'static>;

static INDEX: Lazy<StandardDataDictionaryRegistry> =
    Lazy::new(StandardDataDictionaryRegistry::build);

/// Retrieve the index behind [`StandardDataDictionary`].
///
/// Most code will want the unit type instead,
/// which implements [`DataDictionary`] on top of this index.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &INDEX
}

/// Fallback entry for any `(gggg,0000)` tag without a record of its own.
static GROUP_LENGTH: Entry = DataDictionaryEntryRef {
    tag: TagRange::GroupLength,
    alias: "GenericGroupLength",
    vr: VR::UL,
};

/// Fallback entry for private creator elements `(gggg,0010)` to `(gggg,00FF)`.
static PRIVATE_CREATOR: Entry = DataDictionaryEntryRef {
    tag: TagRange::PrivateCreator,
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// Look-up tables over the static list of attribute records.
///
/// Built once on first use and never modified afterwards.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    by_alias: HashMap<&'static str, &'static Entry>,
    /// keyed by [`TagRange::inner`],
    /// so repeating attributes sit under their zeroed tag
    by_tag: HashMap<Tag, &'static Entry>,
}

impl StandardDataDictionaryRegistry {
    fn build() -> Self {
        let mut by_alias = HashMap::with_capacity(ENTRIES.len() + 1);
        let mut by_tag = HashMap::with_capacity(ENTRIES.len());
        for entry in ENTRIES {
            by_alias.insert(entry.alias, entry);
            by_tag.insert(entry.tag.inner(), entry);
        }
        by_alias.insert(GROUP_LENGTH.alias, &GROUP_LENGTH);
        StandardDataDictionaryRegistry { by_alias, by_tag }
    }

    /// Number of attribute records in the index.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    fn lookup(&self, tag: Tag) -> Option<&'static Entry> {
        if let Some(entry) = self.by_tag.get(&tag) {
            return Some(*entry);
        }

        // repeating groups (ggxx,eeee)
        let key = Tag(tag.0 & 0xFF00, tag.1);
        match self.by_tag.get(&key) {
            Some(entry) if entry.tag == TagRange::Group100(key) => return Some(*entry),
            _ => {}
        }
        // repeating elements (gggg,eexx)
        let key = Tag(tag.0, tag.1 & 0xFF00);
        match self.by_tag.get(&key) {
            Some(entry) if entry.tag == TagRange::Element100(key) => return Some(*entry),
            _ => {}
        }

        if tag.is_group_length() {
            Some(&GROUP_LENGTH)
        } else if tag.is_private() && (0x0010..=0x00FF).contains(&tag.1) {
            Some(&PRIVATE_CREATOR)
        } else {
            None
        }
    }
}

/// The standard DICOM data element dictionary.
///
/// This is the dictionary to use whenever one is needed,
/// most notably when reading implicit VR data sets.
/// The underlying index is loaded on first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = Entry;

    fn by_name(&self, name: &str) -> Option<&Entry> {
        registry().by_alias.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Entry> {
        registry().lookup(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::{registry, StandardDataDictionary};
    use crate::tags::{self, ENTRIES};
    use dcmkit_core::dictionary::{DataDictionary, TagRange};
    use dcmkit_core::header::{Tag, VR};

    #[test]
    fn lookup_by_alias_and_tag() {
        let dict = StandardDataDictionary;

        let name = dict.by_name("PatientName").expect("PatientName is known");
        assert_eq!(name.tag, TagRange::Single(tags::PATIENT_NAME));
        assert_eq!(name.vr, VR::PN);

        let pixel_data = dict.by_tag(tags::PIXEL_DATA).expect("PixelData is known");
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VR::OW);

        assert!(!registry().is_empty());
    }

    #[test]
    fn repeating_group_resolves_to_masked_record() {
        let dict = StandardDataDictionary;
        let overlay = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("overlay data in any 60xx group");
        assert_eq!(overlay.tag, TagRange::Group100(tags::OVERLAY_DATA));
        assert_eq!(overlay.alias, "OverlayData");
        // a plain record in a masked position is not a repeating match
        assert_eq!(dict.by_tag(Tag(0x0010, 0x0011)), None);
    }

    #[test]
    fn directory_record_attributes() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_tag(tags::DIRECTORY_RECORD_SEQUENCE).map(|e| e.vr),
            Some(VR::SQ)
        );
        assert_eq!(dict.by_tag(tags::REFERENCED_FILE_ID).map(|e| e.vr), Some(VR::CS));
        assert_eq!(dict.by_tag(tags::RECORD_IN_USE_FLAG).map(|e| e.vr), Some(VR::US));
        assert_eq!(
            dict.parse_tag("DirectoryRecordType"),
            Some(tags::DIRECTORY_RECORD_TYPE)
        );
        assert_eq!(dict.parse_tag("(0004,1430)"), Some(tags::DIRECTORY_RECORD_TYPE));
    }

    #[test]
    fn standard_sequences_resolve_to_sq() {
        let dict = StandardDataDictionary;

        for tag in [
            tags::REQUEST_ATTRIBUTES_SEQUENCE,
            tags::RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE,
            tags::VOILUT_SEQUENCE,
            tags::PROCEDURE_CODE_SEQUENCE,
            tags::REFERENCED_IMAGE_SEQUENCE,
            tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE,
            tags::DIGITAL_SIGNATURES_SEQUENCE,
        ] {
            assert_eq!(dict.by_tag(tag).map(|e| e.vr), Some(VR::SQ), "{}", tag);
        }
        assert_eq!(
            dict.parse_tag("RequestAttributesSequence"),
            Some(Tag(0x0040, 0x0275))
        );
    }

    #[test]
    fn entries_are_unique_and_sorted() {
        let singles: Vec<Tag> = ENTRIES
            .iter()
            .filter_map(|e| match e.tag {
                TagRange::Single(tag) => Some(tag),
                _ => None,
            })
            .collect();
        assert!(singles.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(registry().len(), ENTRIES.len());
    }

    #[test]
    fn group_length_and_private_creator() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_tag(Tag(0x0002, 0x0000)).map(|e| e.alias),
            Some("FileMetaInformationGroupLength"),
        );
        assert_eq!(
            dict.by_tag(Tag(0x7FE0, 0x0000)).map(|e| e.tag),
            Some(TagRange::GroupLength),
        );
        assert_eq!(
            dict.by_name("GenericGroupLength").map(|e| e.vr),
            Some(VR::UL)
        );
        assert_eq!(
            dict.by_tag(Tag(0x0009, 0x0010)).map(|e| e.tag),
            Some(TagRange::PrivateCreator),
        );
        assert_eq!(dict.by_tag(Tag(0x0009, 0x1001)), None);
    }
}
