//! This module contains the concept of a DICOM data dictionary.
//!
//! A data dictionary maps attribute tags to their alias and
//! typical value representation, which is what decoders
//! rely on when reading implicit VR data sets.
//! The standard dictionary lives in the `dcmkit-dictionary-std` crate.

pub mod stub;

use crate::header::{Tag, VR};
use std::fmt::Debug;

pub use self::stub::StubDataDictionary;

/// Specification of a range of tags pertaining to an attribute.
/// Very often, the dictionary of attributes indicates a unique
/// group part and element part `(group,elem)`,
/// but occasionally an attribute may cover
/// a range of groups or elements instead.
/// For example,
/// _Overlay Data_ (60xx,3000) has more than one possible tag,
/// since it is part of a repeating group.
/// Moreover, a unique variant is defined for group length tags
/// and another one for private creator tags.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`,
    /// save for those which have their own single tag record.
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (GGGG,0010) to (GGGG,00FF),
    /// where `GGGG` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }
}

/// Type trait for a dictionary of DICOM attributes.
///
/// Attribute dictionaries provide the means to convert a tag to an alias
/// and vice versa, as well as a form of retrieving
/// additional information about the attribute.
///
/// The methods herein have no generic parameters, so as to enable being
/// used as a trait object.
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are usually case sensitive and not separated by spaces.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its alias or by a tag expression,
    /// such as `(0010,0010)` or `0010,0010`.
    fn by_expr(&self, expr: &str) -> Option<&Self::Entry> {
        match parse_tag_expr(expr) {
            Some(tag) => self.by_tag(tag),
            None => self.by_name(expr),
        }
    }

    /// Resolve an attribute alias or tag expression to a tag.
    fn parse_tag(&self, expr: &str) -> Option<Tag> {
        parse_tag_expr(expr).or_else(|| self.by_name(expr).map(|e| e.tag()))
    }
}

/// Parse text of the form `(GGGG,EEEE)` or `GGGG,EEEE` into a tag.
fn parse_tag_expr(expr: &str) -> Option<Tag> {
    let expr = expr
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(expr);
    let (group, elem) = expr.split_once(',')?;
    if group.len() != 4 || elem.len() != 4 {
        return None;
    }
    let group = u16::from_str_radix(group, 16).ok()?;
    let elem = u16::from_str_radix(elem, 16).ok()?;
    Some(Tag(group, elem))
}

/// The dictionary entry data type, representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// Note that this is not necessarily
    /// the original tag used as key for this entry.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The _typical_ value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_expressions() {
        assert_eq!(parse_tag_expr("(0010,0010)"), Some(Tag(0x0010, 0x0010)));
        assert_eq!(parse_tag_expr("7FE0,0010"), Some(Tag(0x7FE0, 0x0010)));
        assert_eq!(parse_tag_expr("PatientName"), None);
        assert_eq!(parse_tag_expr("10,10"), None);
        assert_eq!(parse_tag_expr("GGGG,0010"), None);
    }

    #[test]
    fn tag_range_inner() {
        assert_eq!(TagRange::Group100(Tag(0x6000, 0x3000)).inner(), Tag(0x6000, 0x3000));
        assert_eq!(TagRange::GroupLength.inner(), Tag(0x0000, 0x0000));
    }
}
