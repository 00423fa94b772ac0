//! Conversion of in-memory DICOM objects into data set tokens.
//!
//! Sequences and items are given explicit lengths,
//! computed from their contents for the chosen VR explicitness.
//! The data set writer may still replace them with undefined lengths,
//! depending on its options.
//!
//! In implicit VR, a sequence which the standard dictionary
//! does not declare as SQ (such as a private sequence)
//! is always given an undefined length,
//! as that is the only way for a reader to recognize it as a sequence.
use crate::mem::{InMemDicomObject, InMemElement};
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmkit_core::header::{DataElementHeader, Header};
use dcmkit_core::value::Value;
use dcmkit_core::{Length, Tag, VR};
use dcmkit_dictionary_std::StandardDataDictionary;
use dcmkit_parser::dataset::DataToken;
use std::collections::VecDeque;

/// The size of an element header in bytes.
fn header_len(vr: VR, explicit_vr: bool) -> u32 {
    if explicit_vr && (vr.has_32bit_length() || vr == VR::SQ) {
        12
    } else {
        8
    }
}

/// Whether the sequence element with this tag
/// must be written with undefined length.
fn needs_undefined_length(tag: Tag, explicit_vr: bool) -> bool {
    !explicit_vr
        && StandardDataDictionary
            .by_tag(tag)
            .map_or(true, |entry| entry.vr() != VR::SQ)
}

#[inline]
fn even(len: usize) -> u32 {
    let len = len as u32;
    len + (len & 1)
}

/// The number of bytes that the given data set takes up when encoded
/// with explicit sequence and item lengths.
pub fn encoded_object_len(obj: &InMemDicomObject, explicit_vr: bool) -> u32 {
    obj.iter()
        .map(|elem| encoded_element_len(elem, explicit_vr))
        .sum()
}

/// The number of bytes that the given element takes up when encoded
/// with explicit sequence and item lengths,
/// including its header.
pub fn encoded_element_len(elem: &InMemElement, explicit_vr: bool) -> u32 {
    match elem.value() {
        Value::Primitive(v) => header_len(elem.vr(), explicit_vr) + even(v.len()),
        Value::Sequence { items, .. } => {
            // plus the sequence delimitation item if needed
            let delimiter = if needs_undefined_length(elem.tag(), explicit_vr) {
                8
            } else {
                0
            };
            header_len(VR::SQ, explicit_vr) + sequence_value_len(items, explicit_vr) + delimiter
        }
        Value::PixelSequence {
            offset_table,
            fragments,
        } => {
            // header, offset table item, fragment items, sequence delimiter
            header_len(VR::OB, explicit_vr)
                + 8
                + 4 * offset_table.len() as u32
                + fragments.iter().map(|f| 8 + even(f.len())).sum::<u32>()
                + 8
        }
    }
}

fn sequence_value_len(items: &[InMemDicomObject], explicit_vr: bool) -> u32 {
    items
        .iter()
        .map(|item| 8 + encoded_object_len(item, explicit_vr))
        .sum()
}

/// Append the tokens of a single element to the queue.
fn push_element_tokens(elem: &InMemElement, explicit_vr: bool, out: &mut VecDeque<DataToken>) {
    match elem.value() {
        Value::Primitive(v) => {
            out.push_back(DataToken::ElementHeader(DataElementHeader::new(
                elem.tag(),
                elem.vr(),
                Length(v.len() as u32),
            )));
            out.push_back(DataToken::PrimitiveValue(v.clone()));
        }
        Value::Sequence { items, .. } => {
            let len = if needs_undefined_length(elem.tag(), explicit_vr) {
                Length::UNDEFINED
            } else {
                Length(sequence_value_len(items, explicit_vr))
            };
            out.push_back(DataToken::SequenceStart {
                tag: elem.tag(),
                len,
            });
            for item in items {
                out.push_back(DataToken::ItemStart {
                    len: Length(encoded_object_len(item, explicit_vr)),
                });
                for elem in item.iter() {
                    push_element_tokens(elem, explicit_vr, out);
                }
                out.push_back(DataToken::ItemEnd);
            }
            out.push_back(DataToken::SequenceEnd);
        }
        Value::PixelSequence {
            offset_table,
            fragments,
        } => {
            out.push_back(DataToken::PixelSequenceStart);
            out.push_back(DataToken::ItemStart {
                len: Length(4 * offset_table.len() as u32),
            });
            out.push_back(DataToken::OffsetTable(offset_table.to_vec()));
            out.push_back(DataToken::ItemEnd);
            for fragment in fragments {
                out.push_back(DataToken::ItemStart {
                    len: Length(even(fragment.len())),
                });
                out.push_back(DataToken::ItemValue(fragment.clone()));
                out.push_back(DataToken::ItemEnd);
            }
            out.push_back(DataToken::SequenceEnd);
        }
    }
}

/// A stream of tokens from a DICOM object.
#[derive(Debug)]
pub struct InMemObjectTokens<'a, E> {
    /// tokens of the current element still to be emitted
    tokens_pending: VecDeque<DataToken>,
    /// the iterator of data elements in order.
    elem_iter: E,
    explicit_vr: bool,
    _marker: std::marker::PhantomData<&'a InMemElement>,
}

impl<'a, E> InMemObjectTokens<'a, E>
where
    E: Iterator<Item = &'a InMemElement>,
{
    pub fn new<T>(obj: T, explicit_vr: bool) -> Self
    where
        T: IntoIterator<IntoIter = E, Item = E::Item>,
    {
        InMemObjectTokens {
            tokens_pending: VecDeque::new(),
            elem_iter: obj.into_iter(),
            explicit_vr,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'a, E> Iterator for InMemObjectTokens<'a, E>
where
    E: Iterator<Item = &'a InMemElement>,
{
    type Item = DataToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.tokens_pending.pop_front() {
                return Some(token);
            }
            // expand the next element
            let elem = self.elem_iter.next()?;
            push_element_tokens(elem, self.explicit_vr, &mut self.tokens_pending);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // at least 2 tokens per element left
        (
            self.tokens_pending.len() + self.elem_iter.size_hint().0 * 2,
            None,
        )
    }
}
