//! Explicit VR Big Endian syntax transfer implementation

use crate::decode::basic::BigEndianBasicDecoder;
use crate::decode::{
    read_explicit_header, read_item_header, BasicDecode, Decode, ReadTagSnafu, Result,
};
use dcmkit_core::header::{DataElementHeader, SequenceItemHeader};
use dcmkit_core::Tag;
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR Big Endian transfer syntax.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianDecoder {
    basic: BigEndianBasicDecoder,
}

impl Decode for ExplicitVRBigEndianDecoder {
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        read_explicit_header(&self.basic, source)
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        read_item_header(&self.basic, source)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }
}

impl_decode_from!(impl for ExplicitVRBigEndianDecoder);
