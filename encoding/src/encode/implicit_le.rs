//! Implicit VR Little Endian syntax transfer implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{write_tag_and_len, BasicEncode, Encode, Result, WriteHeaderSnafu};
use byteordered::Endianness;
use dcmkit_core::header::DataElementHeader;
use snafu::ResultExt;
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ImplicitVRLittleEndian
#[derive(Debug, Default, Clone)]
pub struct ImplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl BasicEncode for ImplicitVRLittleEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn encode_us<S>(&self, to: S, value: u16) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_us(to, value)
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_ul(to, value)
    }
}

impl Encode for ImplicitVRLittleEndianEncoder {
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        // no VR, and the length is always 32 bits wide
        write_tag_and_len(self, to, de.tag, de.len.0).context(WriteHeaderSnafu)?;
        Ok(8)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianEncoder;
    use crate::encode::Encode;
    use dcmkit_core::header::{DataElementHeader, Length};
    use dcmkit_core::{Tag, VR};

    #[test]
    fn encode_implicit_vr_headers() {
        let enc = ImplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();

        let bytes = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(10)),
            )
            .unwrap();
        assert_eq!(bytes, 8);

        #[rustfmt::skip]
        assert_eq!(&out[..], &[
            0x10, 0x00, 0x10, 0x00,
            0x0A, 0x00, 0x00, 0x00,
        ][..]);
    }
}
