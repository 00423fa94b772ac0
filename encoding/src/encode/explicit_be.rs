//! Explicit VR Big Endian syntax transfer implementation

use crate::encode::basic::BigEndianBasicEncoder;
use crate::encode::{write_explicit_header, BasicEncode, Encode, Result};
use byteordered::Endianness;
use dcmkit_core::header::DataElementHeader;
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ExplicitVRBigEndian
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianEncoder {
    basic: BigEndianBasicEncoder,
}

impl BasicEncode for ExplicitVRBigEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Big
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

impl Encode for ExplicitVRBigEndianEncoder {
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        write_explicit_header(self, to, de)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRBigEndianEncoder;
    use crate::encode::Encode;
    use dcmkit_core::header::{DataElementHeader, Length};
    use dcmkit_core::{Tag, VR};

    #[test]
    fn encode_data_elements() {
        let enc = ExplicitVRBigEndianEncoder::default();
        let mut out = Vec::new();

        enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(2)),
        )
        .unwrap();
        enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x7FE0, 0x0010), VR::OW, Length(4)),
        )
        .unwrap();
        enc.encode_item_header(&mut out, 2).unwrap();

        #[rustfmt::skip]
        assert_eq!(&out[..], &[
            0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02,
            0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0x00, 0x00, 0x00, 0x00, 0x00, 0x04,
            0xFF, 0xFE, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x02,
        ][..]);
    }
}
