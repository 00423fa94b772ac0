//! This module provides implementations for basic encoders: little endian and big endian.

use super::BasicEncode;
use byteordered::{ByteOrdered, Endianness};
use std::io::Write;

type Result<T> = std::io::Result<T>;

/// A basic encoder of primitive elements in little endian.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LittleEndianBasicEncoder;

impl BasicEncode for LittleEndianBasicEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_u16(value)
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_u32(value)
    }
}

/// A basic encoder of primitive elements in big endian.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BigEndianBasicEncoder;

impl BasicEncode for BigEndianBasicEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Big
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_u16(value)
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_u32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_integers() {
        let mut out = Vec::new();
        LittleEndianBasicEncoder.encode_us(&mut out, 0x3CC3).unwrap();
        BigEndianBasicEncoder.encode_us(&mut out, 0x3CC3).unwrap();
        LittleEndianBasicEncoder.encode_ul(&mut out, 0x0102_0304).unwrap();
        BigEndianBasicEncoder.encode_ul(&mut out, 0x0102_0304).unwrap();
        assert_eq!(
            out,
            vec![0xC3, 0x3C, 0x3C, 0xC3, 0x04, 0x03, 0x02, 0x01, 0x01, 0x02, 0x03, 0x04]
        );
    }
}
