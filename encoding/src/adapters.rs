//! Interface to external pixel data codecs.
//!
//! This crate does not decompress or compress imaging data.
//! Transfer syntax conversion which needs to change the
//! encapsulation of the _Pixel Data_ element
//! relies on an implementation of [`PixelDataCodec`]
//! provided by the caller.

use snafu::Snafu;
use std::fmt;

/// The possible error conditions of a pixel data codec.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum PixelCodecError {
    /// A custom error occurred in the codec,
    /// reported as a dynamic error value with a message.
    ///
    /// The [`whatever!`](snafu::whatever) macro can be used
    /// to easily create an error of this kind.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The codec does not handle the given transfer syntax.
    #[snafu(display("Transfer syntax `{}` is not supported by this codec", ts_uid))]
    UnsupportedTransferSyntax { ts_uid: String },

    /// A required attribute is missing
    /// from the DICOM object representing the image.
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingAttribute { name: &'static str },
}

/// The result of a pixel data codec operation
pub type CodecResult<T, E = PixelCodecError> = Result<T, E>;

/// Image properties needed to interpret a _Pixel Data_ value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelDataInfo {
    /// Rows (0028,0010)
    pub rows: u16,
    /// Columns (0028,0011)
    pub columns: u16,
    /// Samples per Pixel (0028,0002)
    pub samples_per_pixel: u16,
    /// Bits Allocated (0028,0100)
    pub bits_allocated: u16,
    /// Number of Frames (0028,0008), 1 if absent
    pub number_of_frames: u32,
}

impl PixelDataInfo {
    /// The number of bytes of a single native frame.
    pub fn frame_size(&self) -> usize {
        usize::from(self.rows)
            * usize::from(self.columns)
            * usize::from(self.samples_per_pixel)
            * ((usize::from(self.bits_allocated) + 7) / 8)
    }
}

/// A provider of pixel data decompression and compression.
///
/// Native pixel data exchanged with the codec is a flat byte buffer
/// with all frames back to back, multi-byte samples in little endian.
pub trait PixelDataCodec: fmt::Debug {
    /// Decompress the fragments of an encapsulated _Pixel Data_ element
    /// encoded in the transfer syntax `ts_uid`.
    fn decompress(
        &self,
        ts_uid: &str,
        info: &PixelDataInfo,
        fragments: &[Vec<u8>],
    ) -> CodecResult<Vec<u8>>;

    /// Compress native pixel data into the encapsulated form
    /// of the transfer syntax `ts_uid`.
    /// Returns the fragments, typically one per frame.
    fn compress(
        &self,
        ts_uid: &str,
        info: &PixelDataInfo,
        native: &[u8],
    ) -> CodecResult<Vec<Vec<u8>>>;
}

impl<T: ?Sized> PixelDataCodec for &T
where
    T: PixelDataCodec,
{
    fn decompress(
        &self,
        ts_uid: &str,
        info: &PixelDataInfo,
        fragments: &[Vec<u8>],
    ) -> CodecResult<Vec<u8>> {
        (**self).decompress(ts_uid, info, fragments)
    }

    fn compress(
        &self,
        ts_uid: &str,
        info: &PixelDataInfo,
        native: &[u8],
    ) -> CodecResult<Vec<Vec<u8>>> {
        (**self).compress(ts_uid, info, native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_rounds_bits_up() {
        let info = PixelDataInfo {
            rows: 4,
            columns: 3,
            samples_per_pixel: 3,
            bits_allocated: 8,
            number_of_frames: 2,
        };
        assert_eq!(info.frame_size(), 36);

        let info = PixelDataInfo {
            bits_allocated: 12,
            samples_per_pixel: 1,
            ..info
        };
        assert_eq!(info.frame_size(), 24);
    }

    #[test]
    fn whatever_errors_carry_message() {
        fn fail() -> CodecResult<()> {
            snafu::whatever!("bad marker at {}", 12)
        }
        let err = fail().unwrap_err();
        assert_eq!(err.to_string(), "bad marker at 12");
    }
}
