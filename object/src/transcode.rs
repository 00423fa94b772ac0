//! Conversion of DICOM file objects between transfer syntaxes.
//!
//! The main data set is kept as is:
//! re-encoding into the target transfer syntax happens when the
//! object is written.
//! Only the file meta group and, when required,
//! the _Pixel Data_ element are replaced.
//!
//! Changing the encapsulation of pixel data
//! (decompressing or compressing it)
//! is not done by this crate.
//! It is delegated to a [`PixelDataCodec`] given in [`ConvertOptions`],
//! with the exception of
//! _Encapsulated Uncompressed Explicit VR Little Endian_,
//! which is handled natively.
use dcmkit_core::value::{PrimitiveValue, Value, C};
use dcmkit_core::{DataElement, Tag, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::adapters::{CodecResult, PixelCodecError, PixelDataCodec, PixelDataInfo};
use dcmkit_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use dcmkit_transfer_syntax_registry::entries::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN;
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{OptionExt, ResultExt, Snafu};

use crate::file::FileDicomObject;
use crate::mem::{InMemDicomObject, InMemFragment};
use crate::meta::{self, FileMetaTableBuilder};

/// Encapsulated Pixel Data Value Total Length
const ENCAPSULATED_PIXEL_DATA_TOTAL_LENGTH: Tag = Tag(0x7FE0, 0x0003);

/// An error occurred during the object transcoding process.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Unrecognized transfer syntax of the receiving object
    #[snafu(display("Unknown source transfer syntax `{}`", uid))]
    UnknownSrcTransferSyntax { uid: String },

    /// The target transfer syntax cannot be used for writing data sets
    #[snafu(display("Unsupported target transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String },

    /// Pixel data would need to be decompressed or compressed,
    /// but no codec is available for it
    #[snafu(display(
        "Cannot convert pixel data from `{}` to `{}` without a pixel data codec",
        from,
        to
    ))]
    UnsupportedPixelConversion { from: String, to: String },

    /// The pixel data codec failed
    #[snafu(display("Pixel data codec failed"))]
    PixelCodec { source: PixelCodecError },

    /// An image attribute needed to interpret the pixel data
    /// is missing or cannot be read
    #[snafu(display("Missing or invalid attribute `{}`", name))]
    MissingPixelAttribute { name: &'static str },

    /// _Pixel Data_ is not in the form declared by the source transfer syntax
    #[snafu(display("Pixel Data is not {}", expected))]
    UnexpectedPixelData { expected: &'static str },

    /// Could not rebuild the file meta group
    #[snafu(display("Could not build file meta group"))]
    BuildMeta { source: meta::Error },
}

/// Alias for the result of transcoding a DICOM object.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Options for converting an object to another transfer syntax.
#[derive(Debug, Default, Copy, Clone)]
pub struct ConvertOptions<'a> {
    /// The codec to use when pixel data needs to be
    /// decompressed or compressed.
    pub codec: Option<&'a dyn PixelDataCodec>,
}

impl<'a> ConvertOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given pixel data codec.
    pub fn codec(mut self, codec: &'a dyn PixelDataCodec) -> Self {
        self.codec = Some(codec);
        self
    }
}

/// Interface for converting a DICOM file object
/// to comply with a different transfer syntax.
pub trait Transcode: Sized {
    /// Produce a copy of the receiving object
    /// for the transfer syntax `ts`,
    /// with a new file meta group.
    ///
    /// Fails if pixel data would need to be decompressed or compressed.
    fn transcode(&self, ts: &TransferSyntax) -> Result<Self> {
        self.transcode_with(ts, &ConvertOptions::default())
    }

    /// Produce a copy of the receiving object
    /// for the transfer syntax `ts`,
    /// with a new file meta group,
    /// using the given options.
    fn transcode_with(&self, ts: &TransferSyntax, options: &ConvertOptions<'_>) -> Result<Self>;
}

impl Transcode for FileDicomObject<InMemDicomObject> {
    fn transcode_with(&self, ts: &TransferSyntax, options: &ConvertOptions<'_>) -> Result<Self> {
        let src_uid = self.meta().transfer_syntax();
        let src_ts = TransferSyntaxRegistry
            .get(src_uid)
            .context(UnknownSrcTransferSyntaxSnafu { uid: src_uid })?;
        if !ts.fully_supported() {
            return UnsupportedTransferSyntaxSnafu { uid: ts.uid() }.fail();
        }

        let mut obj = (**self).clone();

        if obj.element_opt(tags::PIXEL_DATA).is_some() {
            match (
                src_ts.is_encapsulated_pixel_data(),
                ts.is_encapsulated_pixel_data(),
            ) {
                (false, false) => {}
                (true, true) if src_ts.uid() == ts.uid() => {}
                (true, false) => {
                    let decoder = codec_for(src_ts, ts, src_ts, options)?;
                    decapsulate(&mut obj, src_ts.uid(), decoder)?;
                }
                (false, true) => {
                    let encoder = codec_for(src_ts, ts, ts, options)?;
                    encapsulate(&mut obj, ts.uid(), encoder)?;
                }
                (true, true) => {
                    let decoder = codec_for(src_ts, ts, src_ts, options)?;
                    let encoder = codec_for(src_ts, ts, ts, options)?;
                    decapsulate(&mut obj, src_ts.uid(), decoder)?;
                    encapsulate(&mut obj, ts.uid(), encoder)?;
                }
            }
        }

        let meta = rebuild_meta(self, &obj, ts)?;
        tracing::debug!(
            "Converted object from {} to {}",
            src_ts.name(),
            ts.name()
        );

        let mut out = FileDicomObject::new(meta, obj);
        out.set_preamble(self.preamble().copied());
        Ok(out)
    }
}

/// Build a fresh file meta group for the converted object.
fn rebuild_meta(
    src: &FileDicomObject<InMemDicomObject>,
    obj: &InMemDicomObject,
    ts: &TransferSyntax,
) -> Result<meta::FileMetaTable> {
    let sop_class_uid = obj
        .string_value(tags::SOP_CLASS_UID)
        .unwrap_or_else(|| src.meta().media_storage_sop_class_uid().to_string());
    let sop_instance_uid = obj
        .string_value(tags::SOP_INSTANCE_UID)
        .unwrap_or_else(|| src.meta().media_storage_sop_instance_uid().to_string());

    FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(sop_class_uid)
        .media_storage_sop_instance_uid(sop_instance_uid)
        .transfer_syntax(ts.uid())
        .build()
        .context(BuildMetaSnafu)
}

/// Pick the codec for the encapsulated side `side` of a conversion.
fn codec_for<'a>(
    from: &TransferSyntax,
    to: &TransferSyntax,
    side: &TransferSyntax,
    options: &ConvertOptions<'a>,
) -> Result<&'a dyn PixelDataCodec> {
    if side.uid() == ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN.uid() {
        return Ok(&EncapsulatedUncompressed);
    }
    options.codec.context(UnsupportedPixelConversionSnafu {
        from: from.uid(),
        to: to.uid(),
    })
}

/// Read the image properties of the object.
fn pixel_data_info(obj: &InMemDicomObject) -> Result<PixelDataInfo> {
    let u16_of = |tag: Tag, name: &'static str| {
        obj.element_opt(tag)
            .and_then(|e| e.to_u16().ok())
            .context(MissingPixelAttributeSnafu { name })
    };
    let number_of_frames = match obj.element_opt(tags::NUMBER_OF_FRAMES) {
        Some(e) => e
            .to_str()
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .context(MissingPixelAttributeSnafu {
                name: "NumberOfFrames",
            })?,
        None => 1,
    };

    Ok(PixelDataInfo {
        rows: u16_of(tags::ROWS, "Rows")?,
        columns: u16_of(tags::COLUMNS, "Columns")?,
        samples_per_pixel: u16_of(tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")?,
        bits_allocated: u16_of(tags::BITS_ALLOCATED, "BitsAllocated")?,
        number_of_frames,
    })
}

/// Replace encapsulated pixel data with its native form.
fn decapsulate(
    obj: &mut InMemDicomObject,
    ts_uid: &str,
    codec: &dyn PixelDataCodec,
) -> Result<()> {
    let info = pixel_data_info(obj)?;
    let native = {
        let fragments = obj
            .element_opt(tags::PIXEL_DATA)
            .and_then(|e| e.fragments())
            .context(UnexpectedPixelDataSnafu {
                expected: "encapsulated",
            })?;
        codec
            .decompress(ts_uid, &info, fragments)
            .context(PixelCodecSnafu)?
    };

    let vr = if info.bits_allocated > 8 { VR::OW } else { VR::OB };
    obj.put(DataElement::new(
        tags::PIXEL_DATA,
        vr,
        PrimitiveValue::from(native),
    ));
    obj.remove_element(ENCAPSULATED_PIXEL_DATA_TOTAL_LENGTH);
    Ok(())
}

/// Replace native pixel data with its encapsulated form.
fn encapsulate(
    obj: &mut InMemDicomObject,
    ts_uid: &str,
    codec: &dyn PixelDataCodec,
) -> Result<()> {
    let info = pixel_data_info(obj)?;
    let fragments = {
        let native = obj
            .element_opt(tags::PIXEL_DATA)
            .and_then(|e| e.value().primitive())
            .context(UnexpectedPixelDataSnafu { expected: "native" })?;
        codec
            .compress(ts_uid, &info, native.as_bytes())
            .context(PixelCodecSnafu)?
    };

    // one fragment per frame allows for a basic offset table
    let one_per_frame = fragments.len() as u32 == info.number_of_frames;
    let offset_table: C<u32> = if one_per_frame && fragments.len() > 1 {
        fragments
            .iter()
            .scan(0u32, |offset, fragment| {
                let current = *offset;
                *offset += 8 + even_len(fragment);
                Some(current)
            })
            .collect()
    } else {
        C::new()
    };

    let total_len: u64 = fragments.iter().map(|f| u64::from(even_len(f))).sum();
    let frames = fragments.len();
    obj.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OB,
        Value::new_pixel_sequence(offset_table, fragments),
    ));

    if obj.element_opt(ENCAPSULATED_PIXEL_DATA_TOTAL_LENGTH).is_some() {
        obj.put(DataElement::new(
            ENCAPSULATED_PIXEL_DATA_TOTAL_LENGTH,
            VR::UV,
            PrimitiveValue::from(total_len.to_le_bytes().to_vec()),
        ));
    }
    if obj.element_opt(tags::NUMBER_OF_FRAMES).is_some() || info.number_of_frames > 1 {
        obj.put(DataElement::new(
            tags::NUMBER_OF_FRAMES,
            VR::IS,
            PrimitiveValue::from(info.number_of_frames.to_string()),
        ));
    }
    tracing::debug!("Encapsulated pixel data into {} fragment(s)", frames);
    Ok(())
}

fn even_len(fragment: &[u8]) -> u32 {
    let len = fragment.len() as u32;
    len + (len & 1)
}

/// Frames stored as is, one fragment per frame.
#[derive(Debug)]
struct EncapsulatedUncompressed;

impl PixelDataCodec for EncapsulatedUncompressed {
    fn decompress(
        &self,
        _ts_uid: &str,
        info: &PixelDataInfo,
        fragments: &[InMemFragment],
    ) -> CodecResult<Vec<u8>> {
        let frame_size = info.frame_size();
        let mut native = Vec::with_capacity(frame_size * info.number_of_frames as usize);
        for fragment in fragments {
            // drop the padding byte of odd-sized frames
            let len = fragment.len().min(frame_size);
            native.extend_from_slice(&fragment[..len]);
        }
        Ok(native)
    }

    fn compress(
        &self,
        _ts_uid: &str,
        info: &PixelDataInfo,
        native: &[u8],
    ) -> CodecResult<Vec<Vec<u8>>> {
        let frame_size = info.frame_size();
        if frame_size == 0 {
            return Ok(vec![native.to_vec()]);
        }
        Ok(native.chunks(frame_size).map(<[u8]>::to_vec).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem::InMemElement;
    use crate::meta::FileMetaTable;
    use dcmkit_dictionary_std::uids;
    use dcmkit_encoding::adapters::pixel_codec_error::UnsupportedTransferSyntaxSnafu as CodecUnsupportedSnafu;
    use dcmkit_transfer_syntax_registry::entries::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
        JPEG_BASELINE, RLE_LOSSLESS,
    };
    use smallvec::smallvec;

    fn meta_with_ts(ts: &str) -> FileMetaTable {
        FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("2.25.100")
            .transfer_syntax(ts)
            .source_application_entity_title("SRC")
            .build()
            .unwrap()
    }

    fn image(pixel_data: InMemElement) -> InMemDicomObject {
        InMemDicomObject::from_element_iter(vec![
            DataElement::new(tags::SOP_CLASS_UID, VR::UI, uids::SECONDARY_CAPTURE_IMAGE_STORAGE),
            DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "2.25.555"),
            DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"),
            DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from_u16s(&[1])),
            DataElement::new(tags::NUMBER_OF_FRAMES, VR::IS, "2 "),
            DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from_u16s(&[2])),
            DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from_u16s(&[2])),
            DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from_u16s(&[8])),
            pixel_data,
        ])
    }

    fn native_pixels() -> InMemElement {
        DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::from(vec![1, 2, 3, 4, 5, 6, 7, 8]),
        )
    }

    fn encapsulated_pixels() -> InMemElement {
        DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            Value::new_pixel_sequence(smallvec![], vec![vec![0xFF, 0xD8, 0xFF, 0xD9]]),
        )
    }

    /// A fake codec which "compresses" by reversing bytes.
    #[derive(Debug)]
    struct Reverse;

    impl PixelDataCodec for Reverse {
        fn decompress(
            &self,
            ts_uid: &str,
            _info: &PixelDataInfo,
            fragments: &[Vec<u8>],
        ) -> CodecResult<Vec<u8>> {
            if ts_uid != RLE_LOSSLESS.uid() {
                return CodecUnsupportedSnafu { ts_uid }.fail();
            }
            Ok(fragments.iter().flat_map(|f| f.iter().rev().copied()).collect())
        }

        fn compress(
            &self,
            ts_uid: &str,
            info: &PixelDataInfo,
            native: &[u8],
        ) -> CodecResult<Vec<Vec<u8>>> {
            if ts_uid != RLE_LOSSLESS.uid() {
                return CodecUnsupportedSnafu { ts_uid }.fail();
            }
            Ok(native
                .chunks(info.frame_size())
                .map(|c| c.iter().rev().copied().collect())
                .collect())
        }
    }

    #[test]
    fn native_to_native_keeps_data_set() {
        let obj = FileDicomObject::new(
            meta_with_ts(uids::IMPLICIT_VR_LITTLE_ENDIAN),
            image(native_pixels()),
        );

        let out = obj.transcode(&EXPLICIT_VR_BIG_ENDIAN).unwrap();
        assert_eq!(out.meta().transfer_syntax(), uids::EXPLICIT_VR_BIG_ENDIAN);
        assert_eq!(&*out, &*obj);
        // meta group rebuilt from scratch
        assert_eq!(out.meta().source_application_entity_title, None);
        assert_eq!(out.meta().media_storage_sop_instance_uid(), "2.25.555");
        assert_eq!(
            out.meta().implementation_class_uid(),
            crate::IMPLEMENTATION_CLASS_UID
        );
    }

    #[test]
    fn sop_uids_fall_back_to_previous_meta() {
        let obj = FileDicomObject::new(
            meta_with_ts(uids::EXPLICIT_VR_LITTLE_ENDIAN),
            InMemDicomObject::from_element_iter(vec![DataElement::new(
                tags::PATIENT_NAME,
                VR::PN,
                "Doe^John",
            )]),
        );

        let out = obj.transcode(&IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            out.meta().media_storage_sop_class_uid(),
            "1.2.840.10008.5.1.4.1.1.7"
        );
        assert_eq!(out.meta().media_storage_sop_instance_uid(), "2.25.100");
    }

    #[test]
    fn same_encapsulated_syntax_passes_through() {
        let obj = FileDicomObject::new(
            meta_with_ts(JPEG_BASELINE.uid()),
            image(encapsulated_pixels()),
        );
        let out = obj.transcode(&JPEG_BASELINE).unwrap();
        assert_eq!(&*out, &*obj);
    }

    #[test]
    fn pixel_conversion_without_codec_fails() {
        let obj = FileDicomObject::new(
            meta_with_ts(JPEG_BASELINE.uid()),
            image(encapsulated_pixels()),
        );
        let err = obj.transcode(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedPixelConversion { ref from, ref to }
                if from == JPEG_BASELINE.uid() && to == EXPLICIT_VR_LITTLE_ENDIAN.uid()
        ));
    }

    #[test]
    fn objects_without_pixel_data_convert_freely() {
        let obj = FileDicomObject::new(
            meta_with_ts(JPEG_BASELINE.uid()),
            InMemDicomObject::from_element_iter(vec![DataElement::new(
                tags::PATIENT_NAME,
                VR::PN,
                "Doe^John",
            )]),
        );
        let out = obj.transcode(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(out.meta().transfer_syntax(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
    }

    #[test]
    fn encapsulated_uncompressed_round_trip() {
        let obj = FileDicomObject::new(
            meta_with_ts(uids::EXPLICIT_VR_LITTLE_ENDIAN),
            image(native_pixels()),
        );

        let encapsulated = obj
            .transcode(&ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN)
            .unwrap();
        let pixel_data = encapsulated.element(tags::PIXEL_DATA).unwrap();
        assert_eq!(
            pixel_data.fragments().unwrap(),
            &[vec![1, 2, 3, 4], vec![5, 6, 7, 8]][..]
        );
        assert_eq!(pixel_data.offset_table().unwrap().as_slice(), &[0, 12]);
        assert_eq!(
            encapsulated.element(tags::NUMBER_OF_FRAMES).unwrap().to_str().unwrap(),
            "2"
        );

        let native = encapsulated.transcode(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        let pixel_data = native.element(tags::PIXEL_DATA).unwrap();
        assert_eq!(pixel_data.vr(), VR::OB);
        assert_eq!(
            pixel_data.value().primitive().unwrap().as_bytes(),
            &[1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn codec_is_used_both_ways() {
        let obj = FileDicomObject::new(
            meta_with_ts(uids::EXPLICIT_VR_LITTLE_ENDIAN),
            image(native_pixels()),
        );
        let options = ConvertOptions::new().codec(&Reverse);

        let compressed = obj.transcode_with(&RLE_LOSSLESS, &options).unwrap();
        assert_eq!(compressed.meta().transfer_syntax(), RLE_LOSSLESS.uid());
        assert_eq!(
            compressed.element(tags::PIXEL_DATA).unwrap().fragments().unwrap(),
            &[vec![4, 3, 2, 1], vec![8, 7, 6, 5]][..]
        );

        let restored = compressed
            .transcode_with(&IMPLICIT_VR_LITTLE_ENDIAN, &options)
            .unwrap();
        assert_eq!(
            restored
                .element(tags::PIXEL_DATA)
                .unwrap()
                .value()
                .primitive()
                .unwrap()
                .as_bytes(),
            &[1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn codec_errors_are_reported() {
        let obj = FileDicomObject::new(
            meta_with_ts(uids::EXPLICIT_VR_LITTLE_ENDIAN),
            image(native_pixels()),
        );
        let options = ConvertOptions::new().codec(&Reverse);
        let err = obj.transcode_with(&JPEG_BASELINE, &options).unwrap_err();
        assert!(matches!(err, Error::PixelCodec { .. }));
    }

    #[test]
    fn missing_image_attributes() {
        let mut img = image(native_pixels());
        img.remove_element(tags::ROWS);
        let obj = FileDicomObject::new(meta_with_ts(uids::EXPLICIT_VR_LITTLE_ENDIAN), img);
        let err = obj
            .transcode_with(&RLE_LOSSLESS, &ConvertOptions::new().codec(&Reverse))
            .unwrap_err();
        assert!(matches!(err, Error::MissingPixelAttribute { name: "Rows" }));
    }
}
