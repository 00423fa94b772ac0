//! UID declarations
//!
//! Normative unique identifiers for the transfer syntaxes
//! and SOP classes that the toolkit refers to by value.
//! Values are unpadded.

// transfer syntaxes

/// Implicit VR Little Endian, the default transfer syntax
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Explicit VR Little Endian with pixel data in encapsulated, uncompressed fragments
pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.98";
/// Explicit VR Little Endian compressed with deflate
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Explicit VR Big Endian (retired)
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// JPEG Baseline, process 1
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// JPEG Extended, processes 2 and 4
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// JPEG Lossless, process 14
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// JPEG Lossless, process 14 with first-order prediction
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// JPEG-LS Lossless
pub const JPEGLS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// JPEG-LS Near-Lossless
pub const JPEGLS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// JPEG 2000, lossless only
pub const JPEG2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// JPEG 2000
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// JPEG 2000 Part 2 multi-component, lossless only
pub const JPEG2000MC_LOSSLESS: &str = "1.2.840.10008.1.2.4.92";
/// JPEG 2000 Part 2 multi-component
pub const JPEG2000MC: &str = "1.2.840.10008.1.2.4.93";
/// RLE Lossless
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";

// SOP classes

/// Verification
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// Media Storage Directory Storage, the SOP class of DICOMDIR files
pub const MEDIA_STORAGE_DIRECTORY_STORAGE: &str = "1.2.840.10008.1.3.10";
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
pub const GRAYSCALE_SOFTCOPY_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.1";
pub const RT_DOSE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.2";
pub const BASIC_TEXT_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.11";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_syntaxes_share_the_dicom_root() {
        for uid in [
            IMPLICIT_VR_LITTLE_ENDIAN,
            EXPLICIT_VR_LITTLE_ENDIAN,
            DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
            EXPLICIT_VR_BIG_ENDIAN,
            RLE_LOSSLESS,
        ] {
            assert!(uid.starts_with("1.2.840.10008.1.2"));
            assert!(uid.len() <= 64);
        }
    }
}
