// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Colorimetry constants and the default-resolution helpers.
//!
//! A format records four colorimetry fields (colorspace, transfer function,
//! Y'CbCr encoding, quantization). Each has a `*_DEFAULT` value of 0 meaning
//! "derive from context"; the `V4L2_MAP_*_DEFAULT` helpers perform that
//! derivation the same way drivers do.

/* enum v4l2_colorspace */
/// Default colorspace, i.e. let the driver figure it out.
/// Can only be used with video capture.
pub const V4L2_COLORSPACE_DEFAULT: u32 = 0;
/// SMPTE 170M: used for broadcast NTSC/PAL SDTV.
pub const V4L2_COLORSPACE_SMPTE170M: u32 = 1;
/// Obsolete pre-1998 SMPTE 240M HDTV standard, superseded by Rec 709.
pub const V4L2_COLORSPACE_SMPTE240M: u32 = 2;
/// Rec.709: used for HDTV.
pub const V4L2_COLORSPACE_REC709: u32 = 3;
/// Deprecated, do not use. No driver will ever return this.
pub const V4L2_COLORSPACE_BT878: u32 = 4;
/// NTSC 1953 colorspace. Superseded by SMPTE 170M.
pub const V4L2_COLORSPACE_470_SYSTEM_M: u32 = 5;
/// EBU Tech 3213 PAL/SECAM colorspace. Superseded by SMPTE 170M.
pub const V4L2_COLORSPACE_470_SYSTEM_BG: u32 = 6;
/// Shorthand for SRGB, YCBCR_ENC_601 and full-range quantization.
/// To be used for (Motion-)JPEG.
pub const V4L2_COLORSPACE_JPEG: u32 = 7;
/// For RGB colorspaces such as produced by most webcams.
pub const V4L2_COLORSPACE_SRGB: u32 = 8;
/// AdobeRGB colorspace.
pub const V4L2_COLORSPACE_ADOBERGB: u32 = 9;
/// BT.2020 colorspace, used for UHDTV.
pub const V4L2_COLORSPACE_BT2020: u32 = 10;
/// Raw colorspace: for RAW unprocessed images.
pub const V4L2_COLORSPACE_RAW: u32 = 11;

/// Maps `V4L2_COLORSPACE_DEFAULT` to a proper colorspace: SMPTE 170M for
/// SDTV images, Rec. 709 for HDTV, sRGB for anything else.
pub const fn V4L2_MAP_COLORSPACE_DEFAULT(is_sdtv: bool, is_hdtv: bool) -> u32 {
    if is_sdtv {
        V4L2_COLORSPACE_SMPTE170M
    } else if is_hdtv {
        V4L2_COLORSPACE_REC709
    } else {
        V4L2_COLORSPACE_SRGB
    }
}

/* enum v4l2_xfer_func */
pub const V4L2_XFER_FUNC_DEFAULT: u32 = 0;
pub const V4L2_XFER_FUNC_709: u32 = 1;
pub const V4L2_XFER_FUNC_SRGB: u32 = 2;
pub const V4L2_XFER_FUNC_ADOBERGB: u32 = 3;
pub const V4L2_XFER_FUNC_SMPTE240M: u32 = 4;
pub const V4L2_XFER_FUNC_NONE: u32 = 5;

/// Maps `V4L2_XFER_FUNC_DEFAULT` to a proper transfer function for the
/// given colorspace.
pub const fn V4L2_MAP_XFER_FUNC_DEFAULT(colsp: u32) -> u32 {
    if colsp == V4L2_COLORSPACE_ADOBERGB {
        V4L2_XFER_FUNC_ADOBERGB
    } else if colsp == V4L2_COLORSPACE_SMPTE240M {
        V4L2_XFER_FUNC_SMPTE240M
    } else if colsp == V4L2_COLORSPACE_RAW {
        V4L2_XFER_FUNC_NONE
    } else if colsp == V4L2_COLORSPACE_SRGB || colsp == V4L2_COLORSPACE_JPEG {
        V4L2_XFER_FUNC_SRGB
    } else {
        V4L2_XFER_FUNC_709
    }
}

/* enum v4l2_ycbcr_encoding */
pub const V4L2_YCBCR_ENC_DEFAULT: u32 = 0;
/// ITU-R 601, SDTV.
pub const V4L2_YCBCR_ENC_601: u32 = 1;
/// Rec. 709, HDTV.
pub const V4L2_YCBCR_ENC_709: u32 = 2;
/// ITU-R 601/EN 61966-2-4 Extended Gamut, SDTV.
pub const V4L2_YCBCR_ENC_XV601: u32 = 3;
/// Rec. 709/EN 61966-2-4 Extended Gamut, HDTV.
pub const V4L2_YCBCR_ENC_XV709: u32 = 4;
/// sYCC (Y'CbCr encoding of sRGB).
pub const V4L2_YCBCR_ENC_SYCC: u32 = 5;
/// BT.2020 Non-constant Luminance Y'CbCr.
pub const V4L2_YCBCR_ENC_BT2020: u32 = 6;
/// BT.2020 Constant Luminance Y'CbcCrc.
pub const V4L2_YCBCR_ENC_BT2020_CONST_LUM: u32 = 7;
/// SMPTE 240M, obsolete HDTV.
pub const V4L2_YCBCR_ENC_SMPTE240M: u32 = 8;

/* enum v4l2_hsv_encoding; values must not collide with the Y'CbCr set */
/// Hue mapped to 0 - 179.
pub const V4L2_HSV_ENC_180: u32 = 128;
/// Hue mapped to 0 - 255.
pub const V4L2_HSV_ENC_256: u32 = 129;

/// Maps `V4L2_YCBCR_ENC_DEFAULT` to a proper Y'CbCr encoding for the
/// given colorspace.
pub const fn V4L2_MAP_YCBCR_ENC_DEFAULT(colsp: u32) -> u32 {
    if colsp == V4L2_COLORSPACE_REC709 {
        V4L2_YCBCR_ENC_709
    } else if colsp == V4L2_COLORSPACE_BT2020 {
        V4L2_YCBCR_ENC_BT2020
    } else if colsp == V4L2_COLORSPACE_SMPTE240M {
        V4L2_YCBCR_ENC_SMPTE240M
    } else {
        V4L2_YCBCR_ENC_601
    }
}

/* enum v4l2_quantization */
pub const V4L2_QUANTIZATION_DEFAULT: u32 = 0;
pub const V4L2_QUANTIZATION_FULL_RANGE: u32 = 1;
pub const V4L2_QUANTIZATION_LIM_RANGE: u32 = 2;

/// Maps `V4L2_QUANTIZATION_DEFAULT` to a proper quantization. R'G'B' is
/// full range except in the BT2020 colorspace; Y'CbCr is limited range
/// except for the JPEG colorspace and the XV601/XV709 encodings.
pub const fn V4L2_MAP_QUANTIZATION_DEFAULT(is_rgb: bool, colsp: u32, ycbcr_enc: u32) -> u32 {
    if is_rgb && colsp == V4L2_COLORSPACE_BT2020 {
        V4L2_QUANTIZATION_LIM_RANGE
    } else if is_rgb
        || ycbcr_enc == V4L2_YCBCR_ENC_XV601
        || ycbcr_enc == V4L2_YCBCR_ENC_XV709
        || colsp == V4L2_COLORSPACE_JPEG
    {
        V4L2_QUANTIZATION_FULL_RANGE
    } else {
        V4L2_QUANTIZATION_LIM_RANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_colorspace_default() {
        // SDTV wins over HDTV when both are set.
        assert_eq!(
            V4L2_MAP_COLORSPACE_DEFAULT(true, true),
            V4L2_COLORSPACE_SMPTE170M
        );
        assert_eq!(
            V4L2_MAP_COLORSPACE_DEFAULT(false, true),
            V4L2_COLORSPACE_REC709
        );
        assert_eq!(
            V4L2_MAP_COLORSPACE_DEFAULT(false, false),
            V4L2_COLORSPACE_SRGB
        );
    }

    #[test]
    fn test_map_xfer_func_default() {
        assert_eq!(
            V4L2_MAP_XFER_FUNC_DEFAULT(V4L2_COLORSPACE_ADOBERGB),
            V4L2_XFER_FUNC_ADOBERGB
        );
        assert_eq!(
            V4L2_MAP_XFER_FUNC_DEFAULT(V4L2_COLORSPACE_SMPTE240M),
            V4L2_XFER_FUNC_SMPTE240M
        );
        assert_eq!(
            V4L2_MAP_XFER_FUNC_DEFAULT(V4L2_COLORSPACE_RAW),
            V4L2_XFER_FUNC_NONE
        );
        assert_eq!(
            V4L2_MAP_XFER_FUNC_DEFAULT(V4L2_COLORSPACE_SRGB),
            V4L2_XFER_FUNC_SRGB
        );
        assert_eq!(
            V4L2_MAP_XFER_FUNC_DEFAULT(V4L2_COLORSPACE_JPEG),
            V4L2_XFER_FUNC_SRGB
        );
        for colsp in [
            V4L2_COLORSPACE_SMPTE170M,
            V4L2_COLORSPACE_470_SYSTEM_M,
            V4L2_COLORSPACE_470_SYSTEM_BG,
            V4L2_COLORSPACE_REC709,
            V4L2_COLORSPACE_BT2020,
        ] {
            assert_eq!(V4L2_MAP_XFER_FUNC_DEFAULT(colsp), V4L2_XFER_FUNC_709);
        }
    }

    #[test]
    fn test_map_ycbcr_enc_default() {
        assert_eq!(
            V4L2_MAP_YCBCR_ENC_DEFAULT(V4L2_COLORSPACE_REC709),
            V4L2_YCBCR_ENC_709
        );
        assert_eq!(
            V4L2_MAP_YCBCR_ENC_DEFAULT(V4L2_COLORSPACE_BT2020),
            V4L2_YCBCR_ENC_BT2020
        );
        assert_eq!(
            V4L2_MAP_YCBCR_ENC_DEFAULT(V4L2_COLORSPACE_SMPTE240M),
            V4L2_YCBCR_ENC_SMPTE240M
        );
        assert_eq!(
            V4L2_MAP_YCBCR_ENC_DEFAULT(V4L2_COLORSPACE_JPEG),
            V4L2_YCBCR_ENC_601
        );
        assert_eq!(
            V4L2_MAP_YCBCR_ENC_DEFAULT(V4L2_COLORSPACE_SRGB),
            V4L2_YCBCR_ENC_601
        );
    }

    #[test]
    fn test_map_quantization_default() {
        // BT2020 RGB is the one limited-range RGB case.
        assert_eq!(
            V4L2_MAP_QUANTIZATION_DEFAULT(true, V4L2_COLORSPACE_BT2020, V4L2_YCBCR_ENC_DEFAULT),
            V4L2_QUANTIZATION_LIM_RANGE
        );
        assert_eq!(
            V4L2_MAP_QUANTIZATION_DEFAULT(true, V4L2_COLORSPACE_SRGB, V4L2_YCBCR_ENC_DEFAULT),
            V4L2_QUANTIZATION_FULL_RANGE
        );
        assert_eq!(
            V4L2_MAP_QUANTIZATION_DEFAULT(false, V4L2_COLORSPACE_SMPTE170M, V4L2_YCBCR_ENC_XV601),
            V4L2_QUANTIZATION_FULL_RANGE
        );
        assert_eq!(
            V4L2_MAP_QUANTIZATION_DEFAULT(false, V4L2_COLORSPACE_REC709, V4L2_YCBCR_ENC_XV709),
            V4L2_QUANTIZATION_FULL_RANGE
        );
        assert_eq!(
            V4L2_MAP_QUANTIZATION_DEFAULT(false, V4L2_COLORSPACE_JPEG, V4L2_YCBCR_ENC_601),
            V4L2_QUANTIZATION_FULL_RANGE
        );
        assert_eq!(
            V4L2_MAP_QUANTIZATION_DEFAULT(false, V4L2_COLORSPACE_REC709, V4L2_YCBCR_ENC_709),
            V4L2_QUANTIZATION_LIM_RANGE
        );
    }

    #[test]
    fn test_hsv_does_not_collide_with_ycbcr() {
        assert!(V4L2_HSV_ENC_180 > V4L2_YCBCR_ENC_SMPTE240M);
        assert_eq!(V4L2_HSV_ENC_256, 129);
    }
}
