// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Single-planar image format, pixel-format FOURCC codes, and the format,
//! frame-size, and frame-interval enumeration records.
//!
//! FOURCC codes are grouped the way the V4L2 documentation groups them. The
//! comment after each code gives the bit depth and a short description where
//! the format has one.

use crate::fourcc::{v4l2_fourcc, v4l2_fourcc_be};
use crate::types::v4l2_fract;
use static_assertions::const_assert_eq;

/// Single-planar image format.
///
/// `ycbcr_enc`/`hsv_enc` overlay each other: which one applies depends on
/// whether `pixelformat` names a Y'CbCr or an HSV format. The extended
/// colorimetry fields (`flags` onward) are only valid when `priv` holds
/// [`V4L2_PIX_FMT_PRIV_MAGIC`].
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_pix_format {
    pub width: u32,
    pub height: u32,
    pub pixelformat: u32,
    /// enum v4l2_field
    pub field: u32,
    /// For padding, zero if unused.
    pub bytesperline: u32,
    pub sizeimage: u32,
    /// enum v4l2_colorspace
    pub colorspace: u32,
    /// Private data, depends on pixelformat.
    pub priv_: u32,
    /// Format flags (V4L2_PIX_FMT_FLAG_*).
    pub flags: u32,
    pub enc: v4l2_pix_format_enc,
    /// enum v4l2_quantization
    pub quantization: u32,
    /// enum v4l2_xfer_func
    pub xfer_func: u32,
}

/// Encoding field of [`v4l2_pix_format`]: Y'CbCr or HSV depending on the
/// pixel format.
#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_pix_format_enc {
    /// enum v4l2_ycbcr_encoding
    pub ycbcr_enc: u32,
    /// enum v4l2_hsv_encoding
    pub hsv_enc: u32,
}

crate::impl_zeroed!(v4l2_pix_format, v4l2_pix_format_enc);

const_assert_eq!(core::mem::size_of::<v4l2_pix_format>(), 48);

/* RGB formats */
pub const V4L2_PIX_FMT_RGB332: u32 = v4l2_fourcc(b'R', b'G', b'B', b'1'); /*  8  RGB-3-3-2 */
pub const V4L2_PIX_FMT_RGB444: u32 = v4l2_fourcc(b'R', b'4', b'4', b'4'); /* 16  xxxxrrrr ggggbbbb */
pub const V4L2_PIX_FMT_ARGB444: u32 = v4l2_fourcc(b'A', b'R', b'1', b'2'); /* 16  aaaarrrr ggggbbbb */
pub const V4L2_PIX_FMT_XRGB444: u32 = v4l2_fourcc(b'X', b'R', b'1', b'2'); /* 16  xxxxrrrr ggggbbbb */
pub const V4L2_PIX_FMT_RGB555: u32 = v4l2_fourcc(b'R', b'G', b'B', b'O'); /* 16  RGB-5-5-5 */
pub const V4L2_PIX_FMT_ARGB555: u32 = v4l2_fourcc(b'A', b'R', b'1', b'5'); /* 16  ARGB-1-5-5-5 */
pub const V4L2_PIX_FMT_XRGB555: u32 = v4l2_fourcc(b'X', b'R', b'1', b'5'); /* 16  XRGB-1-5-5-5 */
pub const V4L2_PIX_FMT_RGB565: u32 = v4l2_fourcc(b'R', b'G', b'B', b'P'); /* 16  RGB-5-6-5 */
pub const V4L2_PIX_FMT_RGB555X: u32 = v4l2_fourcc(b'R', b'G', b'B', b'Q'); /* 16  RGB-5-5-5 BE */
pub const V4L2_PIX_FMT_ARGB555X: u32 = v4l2_fourcc_be(b'A', b'R', b'1', b'5'); /* 16  ARGB-5-5-5 BE */
pub const V4L2_PIX_FMT_XRGB555X: u32 = v4l2_fourcc_be(b'X', b'R', b'1', b'5'); /* 16  XRGB-5-5-5 BE */
pub const V4L2_PIX_FMT_RGB565X: u32 = v4l2_fourcc(b'R', b'G', b'B', b'R'); /* 16  RGB-5-6-5 BE */
pub const V4L2_PIX_FMT_BGR666: u32 = v4l2_fourcc(b'B', b'G', b'R', b'H'); /* 18  BGR-6-6-6 */
pub const V4L2_PIX_FMT_BGR24: u32 = v4l2_fourcc(b'B', b'G', b'R', b'3'); /* 24  BGR-8-8-8 */
pub const V4L2_PIX_FMT_RGB24: u32 = v4l2_fourcc(b'R', b'G', b'B', b'3'); /* 24  RGB-8-8-8 */
pub const V4L2_PIX_FMT_BGR32: u32 = v4l2_fourcc(b'B', b'G', b'R', b'4'); /* 32  BGR-8-8-8-8 */
pub const V4L2_PIX_FMT_ABGR32: u32 = v4l2_fourcc(b'A', b'R', b'2', b'4'); /* 32  BGRA-8-8-8-8 */
pub const V4L2_PIX_FMT_XBGR32: u32 = v4l2_fourcc(b'X', b'R', b'2', b'4'); /* 32  BGRX-8-8-8-8 */
pub const V4L2_PIX_FMT_RGB32: u32 = v4l2_fourcc(b'R', b'G', b'B', b'4'); /* 32  RGB-8-8-8-8 */
pub const V4L2_PIX_FMT_ARGB32: u32 = v4l2_fourcc(b'B', b'A', b'2', b'4'); /* 32  ARGB-8-8-8-8 */
pub const V4L2_PIX_FMT_XRGB32: u32 = v4l2_fourcc(b'B', b'X', b'2', b'4'); /* 32  XRGB-8-8-8-8 */

/* Grey formats */
pub const V4L2_PIX_FMT_GREY: u32 = v4l2_fourcc(b'G', b'R', b'E', b'Y'); /*  8  Greyscale */
pub const V4L2_PIX_FMT_Y4: u32 = v4l2_fourcc(b'Y', b'0', b'4', b' '); /*  4  Greyscale */
pub const V4L2_PIX_FMT_Y6: u32 = v4l2_fourcc(b'Y', b'0', b'6', b' '); /*  6  Greyscale */
pub const V4L2_PIX_FMT_Y10: u32 = v4l2_fourcc(b'Y', b'1', b'0', b' '); /* 10  Greyscale */
pub const V4L2_PIX_FMT_Y12: u32 = v4l2_fourcc(b'Y', b'1', b'2', b' '); /* 12  Greyscale */
pub const V4L2_PIX_FMT_Y16: u32 = v4l2_fourcc(b'Y', b'1', b'6', b' '); /* 16  Greyscale */
pub const V4L2_PIX_FMT_Y16_BE: u32 = v4l2_fourcc_be(b'Y', b'1', b'6', b' '); /* 16  Greyscale BE */

/* Grey bit-packed formats */
pub const V4L2_PIX_FMT_Y10BPACK: u32 = v4l2_fourcc(b'Y', b'1', b'0', b'B'); /* 10  Greyscale bit-packed */

/* Palette formats */
pub const V4L2_PIX_FMT_PAL8: u32 = v4l2_fourcc(b'P', b'A', b'L', b'8'); /*  8  8-bit palette */

/* Chrominance formats */
pub const V4L2_PIX_FMT_UV8: u32 = v4l2_fourcc(b'U', b'V', b'8', b' '); /*  8  UV 4:4 */

/* Luminance+Chrominance formats */
pub const V4L2_PIX_FMT_YVU410: u32 = v4l2_fourcc(b'Y', b'V', b'U', b'9'); /*  9  YVU 4:1:0 */
pub const V4L2_PIX_FMT_YVU420: u32 = v4l2_fourcc(b'Y', b'V', b'1', b'2'); /* 12  YVU 4:2:0 */
pub const V4L2_PIX_FMT_YUYV: u32 = v4l2_fourcc(b'Y', b'U', b'Y', b'V'); /* 16  YUV 4:2:2 */
pub const V4L2_PIX_FMT_YYUV: u32 = v4l2_fourcc(b'Y', b'Y', b'U', b'V'); /* 16  YUV 4:2:2 */
pub const V4L2_PIX_FMT_YVYU: u32 = v4l2_fourcc(b'Y', b'V', b'Y', b'U'); /* 16  YVU 4:2:2 */
pub const V4L2_PIX_FMT_UYVY: u32 = v4l2_fourcc(b'U', b'Y', b'V', b'Y'); /* 16  YUV 4:2:2 */
pub const V4L2_PIX_FMT_VYUY: u32 = v4l2_fourcc(b'V', b'Y', b'U', b'Y'); /* 16  YUV 4:2:2 */
pub const V4L2_PIX_FMT_YUV422P: u32 = v4l2_fourcc(b'4', b'2', b'2', b'P'); /* 16  YVU422 planar */
pub const V4L2_PIX_FMT_YUV411P: u32 = v4l2_fourcc(b'4', b'1', b'1', b'P'); /* 16  YVU411 planar */
pub const V4L2_PIX_FMT_Y41P: u32 = v4l2_fourcc(b'Y', b'4', b'1', b'P'); /* 12  YUV 4:1:1 */
pub const V4L2_PIX_FMT_YUV444: u32 = v4l2_fourcc(b'Y', b'4', b'4', b'4'); /* 16  xxxxyyyy uuuuvvvv */
pub const V4L2_PIX_FMT_YUV555: u32 = v4l2_fourcc(b'Y', b'U', b'V', b'O'); /* 16  YUV-5-5-5 */
pub const V4L2_PIX_FMT_YUV565: u32 = v4l2_fourcc(b'Y', b'U', b'V', b'P'); /* 16  YUV-5-6-5 */
pub const V4L2_PIX_FMT_YUV32: u32 = v4l2_fourcc(b'Y', b'U', b'V', b'4'); /* 32  YUV-8-8-8-8 */
pub const V4L2_PIX_FMT_YUV410: u32 = v4l2_fourcc(b'Y', b'U', b'V', b'9'); /*  9  YUV 4:1:0 */
pub const V4L2_PIX_FMT_YUV420: u32 = v4l2_fourcc(b'Y', b'U', b'1', b'2'); /* 12  YUV 4:2:0 */
pub const V4L2_PIX_FMT_HI240: u32 = v4l2_fourcc(b'H', b'I', b'2', b'4'); /*  8  8-bit color */
pub const V4L2_PIX_FMT_HM12: u32 = v4l2_fourcc(b'H', b'M', b'1', b'2'); /*  8  YUV 4:2:0 16x16 macroblocks */
pub const V4L2_PIX_FMT_M420: u32 = v4l2_fourcc(b'M', b'4', b'2', b'0'); /* 12  YUV 4:2:0 2 lines y, 1 line uv interleaved */

/* two planes -- one Y, one Cr + Cb interleaved */
pub const V4L2_PIX_FMT_NV12: u32 = v4l2_fourcc(b'N', b'V', b'1', b'2'); /* 12  Y/CbCr 4:2:0 */
pub const V4L2_PIX_FMT_NV21: u32 = v4l2_fourcc(b'N', b'V', b'2', b'1'); /* 12  Y/CrCb 4:2:0 */
pub const V4L2_PIX_FMT_NV16: u32 = v4l2_fourcc(b'N', b'V', b'1', b'6'); /* 16  Y/CbCr 4:2:2 */
pub const V4L2_PIX_FMT_NV61: u32 = v4l2_fourcc(b'N', b'V', b'6', b'1'); /* 16  Y/CrCb 4:2:2 */
pub const V4L2_PIX_FMT_NV24: u32 = v4l2_fourcc(b'N', b'V', b'2', b'4'); /* 24  Y/CbCr 4:4:4 */
pub const V4L2_PIX_FMT_NV42: u32 = v4l2_fourcc(b'N', b'V', b'4', b'2'); /* 24  Y/CrCb 4:4:4 */

/* two non contiguous planes - one Y, one Cr + Cb interleaved */
pub const V4L2_PIX_FMT_NV12M: u32 = v4l2_fourcc(b'N', b'M', b'1', b'2'); /* 12  Y/CbCr 4:2:0 */
pub const V4L2_PIX_FMT_NV21M: u32 = v4l2_fourcc(b'N', b'M', b'2', b'1'); /* 21  Y/CrCb 4:2:0 */
pub const V4L2_PIX_FMT_NV16M: u32 = v4l2_fourcc(b'N', b'M', b'1', b'6'); /* 16  Y/CbCr 4:2:2 */
pub const V4L2_PIX_FMT_NV61M: u32 = v4l2_fourcc(b'N', b'M', b'6', b'1'); /* 16  Y/CrCb 4:2:2 */
pub const V4L2_PIX_FMT_NV12MT: u32 = v4l2_fourcc(b'T', b'M', b'1', b'2'); /* 12  Y/CbCr 4:2:0 64x32 macroblocks */
pub const V4L2_PIX_FMT_NV12MT_16X16: u32 = v4l2_fourcc(b'V', b'M', b'1', b'2'); /* 12  Y/CbCr 4:2:0 16x16 macroblocks */

/* three non contiguous planes - Y, Cb, Cr */
pub const V4L2_PIX_FMT_YUV420M: u32 = v4l2_fourcc(b'Y', b'M', b'1', b'2'); /* 12  YUV420 planar */
pub const V4L2_PIX_FMT_YVU420M: u32 = v4l2_fourcc(b'Y', b'M', b'2', b'1'); /* 12  YVU420 planar */

/* Bayer formats */
pub const V4L2_PIX_FMT_SBGGR8: u32 = v4l2_fourcc(b'B', b'A', b'8', b'1'); /*  8  BGBG.. GRGR.. */
pub const V4L2_PIX_FMT_SGBRG8: u32 = v4l2_fourcc(b'G', b'B', b'R', b'G'); /*  8  GBGB.. RGRG.. */
pub const V4L2_PIX_FMT_SGRBG8: u32 = v4l2_fourcc(b'G', b'R', b'B', b'G'); /*  8  GRGR.. BGBG.. */
pub const V4L2_PIX_FMT_SRGGB8: u32 = v4l2_fourcc(b'R', b'G', b'G', b'B'); /*  8  RGRG.. GBGB.. */
pub const V4L2_PIX_FMT_SBGGR10: u32 = v4l2_fourcc(b'B', b'G', b'1', b'0'); /* 10  BGBG.. GRGR.. */
pub const V4L2_PIX_FMT_SGBRG10: u32 = v4l2_fourcc(b'G', b'B', b'1', b'0'); /* 10  GBGB.. RGRG.. */
pub const V4L2_PIX_FMT_SGRBG10: u32 = v4l2_fourcc(b'B', b'A', b'1', b'0'); /* 10  GRGR.. BGBG.. */
pub const V4L2_PIX_FMT_SRGGB10: u32 = v4l2_fourcc(b'R', b'G', b'1', b'0'); /* 10  RGRG.. GBGB.. */
/* 10bit raw bayer packed, 5 bytes for every 4 pixels */
pub const V4L2_PIX_FMT_SBGGR10P: u32 = v4l2_fourcc(b'p', b'B', b'A', b'A');
pub const V4L2_PIX_FMT_SGBRG10P: u32 = v4l2_fourcc(b'p', b'G', b'A', b'A');
pub const V4L2_PIX_FMT_SGRBG10P: u32 = v4l2_fourcc(b'p', b'g', b'A', b'A');
pub const V4L2_PIX_FMT_SRGGB10P: u32 = v4l2_fourcc(b'p', b'R', b'A', b'A');
/* 10bit raw bayer a-law compressed to 8 bits */
pub const V4L2_PIX_FMT_SBGGR10ALAW8: u32 = v4l2_fourcc(b'a', b'B', b'A', b'8');
pub const V4L2_PIX_FMT_SGBRG10ALAW8: u32 = v4l2_fourcc(b'a', b'G', b'A', b'8');
pub const V4L2_PIX_FMT_SGRBG10ALAW8: u32 = v4l2_fourcc(b'a', b'g', b'A', b'8');
pub const V4L2_PIX_FMT_SRGGB10ALAW8: u32 = v4l2_fourcc(b'a', b'R', b'A', b'8');
/* 10bit raw bayer DPCM compressed to 8 bits */
pub const V4L2_PIX_FMT_SBGGR10DPCM8: u32 = v4l2_fourcc(b'b', b'B', b'A', b'8');
pub const V4L2_PIX_FMT_SGBRG10DPCM8: u32 = v4l2_fourcc(b'b', b'G', b'A', b'8');
pub const V4L2_PIX_FMT_SGRBG10DPCM8: u32 = v4l2_fourcc(b'B', b'D', b'1', b'0');
pub const V4L2_PIX_FMT_SRGGB10DPCM8: u32 = v4l2_fourcc(b'b', b'R', b'A', b'8');
pub const V4L2_PIX_FMT_SBGGR12: u32 = v4l2_fourcc(b'B', b'G', b'1', b'2'); /* 12  BGBG.. GRGR.. */
pub const V4L2_PIX_FMT_SGBRG12: u32 = v4l2_fourcc(b'G', b'B', b'1', b'2'); /* 12  GBGB.. RGRG.. */
pub const V4L2_PIX_FMT_SGRBG12: u32 = v4l2_fourcc(b'B', b'A', b'1', b'2'); /* 12  GRGR.. BGBG.. */
pub const V4L2_PIX_FMT_SRGGB12: u32 = v4l2_fourcc(b'R', b'G', b'1', b'2'); /* 12  RGRG.. GBGB.. */
pub const V4L2_PIX_FMT_SBGGR16: u32 = v4l2_fourcc(b'B', b'Y', b'R', b'2'); /* 16  BGBG.. GRGR.. */

/* HSV formats */
pub const V4L2_PIX_FMT_HSV24: u32 = v4l2_fourcc(b'H', b'S', b'V', b'3');
pub const V4L2_PIX_FMT_HSV32: u32 = v4l2_fourcc(b'H', b'S', b'V', b'4');

/* compressed formats */
pub const V4L2_PIX_FMT_MJPEG: u32 = v4l2_fourcc(b'M', b'J', b'P', b'G'); /* Motion-JPEG */
pub const V4L2_PIX_FMT_JPEG: u32 = v4l2_fourcc(b'J', b'P', b'E', b'G'); /* JFIF JPEG */
pub const V4L2_PIX_FMT_DV: u32 = v4l2_fourcc(b'd', b'v', b's', b'd'); /* 1394 */
pub const V4L2_PIX_FMT_MPEG: u32 = v4l2_fourcc(b'M', b'P', b'E', b'G'); /* MPEG-1/2/4 Multiplexed */
pub const V4L2_PIX_FMT_H264: u32 = v4l2_fourcc(b'H', b'2', b'6', b'4'); /* H264 with start codes */
pub const V4L2_PIX_FMT_H264_NO_SC: u32 = v4l2_fourcc(b'A', b'V', b'C', b'1'); /* H264 without start codes */
pub const V4L2_PIX_FMT_H264_MVC: u32 = v4l2_fourcc(b'M', b'2', b'6', b'4'); /* H264 MVC */
pub const V4L2_PIX_FMT_H263: u32 = v4l2_fourcc(b'H', b'2', b'6', b'3'); /* H263 */
pub const V4L2_PIX_FMT_MPEG1: u32 = v4l2_fourcc(b'M', b'P', b'G', b'1'); /* MPEG-1 ES */
pub const V4L2_PIX_FMT_MPEG2: u32 = v4l2_fourcc(b'M', b'P', b'G', b'2'); /* MPEG-2 ES */
pub const V4L2_PIX_FMT_MPEG4: u32 = v4l2_fourcc(b'M', b'P', b'G', b'4'); /* MPEG-4 part 2 ES */
pub const V4L2_PIX_FMT_XVID: u32 = v4l2_fourcc(b'X', b'V', b'I', b'D'); /* Xvid */
pub const V4L2_PIX_FMT_VC1_ANNEX_G: u32 = v4l2_fourcc(b'V', b'C', b'1', b'G'); /* SMPTE 421M Annex G compliant stream */
pub const V4L2_PIX_FMT_VC1_ANNEX_L: u32 = v4l2_fourcc(b'V', b'C', b'1', b'L'); /* SMPTE 421M Annex L compliant stream */
pub const V4L2_PIX_FMT_VP8: u32 = v4l2_fourcc(b'V', b'P', b'8', b'0'); /* VP8 */

/*  Vendor-specific formats   */
pub const V4L2_PIX_FMT_CPIA1: u32 = v4l2_fourcc(b'C', b'P', b'I', b'A'); /* cpia1 YUV */
pub const V4L2_PIX_FMT_WNVA: u32 = v4l2_fourcc(b'W', b'N', b'V', b'A'); /* Winnov hw compress */
pub const V4L2_PIX_FMT_SN9C10X: u32 = v4l2_fourcc(b'S', b'9', b'1', b'0'); /* SN9C10x compression */
pub const V4L2_PIX_FMT_SN9C20X_I420: u32 = v4l2_fourcc(b'S', b'9', b'2', b'0'); /* SN9C20x YUV 4:2:0 */
pub const V4L2_PIX_FMT_PWC1: u32 = v4l2_fourcc(b'P', b'W', b'C', b'1'); /* pwc older webcam */
pub const V4L2_PIX_FMT_PWC2: u32 = v4l2_fourcc(b'P', b'W', b'C', b'2'); /* pwc newer webcam */
pub const V4L2_PIX_FMT_ET61X251: u32 = v4l2_fourcc(b'E', b'6', b'2', b'5'); /* ET61X251 compression */
pub const V4L2_PIX_FMT_SPCA501: u32 = v4l2_fourcc(b'S', b'5', b'0', b'1'); /* YUYV per line */
pub const V4L2_PIX_FMT_SPCA505: u32 = v4l2_fourcc(b'S', b'5', b'0', b'5'); /* YYUV per line */
pub const V4L2_PIX_FMT_SPCA508: u32 = v4l2_fourcc(b'S', b'5', b'0', b'8'); /* YUVY per line */
pub const V4L2_PIX_FMT_SPCA561: u32 = v4l2_fourcc(b'S', b'5', b'6', b'1'); /* compressed GBRG bayer */
pub const V4L2_PIX_FMT_PAC207: u32 = v4l2_fourcc(b'P', b'2', b'0', b'7'); /* compressed BGGR bayer */
pub const V4L2_PIX_FMT_MR97310A: u32 = v4l2_fourcc(b'M', b'3', b'1', b'0'); /* compressed BGGR bayer */
pub const V4L2_PIX_FMT_JL2005BCD: u32 = v4l2_fourcc(b'J', b'L', b'2', b'0'); /* compressed RGGB bayer */
pub const V4L2_PIX_FMT_SN9C2028: u32 = v4l2_fourcc(b'S', b'O', b'N', b'X'); /* compressed GBRG bayer */
pub const V4L2_PIX_FMT_SQ905C: u32 = v4l2_fourcc(b'9', b'0', b'5', b'C'); /* compressed RGGB bayer */
pub const V4L2_PIX_FMT_PJPG: u32 = v4l2_fourcc(b'P', b'J', b'P', b'G'); /* Pixart 73xx JPEG */
pub const V4L2_PIX_FMT_OV511: u32 = v4l2_fourcc(b'O', b'5', b'1', b'1'); /* ov511 JPEG */
pub const V4L2_PIX_FMT_OV518: u32 = v4l2_fourcc(b'O', b'5', b'1', b'8'); /* ov518 JPEG */
pub const V4L2_PIX_FMT_STV0680: u32 = v4l2_fourcc(b'S', b'6', b'8', b'0'); /* stv0680 bayer */
pub const V4L2_PIX_FMT_TM6000: u32 = v4l2_fourcc(b'T', b'M', b'6', b'0'); /* tm5600/tm60x0 */
pub const V4L2_PIX_FMT_CIT_YYVYUY: u32 = v4l2_fourcc(b'C', b'I', b'T', b'V'); /* one line of Y then 1 line of VYUY */
pub const V4L2_PIX_FMT_KONICA420: u32 = v4l2_fourcc(b'K', b'O', b'N', b'I'); /* YUV420 planar in blocks of 256 pixels */
pub const V4L2_PIX_FMT_JPGL: u32 = v4l2_fourcc(b'J', b'P', b'G', b'L'); /* JPEG-Lite */
pub const V4L2_PIX_FMT_SE401: u32 = v4l2_fourcc(b'S', b'4', b'0', b'1'); /* se401 janggu compressed rgb */
pub const V4L2_PIX_FMT_S5C_UYVY_JPG: u32 = v4l2_fourcc(b'S', b'5', b'C', b'I'); /* S5C73M3 interleaved UYVY/JPEG */
pub const V4L2_PIX_FMT_QTEC_RGBPP40: u32 = v4l2_fourcc(b'Q', b'5', b'4', b'0'); /* Qtec RGBPP 40 bits */
pub const V4L2_PIX_FMT_QTEC_RGBPP80: u32 = v4l2_fourcc(b'Q', b'5', b'8', b'0'); /* Qtec RGBPP 80 bits */
pub const V4L2_PIX_FMT_QTEC_DISTORTION: u32 = v4l2_fourcc(b'Q', b'D', b'I', b'S'); /* Qtec Distortion 32 bits */
pub const V4L2_PIX_FMT_QTEC_GREEN8: u32 = v4l2_fourcc(b'Q', b'G', b'0', b'8'); /* Qtec Green 8 bits */
pub const V4L2_PIX_FMT_QTEC_GREEN16: u32 = v4l2_fourcc(b'Q', b'G', b'1', b'6'); /* Qtec Green 16 bits */
pub const V4L2_PIX_FMT_QTEC_GREEN16_BE: u32 = v4l2_fourcc_be(b'Q', b'G', b'1', b'6'); /* Qtec Green 16 bits BE */
pub const V4L2_PIX_FMT_BGR48: u32 = v4l2_fourcc(b'B', b'G', b'R', b'6'); /* 48  BGR-16-16-16 */
pub const V4L2_PIX_FMT_RGB48: u32 = v4l2_fourcc(b'R', b'G', b'B', b'6'); /* 48  RGB-16-16-16 */
pub const V4L2_PIX_FMT_QTEC_HRGB: u32 = v4l2_fourcc(b'H', b'R', b'G', b'B'); /* Qtec HRGB 8 bits (H 0 to 180) */
pub const V4L2_PIX_FMT_QTEC_YRGB: u32 = v4l2_fourcc(b'Y', b'R', b'G', b'B'); /* Qtec YRGB 8 bits (Y Rec. 601) */
/* fourcc BGRH is already taken by BGR666 */
pub const V4L2_PIX_FMT_QTEC_BGRH: u32 = v4l2_fourcc(b'B', b'G', b'R', b'Q'); /* Qtec BGRX 8 bits (H 0 to 180) */
pub const V4L2_PIX_FMT_QTEC_BGRY: u32 = v4l2_fourcc(b'B', b'G', b'R', b'Y'); /* Qtec BGRY 8 bits (Y Rec. 601) */

/* SDR formats - used only for Software Defined Radio devices */
pub const V4L2_SDR_FMT_CU8: u32 = v4l2_fourcc(b'C', b'U', b'0', b'8'); /* IQ u8 */
pub const V4L2_SDR_FMT_CU16LE: u32 = v4l2_fourcc(b'C', b'U', b'1', b'6'); /* IQ u16le */
pub const V4L2_SDR_FMT_CS8: u32 = v4l2_fourcc(b'C', b'S', b'0', b'8'); /* complex s8 */
pub const V4L2_SDR_FMT_CS14LE: u32 = v4l2_fourcc(b'C', b'S', b'1', b'4'); /* complex s14le */
pub const V4L2_SDR_FMT_RU12LE: u32 = v4l2_fourcc(b'R', b'U', b'1', b'2'); /* real u12le */

/// `priv` field value indicating that the extended pixel format fields
/// that follow it are valid.
pub const V4L2_PIX_FMT_PRIV_MAGIC: u32 = 0xfeedcafe;

/* Flags */
pub const V4L2_PIX_FMT_FLAG_PREMUL_ALPHA: u32 = 0x00000001;

/// Format description, returned by `VIDIOC_ENUM_FMT`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct v4l2_fmtdesc {
    /// Format number.
    pub index: u32,
    /// enum v4l2_buf_type
    pub type_: u32,
    pub flags: u32,
    /// Description string.
    pub description: [u8; 32],
    /// Format fourcc.
    pub pixelformat: u32,
    pub reserved: [u32; 4],
}

crate::impl_zeroed!(v4l2_fmtdesc);

impl Default for v4l2_fmtdesc {
    fn default() -> Self {
        Self::zeroed()
    }
}

pub const V4L2_FMT_FLAG_COMPRESSED: u32 = 0x0001;
pub const V4L2_FMT_FLAG_EMULATED: u32 = 0x0002;

/* enum v4l2_frmsizetypes */
pub const V4L2_FRMSIZE_TYPE_DISCRETE: u32 = 1;
pub const V4L2_FRMSIZE_TYPE_CONTINUOUS: u32 = 2;
pub const V4L2_FRMSIZE_TYPE_STEPWISE: u32 = 3;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct v4l2_frmsize_discrete {
    /// Frame width [pixel].
    pub width: u32,
    /// Frame height [pixel].
    pub height: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct v4l2_frmsize_stepwise {
    pub min_width: u32,
    pub max_width: u32,
    pub step_width: u32,
    pub min_height: u32,
    pub max_height: u32,
    pub step_height: u32,
}

/// Frame-size enumeration, exchanged by `VIDIOC_ENUM_FRAMESIZES`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_frmsizeenum {
    /// Frame size number.
    pub index: u32,
    /// Pixel format.
    pub pixel_format: u32,
    /// Frame size type the device supports; selects the union arm.
    pub type_: u32,
    pub size: v4l2_frmsizeenum_size,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_frmsizeenum_size {
    pub discrete: v4l2_frmsize_discrete,
    pub stepwise: v4l2_frmsize_stepwise,
}

/* enum v4l2_frmivaltypes */
pub const V4L2_FRMIVAL_TYPE_DISCRETE: u32 = 1;
pub const V4L2_FRMIVAL_TYPE_CONTINUOUS: u32 = 2;
pub const V4L2_FRMIVAL_TYPE_STEPWISE: u32 = 3;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct v4l2_frmival_stepwise {
    /// Minimum frame interval [s].
    pub min: v4l2_fract,
    /// Maximum frame interval [s].
    pub max: v4l2_fract,
    /// Frame interval step size [s].
    pub step: v4l2_fract,
}

/// Frame-interval enumeration, exchanged by `VIDIOC_ENUM_FRAMEINTERVALS`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_frmivalenum {
    /// Frame format index.
    pub index: u32,
    /// Pixel format.
    pub pixel_format: u32,
    pub width: u32,
    pub height: u32,
    /// Frame interval type the device supports; selects the union arm.
    pub type_: u32,
    pub interval: v4l2_frmivalenum_interval,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_frmivalenum_interval {
    pub discrete: v4l2_fract,
    pub stepwise: v4l2_frmival_stepwise,
}

crate::impl_zeroed!(v4l2_frmsizeenum, v4l2_frmivalenum);

const_assert_eq!(core::mem::size_of::<v4l2_fmtdesc>(), 64);
const_assert_eq!(core::mem::size_of::<v4l2_frmsizeenum>(), 44);
const_assert_eq!(core::mem::size_of::<v4l2_frmivalenum>(), 52);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_values() {
        assert_eq!(V4L2_PIX_FMT_NV12, 0x3231564e);
        assert_eq!(V4L2_PIX_FMT_YUYV, 0x56595559);
        assert_eq!(V4L2_PIX_FMT_RGB24, 0x33424752);
        assert_eq!(V4L2_PIX_FMT_H264, 0x34363248);
        assert_eq!(V4L2_PIX_FMT_GREY, 0x59455247);
        assert_eq!(V4L2_SDR_FMT_CU8, 0x38305543);
    }

    #[test]
    fn test_be_variants_differ_only_in_bit31() {
        assert_eq!(V4L2_PIX_FMT_Y16_BE, V4L2_PIX_FMT_Y16 | (1 << 31));
        assert_eq!(V4L2_PIX_FMT_ARGB555X, V4L2_PIX_FMT_ARGB555 | (1 << 31));
        assert_eq!(V4L2_PIX_FMT_XRGB555X, V4L2_PIX_FMT_XRGB555 | (1 << 31));
        assert_eq!(
            V4L2_PIX_FMT_QTEC_GREEN16_BE,
            V4L2_PIX_FMT_QTEC_GREEN16 | (1 << 31)
        );
    }

    #[test]
    fn test_bgr666_and_qtec_bgrh_distinct() {
        assert_ne!(V4L2_PIX_FMT_BGR666, V4L2_PIX_FMT_QTEC_BGRH);
    }

    #[test]
    fn test_pix_format_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(v4l2_pix_format, pixelformat), 8);
        assert_eq!(offset_of!(v4l2_pix_format, priv_), 28);
        assert_eq!(offset_of!(v4l2_pix_format, flags), 32);
        assert_eq!(offset_of!(v4l2_pix_format, enc), 36);
        assert_eq!(offset_of!(v4l2_pix_format, quantization), 40);
        assert_eq!(offset_of!(v4l2_pix_format, xfer_func), 44);
    }

    #[test]
    fn test_enumeration_unions() {
        let mut f = v4l2_frmsizeenum::zeroed();
        f.type_ = V4L2_FRMSIZE_TYPE_DISCRETE;
        f.size.discrete = v4l2_frmsize_discrete {
            width: 1920,
            height: 1080,
        };
        // The stepwise arm overlays the discrete one.
        unsafe {
            assert_eq!(f.size.stepwise.min_width, 1920);
            assert_eq!(f.size.stepwise.max_width, 1080);
        }
    }
}
