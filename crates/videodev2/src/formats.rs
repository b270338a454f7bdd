// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Aggregate stream formats: the `v4l2_format` tagged union and every
//! record it can carry (overlay windows, raw and sliced VBI, multiplanar
//! and SDR formats), plus streaming parameters, cropping and selection,
//! and JPEG compression parameters.

use libc::{c_char, c_int, c_void};
use static_assertions::const_assert_eq;

use crate::pixfmt::v4l2_pix_format;
use crate::types::{v4l2_ext_rect, v4l2_fract, v4l2_rect};
use crate::VIDEO_MAX_PLANES;

/// JPEG compression parameters, exchanged by `VIDIOC_G_JPEGCOMP` and
/// `VIDIOC_S_JPEGCOMP`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_jpegcompression {
    pub quality: c_int,
    /// Number of APP segment to be written, must be 0..15.
    pub APPn: c_int,
    /// Length of data in JPEG APPn segment.
    pub APP_len: c_int,
    /// Data in the JPEG APPn segment.
    pub APP_data: [c_char; 60],
    /// Length of data in JPEG COM segment.
    pub COM_len: c_int,
    /// Data in JPEG COM segment.
    pub COM_data: [c_char; 60],
    /// Which markers should go into the JPEG output. Unless you exactly
    /// know what you do, leave them untouched. The presence of the APP and
    /// COM marker is influenced by APP_len and COM_len ONLY, not by this
    /// property.
    pub jpeg_markers: u32,
}

crate::impl_zeroed!(v4l2_jpegcompression);

/// Define Huffman Tables.
pub const V4L2_JPEG_MARKER_DHT: u32 = 1 << 3;
/// Define Quantization Tables.
pub const V4L2_JPEG_MARKER_DQT: u32 = 1 << 4;
/// Define Restart Interval.
pub const V4L2_JPEG_MARKER_DRI: u32 = 1 << 5;
/// Comment segment.
pub const V4L2_JPEG_MARKER_COM: u32 = 1 << 6;
/// App segment, driver will always use APP0.
pub const V4L2_JPEG_MARKER_APP: u32 = 1 << 7;

/// Overlay framebuffer description, exchanged by `VIDIOC_G_FBUF` and
/// `VIDIOC_S_FBUF`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_framebuffer {
    pub capability: u32,
    pub flags: u32,
    pub base: *mut c_void,
    pub fmt: v4l2_framebuffer_fmt,
}

/// Framebuffer format description embedded in [`v4l2_framebuffer`]. Same
/// leading fields as [`v4l2_pix_format`] but without the extended
/// colorimetry tail.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_framebuffer_fmt {
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
    /// Reserved field, set to 0.
    pub priv_: u32,
}

crate::impl_zeroed!(v4l2_framebuffer);

/*  Flags for the 'capability' field. Read only */
pub const V4L2_FBUF_CAP_EXTERNOVERLAY: u32 = 0x0001;
pub const V4L2_FBUF_CAP_CHROMAKEY: u32 = 0x0002;
pub const V4L2_FBUF_CAP_LIST_CLIPPING: u32 = 0x0004;
pub const V4L2_FBUF_CAP_BITMAP_CLIPPING: u32 = 0x0008;
pub const V4L2_FBUF_CAP_LOCAL_ALPHA: u32 = 0x0010;
pub const V4L2_FBUF_CAP_GLOBAL_ALPHA: u32 = 0x0020;
pub const V4L2_FBUF_CAP_LOCAL_INV_ALPHA: u32 = 0x0040;
pub const V4L2_FBUF_CAP_SRC_CHROMAKEY: u32 = 0x0080;
/*  Flags for the 'flags' field. */
pub const V4L2_FBUF_FLAG_PRIMARY: u32 = 0x0001;
pub const V4L2_FBUF_FLAG_OVERLAY: u32 = 0x0002;
pub const V4L2_FBUF_FLAG_CHROMAKEY: u32 = 0x0004;
pub const V4L2_FBUF_FLAG_LOCAL_ALPHA: u32 = 0x0008;
pub const V4L2_FBUF_FLAG_GLOBAL_ALPHA: u32 = 0x0010;
pub const V4L2_FBUF_FLAG_LOCAL_INV_ALPHA: u32 = 0x0020;
pub const V4L2_FBUF_FLAG_SRC_CHROMAKEY: u32 = 0x0040;

/// Clipping rectangle node; `next` chains further clips in userspace.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_clip {
    pub c: v4l2_rect,
    pub next: *mut v4l2_clip,
}

/// Overlay window placement.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_window {
    pub w: v4l2_rect,
    /// enum v4l2_field
    pub field: u32,
    pub chromakey: u32,
    pub clips: *mut v4l2_clip,
    pub clipcount: u32,
    pub bitmap: *mut c_void,
    pub global_alpha: u8,
}

crate::impl_zeroed!(v4l2_clip, v4l2_window);

/// Capture side of [`v4l2_streamparm`].
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_captureparm {
    /// Supported modes.
    pub capability: u32,
    /// Current mode.
    pub capturemode: u32,
    /// Time per frame in seconds.
    pub timeperframe: v4l2_fract,
    /// Driver-specific extensions.
    pub extendedmode: u32,
    /// Number of buffers for read.
    pub readbuffers: u32,
    pub reserved: [u32; 4],
}

/*  Flags for 'capability' and 'capturemode' fields */
/// High quality imaging mode.
pub const V4L2_MODE_HIGHQUALITY: u32 = 0x0001;
/// The timeperframe field is supported.
pub const V4L2_CAP_TIMEPERFRAME: u32 = 0x1000;

/// Output side of [`v4l2_streamparm`].
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_outputparm {
    /// Supported modes.
    pub capability: u32,
    /// Current mode.
    pub outputmode: u32,
    /// Time per frame in seconds.
    pub timeperframe: v4l2_fract,
    /// Driver-specific extensions.
    pub extendedmode: u32,
    /// Number of buffers for write.
    pub writebuffers: u32,
    pub reserved: [u32; 4],
}

/// Cropping bounds and default rectangle, returned by `VIDIOC_CROPCAP`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_cropcap {
    /// enum v4l2_buf_type
    pub type_: u32,
    pub bounds: v4l2_rect,
    pub defrect: v4l2_rect,
    pub pixelaspect: v4l2_fract,
}

/// Crop rectangle, exchanged by `VIDIOC_G_CROP` and `VIDIOC_S_CROP`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_crop {
    /// enum v4l2_buf_type
    pub type_: u32,
    pub c: v4l2_rect,
}

/// Selection rectangle, exchanged by `VIDIOC_G_SELECTION` and
/// `VIDIOC_S_SELECTION`.
///
/// Hardware may use multiple helper windows to process a video stream;
/// this record exchanges those selection areas between an application and
/// a driver. `type` must not be one of the `*_MPLANE` types.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_selection {
    /// enum v4l2_buf_type
    pub type_: u32,
    /// Selection target, chooses one of the possible rectangles
    /// (`V4L2_SEL_TGT_*`).
    pub target: u32,
    /// Constraint flags (`V4L2_SEL_FLAG_*`).
    pub flags: u32,
    /// Coordinates of the selection window.
    pub r: v4l2_rect,
    pub rectangles: u32,
    pub u: v4l2_selection_u,
}

/// Trailing union of [`v4l2_selection`]: reserved padding, or a pointer to
/// an extended rectangle array when `rectangles` is non-zero.
#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_selection_u {
    pub reserved: [u32; 8],
    pub pr: *mut v4l2_ext_rect,
}

crate::impl_zeroed!(v4l2_selection, v4l2_selection_u);

/// Raw VBI capture or output parameters.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_vbi_format {
    /// In 1 Hz units.
    pub sampling_rate: u32,
    pub offset: u32,
    pub samples_per_line: u32,
    /// V4L2_PIX_FMT_*
    pub sample_format: u32,
    pub start: [i32; 2],
    pub count: [u32; 2],
    /// V4L2_VBI_*
    pub flags: u32,
    /// Must be zero.
    pub reserved: [u32; 2],
}

/*  VBI flags  */
pub const V4L2_VBI_UNSYNC: u32 = 1 << 0;
pub const V4L2_VBI_INTERLACED: u32 = 1 << 1;

/* ITU-R start lines for each field */
pub const V4L2_VBI_ITU_525_F1_START: u32 = 1;
pub const V4L2_VBI_ITU_525_F2_START: u32 = 264;
pub const V4L2_VBI_ITU_625_F1_START: u32 = 1;
pub const V4L2_VBI_ITU_625_F2_START: u32 = 314;

/// Sliced VBI capture or output parameters.
///
/// `service_lines[0][..]` specifies lines 0-23 (1-23 used) of the first
/// field; `service_lines[1][..]` specifies lines 0-23 of the second field
/// (frame lines 313-336 for 625 line standards, 263-286 for 525 line
/// standards).
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_sliced_vbi_format {
    pub service_set: u16,
    pub service_lines: [[u16; 24]; 2],
    pub io_size: u32,
    /// Must be zero.
    pub reserved: [u32; 2],
}

crate::impl_zeroed!(v4l2_sliced_vbi_format);

/// Teletext World System Teletext (WST), defined on ITU-R BT.653-2.
pub const V4L2_SLICED_TELETEXT_B: u16 = 0x0001;
/// Video Program System, defined on ETS 300 231.
pub const V4L2_SLICED_VPS: u16 = 0x0400;
/// Closed Caption, defined on EIA-608.
pub const V4L2_SLICED_CAPTION_525: u16 = 0x1000;
/// Wide Screen System, defined on ITU-R BT1119.1.
pub const V4L2_SLICED_WSS_625: u16 = 0x4000;

pub const V4L2_SLICED_VBI_525: u16 = V4L2_SLICED_CAPTION_525;
pub const V4L2_SLICED_VBI_625: u16 = V4L2_SLICED_TELETEXT_B | V4L2_SLICED_VPS | V4L2_SLICED_WSS_625;

/// Sliced VBI services a device supports, returned by
/// `VIDIOC_G_SLICED_VBI_CAP`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_sliced_vbi_cap {
    pub service_set: u16,
    pub service_lines: [[u16; 24]; 2],
    /// enum v4l2_buf_type
    pub type_: u32,
    /// Must be 0.
    pub reserved: [u32; 3],
}

crate::impl_zeroed!(v4l2_sliced_vbi_cap);

/// One line of sliced VBI data as read from or written to the device.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_sliced_vbi_data {
    pub id: u32,
    /// 0: first field, 1: second field.
    pub field: u32,
    /// 1-23.
    pub line: u32,
    /// Must be 0.
    pub reserved: u32,
    pub data: [u8; 48],
}

crate::impl_zeroed!(v4l2_sliced_vbi_data);

/*
 * Sliced VBI data inserted into MPEG streams
 * (V4L2_MPEG_STREAM_VBI_FMT_IVTV payload layout).
 */

/* Line type IDs */
pub const V4L2_MPEG_VBI_IVTV_TELETEXT_B: u8 = 1;
pub const V4L2_MPEG_VBI_IVTV_CAPTION_525: u8 = 4;
pub const V4L2_MPEG_VBI_IVTV_WSS_625: u8 = 5;
pub const V4L2_MPEG_VBI_IVTV_VPS: u8 = 7;

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_mpeg_vbi_itv0_line {
    /// One of the V4L2_MPEG_VBI_IVTV_* line type IDs.
    pub id: u8,
    /// Sliced VBI data for the line.
    pub data: [u8; 42],
}

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_mpeg_vbi_itv0 {
    /// Bitmasks of VBI service lines present.
    pub linemask: [u32; 2],
    pub line: [v4l2_mpeg_vbi_itv0_line; 35],
}

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_mpeg_vbi_ITV0 {
    pub line: [v4l2_mpeg_vbi_itv0_line; 36],
}

pub const V4L2_MPEG_VBI_IVTV_MAGIC0: &[u8; 4] = b"itv0";
pub const V4L2_MPEG_VBI_IVTV_MAGIC1: &[u8; 4] = b"ITV0";

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_mpeg_vbi_fmt_ivtv {
    pub magic: [u8; 4],
    pub u: v4l2_mpeg_vbi_fmt_ivtv_u,
}

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub union v4l2_mpeg_vbi_fmt_ivtv_u {
    pub itv0: v4l2_mpeg_vbi_itv0,
    pub ITV0: v4l2_mpeg_vbi_ITV0,
}

crate::impl_zeroed!(v4l2_mpeg_vbi_fmt_ivtv);

/// Additional, per-plane format definition.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_plane_pix_format {
    /// Maximum size in bytes required for data on this plane.
    pub sizeimage: u32,
    /// Distance in bytes between the leftmost pixels in two adjacent lines.
    pub bytesperline: u32,
    pub reserved: [u16; 6],
}

/// Multiplanar image format.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_pix_format_mplane {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Little endian four character code (fourcc).
    pub pixelformat: u32,
    /// enum v4l2_field
    pub field: u32,
    /// enum v4l2_colorspace
    pub colorspace: u32,

    /// Per-plane information.
    pub plane_fmt: [v4l2_plane_pix_format; VIDEO_MAX_PLANES as usize],
    /// Number of planes for this format.
    pub num_planes: u8,
    /// Format flags (V4L2_PIX_FMT_FLAG_*).
    pub flags: u8,
    pub enc: v4l2_pix_format_mplane_enc,
    /// enum v4l2_quantization
    pub quantization: u8,
    /// enum v4l2_xfer_func
    pub xfer_func: u8,
    pub reserved: [u8; 7],
}

/// Encoding field of [`v4l2_pix_format_mplane`]: Y'CbCr or HSV depending
/// on the pixel format.
#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_pix_format_mplane_enc {
    /// enum v4l2_ycbcr_encoding
    pub ycbcr_enc: u8,
    /// enum v4l2_hsv_encoding
    pub hsv_enc: u8,
}

crate::impl_zeroed!(v4l2_pix_format_mplane);

/// SDR (Software Defined Radio) format definition.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_sdr_format {
    /// Little endian four character code (fourcc).
    pub pixelformat: u32,
    /// Maximum size in bytes required for data.
    pub buffersize: u32,
    pub reserved: [u8; 24],
}

/// Stream data format, exchanged by `VIDIOC_G_FMT`, `VIDIOC_S_FMT`, and
/// `VIDIOC_TRY_FMT`. `type` selects the union arm.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_format {
    /// enum v4l2_buf_type
    pub type_: u32,
    pub fmt: v4l2_format_fmt,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_format_fmt {
    /// V4L2_BUF_TYPE_VIDEO_CAPTURE
    pub pix: v4l2_pix_format,
    /// V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE
    pub pix_mp: v4l2_pix_format_mplane,
    /// V4L2_BUF_TYPE_VIDEO_OVERLAY
    pub win: v4l2_window,
    /// V4L2_BUF_TYPE_VBI_CAPTURE
    pub vbi: v4l2_vbi_format,
    /// V4L2_BUF_TYPE_SLICED_VBI_CAPTURE
    pub sliced: v4l2_sliced_vbi_format,
    /// V4L2_BUF_TYPE_SDR_CAPTURE
    pub sdr: v4l2_sdr_format,
    /// Placeholder for future extensions and custom formats.
    pub raw_data: [u8; 200],
}

crate::impl_zeroed!(v4l2_format, v4l2_format_fmt);

/// Stream type-dependent parameters, exchanged by `VIDIOC_G_PARM` and
/// `VIDIOC_S_PARM`. `type` selects the union arm.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_streamparm {
    /// enum v4l2_buf_type
    pub type_: u32,
    pub parm: v4l2_streamparm_parm,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_streamparm_parm {
    pub capture: v4l2_captureparm,
    pub output: v4l2_outputparm,
    /// User-defined.
    pub raw_data: [u8; 200],
}

crate::impl_zeroed!(v4l2_streamparm, v4l2_streamparm_parm);

const_assert_eq!(core::mem::size_of::<v4l2_jpegcompression>(), 140);
const_assert_eq!(core::mem::size_of::<v4l2_vbi_format>(), 44);
const_assert_eq!(core::mem::size_of::<v4l2_sliced_vbi_format>(), 112);
const_assert_eq!(core::mem::size_of::<v4l2_sliced_vbi_cap>(), 116);
const_assert_eq!(core::mem::size_of::<v4l2_sliced_vbi_data>(), 64);
const_assert_eq!(core::mem::size_of::<v4l2_mpeg_vbi_itv0_line>(), 43);
const_assert_eq!(core::mem::size_of::<v4l2_mpeg_vbi_itv0>(), 1513);
const_assert_eq!(core::mem::size_of::<v4l2_mpeg_vbi_ITV0>(), 1548);
const_assert_eq!(core::mem::size_of::<v4l2_mpeg_vbi_fmt_ivtv>(), 1552);
const_assert_eq!(core::mem::size_of::<v4l2_plane_pix_format>(), 20);
const_assert_eq!(core::mem::size_of::<v4l2_pix_format_mplane>(), 192);
const_assert_eq!(core::mem::size_of::<v4l2_sdr_format>(), 32);
const_assert_eq!(core::mem::size_of::<v4l2_captureparm>(), 40);
const_assert_eq!(core::mem::size_of::<v4l2_outputparm>(), 40);
const_assert_eq!(core::mem::size_of::<v4l2_streamparm>(), 204);
const_assert_eq!(core::mem::size_of::<v4l2_cropcap>(), 44);
const_assert_eq!(core::mem::size_of::<v4l2_crop>(), 20);
