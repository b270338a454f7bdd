// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Analog video standards, digital video (DV/BT) timings, and EDID.

use static_assertions::const_assert_eq;

use crate::types::v4l2_fract;

pub type v4l2_std_id = u64;

/* one bit for each */
pub const V4L2_STD_PAL_B: v4l2_std_id = 0x00000001;
pub const V4L2_STD_PAL_B1: v4l2_std_id = 0x00000002;
pub const V4L2_STD_PAL_G: v4l2_std_id = 0x00000004;
pub const V4L2_STD_PAL_H: v4l2_std_id = 0x00000008;
pub const V4L2_STD_PAL_I: v4l2_std_id = 0x00000010;
pub const V4L2_STD_PAL_D: v4l2_std_id = 0x00000020;
pub const V4L2_STD_PAL_D1: v4l2_std_id = 0x00000040;
pub const V4L2_STD_PAL_K: v4l2_std_id = 0x00000080;

pub const V4L2_STD_PAL_M: v4l2_std_id = 0x00000100;
pub const V4L2_STD_PAL_N: v4l2_std_id = 0x00000200;
pub const V4L2_STD_PAL_Nc: v4l2_std_id = 0x00000400;
pub const V4L2_STD_PAL_60: v4l2_std_id = 0x00000800;

/// BTSC.
pub const V4L2_STD_NTSC_M: v4l2_std_id = 0x00001000;
/// EIA-J.
pub const V4L2_STD_NTSC_M_JP: v4l2_std_id = 0x00002000;
pub const V4L2_STD_NTSC_443: v4l2_std_id = 0x00004000;
/// FM A2.
pub const V4L2_STD_NTSC_M_KR: v4l2_std_id = 0x00008000;

pub const V4L2_STD_SECAM_B: v4l2_std_id = 0x00010000;
pub const V4L2_STD_SECAM_D: v4l2_std_id = 0x00020000;
pub const V4L2_STD_SECAM_G: v4l2_std_id = 0x00040000;
pub const V4L2_STD_SECAM_H: v4l2_std_id = 0x00080000;
pub const V4L2_STD_SECAM_K: v4l2_std_id = 0x00100000;
pub const V4L2_STD_SECAM_K1: v4l2_std_id = 0x00200000;
pub const V4L2_STD_SECAM_L: v4l2_std_id = 0x00400000;
pub const V4L2_STD_SECAM_LC: v4l2_std_id = 0x00800000;

/* ATSC/HDTV */
pub const V4L2_STD_ATSC_8_VSB: v4l2_std_id = 0x01000000;
pub const V4L2_STD_ATSC_16_VSB: v4l2_std_id = 0x02000000;

/*
 * Merged standards, for drivers and applications that deal in families
 * rather than individual variants.
 */

/// "Common" NTSC/M. Note that V4L2_STD_NTSC_443 is missing here.
pub const V4L2_STD_NTSC: v4l2_std_id = V4L2_STD_NTSC_M | V4L2_STD_NTSC_M_JP | V4L2_STD_NTSC_M_KR;
pub const V4L2_STD_SECAM_DK: v4l2_std_id = V4L2_STD_SECAM_D | V4L2_STD_SECAM_K | V4L2_STD_SECAM_K1;
/// All SECAM standards.
pub const V4L2_STD_SECAM: v4l2_std_id = V4L2_STD_SECAM_B
    | V4L2_STD_SECAM_G
    | V4L2_STD_SECAM_H
    | V4L2_STD_SECAM_DK
    | V4L2_STD_SECAM_L
    | V4L2_STD_SECAM_LC;
pub const V4L2_STD_PAL_BG: v4l2_std_id = V4L2_STD_PAL_B | V4L2_STD_PAL_B1 | V4L2_STD_PAL_G;
pub const V4L2_STD_PAL_DK: v4l2_std_id = V4L2_STD_PAL_D | V4L2_STD_PAL_D1 | V4L2_STD_PAL_K;
/// "Common" PAL, compatible with the old V4L1 concept of "PAL": /BGDKHI.
/// Several PAL standards are missing here: /M, /N and /Nc.
pub const V4L2_STD_PAL: v4l2_std_id =
    V4L2_STD_PAL_BG | V4L2_STD_PAL_DK | V4L2_STD_PAL_H | V4L2_STD_PAL_I;
/* Chroma "agnostic" standards */
pub const V4L2_STD_B: v4l2_std_id = V4L2_STD_PAL_B | V4L2_STD_PAL_B1 | V4L2_STD_SECAM_B;
pub const V4L2_STD_G: v4l2_std_id = V4L2_STD_PAL_G | V4L2_STD_SECAM_G;
pub const V4L2_STD_H: v4l2_std_id = V4L2_STD_PAL_H | V4L2_STD_SECAM_H;
pub const V4L2_STD_L: v4l2_std_id = V4L2_STD_SECAM_L | V4L2_STD_SECAM_LC;
pub const V4L2_STD_GH: v4l2_std_id = V4L2_STD_G | V4L2_STD_H;
pub const V4L2_STD_DK: v4l2_std_id = V4L2_STD_PAL_DK | V4L2_STD_SECAM_DK;
pub const V4L2_STD_BG: v4l2_std_id = V4L2_STD_B | V4L2_STD_G;
pub const V4L2_STD_MN: v4l2_std_id =
    V4L2_STD_PAL_M | V4L2_STD_PAL_N | V4L2_STD_PAL_Nc | V4L2_STD_NTSC;

/// Standards where MTS/BTSC stereo could be found.
pub const V4L2_STD_MTS: v4l2_std_id =
    V4L2_STD_NTSC_M | V4L2_STD_PAL_M | V4L2_STD_PAL_N | V4L2_STD_PAL_Nc;

/// Standards for countries with 60Hz line frequency.
pub const V4L2_STD_525_60: v4l2_std_id =
    V4L2_STD_PAL_M | V4L2_STD_PAL_60 | V4L2_STD_NTSC | V4L2_STD_NTSC_443;
/// Standards for countries with 50Hz line frequency.
pub const V4L2_STD_625_50: v4l2_std_id =
    V4L2_STD_PAL | V4L2_STD_PAL_N | V4L2_STD_PAL_Nc | V4L2_STD_SECAM;

pub const V4L2_STD_ATSC: v4l2_std_id = V4L2_STD_ATSC_8_VSB | V4L2_STD_ATSC_16_VSB;

pub const V4L2_STD_UNKNOWN: v4l2_std_id = 0;
pub const V4L2_STD_ALL: v4l2_std_id = V4L2_STD_525_60 | V4L2_STD_625_50;

/// Analog video standard description, returned by `VIDIOC_ENUMSTD`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct v4l2_standard {
    pub index: u32,
    pub id: v4l2_std_id,
    pub name: [u8; 24],
    /// Frames, not fields.
    pub frameperiod: v4l2_fract,
    pub framelines: u32,
    pub reserved: [u32; 4],
}

crate::impl_zeroed!(v4l2_standard);

impl Default for v4l2_standard {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// BT.656/BT.1120 timing data.
///
/// Regarding vertical interlaced timings: `height` refers to the total
/// height of the active video frame (= two fields), while the blanking
/// timings refer to the blanking of each field. The `il_*` fields describe
/// the even field (aka field 2) of interlaced formats. The active height
/// of each field is `height / 2`.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_bt_timings {
    /// Total width of the active video in pixels.
    pub width: u32,
    /// Total height of the active video in lines.
    pub height: u32,
    /// Interlaced or progressive.
    pub interlaced: u32,
    /// Positive or negative polarities.
    pub polarities: u32,
    /// Pixel clock in Hz. Ex. 74.25MHz->74250000.
    pub pixelclock: u64,
    /// Horizontal front porch in pixels.
    pub hfrontporch: u32,
    /// Horizontal sync length in pixels.
    pub hsync: u32,
    /// Horizontal back porch in pixels.
    pub hbackporch: u32,
    /// Vertical front porch in lines.
    pub vfrontporch: u32,
    /// Vertical sync length in lines.
    pub vsync: u32,
    /// Vertical back porch in lines.
    pub vbackporch: u32,
    pub il_vfrontporch: u32,
    pub il_vsync: u32,
    pub il_vbackporch: u32,
    /// Standards the timing belongs to.
    pub standards: u32,
    pub flags: u32,
    /// Must be zeroed.
    pub reserved: [u32; 14],
}

/* Interlaced or progressive format */
pub const V4L2_DV_PROGRESSIVE: u32 = 0;
pub const V4L2_DV_INTERLACED: u32 = 1;

/* Polarities. If bit is not set, it is assumed to be negative polarity */
pub const V4L2_DV_VSYNC_POS_POL: u32 = 0x00000001;
pub const V4L2_DV_HSYNC_POS_POL: u32 = 0x00000002;

/* Timings standards */
/// CEA-861 Digital TV Profile.
pub const V4L2_DV_BT_STD_CEA861: u32 = 1 << 0;
/// VESA Discrete Monitor Timings.
pub const V4L2_DV_BT_STD_DMT: u32 = 1 << 1;
/// VESA Coordinated Video Timings.
pub const V4L2_DV_BT_STD_CVT: u32 = 1 << 2;
/// VESA Generalized Timings Formula.
pub const V4L2_DV_BT_STD_GTF: u32 = 1 << 3;

/* Flags */
/// CVT/GTF specific: timing uses reduced blanking (CVT) or the 'Secondary
/// GTF' curve (GTF), allowing a higher resolution over the same bandwidth.
/// Read-only flag.
pub const V4L2_DV_FL_REDUCED_BLANKING: u32 = 1 << 0;
/// CEA-861 specific: set for CEA-861 formats with a framerate of a multiple
/// of six, which can be optionally played at 1 / 1.001 speed. Read-only
/// flag.
pub const V4L2_DV_FL_CAN_REDUCE_FPS: u32 = 1 << 1;
/// CEA-861 specific: only valid for video transmitters, cleared by
/// receivers. If set, the pixelclock used to set up the transmitter is
/// divided by 1.001 to stay compatible with 60 Hz based standards such as
/// NTSC and PAL-M.
pub const V4L2_DV_FL_REDUCED_FPS: u32 = 1 << 2;
/// Interlaced formats only: field 1 is one half-line longer and field 2 one
/// half-line shorter, so each field has exactly the same number of
/// half-lines.
pub const V4L2_DV_FL_HALF_LINE: u32 = 1 << 3;
/// Consumer Electronics (CE) video format: RGB encoding defaults to limited
/// range (16-235) rather than 0-255. All CEA-861 formats except 640x480 are
/// CE formats.
pub const V4L2_DV_FL_IS_CE_VIDEO: u32 = 1 << 4;

/* Total blanking and frame sizes */
pub const fn V4L2_DV_BT_BLANKING_WIDTH(bt: &v4l2_bt_timings) -> u32 {
    bt.hfrontporch + bt.hsync + bt.hbackporch
}
pub const fn V4L2_DV_BT_FRAME_WIDTH(bt: &v4l2_bt_timings) -> u32 {
    bt.width + V4L2_DV_BT_BLANKING_WIDTH(bt)
}
pub const fn V4L2_DV_BT_BLANKING_HEIGHT(bt: &v4l2_bt_timings) -> u32 {
    bt.vfrontporch + bt.vsync + bt.vbackporch + bt.il_vfrontporch + bt.il_vsync + bt.il_vbackporch
}
pub const fn V4L2_DV_BT_FRAME_HEIGHT(bt: &v4l2_bt_timings) -> u32 {
    bt.height + V4L2_DV_BT_BLANKING_HEIGHT(bt)
}

/// DV timings; `type` selects the union arm.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_dv_timings {
    pub type_: u32,
    pub u: v4l2_dv_timings_u,
}

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub union v4l2_dv_timings_u {
    /// BT.656/1120 timings.
    pub bt: v4l2_bt_timings,
    pub reserved: [u32; 32],
}

crate::impl_zeroed!(v4l2_dv_timings, v4l2_dv_timings_u);

/* Values for the type field */
/// BT.656/1120 timing type.
pub const V4L2_DV_BT_656_1120: u32 = 0;

/// DV timings enumeration, exchanged by `VIDIOC_ENUM_DV_TIMINGS`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_enum_dv_timings {
    /// Enumeration index.
    pub index: u32,
    /// Pad number for which to enumerate timings (v4l-subdev nodes only).
    pub pad: u32,
    /// Must be zeroed.
    pub reserved: [u32; 2],
    /// The timings for the given index.
    pub timings: v4l2_dv_timings,
}

crate::impl_zeroed!(v4l2_enum_dv_timings);

/// BT.656/BT.1120 timing capabilities.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_bt_timings_cap {
    /// Width in pixels.
    pub min_width: u32,
    pub max_width: u32,
    /// Height in lines.
    pub min_height: u32,
    pub max_height: u32,
    /// Pixel clock in Hz.
    pub min_pixelclock: u64,
    pub max_pixelclock: u64,
    /// Supported standards.
    pub standards: u32,
    /// Supported capabilities.
    pub capabilities: u32,
    /// Must be zeroed.
    pub reserved: [u32; 16],
}

/// Supports interlaced formats.
pub const V4L2_DV_BT_CAP_INTERLACED: u32 = 1 << 0;
/// Supports progressive formats.
pub const V4L2_DV_BT_CAP_PROGRESSIVE: u32 = 1 << 1;
/// Supports CVT/GTF reduced blanking.
pub const V4L2_DV_BT_CAP_REDUCED_BLANKING: u32 = 1 << 2;
/// Supports custom formats.
pub const V4L2_DV_BT_CAP_CUSTOM: u32 = 1 << 3;

/// DV timings capabilities, returned by `VIDIOC_DV_TIMINGS_CAP`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_dv_timings_cap {
    /// Type of the timings (same as in [`v4l2_dv_timings`]).
    pub type_: u32,
    /// Pad number for which to query capabilities (v4l-subdev nodes only).
    pub pad: u32,
    pub reserved: [u32; 2],
    pub u: v4l2_dv_timings_cap_u,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_dv_timings_cap_u {
    /// BT.656/1120 timing capabilities.
    pub bt: v4l2_bt_timings_cap,
    pub raw_data: [u32; 32],
}

crate::impl_zeroed!(v4l2_dv_timings_cap, v4l2_dv_timings_cap_u);

/// EDID blob exchanged by `VIDIOC_G_EDID` and `VIDIOC_S_EDID`. `edid`
/// points to userspace storage for `blocks` 128-byte EDID blocks starting
/// at `start_block`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_edid {
    pub pad: u32,
    pub start_block: u32,
    pub blocks: u32,
    pub reserved: [u32; 5],
    pub edid: *mut u8,
}

crate::impl_zeroed!(v4l2_edid);

const_assert_eq!(core::mem::size_of::<v4l2_standard>(), 72);
const_assert_eq!(core::mem::size_of::<v4l2_bt_timings>(), 124);
const_assert_eq!(core::mem::size_of::<v4l2_dv_timings>(), 132);
const_assert_eq!(core::mem::size_of::<v4l2_enum_dv_timings>(), 148);
const_assert_eq!(core::mem::size_of::<v4l2_bt_timings_cap>(), 104);
const_assert_eq!(core::mem::size_of::<v4l2_dv_timings_cap>(), 144);
