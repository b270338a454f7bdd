// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Video inputs and outputs, tuning, RDS, and audio.

use static_assertions::const_assert_eq;

use crate::standards::v4l2_std_id;

/// Video input description, returned by `VIDIOC_ENUMINPUT`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_input {
    /// Which input.
    pub index: u32,
    /// Label.
    pub name: [u8; 32],
    /// Type of input.
    pub type_: u32,
    /// Associated audios (bitfield).
    pub audioset: u32,
    /// enum v4l2_tuner_type
    pub tuner: u32,
    pub std: v4l2_std_id,
    pub status: u32,
    pub capabilities: u32,
    pub reserved: [u32; 3],
}

crate::impl_zeroed!(v4l2_input);

/*  Values for the 'type' field */
pub const V4L2_INPUT_TYPE_TUNER: u32 = 1;
pub const V4L2_INPUT_TYPE_CAMERA: u32 = 2;

/* field 'status' - general */
/// Attached device is off.
pub const V4L2_IN_ST_NO_POWER: u32 = 0x00000001;
pub const V4L2_IN_ST_NO_SIGNAL: u32 = 0x00000002;
pub const V4L2_IN_ST_NO_COLOR: u32 = 0x00000004;

/* field 'status' - sensor orientation; both bits set means upside down */
/// Frames are flipped horizontally.
pub const V4L2_IN_ST_HFLIP: u32 = 0x00000010;
/// Frames are flipped vertically.
pub const V4L2_IN_ST_VFLIP: u32 = 0x00000020;

/* field 'status' - analog */
/// No horizontal sync lock.
pub const V4L2_IN_ST_NO_H_LOCK: u32 = 0x00000100;
/// Color killer is active.
pub const V4L2_IN_ST_COLOR_KILL: u32 = 0x00000200;

/* field 'status' - digital */
/// No synchronization lock.
pub const V4L2_IN_ST_NO_SYNC: u32 = 0x00010000;
/// No equalizer lock.
pub const V4L2_IN_ST_NO_EQU: u32 = 0x00020000;
/// Carrier recovery failed.
pub const V4L2_IN_ST_NO_CARRIER: u32 = 0x00040000;

/* field 'status' - VCR and set-top box */
/// Macrovision detected.
pub const V4L2_IN_ST_MACROVISION: u32 = 0x01000000;
/// Conditional access denied.
pub const V4L2_IN_ST_NO_ACCESS: u32 = 0x02000000;
/// VTR time constant.
pub const V4L2_IN_ST_VTR: u32 = 0x04000000;

/* capabilities flags */
/// Supports S_DV_TIMINGS.
pub const V4L2_IN_CAP_DV_TIMINGS: u32 = 0x00000002;
/// For compatibility.
pub const V4L2_IN_CAP_CUSTOM_TIMINGS: u32 = V4L2_IN_CAP_DV_TIMINGS;
/// Supports S_STD.
pub const V4L2_IN_CAP_STD: u32 = 0x00000004;
/// Supports setting the native size.
pub const V4L2_IN_CAP_NATIVE_SIZE: u32 = 0x00000008;

/// Video output description, returned by `VIDIOC_ENUMOUTPUT`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_output {
    /// Which output.
    pub index: u32,
    /// Label.
    pub name: [u8; 32],
    /// Type of output.
    pub type_: u32,
    /// Associated audios (bitfield).
    pub audioset: u32,
    /// Associated modulator.
    pub modulator: u32,
    pub std: v4l2_std_id,
    pub capabilities: u32,
    pub reserved: [u32; 3],
}

crate::impl_zeroed!(v4l2_output);

/*  Values for the 'type' field */
pub const V4L2_OUTPUT_TYPE_MODULATOR: u32 = 1;
pub const V4L2_OUTPUT_TYPE_ANALOG: u32 = 2;
pub const V4L2_OUTPUT_TYPE_ANALOGVGAOVERLAY: u32 = 3;

/* capabilities flags */
/// Supports S_DV_TIMINGS.
pub const V4L2_OUT_CAP_DV_TIMINGS: u32 = 0x00000002;
/// For compatibility.
pub const V4L2_OUT_CAP_CUSTOM_TIMINGS: u32 = V4L2_OUT_CAP_DV_TIMINGS;
/// Supports S_STD.
pub const V4L2_OUT_CAP_STD: u32 = 0x00000004;
/// Supports setting the native size.
pub const V4L2_OUT_CAP_NATIVE_SIZE: u32 = 0x00000008;

/// Tuner state, exchanged by `VIDIOC_G_TUNER` and `VIDIOC_S_TUNER`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_tuner {
    pub index: u32,
    pub name: [u8; 32],
    /// enum v4l2_tuner_type
    pub type_: u32,
    pub capability: u32,
    pub rangelow: u32,
    pub rangehigh: u32,
    pub rxsubchans: u32,
    pub audmode: u32,
    pub signal: i32,
    pub afc: i32,
    pub reserved: [u32; 4],
}

/// Modulator state, exchanged by `VIDIOC_G_MODULATOR` and
/// `VIDIOC_S_MODULATOR`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_modulator {
    pub index: u32,
    pub name: [u8; 32],
    pub capability: u32,
    pub rangelow: u32,
    pub rangehigh: u32,
    pub txsubchans: u32,
    pub reserved: [u32; 4],
}

crate::impl_zeroed!(v4l2_tuner, v4l2_modulator);

/*  Flags for the 'capability' field */
pub const V4L2_TUNER_CAP_LOW: u32 = 0x0001;
pub const V4L2_TUNER_CAP_NORM: u32 = 0x0002;
pub const V4L2_TUNER_CAP_HWSEEK_BOUNDED: u32 = 0x0004;
pub const V4L2_TUNER_CAP_HWSEEK_WRAP: u32 = 0x0008;
pub const V4L2_TUNER_CAP_STEREO: u32 = 0x0010;
pub const V4L2_TUNER_CAP_LANG2: u32 = 0x0020;
pub const V4L2_TUNER_CAP_SAP: u32 = 0x0020;
pub const V4L2_TUNER_CAP_LANG1: u32 = 0x0040;
pub const V4L2_TUNER_CAP_RDS: u32 = 0x0080;
pub const V4L2_TUNER_CAP_RDS_BLOCK_IO: u32 = 0x0100;
pub const V4L2_TUNER_CAP_RDS_CONTROLS: u32 = 0x0200;
pub const V4L2_TUNER_CAP_FREQ_BANDS: u32 = 0x0400;
pub const V4L2_TUNER_CAP_HWSEEK_PROG_LIM: u32 = 0x0800;
pub const V4L2_TUNER_CAP_1HZ: u32 = 0x1000;

/*  Flags for the 'rxsubchans' field */
pub const V4L2_TUNER_SUB_MONO: u32 = 0x0001;
pub const V4L2_TUNER_SUB_STEREO: u32 = 0x0002;
pub const V4L2_TUNER_SUB_LANG2: u32 = 0x0004;
pub const V4L2_TUNER_SUB_SAP: u32 = 0x0004;
pub const V4L2_TUNER_SUB_LANG1: u32 = 0x0008;
pub const V4L2_TUNER_SUB_RDS: u32 = 0x0010;

/*  Values for the 'audmode' field */
pub const V4L2_TUNER_MODE_MONO: u32 = 0x0000;
pub const V4L2_TUNER_MODE_STEREO: u32 = 0x0001;
pub const V4L2_TUNER_MODE_LANG2: u32 = 0x0002;
pub const V4L2_TUNER_MODE_SAP: u32 = 0x0002;
pub const V4L2_TUNER_MODE_LANG1: u32 = 0x0003;
pub const V4L2_TUNER_MODE_LANG1_LANG2: u32 = 0x0004;

/// Tuner or modulator frequency, exchanged by `VIDIOC_G_FREQUENCY` and
/// `VIDIOC_S_FREQUENCY`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_frequency {
    pub tuner: u32,
    /// enum v4l2_tuner_type
    pub type_: u32,
    pub frequency: u32,
    pub reserved: [u32; 8],
}

pub const V4L2_BAND_MODULATION_VSB: u32 = 1 << 1;
pub const V4L2_BAND_MODULATION_FM: u32 = 1 << 2;
pub const V4L2_BAND_MODULATION_AM: u32 = 1 << 3;

/// Frequency band description, returned by `VIDIOC_ENUM_FREQ_BANDS`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_frequency_band {
    pub tuner: u32,
    /// enum v4l2_tuner_type
    pub type_: u32,
    pub index: u32,
    pub capability: u32,
    pub rangelow: u32,
    pub rangehigh: u32,
    pub modulation: u32,
    pub reserved: [u32; 9],
}

/// Hardware frequency seek request, used with `VIDIOC_S_HW_FREQ_SEEK`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_hw_freq_seek {
    pub tuner: u32,
    /// enum v4l2_tuner_type
    pub type_: u32,
    pub seek_upward: u32,
    pub wrap_around: u32,
    pub spacing: u32,
    pub rangelow: u32,
    pub rangehigh: u32,
    pub reserved: [u32; 5],
}

/// One RDS block as read from or written to a radio device.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_rds_data {
    pub lsb: u8,
    pub msb: u8,
    pub block: u8,
}

pub const V4L2_RDS_BLOCK_MSK: u8 = 0x7;
pub const V4L2_RDS_BLOCK_A: u8 = 0;
pub const V4L2_RDS_BLOCK_B: u8 = 1;
pub const V4L2_RDS_BLOCK_C: u8 = 2;
pub const V4L2_RDS_BLOCK_D: u8 = 3;
pub const V4L2_RDS_BLOCK_C_ALT: u8 = 4;
pub const V4L2_RDS_BLOCK_INVALID: u8 = 7;

pub const V4L2_RDS_BLOCK_CORRECTED: u8 = 0x40;
pub const V4L2_RDS_BLOCK_ERROR: u8 = 0x80;

/// Audio input description and selection.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_audio {
    pub index: u32,
    pub name: [u8; 32],
    pub capability: u32,
    pub mode: u32,
    pub reserved: [u32; 2],
}

/*  Flags for the 'capability' field */
pub const V4L2_AUDCAP_STEREO: u32 = 0x00001;
pub const V4L2_AUDCAP_AVL: u32 = 0x00002;

/*  Flags for the 'mode' field */
pub const V4L2_AUDMODE_AVL: u32 = 0x00001;

/// Audio output description and selection.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_audioout {
    pub index: u32,
    pub name: [u8; 32],
    pub capability: u32,
    pub mode: u32,
    pub reserved: [u32; 2],
}

crate::impl_zeroed!(v4l2_audio, v4l2_audioout);

const_assert_eq!(core::mem::size_of::<v4l2_input>(), 80);
const_assert_eq!(core::mem::size_of::<v4l2_output>(), 72);
const_assert_eq!(core::mem::size_of::<v4l2_tuner>(), 84);
const_assert_eq!(core::mem::size_of::<v4l2_modulator>(), 68);
const_assert_eq!(core::mem::size_of::<v4l2_frequency>(), 44);
const_assert_eq!(core::mem::size_of::<v4l2_frequency_band>(), 64);
const_assert_eq!(core::mem::size_of::<v4l2_hw_freq_seek>(), 48);
const_assert_eq!(core::mem::size_of::<v4l2_rds_data>(), 3);
const_assert_eq!(core::mem::size_of::<v4l2_audio>(), 52);
const_assert_eq!(core::mem::size_of::<v4l2_audioout>(), 52);
