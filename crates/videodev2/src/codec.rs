// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! MPEG encoder/decoder commands and the encoder index.

use static_assertions::const_assert_eq;

pub const V4L2_ENC_IDX_FRAME_I: u32 = 0;
pub const V4L2_ENC_IDX_FRAME_P: u32 = 1;
pub const V4L2_ENC_IDX_FRAME_B: u32 = 2;
pub const V4L2_ENC_IDX_FRAME_MASK: u32 = 0xf;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_enc_idx_entry {
    pub offset: u64,
    pub pts: u64,
    pub length: u32,
    pub flags: u32,
    pub reserved: [u32; 2],
}

pub const V4L2_ENC_IDX_ENTRIES: usize = 64;

/// Encoder index, returned by `VIDIOC_G_ENC_INDEX`. `entries` counts the
/// valid elements of `entry`, `entries_cap` the capacity the driver can
/// report per call.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_enc_idx {
    pub entries: u32,
    pub entries_cap: u32,
    pub reserved: [u32; 4],
    pub entry: [v4l2_enc_idx_entry; V4L2_ENC_IDX_ENTRIES],
}

crate::impl_zeroed!(v4l2_enc_idx);

pub const V4L2_ENC_CMD_START: u32 = 0;
pub const V4L2_ENC_CMD_STOP: u32 = 1;
pub const V4L2_ENC_CMD_PAUSE: u32 = 2;
pub const V4L2_ENC_CMD_RESUME: u32 = 3;

/* Flags for V4L2_ENC_CMD_STOP */
pub const V4L2_ENC_CMD_STOP_AT_GOP_END: u32 = 1 << 0;

/// Encoder command, exchanged by `VIDIOC_ENCODER_CMD` and
/// `VIDIOC_TRY_ENCODER_CMD`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_encoder_cmd {
    pub cmd: u32,
    pub flags: u32,
    pub u: v4l2_encoder_cmd_u,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_encoder_cmd_u {
    pub raw: v4l2_encoder_cmd_raw,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_encoder_cmd_raw {
    pub data: [u32; 8],
}

crate::impl_zeroed!(v4l2_encoder_cmd, v4l2_encoder_cmd_u);

/* Decoder commands */
pub const V4L2_DEC_CMD_START: u32 = 0;
pub const V4L2_DEC_CMD_STOP: u32 = 1;
pub const V4L2_DEC_CMD_PAUSE: u32 = 2;
pub const V4L2_DEC_CMD_RESUME: u32 = 3;

/* Flags for V4L2_DEC_CMD_START */
pub const V4L2_DEC_CMD_START_MUTE_AUDIO: u32 = 1 << 0;

/* Flags for V4L2_DEC_CMD_PAUSE */
pub const V4L2_DEC_CMD_PAUSE_TO_BLACK: u32 = 1 << 0;

/* Flags for V4L2_DEC_CMD_STOP */
pub const V4L2_DEC_CMD_STOP_TO_BLACK: u32 = 1 << 0;
pub const V4L2_DEC_CMD_STOP_IMMEDIATELY: u32 = 1 << 1;

/* Play format requirements (returned by the driver): */
/// The decoder has no special format requirements.
pub const V4L2_DEC_START_FMT_NONE: u32 = 0;
/// The decoder requires full GOPs.
pub const V4L2_DEC_START_FMT_GOP: u32 = 1;

/// Decoder command, exchanged by `VIDIOC_DECODER_CMD` and
/// `VIDIOC_TRY_DECODER_CMD`. Must be zeroed before use by the
/// application so it can be extended safely in the future.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_decoder_cmd {
    pub cmd: u32,
    pub flags: u32,
    pub u: v4l2_decoder_cmd_u,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_decoder_cmd_u {
    pub stop: v4l2_decoder_cmd_stop,
    pub start: v4l2_decoder_cmd_start,
    pub raw: v4l2_decoder_cmd_raw,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_decoder_cmd_stop {
    pub pts: u64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_decoder_cmd_start {
    /// 0 or 1000 specifies normal speed, 1 forward single stepping, -1
    /// backward single stepping, >1 playback at speed/1000 of normal,
    /// <-1 reverse playback at (-speed/1000) of normal.
    pub speed: i32,
    pub format: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_decoder_cmd_raw {
    pub data: [u32; 16],
}

crate::impl_zeroed!(v4l2_decoder_cmd, v4l2_decoder_cmd_u);

const_assert_eq!(core::mem::size_of::<v4l2_enc_idx_entry>(), 32);
const_assert_eq!(core::mem::size_of::<v4l2_enc_idx>(), 2072);
const_assert_eq!(core::mem::size_of::<v4l2_encoder_cmd>(), 40);
const_assert_eq!(core::mem::size_of::<v4l2_decoder_cmd>(), 72);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enc_idx_entry_array_offset() {
        assert_eq!(core::mem::offset_of!(v4l2_enc_idx, entry), 24);
    }

    #[test]
    fn test_decoder_cmd_raw_covers_every_arm() {
        let mut cmd = v4l2_decoder_cmd::zeroed();
        cmd.cmd = V4L2_DEC_CMD_START;
        cmd.u.start = v4l2_decoder_cmd_start {
            speed: 1000,
            format: V4L2_DEC_START_FMT_GOP,
        };
        unsafe {
            assert_eq!({ cmd.u.raw.data }[0], 1000);
            assert_eq!({ cmd.u.raw.data }[1], V4L2_DEC_START_FMT_GOP);
        }
    }
}
