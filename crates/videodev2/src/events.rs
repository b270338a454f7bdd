// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Event subscription and dequeueing records.

use libc::timespec;
use static_assertions::const_assert_eq;

pub const V4L2_EVENT_ALL: u32 = 0;
pub const V4L2_EVENT_VSYNC: u32 = 1;
pub const V4L2_EVENT_EOS: u32 = 2;
pub const V4L2_EVENT_CTRL: u32 = 3;
pub const V4L2_EVENT_FRAME_SYNC: u32 = 4;
pub const V4L2_EVENT_SOURCE_CHANGE: u32 = 5;
pub const V4L2_EVENT_MOTION_DET: u32 = 6;
pub const V4L2_EVENT_PRIVATE_START: u32 = 0x08000000;

/// Payload for `V4L2_EVENT_VSYNC`.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_event_vsync {
    /// Can be V4L2_FIELD_ANY, _NONE, _TOP or _BOTTOM.
    pub field: u8,
}

/* Payload for V4L2_EVENT_CTRL */
pub const V4L2_EVENT_CTRL_CH_VALUE: u32 = 1 << 0;
pub const V4L2_EVENT_CTRL_CH_FLAGS: u32 = 1 << 1;
pub const V4L2_EVENT_CTRL_CH_RANGE: u32 = 1 << 2;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_event_ctrl {
    pub changes: u32,
    /// enum v4l2_ctrl_type
    pub type_: u32,
    pub u: v4l2_event_ctrl_u,
    pub flags: u32,
    pub minimum: i32,
    pub maximum: i32,
    pub step: i32,
    pub default_value: i32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_event_ctrl_u {
    pub value: i32,
    pub value64: i64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_event_frame_sync {
    pub frame_sequence: u32,
}

pub const V4L2_EVENT_SRC_CH_RESOLUTION: u32 = 1 << 0;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_event_src_change {
    pub changes: u32,
}

pub const V4L2_EVENT_MD_FL_HAVE_FRAME_SEQ: u32 = 1 << 0;

/// Motion detection event payload. `frame_sequence` is only valid when
/// `flags` has `V4L2_EVENT_MD_FL_HAVE_FRAME_SEQ` set; `region_mask` tells
/// which regions detected motion.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_event_motion_det {
    pub flags: u32,
    pub frame_sequence: u32,
    pub region_mask: u32,
}

/// Dequeued event, returned by `VIDIOC_DQEVENT`. `type` selects the
/// payload arm; `pending` counts further events still queued.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_event {
    pub type_: u32,
    pub u: v4l2_event_u,
    pub pending: u32,
    pub sequence: u32,
    pub timestamp: timespec,
    pub id: u32,
    pub reserved: [u32; 8],
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_event_u {
    pub vsync: v4l2_event_vsync,
    pub ctrl: v4l2_event_ctrl,
    pub frame_sync: v4l2_event_frame_sync,
    pub src_change: v4l2_event_src_change,
    pub motion_det: v4l2_event_motion_det,
    pub data: [u8; 64],
}

crate::impl_zeroed!(v4l2_event, v4l2_event_u, v4l2_event_ctrl, v4l2_event_ctrl_u);

pub const V4L2_EVENT_SUB_FL_SEND_INITIAL: u32 = 1 << 0;
pub const V4L2_EVENT_SUB_FL_ALLOW_FEEDBACK: u32 = 1 << 1;

/// Event subscription, used with `VIDIOC_SUBSCRIBE_EVENT` and
/// `VIDIOC_UNSUBSCRIBE_EVENT`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_event_subscription {
    pub type_: u32,
    pub id: u32,
    pub flags: u32,
    pub reserved: [u32; 5],
}

const_assert_eq!(core::mem::size_of::<v4l2_event_ctrl>(), 40);
const_assert_eq!(core::mem::size_of::<v4l2_event_subscription>(), 32);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_event_layout_lp64() {
        assert_eq!(size_of::<v4l2_event>(), 136);
        assert_eq!(offset_of!(v4l2_event, u), 8);
        assert_eq!(offset_of!(v4l2_event, pending), 72);
        assert_eq!(offset_of!(v4l2_event, timestamp), 80);
        assert_eq!(offset_of!(v4l2_event, id), 96);
    }

    #[test]
    fn test_payload_arms_fit_in_data() {
        assert!(size_of::<v4l2_event_ctrl>() <= 64);
        assert!(size_of::<v4l2_event_motion_det>() <= 64);
        assert_eq!(size_of::<v4l2_event_u>(), 64);
    }

    #[test]
    fn test_event_type_values() {
        assert_eq!(V4L2_EVENT_SOURCE_CHANGE, 5);
        assert_eq!(V4L2_EVENT_MOTION_DET, 6);
        assert!(V4L2_EVENT_PRIVATE_START > V4L2_EVENT_MOTION_DET);
    }
}
