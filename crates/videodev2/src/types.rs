// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Core enumerations, geometry records, and the device capability record.

use static_assertions::const_assert_eq;

/* enum v4l2_field */
/// Driver picks whichever of none/top/bottom/interlaced fits.
pub const V4L2_FIELD_ANY: u32 = 0;
/// Progressive; this device has no fields.
pub const V4L2_FIELD_NONE: u32 = 1;
/// Top field only.
pub const V4L2_FIELD_TOP: u32 = 2;
/// Bottom field only.
pub const V4L2_FIELD_BOTTOM: u32 = 3;
/// Both fields interlaced.
pub const V4L2_FIELD_INTERLACED: u32 = 4;
/// Both fields sequential into one buffer, top-bottom order.
pub const V4L2_FIELD_SEQ_TB: u32 = 5;
/// Both fields sequential into one buffer, bottom-top order.
pub const V4L2_FIELD_SEQ_BT: u32 = 6;
/// Both fields alternating into separate buffers.
pub const V4L2_FIELD_ALTERNATE: u32 = 7;
/// Interlaced, top field transmitted first.
pub const V4L2_FIELD_INTERLACED_TB: u32 = 8;
/// Interlaced, bottom field transmitted first.
pub const V4L2_FIELD_INTERLACED_BT: u32 = 9;

pub const fn V4L2_FIELD_HAS_TOP(field: u32) -> bool {
    field == V4L2_FIELD_TOP
        || field == V4L2_FIELD_INTERLACED
        || field == V4L2_FIELD_INTERLACED_TB
        || field == V4L2_FIELD_INTERLACED_BT
        || field == V4L2_FIELD_SEQ_TB
        || field == V4L2_FIELD_SEQ_BT
}

pub const fn V4L2_FIELD_HAS_BOTTOM(field: u32) -> bool {
    field == V4L2_FIELD_BOTTOM
        || field == V4L2_FIELD_INTERLACED
        || field == V4L2_FIELD_INTERLACED_TB
        || field == V4L2_FIELD_INTERLACED_BT
        || field == V4L2_FIELD_SEQ_TB
        || field == V4L2_FIELD_SEQ_BT
}

pub const fn V4L2_FIELD_HAS_BOTH(field: u32) -> bool {
    field == V4L2_FIELD_INTERLACED
        || field == V4L2_FIELD_INTERLACED_TB
        || field == V4L2_FIELD_INTERLACED_BT
        || field == V4L2_FIELD_SEQ_TB
        || field == V4L2_FIELD_SEQ_BT
}

pub const fn V4L2_FIELD_HAS_T_OR_B(field: u32) -> bool {
    field == V4L2_FIELD_BOTTOM || field == V4L2_FIELD_TOP || field == V4L2_FIELD_ALTERNATE
}

/* enum v4l2_buf_type */
pub const V4L2_BUF_TYPE_VIDEO_CAPTURE: u32 = 1;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT: u32 = 2;
pub const V4L2_BUF_TYPE_VIDEO_OVERLAY: u32 = 3;
pub const V4L2_BUF_TYPE_VBI_CAPTURE: u32 = 4;
pub const V4L2_BUF_TYPE_VBI_OUTPUT: u32 = 5;
pub const V4L2_BUF_TYPE_SLICED_VBI_CAPTURE: u32 = 6;
pub const V4L2_BUF_TYPE_SLICED_VBI_OUTPUT: u32 = 7;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY: u32 = 8;
pub const V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE: u32 = 9;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE: u32 = 10;
pub const V4L2_BUF_TYPE_SDR_CAPTURE: u32 = 11;
/// Deprecated, do not use.
pub const V4L2_BUF_TYPE_PRIVATE: u32 = 0x80;

pub const fn V4L2_TYPE_IS_MULTIPLANAR(type_: u32) -> bool {
    type_ == V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE || type_ == V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE
}

pub const fn V4L2_TYPE_IS_OUTPUT(type_: u32) -> bool {
    type_ == V4L2_BUF_TYPE_VIDEO_OUTPUT
        || type_ == V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE
        || type_ == V4L2_BUF_TYPE_VIDEO_OVERLAY
        || type_ == V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY
        || type_ == V4L2_BUF_TYPE_VBI_OUTPUT
        || type_ == V4L2_BUF_TYPE_SLICED_VBI_OUTPUT
}

/* enum v4l2_tuner_type */
pub const V4L2_TUNER_RADIO: u32 = 1;
pub const V4L2_TUNER_ANALOG_TV: u32 = 2;
pub const V4L2_TUNER_DIGITAL_TV: u32 = 3;
pub const V4L2_TUNER_ADC: u32 = 4;
pub const V4L2_TUNER_RF: u32 = 5;

/* enum v4l2_memory */
pub const V4L2_MEMORY_MMAP: u32 = 1;
pub const V4L2_MEMORY_USERPTR: u32 = 2;
pub const V4L2_MEMORY_OVERLAY: u32 = 3;
pub const V4L2_MEMORY_DMABUF: u32 = 4;

/* enum v4l2_priority */
pub const V4L2_PRIORITY_UNSET: u32 = 0;
pub const V4L2_PRIORITY_BACKGROUND: u32 = 1;
pub const V4L2_PRIORITY_INTERACTIVE: u32 = 2;
pub const V4L2_PRIORITY_RECORD: u32 = 3;
pub const V4L2_PRIORITY_DEFAULT: u32 = V4L2_PRIORITY_INTERACTIVE;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct v4l2_rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_ext_rect {
    pub r: v4l2_rect,
    pub reserved: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct v4l2_point {
    pub x: u32,
    pub y: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct v4l2_fract {
    pub numerator: u32,
    pub denominator: u32,
}

/// Frame timecode, based on SMPTE timecodes.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_timecode {
    pub type_: u32,
    pub flags: u32,
    pub frames: u8,
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub userbits: [u8; 4],
}

/*  Timecode type  */
pub const V4L2_TC_TYPE_24FPS: u32 = 1;
pub const V4L2_TC_TYPE_25FPS: u32 = 2;
pub const V4L2_TC_TYPE_30FPS: u32 = 3;
pub const V4L2_TC_TYPE_50FPS: u32 = 4;
pub const V4L2_TC_TYPE_60FPS: u32 = 5;

/*  Timecode flags  */
/// "drop-frame" mode
pub const V4L2_TC_FLAG_DROPFRAME: u32 = 0x0001;
pub const V4L2_TC_FLAG_COLORFRAME: u32 = 0x0002;
pub const V4L2_TC_USERBITS_field: u32 = 0x000C;
pub const V4L2_TC_USERBITS_USERDEFINED: u32 = 0x0000;
pub const V4L2_TC_USERBITS_8BITCHARS: u32 = 0x0008;

/// Device capabilities, returned by `VIDIOC_QUERYCAP`.
///
/// `capabilities` describes the physical device as a whole and is the
/// bitwise union of `device_caps` across every node the device exposes;
/// `device_caps` is what this particular node can do.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct v4l2_capability {
    /// Name of the driver module (e.g. "bttv").
    pub driver: [u8; 16],
    /// Name of the card (e.g. "Hauppauge WinTV").
    pub card: [u8; 32],
    /// Name of the bus (e.g. "PCI:" + pci name).
    pub bus_info: [u8; 32],
    pub version: u32,
    pub capabilities: u32,
    pub device_caps: u32,
    pub reserved: [u32; 3],
}

impl Default for v4l2_capability {
    fn default() -> Self {
        Self::zeroed()
    }
}

crate::impl_zeroed!(v4l2_capability);

const_assert_eq!(core::mem::size_of::<v4l2_capability>(), 104);
const_assert_eq!(core::mem::size_of::<v4l2_timecode>(), 16);
const_assert_eq!(core::mem::size_of::<v4l2_rect>(), 16);
const_assert_eq!(core::mem::size_of::<v4l2_ext_rect>(), 32);

/* Values for the v4l2_capability 'capabilities' field */
/// Is a video capture device.
pub const V4L2_CAP_VIDEO_CAPTURE: u32 = 0x00000001;
/// Is a video output device.
pub const V4L2_CAP_VIDEO_OUTPUT: u32 = 0x00000002;
/// Can do video overlay.
pub const V4L2_CAP_VIDEO_OVERLAY: u32 = 0x00000004;
/// Is a raw VBI capture device.
pub const V4L2_CAP_VBI_CAPTURE: u32 = 0x00000010;
/// Is a raw VBI output device.
pub const V4L2_CAP_VBI_OUTPUT: u32 = 0x00000020;
/// Is a sliced VBI capture device.
pub const V4L2_CAP_SLICED_VBI_CAPTURE: u32 = 0x00000040;
/// Is a sliced VBI output device.
pub const V4L2_CAP_SLICED_VBI_OUTPUT: u32 = 0x00000080;
/// RDS data capture.
pub const V4L2_CAP_RDS_CAPTURE: u32 = 0x00000100;
/// Can do video output overlay.
pub const V4L2_CAP_VIDEO_OUTPUT_OVERLAY: u32 = 0x00000200;
/// Can do hardware frequency seek.
pub const V4L2_CAP_HW_FREQ_SEEK: u32 = 0x00000400;
/// Is an RDS encoder.
pub const V4L2_CAP_RDS_OUTPUT: u32 = 0x00000800;

/// Is a video capture device that supports multiplanar formats.
pub const V4L2_CAP_VIDEO_CAPTURE_MPLANE: u32 = 0x00001000;
/// Is a video output device that supports multiplanar formats.
pub const V4L2_CAP_VIDEO_OUTPUT_MPLANE: u32 = 0x00002000;
/// Is a video mem-to-mem device that supports multiplanar formats.
pub const V4L2_CAP_VIDEO_M2M_MPLANE: u32 = 0x00004000;
/// Is a video mem-to-mem device.
pub const V4L2_CAP_VIDEO_M2M: u32 = 0x00008000;

/// Has a tuner.
pub const V4L2_CAP_TUNER: u32 = 0x00010000;
/// Has audio support.
pub const V4L2_CAP_AUDIO: u32 = 0x00020000;
/// Is a radio device.
pub const V4L2_CAP_RADIO: u32 = 0x00040000;
/// Has a modulator.
pub const V4L2_CAP_MODULATOR: u32 = 0x00080000;

/// Is a SDR capture device.
pub const V4L2_CAP_SDR_CAPTURE: u32 = 0x00100000;
/// Supports the extended pixel format.
pub const V4L2_CAP_EXT_PIX_FORMAT: u32 = 0x00200000;

/// read/write system calls.
pub const V4L2_CAP_READWRITE: u32 = 0x01000000;
/// Async I/O.
pub const V4L2_CAP_ASYNCIO: u32 = 0x02000000;
/// Streaming I/O ioctls.
pub const V4L2_CAP_STREAMING: u32 = 0x04000000;

/// Sets the device_caps field.
pub const V4L2_CAP_DEVICE_CAPS: u32 = 0x80000000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_predicates() {
        assert!(V4L2_FIELD_HAS_TOP(V4L2_FIELD_SEQ_BT));
        assert!(V4L2_FIELD_HAS_BOTTOM(V4L2_FIELD_SEQ_TB));
        assert!(!V4L2_FIELD_HAS_TOP(V4L2_FIELD_BOTTOM));
        assert!(!V4L2_FIELD_HAS_BOTTOM(V4L2_FIELD_TOP));

        // ALTERNATE carries a single field per buffer: one of top/bottom but
        // never both.
        assert!(V4L2_FIELD_HAS_T_OR_B(V4L2_FIELD_ALTERNATE));
        assert!(!V4L2_FIELD_HAS_BOTH(V4L2_FIELD_ALTERNATE));
        assert!(V4L2_FIELD_HAS_BOTH(V4L2_FIELD_INTERLACED_BT));
        assert!(!V4L2_FIELD_HAS_T_OR_B(V4L2_FIELD_INTERLACED));
    }

    #[test]
    fn test_buf_type_predicates() {
        assert!(V4L2_TYPE_IS_MULTIPLANAR(V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE));
        assert!(V4L2_TYPE_IS_MULTIPLANAR(V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE));
        assert!(!V4L2_TYPE_IS_MULTIPLANAR(V4L2_BUF_TYPE_VIDEO_CAPTURE));

        assert!(V4L2_TYPE_IS_OUTPUT(V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE));
        assert!(V4L2_TYPE_IS_OUTPUT(V4L2_BUF_TYPE_VIDEO_OVERLAY));
        assert!(!V4L2_TYPE_IS_OUTPUT(V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE));
        assert!(!V4L2_TYPE_IS_OUTPUT(V4L2_BUF_TYPE_SDR_CAPTURE));
    }

    #[test]
    fn test_golden_enum_values() {
        assert_eq!(V4L2_BUF_TYPE_SDR_CAPTURE, 11);
        assert_eq!(V4L2_BUF_TYPE_PRIVATE, 0x80);
        assert_eq!(V4L2_MEMORY_DMABUF, 4);
        assert_eq!(V4L2_TUNER_RF, 5);
        assert_eq!(V4L2_FIELD_INTERLACED_BT, 9);
        assert_eq!(V4L2_PRIORITY_DEFAULT, V4L2_PRIORITY_INTERACTIVE);
    }

    #[test]
    fn test_capability_offsets() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(v4l2_capability, driver), 0);
        assert_eq!(offset_of!(v4l2_capability, card), 16);
        assert_eq!(offset_of!(v4l2_capability, bus_info), 48);
        assert_eq!(offset_of!(v4l2_capability, version), 80);
        assert_eq!(offset_of!(v4l2_capability, capabilities), 84);
        assert_eq!(offset_of!(v4l2_capability, device_caps), 88);
    }
}
