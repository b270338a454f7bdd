// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Control get/set and query records.

use libc::c_char;
use static_assertions::const_assert_eq;

use crate::types::v4l2_point;

/// Simple control value, exchanged by `VIDIOC_G_CTRL` and `VIDIOC_S_CTRL`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_control {
    pub id: u32,
    pub value: i32,
}

/// One extended control in a [`v4l2_ext_controls`] batch. For pointer-type
/// controls `size` gives the payload size in bytes and the union carries
/// the userspace pointer.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_ext_control {
    pub id: u32,
    pub size: u32,
    pub reserved2: [u32; 1],
    pub u: v4l2_ext_control_u,
}

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub union v4l2_ext_control_u {
    pub value: i32,
    pub value64: i64,
    pub string: *mut c_char,
    pub p_u8: *mut u8,
    pub p_u16: *mut u16,
    pub p_u32: *mut u32,
    pub ptr: *mut libc::c_void,
    pub p_point: *mut v4l2_point,
}

/// Batch of extended controls, exchanged by `VIDIOC_G_EXT_CTRLS`,
/// `VIDIOC_S_EXT_CTRLS`, and `VIDIOC_TRY_EXT_CTRLS`. On failure
/// `error_idx` reports which control in the array caused the error.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_ext_controls {
    pub ctrl_class: u32,
    pub count: u32,
    pub error_idx: u32,
    pub reserved: [u32; 2],
    pub controls: *mut v4l2_ext_control,
}

crate::impl_zeroed!(v4l2_ext_control, v4l2_ext_control_u, v4l2_ext_controls);

pub const V4L2_CTRL_ID_MASK: u32 = 0x0fffffff;
pub const fn V4L2_CTRL_ID2CLASS(id: u32) -> u32 {
    id & 0x0fff0000
}
pub const fn V4L2_CTRL_DRIVER_PRIV(id: u32) -> bool {
    (id & 0xffff) >= 0x1000
}
pub const V4L2_CTRL_MAX_DIMS: usize = 4;

/* enum v4l2_ctrl_type */
pub const V4L2_CTRL_TYPE_INTEGER: u32 = 1;
pub const V4L2_CTRL_TYPE_BOOLEAN: u32 = 2;
pub const V4L2_CTRL_TYPE_MENU: u32 = 3;
pub const V4L2_CTRL_TYPE_BUTTON: u32 = 4;
pub const V4L2_CTRL_TYPE_INTEGER64: u32 = 5;
pub const V4L2_CTRL_TYPE_CTRL_CLASS: u32 = 6;
pub const V4L2_CTRL_TYPE_STRING: u32 = 7;
pub const V4L2_CTRL_TYPE_BITMASK: u32 = 8;
pub const V4L2_CTRL_TYPE_INTEGER_MENU: u32 = 9;

/* Compound types are >= 0x0100 */
pub const V4L2_CTRL_COMPOUND_TYPES: u32 = 0x0100;
pub const V4L2_CTRL_TYPE_U8: u32 = 0x0100;
pub const V4L2_CTRL_TYPE_U16: u32 = 0x0101;
pub const V4L2_CTRL_TYPE_U32: u32 = 0x0102;
pub const V4L2_CTRL_TYPE_POINT: u32 = 0x01ff;

/// Control description, returned by `VIDIOC_QUERYCTRL`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct v4l2_queryctrl {
    pub id: u32,
    /// enum v4l2_ctrl_type
    pub type_: u32,
    pub name: [u8; 32],
    /// Note signedness.
    pub minimum: i32,
    pub maximum: i32,
    pub step: i32,
    pub default_value: i32,
    pub flags: u32,
    pub reserved: [u32; 2],
}

crate::impl_zeroed!(v4l2_queryctrl);

impl Default for v4l2_queryctrl {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Extended control description, returned by `VIDIOC_QUERY_EXT_CTRL`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_query_ext_ctrl {
    pub id: u32,
    pub type_: u32,
    pub name: [c_char; 32],
    pub minimum: i64,
    pub maximum: i64,
    pub step: u64,
    pub default_value: i64,
    pub flags: u32,
    pub elem_size: u32,
    pub elems: u32,
    pub nr_of_dims: u32,
    pub dims: [u32; V4L2_CTRL_MAX_DIMS],
    pub reserved: [u32; 32],
}

crate::impl_zeroed!(v4l2_query_ext_ctrl);

/// Menu item description, returned by `VIDIOC_QUERYMENU`. Integer menus
/// carry `value`, ordinary menus carry `name`.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_querymenu {
    pub id: u32,
    pub index: u32,
    pub u: v4l2_querymenu_u,
    pub reserved: u32,
}

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub union v4l2_querymenu_u {
    pub name: [u8; 32],
    pub value: i64,
}

crate::impl_zeroed!(v4l2_querymenu);

/*  Control flags  */
pub const V4L2_CTRL_FLAG_DISABLED: u32 = 0x0001;
pub const V4L2_CTRL_FLAG_GRABBED: u32 = 0x0002;
pub const V4L2_CTRL_FLAG_READ_ONLY: u32 = 0x0004;
pub const V4L2_CTRL_FLAG_UPDATE: u32 = 0x0008;
pub const V4L2_CTRL_FLAG_INACTIVE: u32 = 0x0010;
pub const V4L2_CTRL_FLAG_SLIDER: u32 = 0x0020;
pub const V4L2_CTRL_FLAG_WRITE_ONLY: u32 = 0x0040;
pub const V4L2_CTRL_FLAG_VOLATILE: u32 = 0x0080;
pub const V4L2_CTRL_FLAG_HAS_PAYLOAD: u32 = 0x0100;
pub const V4L2_CTRL_FLAG_EXECUTE_ON_WRITE: u32 = 0x0200;

/*  Query flags, to be ORed with the control ID  */
pub const V4L2_CTRL_FLAG_NEXT_CTRL: u32 = 0x80000000;
pub const V4L2_CTRL_FLAG_NEXT_COMPOUND: u32 = 0x40000000;

/// Maximum number of user-class control IDs defined by V4L2.
pub const V4L2_CID_MAX_CTRLS: u32 = 1024;
/// IDs reserved for driver specific controls.
pub const V4L2_CID_PRIVATE_BASE: u32 = 0x08000000;

const_assert_eq!(core::mem::size_of::<v4l2_control>(), 8);
const_assert_eq!(core::mem::size_of::<v4l2_ext_control>(), 20);
const_assert_eq!(core::mem::size_of::<v4l2_queryctrl>(), 68);
const_assert_eq!(core::mem::size_of::<v4l2_query_ext_ctrl>(), 232);
const_assert_eq!(core::mem::size_of::<v4l2_querymenu>(), 44);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_ext_controls_layout_lp64() {
        assert_eq!(size_of::<v4l2_ext_controls>(), 32);
        assert_eq!(offset_of!(v4l2_ext_controls, controls), 24);
    }

    #[test]
    fn test_ext_control_union_is_packed() {
        // The pointer union lands right after the 12 leading bytes with no
        // alignment padding.
        assert_eq!(offset_of!(v4l2_ext_control, u), 12);
    }

    #[test]
    fn test_id_helpers() {
        // Class lives in bits 16-27 of the control ID.
        assert_eq!(V4L2_CTRL_ID2CLASS(0x00980913), 0x00980000);
        assert_eq!(V4L2_CTRL_ID2CLASS(V4L2_CTRL_FLAG_NEXT_CTRL | 0x00980913), 0x00980000);
        assert!(V4L2_CTRL_DRIVER_PRIV(0x00981000));
        assert!(!V4L2_CTRL_DRIVER_PRIV(0x00980fff));
        assert_eq!(V4L2_CTRL_ID_MASK & V4L2_CTRL_FLAG_NEXT_CTRL, 0);
        assert_eq!(V4L2_CTRL_ID_MASK & V4L2_CTRL_FLAG_NEXT_COMPOUND, 0);
    }

    #[test]
    fn test_compound_type_threshold() {
        assert!(V4L2_CTRL_TYPE_U8 >= V4L2_CTRL_COMPOUND_TYPES);
        assert!(V4L2_CTRL_TYPE_POINT >= V4L2_CTRL_COMPOUND_TYPES);
        assert!(V4L2_CTRL_TYPE_INTEGER_MENU < V4L2_CTRL_COMPOUND_TYPES);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_querymenu_union_overlay() {
        let mut menu = v4l2_querymenu::zeroed();
        menu.u.value = 0x0102_0304;
        unsafe {
            assert_eq!({ menu.u.name }[0], 0x04);
            assert_eq!({ menu.u.name }[3], 0x01);
        }
    }
}
