// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Advanced debugging records for register peek/poke and chip
//! identification. Debugging and testing only; drivers only implement the
//! matching ioctls when built with advanced debug support, and they
//! require root.

use libc::c_char;
use static_assertions::const_assert_eq;

/* VIDIOC_DBG_G_REGISTER and VIDIOC_DBG_S_REGISTER */

/// Match against chip ID on the bridge (0 for the bridge).
pub const V4L2_CHIP_MATCH_BRIDGE: u32 = 0;
/// Match against subdev index.
pub const V4L2_CHIP_MATCH_SUBDEV: u32 = 4;

/* The following four defines are no longer in use */
pub const V4L2_CHIP_MATCH_HOST: u32 = V4L2_CHIP_MATCH_BRIDGE;
/// Match against I2C driver name.
pub const V4L2_CHIP_MATCH_I2C_DRIVER: u32 = 1;
/// Match against I2C 7-bit address.
pub const V4L2_CHIP_MATCH_I2C_ADDR: u32 = 2;
/// Match against ancillary AC97 chip.
pub const V4L2_CHIP_MATCH_AC97: u32 = 3;

/// Chip selector; `type` determines whether the union carries an address
/// or a name.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_dbg_match {
    /// Match type.
    pub type_: u32,
    pub u: v4l2_dbg_match_u,
}

#[repr(C, packed)]
#[derive(Copy, Clone)]
pub union v4l2_dbg_match_u {
    pub addr: u32,
    pub name: [c_char; 32],
}

/// Register access, exchanged by `VIDIOC_DBG_G_REGISTER` and
/// `VIDIOC_DBG_S_REGISTER`.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_dbg_register {
    pub match_: v4l2_dbg_match,
    /// Register size in bytes.
    pub size: u32,
    pub reg: u64,
    pub val: u64,
}

pub const V4L2_CHIP_FL_READABLE: u32 = 1 << 0;
pub const V4L2_CHIP_FL_WRITABLE: u32 = 1 << 1;

/// Chip identification, returned by `VIDIOC_DBG_G_CHIP_INFO`.
#[repr(C, packed)]
#[derive(Copy, Clone)]
pub struct v4l2_dbg_chip_info {
    pub match_: v4l2_dbg_match,
    pub name: [c_char; 32],
    pub flags: u32,
    pub reserved: [u32; 32],
}

crate::impl_zeroed!(v4l2_dbg_match, v4l2_dbg_match_u, v4l2_dbg_register, v4l2_dbg_chip_info);

const_assert_eq!(core::mem::size_of::<v4l2_dbg_match>(), 36);
const_assert_eq!(core::mem::size_of::<v4l2_dbg_register>(), 56);
const_assert_eq!(core::mem::size_of::<v4l2_dbg_chip_info>(), 200);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_union_addr_aliases_name() {
        let mut m = v4l2_dbg_match::zeroed();
        m.type_ = V4L2_CHIP_MATCH_BRIDGE;
        m.u.addr = 0;
        unsafe {
            assert_eq!({ m.u.name }[0], 0);
        }
    }

    #[test]
    fn test_register_offsets_are_packed() {
        use core::mem::offset_of;
        assert_eq!(offset_of!(v4l2_dbg_register, size), 36);
        assert_eq!(offset_of!(v4l2_dbg_register, reg), 40);
        assert_eq!(offset_of!(v4l2_dbg_register, val), 48);
    }
}
