// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! `VIDIOC_*` request codes in the FreeBSD ioctl encoding.
//!
//! BSD systems encode the argument size into bits 16-28 of the request
//! (13 bits, `IOCPARM_MASK`) with the direction in the top three bits, as
//! laid out in `<sys/ioccom.h>`. The resulting numeric values therefore
//! differ from Linux, where the size field is 14 bits and the direction
//! bits sit at 30-31; the group `'V'`, the sequence numbers, and the
//! argument types are identical on both.
//!
//! Requests whose argument embeds a pointer or a `long` change value with
//! the target's pointer width. The codes here are `const` evaluated from
//! the actual struct sizes, so they are correct for whichever target the
//! crate is compiled for.

use libc::c_int;

use crate::buffers::*;
use crate::codec::*;
use crate::controls::*;
use crate::dbg::*;
use crate::events::*;
use crate::formats::*;
use crate::pixfmt::*;
use crate::standards::*;
use crate::tuner::*;
use crate::types::*;

/* <sys/ioccom.h> parameter field */
pub const IOCPARM_SHIFT: u32 = 13;
pub const IOCPARM_MASK: u32 = (1 << IOCPARM_SHIFT) - 1;

pub const fn IOCPARM_LEN(x: u32) -> u32 {
    (x >> 16) & IOCPARM_MASK
}
pub const fn IOCBASECMD(x: u32) -> u32 {
    x & !(IOCPARM_MASK << 16)
}
pub const fn IOCGROUP(x: u32) -> u32 {
    (x >> 8) & 0xff
}

/// Maximum encodable parameter size.
pub const IOCPARM_MAX: u32 = 1 << IOCPARM_SHIFT;

/// No parameters.
pub const IOC_VOID: u32 = 0x2000_0000;
/// Copy parameters out (driver to userspace).
pub const IOC_OUT: u32 = 0x4000_0000;
/// Copy parameters in (userspace to driver).
pub const IOC_IN: u32 = 0x8000_0000;
/// Copy parameters in and out.
pub const IOC_INOUT: u32 = IOC_IN | IOC_OUT;
pub const IOC_DIRMASK: u32 = IOC_VOID | IOC_OUT | IOC_IN;

pub const fn _IOC(inout: u32, group: u8, num: u32, len: usize) -> u32 {
    inout | (((len as u32) & IOCPARM_MASK) << 16) | ((group as u32) << 8) | num
}

pub const fn _IO(group: u8, num: u32) -> u32 {
    _IOC(IOC_VOID, group, num, 0)
}

/// Read from the driver: the argument is copied out to userspace.
pub const fn _IOR<T>(group: u8, num: u32) -> u32 {
    _IOC(IOC_OUT, group, num, core::mem::size_of::<T>())
}

/// Write to the driver: the argument is copied in from userspace.
pub const fn _IOW<T>(group: u8, num: u32) -> u32 {
    _IOC(IOC_IN, group, num, core::mem::size_of::<T>())
}

/// Read and write: the argument is copied both ways.
pub const fn _IOWR<T>(group: u8, num: u32) -> u32 {
    _IOC(IOC_INOUT, group, num, core::mem::size_of::<T>())
}

pub const VIDIOC_QUERYCAP: u32 = _IOR::<v4l2_capability>(b'V', 0);
pub const VIDIOC_RESERVED: u32 = _IO(b'V', 1);
pub const VIDIOC_ENUM_FMT: u32 = _IOWR::<v4l2_fmtdesc>(b'V', 2);
pub const VIDIOC_G_FMT: u32 = _IOWR::<v4l2_format>(b'V', 4);
pub const VIDIOC_S_FMT: u32 = _IOWR::<v4l2_format>(b'V', 5);
pub const VIDIOC_REQBUFS: u32 = _IOWR::<v4l2_requestbuffers>(b'V', 8);
pub const VIDIOC_QUERYBUF: u32 = _IOWR::<v4l2_buffer>(b'V', 9);
pub const VIDIOC_G_FBUF: u32 = _IOR::<v4l2_framebuffer>(b'V', 10);
pub const VIDIOC_S_FBUF: u32 = _IOW::<v4l2_framebuffer>(b'V', 11);
pub const VIDIOC_OVERLAY: u32 = _IOW::<c_int>(b'V', 14);
pub const VIDIOC_QBUF: u32 = _IOWR::<v4l2_buffer>(b'V', 15);
pub const VIDIOC_EXPBUF: u32 = _IOWR::<v4l2_exportbuffer>(b'V', 16);
pub const VIDIOC_DQBUF: u32 = _IOWR::<v4l2_buffer>(b'V', 17);
pub const VIDIOC_STREAMON: u32 = _IOW::<c_int>(b'V', 18);
pub const VIDIOC_STREAMOFF: u32 = _IOW::<c_int>(b'V', 19);
pub const VIDIOC_G_PARM: u32 = _IOWR::<v4l2_streamparm>(b'V', 21);
pub const VIDIOC_S_PARM: u32 = _IOWR::<v4l2_streamparm>(b'V', 22);
pub const VIDIOC_G_STD: u32 = _IOR::<v4l2_std_id>(b'V', 23);
pub const VIDIOC_S_STD: u32 = _IOW::<v4l2_std_id>(b'V', 24);
pub const VIDIOC_ENUMSTD: u32 = _IOWR::<v4l2_standard>(b'V', 25);
pub const VIDIOC_ENUMINPUT: u32 = _IOWR::<v4l2_input>(b'V', 26);
pub const VIDIOC_G_CTRL: u32 = _IOWR::<v4l2_control>(b'V', 27);
pub const VIDIOC_S_CTRL: u32 = _IOWR::<v4l2_control>(b'V', 28);
pub const VIDIOC_G_TUNER: u32 = _IOWR::<v4l2_tuner>(b'V', 29);
pub const VIDIOC_S_TUNER: u32 = _IOW::<v4l2_tuner>(b'V', 30);
pub const VIDIOC_G_AUDIO: u32 = _IOR::<v4l2_audio>(b'V', 33);
pub const VIDIOC_S_AUDIO: u32 = _IOW::<v4l2_audio>(b'V', 34);
pub const VIDIOC_QUERYCTRL: u32 = _IOWR::<v4l2_queryctrl>(b'V', 36);
pub const VIDIOC_QUERYMENU: u32 = _IOWR::<v4l2_querymenu>(b'V', 37);
pub const VIDIOC_G_INPUT: u32 = _IOR::<c_int>(b'V', 38);
pub const VIDIOC_S_INPUT: u32 = _IOWR::<c_int>(b'V', 39);
pub const VIDIOC_G_EDID: u32 = _IOWR::<v4l2_edid>(b'V', 40);
pub const VIDIOC_S_EDID: u32 = _IOWR::<v4l2_edid>(b'V', 41);
pub const VIDIOC_G_OUTPUT: u32 = _IOR::<c_int>(b'V', 46);
pub const VIDIOC_S_OUTPUT: u32 = _IOWR::<c_int>(b'V', 47);
pub const VIDIOC_ENUMOUTPUT: u32 = _IOWR::<v4l2_output>(b'V', 48);
pub const VIDIOC_G_AUDOUT: u32 = _IOR::<v4l2_audioout>(b'V', 49);
pub const VIDIOC_S_AUDOUT: u32 = _IOW::<v4l2_audioout>(b'V', 50);
pub const VIDIOC_G_MODULATOR: u32 = _IOWR::<v4l2_modulator>(b'V', 54);
pub const VIDIOC_S_MODULATOR: u32 = _IOW::<v4l2_modulator>(b'V', 55);
pub const VIDIOC_G_FREQUENCY: u32 = _IOWR::<v4l2_frequency>(b'V', 56);
pub const VIDIOC_S_FREQUENCY: u32 = _IOW::<v4l2_frequency>(b'V', 57);
pub const VIDIOC_CROPCAP: u32 = _IOWR::<v4l2_cropcap>(b'V', 58);
pub const VIDIOC_G_CROP: u32 = _IOWR::<v4l2_crop>(b'V', 59);
pub const VIDIOC_S_CROP: u32 = _IOW::<v4l2_crop>(b'V', 60);
pub const VIDIOC_G_JPEGCOMP: u32 = _IOR::<v4l2_jpegcompression>(b'V', 61);
pub const VIDIOC_S_JPEGCOMP: u32 = _IOW::<v4l2_jpegcompression>(b'V', 62);
pub const VIDIOC_QUERYSTD: u32 = _IOR::<v4l2_std_id>(b'V', 63);
pub const VIDIOC_TRY_FMT: u32 = _IOWR::<v4l2_format>(b'V', 64);
pub const VIDIOC_ENUMAUDIO: u32 = _IOWR::<v4l2_audio>(b'V', 65);
pub const VIDIOC_ENUMAUDOUT: u32 = _IOWR::<v4l2_audioout>(b'V', 66);
/// Argument is an enum v4l2_priority value.
pub const VIDIOC_G_PRIORITY: u32 = _IOR::<u32>(b'V', 67);
/// Argument is an enum v4l2_priority value.
pub const VIDIOC_S_PRIORITY: u32 = _IOW::<u32>(b'V', 68);
pub const VIDIOC_G_SLICED_VBI_CAP: u32 = _IOWR::<v4l2_sliced_vbi_cap>(b'V', 69);
pub const VIDIOC_LOG_STATUS: u32 = _IO(b'V', 70);
pub const VIDIOC_G_EXT_CTRLS: u32 = _IOWR::<v4l2_ext_controls>(b'V', 71);
pub const VIDIOC_S_EXT_CTRLS: u32 = _IOWR::<v4l2_ext_controls>(b'V', 72);
pub const VIDIOC_TRY_EXT_CTRLS: u32 = _IOWR::<v4l2_ext_controls>(b'V', 73);
pub const VIDIOC_ENUM_FRAMESIZES: u32 = _IOWR::<v4l2_frmsizeenum>(b'V', 74);
pub const VIDIOC_ENUM_FRAMEINTERVALS: u32 = _IOWR::<v4l2_frmivalenum>(b'V', 75);
pub const VIDIOC_G_ENC_INDEX: u32 = _IOR::<v4l2_enc_idx>(b'V', 76);
pub const VIDIOC_ENCODER_CMD: u32 = _IOWR::<v4l2_encoder_cmd>(b'V', 77);
pub const VIDIOC_TRY_ENCODER_CMD: u32 = _IOWR::<v4l2_encoder_cmd>(b'V', 78);

/* Debugging, testing and internal use only. Only implemented when the
driver is built with advanced debug support, and you must be root. */
pub const VIDIOC_DBG_S_REGISTER: u32 = _IOW::<v4l2_dbg_register>(b'V', 79);
pub const VIDIOC_DBG_G_REGISTER: u32 = _IOWR::<v4l2_dbg_register>(b'V', 80);

pub const VIDIOC_S_HW_FREQ_SEEK: u32 = _IOW::<v4l2_hw_freq_seek>(b'V', 82);

pub const VIDIOC_S_DV_TIMINGS: u32 = _IOWR::<v4l2_dv_timings>(b'V', 87);
pub const VIDIOC_G_DV_TIMINGS: u32 = _IOWR::<v4l2_dv_timings>(b'V', 88);
pub const VIDIOC_DQEVENT: u32 = _IOR::<v4l2_event>(b'V', 89);
pub const VIDIOC_SUBSCRIBE_EVENT: u32 = _IOW::<v4l2_event_subscription>(b'V', 90);
pub const VIDIOC_UNSUBSCRIBE_EVENT: u32 = _IOW::<v4l2_event_subscription>(b'V', 91);

pub const VIDIOC_CREATE_BUFS: u32 = _IOWR::<v4l2_create_buffers>(b'V', 92);
pub const VIDIOC_PREPARE_BUF: u32 = _IOWR::<v4l2_buffer>(b'V', 93);

pub const VIDIOC_G_SELECTION: u32 = _IOWR::<v4l2_selection>(b'V', 94);
pub const VIDIOC_S_SELECTION: u32 = _IOWR::<v4l2_selection>(b'V', 95);

pub const VIDIOC_DECODER_CMD: u32 = _IOWR::<v4l2_decoder_cmd>(b'V', 96);
pub const VIDIOC_TRY_DECODER_CMD: u32 = _IOWR::<v4l2_decoder_cmd>(b'V', 97);

pub const VIDIOC_ENUM_DV_TIMINGS: u32 = _IOWR::<v4l2_enum_dv_timings>(b'V', 98);
pub const VIDIOC_QUERY_DV_TIMINGS: u32 = _IOR::<v4l2_dv_timings>(b'V', 99);
pub const VIDIOC_DV_TIMINGS_CAP: u32 = _IOWR::<v4l2_dv_timings_cap>(b'V', 100);

pub const VIDIOC_ENUM_FREQ_BANDS: u32 = _IOWR::<v4l2_frequency_band>(b'V', 101);

pub const VIDIOC_DBG_G_CHIP_INFO: u32 = _IOWR::<v4l2_dbg_chip_info>(b'V', 102);

pub const VIDIOC_QUERY_EXT_CTRL: u32 = _IOWR::<v4l2_query_ext_ctrl>(b'V', 103);
pub const VIDIOC_G_DEF_EXT_CTRLS: u32 = _IOWR::<v4l2_ext_controls>(b'V', 104);

/// Sequence numbers 192-255 are reserved for driver-private requests.
pub const BASE_VIDIOC_PRIVATE: u32 = 192;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_fields() {
        assert_eq!(IOCGROUP(VIDIOC_QUERYCAP), b'V' as u32);
        assert_eq!(VIDIOC_QUERYCAP & 0xff, 0);
        assert_eq!(VIDIOC_S_FMT & 0xff, 5);
        assert_eq!(VIDIOC_G_DEF_EXT_CTRLS & 0xff, 104);
        assert_eq!(
            IOCPARM_LEN(VIDIOC_QUERYCAP),
            core::mem::size_of::<v4l2_capability>() as u32
        );
        assert_eq!(VIDIOC_QUERYCAP & IOC_DIRMASK, IOC_OUT);
        assert_eq!(VIDIOC_S_FBUF & IOC_DIRMASK, IOC_IN);
        assert_eq!(VIDIOC_QBUF & IOC_DIRMASK, IOC_INOUT);
        assert_eq!(VIDIOC_LOG_STATUS & IOC_DIRMASK, IOC_VOID);
    }

    #[test]
    fn test_void_requests_carry_no_length() {
        assert_eq!(IOCPARM_LEN(VIDIOC_RESERVED), 0);
        assert_eq!(VIDIOC_RESERVED, 0x2000_5601);
        assert_eq!(VIDIOC_LOG_STATUS, 0x2000_5646);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_golden_request_values_lp64() {
        // v4l2_capability is 104 (0x68) bytes, copied out only.
        assert_eq!(VIDIOC_QUERYCAP, 0x4068_5600);
        // v4l2_buffer is 88 (0x58) bytes, copied both ways.
        assert_eq!(VIDIOC_QBUF, 0xc058_560f);
        assert_eq!(VIDIOC_DQBUF, 0xc058_5611);
        assert_eq!(VIDIOC_S_FMT, 0xc0d0_5605);
        assert_eq!(VIDIOC_STREAMON, 0x8004_5612);
        assert_eq!(VIDIOC_G_STD, 0x4008_5617);
    }

    #[test]
    fn test_base_cmd_strips_length() {
        assert_eq!(IOCBASECMD(VIDIOC_QUERYCAP), IOC_OUT | (b'V' as u32) << 8);
        assert_eq!(IOCBASECMD(VIDIOC_QBUF) & 0xff, 15);
    }
}
