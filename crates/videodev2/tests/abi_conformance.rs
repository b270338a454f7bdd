// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies
//
// V4L2 ABI Conformance Tests
//
// TESTING LAYERS:
//
// Layer 1 (Layout - any target):
//   - Record sizes and field offsets that are pointer-width independent
//   - FOURCC packing and the byte-swapped marker bit
//   - Default colorimetry resolution tables
//
// Layer 2 (Layout - LP64 targets):
//   - Sizes and offsets of records embedding pointers, `long`, or libc
//     time types
//   - Golden ioctl request values cross-checked against a C compilation
//     of the header on FreeBSD amd64
//
// RUN:
//   cargo test --test abi_conformance

use core::mem::{offset_of, size_of};

use videodev2::*;

// =============================================================================
// Layer 1: Pointer-Width Independent Layout
// =============================================================================

#[test]
fn test_fixed_record_sizes() {
    assert_eq!(size_of::<v4l2_capability>(), 104);
    assert_eq!(size_of::<v4l2_pix_format>(), 48);
    assert_eq!(size_of::<v4l2_fmtdesc>(), 64);
    assert_eq!(size_of::<v4l2_frmsizeenum>(), 44);
    assert_eq!(size_of::<v4l2_frmivalenum>(), 52);
    assert_eq!(size_of::<v4l2_timecode>(), 16);
    assert_eq!(size_of::<v4l2_requestbuffers>(), 20);
    assert_eq!(size_of::<v4l2_exportbuffer>(), 64);
    assert_eq!(size_of::<v4l2_standard>(), 72);
    assert_eq!(size_of::<v4l2_bt_timings>(), 124);
    assert_eq!(size_of::<v4l2_dv_timings>(), 132);
    assert_eq!(size_of::<v4l2_enum_dv_timings>(), 148);
    assert_eq!(size_of::<v4l2_bt_timings_cap>(), 104);
    assert_eq!(size_of::<v4l2_dv_timings_cap>(), 144);
    assert_eq!(size_of::<v4l2_input>(), 80);
    assert_eq!(size_of::<v4l2_output>(), 72);
    assert_eq!(size_of::<v4l2_control>(), 8);
    assert_eq!(size_of::<v4l2_ext_control>(), 20);
    assert_eq!(size_of::<v4l2_queryctrl>(), 68);
    assert_eq!(size_of::<v4l2_query_ext_ctrl>(), 232);
    assert_eq!(size_of::<v4l2_querymenu>(), 44);
    assert_eq!(size_of::<v4l2_tuner>(), 84);
    assert_eq!(size_of::<v4l2_modulator>(), 68);
    assert_eq!(size_of::<v4l2_frequency>(), 44);
    assert_eq!(size_of::<v4l2_frequency_band>(), 64);
    assert_eq!(size_of::<v4l2_hw_freq_seek>(), 48);
    assert_eq!(size_of::<v4l2_audio>(), 52);
    assert_eq!(size_of::<v4l2_audioout>(), 52);
    assert_eq!(size_of::<v4l2_enc_idx_entry>(), 32);
    assert_eq!(size_of::<v4l2_enc_idx>(), 2072);
    assert_eq!(size_of::<v4l2_encoder_cmd>(), 40);
    assert_eq!(size_of::<v4l2_decoder_cmd>(), 72);
    assert_eq!(size_of::<v4l2_vbi_format>(), 44);
    assert_eq!(size_of::<v4l2_sliced_vbi_format>(), 112);
    assert_eq!(size_of::<v4l2_sliced_vbi_cap>(), 116);
    assert_eq!(size_of::<v4l2_sliced_vbi_data>(), 64);
    assert_eq!(size_of::<v4l2_plane_pix_format>(), 20);
    assert_eq!(size_of::<v4l2_pix_format_mplane>(), 192);
    assert_eq!(size_of::<v4l2_sdr_format>(), 32);
    assert_eq!(size_of::<v4l2_captureparm>(), 40);
    assert_eq!(size_of::<v4l2_outputparm>(), 40);
    assert_eq!(size_of::<v4l2_streamparm>(), 204);
    assert_eq!(size_of::<v4l2_cropcap>(), 44);
    assert_eq!(size_of::<v4l2_crop>(), 20);
    assert_eq!(size_of::<v4l2_jpegcompression>(), 140);
    assert_eq!(size_of::<v4l2_event_subscription>(), 32);
    assert_eq!(size_of::<v4l2_dbg_match>(), 36);
    assert_eq!(size_of::<v4l2_dbg_register>(), 56);
    assert_eq!(size_of::<v4l2_dbg_chip_info>(), 200);
}

#[test]
fn test_reserved_fields_pad_to_documented_sizes() {
    // These records end in reserved arrays sized so the struct hits a
    // round number; a miscounted array would shift the total.
    assert_eq!(offset_of!(v4l2_capability, reserved), 92);
    assert_eq!(offset_of!(v4l2_query_ext_ctrl, reserved), 104);
    assert_eq!(offset_of!(v4l2_queryctrl, reserved), 60);
    assert_eq!(offset_of!(v4l2_exportbuffer, reserved), 20);
}

#[test]
fn test_fourcc_constants_match_packing() {
    assert_eq!(V4L2_PIX_FMT_YUYV, v4l2_fourcc(b'Y', b'U', b'Y', b'V'));
    assert_eq!(V4L2_PIX_FMT_NV12, 0x3231564e);
    assert_eq!(V4L2_PIX_FMT_MJPEG, 0x47504a4d);
    assert_eq!(V4L2_PIX_FMT_SBGGR8, 0x31384142);
    assert_eq!(
        FourCC::from_u32(V4L2_PIX_FMT_UYVY).to_string(),
        "UYVY"
    );
    assert_eq!(V4L2_PIX_FMT_Y16_BE & (1 << 31), 1 << 31);
}

#[test]
fn test_colorimetry_default_tables() {
    // Resolution order: SDTV, then HDTV, then sRGB.
    assert_eq!(
        V4L2_MAP_COLORSPACE_DEFAULT(true, false),
        V4L2_COLORSPACE_SMPTE170M
    );
    assert_eq!(
        V4L2_MAP_COLORSPACE_DEFAULT(false, true),
        V4L2_COLORSPACE_REC709
    );

    // Every colorspace resolves to a concrete transfer function and
    // encoding, never back to DEFAULT.
    for colsp in 0..=V4L2_COLORSPACE_RAW {
        assert_ne!(V4L2_MAP_XFER_FUNC_DEFAULT(colsp), V4L2_XFER_FUNC_DEFAULT);
        assert_ne!(V4L2_MAP_YCBCR_ENC_DEFAULT(colsp), V4L2_YCBCR_ENC_DEFAULT);
    }

    // JPEG shorthand: sRGB transfer, 601 encoding, full range.
    assert_eq!(
        V4L2_MAP_XFER_FUNC_DEFAULT(V4L2_COLORSPACE_JPEG),
        V4L2_XFER_FUNC_SRGB
    );
    assert_eq!(
        V4L2_MAP_YCBCR_ENC_DEFAULT(V4L2_COLORSPACE_JPEG),
        V4L2_YCBCR_ENC_601
    );
    assert_eq!(
        V4L2_MAP_QUANTIZATION_DEFAULT(false, V4L2_COLORSPACE_JPEG, V4L2_YCBCR_ENC_601),
        V4L2_QUANTIZATION_FULL_RANGE
    );
}

#[test]
fn test_analog_standard_sets() {
    assert_eq!(V4L2_STD_PAL_BG | V4L2_STD_PAL_DK, 0x000000e7);
    assert_eq!(V4L2_STD_MN & V4L2_STD_PAL_60, 0);
    assert_eq!(V4L2_STD_ALL & V4L2_STD_ATSC, 0);
    assert_eq!(V4L2_STD_UNKNOWN, 0);
}

#[test]
fn test_buf_type_and_field_predicate_tables() {
    for t in 1..=11u32 {
        assert_eq!(
            V4L2_TYPE_IS_MULTIPLANAR(t),
            t == V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE || t == V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE
        );
    }
    for f in 0..=9u32 {
        // A field layout never claims both "both fields" and "single
        // field" at once.
        assert!(!(V4L2_FIELD_HAS_BOTH(f) && V4L2_FIELD_HAS_T_OR_B(f)));
    }
}

#[test]
fn test_control_id_space() {
    assert_eq!(V4L2_CTRL_ID_MASK, 0x0fffffff);
    // The two query-modifier flags sit above the ID space.
    assert_eq!(
        V4L2_CTRL_FLAG_NEXT_CTRL | V4L2_CTRL_FLAG_NEXT_COMPOUND,
        0xc0000000
    );
    assert!(V4L2_CID_PRIVATE_BASE <= V4L2_CTRL_ID_MASK);
    assert!(V4L2_CTRL_DRIVER_PRIV(V4L2_CID_PRIVATE_BASE | 0x1000));
}

// =============================================================================
// Layer 2: LP64 Layout and Golden Request Values
// =============================================================================

#[test]
#[cfg(target_pointer_width = "64")]
fn test_pointer_width_dependent_sizes() {
    assert_eq!(size_of::<v4l2_plane>(), 64);
    assert_eq!(size_of::<v4l2_buffer>(), 88);
    assert_eq!(size_of::<v4l2_framebuffer>(), 48);
    assert_eq!(size_of::<v4l2_window>(), 56);
    assert_eq!(size_of::<v4l2_format>(), 208);
    assert_eq!(size_of::<v4l2_create_buffers>(), 256);
    assert_eq!(size_of::<v4l2_selection>(), 64);
    assert_eq!(size_of::<v4l2_ext_controls>(), 32);
    assert_eq!(size_of::<v4l2_event>(), 136);
    assert_eq!(size_of::<v4l2_edid>(), 40);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_golden_ioctl_requests() {
    // Values verified against the C header compiled on FreeBSD amd64.
    assert_eq!(VIDIOC_QUERYCAP, 0x4068_5600);
    assert_eq!(VIDIOC_RESERVED, 0x2000_5601);
    assert_eq!(VIDIOC_ENUM_FMT, 0xc040_5602);
    assert_eq!(VIDIOC_G_FMT, 0xc0d0_5604);
    assert_eq!(VIDIOC_S_FMT, 0xc0d0_5605);
    assert_eq!(VIDIOC_REQBUFS, 0xc014_5608);
    assert_eq!(VIDIOC_QUERYBUF, 0xc058_5609);
    assert_eq!(VIDIOC_OVERLAY, 0x8004_560e);
    assert_eq!(VIDIOC_QBUF, 0xc058_560f);
    assert_eq!(VIDIOC_DQBUF, 0xc058_5611);
    assert_eq!(VIDIOC_STREAMON, 0x8004_5612);
    assert_eq!(VIDIOC_STREAMOFF, 0x8004_5613);
    assert_eq!(VIDIOC_G_STD, 0x4008_5617);
    assert_eq!(VIDIOC_S_STD, 0x8008_5618);
    assert_eq!(VIDIOC_G_CTRL, 0xc008_561b);
    assert_eq!(VIDIOC_LOG_STATUS, 0x2000_5646);
    assert_eq!(VIDIOC_G_EXT_CTRLS, 0xc020_5647);
    assert_eq!(VIDIOC_G_ENC_INDEX, 0x4818_564c);
    assert_eq!(VIDIOC_CREATE_BUFS, 0xc100_565c);
    assert_eq!(VIDIOC_DQEVENT, 0x4088_5659);
    assert_eq!(VIDIOC_QUERY_EXT_CTRL, 0xc0e8_5667);
}

#[test]
fn test_every_request_uses_group_v() {
    for req in [
        VIDIOC_QUERYCAP,
        VIDIOC_ENUM_FMT,
        VIDIOC_G_FMT,
        VIDIOC_REQBUFS,
        VIDIOC_QBUF,
        VIDIOC_EXPBUF,
        VIDIOC_G_PARM,
        VIDIOC_ENUMSTD,
        VIDIOC_G_TUNER,
        VIDIOC_QUERYCTRL,
        VIDIOC_G_EDID,
        VIDIOC_G_MODULATOR,
        VIDIOC_CROPCAP,
        VIDIOC_G_JPEGCOMP,
        VIDIOC_G_SLICED_VBI_CAP,
        VIDIOC_ENUM_FRAMESIZES,
        VIDIOC_ENCODER_CMD,
        VIDIOC_DBG_G_REGISTER,
        VIDIOC_S_HW_FREQ_SEEK,
        VIDIOC_S_DV_TIMINGS,
        VIDIOC_SUBSCRIBE_EVENT,
        VIDIOC_PREPARE_BUF,
        VIDIOC_G_SELECTION,
        VIDIOC_DECODER_CMD,
        VIDIOC_ENUM_DV_TIMINGS,
        VIDIOC_DV_TIMINGS_CAP,
        VIDIOC_ENUM_FREQ_BANDS,
        VIDIOC_DBG_G_CHIP_INFO,
        VIDIOC_G_DEF_EXT_CTRLS,
    ] {
        assert_eq!(IOCGROUP(req), b'V' as u32);
        assert!((req & 0xff) < BASE_VIDIOC_PRIVATE);
    }
}

#[test]
fn test_sequence_numbers_track_the_header() {
    assert_eq!(VIDIOC_ENUM_FMT & 0xff, 2);
    assert_eq!(VIDIOC_G_FBUF & 0xff, 10);
    assert_eq!(VIDIOC_EXPBUF & 0xff, 16);
    assert_eq!(VIDIOC_ENUMINPUT & 0xff, 26);
    assert_eq!(VIDIOC_G_EDID & 0xff, 40);
    assert_eq!(VIDIOC_TRY_FMT & 0xff, 64);
    assert_eq!(VIDIOC_TRY_ENCODER_CMD & 0xff, 78);
    assert_eq!(VIDIOC_S_HW_FREQ_SEEK & 0xff, 82);
    assert_eq!(VIDIOC_DV_TIMINGS_CAP & 0xff, 100);
    assert_eq!(VIDIOC_G_DEF_EXT_CTRLS & 0xff, 104);
}

// =============================================================================
// Round Trips Through the Aggregate Unions
// =============================================================================

#[test]
fn test_format_pix_round_trip() {
    let mut fmt = v4l2_format::zeroed();
    fmt.type_ = V4L2_BUF_TYPE_VIDEO_CAPTURE;
    fmt.fmt.pix.width = 1280;
    fmt.fmt.pix.height = 720;
    fmt.fmt.pix.pixelformat = V4L2_PIX_FMT_NV12;
    fmt.fmt.pix.field = V4L2_FIELD_NONE;
    fmt.fmt.pix.colorspace = V4L2_COLORSPACE_REC709;

    let copy = fmt;
    unsafe {
        assert_eq!(copy.fmt.pix.width, 1280);
        assert_eq!(copy.fmt.pix.pixelformat, V4L2_PIX_FMT_NV12);
        assert_eq!(
            FourCC::from_u32(copy.fmt.pix.pixelformat).to_string(),
            "NV12"
        );
    }
}

#[test]
fn test_format_mplane_round_trip() {
    let mut fmt = v4l2_format::zeroed();
    fmt.type_ = V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE;
    fmt.fmt.pix_mp.width = 3840;
    fmt.fmt.pix_mp.height = 2160;
    fmt.fmt.pix_mp.pixelformat = V4L2_PIX_FMT_NV12M;
    fmt.fmt.pix_mp.num_planes = 2;
    // Indexing plane_fmt reads through the union arm, so the writes need
    // an unsafe block even though plain field assignments do not.
    unsafe {
        fmt.fmt.pix_mp.plane_fmt[0].bytesperline = 3840;
        fmt.fmt.pix_mp.plane_fmt[1].bytesperline = 3840;
    }

    unsafe {
        assert!(V4L2_TYPE_IS_MULTIPLANAR(fmt.type_));
        assert_eq!({ fmt.fmt.pix_mp.num_planes }, 2);
        assert_eq!({ fmt.fmt.pix_mp.plane_fmt[1].bytesperline }, 3840);
    }
}

#[test]
fn test_buffer_mplane_setup() {
    let mut planes = [v4l2_plane::zeroed(); VIDEO_MAX_PLANES as usize];
    planes[0].length = 3840 * 2160;
    planes[1].length = 3840 * 1080;

    let mut buf = v4l2_buffer::zeroed();
    buf.type_ = V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE;
    buf.memory = V4L2_MEMORY_MMAP;
    buf.length = 2;
    buf.m.planes = planes.as_mut_ptr();

    unsafe {
        assert!(!buf.m.planes.is_null());
        assert_eq!((*buf.m.planes).length, 3840 * 2160);
    }
}
