// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Memory-mapping buffer records for the streaming I/O ioctls.

use libc::timeval;
use static_assertions::const_assert_eq;

use crate::formats::v4l2_format;
use crate::types::v4l2_timecode;

/// Buffer allocation request, exchanged by `VIDIOC_REQBUFS`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct v4l2_requestbuffers {
    pub count: u32,
    /// enum v4l2_buf_type
    pub type_: u32,
    /// enum v4l2_memory
    pub memory: u32,
    pub reserved: [u32; 2],
}

/// Plane info for multi-planar buffers.
///
/// Multi-planar buffers consist of one or more planes, e.g. an YCbCr buffer
/// with two planes can have one plane for Y, and another for interleaved
/// CbCr components. Each plane can reside in a separate memory buffer, or
/// even in a completely separate memory node.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_plane {
    /// Number of bytes occupied by data in the plane (payload).
    pub bytesused: u32,
    /// Size of this plane (NOT the payload) in bytes.
    pub length: u32,
    pub m: v4l2_plane_m,
    /// Offset in the plane to the start of data; usually 0, unless there
    /// is a header in front of the data.
    pub data_offset: u32,
    pub reserved: [u32; 11],
}

/// Memory location of a [`v4l2_plane`]; the sibling `memory` field of the
/// owning [`v4l2_buffer`] selects the arm.
#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_plane_m {
    /// With `V4L2_MEMORY_MMAP`: offset from the start of the device memory
    /// for this plane, or a "cookie" to pass to `mmap()` on the video node.
    pub mem_offset: u32,
    /// With `V4L2_MEMORY_USERPTR`: a userspace pointer to this plane.
    pub userptr: libc::c_ulong,
    /// With `V4L2_MEMORY_DMABUF`: a userspace file descriptor associated
    /// with this plane.
    pub fd: i32,
}

/// Video buffer info, exchanged by the application and driver using one of
/// the streaming I/O methods (`VIDIOC_QUERYBUF`, `VIDIOC_QBUF`,
/// `VIDIOC_DQBUF`, `VIDIOC_PREPARE_BUF`).
///
/// For multiplanar buffers (`type` is one of the `*_MPLANE` values)
/// `bytesused` is unused, `m.planes` points to an array of plane info
/// records, and `length` counts the elements of that array. For
/// single-planar buffers `length` is the size in bytes of the buffer, not
/// its payload.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_buffer {
    /// Id number of the buffer.
    pub index: u32,
    /// enum v4l2_buf_type
    pub type_: u32,
    pub bytesused: u32,
    pub flags: u32,
    /// enum v4l2_field
    pub field: u32,
    pub timestamp: timeval,
    pub timecode: v4l2_timecode,
    /// Sequence count of this frame.
    pub sequence: u32,

    /// enum v4l2_memory
    pub memory: u32,
    pub m: v4l2_buffer_m,
    pub length: u32,
    pub reserved2: u32,
    pub reserved: u32,
}

/// Memory location of a [`v4l2_buffer`]; the sibling `memory` and `type`
/// fields select the arm.
#[repr(C)]
#[derive(Copy, Clone)]
pub union v4l2_buffer_m {
    /// Non-multiplanar, `V4L2_MEMORY_MMAP`: offset from the start of the
    /// device memory, or a "cookie" to pass to `mmap()` as offset.
    pub offset: u32,
    /// Non-multiplanar, `V4L2_MEMORY_USERPTR`: a userspace pointer to
    /// this buffer.
    pub userptr: libc::c_ulong,
    /// Multiplanar: userspace pointer to the array of plane info records
    /// for this buffer.
    pub planes: *mut v4l2_plane,
    /// Non-multiplanar, `V4L2_MEMORY_DMABUF`: a userspace file descriptor
    /// associated with this buffer.
    pub fd: i32,
}

crate::impl_zeroed!(v4l2_plane, v4l2_plane_m, v4l2_buffer, v4l2_buffer_m);

/*  Flags for the 'flags' field */
/// Buffer is mapped.
pub const V4L2_BUF_FLAG_MAPPED: u32 = 0x00000001;
/// Buffer is queued for processing.
pub const V4L2_BUF_FLAG_QUEUED: u32 = 0x00000002;
/// Buffer is ready.
pub const V4L2_BUF_FLAG_DONE: u32 = 0x00000004;
/// Image is a keyframe (I-frame).
pub const V4L2_BUF_FLAG_KEYFRAME: u32 = 0x00000008;
/// Image is a P-frame.
pub const V4L2_BUF_FLAG_PFRAME: u32 = 0x00000010;
/// Image is a B-frame.
pub const V4L2_BUF_FLAG_BFRAME: u32 = 0x00000020;
/// Buffer is ready, but the data contained within is corrupted.
pub const V4L2_BUF_FLAG_ERROR: u32 = 0x00000040;
/// The timecode field is valid.
pub const V4L2_BUF_FLAG_TIMECODE: u32 = 0x00000100;
/// Buffer is prepared for queuing.
pub const V4L2_BUF_FLAG_PREPARED: u32 = 0x00000400;
/* Cache handling flags */
pub const V4L2_BUF_FLAG_NO_CACHE_INVALIDATE: u32 = 0x00000800;
pub const V4L2_BUF_FLAG_NO_CACHE_CLEAN: u32 = 0x00001000;
/* Timestamp type */
pub const V4L2_BUF_FLAG_TIMESTAMP_MASK: u32 = 0x0000e000;
pub const V4L2_BUF_FLAG_TIMESTAMP_UNKNOWN: u32 = 0x00000000;
pub const V4L2_BUF_FLAG_TIMESTAMP_MONOTONIC: u32 = 0x00002000;
pub const V4L2_BUF_FLAG_TIMESTAMP_COPY: u32 = 0x00004000;
/* Timestamp sources. */
pub const V4L2_BUF_FLAG_TSTAMP_SRC_MASK: u32 = 0x00070000;
pub const V4L2_BUF_FLAG_TSTAMP_SRC_EOF: u32 = 0x00000000;
pub const V4L2_BUF_FLAG_TSTAMP_SRC_SOE: u32 = 0x00010000;
/// mem2mem encoder/decoder: last buffer of the stream.
pub const V4L2_BUF_FLAG_LAST: u32 = 0x00100000;

/// Export of a video buffer as a DMABUF file descriptor, exchanged by
/// `VIDIOC_EXPBUF`.
///
/// The buffer is identified by the 'cookie' returned by `VIDIOC_QUERYBUF`
/// (identical to the cookie used to mmap() the buffer to userspace). All
/// reserved fields must be set to zero.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct v4l2_exportbuffer {
    /// enum v4l2_buf_type
    pub type_: u32,
    /// Id number of the buffer.
    pub index: u32,
    /// Index of the plane to be exported, 0 for single plane queues.
    pub plane: u32,
    /// Flags for the newly created file, currently only O_CLOEXEC is
    /// supported.
    pub flags: u32,
    /// File descriptor associated with the DMABUF (set by driver).
    pub fd: i32,
    pub reserved: [u32; 11],
}

crate::impl_zeroed!(v4l2_exportbuffer);

impl Default for v4l2_exportbuffer {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Additional buffer allocation in a specific format, exchanged by
/// `VIDIOC_CREATE_BUFS`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct v4l2_create_buffers {
    /// On return, index of the first created buffer.
    pub index: u32,
    /// Number of buffers requested; on return, number actually created.
    pub count: u32,
    /// enum v4l2_memory
    pub memory: u32,
    pub format: v4l2_format,
    pub reserved: [u32; 8],
}

crate::impl_zeroed!(v4l2_create_buffers);

const_assert_eq!(core::mem::size_of::<v4l2_requestbuffers>(), 20);
const_assert_eq!(core::mem::size_of::<v4l2_exportbuffer>(), 64);
