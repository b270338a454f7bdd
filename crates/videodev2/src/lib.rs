// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Video4Linux2 ioctl ABI for Rust
//!
//! Hand-maintained definitions of the V4L2 public ABI: the fixed-layout
//! structures, enumerator and bit-flag constants, FOURCC pixel-format codes,
//! and `VIDIOC_*` request codes that userspace exchanges with a V4L2 driver
//! through `ioctl(2)`. The definitions track the `videodev2.h` compatibility
//! header shipped for BSD systems running a binary-compatible V4L2 driver
//! layer, so request codes follow the FreeBSD ioctl encoding convention (see
//! [`ioctl`]).
//!
//! This crate is the wire contract only. It performs no I/O, opens no
//! devices, and manages no buffers; pair it with an ioctl wrapper of your
//! choice to actually talk to a driver.
//!
//! # Layout guarantees
//!
//! Every record here crosses the kernel boundary as a raw byte blob
//! interpreted by offset, so field order, field widths, unions, reserved
//! fields, and packing are reproduced exactly. Fixed sizes are enforced at
//! compile time with `static_assertions`; sizes that depend on the width of
//! pointers or `long` are covered by the conformance tests on LP64 targets.
//!
//! # Naming
//!
//! Types and constants keep their C names (`v4l2_pix_format`,
//! `V4L2_BUF_TYPE_VIDEO_CAPTURE`, ...) so code can be ported from C by
//! search-and-replace and cross-checked against the V4L2 documentation
//! line-by-line. Categorical fields are plain `u32` rather than Rust enums:
//! drivers may legally produce values outside the enumerated set, and the
//! wire structs carry `u32` anyway.
//!
//! # Quick start
//!
//! ```
//! use videodev2::*;
//!
//! let mut fmt = v4l2_format::zeroed();
//! fmt.type_ = V4L2_BUF_TYPE_VIDEO_CAPTURE;
//! fmt.fmt.pix.width = 1920;
//! fmt.fmt.pix.height = 1080;
//! fmt.fmt.pix.pixelformat = V4L2_PIX_FMT_YUYV;
//! fmt.fmt.pix.field = V4L2_FIELD_NONE;
//!
//! // Hand `&mut fmt` to ioctl(fd, VIDIOC_S_FMT, ...) on the target system.
//! assert_eq!(VIDIOC_S_FMT & 0xff, 5);
//! ```

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

/// Maximum number of frame buffers a queue can hold.
pub const VIDEO_MAX_FRAME: u32 = 32;

/// Maximum number of planes per multiplanar buffer.
pub const VIDEO_MAX_PLANES: u32 = 8;

/// Implements a `zeroed()` constructor for records whose field types all
/// accept the all-zeroes bit pattern (unions, pointers, plain integers).
macro_rules! impl_zeroed {
    ($($t:ty),+ $(,)?) => {
        $(impl $t {
            #[inline(always)]
            pub const fn zeroed() -> Self {
                // Safety: every field of $t treats all-zeroes as valid.
                unsafe { ::core::mem::zeroed() }
            }
        })+
    };
}

mod buffers;
mod codec;
mod colorspace;
mod controls;
mod dbg;
mod events;
mod formats;
pub mod fourcc;
pub mod ioctl;
mod pixfmt;
mod standards;
mod tuner;
mod types;

pub use buffers::*;
pub use codec::*;
pub use colorspace::*;
pub use controls::*;
pub use dbg::*;
pub use events::*;
pub use formats::*;
pub use fourcc::{v4l2_fourcc, v4l2_fourcc_be, FourCC};
pub use ioctl::*;
pub use pixfmt::*;
pub use standards::*;
pub use tuner::*;
pub use types::*;

pub(crate) use impl_zeroed;
