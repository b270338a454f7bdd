// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! FOURCC constructors and a display-friendly wrapper.
//!
//! V4L2 packs four-character codes little-endian regardless of host byte
//! order: `'N' | 'V' << 8 | '1' << 16 | '2' << 24`. The numeric value is
//! therefore identical on every architecture and can be compared raw against
//! values produced by any other V4L2 implementation. Formats stored
//! big-endian in memory get a separate code with bit 31 set as the
//! "byte-swapped" marker.

use core::fmt;

/// Builds a pixel-format code from four characters.
///
/// Equivalent of the C `v4l2_fourcc()` macro.
pub const fn v4l2_fourcc(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

/// Builds a big-endian pixel-format code: the same packing as
/// [`v4l2_fourcc`] with bit 31 set.
pub const fn v4l2_fourcc_be(a: u8, b: u8, c: u8, d: u8) -> u32 {
    v4l2_fourcc(a, b, c, d) | (1 << 31)
}

/// A FOURCC code as its four bytes, for printing and pattern matching.
///
/// Conversions use the V4L2 packing above in both directions, so
/// `u32::from(FourCC::from(code))` is the identity for any code, including
/// big-endian ones (byte 3 keeps the marker bit).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const fn from_u32(val: u32) -> FourCC {
        FourCC([
            (val & 0xff) as u8,
            (val >> 8 & 0xff) as u8,
            (val >> 16 & 0xff) as u8,
            (val >> 24 & 0xff) as u8,
        ])
    }

    pub const fn to_u32(self) -> u32 {
        v4l2_fourcc(self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl From<&[u8; 4]> for FourCC {
    fn from(buf: &[u8; 4]) -> FourCC {
        FourCC(*buf)
    }
}

impl From<u32> for FourCC {
    fn from(val: u32) -> FourCC {
        FourCC::from_u32(val)
    }
}

impl From<FourCC> for u32 {
    fn from(val: FourCC) -> Self {
        val.to_u32()
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match core::str::from_utf8(&self.0) {
            Ok(s) => f.write_str(s),
            Err(_) => {
                // If we return fmt::Error, then for example format!() will panic, so we choose
                // an alternative representation instead
                let b = &self.0;
                f.write_fmt(format_args!(
                    "{}{}{}{}",
                    core::ascii::escape_default(b[0]),
                    core::ascii::escape_default(b[1]),
                    core::ascii::escape_default(b[2]),
                    core::ascii::escape_default(b[3])
                ))
            }
        }
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let b = self.0;
        f.debug_tuple("FourCC")
            .field(&format_args!(
                "{}{}{}{}",
                core::ascii::escape_default(b[0]),
                core::ascii::escape_default(b[1]),
                core::ascii::escape_default(b[2]),
                core::ascii::escape_default(b[3])
            ))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_packing() {
        // 'N' | 'V' << 8 | '1' << 16 | '2' << 24
        assert_eq!(v4l2_fourcc(b'N', b'V', b'1', b'2'), 0x3231564e);
        assert_eq!(v4l2_fourcc(b'Y', b'U', b'Y', b'V'), 0x56595559);
    }

    #[test]
    fn test_fourcc_be_sets_bit31() {
        let le = v4l2_fourcc(b'Y', b'1', b'6', b' ');
        let be = v4l2_fourcc_be(b'Y', b'1', b'6', b' ');
        assert_eq!(le & (1 << 31), 0);
        assert_eq!(be, le | (1 << 31));
    }

    #[test]
    fn test_fourcc_round_trip() {
        for code in [b"NV12", b"H264", b"GREY", b"905C"] {
            let val = v4l2_fourcc(code[0], code[1], code[2], code[3]);
            assert_eq!(FourCC::from_u32(val).0, *code);
            assert_eq!(FourCC::from_u32(val).to_u32(), val);
        }
    }

    #[test]
    fn test_fourcc_be_round_trip() {
        let val = v4l2_fourcc_be(b'A', b'R', b'1', b'5');
        let cc = FourCC::from_u32(val);
        // Byte 3 carries the byte-swapped marker through the round trip.
        assert_eq!(cc.to_u32(), val);
        assert_eq!(&cc.0[..3], b"AR1");
        assert_eq!(cc.0[3], b'5' | 0x80);
    }

    #[test]
    fn test_fourcc_display() {
        assert_eq!(FourCC(*b"YUYV").to_string(), "YUYV");
        // Non-UTF8 bytes render escaped rather than failing the formatter.
        assert_eq!(FourCC([b'A', b'R', b'1', 0xb5]).to_string(), "AR1\\xb5");
    }
}
