//! The machine word behind a Keccak lane.
//!
//! A lane holds `w` bits for `w` in {1, 2, 4, 8, 16, 32, 64}. Lanes of 8 bits
//! and up fill a machine word exactly; the sub-byte widths live in the low
//! bits of a `u8` and every operation on them masks back down to `w` bits.

use std::ops::{BitAnd, BitOr, BitXor, BitXorAssign, Not, Shl, Shr};

use byteorder::{ByteOrder, LittleEndian};
use zeroize::DefaultIsZeroes;

/// An unsigned machine word that can carry a lane.
pub(crate) trait Lane:
    Copy
    + Default
    + Eq
    + BitXor<Output = Self>
    + BitXorAssign
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + DefaultIsZeroes
    + 'static
{
    /// Width of the machine word in bits.
    const WORD_BITS: usize;

    /// Keeps the low `WORD_BITS` bits of a 64-bit reference constant.
    fn truncate(v: u64) -> Self;

    /// Word-width left rotation.
    fn rotate_left(self, n: u32) -> Self;

    /// Loads `WORD_BITS / 8` bytes as a little-endian word.
    fn read_le(buf: &[u8]) -> Self;

    /// Stores the word as `WORD_BITS / 8` little-endian bytes.
    fn write_le(self, out: &mut [u8]);
}

impl Lane for u8 {
    const WORD_BITS: usize = 8;

    #[inline(always)]
    fn truncate(v: u64) -> Self {
        v as u8
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        self.rotate_left(n)
    }

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        buf[0]
    }

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        out[0] = self;
    }
}

impl Lane for u16 {
    const WORD_BITS: usize = 16;

    #[inline(always)]
    fn truncate(v: u64) -> Self {
        v as u16
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        self.rotate_left(n)
    }

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        LittleEndian::read_u16(buf)
    }

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        LittleEndian::write_u16(out, self);
    }
}

impl Lane for u32 {
    const WORD_BITS: usize = 32;

    #[inline(always)]
    fn truncate(v: u64) -> Self {
        v as u32
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        self.rotate_left(n)
    }

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        LittleEndian::read_u32(buf)
    }

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        LittleEndian::write_u32(out, self);
    }
}

impl Lane for u64 {
    const WORD_BITS: usize = 64;

    #[inline(always)]
    fn truncate(v: u64) -> Self {
        v
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        self.rotate_left(n)
    }

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        LittleEndian::read_u64(buf)
    }

    #[inline(always)]
    fn write_le(self, out: &mut [u8]) {
        LittleEndian::write_u64(out, self);
    }
}
