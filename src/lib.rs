//! The Keccak sponge construction and the FIPS 202 functions built on it.
//!
//! Three layers, leaves first:
//!
//! 1. The permutation layer (crate-internal): the 5×5 lane array and the
//!    Keccak-f permutation for each of the seven widths (25…1600 bits), with
//!    the lane-complementing χ enabled by default.
//! 2. [`Sponge`]: an immutable `(bitrate, capacity, suffix, output length)`
//!    parameter set that pads a bit-precise message with `d || pad10*1`,
//!    drives absorb/permute cycles, and squeezes any requested number of
//!    output bits.
//! 3. [`fips202`]: the named parameter sets (SHA3-224/256/384/512,
//!    SHAKE128/256, RawSHAKE128/256) plus the original empty-suffix
//!    Keccak-256/512.
//!
//! Messages and outputs are bit strings indexed least-significant-bit first
//! within each byte; lanes are little-endian words, per FIPS 202.

use std::io::{self, Read};

use crate::keccak::KeccakState;
use crate::lane::Lane;
use crate::macros::with_width;

pub mod fips202;
mod fuzzing;
mod keccak;
mod lane;
mod macros;

/// The error type for sponge construction and application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A construction or application argument is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// The parameters are coherent but the operation cannot run with them.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
    /// The byte source failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The seven Keccak permutation widths `b = 25·w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    B25,
    B50,
    B100,
    B200,
    B400,
    B800,
    B1600,
}

impl Width {
    fn from_bits(bits: usize) -> Option<Width> {
        match bits {
            25 => Some(Width::B25),
            50 => Some(Width::B50),
            100 => Some(Width::B100),
            200 => Some(Width::B200),
            400 => Some(Width::B400),
            800 => Some(Width::B800),
            1600 => Some(Width::B1600),
            _ => None,
        }
    }

    /// Total state bits.
    pub fn bits(self) -> usize {
        match self {
            Width::B25 => 25,
            Width::B50 => 50,
            Width::B100 => 100,
            Width::B200 => 200,
            Width::B400 => 400,
            Width::B800 => 800,
            Width::B1600 => 1600,
        }
    }
}

/// Domain-separation bits appended after the message, before padding.
///
/// Bits are taken least-significant first: the first suffix bit lands at the
/// first bit position after the message, so `"01"` puts a 1 at message
/// length + 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suffix {
    bits: u8,
    len: u8,
}

impl Suffix {
    /// The empty suffix of the original Keccak functions.
    pub const EMPTY: Suffix = Suffix { bits: 0, len: 0 };
    /// `"01"`, the SHA-3 hash functions.
    pub const SHA3: Suffix = Suffix { bits: 0b10, len: 2 };
    /// `"1111"`, the SHAKE extendable-output functions.
    pub const SHAKE: Suffix = Suffix { bits: 0b1111, len: 4 };
    /// `"11"`, the RawSHAKE functions.
    pub const RAW_SHAKE: Suffix = Suffix { bits: 0b11, len: 2 };

    /// Builds a suffix from 0/1 flags, first bit first.
    pub fn from_bits(bits: &[u8]) -> Result<Suffix, Error> {
        if bits.len() > 8 {
            return Err(Error::InvalidParameter("suffix is longer than 8 bits"));
        }
        let mut value = 0u8;
        for (i, bit) in bits.iter().enumerate() {
            match bit {
                0 => {}
                1 => value |= 1 << i,
                _ => return Err(Error::InvalidParameter("suffix bits must be 0 or 1")),
            }
        }
        Ok(Suffix {
            bits: value,
            len: bits.len() as u8,
        })
    }

    /// Parses a suffix from text such as `"01"`, first bit first.
    pub fn parse(s: &str) -> Result<Suffix, Error> {
        if s.len() > 8 {
            return Err(Error::InvalidParameter("suffix is longer than 8 bits"));
        }
        let mut value = 0u8;
        for (i, ch) in s.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => value |= 1 << i,
                _ => return Err(Error::InvalidParameter("suffix characters must be '0' or '1'")),
            }
        }
        Ok(Suffix {
            bits: value,
            len: s.len() as u8,
        })
    }

    /// Number of suffix bits.
    pub fn len(self) -> usize {
        self.len as usize
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    fn bit(self, i: usize) -> u8 {
        (self.bits >> i) & 1
    }
}

/// An instance of the Keccak sponge construction.
///
/// A sponge is an immutable parameter set `(bitrate r, capacity c, suffix d,
/// output length n)` with `r + c` one of the seven permutation widths. It can
/// be applied any number of times; every application allocates and
/// exclusively owns a fresh permutation state, so a shared `Sponge` is safe
/// to use from multiple threads.
#[derive(Clone, Copy, Debug)]
pub struct Sponge {
    rate: usize,
    capacity: usize,
    suffix: Suffix,
    output_bits: usize,
    width: Width,
    complement: bool,
}

impl Sponge {
    /// Creates a sponge from its parameters, all in bits.
    ///
    /// `rate` and `capacity` must both be at least 1 and sum to a Keccak
    /// width (25, 50, 100, 200, 400, 800 or 1600); `output_bits` must be at
    /// least 1.
    pub fn new(
        rate: usize,
        capacity: usize,
        suffix: Suffix,
        output_bits: usize,
    ) -> Result<Sponge, Error> {
        if rate == 0 {
            return Err(Error::InvalidParameter("bitrate must be at least 1"));
        }
        if capacity == 0 {
            return Err(Error::InvalidParameter("capacity must be at least 1"));
        }
        if output_bits == 0 {
            return Err(Error::InvalidParameter("output length must be at least 1"));
        }
        let width = Width::from_bits(rate + capacity).ok_or(Error::InvalidParameter(
            "bitrate plus capacity must be a Keccak width (25, 50, 100, 200, 400, 800 or 1600)",
        ))?;
        Ok(Sponge {
            rate,
            capacity,
            suffix,
            output_bits,
            width,
            complement: true,
        })
    }

    /// Constructor for the fixed parameter sets in [`fips202`]; the caller
    /// guarantees the invariants checked by [`Sponge::new`].
    pub(crate) const fn preset(
        rate: usize,
        capacity: usize,
        suffix: Suffix,
        output_bits: usize,
        width: Width,
    ) -> Sponge {
        Sponge {
            rate,
            capacity,
            suffix,
            output_bits,
            width,
            complement: true,
        }
    }

    /// Enables or disables the lane-complementing transform in the
    /// permutation. On by default; outputs are identical either way, the
    /// plain path exists so the transformed one can be validated against it.
    pub fn with_lane_complementing(mut self, enabled: bool) -> Sponge {
        self.complement = enabled;
        self
    }

    /// Bitrate in bits.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Capacity in bits.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The permutation width this sponge runs on.
    pub fn width(&self) -> Width {
        self.width
    }

    /// The domain-separation suffix.
    pub fn suffix(&self) -> Suffix {
        self.suffix
    }

    /// Output length in bits.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// Hashes a whole-byte message.
    ///
    /// Returns `⌈output_bits / 8⌉` bytes; when the output length is not a
    /// multiple of 8, the high bits of the last byte are zero and not part of
    /// the hash.
    pub fn apply(&self, message: &[u8]) -> Vec<u8> {
        with_width!(self.width, self, run_buffer, message, message.len() * 8)
    }

    /// Hashes the first `bit_len` bits of `message`, least-significant bit
    /// of each byte first.
    pub fn apply_bits(&self, message: &[u8], bit_len: usize) -> Result<Vec<u8>, Error> {
        if bit_len > message.len() * 8 {
            return Err(Error::InvalidParameter(
                "message bit length exceeds the bytes provided",
            ));
        }
        Ok(with_width!(self.width, self, run_buffer, message, bit_len))
    }

    /// Hashes a byte source, absorbing `rate / 8` bytes at a time.
    ///
    /// Requires a bitrate divisible by 8. A read failure aborts the call;
    /// interrupted reads are retried.
    pub fn apply_reader<R: Read>(&self, mut reader: R) -> Result<Vec<u8>, Error> {
        if self.rate % 8 != 0 {
            return Err(Error::Unsupported(
                "byte sources need a bitrate divisible by 8",
            ));
        }
        let reader: &mut dyn Read = &mut reader;
        with_width!(self.width, self, run_reader, reader)
    }

    /// Smallest multiple of the bitrate that fits message, suffix, and the
    /// two mandatory padding bits.
    fn padded_bits(&self, bit_len: usize) -> usize {
        (bit_len + self.suffix.len() + 2).div_ceil(self.rate) * self.rate
    }

    /// Lays out `message || suffix || pad10*1` in a zeroed buffer.
    ///
    /// All bit writes OR into the buffer, so the pattern that spans two
    /// blocks (position ≡ rate − 1) needs no special case.
    fn pad(&self, message: &[u8], bit_len: usize) -> Vec<u8> {
        let total = self.padded_bits(bit_len);
        let mut buf = vec![0u8; total.div_ceil(8)];

        buf[..bit_len / 8].copy_from_slice(&message[..bit_len / 8]);
        if bit_len % 8 != 0 {
            buf[bit_len / 8] = message[bit_len / 8] & ((1 << (bit_len % 8)) - 1);
        }
        for i in 0..self.suffix.len() {
            if self.suffix.bit(i) == 1 {
                set_bit(&mut buf, bit_len + i);
            }
        }
        set_bit(&mut buf, bit_len + self.suffix.len());
        set_bit(&mut buf, total - 1);
        buf
    }

    fn run_buffer<W: Lane, const BITS: usize>(&self, message: &[u8], bit_len: usize) -> Vec<u8> {
        let padded = self.pad(message, bit_len);
        let total = self.padded_bits(bit_len);

        let mut state = KeccakState::<W, BITS>::new(self.complement);
        let mut off = 0;
        while off < total {
            state.absorb_block(&padded, off, self.rate);
            state.permute();
            off += self.rate;
        }
        self.squeeze(&mut state)
    }

    fn run_reader<W: Lane, const BITS: usize>(
        &self,
        reader: &mut dyn Read,
    ) -> Result<Vec<u8>, Error> {
        let rate_bytes = self.rate / 8;
        let mut state = KeccakState::<W, BITS>::new(self.complement);
        let mut block = vec![0u8; rate_bytes];
        loop {
            let filled = read_full(reader, &mut block)?;
            if filled == rate_bytes {
                state.absorb_block(&block, 0, self.rate);
                state.permute();
                continue;
            }
            // The short block at the end of the source takes the same
            // suffix-and-pad path as a buffered message tail.
            let padded = self.pad(&block[..filled], filled * 8);
            let total = self.padded_bits(filled * 8);
            let mut off = 0;
            while off < total {
                state.absorb_block(&padded, off, self.rate);
                state.permute();
                off += self.rate;
            }
            return Ok(self.squeeze(&mut state));
        }
    }

    fn squeeze<W: Lane, const BITS: usize>(&self, state: &mut KeccakState<W, BITS>) -> Vec<u8> {
        let mut out = vec![0u8; self.output_bits.div_ceil(8)];
        let mut written = 0;
        loop {
            let take = self.rate.min(self.output_bits - written);
            state.squeeze_block(&mut out, written, take);
            written += take;
            if written == self.output_bits {
                return out;
            }
            state.permute();
        }
    }
}

fn set_bit(buf: &mut [u8], i: usize) {
    buf[i >> 3] |= 1 << (i & 7);
}

/// Reads until `buf` is full or the source is exhausted, retrying
/// interrupted reads. Returns the number of bytes read.
fn read_full(reader: &mut dyn Read, buf: &mut [u8]) -> Result<usize, Error> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
