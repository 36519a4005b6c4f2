//! The FIPS 202 parameter sets: the SHA-3 hash functions, the SHAKE and
//! RawSHAKE extendable-output functions, and the original empty-suffix
//! Keccak-256/512 they descend from.
//!
//! All of them run on the 1600-bit permutation. The SHA-3 functions fix the
//! output length at the security level; the XOFs take it from the caller.

use crate::{Error, Sponge, Suffix, Width};

impl Sponge {
    /// SHA3-224: bitrate 1152, capacity 448, suffix `"01"`, 224-bit output.
    pub fn sha3_224() -> Sponge {
        Sponge::preset(1152, 448, Suffix::SHA3, 224, Width::B1600)
    }

    /// SHA3-256: bitrate 1088, capacity 512, suffix `"01"`, 256-bit output.
    pub fn sha3_256() -> Sponge {
        Sponge::preset(1088, 512, Suffix::SHA3, 256, Width::B1600)
    }

    /// SHA3-384: bitrate 832, capacity 768, suffix `"01"`, 384-bit output.
    pub fn sha3_384() -> Sponge {
        Sponge::preset(832, 768, Suffix::SHA3, 384, Width::B1600)
    }

    /// SHA3-512: bitrate 576, capacity 1024, suffix `"01"`, 512-bit output.
    pub fn sha3_512() -> Sponge {
        Sponge::preset(576, 1024, Suffix::SHA3, 512, Width::B1600)
    }

    /// SHAKE128: bitrate 1344, capacity 256, suffix `"1111"`, caller-chosen
    /// output length in bits.
    pub fn shake128(output_bits: usize) -> Result<Sponge, Error> {
        Ok(Sponge::preset(
            1344,
            256,
            Suffix::SHAKE,
            xof_output(output_bits)?,
            Width::B1600,
        ))
    }

    /// SHAKE256: bitrate 1088, capacity 512, suffix `"1111"`, caller-chosen
    /// output length in bits.
    pub fn shake256(output_bits: usize) -> Result<Sponge, Error> {
        Ok(Sponge::preset(
            1088,
            512,
            Suffix::SHAKE,
            xof_output(output_bits)?,
            Width::B1600,
        ))
    }

    /// RawSHAKE128: bitrate 1344, capacity 256, suffix `"11"`, caller-chosen
    /// output length in bits.
    pub fn raw_shake128(output_bits: usize) -> Result<Sponge, Error> {
        Ok(Sponge::preset(
            1344,
            256,
            Suffix::RAW_SHAKE,
            xof_output(output_bits)?,
            Width::B1600,
        ))
    }

    /// RawSHAKE256: bitrate 1088, capacity 512, suffix `"11"`, caller-chosen
    /// output length in bits.
    pub fn raw_shake256(output_bits: usize) -> Result<Sponge, Error> {
        Ok(Sponge::preset(
            1088,
            512,
            Suffix::RAW_SHAKE,
            xof_output(output_bits)?,
            Width::B1600,
        ))
    }

    /// The original Keccak-256 (empty suffix), as used by Ethereum.
    pub fn keccak256() -> Sponge {
        Sponge::preset(1088, 512, Suffix::EMPTY, 256, Width::B1600)
    }

    /// The original Keccak-512 (empty suffix).
    pub fn keccak512() -> Sponge {
        Sponge::preset(576, 1024, Suffix::EMPTY, 512, Width::B1600)
    }
}

fn xof_output(output_bits: usize) -> Result<usize, Error> {
    if output_bits == 0 {
        return Err(Error::InvalidParameter("output length must be at least 1"));
    }
    Ok(output_bits)
}

fn digest<const N: usize>(sponge: Sponge, message: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&sponge.apply(message));
    out
}

/// SHA3-224 of a byte message.
pub fn sha3_224(message: &[u8]) -> [u8; 28] {
    digest(Sponge::sha3_224(), message)
}

/// SHA3-256 of a byte message.
pub fn sha3_256(message: &[u8]) -> [u8; 32] {
    digest(Sponge::sha3_256(), message)
}

/// SHA3-384 of a byte message.
pub fn sha3_384(message: &[u8]) -> [u8; 48] {
    digest(Sponge::sha3_384(), message)
}

/// SHA3-512 of a byte message.
pub fn sha3_512(message: &[u8]) -> [u8; 64] {
    digest(Sponge::sha3_512(), message)
}

/// The first `output_bits` bits of SHAKE128 of a byte message.
pub fn shake128(message: &[u8], output_bits: usize) -> Result<Vec<u8>, Error> {
    Ok(Sponge::shake128(output_bits)?.apply(message))
}

/// The first `output_bits` bits of SHAKE256 of a byte message.
pub fn shake256(message: &[u8], output_bits: usize) -> Result<Vec<u8>, Error> {
    Ok(Sponge::shake256(output_bits)?.apply(message))
}

/// The first `output_bits` bits of RawSHAKE128 of a byte message.
pub fn raw_shake128(message: &[u8], output_bits: usize) -> Result<Vec<u8>, Error> {
    Ok(Sponge::raw_shake128(output_bits)?.apply(message))
}

/// The first `output_bits` bits of RawSHAKE256 of a byte message.
pub fn raw_shake256(message: &[u8], output_bits: usize) -> Result<Vec<u8>, Error> {
    Ok(Sponge::raw_shake256(output_bits)?.apply(message))
}

/// Keccak-256 of a byte message.
pub fn keccak256(message: &[u8]) -> [u8; 32] {
    digest(Sponge::keccak256(), message)
}

/// Keccak-512 of a byte message.
pub fn keccak512(message: &[u8]) -> [u8; 64] {
    digest(Sponge::keccak512(), message)
}

#[cfg(test)]
mod tests {
    use sha3::{Digest, Keccak256, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512};

    use super::*;

    /// Checks the default path, the plain-χ path, and the byte-source path
    /// against the same expected output.
    fn assert_all_paths(sponge: Sponge, message: &[u8], expected_hex: &str) {
        assert_eq!(expected_hex, hex::encode(sponge.apply(message)));
        assert_eq!(
            expected_hex,
            hex::encode(sponge.with_lane_complementing(false).apply(message)),
        );
        assert_eq!(
            expected_hex,
            hex::encode(sponge.apply_reader(message).unwrap()),
        );
    }

    #[test]
    fn sha3_256_empty_message() {
        assert_all_paths(
            Sponge::sha3_256(),
            b"",
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        );
    }

    #[test]
    fn sha3_256_abc() {
        assert_all_paths(
            Sponge::sha3_256(),
            b"abc",
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
        );
    }

    #[test]
    fn sha3_512_abc() {
        assert_all_paths(
            Sponge::sha3_512(),
            b"abc",
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
        );
    }

    #[test]
    fn shake128_empty_message() {
        assert_all_paths(
            Sponge::shake128(256).unwrap(),
            b"",
            "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
        );
    }

    #[test]
    fn shake256_empty_message() {
        assert_all_paths(
            Sponge::shake256(512).unwrap(),
            b"",
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f\
             d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
        );
    }

    #[test]
    fn sha3_224_applied_twice() {
        let first = sha3_224(b"abc");
        assert_eq!(
            "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
            hex::encode(first),
        );
        assert_all_paths(Sponge::sha3_224(), b"abc", &hex::encode(first));

        let second = sha3_224(&first);
        let expected = Sha3_224::digest(first);
        assert_eq!(expected.as_slice(), second);
        assert_all_paths(Sponge::sha3_224(), &first, &hex::encode(expected));
    }

    #[test]
    fn keccak256_empty_message() {
        assert_all_paths(
            Sponge::keccak256(),
            b"",
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        );
    }

    #[test]
    fn raw_shake_is_shake_without_the_trailing_11() {
        // SHAKE128(M) = RawSHAKE128(M || 11), FIPS 202 section 6.3.
        for message in [&b""[..], &b"abc"[..], &[0xa3u8; 200][..]] {
            let mut extended = message.to_vec();
            extended.push(0b11);
            let raw = Sponge::raw_shake128(256)
                .unwrap()
                .apply_bits(&extended, message.len() * 8 + 2)
                .unwrap();
            assert_eq!(shake128(message, 256).unwrap(), raw);

            let mut extended = message.to_vec();
            extended.push(0b11);
            let raw = Sponge::raw_shake256(256)
                .unwrap()
                .apply_bits(&extended, message.len() * 8 + 2)
                .unwrap();
            assert_eq!(shake256(message, 256).unwrap(), raw);
        }
    }

    #[test]
    fn xofs_reject_zero_output() {
        assert!(Sponge::shake128(0).is_err());
        assert!(Sponge::shake256(0).is_err());
        assert!(Sponge::raw_shake128(0).is_err());
        assert!(Sponge::raw_shake256(0).is_err());
    }

    // Beyond-one-block cross-checks against the RustCrypto implementations.

    #[test]
    fn sha3_matches_reference_implementation() {
        for len in 0..300 {
            let message: Vec<u8> = (0..len).map(|i| i as u8).collect();
            assert_eq!(
                Sha3_224::digest(&message).as_slice(),
                sha3_224(&message),
                "length {len}"
            );
            assert_eq!(
                Sha3_256::digest(&message).as_slice(),
                sha3_256(&message),
                "length {len}"
            );
            assert_eq!(
                Sha3_384::digest(&message).as_slice(),
                sha3_384(&message),
                "length {len}"
            );
            assert_eq!(
                Sha3_512::digest(&message).as_slice(),
                sha3_512(&message),
                "length {len}"
            );
        }
    }

    #[test]
    fn keccak_matches_reference_implementation() {
        for len in [0, 1, 64, 135, 136, 137, 200, 300] {
            let message: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(3)).collect();
            assert_eq!(
                Keccak256::digest(&message).as_slice(),
                keccak256(&message),
                "length {len}"
            );
            assert_eq!(
                Keccak512::digest(&message).as_slice(),
                keccak512(&message),
                "length {len}"
            );
        }
    }

    #[test]
    fn shake_matches_reference_implementation() {
        use sha3::digest::{ExtendableOutput, Update};

        for len in [0, 1, 100, 167, 168, 169, 400] {
            let message: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_add(7)).collect();

            let mut reference = sha3::Shake128::default();
            reference.update(&message);
            assert_eq!(
                reference.finalize_boxed(64).as_ref(),
                shake128(&message, 512).unwrap(),
                "length {len}"
            );

            let mut reference = sha3::Shake256::default();
            reference.update(&message);
            assert_eq!(
                reference.finalize_boxed(64).as_ref(),
                shake256(&message, 512).unwrap(),
                "length {len}"
            );
        }
    }
}
