#![cfg(test)]

//! Property tests over the public sponge surface.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::fips202;
use crate::{Sponge, Suffix};

const WIDTHS: [usize; 7] = [25, 50, 100, 200, 400, 800, 1600];

/// Valid sponges across every permutation width, bitrate, suffix, and
/// output length.
fn arb_sponge() -> impl Strategy<Value = Sponge> {
    (0..WIDTHS.len(), any::<u8>(), 0u8..=8, 1usize..600).prop_flat_map(
        |(w, suffix_bits, suffix_len, output_bits)| {
            let width = WIDTHS[w];
            (1..width).prop_map(move |rate| {
                let bits: Vec<u8> = (0..suffix_len).map(|i| (suffix_bits >> i) & 1).collect();
                let suffix = Suffix::from_bits(&bits).unwrap();
                Sponge::new(rate, width - rate, suffix, output_bits).unwrap()
            })
        },
    )
}

/// A message together with a bit length that trims up to 7 trailing bits.
fn arb_bit_message() -> impl Strategy<Value = (Vec<u8>, usize)> {
    (vec(any::<u8>(), 0..120), 0usize..8).prop_map(|(bytes, drop)| {
        let bit_len = (bytes.len() * 8).saturating_sub(drop);
        (bytes, bit_len)
    })
}

fn bit(buf: &[u8], i: usize) -> u8 {
    (buf[i >> 3] >> (i & 7)) & 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn equal_inputs_give_equal_outputs(
        sponge in arb_sponge(),
        (message, bit_len) in arb_bit_message(),
    ) {
        let first = sponge.apply_bits(&message, bit_len).unwrap();
        let second = sponge.apply_bits(&message, bit_len).unwrap();
        prop_assert_eq!(&first, &second);

        // The lane-complementing transform never changes the output.
        let plain = sponge
            .with_lane_complementing(false)
            .apply_bits(&message, bit_len)
            .unwrap();
        prop_assert_eq!(&first, &plain);

        prop_assert_eq!(sponge.output_bits().div_ceil(8), first.len());
        if sponge.output_bits() % 8 != 0 {
            let unused = !((1u8 << (sponge.output_bits() % 8)) - 1);
            prop_assert_eq!(0, first.last().unwrap() & unused);
        }
    }

    #[test]
    fn byte_bit_and_reader_paths_agree(
        sponge in arb_sponge(),
        message in vec(any::<u8>(), 0..120),
    ) {
        let buffered = sponge.apply(&message);
        let bitwise = sponge.apply_bits(&message, message.len() * 8).unwrap();
        prop_assert_eq!(&buffered, &bitwise);

        if sponge.rate() % 8 == 0 {
            let streamed = sponge.apply_reader(&message[..]).unwrap();
            prop_assert_eq!(&buffered, &streamed);
        }
    }

    #[test]
    fn padding_is_one_zeros_one_to_a_rate_multiple(
        sponge in arb_sponge(),
        (message, bit_len) in arb_bit_message(),
    ) {
        let buf = sponge.pad(&message, bit_len);
        let total = sponge.padded_bits(bit_len);
        let p = bit_len + sponge.suffix().len();

        // Smallest multiple of the rate with room for the two pad bits.
        prop_assert_eq!(0, total % sponge.rate());
        prop_assert!(total >= p + 2);
        prop_assert!(total - sponge.rate() < p + 2);

        prop_assert_eq!(1, bit(&buf, p));
        prop_assert_eq!(1, bit(&buf, total - 1));
        for i in p + 1..total - 1 {
            prop_assert_eq!(0, bit(&buf, i), "padding bit {} is set", i);
        }
    }

    #[test]
    fn xof_outputs_are_prefixes(
        message in vec(any::<u8>(), 0..300),
        a in 1usize..600,
        b in 1usize..600,
    ) {
        let (n1, n2) = (a.min(b), a.max(b));
        let short = fips202::shake128(&message, n1).unwrap();
        let long = fips202::shake128(&message, n2).unwrap();

        let full = n1 / 8;
        prop_assert_eq!(&short[..full], &long[..full]);
        if n1 % 8 != 0 {
            let mask = (1u8 << (n1 % 8)) - 1;
            prop_assert_eq!(short[full], long[full] & mask);
        }
    }

    #[test]
    fn raw_shake_outputs_are_prefixes(
        message in vec(any::<u8>(), 0..300),
        a in 1usize..600,
        b in 1usize..600,
    ) {
        let (n1, n2) = (a.min(b), a.max(b));
        let short = fips202::raw_shake256(&message, n1).unwrap();
        let long = fips202::raw_shake256(&message, n2).unwrap();

        let full = n1 / 8;
        prop_assert_eq!(&short[..full], &long[..full]);
        if n1 % 8 != 0 {
            let mask = (1u8 << (n1 % 8)) - 1;
            prop_assert_eq!(short[full], long[full] & mask);
        }
    }

    #[test]
    fn sha3_suffix_separates_from_plain_keccak(message in vec(any::<u8>(), 0..300)) {
        prop_assert_ne!(fips202::sha3_256(&message), fips202::keccak256(&message));
    }

    #[test]
    fn sha3_256_matches_reference_implementation(message in vec(any::<u8>(), 0..600)) {
        use sha3::Digest;
        let reference = sha3::Sha3_256::digest(&message);
        prop_assert_eq!(reference.as_slice(), fips202::sha3_256(&message));
    }
}
