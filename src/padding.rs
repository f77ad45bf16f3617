//! Domain separation and the pad10*1 rule.
//!
//! The suffix of a [`Domain`] is appended to the message before padding, so
//! functions built on the same permutation never share a padded input.
//! Bit sequences here are in the FIPS 202 order: the first bit of a byte is
//! its least significant bit.

/// Domain separation applied before pad10*1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// SHA3-224/256/384/512, suffix `01`.
    Sha3,
    /// SHAKE128/256, suffix `1111`.
    Shake,
    /// Original Keccak submission, no suffix.
    Keccak,
}

impl Domain {
    /// Suffix bits appended to the message, in order.
    pub const fn suffix(self) -> &'static [bool] {
        match self {
            Domain::Sha3 => &[false, true],
            Domain::Shake => &[true, true, true, true],
            Domain::Keccak => &[],
        }
    }

    /// The suffix followed by the first `1` of pad10*1, packed LSB first into
    /// a byte. Used when the message ends on a byte boundary.
    pub const fn delimited_suffix(self) -> u8 {
        match self {
            Domain::Sha3 => 0b0000_0110,
            Domain::Shake => 0b0001_1111,
            Domain::Keccak => 0b0000_0001,
        }
    }
}

/// Last bit of pad10*1 when the rate is a multiple of 8.
pub(crate) const FINAL_PAD_BIT: u8 = 0b1000_0000;

/// Number of zero bits pad10*1 inserts for a `len`-bit input and rate
/// `rate`, i.e. `(rate - 2 - len) mod rate`.
///
/// # Panics
/// If `rate < 2`.
pub const fn zero_padding_len(len: usize, rate: usize) -> usize {
    assert!(rate >= 2, "pad10*1 needs a rate of at least 2 bits");
    (2 * rate - 2 - len % rate) % rate
}

/// Append `1 0* 1` so the length of `bits` becomes a multiple of `rate`.
pub fn pad10star1(bits: &mut Vec<bool>, rate: usize) {
    let zeros = zero_padding_len(bits.len(), rate);
    bits.reserve(zeros + 2);
    bits.push(true);
    bits.extend(std::iter::repeat_n(false, zeros));
    bits.push(true);
}

/// Append the domain suffix and pad10*1 to `bits`.
pub fn pad(bits: &mut Vec<bool>, domain: Domain, rate: usize) {
    bits.extend_from_slice(domain.suffix());
    pad10star1(bits, rate);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: usize = 1088;

    fn pad_len(len: usize, rate: usize) -> usize {
        let mut bits = vec![false; len];
        pad10star1(&mut bits, rate);
        assert_eq!(0, bits.len() % rate);
        assert!(bits[len] && bits[bits.len() - 1]);
        assert!(bits[len + 1..bits.len() - 1].iter().all(|b| !b));
        bits.len() - len
    }

    #[test]
    fn minimal_and_maximal_padding() {
        assert_eq!(2, pad_len(RATE - 2, RATE));
        assert_eq!(RATE + 1, pad_len(RATE - 1, RATE));
        assert_eq!(RATE, pad_len(0, RATE));
        assert_eq!(RATE, pad_len(3 * RATE, RATE));
        assert_eq!(RATE - 5, pad_len(RATE + 5, RATE));
    }

    #[test]
    fn padding_length_is_bounded() {
        for rate in [72 * 8, 104 * 8, 136 * 8, 144 * 8, 2, 3, 17] {
            for len in 0..3 * rate {
                let added = pad_len(len, rate);
                assert!((2..=rate + 1).contains(&added), "rate {rate}, len {len}");
            }
        }
    }

    #[test]
    fn sha3_suffix_precedes_padding() {
        // An input whose length after the suffix is R - 2 gets the minimal pad.
        let mut bits = vec![true; RATE - 4];
        pad(&mut bits, Domain::Sha3, RATE);
        assert_eq!(RATE, bits.len());
        assert_eq!([false, true, true, true], bits[RATE - 4..]);

        // An input that is block aligned after the suffix gets a full block.
        let mut bits = vec![true; RATE - 2];
        pad(&mut bits, Domain::Sha3, RATE);
        assert_eq!(2 * RATE, bits.len());
        assert_eq!([false, true, true, false], bits[RATE - 2..RATE + 2]);
    }

    #[test]
    fn delimited_suffix_matches_bits() {
        for domain in [Domain::Sha3, Domain::Shake, Domain::Keccak] {
            let mut bits = domain.suffix().to_vec();
            bits.push(true);
            let packed = bits
                .iter()
                .enumerate()
                .fold(0_u8, |acc, (i, bit)| acc | (u8::from(*bit) << i));
            assert_eq!(domain.delimited_suffix(), packed, "{domain:?}");
        }
    }
}
