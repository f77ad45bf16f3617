//! Sponge parameters and the standard presets.
use std::str::FromStr;

use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{
    error::{Error, Result},
    state::WIDTH,
};

/// Rate and capacity of a sponge over Keccak-f[1600], in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpongeParams {
    rate: usize,
    capacity: usize,
}

impl SpongeParams {
    /// Parameters for the byte-oriented sponge.
    ///
    /// Fails unless `rate + capacity == 1600` and `rate` is a positive
    /// multiple of 8.
    pub fn new(rate: usize, capacity: usize) -> Result<Self> {
        let params = Self::new_unaligned(rate, capacity)?;
        if rate % 8 != 0 {
            tracing::debug!(rate, "rejecting rate that is not byte aligned");
            return Err(Error::InvalidRate(rate));
        }
        Ok(params)
    }

    /// Parameters for the bit-oriented [`crate::reference`] sponge, which
    /// accepts any rate of at least 2 bits.
    pub fn new_unaligned(rate: usize, capacity: usize) -> Result<Self> {
        if rate.checked_add(capacity) != Some(WIDTH) {
            tracing::debug!(rate, capacity, "rejecting sponge width");
            return Err(Error::InvalidWidth { rate, capacity });
        }
        if rate < 2 {
            tracing::debug!(rate, "rejecting rate too small for pad10*1");
            return Err(Error::InvalidRate(rate));
        }
        Ok(Self { rate, capacity })
    }

    /// Parameters with capacity `2 * security_bits`, as used by every preset.
    const fn from_security(security_bits: usize) -> Self {
        Self {
            rate: WIDTH - 2 * security_bits,
            capacity: 2 * security_bits,
        }
    }

    pub const fn rate(&self) -> usize {
        self.rate
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rate in bytes. Exact for parameters built with [`SpongeParams::new`].
    pub const fn rate_bytes(&self) -> usize {
        self.rate / 8
    }
}

/// The SHA-3 hash functions of FIPS 202.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Variant {
    #[strum(to_string = "SHA3-224")]
    Sha3_224,
    #[strum(to_string = "SHA3-256")]
    Sha3_256,
    #[strum(to_string = "SHA3-384")]
    Sha3_384,
    #[strum(to_string = "SHA3-512")]
    Sha3_512,
}

impl Variant {
    /// Digest size in bits.
    pub const fn bits(self) -> usize {
        match self {
            Variant::Sha3_224 => 224,
            Variant::Sha3_256 => 256,
            Variant::Sha3_384 => 384,
            Variant::Sha3_512 => 512,
        }
    }

    /// Digest size in bytes.
    pub const fn output_len(self) -> usize {
        self.bits() / 8
    }

    /// Rate 1600 - 2d and capacity 2d for digest size d.
    pub const fn params(self) -> SpongeParams {
        SpongeParams::from_security(self.bits())
    }
}

impl TryFrom<usize> for Variant {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        Variant::iter()
            .find(|variant| variant.bits() == bits)
            .ok_or(Error::UnknownVariant(bits))
    }
}

/// Parses `"SHA3-256"`, `"sha3_256"` or `"256"`, ignoring case.
impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let bits = normalized.strip_prefix("sha3-").unwrap_or(&normalized);
        bits.parse::<usize>()
            .ok()
            .and_then(|bits| Variant::try_from(bits).ok())
            .ok_or_else(|| Error::UnknownVariantName(s.to_owned()))
    }
}

/// The SHAKE extendable-output functions of FIPS 202.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Xof {
    #[strum(to_string = "SHAKE128")]
    Shake128,
    #[strum(to_string = "SHAKE256")]
    Shake256,
}

impl Xof {
    /// Security strength in bits.
    pub const fn security_bits(self) -> usize {
        match self {
            Xof::Shake128 => 128,
            Xof::Shake256 => 256,
        }
    }

    pub const fn params(self) -> SpongeParams {
        SpongeParams::from_security(self.security_bits())
    }
}
