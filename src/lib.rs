//! SHA-3 Hash Functions
//!
//! This crate provides portable, pure Rust implementations of the SHA-3 hashing
//! functions and the SHAKE extendable-output functions standardized in
//! [FIPS 202], built on an explicit sponge over Keccak-f[1600].
//!
//! The permutation works on 25 native 64-bit lanes. The [`reference`] module
//! defines the same permutation and sponge bit by bit over the 5x5x64 state
//! cube and is used to check the lane implementation.
//!
//! # Limitations
//!
//! This software is intended as a learning exercise and not for production use.
//! No effort is made to protect against side channels.
//!
//! Only the [`reference`] sponge accepts messages whose length is not a
//! multiple of 8 bits.
//!
//! # Example Usage
//! ```
//! # use sha3_sponge::sha3_256;
//! #
//! let message = b"your input bytes";
//! let hash: [u8; 32] = sha3_256(message);
//! let expected = "414d4b6d11a92aaeeebe35f9374942f563848d345631bf5537407252dca6b378";
//! assert_eq!(expected, hex::encode(hash))
//! ```
//!
//! Selecting the digest size at runtime:
//! ```
//! # use sha3_sponge::{Error, hash};
//! let digest = hash(b"", 512)?;
//! assert_eq!(64, digest.len());
//! assert_eq!(Err(Error::UnknownVariant(160)), hash(b"", 160));
//! # Ok::<(), Error>(())
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

mod error;
mod hasher;
pub mod padding;
mod params;
pub mod permute;
pub mod reference;
pub mod sponge;
pub mod state;

pub use crate::{
    error::{Error, Result},
    hasher::{
        HashSize, Hasher, Out224, Out256, Out384, Out512, Output, Sha3_224, Sha3_256, Sha3_384,
        Sha3_512, Shake, XofReader,
    },
    padding::Domain,
    params::{SpongeParams, Variant, Xof},
    sponge::Sponge,
    state::StateCube,
};

/// Hash `data` with the SHA-3 function whose digest is `digest_bits` long.
///
/// Fails with [`Error::UnknownVariant`] unless `digest_bits` is one of 224,
/// 256, 384 or 512.
pub fn hash(data: &[u8], digest_bits: usize) -> Result<Vec<u8>> {
    let variant = Variant::try_from(digest_bits)?;
    Ok(variant.digest(data))
}

impl Variant {
    /// Hash `data`, returning [`Variant::output_len`] bytes.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        let mut output = vec![0; self.output_len()];
        Sponge::new(self.params(), Domain::Sha3).digest(data, &mut output);
        output
    }
}

fn fixed<const N: usize>(params: SpongeParams, domain: Domain, message: &[u8]) -> [u8; N] {
    let mut output = [0; N];
    Sponge::new(params, domain).digest(message, &mut output);
    output
}

/// SHA-3 Hash with 224 bits (28 bytes) output.
pub fn sha3_224(message: &[u8]) -> [u8; 28] {
    fixed(Variant::Sha3_224.params(), Domain::Sha3, message)
}

/// SHA-3 Hash with 256 bits (32 bytes) output.
pub fn sha3_256(message: &[u8]) -> [u8; 32] {
    fixed(Variant::Sha3_256.params(), Domain::Sha3, message)
}

/// SHA-3 Hash with 384 bits (48 bytes) output.
pub fn sha3_384(message: &[u8]) -> [u8; 48] {
    fixed(Variant::Sha3_384.params(), Domain::Sha3, message)
}

/// SHA-3 Hash with 512 bits (64 bytes) output.
pub fn sha3_512(message: &[u8]) -> [u8; 64] {
    fixed(Variant::Sha3_512.params(), Domain::Sha3, message)
}

/// Keccak-256 as submitted to the SHA-3 competition: the SHA3-256
/// parameters without the SHA-3 domain suffix.
pub fn keccak256(message: &[u8]) -> [u8; 32] {
    fixed(Variant::Sha3_256.params(), Domain::Keccak, message)
}

/// SHAKE128, filling all of `output`.
pub fn shake128(message: &[u8], output: &mut [u8]) {
    Sponge::new(Xof::Shake128.params(), Domain::Shake).digest(message, output);
}

/// SHAKE256, filling all of `output`.
pub fn shake256(message: &[u8], output: &mut [u8]) {
    Sponge::new(Xof::Shake256.params(), Domain::Shake).digest(message, output);
}
