use std::marker::PhantomData;

use crate::{
    padding::Domain,
    params::{Variant, Xof},
    sponge::{Absorbing, Sponge, Squeezing},
};

/// Incremental SHA-3 hasher with output size chosen by `S`.
///
/// ```
/// # use sha3_sponge::{Sha3_256, sha3_256};
/// let mut hasher = Sha3_256::new();
/// hasher.update(b"your input ");
/// hasher.update(b"bytes");
/// assert_eq!(sha3_256(b"your input bytes"), hasher.finalize());
/// ```
#[derive(Clone)]
pub struct Hasher<S: HashSize> {
    state: Absorbing,
    _size: PhantomData<S>,
}

/// Marker type for 224-bit output.
#[derive(Debug, Clone, Copy)]
pub struct Out224;
/// Marker type for 256-bit output.
#[derive(Debug, Clone, Copy)]
pub struct Out256;
/// Marker type for 384-bit output.
#[derive(Debug, Clone, Copy)]
pub struct Out384;
/// Marker type for 512-bit output.
#[derive(Debug, Clone, Copy)]
pub struct Out512;

/// SHA-3 [`Hasher`] with 224-bit output.
pub type Sha3_224 = Hasher<Out224>;
/// SHA-3 [`Hasher`] with 256-bit output.
pub type Sha3_256 = Hasher<Out256>;
/// SHA-3 [`Hasher`] with 384-bit output.
pub type Sha3_384 = Hasher<Out384>;
/// SHA-3 [`Hasher`] with 512-bit output.
pub type Sha3_512 = Hasher<Out512>;

impl<S: HashSize> Hasher<S> {
    pub fn new() -> Self {
        Hasher {
            state: Sponge::new(S::VARIANT.params(), Domain::Sha3).absorb_start(),
            _size: PhantomData,
        }
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.state.absorb(msg);
    }

    pub fn finalize(self) -> S::Output {
        let mut output = S::Output::default();
        self.state.finish().squeeze(output.as_mut());
        output
    }
}

impl<S: HashSize> Default for Hasher<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(private_bounds)]
pub trait HashSize: Params {
    type Output: Output;
}

trait Params {
    const VARIANT: Variant;
}

impl HashSize for Out224 {
    type Output = [u8; 28];
}

impl Params for Out224 {
    const VARIANT: Variant = Variant::Sha3_224;
}

impl HashSize for Out256 {
    type Output = [u8; 32];
}

impl Params for Out256 {
    const VARIANT: Variant = Variant::Sha3_256;
}

impl HashSize for Out384 {
    type Output = [u8; 48];
}

impl Params for Out384 {
    const VARIANT: Variant = Variant::Sha3_384;
}

impl HashSize for Out512 {
    type Output = [u8; 64];
}

impl Params for Out512 {
    const VARIANT: Variant = Variant::Sha3_512;
}

// The normal Default trait is not implemented for arrays with len > 32, so we
// define this helper trait
pub trait Output: AsMut<[u8]> + private::Sealed {
    fn default() -> Self;
}

impl<const N: usize> Output for [u8; N] {
    fn default() -> Self {
        [0; N]
    }
}

mod private {
    impl<const N: usize> Sealed for [u8; N] {}

    pub trait Sealed {}
}

/// Incremental SHAKE extendable-output function.
#[derive(Clone)]
pub struct Shake {
    state: Absorbing,
}

impl Shake {
    pub fn new(xof: Xof) -> Self {
        Self {
            state: Sponge::new(xof.params(), Domain::Shake).absorb_start(),
        }
    }

    pub fn shake128() -> Self {
        Self::new(Xof::Shake128)
    }

    pub fn shake256() -> Self {
        Self::new(Xof::Shake256)
    }

    pub fn update(&mut self, msg: &[u8]) {
        self.state.absorb(msg);
    }

    /// Pad the input and switch to reading output.
    pub fn finalize_xof(self) -> XofReader {
        XofReader {
            state: self.state.finish(),
        }
    }
}

/// Reads an unbounded output stream from a finalized [`Shake`].
#[derive(Clone)]
pub struct XofReader {
    state: Squeezing,
}

impl XofReader {
    /// Fill `output` with the next bytes of the stream.
    pub fn read(&mut self, output: &mut [u8]) {
        self.state.squeeze(output);
    }
}
