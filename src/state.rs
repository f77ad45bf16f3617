//! The 1600-bit Keccak state, viewed as a 5x5x64 cube.
//!
//! Bits are addressed by `(x, y, z)` with linear index `64 * (5y + x) + z`.
//! Internally the cube is stored as 25 lanes, one `u64` per `(x, y)`, with
//! bit `z` of a lane being bit `z` of the integer. The byte view used by the
//! sponge is little-endian per lane, which keeps the bit numbering of the byte
//! view identical to the linear bit index.
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Width b of Keccak-f[1600] in bits.
pub const WIDTH: usize = 1600;

/// Lane size w in bits.
pub const LANE_BITS: usize = 64;

/// Number of lanes in the state.
pub const LANES: usize = 25;

/// Size of the state in bytes.
pub const STATE_BYTES: usize = WIDTH / 8;

/// Lane of the [`StateCube`] containing w = 64 bits.
pub type Lane = u64;

/// State array A of Keccak-f[1600]. Contains 1600 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateCube([Lane; LANES]);

/// Compute a [`Lane`] index in [`StateCube`].
#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    // % ops are optimized out
    (x % 5) + 5 * (y % 5)
}

/// Lane access by `(x, y)`, with both coordinates taken mod 5.
impl Index<(usize, usize)> for StateCube {
    type Output = Lane;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.0[idx(x, y)]
    }
}

impl IndexMut<(usize, usize)> for StateCube {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.0[idx(x, y)]
    }
}

impl StateCube {
    /// The all-zero state.
    pub const fn new() -> Self {
        Self([0; LANES])
    }

    pub const fn from_lanes(lanes: [Lane; LANES]) -> Self {
        Self(lanes)
    }

    pub const fn lanes(&self) -> &[Lane; LANES] {
        &self.0
    }

    /// Read bit `(x, y, z)`.
    ///
    /// # Panics
    /// If any coordinate lies outside the cube. Every caller in this crate
    /// iterates within the cube bounds, so a panic here is a bug.
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        assert!(
            in_bounds(x, y, z),
            "state coordinate ({x}, {y}, {z}) out of bounds"
        );
        (self.0[idx(x, y)] >> z) & 1 == 1
    }

    /// Write bit `(x, y, z)`.
    ///
    /// # Panics
    /// If any coordinate lies outside the cube.
    pub fn set(&mut self, x: usize, y: usize, z: usize, bit: bool) {
        assert!(
            in_bounds(x, y, z),
            "state coordinate ({x}, {y}, {z}) out of bounds"
        );
        let lane = &mut self.0[idx(x, y)];
        *lane = (*lane & !(1 << z)) | ((bit as Lane) << z);
    }

    /// Like [`StateCube::get`], but reports bad coordinates as an error.
    pub fn try_get(&self, x: usize, y: usize, z: usize) -> Result<bool> {
        check_bounds(x, y, z)?;
        Ok(self.get(x, y, z))
    }

    /// Like [`StateCube::set`], but reports bad coordinates as an error.
    pub fn try_set(&mut self, x: usize, y: usize, z: usize, bit: bool) -> Result<()> {
        check_bounds(x, y, z)?;
        self.set(x, y, z, bit);
        Ok(())
    }

    /// XOR `bytes` into the byte view of the state, starting at `offset`.
    pub(crate) fn xor_bytes(&mut self, offset: usize, bytes: &[u8]) {
        debug_assert!(offset + bytes.len() <= STATE_BYTES);
        for (i, byte) in (offset..).zip(bytes) {
            self.0[i / 8] ^= Lane::from(*byte) << (8 * (i % 8));
        }
    }

    /// Copy `out.len()` bytes of the state's byte view, starting at `offset`.
    pub(crate) fn copy_bytes(&self, offset: usize, out: &mut [u8]) {
        debug_assert!(offset + out.len() <= STATE_BYTES);
        for (i, byte) in (offset..).zip(out.iter_mut()) {
            *byte = (self.0[i / 8] >> (8 * (i % 8))) as u8;
        }
    }
}

fn in_bounds(x: usize, y: usize, z: usize) -> bool {
    x < 5 && y < 5 && z < LANE_BITS
}

fn check_bounds(x: usize, y: usize, z: usize) -> Result<()> {
    if in_bounds(x, y, z) {
        Ok(())
    } else {
        Err(Error::OutOfBounds { x, y, z })
    }
}
