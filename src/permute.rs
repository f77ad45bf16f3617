//! Keccak-f[1600] permutation on whole lanes.
//!
//! Each step mapping works on the 25 lanes of a [`StateCube`] with shifts,
//! rotations and bitwise operations. The per-bit definitions in
//! [`crate::reference`] are the correctness oracle for this module.
#![allow(non_snake_case)]
use crate::state::{LANE_BITS, LANES, Lane, StateCube};

// NOTE: References to Sections, Algorithms, Tables, etc. refer to the
// FIPS 202 standard (https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)
// if not otherwise specified.

/// log2 of the lane size w.
pub const L: usize = 6;

/// Number of rounds nr = 12 + 2L performed by Keccak-f[1600].
pub const ROUNDS: usize = 12 + 2 * L;

/// 3.3 Algorithm 7: KECCAK-p[b, nr](S)
///
/// Not the generic algorithm, but specialized to `b = 1600` and `nr = 24`.
/// See Section 3.4 of FIPS 202.
pub fn keccak_f1600(state: &mut StateCube) {
    for round in 0..ROUNDS {
        theta(state);
        rho(state);
        pi(state);
        chi(state);
        iota(state, round);
        #[cfg(test)]
        counter::tick();
    }
}

/// 3.2.1 Algorithm 1: θ(A)
pub(crate) fn theta(A: &mut StateCube) {
    // We have 5 * 64 columns, whose parity bits we can store in 5 lanes
    let mut C: [Lane; 5] = Default::default();
    // Step 1
    for (x, Cx) in C.iter_mut().enumerate() {
        *Cx = A[(x, 0)] ^ A[(x, 1)] ^ A[(x, 2)] ^ A[(x, 3)] ^ A[(x, 4)];
    }

    // Interleaved step 2 and 3
    for x in 0..5 {
        // (x + 4) % 5 is x - 1 mod 5
        let D = C[(x + 4) % 5] ^ C[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            A[(x, y)] ^= D;
        }
    }
}

/// Rotation offsets of ρ, indexed by `x + 5y`.
///
/// Generated by the walk of 3.2.2 Algorithm 2: starting at `(1, 0)`, step t
/// assigns `(t + 1)(t + 2) / 2 mod w` and moves to `(y, 2x + 3y mod 5)`.
/// Lane (0, 0) is never visited and keeps offset 0.
pub const RHO_OFFSETS: [u32; LANES] = rho_offsets();

const fn rho_offsets() -> [u32; LANES] {
    let mut offsets = [0; LANES];
    let (mut x, mut y) = (1, 0);
    let mut t = 0;
    while t < 24 {
        offsets[x + 5 * y] = (((t + 1) * (t + 2) / 2) % LANE_BITS) as u32;
        (x, y) = (y, (2 * x + 3 * y) % 5);
        t += 1;
    }
    offsets
}

/// 3.2.2 Algorithm 2: ρ(A)
pub(crate) fn rho(A: &mut StateCube) {
    for x in 0..5 {
        for y in 0..5 {
            A[(x, y)] = A[(x, y)].rotate_left(RHO_OFFSETS[x + 5 * y]);
        }
    }
}

/// 3.2.3 Algorithm 3: π(A)
pub(crate) fn pi(A: &mut StateCube) {
    let temp_A = *A;
    for x in 0..5 {
        for y in 0..5 {
            A[(x, y)] = temp_A[(x + 3 * y, x)];
        }
    }
}

/// 3.2.4 Algorithm 4: χ(A)
pub(crate) fn chi(A: &mut StateCube) {
    let mut C: [Lane; 5] = Default::default();

    for y in 0..5 {
        for (x, Cx) in C.iter_mut().enumerate() {
            *Cx = A[(x, y)] ^ (!A[(x + 1, y)] & A[(x + 2, y)]);
        }
        for (x, Cx) in C.into_iter().enumerate() {
            A[(x, y)] = Cx;
        }
    }
}

/// 3.2.5 Algorithm 5: rc(t)
///
/// Output bit of the LFSR over x^8 + x^6 + x^5 + x^4 + 1 after `t mod 255`
/// steps, starting from `R = 10000000`.
pub const fn rc(t: usize) -> bool {
    let mut R: u8 = 1;
    let mut i = 0;
    while i < t % 255 {
        let top = R >> 7;
        R <<= 1;
        if top == 1 {
            R ^= 0b0111_0001;
        }
        i += 1;
    }
    R & 1 == 1
}

/// Round constants applied to the (0, 0) lane in the [`iota`] step.
pub const ROUND_CONSTANTS: [Lane; ROUNDS] = round_constants();

const fn round_constants() -> [Lane; ROUNDS] {
    let mut constants = [0; ROUNDS];
    let mut round = 0;
    while round < ROUNDS {
        let mut j = 0;
        while j <= L {
            if rc(j + 7 * round) {
                constants[round] |= 1 << ((1 << j) - 1);
            }
            j += 1;
        }
        round += 1;
    }
    constants
}

/// 3.2.5 Algorithm 6: ι(A, ir)
pub(crate) fn iota(A: &mut StateCube, round: usize) {
    A[(0, 0)] ^= ROUND_CONSTANTS[round];
}
