//! Bit-addressed model of SHA-3.
//!
//! Every step mapping here reads and writes single bits through
//! [`StateCube::get`] and [`StateCube::set`], following the coordinate
//! definitions of FIPS 202 Section 3.2 literally and building a fresh cube per
//! step. The sponge works on `Vec<bool>`, so messages need not end on a byte
//! boundary. This is orders of magnitude slower than [`crate::permute`] and is
//! meant as a correctness oracle.
#![allow(non_snake_case)]
use crate::{
    padding::{Domain, pad},
    params::SpongeParams,
    permute::{L, ROUNDS, rc},
    state::{LANE_BITS as W, StateCube},
};

/// 3.2.1 Algorithm 1: θ(A)
pub fn theta(A: &StateCube) -> StateCube {
    let C = |x: usize, z: usize| (0..5).fold(false, |parity, y| parity ^ A.get(x, y, z));
    let D = |x: usize, z: usize| C((x + 4) % 5, z) ^ C((x + 1) % 5, (z + W - 1) % W);

    let mut A_new = StateCube::new();
    for x in 0..5 {
        for y in 0..5 {
            for z in 0..W {
                A_new.set(x, y, z, A.get(x, y, z) ^ D(x, z));
            }
        }
    }
    A_new
}

/// 3.2.2 Algorithm 2: ρ(A)
pub fn rho(A: &StateCube) -> StateCube {
    let mut A_new = StateCube::new();
    for z in 0..W {
        A_new.set(0, 0, z, A.get(0, 0, z));
    }

    let (mut x, mut y) = (1, 0);
    for t in 0..24 {
        let offset = (t + 1) * (t + 2) / 2;
        for z in 0..W {
            A_new.set(x, y, z, A.get(x, y, (z + W - offset % W) % W));
        }
        (x, y) = (y, (2 * x + 3 * y) % 5);
    }
    A_new
}

/// 3.2.3 Algorithm 3: π(A)
pub fn pi(A: &StateCube) -> StateCube {
    let mut A_new = StateCube::new();
    for x in 0..5 {
        for y in 0..5 {
            for z in 0..W {
                A_new.set(x, y, z, A.get((x + 3 * y) % 5, x, z));
            }
        }
    }
    A_new
}

/// 3.2.4 Algorithm 4: χ(A)
pub fn chi(A: &StateCube) -> StateCube {
    let mut A_new = StateCube::new();
    for x in 0..5 {
        for y in 0..5 {
            for z in 0..W {
                let bit = A.get(x, y, z) ^ (!A.get((x + 1) % 5, y, z) & A.get((x + 2) % 5, y, z));
                A_new.set(x, y, z, bit);
            }
        }
    }
    A_new
}

/// 3.2.5 Algorithm 6: ι(A, ir)
pub fn iota(A: &StateCube, round: usize) -> StateCube {
    let mut RC = [false; W];
    for j in 0..=L {
        RC[(1 << j) - 1] = rc(j + 7 * round);
    }

    let mut A_new = *A;
    for (z, bit) in RC.into_iter().enumerate() {
        A_new.set(0, 0, z, A.get(0, 0, z) ^ bit);
    }
    A_new
}

/// Rnd(A, ir) = ι(χ(π(ρ(θ(A)))), ir)
pub fn round(A: &StateCube, round: usize) -> StateCube {
    iota(&chi(&pi(&rho(&theta(A)))), round)
}

/// Keccak-f[1600]: all 24 rounds in increasing round order.
pub fn keccak_f1600(A: &StateCube) -> StateCube {
    (0..ROUNDS).fold(*A, |A, ir| round(&A, ir))
}

/// Bits of `bytes`, least significant bit of each byte first.
pub fn bits_from_bytes(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).map(move |i| (byte >> i) & 1 == 1))
        .collect()
}

/// Inverse of [`bits_from_bytes`]. A trailing partial byte is zero filled.
pub fn bytes_from_bits(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0, |byte, (i, bit)| byte | (u8::from(*bit) << i))
        })
        .collect()
}

/// Coordinates of linear bit `i`, the inverse of `64 * (5y + x) + z`.
fn coords(i: usize) -> (usize, usize, usize) {
    let (lane, z) = (i / W, i % W);
    (lane % 5, lane / 5, z)
}

fn state_to_bits(S: &StateCube, len: usize) -> Vec<bool> {
    (0..len)
        .map(|i| {
            let (x, y, z) = coords(i);
            S.get(x, y, z)
        })
        .collect()
}

/// Absorb an already padded message, one rate sized block at a time.
///
/// # Panics
/// If the length of `padded` is not a multiple of the rate.
pub fn absorb(padded: &[bool], params: SpongeParams) -> StateCube {
    let rate = params.rate();
    assert_eq!(0, padded.len() % rate, "message is not padded");

    let mut S = StateCube::new();
    for block in padded.chunks(rate) {
        for (i, bit) in block.iter().enumerate() {
            let (x, y, z) = coords(i);
            S.set(x, y, z, S.get(x, y, z) ^ bit);
        }
        S = keccak_f1600(&S);
    }
    S
}

/// Emit the first `rate` bits of the state, then permute, until
/// `output_bits` bits have been produced.
pub fn squeeze(mut S: StateCube, params: SpongeParams, output_bits: usize) -> Vec<bool> {
    let mut Z = Vec::with_capacity(output_bits);
    loop {
        Z.extend(state_to_bits(&S, params.rate()));
        if Z.len() >= output_bits {
            break;
        }
        S = keccak_f1600(&S);
    }
    Z.truncate(output_bits);
    Z
}

/// SPONGE[Keccak-f[1600], pad10*1, rate](N || suffix, d) for a message of
/// arbitrary bit length.
pub fn sponge(message: &[bool], params: SpongeParams, domain: Domain, output_bits: usize) -> Vec<bool> {
    let mut padded = message.to_vec();
    pad(&mut padded, domain, params.rate());
    squeeze(absorb(&padded, params), params, output_bits)
}
