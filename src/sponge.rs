//! KECCAK Sponge construction with incremental API.
use tracing::trace;

use crate::{
    padding::{Domain, FINAL_PAD_BIT},
    params::SpongeParams,
    permute::keccak_f1600,
    state::StateCube,
};

/// 4. Sponge construction instantiated with `pad10*1` and
/// `KECCAK-p[1600, 24]`, together with a domain suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponge {
    params: SpongeParams,
    domain: Domain,
}

impl Sponge {
    /// # Panics
    /// If the rate is not a multiple of 8, which only parameters built with
    /// [`SpongeParams::new_unaligned`] can have.
    pub const fn new(params: SpongeParams, domain: Domain) -> Self {
        assert!(
            params.rate() % 8 == 0,
            "the byte-oriented sponge needs a byte aligned rate"
        );
        Self { params, domain }
    }

    pub const fn params(&self) -> SpongeParams {
        self.params
    }

    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Start absorbing into a fresh all-zero state.
    pub fn absorb_start(&self) -> Absorbing {
        trace!(rate = self.params.rate(), domain = ?self.domain, "absorb start");
        Absorbing {
            pos: 0,
            rate: self.params.rate_bytes(),
            domain: self.domain,
            state: StateCube::new(),
        }
    }

    /// Absorb `input` and fill `output` with the squeezed bytes.
    pub fn digest(&self, input: &[u8], output: &mut [u8]) {
        let mut absorbing = self.absorb_start();
        absorbing.absorb(input);
        absorbing.finish().squeeze(output);
    }
}

/// Absorb bytes into the Keccak-f[1600] state.
#[derive(Clone)]
pub struct Absorbing {
    pos: usize,
    rate: usize,
    domain: Domain,
    state: StateCube,
}

impl Absorbing {
    pub fn absorb(&mut self, msg: &[u8]) {
        // first, we handle a potentially partial block, either due to an advanced
        // position or msg.len() < rate
        let partial_block_len = (self.rate - self.pos).min(msg.len());
        let (first_msg, rest_msg) = msg.split_at(partial_block_len);
        self.state.xor_bytes(self.pos, first_msg);
        // if the block was filled, we permute and reset the position
        if self.pos + partial_block_len == self.rate {
            keccak_f1600(&mut self.state);
            self.pos = 0;
        } else {
            self.pos += partial_block_len;
            debug_assert!(rest_msg.is_empty());
            return;
        }

        // Absorb the remaining message
        let mut chunks = rest_msg.chunks_exact(self.rate);
        for chunk in &mut chunks {
            self.state.xor_bytes(0, chunk);
            keccak_f1600(&mut self.state);
        }
        let rest = chunks.remainder();
        self.pos = rest.len();
        self.state.xor_bytes(0, rest);
    }

    /// Add domain separator and padding and turn into [`Squeezing`].
    ///
    /// Note that this performs no permute! Contrary to FIPS 202, the
    /// squeezing phase starts with a permutation instead of the absorbing
    /// phase ending with one.
    pub fn finish(mut self) -> Squeezing {
        trace!(pos = self.pos, "absorb finish");
        self.state
            .xor_bytes(self.pos, &[self.domain.delimited_suffix()]);
        self.state.xor_bytes(self.rate - 1, &[FINAL_PAD_BIT]);
        Squeezing {
            pos: 0,
            rate: self.rate,
            state: self.state,
        }
    }
}

/// Squeeze bytes from the Keccak-f[1600] state.
#[derive(Clone)]
pub struct Squeezing {
    pos: usize,
    rate: usize,
    state: StateCube,
}

impl Squeezing {
    /// Fill `output` with the next bytes of the sponge output.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        if output.is_empty() {
            return;
        }

        if self.pos == 0 {
            keccak_f1600(&mut self.state);
        }
        let partial_block_len = (self.rate - self.pos).min(output.len());
        let (first_output, rest_output) = output.split_at_mut(partial_block_len);
        self.state.copy_bytes(self.pos, first_output);
        self.pos = (self.pos + partial_block_len) % self.rate;
        if rest_output.is_empty() {
            return;
        }

        let mut chunks = rest_output.chunks_exact_mut(self.rate);
        for chunk in &mut chunks {
            keccak_f1600(&mut self.state);
            self.state.copy_bytes(0, chunk);
        }
        let rest = chunks.into_remainder();
        self.pos = rest.len();
        if !rest.is_empty() {
            keccak_f1600(&mut self.state);
            self.state.copy_bytes(0, rest);
        }
    }
}
