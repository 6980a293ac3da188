//! Linear congruential generator
//!
//! A 32-bit LCG with the MSVC `rand()` parameters. Password streams are only
//! reproducible if this exact generator is used, so the update rule is fixed:
//!
//! `state = 214013 * state + 2531011 (mod 2^32)`, output `(state >> 16) & 0x7FFF`.

use crate::constants::{DRAW_MAX, LCG_INCREMENT, LCG_MULTIPLIER};

/// LCG random number generator
///
/// One instance seeds the workers, and every worker owns a private one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Reset the generator state
    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state and return a value in `[0, 32767]`
    #[inline]
    pub fn draw(&mut self) -> u32 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT);
        (self.state >> 16) & DRAW_MAX
    }
}

/// Derive one seed per worker from the seeding generator
///
/// For each worker: draw until a nonzero value `r` comes up, discard the
/// next `r` draws, then take the following draw as the worker seed. The
/// number of skipped draws depends on the seeding state, so neighbouring
/// workers do not end up on trivially shifted streams.
pub fn derive_worker_seeds(global: &mut Lcg, count: usize) -> Vec<u32> {
    let mut seeds = Vec::with_capacity(count);

    for _ in 0..count {
        let mut skip = 0;
        while skip == 0 {
            skip = global.draw();
        }
        for _ in 0..skip {
            global.draw();
        }
        seeds.push(global.draw());
    }

    seeds
}
