//! Combination generation.
//!
//! A combination is the fixed secret sequence of 16 symbols for one game.
//! Generation is deterministic and platform-independent: the pseudo-random
//! algorithm is pinned to SplitMix64 rather than inherited from a library
//! default, so the same seed yields the same combination on every target.

use crate::types::{Seed, Symbol};
use rand_core::{Error, RngCore, SeedableRng, impls};

/// Number of symbols in a combination. Hard domain constant.
pub const COMBINATION_LEN: usize = 16;

/// SplitMix64 pseudo-random generator.
///
/// 64 bits of state advanced by the golden-gamma increment, with the output
/// derived through two xor-multiply mixing rounds. The output function is a
/// bijection of the state, giving a full-period 2^64 stream.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// The fixed secret sequence of 16 symbols for one game.
///
/// Generated once when a game starts and immutable thereafter. The engine
/// owns the combination for the lifetime of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Combination([Symbol; COMBINATION_LEN]);

impl Combination {
    /// Generates the combination for a seed.
    ///
    /// One 64-bit draw per symbol; the draw's low bit selects the symbol
    /// (set is `Left`, clear is `Right`).
    pub fn generate(seed: Seed) -> Self {
        let mut rng = SplitMix64::seed_from_u64(seed);
        Self(core::array::from_fn(|_| {
            if rng.next_u64() & 1 == 1 {
                Symbol::Left
            } else {
                Symbol::Right
            }
        }))
    }

    /// Returns the symbols in order.
    pub fn symbols(&self) -> &[Symbol; COMBINATION_LEN] {
        &self.0
    }

    /// Returns the symbol at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }
}
