//! RNG module - deterministic random source for dealing grids
//!
//! The grid never reaches for ambient randomness. It draws from a
//! [`RandomSource`] handed in by the caller, so a seed fully determines a round.
//! [`SimpleRng`] is the default source: a small LCG that is cheap to clone and
//! reproducible across platforms.

use crate::types::ColorId;

/// Source of uniformly distributed integers used to deal tile colors.
pub trait RandomSource {
    /// Random value in `[0, max)`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32;

    /// Random color in `[0, color_count)`.
    fn next_color(&mut self, color_count: u8) -> ColorId {
        ColorId(self.next_range(color_count as u32) as u8)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state. Seeding a new generator with it replays the
    /// remaining sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    /// Scales by the high bits: the low bits of a power-of-two LCG cycle with
    /// a tiny period, so `% max` would deal visibly striped boards.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
