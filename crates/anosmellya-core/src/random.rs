//! Deterministic pseudo-random generator.
//!
//! Every stochastic decision in a world (founder placement, crossover coin
//! flips, mutation, plant placement) draws from one [`Random`] owned by that
//! world, so a seed fully determines a run.

/// Seeded linear congruential generator over a 32-bit state.
///
/// Not suitable for anything security related. Two generators built from
/// the same seed produce the same sequence on every platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Random {
    state: u32,
}

impl Random {
    const MULTIPLIER: u32 = 1_103_515_245;
    const INCREMENT: u32 = 12_345;
    /// `2^32`, the exclusive upper bound of [`next_u32`](Self::next_u32) as a float.
    const SPAN: f64 = 4_294_967_296.0;

    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Restart the sequence from `seed`.
    pub fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Advance the state and return it.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Uniform value in `[0, max)` for a positive `max`.
    ///
    /// A `max` of zero always yields zero.
    pub fn next_float(&mut self, max: f32) -> f32 {
        let v = (self.next_u32() as f64 / Self::SPAN * max as f64) as f32;
        // Narrowing to f32 can round the top of the range up onto `max`.
        if max > 0.0 && v >= max {
            max.next_down()
        } else {
            v
        }
    }

    /// Uniform value in `[-max, max)`.
    pub fn next_signed(&mut self, max: f32) -> f32 {
        self.next_float(max * 2.0) - max
    }

    /// Fair coin flip: `true` when the next state is even.
    pub fn coin(&mut self) -> bool {
        self.next_u32() % 2 == 0
    }

    /// Returns `true` with probability `chance`.
    ///
    /// Chances at or below zero never fire; chances at or above one always do.
    pub fn chance(&mut self, chance: f32) -> bool {
        chance > self.next_float(1.0)
    }

    /// Uniform index in `0..len`. `len` must be nonzero.
    pub fn index(&mut self, len: u32) -> u32 {
        debug_assert!(len > 0, "index() needs a nonempty range");
        self.next_u32() % len
    }
}
