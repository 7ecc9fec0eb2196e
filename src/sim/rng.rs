//! Random draws used by the simulation
//!
//! The teacher's schedule is the only consumer. Production code runs on a
//! seeded `Pcg32`; tests feed scripted values.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform integer draws
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// Build the production RNG from a run seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of draws, clamped to the requested range.
///
/// Once the script runs out the last value repeats, so a one-element script
/// behaves like a constant source.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
    last: u32,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            last: 0,
        }
    }

    /// Draws not consumed yet
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if let Some(v) = self.values.pop_front() {
            self.last = v;
        }
        self.last.clamp(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replays_then_repeats() {
        let mut rng = ScriptedRng::new([3, 200, 7]);
        assert_eq!(rng.range_inclusive(2, 5), 3);
        assert_eq!(rng.range_inclusive(60, 180), 180);
        assert_eq!(rng.range_inclusive(1, 100), 7);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.range_inclusive(1, 100), 7);
        assert_eq!(rng.range_inclusive(2, 5), 5);
    }

    #[test]
    fn test_pcg_stays_in_range_and_is_deterministic() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..1000 {
            let x = a.range_inclusive(2, 5);
            assert!((2..=5).contains(&x));
            assert_eq!(x, b.range_inclusive(2, 5));
        }
    }
}
