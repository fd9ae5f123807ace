use super::traits::Incrementable;
use crate::core::types::Position;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of a single random increment
pub const MAX_RANDOM_INCREMENT: Position = 100;

/// Counter that adds a uniformly drawn amount in `[0, MAX_RANDOM_INCREMENT)` per increment.
///
/// Draws are never negative, so the value still never decreases (short of overflow).
/// Use [`RandomIncrementer::seeded`] for a reproducible sequence.
#[derive(Debug, Clone)]
pub struct RandomIncrementer {
    value: Position,
    rng: StdRng,
}

impl RandomIncrementer {
    /// Start at 0 with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_start(0)
    }

    pub fn with_start(start_value: Position) -> Self {
        Self {
            value: start_value,
            rng: StdRng::from_entropy(),
        }
    }

    /// Start at `start_value` with a generator seeded from `seed`
    pub fn seeded(seed: u64, start_value: Position) -> Self {
        Self {
            value: start_value,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIncrementer {
    fn default() -> Self {
        Self::new()
    }
}

impl Incrementable for RandomIncrementer {
    fn increment(&mut self) -> Position {
        let old = self.value;
        let delta = self.rng.gen_range(0..MAX_RANDOM_INCREMENT);
        self.value = self.value.wrapping_add(delta);
        trace!("random: {} + {} -> {}", old, delta, self.value);
        self.value
    }

    fn value(&self) -> Position {
        self.value
    }
}
