use super::traits::Incrementable;
use crate::core::types::Position;
use log::trace;

/// Counter that moves forward one step at a time.
///
/// The step defaults to 1, so a counter started at `s` returns `s + k` on its k-th
/// increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIncrementer {
    value: Position,
    step: Position,
}

impl SequentialIncrementer {
    /// Create a counter starting at 0 with step 1
    pub fn new() -> Self {
        Self::with_step(1, 0)
    }

    /// Create a counter starting at `start_value` with step 1
    pub fn with_start(start_value: Position) -> Self {
        Self::with_step(1, start_value)
    }

    /// Create a counter with an explicit step and start value
    pub fn with_step(step: Position, start_value: Position) -> Self {
        Self {
            value: start_value,
            step,
        }
    }

    pub fn step(&self) -> Position {
        self.step
    }
}

impl Default for SequentialIncrementer {
    fn default() -> Self {
        Self::new()
    }
}

impl Incrementable for SequentialIncrementer {
    fn increment(&mut self) -> Position {
        let old = self.value;
        self.value = self.value.wrapping_add(self.step);
        trace!("sequential: {} + {} -> {}", old, self.step, self.value);
        self.value
    }

    fn value(&self) -> Position {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_zero() {
        let counter = SequentialIncrementer::default();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.step(), 1);
    }

    #[test]
    fn test_kth_increment_returns_start_plus_k() {
        let start = 42;
        let mut counter = SequentialIncrementer::with_start(start);
        for k in 1..=20 {
            assert_eq!(counter.increment(), start + k);
        }
    }

    #[test]
    fn test_start_value_ten() {
        let mut counter = SequentialIncrementer::with_start(10);
        assert_eq!(counter.increment(), 11);
        assert_eq!(counter.increment(), 12);
    }

    #[test]
    fn test_custom_step() {
        let mut counter = SequentialIncrementer::with_step(3, 1);
        assert_eq!(counter.increment(), 4);
        assert_eq!(counter.increment(), 7);
    }

    #[test]
    fn test_value_does_not_advance() {
        let mut counter = SequentialIncrementer::new();
        counter.increment();
        assert_eq!(counter.value(), 1);
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_wraps_at_max() {
        let mut counter = SequentialIncrementer::with_start(Position::MAX);
        assert_eq!(counter.increment(), Position::MIN);
    }
}
