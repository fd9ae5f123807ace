use crate::core::counters::Incrementable;
use crate::core::types::Position;
use log::debug;

/// Picks devices off the conveyor belt for quality inspection.
///
/// Every call to [`sample_device_position`](Self::sample_device_position) advances the
/// held counter once and reports the resulting belt position. The selector keeps no state
/// of its own; hand it `&mut counter` to keep ownership with the caller, or a
/// `Box<dyn Incrementable>` to choose the policy at runtime.
#[derive(Debug)]
pub struct InspectionSelector<I: Incrementable> {
    incrementer: I,
}

impl<I: Incrementable> InspectionSelector<I> {
    pub fn new(incrementer: I) -> Self {
        Self { incrementer }
    }

    /// Position of the next device to pull for inspection
    pub fn sample_device_position(&mut self) -> Position {
        self.incrementer.increment();
        let position = self.incrementer.value();
        debug!("selected device at position {}", position);
        position
    }

    pub fn counter(&self) -> &I {
        &self.incrementer
    }

    pub fn into_inner(self) -> I {
        self.incrementer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counters::{FixedIncrementer, RandomIncrementer, SequentialIncrementer};

    #[test]
    fn test_first_call_with_default_sequential_returns_one() {
        let mut selector = InspectionSelector::new(SequentialIncrementer::new());
        assert_eq!(selector.sample_device_position(), 1);
    }

    #[test]
    fn test_second_call_with_default_sequential_returns_two() {
        let mut selector = InspectionSelector::new(SequentialIncrementer::new());
        selector.sample_device_position();
        assert_eq!(selector.sample_device_position(), 2);
    }

    #[test]
    fn test_start_value_offsets_positions() {
        let start = 10;
        let mut selector = InspectionSelector::new(SequentialIncrementer::with_start(start));
        assert_eq!(selector.sample_device_position(), start + 1);
        assert_eq!(selector.sample_device_position(), start + 2);
    }

    #[test]
    fn test_first_call_with_random_in_range() {
        let mut selector = InspectionSelector::new(RandomIncrementer::new());
        let result = selector.sample_device_position();
        assert!((0..=99).contains(&result), "unexpected position {}", result);
    }

    #[test]
    fn test_borrowed_counter_visible_to_caller() {
        let mut counter = FixedIncrementer::with_step(4);
        {
            let mut selector = InspectionSelector::new(&mut counter);
            selector.sample_device_position();
            selector.sample_device_position();
        }
        assert_eq!(counter.value(), 8);
    }

    #[test]
    fn test_counter_and_into_inner() {
        let mut selector = InspectionSelector::new(SequentialIncrementer::with_start(3));
        selector.sample_device_position();
        assert_eq!(selector.counter().value(), 4);
        let counter = selector.into_inner();
        assert_eq!(counter.value(), 4);
    }
}
