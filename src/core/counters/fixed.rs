use super::traits::Incrementable;
use crate::core::types::Position;
use log::trace;

/// Counter that adds a configured constant `n` on every increment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIncrementer {
    value: Position,
    n: Position,
}

impl FixedIncrementer {
    /// Step 1, start 0
    pub fn new() -> Self {
        Self::with_step_and_start(1, 0)
    }

    pub fn with_step(n: Position) -> Self {
        Self::with_step_and_start(n, 0)
    }

    pub fn with_step_and_start(n: Position, start_value: Position) -> Self {
        Self {
            value: start_value,
            n,
        }
    }

    pub fn step(&self) -> Position {
        self.n
    }
}

impl Default for FixedIncrementer {
    fn default() -> Self {
        Self::new()
    }
}

impl Incrementable for FixedIncrementer {
    fn increment(&mut self) -> Position {
        let old = self.value;
        self.value = self.value.wrapping_add(self.n);
        trace!("fixed: {} + {} -> {}", old, self.n, self.value);
        self.value
    }

    fn value(&self) -> Position {
        self.value
    }
}
