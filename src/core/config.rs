//! Declarative description of an inspection counter
//!
//! This module provides configuration types for choosing a counter policy at runtime
//! and building the matching counter or selector from it.

use crate::core::counters::{
    FixedIncrementer, Incrementable, RandomIncrementer, SequentialIncrementer,
};
use crate::core::errors::CounterError;
use crate::core::selector::InspectionSelector;
use crate::core::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of supported counter policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterKind {
    /// Adds the step (1 by default) on every increment
    #[default]
    Sequential,
    /// Adds a configured constant on every increment
    Fixed,
    /// Adds a uniform draw from `[0, 100)` on every increment
    Random,
}

impl FromStr for CounterKind {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(CounterKind::Sequential),
            "fixed" => Ok(CounterKind::Fixed),
            "random" => Ok(CounterKind::Random),
            _ => Err(CounterError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CounterKind::Sequential => "sequential",
            CounterKind::Fixed => "fixed",
            CounterKind::Random => "random",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for an inspection counter
///
/// Start value and step are always explicit fields so the defaults are visible
/// rather than hidden in constructor overloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// The counter policy to build
    pub kind: CounterKind,
    /// Value before the first increment
    pub start_value: Position,
    /// Increment for the sequential and fixed policies; must stay 1 for random
    pub step: Position,
    /// Generator seed for the random policy; entropy is used when absent
    pub seed: Option<u64>,
}

impl SamplerConfig {
    /// Create a configuration with default values
    ///
    /// Defaults to a sequential counter starting at 0 with step 1
    pub fn new() -> Self {
        Self {
            kind: CounterKind::default(),
            start_value: 0,
            step: 1,
            seed: None,
        }
    }

    pub fn with_kind(mut self, kind: CounterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_start_value(mut self, start_value: Position) -> Self {
        self.start_value = start_value;
        self
    }

    pub fn with_step(mut self, step: Position) -> Self {
        self.step = step;
        self
    }

    /// Set the generator seed
    ///
    /// # Note
    /// Only valid when kind is Random
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every set field applies to the chosen kind
    pub fn validate(&self) -> Result<(), CounterError> {
        match self.kind {
            CounterKind::Random if self.step != 1 => Err(CounterError::InvalidConfig(format!(
                "random counter does not take a step (got {})",
                self.step
            ))),
            CounterKind::Sequential | CounterKind::Fixed if self.seed.is_some() => {
                Err(CounterError::InvalidConfig(format!(
                    "{} counter does not take a seed",
                    self.kind
                )))
            }
            _ => Ok(()),
        }
    }

    /// Build the counter described by this configuration
    pub fn build_counter(&self) -> Result<Box<dyn Incrementable>, CounterError> {
        self.validate()?;
        let counter: Box<dyn Incrementable> = match self.kind {
            CounterKind::Sequential => {
                Box::new(SequentialIncrementer::with_step(self.step, self.start_value))
            }
            CounterKind::Fixed => Box::new(FixedIncrementer::with_step_and_start(
                self.step,
                self.start_value,
            )),
            CounterKind::Random => match self.seed {
                Some(seed) => Box::new(RandomIncrementer::seeded(seed, self.start_value)),
                None => Box::new(RandomIncrementer::with_start(self.start_value)),
            },
        };
        Ok(counter)
    }

    /// Build a selector driving the counter described by this configuration
    pub fn build_selector(
        &self,
    ) -> Result<InspectionSelector<Box<dyn Incrementable>>, CounterError> {
        Ok(InspectionSelector::new(self.build_counter()?))
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new()
    }
}
