pub mod core;

// Re-export commonly used types
pub use crate::core::config::{CounterKind, SamplerConfig};
pub use crate::core::counters::{
    FixedIncrementer, Incrementable, RandomIncrementer, SequentialIncrementer,
};
pub use crate::core::errors::CounterError;
pub use crate::core::selector::InspectionSelector;
pub use crate::core::types::Position;
