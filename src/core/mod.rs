pub mod config;
pub mod counters;
pub mod errors;
pub mod selector;
pub mod types;
