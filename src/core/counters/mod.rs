pub mod fixed;
pub mod random;
pub mod sequential;
pub mod traits;

pub use fixed::FixedIncrementer;
pub use random::{RandomIncrementer, MAX_RANDOM_INCREMENT};
pub use sequential::SequentialIncrementer;
pub use traits::Incrementable;
