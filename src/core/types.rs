/// Integer type for counter values, steps and belt positions.
///
/// The first device of a batch sits at position 1.
pub type Position = i64;
