use crate::core::types::Position;

/// Stateful counter that produces successive positions under a fixed advancement rule.
///
/// Implementors own a single integer value that only `increment()` may change.
/// Arithmetic wraps on overflow; reaching `Position::MAX` is a known boundary,
/// not an error.
pub trait Incrementable {
    /// Advance the counter by its policy and return the new value
    fn increment(&mut self) -> Position;

    /// Current value without advancing
    fn value(&self) -> Position;
}

impl<T> Incrementable for &mut T
where
    T: Incrementable + ?Sized,
{
    fn increment(&mut self) -> Position {
        (**self).increment()
    }

    fn value(&self) -> Position {
        (**self).value()
    }
}

impl<T> Incrementable for Box<T>
where
    T: Incrementable + ?Sized,
{
    fn increment(&mut self) -> Position {
        (**self).increment()
    }

    fn value(&self) -> Position {
        (**self).value()
    }
}
