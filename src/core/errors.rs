/// Errors raised while turning a textual or declarative description into a counter.
///
/// Counter and selector operations themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// Counter kind name not recognised
    UnknownKind(String),
    /// Configuration fields that do not apply to the chosen kind
    InvalidConfig(String),
}

impl std::fmt::Display for CounterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterError::UnknownKind(name) => write!(f, "Unknown counter kind: {}", name),
            CounterError::InvalidConfig(msg) => write!(f, "Invalid counter config: {}", msg),
        }
    }
}

impl std::error::Error for CounterError {}
