use thiserror::Error;

/// Core error type shared across dfxray crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested aspect is outside the fixed enumeration.
    #[error("unknown aspect: {0}")]
    UnknownAspect(String),
    /// The rule registry violates internal invariants.
    #[error("invalid registry: {0}")]
    InvalidRegistry(String),
}

/// Convenience alias for results returned by dfxray crates.
pub type Result<T> = std::result::Result<T, Error>;
