//! Error type for the checked entry points.
//!
//! The enumeration procedures themselves are total; only the boundary
//! functions that take untyped or user-supplied parameters can fail.

/// Errors reported by the checked entry points of this crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A parameter was outside the domain of the operation, e.g. a negative `k`
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input set is larger than the configured limit
    #[error("set has {len} elements, more than the configured maximum of {max}")]
    TooManyElements {
        /// Size of the rejected input
        len: usize,
        /// Configured limit
        max: usize,
    },

    /// A strategy name did not match any known engine
    #[error("unknown partition strategy: {0:?}")]
    UnknownStrategy(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
