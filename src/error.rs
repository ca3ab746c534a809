//! Error taxonomy for the core engines.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the core engines.
///
/// Every variant indicates a programming-contract violation at the call
/// site; nothing here is transient or retryable. Out-of-range node access
/// in the mark operations is deliberately *not* an error (it is defined
/// no-op/false behavior).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit-sequence length that must be a power of two is not.
    #[error("length {0} is not a power of two")]
    InvalidLength(usize),

    /// A malformed input, e.g. a variable index out of range or a bad
    /// hexadecimal digit.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A violated caller contract, e.g. freeing a color that is not
    /// allocated or removing a variable that is still in the support.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}
