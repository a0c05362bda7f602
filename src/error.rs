//! Crate error type and result alias.

use std::fmt;

/// An error raised by the route search engine.
///
/// All variants indicate a misconfigured run rather than a transient
/// condition; they are surfaced immediately and never silently corrected.
///
/// # Examples
///
/// ```
/// use evoroute::error::EngineError;
///
/// let err = EngineError::invalid_input("capacity must be positive");
/// assert_eq!(err.to_string(), "invalid input: capacity must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Input validation failed (empty location set, non-positive capacity,
    /// mutation probability outside `[0, 1]`, mismatched lengths, ...).
    InvalidInput(String),
}

impl EngineError {
    /// Creates an [`EngineError::InvalidInput`] from anything string-like.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// A result type specialized to [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;
