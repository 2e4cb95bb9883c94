//! Error types for timestamp normalization.

use thiserror::Error;

/// Errors from turning caller input into a UTC instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input could not be parsed, lacks seconds, or names a local time
    /// that does not exist in the frame timezone.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: &'static str },
}

impl TimeError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        Self::InvalidTimestamp {
            input: input.to_string(),
            reason,
        }
    }
}
