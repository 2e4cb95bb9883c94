//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Aspect orb must be a finite, strictly positive number of degrees.
    #[error("invalid orb {orb}: must be finite and greater than zero")]
    InvalidOrb { orb: f64 },
}
