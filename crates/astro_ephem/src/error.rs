//! Error types for ephemeris evaluation.

use thiserror::Error;

/// Errors from an [`crate::Ephemeris`] query.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested epoch lies outside the model's validity window.
    #[error("epoch JD {jd} (TT) is outside the supported range [{start}, {end})")]
    UnsupportedEpoch { jd: f64, start: f64, end: f64 },
}
