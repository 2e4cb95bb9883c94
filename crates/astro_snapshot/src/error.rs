//! Errors surfaced by the snapshot entry point.

use astro_ephem::EphemerisError;
use astro_time::TimeError;
use astro_vedic_base::VedicError;
use thiserror::Error;

/// Stable error code for the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidTimestamp,
    UnsupportedEpoch,
    InvalidOrb,
}

impl ErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidTimestamp => "INVALID_TIMESTAMP",
            Self::UnsupportedEpoch => "UNSUPPORTED_EPOCH",
            Self::InvalidOrb => "INVALID_ORB",
        }
    }
}

/// A snapshot request that cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: String },
    /// `jd` is the Julian Date of the rejected instant: UT when it falls
    /// outside the snapshot window, TT when the ephemeris refuses it.
    #[error("instant at JD {jd} is outside the supported range")]
    UnsupportedEpoch { jd: f64 },
    /// `orb` is `None` when aspects were requested without an orb.
    #[error("{}", describe_orb(.orb))]
    InvalidOrb { orb: Option<f64> },
}

fn describe_orb(orb: &Option<f64>) -> String {
    match orb {
        Some(orb) => format!("invalid orb {orb}: must be finite and greater than zero"),
        None => "an orb is required when aspects are requested".to_string(),
    }
}

impl SnapshotError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
            Self::UnsupportedEpoch { .. } => ErrorKind::UnsupportedEpoch,
            Self::InvalidOrb { .. } => ErrorKind::InvalidOrb,
        }
    }
}

impl From<TimeError> for SnapshotError {
    fn from(err: TimeError) -> Self {
        match err {
            TimeError::InvalidTimestamp { input, reason } => Self::InvalidTimestamp {
                input,
                reason: reason.to_string(),
            },
            other => Self::InvalidTimestamp {
                input: String::new(),
                reason: other.to_string(),
            },
        }
    }
}

impl From<EphemerisError> for SnapshotError {
    fn from(err: EphemerisError) -> Self {
        match err {
            EphemerisError::UnsupportedEpoch { jd, .. } => Self::UnsupportedEpoch { jd },
            _ => Self::UnsupportedEpoch { jd: f64::NAN },
        }
    }
}

impl From<VedicError> for SnapshotError {
    fn from(err: VedicError) -> Self {
        match err {
            VedicError::InvalidOrb { orb } => Self::InvalidOrb { orb: Some(orb) },
            _ => Self::InvalidOrb { orb: None },
        }
    }
}
