//! Time handling for the snapshot engine.
//!
//! This crate provides:
//! - Timestamp normalization (offset-aware, frame-timezone fallback)
//! - Julian Date arithmetic, including the Julian-century helper shared
//!   by every polynomial in TT
//! - Delta T (TT - UT) from baked-in polynomials
//! - Earth rotation angle and mean sidereal time

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod normalize;
pub mod sidereal;

pub use delta_t::{decimal_year, delta_t_at_jd, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd,
    jd_from_utc, jd_of_midnight, jd_to_centuries,
};
pub use normalize::{NormalizedInstant, normalize_timestamp};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};
