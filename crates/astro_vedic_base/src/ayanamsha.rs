//! Lahiri (Chitrapaksha) ayanamsha.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to the fixed
//! stars). As the equinox precesses westward, it increases over time.
//!
//! The Lahiri value is fixed by the Calendar Reform Committee at its
//! reference epoch, 1956-03-21 00:00 TT, and carried to any other epoch by
//! the IAU 2006 general precession in longitude:
//!
//! `aya(T) = aya0 + (p_A(T) - p_A(T0)) / 3600`

use astro_frames::general_precession_longitude_deg;
use astro_time::jd_to_centuries;

use crate::util::normalize_360;

/// Reference epoch of the Lahiri definition, JD (TT).
pub const LAHIRI_REFERENCE_JD: f64 = 2_435_553.5;

/// Mean Lahiri ayanamsha at the reference epoch, degrees.
///
/// 23 deg 15' 00.658" with that date's nutation in longitude removed.
pub const LAHIRI_REFERENCE_DEG: f64 = 23.245_522_556;

/// Lahiri ayanamsha in degrees at `t_centuries` of TT since J2000.0.
pub fn lahiri_ayanamsha_deg(t_centuries: f64) -> f64 {
    let t0 = jd_to_centuries(LAHIRI_REFERENCE_JD);
    LAHIRI_REFERENCE_DEG + general_precession_longitude_deg(t_centuries)
        - general_precession_longitude_deg(t0)
}

/// Sidereal longitude from a tropical longitude and an ayanamsha value.
pub fn sidereal_longitude(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}
