//! Lagna (ascendant) ecliptic longitude.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 14;
//! standard spherical astronomy. All inputs and outputs in degrees.

use crate::util::normalize_360;

/// Tropical ecliptic longitude of the ascendant in [0, 360).
///
/// `lst_deg` is the local sidereal time as an angle, `latitude_deg` the
/// geographic latitude, `obliquity_deg` the obliquity of the ecliptic.
///
/// `Asc = atan2(cos LST, -(sin LST cos eps + tan phi sin eps))`
pub fn lagna_longitude_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    normalize_360(asc.to_degrees())
}
