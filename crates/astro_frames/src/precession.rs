//! Precession of ecliptic coordinates.
//!
//! The general precession p_A measures the accumulated westward motion of
//! the vernal equinox along the ecliptic since J2000.0. It carries both the
//! J2000-to-date transformation and the ayanamsha propagation.
//!
//! Sources:
//! - p_A: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).
//! - Ecliptic rotation: Meeus, *Astronomical Algorithms*, eq. 21.5 and 21.7,
//!   with the starting epoch fixed at J2000.0.

use crate::spherical::{
    SphericalCoords, cartesian_to_spherical, normalize_360, spherical_to_cartesian,
};

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` is Julian centuries of TT since J2000.0. The dominant linear term is
/// ~5028.80"/century, about 1.3969 deg/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// [`general_precession_longitude_arcsec`] in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Rotate ecliptic longitude/latitude (degrees) from the J2000 ecliptic and
/// equinox to the mean ecliptic and equinox of date.
fn precess_ecliptic_j2000_to_date(lon_deg: f64, lat_deg: f64, t: f64) -> (f64, f64) {
    let eta = ((47.0029 - 0.03302 * t + 0.000060 * t * t) * t / 3600.0).to_radians();
    let pi = (174.876384 + (-869.8089 * t + 0.03536 * t * t) / 3600.0).to_radians();
    let p = general_precession_longitude_deg(t).to_radians();

    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let (sin_eta, cos_eta) = eta.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_dl, cos_dl) = (pi - lon).sin_cos();

    let a = cos_eta * cos_lat * sin_dl - sin_eta * sin_lat;
    let b = cos_lat * cos_dl;
    let c = cos_eta * sin_lat + sin_eta * cos_lat * sin_dl;

    let lon_date = p + pi - a.atan2(b);
    (
        normalize_360(lon_date.to_degrees()),
        c.clamp(-1.0, 1.0).asin().to_degrees(),
    )
}

/// Precess a Cartesian ecliptic vector from J2000 to the ecliptic of date.
pub fn precess_vector_j2000_to_date(xyz: &[f64; 3], t: f64) -> [f64; 3] {
    let s = cartesian_to_spherical(xyz);
    let (lon_deg, lat_deg) = precess_ecliptic_j2000_to_date(s.lon_deg, s.lat_deg, t);
    spherical_to_cartesian(&SphericalCoords {
        lon_deg,
        lat_deg,
        distance: s.distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn identity_at_j2000() {
        let (lon, lat) = precess_ecliptic_j2000_to_date(123.456, -4.5, 0.0);
        assert!((lon - 123.456).abs() < 1e-10);
        assert!((lat + 4.5).abs() < 1e-10);
    }

    #[test]
    fn ecliptic_point_gains_p() {
        let t = 0.26;
        let (lon, lat) = precess_ecliptic_j2000_to_date(10.0, 0.0, t);
        let expected = 10.0 + general_precession_longitude_deg(t);
        // eta tilts the ecliptic by ~12" per quarter century
        assert!(
            (lon - expected).abs() < 0.001,
            "lon = {lon}, expected {expected}"
        );
        assert!(lat.abs() < 0.01, "lat = {lat}");
    }

    #[test]
    fn vector_keeps_length() {
        let v = [0.3, -1.2, 0.05];
        let w = precess_vector_j2000_to_date(&v, -1.5);
        let n = |x: &[f64; 3]| (x[0] * x[0] + x[1] * x[1] + x[2] * x[2]).sqrt();
        assert!((n(&v) - n(&w)).abs() < 1e-12);
    }
}
