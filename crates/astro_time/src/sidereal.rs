//! Earth rotation angle and Greenwich mean sidereal time, in degrees.
//!
//! UTC stands in for UT1; the difference (under 0.9 s) moves the
//! ascendant by well under a tenth of a degree.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Earth Rotation Angle in degrees, [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Whole days contribute whole turns; only the fraction of du matters.
    let turns = du.fract() + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du;
    (turns * 360.0).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// GMST = ERA + (0.014506 + 4612.156534 T + 1.3915817 T^2 - 0.00000044 T^3
/// - 0.000029956 T^4 - 0.0000000368 T^5) arcsec.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time from GMST and east longitude, degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta = earth_rotation_angle_deg(J2000_JD);
        assert!((theta - 280.46).abs() < 0.01, "ERA = {theta}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-01-01 0h UT: GMST = 6h 39m 52.27s = 99.968 deg
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.967).abs() < 0.01, "GMST = {g}");
    }

    #[test]
    fn meeus_example_12a() {
        // 1987 April 10, 0h UT: 13h 10m 46.3668s
        let g = gmst_deg(2_446_895.5);
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert!(
            (g - expected).abs() < 0.001,
            "GMST = {g}, expected {expected}"
        );
    }

    #[test]
    fn sidereal_day_gain() {
        let g1 = gmst_deg(2_460_000.5);
        let g2 = gmst_deg(2_460_001.5);
        let gain = (g2 - g1).rem_euclid(360.0);
        assert!((gain - 0.9856).abs() < 0.001, "daily gain = {gain}");
    }

    #[test]
    fn lst_wraps() {
        let lst = local_sidereal_time_deg(350.0, 72.8777);
        assert!((lst - 62.8777).abs() < 1e-9);
    }

    #[test]
    fn ranges() {
        for jd in [2_378_496.5, 2_451_544.5, 2_460_000.25, 2_470_172.0] {
            let e = earth_rotation_angle_deg(jd);
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&e), "ERA out of range: {e}");
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
