//! Geocentric lunar position from the truncated ELP-2000/82 series of
//! Meeus, *Astronomical Algorithms* (2nd ed.), chapter 47.
//!
//! Longitude is referred to the mean equinox of date. Accuracy is about
//! 10" in longitude and 4" in latitude.

use astro_frames::{lunar_arguments, normalize_360};

/// Periodic term multipliers of D, M, M', F with the sine coefficient for
/// longitude and the cosine coefficient for distance (units of 1e-6 deg and
/// 1e-3 km).
#[rustfmt::skip]
static LONGITUDE_DISTANCE_TERMS: [(i8, i8, i8, i8, i32, i32); 60] = [
    (0,  0,  1,  0, 6288774, -20905355),
    (2,  0, -1,  0, 1274027,  -3699111),
    (2,  0,  0,  0,  658314,  -2955968),
    (0,  0,  2,  0,  213618,   -569925),
    (0,  1,  0,  0, -185116,     48888),
    (0,  0,  0,  2, -114332,     -3149),
    (2,  0, -2,  0,   58793,    246158),
    (2, -1, -1,  0,   57066,   -152138),
    (2,  0,  1,  0,   53322,   -170733),
    (2, -1,  0,  0,   45758,   -204586),
    (0,  1, -1,  0,  -40923,   -129620),
    (1,  0,  0,  0,  -34720,    108743),
    (0,  1,  1,  0,  -30383,    104755),
    (2,  0,  0, -2,   15327,     10321),
    (0,  0,  1,  2,  -12528,         0),
    (0,  0,  1, -2,   10980,     79661),
    (4,  0, -1,  0,   10675,    -34782),
    (0,  0,  3,  0,   10034,    -23210),
    (4,  0, -2,  0,    8548,    -21636),
    (2,  1, -1,  0,   -7888,     24208),
    (2,  1,  0,  0,   -6766,     30824),
    (1,  0, -1,  0,   -5163,     -8379),
    (1,  1,  0,  0,    4987,    -16675),
    (2, -1,  1,  0,    4036,    -12831),
    (2,  0,  2,  0,    3994,    -10445),
    (4,  0,  0,  0,    3861,    -11650),
    (2,  0, -3,  0,    3665,     14403),
    (0,  1, -2,  0,   -2689,     -7003),
    (2,  0, -1,  2,   -2602,         0),
    (2, -1, -2,  0,    2390,     10056),
    (1,  0,  1,  0,   -2348,      6322),
    (2, -2,  0,  0,    2236,     -9884),
    (0,  1,  2,  0,   -2120,      5751),
    (0,  2,  0,  0,   -2069,         0),
    (2, -2, -1,  0,    2048,     -4950),
    (2,  0,  1, -2,   -1773,      4130),
    (2,  0,  0,  2,   -1595,         0),
    (4, -1, -1,  0,    1215,     -3958),
    (0,  0,  2,  2,   -1110,         0),
    (3,  0, -1,  0,    -892,      3258),
    (2,  1,  1,  0,    -810,      2616),
    (4, -1, -2,  0,     759,     -1897),
    (0,  2, -1,  0,    -713,     -2117),
    (2,  2, -1,  0,    -700,      2354),
    (2,  1, -2,  0,     691,         0),
    (2, -1,  0, -2,     596,         0),
    (4,  0,  1,  0,     549,     -1423),
    (0,  0,  4,  0,     537,     -1117),
    (4, -1,  0,  0,     520,     -1571),
    (1,  0, -2,  0,    -487,     -1739),
    (2,  1,  0, -2,    -399,         0),
    (0,  0,  2, -2,    -381,     -4421),
    (1,  1,  1,  0,     351,         0),
    (3,  0, -2,  0,    -340,         0),
    (4,  0, -3,  0,     330,         0),
    (2, -1,  2,  0,     327,         0),
    (0,  2,  1,  0,    -323,      1165),
    (1,  1, -1,  0,     299,         0),
    (2,  0,  3,  0,     294,         0),
    (2,  0, -1, -2,       0,      8752),
];

/// Periodic term multipliers of D, M, M', F with the sine coefficient for
/// latitude (units of 1e-6 deg).
#[rustfmt::skip]
static LATITUDE_TERMS: [(i8, i8, i8, i8, i32); 60] = [
    (0,  0,  0,  1, 5128122),
    (0,  0,  1,  1,  280602),
    (0,  0,  1, -1,  277693),
    (2,  0,  0, -1,  173237),
    (2,  0, -1,  1,   55413),
    (2,  0, -1, -1,   46271),
    (2,  0,  0,  1,   32573),
    (0,  0,  2,  1,   17198),
    (2,  0,  1, -1,    9266),
    (0,  0,  2, -1,    8822),
    (2, -1,  0, -1,    8216),
    (2,  0, -2, -1,    4324),
    (2,  0,  1,  1,    4200),
    (2,  1,  0, -1,   -3359),
    (2, -1, -1,  1,    2463),
    (2, -1,  0,  1,    2211),
    (2, -1, -1, -1,    2065),
    (0,  1, -1, -1,   -1870),
    (4,  0, -1, -1,    1828),
    (0,  1,  0,  1,   -1794),
    (0,  0,  0,  3,   -1749),
    (0,  1, -1,  1,   -1565),
    (1,  0,  0,  1,   -1491),
    (0,  1,  1,  1,   -1475),
    (0,  1,  1, -1,   -1410),
    (0,  1,  0, -1,   -1344),
    (1,  0,  0, -1,   -1335),
    (0,  0,  3,  1,    1107),
    (4,  0,  0, -1,    1021),
    (4,  0, -1,  1,     833),
    (0,  0,  1, -3,     777),
    (4,  0, -2,  1,     671),
    (2,  0,  0, -3,     607),
    (2,  0,  2, -1,     596),
    (2, -1,  1, -1,     491),
    (2,  0, -2,  1,    -451),
    (0,  0,  3, -1,     439),
    (2,  0,  2,  1,     422),
    (2,  0, -3, -1,     421),
    (2,  1, -1,  1,    -366),
    (2,  1,  0,  1,    -351),
    (4,  0,  0,  1,     331),
    (2, -1,  1,  1,     315),
    (2, -2,  0, -1,     302),
    (0,  0,  1,  3,    -283),
    (2,  1,  1, -1,    -229),
    (1,  1,  0, -1,     223),
    (1,  1,  0,  1,     223),
    (0,  1, -2, -1,    -220),
    (2,  1, -1, -1,    -220),
    (1,  0,  1,  1,    -185),
    (2, -1, -2, -1,     181),
    (0,  1,  2,  1,    -177),
    (4,  0, -2, -1,     176),
    (4, -1, -1, -1,     166),
    (1,  0,  1, -1,    -164),
    (4,  0,  1, -1,     132),
    (1,  0, -1, -1,    -119),
    (4, -1,  0, -1,     115),
    (2, -2,  0,  1,     107),
];

/// Mean Earth-Moon distance of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Geocentric lunar coordinates on the mean ecliptic and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Latitude in degrees.
    pub latitude_deg: f64,
    /// Centre-to-centre distance in km.
    pub distance_km: f64,
}

/// Lunar position at `t` Julian centuries of TT since J2000.0.
pub fn lunar_position(t: f64) -> LunarPosition {
    let args = lunar_arguments(t);
    let (lp, d, m, mp, f) = (
        args.mean_longitude,
        args.elongation,
        args.sun_anomaly,
        args.moon_anomaly,
        args.latitude_argument,
    );

    // Eccentricity of Earth's orbit scales the terms containing M.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    let e_factor = |m_mult: i8| match m_mult.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };
    let argument = |cd: i8, cm: i8, cmp: i8, cf: i8| {
        let deg = f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f;
        deg.to_radians()
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, sl, sr) in &LONGITUDE_DISTANCE_TERMS {
        let arg = argument(cd, cm, cmp, cf);
        let scale = e_factor(cm);
        sum_l += f64::from(sl) * scale * arg.sin();
        sum_r += f64::from(sr) * scale * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, sb) in &LATITUDE_TERMS {
        sum_b += f64::from(sb) * e_factor(cm) * argument(cd, cm, cmp, cf).sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let (lp_r, mp_r, f_r) = (lp.to_radians(), mp.to_radians(), f.to_radians());

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    LunarPosition {
        longitude_deg: normalize_360(lp + sum_l / 1e6),
        latitude_deg: sum_b / 1e6,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1e3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let p = lunar_position(t);
        let (lon, lat, dist) = (p.longitude_deg, p.latitude_deg, p.distance_km);
        assert!((lon - 133.162655).abs() < 1e-5, "lon = {lon}");
        assert!((lat + 3.229126).abs() < 1e-5, "lat = {lat}");
        assert!((dist - 368_409.7).abs() < 0.1, "dist = {dist}");
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for k in 0..200 {
            let t = -2.0 + k as f64 * 0.0253;
            let p = lunar_position(t);
            let (lat, dist) = (p.latitude_deg, p.distance_km);
            assert!(lat.abs() < 5.4, "lat = {lat} at t={t}");
            assert!((356_000.0..407_000.0).contains(&dist), "dist = {dist}");
        }
    }

    #[test]
    fn sidereal_month_motion() {
        let t0 = 0.1;
        let dt = 27.321661 / 36_525.0;
        let a = lunar_position(t0).longitude_deg;
        let b = lunar_position(t0 + dt).longitude_deg;
        let diff = (b - a + 540.0).rem_euclid(360.0) - 180.0;
        // one tropical revolution minus precession over a sidereal month,
        // perturbed by up to ~7 deg of equation of centre
        assert!(diff.abs() < 8.0, "diff = {diff}");
    }
}
