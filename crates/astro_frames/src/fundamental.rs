//! Fundamental arguments of lunar and solar theory.
//!
//! Two flavours are provided: the IERS Delaunay arguments (used for the mean
//! lunar node) and the Meeus arguments that drive the lunar series.
//!
//! Sources:
//! - Delaunay arguments: IERS Conventions 2010, Table 5.2e.
//! - Lunar arguments: Meeus, *Astronomical Algorithms*, eq. 47.1 to 47.6.

use crate::spherical::normalize_360;

/// The five Delaunay arguments in degrees, each normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayArguments {
    /// Mean anomaly of the Moon.
    pub l: f64,
    /// Mean anomaly of the Sun.
    pub l_prime: f64,
    /// Mean argument of latitude of the Moon.
    pub f: f64,
    /// Mean elongation of the Moon from the Sun.
    pub d: f64,
    /// Mean longitude of the Moon's ascending node.
    pub omega: f64,
}

/// Polynomial coefficients in arcseconds, ascending powers of `t`.
#[rustfmt::skip]
const DELAUNAY_POLYNOMIALS: [[f64; 5]; 5] = [
    [ 485868.249036,  1717915923.2178,  31.8792,  0.051635, -0.00024470], // l
    [1287104.79305,    129596581.0481,  -0.5532,  0.000136, -0.00001149], // l'
    [ 335779.526232,  1739527262.8478, -12.7512, -0.001037,  0.00000417], // F
    [1072260.70369,   1602961601.2090,  -6.3706,  0.006593, -0.00003169], // D
    [ 450160.398036,    -6962890.5431,   7.4722,  0.007702, -0.00005939], // Omega
];

/// Delaunay arguments at `t` Julian centuries of TT since J2000.0.
pub fn delaunay_arguments(t: f64) -> DelaunayArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let arcsec = |[c0, c1, c2, c3, c4]: [f64; 5]| {
        normalize_360((c0 + c1 * t + c2 * t2 + c3 * t3 + c4 * t4) / 3600.0)
    };
    let [l, l_prime, f, d, omega] = DELAUNAY_POLYNOMIALS.map(arcsec);

    DelaunayArguments {
        l,
        l_prime,
        f,
        d,
        omega,
    }
}

/// Mean arguments of the lunar series, in degrees normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Mean longitude of the Moon, L'.
    pub mean_longitude: f64,
    /// Mean elongation, D.
    pub elongation: f64,
    /// Sun's mean anomaly, M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly, M'.
    pub moon_anomaly: f64,
    /// Argument of latitude, F.
    pub latitude_argument: f64,
}

/// Meeus lunar arguments at `t` Julian centuries of TT since J2000.0.
pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    LunarArguments {
        mean_longitude: normalize_360(
            218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0 - t4 / 65_194_000.0,
        ),
        elongation: normalize_360(
            297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0 - t4 / 113_065_000.0,
        ),
        sun_anomaly: normalize_360(
            357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        ),
        moon_anomaly: normalize_360(
            134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0 - t4 / 14_712_000.0,
        ),
        latitude_argument: normalize_360(
            93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        let omega = delaunay_arguments(0.0).omega;
        assert!((omega - 125.04455501).abs() < 1e-6, "omega = {omega}");
    }

    #[test]
    fn node_regresses() {
        let a = delaunay_arguments(0.0);
        let b = delaunay_arguments(0.01);
        let delta = (b.omega - a.omega + 540.0).rem_euclid(360.0) - 180.0;
        // ~19.34 deg per year, westward
        assert!((delta + 19.34).abs() < 0.01, "delta = {delta}");
    }

    #[test]
    fn meeus_example_47a_arguments() {
        // 1992 April 12, 0h TD
        let t = -0.077221081451;
        let a = lunar_arguments(t);
        assert!((a.mean_longitude - 134.290182).abs() < 1e-5);
        assert!((a.elongation - 113.842304).abs() < 1e-5);
        assert!((a.sun_anomaly - 97.643514).abs() < 1e-5);
        assert!((a.moon_anomaly - 5.150833).abs() < 1e-5);
        assert!((a.latitude_argument - 219.889721).abs() < 1e-5);
    }

    #[test]
    fn both_flavours_agree_on_elongation() {
        let t = 0.26;
        let d = delaunay_arguments(t).d;
        let m = lunar_arguments(t).elongation;
        assert!((d - m).abs() < 0.001, "{d} vs {m}");
    }
}
