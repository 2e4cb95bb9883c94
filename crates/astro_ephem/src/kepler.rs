//! Two-body orbit evaluation.

use std::f64::consts::{PI, TAU};

/// Osculating elements at one instant. Angles in degrees, `a` in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination to the reference ecliptic.
    pub inclination: f64,
    /// Longitude of the ascending node.
    pub node: f64,
    /// Argument of perihelion.
    pub arg_perihelion: f64,
    /// Mean anomaly.
    pub mean_anomaly: f64,
}

const MAX_ITERATIONS: usize = 30;
const TOLERANCE_RAD: f64 = 1e-13;

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration.
///
/// `m_rad` is reduced to (-pi, pi] first. The iteration count is bounded, so
/// the result is a pure function of the inputs.
pub fn solve_kepler(m_rad: f64, e: f64) -> f64 {
    let m = (m_rad + PI).rem_euclid(TAU) - PI;
    let mut ecc_anomaly = if e < 0.8 { m } else { PI.copysign(m) };
    for _ in 0..MAX_ITERATIONS {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < TOLERANCE_RAD {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric ecliptic position `[x, y, z]` in AU.
pub fn heliocentric_position(el: &OrbitalElements) -> [f64; 3] {
    let ecc_anomaly = solve_kepler(el.mean_anomaly.to_radians(), el.e);
    let x_orb = el.a * (ecc_anomaly.cos() - el.e);
    let y_orb = el.a * (1.0 - el.e * el.e).sqrt() * ecc_anomaly.sin();

    let (sin_w, cos_w) = el.arg_perihelion.to_radians().sin_cos();
    let (sin_n, cos_n) = el.node.to_radians().sin_cos();
    let (sin_i, cos_i) = el.inclination.to_radians().sin_cos();

    [
        (cos_w * cos_n - sin_w * sin_n * cos_i) * x_orb
            + (-sin_w * cos_n - cos_w * sin_n * cos_i) * y_orb,
        (cos_w * sin_n + sin_w * cos_n * cos_i) * x_orb
            + (-sin_w * sin_n + cos_w * cos_n * cos_i) * y_orb,
        sin_w * sin_i * x_orb + cos_w * sin_i * y_orb,
    ]
}
