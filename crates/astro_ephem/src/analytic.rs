//! The bundled analytic ephemeris.

use astro_time::jd_to_centuries;

use crate::apparent::apparent_lon_lat;
use crate::body::Body;
use crate::error::EphemerisError;
use crate::node::{LunarNode, mean_node_deg};
use crate::{Ephemeris, TropicalPosition};

/// 1800-01-01 00:00, first instant covered by the 1800-2050 element fit.
pub const ELEMENT_FIT_START_JD: f64 = 2_378_496.5;

/// 2051-01-01 00:00 (exclusive).
pub const ELEMENT_FIT_END_JD: f64 = 2_470_172.5;

/// Slack on each side of the fit, in days. Delta T stays under two
/// minutes across the window, so every UT instant of the fit maps to a
/// TT epoch inside the widened range.
pub const EPOCH_MARGIN_DAYS: f64 = 1.0;

/// First supported epoch, JD (TT).
pub const SUPPORTED_START_JD: f64 = ELEMENT_FIT_START_JD - EPOCH_MARGIN_DAYS;

/// End of the supported epochs, JD (TT), exclusive.
pub const SUPPORTED_END_JD: f64 = ELEMENT_FIT_END_JD + EPOCH_MARGIN_DAYS;

/// Half-width of the central difference used for speeds: 30 minutes.
const SPEED_HALF_STEP_DAYS: f64 = 1.0 / 48.0;

/// Closed-form ephemeris: Keplerian planets, the Meeus lunar series and the
/// mean node, all on the mean ecliptic and equinox of date.
///
/// Holds no state; every query is a pure function of its epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const fn new() -> Self {
        Self
    }

    fn check_epoch(jd_tt: f64) -> Result<(), EphemerisError> {
        if (SUPPORTED_START_JD..SUPPORTED_END_JD).contains(&jd_tt) {
            Ok(())
        } else {
            Err(EphemerisError::UnsupportedEpoch {
                jd: jd_tt,
                start: SUPPORTED_START_JD,
                end: SUPPORTED_END_JD,
            })
        }
    }
}

/// Signed shortest difference `b - a` in degrees, in [-180, 180).
fn unwrap_delta(a: f64, b: f64) -> f64 {
    (b - a + 540.0).rem_euclid(360.0) - 180.0
}

/// Evaluate `f` at `jd` and derive the longitude rate from samples half a
/// step either side.
fn with_speed(jd: f64, f: impl Fn(f64) -> (f64, f64)) -> TropicalPosition {
    let (longitude_deg, latitude_deg) = f(jd);
    let (before, _) = f(jd - SPEED_HALF_STEP_DAYS);
    let (after, _) = f(jd + SPEED_HALF_STEP_DAYS);
    TropicalPosition {
        longitude_deg,
        latitude_deg,
        speed_deg_per_day: unwrap_delta(before, after) / (2.0 * SPEED_HALF_STEP_DAYS),
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn supported_range(&self) -> (f64, f64) {
        (SUPPORTED_START_JD, SUPPORTED_END_JD)
    }

    fn body_position(&self, body: Body, jd_tt: f64) -> Result<TropicalPosition, EphemerisError> {
        Self::check_epoch(jd_tt)?;
        Ok(with_speed(jd_tt, |jd| apparent_lon_lat(body, jd)))
    }

    fn node_position(
        &self,
        node: LunarNode,
        jd_tt: f64,
    ) -> Result<TropicalPosition, EphemerisError> {
        Self::check_epoch(jd_tt)?;
        let lon_lat = |jd: f64| (mean_node_deg(node, jd_to_centuries(jd)), 0.0);
        Ok(with_speed(jd_tt, lon_lat))
    }
}
