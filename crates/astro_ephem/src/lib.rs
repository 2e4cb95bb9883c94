//! Geocentric ephemeris for the snapshot engine.
//!
//! This crate provides:
//! - [`Ephemeris`], the provider seam used by the snapshot assembler
//! - [`AnalyticEphemeris`], a closed-form implementation valid 1800-2050
//!   (the ten bodies from the Sun to Pluto)
//! - Mean lunar nodes
//!
//! All longitudes are tropical, on the mean ecliptic and equinox of date.

pub mod analytic;
mod apparent;
pub mod body;
pub mod error;
pub mod kepler;
pub mod moon;
pub mod node;
pub mod planets;

pub use analytic::{
    AnalyticEphemeris, ELEMENT_FIT_END_JD, ELEMENT_FIT_START_JD, EPOCH_MARGIN_DAYS,
    SUPPORTED_END_JD, SUPPORTED_START_JD,
};
pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use moon::{LunarPosition, lunar_position};
pub use node::{ALL_NODES, LunarNode, ketu_from_rahu, mean_ketu_deg, mean_node_deg, mean_rahu_deg};

/// Tropical geocentric position with its daily longitude rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TropicalPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees. Zero for the nodes.
    pub latitude_deg: f64,
    /// Longitude rate in degrees per day; negative when retrograde.
    pub speed_deg_per_day: f64,
}

/// Source of tropical positions.
///
/// Implementations must be pure: the same epoch yields bit-identical output.
/// `jd_tt` is a Julian Ephemeris Date (TT).
pub trait Ephemeris: Send + Sync {
    /// Half-open `[start, end)` window of supported `jd_tt` values.
    fn supported_range(&self) -> (f64, f64);

    fn body_position(&self, body: Body, jd_tt: f64) -> Result<TropicalPosition, EphemerisError>;

    fn node_position(
        &self,
        node: LunarNode,
        jd_tt: f64,
    ) -> Result<TropicalPosition, EphemerisError>;
}

#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<AnalyticEphemeris>();
    }
};
