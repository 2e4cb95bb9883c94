//! Shared angle helpers for vedic calculations.

pub use astro_frames::normalize_360;

/// Shortest angular distance between two longitudes, in [0, 180].
///
/// Bitwise symmetric in its arguments.
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Index of the equal segment of width `span` containing `lon`, clamped to
/// `count - 1` so a value rounding to the full circle stays in range.
pub(crate) fn segment_index(lon: f64, span: f64, count: u8) -> u8 {
    let idx = (normalize_360(lon) / span).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as u8).min(count - 1)
    }
}
