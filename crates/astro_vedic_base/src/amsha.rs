//! Navamsa (D9) divisional chart.
//!
//! Each 30 deg rashi is divided into nine navamsas of 3 deg 20'. The sign a
//! navamsa maps to is read from [`NAVAMSA_TABLE`]: movable signs count from
//! themselves, fixed signs from the ninth sign, dual signs from the fifth.

use serde::Serialize;

use crate::rashi::{RASHI_SPAN, Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Number of navamsas in one rashi.
pub const NAVAMSA_DIVISIONS: u8 = 9;

/// Span of one navamsa: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = RASHI_SPAN / NAVAMSA_DIVISIONS as f64;

/// D9 sign for every (D1 sign, navamsa segment) cell.
#[rustfmt::skip]
pub const NAVAMSA_TABLE: [[Rashi; 9]; 12] = {
    use Rashi::*;
    [
        // Mesha (movable): from Mesha
        [Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya, Tula, Vrischika, Dhanu],
        // Vrishabha (fixed): from Makara
        [Makara, Kumbha, Meena, Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya],
        // Mithuna (dual): from Tula
        [Tula, Vrischika, Dhanu, Makara, Kumbha, Meena, Mesha, Vrishabha, Mithuna],
        // Karka (movable): from Karka
        [Karka, Simha, Kanya, Tula, Vrischika, Dhanu, Makara, Kumbha, Meena],
        // Simha (fixed): from Mesha
        [Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya, Tula, Vrischika, Dhanu],
        // Kanya (dual): from Makara
        [Makara, Kumbha, Meena, Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya],
        // Tula (movable): from Tula
        [Tula, Vrischika, Dhanu, Makara, Kumbha, Meena, Mesha, Vrishabha, Mithuna],
        // Vrischika (fixed): from Karka
        [Karka, Simha, Kanya, Tula, Vrischika, Dhanu, Makara, Kumbha, Meena],
        // Dhanu (dual): from Mesha
        [Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya, Tula, Vrischika, Dhanu],
        // Makara (movable): from Makara
        [Makara, Kumbha, Meena, Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya],
        // Kumbha (fixed): from Tula
        [Tula, Vrischika, Dhanu, Makara, Kumbha, Meena, Mesha, Vrishabha, Mithuna],
        // Meena (dual): from Karka
        [Karka, Simha, Kanya, Tula, Vrischika, Dhanu, Makara, Kumbha, Meena],
    ]
};

/// A longitude projected into the D1 and D9 charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavamsaPosition {
    /// D1 sign.
    pub rashi: Rashi,
    /// Decimal degrees within the D1 sign [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// 0-based navamsa segment within the D1 sign (0..8).
    pub segment: u8,
    /// D9 sign.
    pub navamsa: Rashi,
    /// D1 sign equals D9 sign.
    pub vargottama: bool,
}

/// 0-based navamsa segment for a position inside a sign, clamped to 0..8.
pub fn navamsa_segment(degrees_in_rashi: f64) -> u8 {
    let idx = (degrees_in_rashi / NAVAMSA_SPAN).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as u8).min(NAVAMSA_DIVISIONS - 1)
    }
}

/// Project a sidereal longitude into D1 and D9.
pub fn navamsa_from_longitude(sidereal_lon_deg: f64) -> NavamsaPosition {
    let d1 = rashi_from_longitude(sidereal_lon_deg);
    let segment = navamsa_segment(d1.degrees_in_rashi);
    let navamsa = NAVAMSA_TABLE[d1.rashi_index as usize][segment as usize];
    NavamsaPosition {
        rashi: d1.rashi,
        degrees_in_rashi: d1.degrees_in_rashi,
        segment,
        navamsa,
        vargottama: d1.rashi == navamsa,
    }
}

/// Full D9 longitude: the navamsa sign plus the position within the
/// navamsa scaled up to a 30 deg sign.
pub fn navamsa_longitude(sidereal_lon_deg: f64) -> f64 {
    let pos = navamsa_from_longitude(sidereal_lon_deg);
    let within = pos.degrees_in_rashi - pos.segment as f64 * NAVAMSA_SPAN;
    // Stay strictly inside the navamsa sign when `within` rounds up to a
    // full segment.
    let scaled = (within / NAVAMSA_SPAN * RASHI_SPAN).clamp(0.0, RASHI_SPAN * (1.0 - f64::EPSILON));
    normalize_360(pos.navamsa.index() as f64 * RASHI_SPAN + scaled)
}
