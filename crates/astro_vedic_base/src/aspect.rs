//! Western-style angular aspects between chart bodies.
//!
//! Five canonical aspects are tested on the minimal separation of each
//! pair. Every aspect within the orb is reported, so a separation exactly
//! between two aspect angles with a wide orb yields both.

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::ChartPoint;
use crate::util::angular_separation;

/// Canonical aspect, ordered by angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact aspect angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }

    pub const fn all() -> &'static [AspectKind; 5] {
        &ALL_ASPECT_KINDS
    }
}

/// One aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub body_a: ChartPoint,
    pub body_b: ChartPoint,
    pub kind: AspectKind,
    pub angle_deg: f64,
    /// Minimal separation in [0, 180].
    pub separation_deg: f64,
    /// `separation - angle`; negative when applying from below.
    pub deviation_deg: f64,
    pub orb_deg: f64,
}

/// Check that `orb` is a usable aspect orb.
pub fn validate_orb(orb: f64) -> Result<f64, VedicError> {
    if orb.is_finite() && orb > 0.0 {
        Ok(orb)
    } else {
        Err(VedicError::InvalidOrb { orb })
    }
}

/// All aspects within `orb` degrees between the given longitudes.
///
/// Pairs are taken in input order (i < j); within a pair aspects are
/// listed by ascending angle.
pub fn aspects_within_orb<P>(bodies: &[(P, f64)], orb: f64) -> Result<Vec<Aspect>, VedicError>
where
    P: Copy + Into<ChartPoint>,
{
    let orb = validate_orb(orb)?;
    let mut out = Vec::new();
    for (i, &(a, lon_a)) in bodies.iter().enumerate() {
        for &(b, lon_b) in &bodies[i + 1..] {
            let sep = angular_separation(lon_a, lon_b);
            for kind in ALL_ASPECT_KINDS {
                let angle = kind.angle_deg();
                let deviation = sep - angle;
                if deviation.abs() <= orb {
                    out.push(Aspect {
                        body_a: a.into(),
                        body_b: b.into(),
                        kind,
                        angle_deg: angle,
                        separation_deg: sep,
                        deviation_deg: deviation,
                        orb_deg: orb,
                    });
                }
            }
        }
    }
    Ok(out)
}
