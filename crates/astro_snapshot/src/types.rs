//! Value types carried in a [`Snapshot`].

use astro_config::{AyanamsaSystem, Location, NodeType, ZodiacSystem};
use astro_vedic_base::{Aspect, ChartPoint, Karana, Nakshatra, Paksha, Rashi, Tithi, Vaar, Yoga};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// What to compute besides positions, charts and panchang.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapshotOptions {
    pub include_aspects: bool,
    /// Aspect orb in degrees. Required when `include_aspects` is set.
    pub orb: Option<f64>,
}

impl SnapshotOptions {
    /// Request aspects within `orb` degrees.
    pub fn with_aspects(orb: f64) -> Self {
        Self {
            include_aspects: true,
            orb: Some(orb),
        }
    }
}

/// The frame a snapshot was computed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemInfo {
    pub zodiac: ZodiacSystem,
    pub ayanamsa: AyanamsaSystem,
    pub node: NodeType,
}

/// Where, when and how a snapshot was computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotMeta {
    pub utc: DateTime<Utc>,
    /// Civil time in the frame timezone.
    pub local: DateTime<FixedOffset>,
    pub timezone: &'static str,
    pub location: Location,
    pub system: SystemInfo,
    pub ayanamsa_deg: f64,
    pub jd_ut: f64,
    pub jd_tt: f64,
    pub delta_t_seconds: f64,
    pub config_fingerprint: String,
}

/// Sidereal position of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: ChartPoint,
    pub tropical_longitude_deg: f64,
    /// Sidereal longitude, [0, 360).
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    pub stationary: bool,
    pub rashi: Rashi,
    /// 1-12.
    pub sign: u8,
    pub degrees_in_sign: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// D1 and D9 placement of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionalPlacement {
    pub body: ChartPoint,
    pub d1_rashi: Rashi,
    /// 1-12.
    pub d1_sign: u8,
    pub d1_degrees_in_sign: f64,
    pub d9_rashi: Rashi,
    /// 1-12.
    pub d9_sign: u8,
    pub vargottama: bool,
}

/// Ascendant at the frame location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LagnaPosition {
    /// Local sidereal time as an angle.
    pub lst_deg: f64,
    pub tropical_longitude_deg: f64,
    pub longitude_deg: f64,
    pub rashi: Rashi,
    pub sign: u8,
    pub degrees_in_sign: f64,
    pub d9_rashi: Rashi,
    pub d9_sign: u8,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiEntry {
    pub tithi: Tithi,
    /// 1-30.
    pub number: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    /// 1-15.
    pub tithi_in_paksha: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraEntry {
    pub nakshatra: Nakshatra,
    /// 1-27.
    pub number: u8,
    pub name: &'static str,
    /// 1-4.
    pub pada: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaEntry {
    pub yoga: Yoga,
    /// 1-27.
    pub number: u8,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaEntry {
    pub karana: Karana,
    /// 1-11.
    pub number: u8,
    pub name: &'static str,
    /// Half-tithi position in the synodic month, 1-60.
    pub sequence_position: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaraEntry {
    pub vaar: Vaar,
    pub name: &'static str,
    pub english_name: &'static str,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
}

/// The five limbs of the panchang.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panchang {
    /// Moon - Sun, [0, 360).
    pub elongation_deg: f64,
    pub tithi: TithiEntry,
    pub nakshatra: NakshatraEntry,
    pub yoga: YogaEntry,
    pub karana: KaranaEntry,
    pub vara: VaraEntry,
}

/// Complete result for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub meta: SnapshotMeta,
    pub positions: Vec<BodyPosition>,
    pub placements: Vec<DivisionalPlacement>,
    pub lagna: LagnaPosition,
    pub panchang: Panchang,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspects: Option<Vec<Aspect>>,
}

impl Snapshot {
    /// Position of `body`, if tracked.
    pub fn position(&self, body: impl Into<ChartPoint>) -> Option<&BodyPosition> {
        let body = body.into();
        self.positions.iter().find(|p| p.body == body)
    }

    pub fn placement(&self, body: impl Into<ChartPoint>) -> Option<&DivisionalPlacement> {
        let body = body.into();
        self.placements.iter().find(|p| p.body == body)
    }
}
