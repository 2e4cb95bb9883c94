//! The fixed observational frame shared by every snapshot.
//!
//! A [`FrameConfig`] is built once and passed by reference; nothing in the
//! workspace mutates it. Its [`fingerprint`](FrameConfig::fingerprint) is a
//! short SHA-256 digest of the canonical JSON form, stamped into snapshot
//! metadata so consumers can tell which frame produced a result.

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use sha2::{Digest, Sha256};

/// Zodiac reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSystem {
    Sidereal,
}

impl ZodiacSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sidereal => "sidereal",
        }
    }
}

/// Sidereal offset model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AyanamsaSystem {
    Lahiri,
}

impl AyanamsaSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
        }
    }
}

/// Lunar node model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Mean,
}

impl NodeType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
        }
    }
}

/// Observer location and civil timezone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: &'static str,
    /// Geographic latitude in degrees, north positive.
    #[serde(rename = "lat")]
    pub latitude_deg: f64,
    /// Geographic longitude in degrees, east positive.
    #[serde(rename = "lon")]
    pub longitude_deg: f64,
    #[serde(rename = "tz", serialize_with = "serialize_tz")]
    pub timezone: Tz,
}

impl Location {
    pub fn mumbai() -> Self {
        Self {
            name: "Mumbai, India",
            latitude_deg: 19.0760,
            longitude_deg: 72.8777,
            timezone: Tz::Asia__Kolkata,
        }
    }
}

/// Defaults used at the service boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Defaults {
    /// Local time of day used for daily evaluations.
    pub daily_eval_time: NaiveTime,
    /// |speed| below this marks a body as stationary.
    pub stationary_speed_threshold_deg_per_day: f64,
    pub default_orb_deg: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            daily_eval_time: NaiveTime::from_hms_opt(9, 15, 0).unwrap_or_default(),
            stationary_speed_threshold_deg_per_day: 0.01,
            default_orb_deg: 3.0,
        }
    }
}

/// The immutable frame configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameConfig {
    pub zodiac_system: ZodiacSystem,
    pub ayanamsa: AyanamsaSystem,
    pub node_type: NodeType,
    pub location: Location,
    pub defaults: Defaults,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::mumbai_lahiri()
    }
}

impl FrameConfig {
    /// Sidereal Lahiri, mean nodes, observed from Mumbai.
    pub fn mumbai_lahiri() -> Self {
        Self {
            zodiac_system: ZodiacSystem::Sidereal,
            ayanamsa: AyanamsaSystem::Lahiri,
            node_type: NodeType::Mean,
            location: Location::mumbai(),
            defaults: Defaults::default(),
        }
    }

    pub fn timezone(&self) -> Tz {
        self.location.timezone
    }

    /// Canonical JSON form. Object keys come out sorted.
    pub fn canonical_json(&self) -> Value {
        let loc = &self.location;
        let d = &self.defaults;
        json!({
            "zodiac_system": self.zodiac_system.name(),
            "ayanamsa": self.ayanamsa.name(),
            "node_type": self.node_type.name(),
            "location": {
                "name": loc.name,
                "lat": loc.latitude_deg,
                "lon": loc.longitude_deg,
                "tz": loc.timezone.name(),
            },
            "defaults": {
                "daily_eval_time": d.daily_eval_time.format("%H:%M:%S").to_string(),
                "stationary_speed_threshold_deg_per_day": d.stationary_speed_threshold_deg_per_day,
                "default_orb_deg": d.default_orb_deg,
            },
        })
    }

    /// First 16 lowercase hex digits of SHA-256 over the compact canonical
    /// JSON.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.canonical_json().to_string().as_bytes());
        let mut hex = format!("{digest:x}");
        hex.truncate(16);
        hex
    }
}

fn serialize_tz<S: Serializer>(tz: &Tz, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(tz.name())
}
