//! Tithi (lunar day) and paksha from the Moon-Sun elongation.
//!
//! The 360 deg of elongation are divided into 30 tithis of 12 deg. The
//! first fifteen form the Shukla (waxing) paksha ending at Purnima, the
//! rest the Krishna (waning) paksha ending at Amavasya.

use serde::Serialize;

use crate::util::{normalize_360, segment_index};

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Names of the fifteen tithis within a paksha; the last is replaced by
/// Purnima or Amavasya.
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 0-based index (0..29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (1..30).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 { Paksha::Shukla } else { Paksha::Krishna }
    }

    /// 1-based day within the paksha (1..15).
    pub const fn day_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Name without the paksha prefix, e.g. "Panchami".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_DAY_NAMES[(self.index() % 15) as usize],
        }
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

/// Tithi lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation elapsed within this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Determine the tithi from the Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, TITHI_SEGMENT_DEG, 30);
    let tithi = ALL_TITHIS[idx as usize];
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.day_in_paksha(),
        degrees_in_tithi: (elong - idx as f64 * TITHI_SEGMENT_DEG).max(0.0),
    }
}
