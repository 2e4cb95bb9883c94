//! Karana (half-tithi) from the Moon-Sun elongation.
//!
//! A synodic month has 60 karanas of 6 deg each. The first is the fixed
//! Kimstughna, then the seven movable karanas repeat eight times, and the
//! last three are the fixed Shakuni, Chatushpada and Naga.

use serde::Serialize;

use crate::util::{normalize_360, segment_index};

/// Span of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 distinct karanas. Discriminants are the traditional numbers
/// minus one (Bava = 1 .. Kimstughna = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

/// Karana for each of the 60 half-tithis of a synodic month.
#[rustfmt::skip]
pub const KARANA_SEQUENCE: [Karana; 60] = {
    use Karana::*;
    [
        Kimstughna,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Bava, Balava, Kaulava, Taitila, Garaja, Vanija, Vishti,
        Shakuni, Chatushpada, Naga,
    ]
};

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Traditional karana number (1-11).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Fixed (sthira) karanas occur once per synodic month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    pub const fn all() -> &'static [Karana; 11] {
        &ALL_KARANAS
    }
}

/// Karana lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based position within the synodic month (0..59).
    pub karana_index: u8,
    /// Degrees of elongation elapsed within this karana [0, 6).
    pub degrees_in_karana: f64,
}

/// Determine the karana from the Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, KARANA_SEGMENT_DEG, 60);
    KaranaPosition {
        karana: KARANA_SEQUENCE[idx as usize],
        karana_index: idx,
        degrees_in_karana: (elong - idx as f64 * KARANA_SEGMENT_DEG).max(0.0),
    }
}
