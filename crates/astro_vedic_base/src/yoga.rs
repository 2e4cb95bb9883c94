//! Yoga from the sum of the sidereal Sun and Moon longitudes.

use serde::Serialize;

use crate::util::{normalize_360, segment_index};

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// The 27 yogas from Vishkumbha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Vishkumbha=1 .. Vaidhriti=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }
}

/// Yoga lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    pub degrees_in_yoga: f64,
}

/// Determine the yoga from (Sun_sid + Moon_sid) in degrees.
///
/// The sum is reduced mod 360 here, so callers may pass the raw sum.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaPosition {
    let sum = normalize_360(sidereal_sum_deg);
    let idx = segment_index(sum, YOGA_SEGMENT_DEG, 27);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
        degrees_in_yoga: (sum - idx as f64 * YOGA_SEGMENT_DEG).max(0.0),
    }
}
