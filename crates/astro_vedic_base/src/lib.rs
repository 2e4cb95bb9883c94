//! Sidereal Vedic primitives built on tropical ephemeris output.
//!
//! This crate provides:
//! - Lahiri ayanamsha and the tropical-to-sidereal correction
//! - Rashi, nakshatra and navamsa (D1/D9) projection
//! - Panchang limbs: tithi, karana, yoga, vaar
//! - Angular aspects between chart bodies
//! - Lagna from local sidereal time
//!
//! Every function here is a pure computation on angles; none of them fail
//! except the aspect engine on an unusable orb.

pub mod amsha;
pub mod aspect;
pub mod ayanamsha;
pub mod error;
pub mod graha;
pub mod karana;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use amsha::{
    NAVAMSA_DIVISIONS, NAVAMSA_SPAN, NAVAMSA_TABLE, NavamsaPosition, navamsa_from_longitude,
    navamsa_longitude, navamsa_segment,
};
pub use aspect::{ALL_ASPECT_KINDS, Aspect, AspectKind, aspects_within_orb, validate_orb};
pub use ayanamsha::{
    LAHIRI_REFERENCE_DEG, LAHIRI_REFERENCE_JD, lahiri_ayanamsha_deg, sidereal_longitude,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, ALL_OUTER_PLANETS, ChartPoint, Graha, OuterPlanet};
pub use karana::{
    ALL_KARANAS, KARANA_SEGMENT_DEG, KARANA_SEQUENCE, Karana, KaranaPosition,
    karana_from_elongation,
};
pub use lagna::lagna_longitude_deg;
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Modality, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude,
};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiPosition, tithi_from_elongation};
pub use util::{angular_separation, normalize_360};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};
