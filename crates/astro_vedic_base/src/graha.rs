//! Bodies placed in a chart.
//!
//! The nine grahas: seven physical bodies plus Rahu and Ketu, the mean
//! lunar nodes. Uranus, Neptune and Pluto sit outside the nine but are
//! still placed in D1/D9 and take part in aspects. Everything serializes
//! under its English name.

use serde::Serialize;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Mars")]
    Mangal,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rahu and Ketu are computed points, not bodies.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

/// Planets beyond Saturn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OuterPlanet {
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_OUTER_PLANETS: [OuterPlanet; 3] =
    [OuterPlanet::Uranus, OuterPlanet::Neptune, OuterPlanet::Pluto];

impl OuterPlanet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    pub const fn all() -> &'static [OuterPlanet; 3] {
        &ALL_OUTER_PLANETS
    }
}

/// Any body placed in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ChartPoint {
    Graha(Graha),
    Outer(OuterPlanet),
}

impl ChartPoint {
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Outer(p) => p.name(),
        }
    }

}

impl From<Graha> for ChartPoint {
    fn from(graha: Graha) -> Self {
        Self::Graha(graha)
    }
}

impl From<OuterPlanet> for ChartPoint {
    fn from(planet: OuterPlanet) -> Self {
        Self::Outer(planet)
    }
}

impl PartialEq<Graha> for ChartPoint {
    fn eq(&self, other: &Graha) -> bool {
        *self == Self::Graha(*other)
    }
}

impl PartialEq<OuterPlanet> for ChartPoint {
    fn eq(&self, other: &OuterPlanet) -> bool {
        *self == Self::Outer(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn nodes() {
        let nodes: Vec<_> = ALL_GRAHAS.iter().filter(|g| g.is_node()).collect();
        assert_eq!(nodes, [&Graha::Rahu, &Graha::Ketu]);
    }

    #[test]
    fn names() {
        assert_eq!(Graha::Buddh.english_name(), "Mercury");
        assert_eq!(Graha::Guru.name(), "Guru");
    }

    #[test]
    fn chart_points() {
        let uranus = ChartPoint::from(OuterPlanet::Uranus);
        assert_eq!(uranus.english_name(), "Uranus");
        assert_eq!(ChartPoint::from(Graha::Ketu), Graha::Ketu);
        assert_eq!(ChartPoint::from(Graha::Guru).english_name(), "Jupiter");
        assert_ne!(ChartPoint::from(Graha::Shani), OuterPlanet::Pluto);
    }
}
