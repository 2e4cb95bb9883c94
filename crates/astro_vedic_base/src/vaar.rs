//! Vaar (weekday) from the Julian Day of a civil midnight.

use serde::Serialize;

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Vaar; 7] {
        &ALL_VAARS
    }
}

/// Weekday of the civil day whose midnight falls at `jd_midnight`.
///
/// Any JD within the day works: the value is floored after the 1.5 day
/// shift, so `jd` in [midnight, next midnight) maps to the same weekday.
pub fn vaar_from_jd(jd_midnight: f64) -> Vaar {
    let day = (jd_midnight + 1.5).floor() as i64;
    ALL_VAARS[day.rem_euclid(7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_midnight_is_saturday() {
        // 2000-01-01 was a Saturday
        assert_eq!(vaar_from_jd(2_451_544.5), Vaar::Shanivaar);
    }

    #[test]
    fn known_dates() {
        // 2026-02-07 (Saturday), 2026-02-08 (Sunday)
        assert_eq!(vaar_from_jd(2_461_078.5), Vaar::Shanivaar);
        assert_eq!(vaar_from_jd(2_461_079.5), Vaar::Ravivaar);
        // 1957-10-04 (Friday)
        assert_eq!(vaar_from_jd(2_436_115.5), Vaar::Shukravaar);
    }

    #[test]
    fn whole_day_maps_to_one_weekday() {
        let mid = 2_461_078.5;
        assert_eq!(vaar_from_jd(mid + 0.999), vaar_from_jd(mid));
    }

    #[test]
    fn seven_day_cycle() {
        for k in 0..7 {
            let jd = 2_451_544.5 + k as f64;
            assert_eq!(vaar_from_jd(jd + 7.0), vaar_from_jd(jd));
        }
    }
}
