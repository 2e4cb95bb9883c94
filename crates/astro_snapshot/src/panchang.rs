//! Panchang assembly from sidereal Sun and Moon longitudes.

use astro_vedic_base::{
    karana_from_elongation, nakshatra_from_longitude, normalize_360, tithi_from_elongation,
    vaar_from_jd, yoga_from_sum,
};

use crate::types::{KaranaEntry, NakshatraEntry, Panchang, TithiEntry, VaraEntry, YogaEntry};

/// Compute the panchang.
///
/// `local_midnight_jd` is the Julian Date of civil midnight starting the
/// local day; it fixes the weekday.
pub fn compute_panchang(sun_sid_deg: f64, moon_sid_deg: f64, local_midnight_jd: f64) -> Panchang {
    let elongation = normalize_360(moon_sid_deg - sun_sid_deg);

    let tithi = tithi_from_elongation(elongation);
    let nak = nakshatra_from_longitude(moon_sid_deg);
    let yoga = yoga_from_sum(sun_sid_deg + moon_sid_deg);
    let karana = karana_from_elongation(elongation);
    let vaar = vaar_from_jd(local_midnight_jd);

    Panchang {
        elongation_deg: elongation,
        tithi: TithiEntry {
            tithi: tithi.tithi,
            number: tithi.tithi.number(),
            name: tithi.tithi.name(),
            paksha: tithi.paksha,
            tithi_in_paksha: tithi.tithi_in_paksha,
        },
        nakshatra: NakshatraEntry {
            nakshatra: nak.nakshatra,
            number: nak.nakshatra.number(),
            name: nak.nakshatra.name(),
            pada: nak.pada,
        },
        yoga: YogaEntry {
            yoga: yoga.yoga,
            number: yoga.yoga.number(),
            name: yoga.yoga.name(),
        },
        karana: KaranaEntry {
            karana: karana.karana,
            number: karana.karana.number(),
            name: karana.karana.name(),
            sequence_position: karana.karana_index + 1,
        },
        vara: VaraEntry {
            vaar,
            name: vaar.name(),
            english_name: vaar.english_name(),
            weekday: vaar.index(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_vedic_base::{Karana, Paksha, Vaar};

    #[test]
    fn new_moon_day() {
        let p = compute_panchang(100.0, 101.0, 2_461_078.5);
        assert_eq!(p.tithi.number, 1);
        assert_eq!(p.tithi.paksha, Paksha::Shukla);
        assert_eq!(p.karana.karana, Karana::Kimstughna);
        assert_eq!(p.karana.number, 11);
        assert_eq!(p.karana.sequence_position, 1);
        assert_eq!(p.vara.vaar, Vaar::Shanivaar);
        assert_eq!(p.vara.weekday, 6);
    }

    #[test]
    fn elongation_wraps() {
        let p = compute_panchang(350.0, 10.0, 2_461_078.5);
        assert!((p.elongation_deg - 20.0).abs() < 1e-9);
        assert_eq!(p.tithi.number, 2);
        // 350 + 10 = 360 -> yoga wraps to Vishkumbha
        assert_eq!(p.yoga.number, 1);
    }

    #[test]
    fn krishna_half() {
        let p = compute_panchang(0.0, 250.0, 2_461_078.5);
        assert_eq!(p.tithi.number, 21);
        assert_eq!(p.tithi.paksha, Paksha::Krishna);
        assert_eq!(p.tithi.tithi_in_paksha, 6);
        assert_eq!(p.tithi.name, "Shashthi");
        assert_eq!(p.nakshatra.number, 19);
        assert_eq!(p.nakshatra.name, "Mula");
    }
}
