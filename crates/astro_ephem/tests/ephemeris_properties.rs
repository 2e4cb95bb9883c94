//! Range and continuity properties of the analytic ephemeris over its
//! whole validity window.

use astro_ephem::{
    ALL_BODIES, ALL_NODES, AnalyticEphemeris, Body, ELEMENT_FIT_END_JD, ELEMENT_FIT_START_JD,
    Ephemeris, EphemerisError, LunarNode, SUPPORTED_END_JD, SUPPORTED_START_JD,
};
use proptest::prelude::*;

fn max_latitude(body: Body) -> f64 {
    match body {
        Body::Sun => 0.02,
        Body::Moon => 5.4,
        Body::Mercury => 5.5,
        Body::Venus => 9.0,
        Body::Mars => 7.5,
        Body::Jupiter => 2.0,
        Body::Saturn => 3.5,
        Body::Uranus => 1.0,
        Body::Neptune => 2.1,
        Body::Pluto => 18.5,
    }
}

#[test]
fn range_reported() {
    let eph = AnalyticEphemeris::new();
    let (start, end) = eph.supported_range();
    assert_eq!((start, end), (SUPPORTED_START_JD, SUPPORTED_END_JD));
}

#[test]
fn error_carries_window() {
    let eph = AnalyticEphemeris::new();
    let err = eph.body_position(Body::Mars, 2_299_160.5).unwrap_err();
    assert_eq!(
        err,
        EphemerisError::UnsupportedEpoch {
            jd: 2_299_160.5,
            start: SUPPORTED_START_JD,
            end: SUPPORTED_END_JD,
        }
    );
    assert!(err.to_string().contains("2299160.5"));
}

#[test]
fn window_wraps_the_element_fit() {
    assert!(SUPPORTED_START_JD < ELEMENT_FIT_START_JD);
    assert!(SUPPORTED_END_JD > ELEMENT_FIT_END_JD);
    let eph = AnalyticEphemeris::new();
    let (start, end) = (SUPPORTED_START_JD, SUPPORTED_END_JD);
    assert!(eph.body_position(Body::Neptune, start).is_ok());
    assert!(eph.body_position(Body::Neptune, start - 1e-6).is_err());
    assert!(eph.body_position(Body::Neptune, end).is_err());
}

#[test]
fn outer_planets_crawl() {
    let eph = AnalyticEphemeris::new();
    for jd in [2_400_000.5, 2_440_000.5, 2_461_078.5] {
        for body in [Body::Uranus, Body::Neptune, Body::Pluto] {
            let speed = eph.body_position(body, jd).unwrap().speed_deg_per_day;
            assert!(speed.abs() < 0.08, "{body:?} speed {speed} at {jd}");
        }
    }
}

#[test]
fn sun_crosses_equinox_near_march_20() {
    // 2024 vernal equinox: March 20, 03:06 UT
    let eph = AnalyticEphemeris::new();
    let before = eph.body_position(Body::Sun, 2_460_389.5).unwrap();
    let after = eph.body_position(Body::Sun, 2_460_390.0).unwrap();
    let (before, after) = (before.longitude_deg, after.longitude_deg);
    assert!(before > 359.0, "before = {before}");
    assert!(after < 1.0, "after = {after}");
}

proptest! {
    #[test]
    fn positions_in_range(jd in SUPPORTED_START_JD..SUPPORTED_END_JD) {
        let eph = AnalyticEphemeris::new();
        for &body in &ALL_BODIES {
            let p = eph.body_position(body, jd).unwrap();
            let (lon, lat, speed) = (p.longitude_deg, p.latitude_deg, p.speed_deg_per_day);
            prop_assert!((0.0..360.0).contains(&lon), "{:?} lon {}", body, lon);
            prop_assert!(lat.abs() < max_latitude(body), "{:?} lat {}", body, lat);
            prop_assert!(speed.abs() < 16.0, "{:?} speed {}", body, speed);
        }
        for &node in &ALL_NODES {
            let p = eph.node_position(node, jd).unwrap();
            prop_assert!((0.0..360.0).contains(&p.longitude_deg));
            prop_assert!(p.speed_deg_per_day < 0.0);
        }
    }

    #[test]
    fn sun_and_moon_never_retrograde(jd in SUPPORTED_START_JD..SUPPORTED_END_JD) {
        let eph = AnalyticEphemeris::new();
        prop_assert!(eph.body_position(Body::Sun, jd).unwrap().speed_deg_per_day > 0.9);
        prop_assert!(eph.body_position(Body::Moon, jd).unwrap().speed_deg_per_day > 11.0);
    }

    #[test]
    fn ketu_opposite_rahu(jd in SUPPORTED_START_JD..SUPPORTED_END_JD) {
        let eph = AnalyticEphemeris::new();
        let rahu = eph.node_position(LunarNode::Rahu, jd).unwrap();
        let ketu = eph.node_position(LunarNode::Ketu, jd).unwrap();
        let diff = (ketu.longitude_deg - rahu.longitude_deg).rem_euclid(360.0);
        prop_assert!((diff - 180.0).abs() < 1e-9);
    }
}
