//! Integration tests for timestamp normalization across input spellings.

use astro_time::{SECONDS_PER_DAY, UNIX_EPOCH_JD, normalize_timestamp};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use chrono_tz::Asia::Kolkata;
use proptest::prelude::*;

// 1800-01-01T00:00:00Z .. 2051-01-01T00:00:00Z
const MIN_SECS: i64 = -5_364_662_400;
const MAX_SECS: i64 = 2_556_143_999;

#[test]
fn reference_instant_all_spellings() {
    let expected = DateTime::parse_from_rfc3339("2026-02-07T06:45:00Z")
        .unwrap()
        .with_timezone(&Utc);
    for input in [
        "2026-02-07T12:15:00+05:30",
        "2026-02-07T12:15:00",
        "2026-02-07 12:15:00",
        "2026-02-07T06:45:00Z",
        "2026-02-07T06:45:00+00:00",
        "2026-02-07T01:45:00-05:00",
        "2026-02-07T12:15:00.000+05:30",
    ] {
        let n = normalize_timestamp(input, Kolkata).unwrap();
        assert_eq!(n.utc, expected, "input {input}");
    }
}

#[test]
fn historical_kolkata_offset_follows_tz_database() {
    // Local mean time (+05:53:28) applied before 1854.
    let bare = normalize_timestamp("1850-06-01T12:00:00", Kolkata).unwrap();
    let explicit = normalize_timestamp("1850-06-01T12:00:00+05:30", Kolkata).unwrap();
    let shift = (explicit.utc - bare.utc).num_seconds();
    assert!(shift > 0 && shift < 1800, "shift = {shift} s");
}

proptest! {
    #[test]
    fn utc_and_local_spellings_agree(secs in MIN_SECS..MAX_SECS) {
        let utc = DateTime::from_timestamp(secs, 0).unwrap();
        let zulu = utc.to_rfc3339_opts(SecondsFormat::Secs, true);
        let ist = utc
            .with_timezone(&FixedOffset::east_opt(19_800).unwrap())
            .to_rfc3339_opts(SecondsFormat::Secs, false);

        let a = normalize_timestamp(&zulu, Kolkata).unwrap();
        let b = normalize_timestamp(&ist, Kolkata).unwrap();
        prop_assert_eq!(a.utc, utc);
        prop_assert_eq!(b.utc, utc);
        prop_assert_eq!(a.local, b.local);
    }

    #[test]
    fn julian_day_tracks_unix_seconds(secs in MIN_SECS..MAX_SECS) {
        let utc = DateTime::from_timestamp(secs, 0).unwrap();
        let n = astro_time::NormalizedInstant::from_utc(utc, Kolkata);
        let expected = UNIX_EPOCH_JD + secs as f64 / SECONDS_PER_DAY;
        prop_assert!((n.jd_ut() - expected).abs() < 1e-8);
        let delta_t = (n.jd_tt() - n.jd_ut()) * SECONDS_PER_DAY;
        prop_assert!(delta_t.abs() < 120.0, "delta T = {}", delta_t);
    }
}
