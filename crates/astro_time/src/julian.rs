//! Julian Date arithmetic.
//!
//! Calendar to JD conversion follows Meeus, *Astronomical Algorithms* (2nd ed.),
//! chapter 7, restricted to the proleptic Gregorian calendar.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch, 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Offset between `NaiveDate::num_days_from_ce` and the Julian Day Number
/// at 00:00 of that date.
const CE_DAY_TO_JD_MIDNIGHT: f64 = 1_721_424.5;

/// Julian Date of a Gregorian calendar date with fractional day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date (UT) of a UTC instant, nanoseconds included.
///
/// Whole days and the intra-day remainder are accumulated separately so the
/// fractional part keeps its precision far from the Unix epoch.
pub fn jd_from_utc(instant: &DateTime<Utc>) -> f64 {
    let secs = instant.timestamp();
    let days = secs.div_euclid(86_400);
    let rem = secs.rem_euclid(86_400) as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + days as f64 + rem / SECONDS_PER_DAY
}

/// Julian Date at 00:00 of a civil date.
pub fn jd_of_midnight(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce()) + CE_DAY_TO_JD_MIDNIGHT
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
