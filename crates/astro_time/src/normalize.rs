//! Timestamp normalization.
//!
//! Caller input is an ISO-8601 / RFC 3339 string. An explicit offset is
//! honoured as given, in any of the `+05:30`, `+0530` or `+05` forms; a
//! bare wall time is read in the frame timezone. Either
//! way the result is a UTC instant paired with its local civil time.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::delta_t::delta_t_at_jd;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, jd_from_utc, jd_of_midnight};

/// `%#z` takes the offset with or without a colon, and with or without
/// minutes.
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%#z";
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A UTC instant together with its civil time in the frame timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInstant {
    pub utc: DateTime<Utc>,
    pub local: DateTime<Tz>,
}

impl NormalizedInstant {
    pub fn from_utc(utc: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            utc,
            local: utc.with_timezone(&tz),
        }
    }

    /// Julian Date (UT).
    pub fn jd_ut(&self) -> f64 {
        jd_from_utc(&self.utc)
    }

    /// Delta T in seconds at this instant.
    pub fn delta_t_seconds(&self) -> f64 {
        delta_t_at_jd(self.jd_ut())
    }

    /// Julian Ephemeris Date (TT).
    pub fn jd_tt(&self) -> f64 {
        let jd_ut = self.jd_ut();
        jd_ut + delta_t_at_jd(jd_ut) / SECONDS_PER_DAY
    }

    /// Civil date in the frame timezone.
    pub fn local_date(&self) -> NaiveDate {
        self.local.date_naive()
    }

    /// Julian Date at local civil midnight, the day boundary for the weekday.
    pub fn local_midnight_jd(&self) -> f64 {
        jd_of_midnight(self.local_date())
    }
}

/// Parse `input` and normalize it to UTC.
///
/// Wall times without an offset are interpreted in `tz`; when such a time
/// falls in a DST overlap the earlier instant is taken, and when it falls in
/// a gap the input is rejected.
pub fn normalize_timestamp(input: &str, tz: Tz) -> Result<NormalizedInstant, TimeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeError::invalid(input, "empty timestamp"));
    }
    let text = with_t_separator(trimmed);

    if let Some(utc) = parse_with_offset(&text) {
        return Ok(NormalizedInstant::from_utc(utc, tz));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(&text, NAIVE_FORMAT) {
        let local = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| {
                TimeError::invalid(input, "local time does not exist in the frame timezone")
            })?;
        return Ok(NormalizedInstant::from_utc(local.with_timezone(&Utc), tz));
    }

    if lacks_seconds(&text) {
        Err(TimeError::invalid(input, "timestamp must include seconds"))
    } else {
        Err(TimeError::invalid(input, "unrecognized timestamp format"))
    }
}

fn parse_with_offset(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_str(text, OFFSET_FORMAT))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Accept `YYYY-MM-DD HH:MM:SS` by rewriting the separator.
fn with_t_separator(text: &str) -> Cow<'_, str> {
    match (text.get(..10), text.get(10..11), text.get(11..)) {
        (Some(date), Some(" "), Some(time)) => Cow::Owned(format!("{date}T{time}")),
        _ => Cow::Borrowed(text),
    }
}

fn lacks_seconds(text: &str) -> bool {
    let naive = text.strip_suffix('Z').unwrap_or(text);
    NaiveDate::parse_from_str(naive, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M").is_ok()
        || DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%#z").is_ok()
}
