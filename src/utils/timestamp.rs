use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::ValidationError;

/// Normalize a raw API timestamp string into the canonical timezone.
///
/// The API delivers timestamps either as naive strings
/// (`2023-01-01T12:00:00`) or with an explicit offset
/// (`2023-01-01T12:00:00+05:00`). A naive string is taken to already be a
/// clock time in the canonical timezone, so the zone is attached without
/// shifting. A string with an offset is converted to the canonical timezone,
/// preserving the absolute instant.
pub fn normalize_timestamp(value: &str, canonical: Tz) -> Result<DateTime<Tz>, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&canonical));
    }

    let naive = value
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|source| ValidationError::MalformedTimestamp {
            value: value.to_owned(),
            source,
        })?;

    match canonical.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        // Repeated clock hour at a DST fall-back: take the earlier offset.
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(ValidationError::NonexistentLocalTime {
            value: value.to_owned(),
            timezone: canonical,
        }),
    }
}

/// Normalize a timestamp from the dates endpoint.
///
/// That endpoint stamps every value `+00:00` even though the clock time is
/// already local to the requested timezone, so the suffix is dropped and the
/// canonical timezone attached without shifting.
pub fn normalize_reported_local(
    value: &str,
    canonical: Tz,
) -> Result<DateTime<Tz>, ValidationError> {
    let clock = value
        .split('+')
        .next()
        .unwrap_or(value)
        .trim_end_matches('Z');
    normalize_timestamp(clock, canonical)
}

/// Current UTC offset of a timezone in whole minutes.
///
/// The API's `offset` query parameter expects this unit.
pub fn utc_offset_minutes(timezone: Tz) -> i32 {
    let now = Utc::now().with_timezone(&timezone);
    now.offset().fix().local_minus_utc() / 60
}
