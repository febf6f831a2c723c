pub mod errors;
pub mod models;
pub mod utils;

pub use errors::*;
pub use models::*;
pub use utils::*;

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use models::date::{Date, Epoch, RawDate};
use models::event::{EventLinePeriods, Events, RawEventLinePeriods, RawEvents};
use models::lineperiods::{LinePeriods, RawLinePeriods};
use models::schedule::{RawSchedule, Schedule};
use models::sport::Sport;
use models::sportsbook::Sportsbook;
use models::team::Team;

/// Response wrapper for the schedules endpoint
#[derive(Debug, Deserialize)]
struct SchedulesResponse {
    schedules: Vec<RawSchedule>,
}

/// Response wrapper for the sports endpoint
#[derive(Debug, Deserialize)]
struct SportsResponse {
    sports: Vec<Sport>,
}

/// Response wrapper for the sportsbooks endpoint
#[derive(Debug, Deserialize)]
struct SportsbooksResponse {
    affiliates: Vec<Sportsbook>,
}

/// Response wrapper for the teams endpoint
#[derive(Debug, Deserialize)]
struct TeamsResponse {
    teams: Vec<Team>,
}

/// Response wrapper for the dates endpoint, `format=date`
#[derive(Debug, Deserialize)]
struct DatesResponse {
    dates: Vec<String>,
}

/// Response wrapper for the dates endpoint, `format=epoch`
#[derive(Debug, Deserialize)]
struct EpochDatesResponse {
    dates: Vec<i64>,
}

/// Response wrapper for events with `include=all_periods`
#[derive(Debug, Deserialize)]
struct EventsWithPeriodsResponse {
    events: Vec<RawEventLinePeriods>,
}

/// Decode an events payload into validated records.
///
/// Every timestamp field ends up in `timezone`; a malformed record fails the
/// whole payload, leaving the caller to discard or re-fetch it.
pub fn decode_events(payload: &str, timezone: Tz) -> Result<Events, DecodeError> {
    let raw: RawEvents = serde_json::from_str(payload)?;
    let events = Events::from_api(raw, timezone)?;
    debug!(count = events.events.len(), "decoded events payload");
    Ok(events)
}

/// Decode an events payload requested with `include=all_periods`.
pub fn decode_events_with_periods(
    payload: &str,
    timezone: Tz,
) -> Result<Vec<EventLinePeriods>, DecodeError> {
    let raw: EventsWithPeriodsResponse = serde_json::from_str(payload)?;
    let events = raw
        .events
        .into_iter()
        .map(|event| EventLinePeriods::from_api(event, timezone))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = events.len(), "decoded events with periods");
    Ok(events)
}

/// Decode the per-period lines of a single line id.
pub fn decode_line_periods(payload: &str, timezone: Tz) -> Result<LinePeriods, DecodeError> {
    let raw: RawLinePeriods = serde_json::from_str(payload)?;
    Ok(LinePeriods::from_api(raw, timezone)?)
}

/// Decode a schedules payload into validated records.
pub fn decode_schedules(payload: &str, timezone: Tz) -> Result<Vec<Schedule>, DecodeError> {
    let raw: SchedulesResponse = serde_json::from_str(payload)?;
    let schedules = raw
        .schedules
        .into_iter()
        .map(|schedule| Schedule::from_api(schedule, timezone))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = schedules.len(), "decoded schedules payload");
    Ok(schedules)
}

/// Decode the list of available sports.
pub fn decode_sports(payload: &str) -> Result<Vec<Sport>, DecodeError> {
    let raw: SportsResponse = serde_json::from_str(payload)?;
    Ok(raw.sports)
}

/// Decode the list of sportsbooks (affiliates).
pub fn decode_sportsbooks(payload: &str) -> Result<Vec<Sportsbook>, DecodeError> {
    let raw: SportsbooksResponse = serde_json::from_str(payload)?;
    Ok(raw.affiliates)
}

/// Decode the list of teams for a sport.
pub fn decode_teams(payload: &str) -> Result<Vec<Team>, DecodeError> {
    let raw: TeamsResponse = serde_json::from_str(payload)?;
    Ok(raw.teams)
}

/// Decode a dates payload requested with `format=date`.
pub fn decode_dates(payload: &str, timezone: Tz) -> Result<Vec<Date>, DecodeError> {
    let raw: DatesResponse = serde_json::from_str(payload)?;
    let dates = raw
        .dates
        .into_iter()
        .map(|date| Date::from_api(RawDate { date }, timezone))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = dates.len(), "decoded dates payload");
    Ok(dates)
}

/// Decode a dates payload requested with `format=epoch`.
pub fn decode_epoch_dates(payload: &str) -> Result<Vec<Epoch>, DecodeError> {
    let raw: EpochDatesResponse = serde_json::from_str(payload)?;
    Ok(raw
        .dates
        .into_iter()
        .map(|timestamp| Epoch { timestamp })
        .collect())
}
