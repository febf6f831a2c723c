use std::collections::BTreeMap;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::affiliate_keyed;
use crate::models::line::{Moneyline, RawMoneyline, RawSpread, RawTotal, Spread, Total};
use crate::models::schedule::EventSchedule;
use crate::models::sportsbook::Sportsbook;
use crate::models::team::{TeamDeprecated, TeamNormalized};
use crate::utils::timestamp::normalize_timestamp;

/// Score block for a live or finished event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub event_id: String,
    pub event_status: String,
    pub score_away: i32,
    pub score_home: i32,
    pub winner_away: i32,
    pub winner_home: i32,
    pub score_away_by_period: Vec<i32>,
    pub score_home_by_period: Vec<i32>,
    pub venue_name: String,
    pub venue_location: String,
    pub game_clock: i32,
    pub display_clock: String,
    pub game_period: i32,
    pub broadcast: String,
    pub event_status_detail: String,
}

/// One sportsbook's full-game lines for an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsbookLines {
    pub line_id: u64,
    pub moneyline: Moneyline,
    pub spread: Spread,
    pub total: Total,
    pub affiliate: Sportsbook,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSportsbookLines {
    pub line_id: u64,
    pub moneyline: RawMoneyline,
    pub spread: RawSpread,
    pub total: RawTotal,
    pub affiliate: Sportsbook,
}

impl SportsbookLines {
    pub fn from_api(raw: RawSportsbookLines, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            line_id: raw.line_id,
            moneyline: Moneyline::from_api(raw.moneyline, timezone)?,
            spread: Spread::from_api(raw.spread, timezone)?,
            total: Total::from_api(raw.total, timezone)?,
            affiliate: raw.affiliate,
        })
    }
}

/// `SportsbookLines` scoped to one game period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsbookLinePeriod {
    #[serde(flatten)]
    pub lines: SportsbookLines,
    pub period_id: Option<i32>,
    pub period_description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSportsbookLinePeriod {
    #[serde(flatten)]
    pub lines: RawSportsbookLines,
    pub period_id: Option<i32>,
    pub period_description: String,
}

impl SportsbookLinePeriod {
    pub fn from_api(raw: RawSportsbookLinePeriod, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            lines: SportsbookLines::from_api(raw.lines, timezone)?,
            period_id: raw.period_id,
            period_description: raw.period_description,
        })
    }
}

/// One sportsbook's lines for every game period of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsbookLinePeriods {
    pub period_full_game: SportsbookLinePeriod,
    pub period_first_half: SportsbookLinePeriod,
    pub period_second_half: SportsbookLinePeriod,
    pub period_first_period: SportsbookLinePeriod,
    pub period_second_period: SportsbookLinePeriod,
    pub period_third_period: SportsbookLinePeriod,
    pub period_fourth_period: SportsbookLinePeriod,
    pub period_live_full_game: SportsbookLinePeriod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSportsbookLinePeriods {
    pub period_full_game: RawSportsbookLinePeriod,
    pub period_first_half: RawSportsbookLinePeriod,
    pub period_second_half: RawSportsbookLinePeriod,
    pub period_first_period: RawSportsbookLinePeriod,
    pub period_second_period: RawSportsbookLinePeriod,
    pub period_third_period: RawSportsbookLinePeriod,
    pub period_fourth_period: RawSportsbookLinePeriod,
    pub period_live_full_game: RawSportsbookLinePeriod,
}

impl SportsbookLinePeriods {
    pub fn from_api(raw: RawSportsbookLinePeriods, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            period_full_game: SportsbookLinePeriod::from_api(raw.period_full_game, timezone)?,
            period_first_half: SportsbookLinePeriod::from_api(raw.period_first_half, timezone)?,
            period_second_half: SportsbookLinePeriod::from_api(raw.period_second_half, timezone)?,
            period_first_period: SportsbookLinePeriod::from_api(raw.period_first_period, timezone)?,
            period_second_period: SportsbookLinePeriod::from_api(
                raw.period_second_period,
                timezone,
            )?,
            period_third_period: SportsbookLinePeriod::from_api(raw.period_third_period, timezone)?,
            period_fourth_period: SportsbookLinePeriod::from_api(
                raw.period_fourth_period,
                timezone,
            )?,
            period_live_full_game: SportsbookLinePeriod::from_api(
                raw.period_live_full_game,
                timezone,
            )?,
        })
    }
}

/// Fields shared by every event record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCore {
    pub event_id: String,
    pub event_uuid: String,
    pub sport_id: i32,
    /// Normalized to the canonical timezone.
    pub event_date: DateTime<Tz>,
    pub rotation_number_away: i32,
    pub rotation_number_home: i32,
    /// Not set for future events.
    pub score: Option<Score>,
    pub teams: Vec<TeamDeprecated>,
    pub teams_normalized: Vec<TeamNormalized>,
    pub schedule: EventSchedule,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEventCore {
    pub event_id: String,
    pub event_uuid: String,
    pub sport_id: i32,
    pub event_date: String,
    pub rotation_number_away: i32,
    pub rotation_number_home: i32,
    pub score: Option<Score>,
    pub teams: Vec<TeamDeprecated>,
    pub teams_normalized: Vec<TeamNormalized>,
    pub schedule: EventSchedule,
}

impl EventCore {
    pub fn from_api(raw: RawEventCore, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            event_id: raw.event_id,
            event_uuid: raw.event_uuid,
            sport_id: raw.sport_id,
            event_date: normalize_timestamp(&raw.event_date, timezone)?,
            rotation_number_away: raw.rotation_number_away,
            rotation_number_home: raw.rotation_number_home,
            score: raw.score,
            teams: raw.teams,
            teams_normalized: raw.teams_normalized,
            schedule: raw.schedule,
        })
    }
}

/// Event with full-game lines keyed by affiliate id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    #[serde(flatten)]
    pub core: EventCore,
    pub lines: BTreeMap<i32, SportsbookLines>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(flatten)]
    pub core: RawEventCore,
    #[serde(deserialize_with = "affiliate_keyed")]
    pub lines: BTreeMap<i32, RawSportsbookLines>,
}

impl Event {
    pub fn from_api(raw: RawEvent, timezone: Tz) -> Result<Self, ValidationError> {
        let lines = raw
            .lines
            .into_iter()
            .map(|(id, lines)| Ok((id, SportsbookLines::from_api(lines, timezone)?)))
            .collect::<Result<_, ValidationError>>()?;
        Ok(Self {
            core: EventCore::from_api(raw.core, timezone)?,
            lines,
        })
    }
}

/// Event with per-period lines keyed by affiliate id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLinePeriods {
    #[serde(flatten)]
    pub core: EventCore,
    pub line_periods: BTreeMap<i32, SportsbookLinePeriods>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEventLinePeriods {
    #[serde(flatten)]
    pub core: RawEventCore,
    #[serde(deserialize_with = "affiliate_keyed")]
    pub line_periods: BTreeMap<i32, RawSportsbookLinePeriods>,
}

impl EventLinePeriods {
    pub fn from_api(raw: RawEventLinePeriods, timezone: Tz) -> Result<Self, ValidationError> {
        let line_periods = raw
            .line_periods
            .into_iter()
            .map(|(id, periods)| Ok((id, SportsbookLinePeriods::from_api(periods, timezone)?)))
            .collect::<Result<_, ValidationError>>()?;
        Ok(Self {
            core: EventCore::from_api(raw.core, timezone)?,
            line_periods,
        })
    }
}

/// Pagination metadata of an events payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub delta_last_id: String,
}

/// Full events payload: metadata plus the event list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Events {
    pub meta: Meta,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvents {
    pub meta: Meta,
    pub events: Vec<RawEvent>,
}

impl Events {
    pub fn from_api(raw: RawEvents, timezone: Tz) -> Result<Self, ValidationError> {
        let events = raw
            .events
            .into_iter()
            .map(|event| Event::from_api(event, timezone))
            .collect::<Result<_, ValidationError>>()?;
        Ok(Self {
            meta: raw.meta,
            events,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;

    /// Core event fields, without the market map.
    const EVENT_CORE_JSON: &str = r#"
        "event_id": "f6e19e79154e1e1b4f2f0f0e49a97b89",
        "event_uuid": "11ed-a7c0-3fd02700-8d9a-ed33dbab4d23",
        "sport_id": 6,
        "event_date": "2023-01-01T18:00:00Z",
        "rotation_number_away": 101,
        "rotation_number_home": 102,
        "score": {
            "event_id": "f6e19e79154e1e1b4f2f0f0e49a97b89",
            "event_status": "STATUS_SCHEDULED",
            "score_away": 0,
            "score_home": 0,
            "winner_away": 0,
            "winner_home": 0,
            "score_away_by_period": [],
            "score_home_by_period": [],
            "venue_name": "KeyBank Center",
            "venue_location": "Buffalo, NY",
            "game_clock": 0,
            "display_clock": "0:00",
            "game_period": 0,
            "broadcast": "ESPN",
            "event_status_detail": "1/1 - 1:00 PM EST"
        },
        "teams": [
            {
                "team_id": 1201,
                "team_normalized_id": 29,
                "name": "Boston Bruins",
                "is_away": true,
                "is_home": false
            }
        ],
        "teams_normalized": [
            {
                "team_id": 29,
                "name": "Boston",
                "mascot": "Bruins",
                "abbreviation": "BOS",
                "ranking": 0,
                "record": "28-4-4",
                "is_away": true,
                "is_home": false
            }
        ],
        "schedule": {
            "season_type": "Regular Season",
            "season_year": 2023,
            "event_name": "Boston Bruins at Buffalo Sabres",
            "attendance": 0
        }"#;

    /// One affiliate's full-game markets, the value shape of the `lines` map.
    const BOOK_LINES_JSON: &str = r#"{
                "line_id": 10806455,
                "moneyline": {
                    "line_id": 10806455,
                    "date_updated": "2023-01-01T12:00:00",
                    "format": "American",
                    "moneyline_away": -150.0,
                    "moneyline_away_delta": null,
                    "moneyline_home": 130.0,
                    "moneyline_home_delta": null,
                    "moneyline_draw": null,
                    "moneyline_draw_delta": null
                },
                "spread": {
                    "line_id": 10806455,
                    "date_updated": "2023-01-01T12:00:00",
                    "format": "American",
                    "event_id": "f6e19e79154e1e1b4f2f0f0e49a97b89",
                    "affiliate_id": 3,
                    "point_spread_away": -1.5,
                    "point_spread_away_delta": null,
                    "point_spread_home": 1.5,
                    "point_spread_home_delta": null,
                    "point_spread_away_money": 180.0,
                    "point_spread_away_money_delta": null,
                    "point_spread_home_money": -220.0,
                    "point_spread_home_money_delta": null
                },
                "total": {
                    "line_id": 10806455,
                    "date_updated": "2023-01-01T12:00:00",
                    "format": "American",
                    "event_id": "f6e19e79154e1e1b4f2f0f0e49a97b89",
                    "affiliate_id": 3,
                    "total_over": 6.0,
                    "total_over_delta": null,
                    "total_under": 6.0,
                    "total_under_delta": null,
                    "total_over_money": -110.0,
                    "total_over_money_delta": null,
                    "total_under_money": -110.0,
                    "total_under_money_delta": null
                },
                "affiliate": {
                    "affiliate_id": 3,
                    "affiliate_name": "Pinnacle",
                    "affiliate_url": "https://www.pinnacle.com"
                }
            }"#;

    /// Event payload with one affiliate's lines, shared with the lib tests.
    pub(crate) fn event_json() -> String {
        format!(r#"{{ {EVENT_CORE_JSON}, "lines": {{ "3": {BOOK_LINES_JSON} }} }}"#)
    }

    /// Event payload with per-period lines (`include=all_periods`).
    pub(crate) fn event_with_periods_json() -> String {
        // A period block is the lines block plus the period fields.
        let period = format!(
            r#"{}, "period_id": 0, "period_description": "Full Game" }}"#,
            BOOK_LINES_JSON.trim_end().trim_end_matches('}')
        );
        let buckets = [
            "period_full_game",
            "period_first_half",
            "period_second_half",
            "period_first_period",
            "period_second_period",
            "period_third_period",
            "period_fourth_period",
            "period_live_full_game",
        ]
        .map(|bucket| format!(r#""{bucket}": {period}"#))
        .join(", ");
        format!(r#"{{ {EVENT_CORE_JSON}, "line_periods": {{ "3": {{ {buckets} }} }} }}"#)
    }

    #[test]
    fn event_lines_are_keyed_by_affiliate() {
        let raw: RawEvent = serde_json::from_str(&event_json()).unwrap();
        let event = Event::from_api(raw, New_York).unwrap();

        // 18:00Z shifts to 13:00 in New York.
        assert_eq!(
            event.core.event_date,
            New_York.with_ymd_and_hms(2023, 1, 1, 13, 0, 0).unwrap()
        );
        let lines = event.lines.get(&3).unwrap();
        assert_eq!(lines.affiliate.affiliate_name, "Pinnacle");
        assert_eq!(lines.moneyline.moneyline_away, Some(-150.0));
        assert_eq!(lines.spread.point_spread_home, Some(1.5));
        assert_eq!(lines.total.total_over, Some(6.0));
        assert_eq!(event.core.schedule.season_year, 2023);
        assert_eq!(event.core.teams_normalized[0].team.abbreviation, "BOS");
    }

    #[test]
    fn score_is_optional_for_future_events() {
        let json = event_json().replacen(r#""score": {"#, r#""score_removed": {"#, 1);
        let raw: RawEvent = serde_json::from_str(&json).unwrap();
        let event = Event::from_api(raw, New_York).unwrap();
        assert!(event.core.score.is_none());
    }

    #[test]
    fn line_periods_cover_every_bucket() {
        let raw: RawEventLinePeriods =
            serde_json::from_str(&event_with_periods_json()).unwrap();
        let event = EventLinePeriods::from_api(raw, New_York).unwrap();

        let periods = event.line_periods.get(&3).unwrap();
        assert_eq!(periods.period_full_game.period_description, "Full Game");
        assert_eq!(periods.period_full_game.period_id, Some(0));
        assert_eq!(
            periods.period_third_period.lines.moneyline.moneyline_home,
            Some(130.0)
        );
    }
}
