use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::utils::timestamp::normalize_timestamp;

/// Schedule summary embedded in event records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSchedule {
    pub season_type: String,
    pub season_year: u32,
    pub event_name: String,
    pub attendance: u32,
}

/// One sporting event as returned by the schedules endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub id: u64,
    pub season_type: String,
    pub season_year: u32,
    pub event_name: String,
    pub attendance: u32,
    pub event_uuid: String,
    pub event_id: String,
    pub sport_id: i32,
    pub away_team_id: i32,
    pub home_team_id: i32,
    pub away_team: String,
    pub home_team: String,
    /// Normalized to the canonical timezone.
    pub date_event: DateTime<Tz>,
    pub neutral_site: bool,
    pub conference_competition: bool,
    pub away_score: i32,
    pub home_score: i32,
    pub league_name: String,
    pub event_location: String,
    /// Normalized to the canonical timezone.
    pub updated_at: DateTime<Tz>,
    pub event_status: String,
    pub event_status_detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSchedule {
    pub id: u64,
    pub season_type: String,
    pub season_year: u32,
    pub event_name: String,
    pub attendance: u32,
    pub event_uuid: String,
    pub event_id: String,
    pub sport_id: i32,
    pub away_team_id: i32,
    pub home_team_id: i32,
    pub away_team: String,
    pub home_team: String,
    pub date_event: String,
    pub neutral_site: bool,
    pub conference_competition: bool,
    pub away_score: i32,
    pub home_score: i32,
    pub league_name: String,
    pub event_location: String,
    pub updated_at: String,
    pub event_status: String,
    pub event_status_detail: String,
}

impl Schedule {
    pub fn from_api(raw: RawSchedule, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            id: raw.id,
            season_type: raw.season_type,
            season_year: raw.season_year,
            event_name: raw.event_name,
            attendance: raw.attendance,
            event_uuid: raw.event_uuid,
            event_id: raw.event_id,
            sport_id: raw.sport_id,
            away_team_id: raw.away_team_id,
            home_team_id: raw.home_team_id,
            away_team: raw.away_team,
            home_team: raw.home_team,
            date_event: normalize_timestamp(&raw.date_event, timezone)?,
            neutral_site: raw.neutral_site,
            conference_competition: raw.conference_competition,
            away_score: raw.away_score,
            home_score: raw.home_score,
            league_name: raw.league_name,
            event_location: raw.event_location,
            updated_at: normalize_timestamp(&raw.updated_at, timezone)?,
            event_status: raw.event_status,
            event_status_detail: raw.event_status_detail,
        })
    }
}
