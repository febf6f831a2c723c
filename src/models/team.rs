use serde::{Deserialize, Serialize};

/// Team as returned by the teams endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i32,
    pub name: String,
    pub mascot: String,
    pub abbreviation: String,
}

/// Team entry inside an event's `teams_normalized` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNormalized {
    #[serde(flatten)]
    pub team: Team,
    pub ranking: i32,
    pub record: String,
    pub is_away: bool,
    pub is_home: bool,
}

/// Team entry inside an event's legacy `teams` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDeprecated {
    pub team_id: i32,
    pub team_normalized_id: i32,
    pub name: String,
    pub is_away: bool,
    pub is_home: bool,
}
