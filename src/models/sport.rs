use serde::{Deserialize, Serialize};

/// Sport as returned by the sports endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub sport_id: i32,
    pub sport_name: String,
}

/// Sports supported by the API, with the alternate names a caller might use.
///
/// Ids and names match the sports endpoint; the API expects the id.
const SPORTS: &[(i32, &str, &[&str])] = &[
    (1, "NCAA Football", &["NCAAF"]),
    (2, "NFL", &[]),
    (3, "MLB", &[]),
    (4, "NBA", &[]),
    (5, "NCAA Men's Basketball", &["NCAAB"]),
    (6, "NHL", &[]),
    (7, "UFC/MMA", &["UFC", "MMA"]),
    (8, "WNBA", &[]),
    (9, "CFL", &[]),
    (10, "MLS", &[]),
];

impl Sport {
    /// All sports known to the API.
    pub fn get_all() -> Vec<Sport> {
        SPORTS
            .iter()
            .map(|(sport_id, sport_name, _)| Sport {
                sport_id: *sport_id,
                sport_name: (*sport_name).to_owned(),
            })
            .collect()
    }

    /// Look up a sport id by name or alternate name, case insensitive.
    pub fn id_by_name(name: &str) -> Option<i32> {
        let name = name.to_lowercase();
        SPORTS.iter().find_map(|(sport_id, sport_name, alt_names)| {
            let matches = sport_name.to_lowercase() == name
                || alt_names.iter().any(|alt| alt.to_lowercase() == name);
            matches.then_some(*sport_id)
        })
    }
}
