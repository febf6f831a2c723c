use serde::{Deserialize, Serialize};

/// Sportsbook (affiliate) providing quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sportsbook {
    pub affiliate_id: i32,
    pub affiliate_name: String,
    pub affiliate_url: String,
}

/// Sportsbooks known to the API.
///
/// Unibet and BetMGM appear in event payloads but are missing from the
/// sportsbooks endpoint, so they are listed here manually.
const SPORTSBOOKS: &[(i32, &str)] = &[
    (1, "5Dimes"),
    (3, "Pinnacle"),
    (16, "Matchbook"),
    (19, "Draftkings"),
    (6, "BetOnline"),
    (20, "Pointsbet"),
    (2, "Bovada"),
    (7, "Bookmaker"),
    (11, "LowVig"),
    (10, "JustBet"),
    (4, "SportsBetting"),
    (9, "betcris"),
    (15, "TigerGaming"),
    (14, "Intertops"),
    (12, "Bodog"),
    (18, "YouWager"),
    (17, "RedZone"),
    (21, "Unibet"),
    (22, "BetMGM"),
];

impl Sportsbook {
    /// Look up a sportsbook name by affiliate id.
    pub fn name_by_id(affiliate_id: i32) -> Option<&'static str> {
        SPORTSBOOKS
            .iter()
            .find_map(|(id, name)| (*id == affiliate_id).then_some(*name))
    }
}
