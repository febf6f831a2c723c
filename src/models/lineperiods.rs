use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::line::{
    MoneylinePeriod, RawMoneylinePeriod, RawSpreadPeriod, RawTotalPeriod, SpreadPeriod,
    TotalPeriod,
};

/// One per-period line of any market type.
///
/// The wire payload carries no type tag; the market is identified by which
/// required price keys are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PeriodLine {
    Moneyline(MoneylinePeriod),
    Spread(SpreadPeriod),
    Total(TotalPeriod),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPeriodLine {
    Moneyline(RawMoneylinePeriod),
    Spread(RawSpreadPeriod),
    Total(RawTotalPeriod),
}

impl PeriodLine {
    pub fn from_api(raw: RawPeriodLine, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(match raw {
            RawPeriodLine::Moneyline(ml) => {
                PeriodLine::Moneyline(MoneylinePeriod::from_api(ml, timezone)?)
            }
            RawPeriodLine::Spread(sp) => PeriodLine::Spread(SpreadPeriod::from_api(sp, timezone)?),
            RawPeriodLine::Total(t) => PeriodLine::Total(TotalPeriod::from_api(t, timezone)?),
        })
    }
}

/// Per-period line lists for one market, bucketed by game period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePeriods {
    pub period_full_game: Vec<PeriodLine>,
    pub period_first_half: Vec<PeriodLine>,
    pub period_second_half: Vec<PeriodLine>,
    pub period_first_period: Vec<PeriodLine>,
    pub period_second_period: Vec<PeriodLine>,
    pub period_third_period: Vec<PeriodLine>,
    pub period_fourth_period: Vec<PeriodLine>,
    pub period_live_full_game: Vec<PeriodLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLinePeriods {
    pub period_full_game: Vec<RawPeriodLine>,
    pub period_first_half: Vec<RawPeriodLine>,
    pub period_second_half: Vec<RawPeriodLine>,
    pub period_first_period: Vec<RawPeriodLine>,
    pub period_second_period: Vec<RawPeriodLine>,
    pub period_third_period: Vec<RawPeriodLine>,
    pub period_fourth_period: Vec<RawPeriodLine>,
    pub period_live_full_game: Vec<RawPeriodLine>,
}

fn convert(lines: Vec<RawPeriodLine>, timezone: Tz) -> Result<Vec<PeriodLine>, ValidationError> {
    lines
        .into_iter()
        .map(|line| PeriodLine::from_api(line, timezone))
        .collect()
}

impl LinePeriods {
    pub fn from_api(raw: RawLinePeriods, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            period_full_game: convert(raw.period_full_game, timezone)?,
            period_first_half: convert(raw.period_first_half, timezone)?,
            period_second_half: convert(raw.period_second_half, timezone)?,
            period_first_period: convert(raw.period_first_period, timezone)?,
            period_second_period: convert(raw.period_second_period, timezone)?,
            period_third_period: convert(raw.period_third_period, timezone)?,
            period_fourth_period: convert(raw.period_fourth_period, timezone)?,
            period_live_full_game: convert(raw.period_live_full_game, timezone)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    /// One bucket of each market type, shared with the lib tests.
    pub(crate) const MIXED_PERIODS_JSON: &str = r#"{
        "period_full_game": [
            {
                "line_id": 1,
                "date_updated": "2023-01-01T12:00:00",
                "format": "American",
                "moneyline_away": 150.0,
                "moneyline_away_delta": null,
                "moneyline_home": -170.0,
                "moneyline_home_delta": null,
                "moneyline_draw": null,
                "moneyline_draw_delta": null,
                "period_id": 0,
                "period_description": "Full Game"
            },
            {
                "line_id": 2,
                "date_updated": "2023-01-01T12:00:00",
                "format": "American",
                "event_id": "abc123",
                "affiliate_id": 3,
                "point_spread_away": 3.5,
                "point_spread_away_delta": null,
                "point_spread_home": -3.5,
                "point_spread_home_delta": null,
                "point_spread_away_money": -110.0,
                "point_spread_away_money_delta": null,
                "point_spread_home_money": -110.0,
                "point_spread_home_money_delta": null,
                "period_id": 0,
                "period_description": "Full Game"
            },
            {
                "line_id": 3,
                "date_updated": "2023-01-01T12:00:00",
                "format": "American",
                "event_id": "abc123",
                "affiliate_id": 3,
                "total_over": 45.5,
                "total_over_delta": null,
                "total_under": 45.5,
                "total_under_delta": null,
                "total_over_money": -110.0,
                "total_over_money_delta": null,
                "total_under_money": -110.0,
                "total_under_money_delta": null,
                "period_id": 0,
                "period_description": "Full Game"
            }
        ],
        "period_first_half": [],
        "period_second_half": [],
        "period_first_period": [],
        "period_second_period": [],
        "period_third_period": [],
        "period_fourth_period": [],
        "period_live_full_game": []
    }"#;

    #[test]
    fn market_type_is_identified_by_price_keys() {
        let raw: RawLinePeriods = serde_json::from_str(MIXED_PERIODS_JSON).unwrap();
        let periods = LinePeriods::from_api(raw, New_York).unwrap();

        assert_eq!(periods.period_full_game.len(), 3);
        assert!(matches!(
            periods.period_full_game[0],
            PeriodLine::Moneyline(_)
        ));
        assert!(matches!(periods.period_full_game[1], PeriodLine::Spread(_)));
        assert!(matches!(periods.period_full_game[2], PeriodLine::Total(_)));
        assert!(periods.period_first_half.is_empty());
    }

    #[test]
    fn bad_timestamp_in_one_line_fails_the_batch() {
        let json = MIXED_PERIODS_JSON.replacen("2023-01-01T12:00:00", "garbage", 1);
        let raw: RawLinePeriods = serde_json::from_str(&json).unwrap();
        assert!(LinePeriods::from_api(raw, New_York).is_err());
    }
}
