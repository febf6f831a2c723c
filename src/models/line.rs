use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::required_nullable;
use crate::utils::timestamp::normalize_timestamp;

/// Marker value the API uses for quotes it has not published yet.
const NOT_PUBLISHED: f64 = 0.0001;

/// Map the "Not Published" marker to an absent quote.
fn published(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != NOT_PUBLISHED)
}

/// Display convention for quoted prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OddsFormat {
    American,
    Decimal,
    Fractional,
}

/// Fields shared by every line type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub line_id: u64,
    /// Normalized to the canonical timezone.
    pub date_updated: DateTime<Tz>,
    pub format: OddsFormat,
}

/// Wire shape of the shared line fields.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLine {
    pub line_id: u64,
    pub date_updated: String,
    pub format: OddsFormat,
}

impl Line {
    pub fn from_api(raw: RawLine, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            line_id: raw.line_id,
            date_updated: normalize_timestamp(&raw.date_updated, timezone)?,
            format: raw.format,
        })
    }
}

/// Line fields plus the event and sportsbook the quote belongs to.
///
/// Spreads and totals carry these; moneylines do not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedLine {
    #[serde(flatten)]
    pub line: Line,
    pub event_id: String,
    pub affiliate_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawExtendedLine {
    #[serde(flatten)]
    pub line: RawLine,
    pub event_id: String,
    pub affiliate_id: i32,
}

impl ExtendedLine {
    pub fn from_api(raw: RawExtendedLine, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            line: Line::from_api(raw.line, timezone)?,
            event_id: raw.event_id,
            affiliate_id: raw.affiliate_id,
        })
    }
}

/// Win/lose/draw price quote.
///
/// Prices may be american, decimal, or fractional depending on `format`.
/// Every price is paired with the change since the previous snapshot; the
/// two are independently optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Moneyline {
    #[serde(flatten)]
    pub line: Line,
    pub moneyline_away: Option<f64>,
    pub moneyline_away_delta: Option<f64>,
    pub moneyline_home: Option<f64>,
    pub moneyline_home_delta: Option<f64>,
    pub moneyline_draw: Option<f64>,
    pub moneyline_draw_delta: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMoneyline {
    #[serde(flatten)]
    pub line: RawLine,
    #[serde(deserialize_with = "required_nullable")]
    pub moneyline_away: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub moneyline_away_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub moneyline_home: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub moneyline_home_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub moneyline_draw: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub moneyline_draw_delta: Option<f64>,
}

impl Moneyline {
    pub fn from_api(raw: RawMoneyline, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            line: Line::from_api(raw.line, timezone)?,
            moneyline_away: published(raw.moneyline_away),
            moneyline_away_delta: raw.moneyline_away_delta,
            moneyline_home: published(raw.moneyline_home),
            moneyline_home_delta: raw.moneyline_home_delta,
            moneyline_draw: published(raw.moneyline_draw),
            moneyline_draw_delta: raw.moneyline_draw_delta,
        })
    }
}

/// Moneyline scoped to one game period (full game, first half, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneylinePeriod {
    #[serde(flatten)]
    pub moneyline: Moneyline,
    pub period_id: i32,
    pub period_description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMoneylinePeriod {
    #[serde(flatten)]
    pub moneyline: RawMoneyline,
    pub period_id: i32,
    pub period_description: String,
}

impl MoneylinePeriod {
    pub fn from_api(raw: RawMoneylinePeriod, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            moneyline: Moneyline::from_api(raw.moneyline, timezone)?,
            period_id: raw.period_id,
            period_description: raw.period_description,
        })
    }
}

/// One sportsbook's spread quote inside `extended_spreads`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadElement {
    pub affiliate_id: i32,
    pub point_spread_away: Option<f64>,
    pub point_spread_away_delta: Option<f64>,
    pub point_spread_home: Option<f64>,
    pub point_spread_home_delta: Option<f64>,
    pub point_spread_away_money: Option<f64>,
    pub point_spread_away_money_delta: Option<f64>,
    pub point_spread_home_money: Option<f64>,
    pub point_spread_home_money_delta: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSpreadElement {
    pub affiliate_id: i32,
    pub point_spread_away: Option<f64>,
    pub point_spread_away_delta: Option<f64>,
    pub point_spread_home: Option<f64>,
    pub point_spread_home_delta: Option<f64>,
    pub point_spread_away_money: Option<f64>,
    pub point_spread_away_money_delta: Option<f64>,
    pub point_spread_home_money: Option<f64>,
    pub point_spread_home_money_delta: Option<f64>,
}

impl SpreadElement {
    /// The "Not Published" marker is scrubbed here exactly as on the
    /// top-level spread fields.
    pub fn from_api(raw: RawSpreadElement) -> Self {
        Self {
            affiliate_id: raw.affiliate_id,
            point_spread_away: published(raw.point_spread_away),
            point_spread_away_delta: raw.point_spread_away_delta,
            point_spread_home: published(raw.point_spread_home),
            point_spread_home_delta: raw.point_spread_home_delta,
            point_spread_away_money: published(raw.point_spread_away_money),
            point_spread_away_money_delta: raw.point_spread_away_money_delta,
            point_spread_home_money: published(raw.point_spread_home_money),
            point_spread_home_money_delta: raw.point_spread_home_money_delta,
        }
    }
}

/// Point-handicap quote with its paired prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spread {
    #[serde(flatten)]
    pub line: ExtendedLine,
    pub point_spread_away: Option<f64>,
    pub point_spread_away_delta: Option<f64>,
    pub point_spread_home: Option<f64>,
    pub point_spread_home_delta: Option<f64>,
    pub point_spread_away_money: Option<f64>,
    pub point_spread_away_money_delta: Option<f64>,
    pub point_spread_home_money: Option<f64>,
    pub point_spread_home_money_delta: Option<f64>,
    /// Per-sportsbook variants of the same market, in payload order.
    pub extended_spreads: Vec<SpreadElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSpread {
    #[serde(flatten)]
    pub line: RawExtendedLine,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_away: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_away_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_home: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_home_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_away_money: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_away_money_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_home_money: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub point_spread_home_money_delta: Option<f64>,
    #[serde(default)]
    pub extended_spreads: Vec<RawSpreadElement>,
}

impl Spread {
    pub fn from_api(raw: RawSpread, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            line: ExtendedLine::from_api(raw.line, timezone)?,
            point_spread_away: published(raw.point_spread_away),
            point_spread_away_delta: raw.point_spread_away_delta,
            point_spread_home: published(raw.point_spread_home),
            point_spread_home_delta: raw.point_spread_home_delta,
            point_spread_away_money: published(raw.point_spread_away_money),
            point_spread_away_money_delta: raw.point_spread_away_money_delta,
            point_spread_home_money: published(raw.point_spread_home_money),
            point_spread_home_money_delta: raw.point_spread_home_money_delta,
            extended_spreads: raw
                .extended_spreads
                .into_iter()
                .map(SpreadElement::from_api)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadPeriod {
    #[serde(flatten)]
    pub spread: Spread,
    pub period_id: i32,
    pub period_description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSpreadPeriod {
    #[serde(flatten)]
    pub spread: RawSpread,
    pub period_id: i32,
    pub period_description: String,
}

impl SpreadPeriod {
    pub fn from_api(raw: RawSpreadPeriod, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            spread: Spread::from_api(raw.spread, timezone)?,
            period_id: raw.period_id,
            period_description: raw.period_description,
        })
    }
}

/// One sportsbook's total quote inside `extended_totals`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalElement {
    pub affiliate_id: i32,
    pub total_over: Option<f64>,
    pub total_over_delta: Option<f64>,
    pub total_under: Option<f64>,
    pub total_under_delta: Option<f64>,
    pub total_over_money: Option<f64>,
    pub total_over_money_delta: Option<f64>,
    pub total_under_money: Option<f64>,
    pub total_under_money_delta: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTotalElement {
    pub affiliate_id: i32,
    pub total_over: Option<f64>,
    pub total_over_delta: Option<f64>,
    pub total_under: Option<f64>,
    pub total_under_delta: Option<f64>,
    pub total_over_money: Option<f64>,
    pub total_over_money_delta: Option<f64>,
    pub total_under_money: Option<f64>,
    pub total_under_money_delta: Option<f64>,
}

impl TotalElement {
    /// The "Not Published" marker is scrubbed here exactly as on the
    /// top-level total fields.
    pub fn from_api(raw: RawTotalElement) -> Self {
        Self {
            affiliate_id: raw.affiliate_id,
            total_over: published(raw.total_over),
            total_over_delta: raw.total_over_delta,
            total_under: published(raw.total_under),
            total_under_delta: raw.total_under_delta,
            total_over_money: published(raw.total_over_money),
            total_over_money_delta: raw.total_over_money_delta,
            total_under_money: published(raw.total_under_money),
            total_under_money_delta: raw.total_under_money_delta,
        }
    }
}

/// Over/under quote with its paired prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Total {
    #[serde(flatten)]
    pub line: ExtendedLine,
    pub total_over: Option<f64>,
    pub total_over_delta: Option<f64>,
    pub total_under: Option<f64>,
    pub total_under_delta: Option<f64>,
    pub total_over_money: Option<f64>,
    pub total_over_money_delta: Option<f64>,
    pub total_under_money: Option<f64>,
    pub total_under_money_delta: Option<f64>,
    /// Per-sportsbook variants of the same market, in payload order.
    pub extended_totals: Vec<TotalElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTotal {
    #[serde(flatten)]
    pub line: RawExtendedLine,
    #[serde(deserialize_with = "required_nullable")]
    pub total_over: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub total_over_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub total_under: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub total_under_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub total_over_money: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub total_over_money_delta: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub total_under_money: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub total_under_money_delta: Option<f64>,
    #[serde(default)]
    pub extended_totals: Vec<RawTotalElement>,
}

impl Total {
    pub fn from_api(raw: RawTotal, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            line: ExtendedLine::from_api(raw.line, timezone)?,
            total_over: published(raw.total_over),
            total_over_delta: raw.total_over_delta,
            total_under: published(raw.total_under),
            total_under_delta: raw.total_under_delta,
            total_over_money: published(raw.total_over_money),
            total_over_money_delta: raw.total_over_money_delta,
            total_under_money: published(raw.total_under_money),
            total_under_money_delta: raw.total_under_money_delta,
            extended_totals: raw
                .extended_totals
                .into_iter()
                .map(TotalElement::from_api)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalPeriod {
    #[serde(flatten)]
    pub total: Total,
    pub period_id: i32,
    pub period_description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTotalPeriod {
    #[serde(flatten)]
    pub total: RawTotal,
    pub period_id: i32,
    pub period_description: String,
}

impl TotalPeriod {
    pub fn from_api(raw: RawTotalPeriod, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            total: Total::from_api(raw.total, timezone)?,
            period_id: raw.period_id,
            period_description: raw.period_description,
        })
    }
}
