use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::utils::timestamp::normalize_reported_local;

/// One entry from the dates endpoint (`format=date`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Date {
    pub date: DateTime<Tz>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDate {
    pub date: String,
}

impl Date {
    pub fn from_api(raw: RawDate, timezone: Tz) -> Result<Self, ValidationError> {
        Ok(Self {
            date: normalize_reported_local(&raw.date, timezone)?,
        })
    }
}

/// One entry from the dates endpoint (`format=epoch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epoch {
    pub timestamp: i64,
}
