pub mod date;
pub mod event;
pub mod line;
pub mod lineperiods;
pub mod schedule;
pub mod sport;
pub mod sportsbook;
pub mod team;

pub use date::*;
pub use event::*;
pub use line::*;
pub use lineperiods::*;
pub use schedule::*;
pub use sport::*;
pub use sportsbook::*;
pub use team::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that must be present in the payload but may be null.
///
/// Plain `Option` fields are allowed to be missing entirely; the line price
/// fields are part of the wire contract even when no quote is available, so
/// a missing key is a shape error while an explicit null stays `None`.
pub(crate) fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

/// Deserialize a map keyed by affiliate id.
///
/// JSON object keys are strings, and the flattened event structs buffer
/// their fields in a way that bypasses serde_json's integer-key handling,
/// so the keys are parsed here explicitly.
pub(crate) fn affiliate_keyed<'de, D, V>(deserializer: D) -> Result<BTreeMap<i32, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let entries = BTreeMap::<String, V>::deserialize(deserializer)?;
    entries
        .into_iter()
        .map(|(id, value)| {
            id.parse::<i32>()
                .map(|id| (id, value))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}
