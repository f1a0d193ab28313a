use serde::{de, Deserialize, Deserializer, Serialize};
use time::{format_description::well_known::Rfc3339, macros::format_description};
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::entries::repo_types::Entry;

/// Body of `POST /api/u/{secret}/entries`.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: OffsetDateTime,
    pub description: Option<String>,
    pub energy: Option<i32>,
}

/// ISO-8601 date-time. RFC 3339 with an offset, or a naive local form
/// (`2025-01-01T10:00`, seconds and fraction optional) taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    let naive = PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            raw,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
    })
    .ok()?;
    Some(naive.assume_utc())
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<OffsetDateTime, D::Error> {
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 timestamp `{raw}`")))
}

/// Entry as returned to the client.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub description: Option<String>,
    pub energy: Option<i32>,
}

impl From<Entry> for EntryResponse {
    fn from(e: Entry) -> Self {
        Self {
            id: e.id,
            timestamp: e.timestamp,
            description: e.description,
            energy: e.energy,
        }
    }
}
