//! Lenient timestamp decoding for cache payloads
//!
//! Accepts RFC 3339 (`2024-01-02T10:00:00.000Z`), ISO-8601 without an
//! offset (read as UTC), date-only ISO-8601 (midnight UTC) and epoch
//! milliseconds. A missing, null or unreadable value decodes to `None`
//! so one bad record never rejects a whole snapshot.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    EpochMillis(i64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

/// Parse a textual timestamp in any of the accepted ISO-8601 forms
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(at.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

/// Timestamp from epoch milliseconds, `None` when out of range
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// `deserialize_with` target for optional timestamp fields
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let at = match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => None,
        Some(RawTimestamp::EpochMillis(millis)) => {
            let at = from_epoch_millis(millis);
            if at.is_none() {
                tracing::warn!(millis, "Epoch timestamp out of range");
            }
            at
        }
        Some(RawTimestamp::Text(text)) => {
            let at = parse_timestamp(&text);
            if at.is_none() {
                tracing::warn!(value = %text, "Unreadable timestamp");
            }
            at
        }
        Some(RawTimestamp::Other(_)) => {
            tracing::warn!("Timestamp is neither a string nor an integer");
            None
        }
    };
    Ok(at)
}
