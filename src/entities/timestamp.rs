//! Timestamp formatting
//!
//! Fixed-width RFC 3339 with nanoseconds, e.g. `2026-10-18T09:15:02.123456789Z`.
//! Lexical order equals chronological order. Usable as a serde `with` module.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{AgoraError, Result};

/// Textual format used whenever a timestamp leaves the process
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// Current time
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Render a timestamp in [`FORMAT`]
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(FORMAT).to_string()
}

/// Parse a timestamp written in [`FORMAT`]
pub fn parse(text: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| AgoraError::Serialization(format!("bad timestamp {:?}: {}", text, e)))
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).map_err(serde::de::Error::custom)
}
