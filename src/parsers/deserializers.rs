use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Lenient deserializer for record timestamps.
///
/// Strings are kept verbatim, integers are read as Unix milliseconds and rendered
/// as RFC3339. Anything else (null, objects, out-of-range numbers) becomes `None`
/// instead of failing the whole record.
pub fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        _ => None,
    })
}

/// Parse a raw timestamp string as RFC3339, falling back to Unix milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = raw.parse::<DateTime<Utc>>() {
        return Some(ts);
    }
    raw.trim().parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}

/// Session transcripts are named `<session-uuid>.jsonl`.
pub fn is_session_id(s: &str) -> bool {
    !s.is_empty() && Uuid::parse_str(s).is_ok()
}
