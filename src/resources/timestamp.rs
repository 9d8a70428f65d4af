//! Serde helpers for backend timestamps.
//!
//! The backend emits naive ISO-8601 timestamps (`2024-05-01T09:30:00` or
//! with fractional seconds). They are read as UTC. RFC 3339 strings with an
//! explicit offset are accepted too and converted to UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses a backend timestamp.
///
/// # Example
///
/// ```rust
/// use jewelry_api::resources::timestamp::parse;
///
/// let naive = parse("2024-05-01T09:30:00.123456").unwrap();
/// let offset = parse("2024-05-01T11:30:00.123456+02:00").unwrap();
/// assert_eq!(naive, offset);
/// ```
#[must_use]
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// `#[serde(with = "timestamp::option")]` for `Option<DateTime<Utc>>` fields.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes as RFC 3339, or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_str(&timestamp.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes a naive or offset timestamp, or `null`.
    ///
    /// # Errors
    ///
    /// Fails when a string is present but is not a recognizable timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|raw| {
            super::parse(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
        })
        .transpose()
    }
}
