//! Custom serde helpers for backend wire formats.

/// Deserializes an ISO 8601 timestamp into `DateTime<Utc>`.
///
/// The backend emits Python `isoformat()` strings, which carry no offset for
/// naive datetimes. Those are read as UTC; RFC 3339 strings are honored as-is.
pub mod iso_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        s.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s)))
    }
}

/// Optional variant of [`iso_datetime`]; `null` or a missing field yields `None`.
pub mod iso_datetime_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) => super::iso_datetime::parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s))),
        }
    }
}

/// Accepts either a JSON string or a JSON integer and yields a `String`.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Int(n) => n.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::iso_datetime;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_naive_isoformat() {
        let dt = iso_datetime::parse("2024-01-15T10:30:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_naive_with_micros() {
        let dt = iso_datetime::parse("2024-01-15T10:30:00.123456").unwrap();
        assert_eq!(dt.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_rfc3339_offset() {
        let dt = iso_datetime::parse("2024-01-15T10:30:00-03:00").unwrap();
        assert_eq!(dt.hour(), 13);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(iso_datetime::parse("yesterday").is_none());
    }
}
