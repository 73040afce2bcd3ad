//! Timestamp normalization
//!
//! STIX timestamps arrive as zoned ISO-8601 text. The graph store wants the
//! local date-time with no zone or offset suffix, so `created` and
//! `modified` are normalized identically on read.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a zoned timestamp to its canonical local form
///
/// The offset is stripped, not applied: `2017-01-01T12:30:00+05:00` becomes
/// `2017-01-01T12:30:00`. Fractional seconds are kept only when non-zero.
/// Already-canonical local date-times pass through unchanged, so the
/// operation is idempotent on its own output.
pub fn normalize(value: &str) -> Result<String> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(zoned) => Ok(zoned.naive_local().to_string()),
        Err(source) => value
            .parse::<NaiveDateTime>()
            .map(|local| local.to_string())
            .map_err(|_| Error::TimestampParse {
                value: value.to_string(),
                source,
            }),
    }
}

/// A timestamp as received on the wire
///
/// The raw text is kept verbatim; normalization happens on read so a value
/// that never gets persisted never has to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Create a timestamp from raw wire text
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    /// Get the raw wire text
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Get the canonical local date-time form
    pub fn normalize(&self) -> Result<String> {
        normalize(&self.0)
    }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Timestamp {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_utc() {
        assert_eq!(
            normalize("2017-01-01T12:30:00.000Z").unwrap(),
            "2017-01-01T12:30:00"
        );
    }

    #[test]
    fn test_normalize_keeps_local_wall_clock() {
        assert_eq!(
            normalize("2017-01-01T12:30:00+05:00").unwrap(),
            "2017-01-01T12:30:00"
        );
    }

    #[test]
    fn test_normalize_keeps_nonzero_fraction() {
        assert_eq!(
            normalize("2017-06-19T08:04:11.123Z").unwrap(),
            "2017-06-19T08:04:11.123"
        );
    }

    #[test]
    fn test_normalize_accepts_canonical_form() {
        assert_eq!(
            normalize("2017-01-01T12:30:00").unwrap(),
            "2017-01-01T12:30:00"
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let err = normalize("not-a-timestamp").unwrap_err();
        assert!(err.is_unprocessable());
    }

    #[test]
    fn test_normalize_rejects_date_only() {
        assert!(normalize("2017-01-01").is_err());
    }

    #[test]
    fn test_timestamp_round_trip() {
        let ts = Timestamp::new("2019-11-02T23:59:59Z");
        assert_eq!(ts.raw(), "2019-11-02T23:59:59Z");
        assert_eq!(ts.normalize().unwrap(), "2019-11-02T23:59:59");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent_on_canonical_form(
            secs in 0i64..4_102_444_800i64,
            nanos in 0u32..1_000_000_000u32,
            offset_minutes in -14 * 60i32..=14 * 60i32,
        ) {
            let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
            let zoned = DateTime::from_timestamp(secs, nanos)
                .unwrap()
                .with_timezone(&offset);

            let once = normalize(&zoned.to_rfc3339()).unwrap();
            let twice = normalize(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
