//! Caller-supplied timestamps and their wall-clock normalization.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const AWARE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

/// A timestamp as supplied by a caller, with or without a UTC offset.
///
/// Storage columns are timezone-naive. [`Timestamp::wall_clock`] drops the
/// offset and keeps the local fields as written: `10:00+02:00` is stored as
/// `10:00`, not as `08:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Returns the local date and time fields, discarding any offset.
    pub fn wall_clock(self) -> NaiveDateTime {
        match self {
            Timestamp::Naive(naive) => naive,
            Timestamp::Aware(aware) => aware.naive_local(),
        }
    }
}

impl FromStr for Timestamp {
    type Err = ValidationError;

    /// Accepts RFC 3339, ISO-8601 date-times with or without offset, and
    /// bare dates (midnight).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if let Ok(aware) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Timestamp::Aware(aware));
        }
        // `%z` has no spelling for the UTC designator.
        let zoned = match trimmed.strip_suffix(['Z', 'z']) {
            Some(local) => format!("{local}+00:00"),
            None => trimmed.to_string(),
        };
        for format in AWARE_FORMATS {
            if let Ok(aware) = DateTime::parse_from_str(&zoned, format) {
                return Ok(Timestamp::Aware(aware));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Timestamp::Naive(naive));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Timestamp::Naive(date.and_time(NaiveTime::MIN)));
        }

        Err(ValidationError::InvalidDate {
            input: input.to_string(),
        })
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Timestamp::Aware(aware)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
