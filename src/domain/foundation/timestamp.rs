//! Timestamp value for timestamp-typed shape fields.
//!
//! On the wire timestamps travel as epoch seconds with fractional milliseconds.
//! Deserialization also accepts RFC 3339 strings.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::FieldValue;

/// Immutable point in time, always UTC, millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from_epoch_millis(Utc::now().timestamp_millis()).unwrap_or_else(|| Self(Utc::now()))
    }

    /// Creates a timestamp from a `DateTime<Utc>`, truncated to milliseconds.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(dt.timestamp_millis()).unwrap_or(Self(dt))
    }

    /// Creates a timestamp from epoch milliseconds, `None` when out of range.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Creates a timestamp from fractional epoch seconds, `None` when out of range.
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        Self::from_epoch_millis((seconds * 1000.0).round() as i64)
    }

    /// Parses an RFC 3339 string.
    pub fn parse_rfc3339(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns fractional seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> f64 {
        self.epoch_millis() as f64 / 1000.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl FieldValue for Timestamp {
    fn stable_hash(&self) -> i32 {
        self.epoch_millis().stable_hash()
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.epoch_seconds())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or an RFC 3339 timestamp")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Timestamp, E> {
        Timestamp::from_epoch_seconds(value)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Timestamp, E> {
        self.visit_f64(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Timestamp, E> {
        self.visit_f64(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
        Timestamp::parse_rfc3339(value)
            .ok_or_else(|| E::custom(format!("invalid RFC 3339 timestamp: {}", value)))
    }
}
