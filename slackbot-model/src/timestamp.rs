//! The Slack `ts` timestamp value.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// A Slack message timestamp: seconds since the Unix epoch with a
/// microsecond fraction.
///
/// Transmitted as either a JSON string (`"1405894322.002768"`) or a bare
/// number; always serialized back to the canonical string form, which is
/// what the API uses as a message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp {
    secs: i64,
    micros: u32,
}

impl Timestamp {
    /// The Unix epoch (`"0.000000"`).
    pub const EPOCH: Self = Self { secs: 0, micros: 0 };

    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, micros: 0 }
    }

    /// Builds a timestamp from whole seconds and a sub-second microsecond
    /// part. Microseconds overflow into seconds.
    #[must_use]
    pub const fn from_parts(secs: i64, micros: u32) -> Self {
        Self {
            secs: secs + (micros / 1_000_000) as i64,
            micros: micros % 1_000_000,
        }
    }

    /// The current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            secs: elapsed.as_secs() as i64,
            micros: elapsed.subsec_micros(),
        }
    }

    #[must_use]
    pub const fn secs(&self) -> i64 {
        self.secs
    }

    #[must_use]
    pub const fn micros(&self) -> u32 {
        self.micros
    }

    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.secs as f64 + f64::from(self.micros) / 1e6
    }

    /// Converts to calendar time. Returns `None` when the value is outside
    /// chrono's representable range.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.secs, self.micros * 1_000)
    }

    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            secs: dt.timestamp(),
            micros: dt.timestamp_subsec_micros() % 1_000_000,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.secs, self.micros)
    }
}

impl FromStr for Timestamp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTimestamp(s.to_string());

        let (secs_part, frac_part) = match s.split_once('.') {
            Some((secs, frac)) => (secs, Some(frac)),
            None => (s, None),
        };

        let secs: i64 = secs_part.parse().map_err(|_| invalid())?;

        let micros = match frac_part {
            None | Some("") => 0,
            Some(frac) => {
                if frac.len() > 6 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                // Right-pad to microsecond precision: ".5" means 500000.
                let padded: u32 = frac.parse().map_err(|_| invalid())?;
                padded * 10u32.pow(6 - frac.len() as u32)
            }
        };

        Ok(Self { secs, micros })
    }
}

impl From<Timestamp> for serde_json::Value {
    fn from(ts: Timestamp) -> Self {
        serde_json::Value::String(ts.to_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a Slack ts string or epoch number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        Ok(Timestamp::from_secs(v as i64))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Ok(Timestamp::from_secs(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        let secs = v.trunc() as i64;
        let micros = ((v - v.trunc()) * 1e6).round() as u32;
        Ok(Timestamp::from_parts(secs, micros))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
