//! Duration type with string serialization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::error::DurationError;
use crate::units::{MICROSECOND, MILLISECOND, SECOND};

/// A signed duration in nanoseconds that serializes to its canonical string
/// (e.g., "1h30m0s") and deserializes from either a duration string or an
/// integer count of nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    /// Creates a Duration from nanoseconds.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Creates a Duration from microseconds, saturating at the i64 range.
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros.saturating_mul(MICROSECOND as i64))
    }

    /// Creates a Duration from milliseconds, saturating at the i64 range.
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms.saturating_mul(MILLISECOND as i64))
    }

    /// Creates a Duration from seconds, saturating at the i64 range.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(SECOND as i64))
    }

    /// Returns the duration as nanoseconds.
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    /// Returns the duration as seconds (floating point).
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / SECOND as f64
    }

    /// Returns true if this duration is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if this duration is less than zero.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value, or `None` for the most negative duration.
    pub const fn checked_abs(&self) -> Option<Self> {
        match self.0.checked_abs() {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_duration(f, self.0)
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s).map(Self)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DurationVisitor;

        impl<'de> serde::de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration string (e.g., '1h30m') or nanoseconds integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(serde::de::Error::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Duration(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map(Duration)
                    .map_err(|_| serde::de::Error::custom(DurationError::OutOfRange(v.to_string())))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Duration::default())
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

impl From<i64> for Duration {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl From<Duration> for i64 {
    fn from(d: Duration) -> Self {
        d.0
    }
}

impl TryFrom<StdDuration> for Duration {
    type Error = DurationError;

    fn try_from(d: StdDuration) -> Result<Self, Self::Error> {
        i64::try_from(d.as_nanos())
            .map(Self)
            .map_err(|_| DurationError::OutOfRange(format!("{:?}", d)))
    }
}

impl TryFrom<Duration> for StdDuration {
    type Error = DurationError;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        u64::try_from(d.0)
            .map(StdDuration::from_nanos)
            .map_err(|_| DurationError::OutOfRange(d.to_string()))
    }
}

impl From<Duration> for chrono::TimeDelta {
    fn from(d: Duration) -> Self {
        chrono::TimeDelta::nanoseconds(d.0)
    }
}

impl TryFrom<chrono::TimeDelta> for Duration {
    type Error = DurationError;

    fn try_from(d: chrono::TimeDelta) -> Result<Self, Self::Error> {
        d.num_nanoseconds()
            .map(Self)
            .ok_or_else(|| DurationError::OutOfRange(d.to_string()))
    }
}
