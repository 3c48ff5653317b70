use std::{fmt, time::Duration};

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time (UTC) with millisecond precision.
///
/// The precision matches what is persisted, i.e. a timestamp
/// survives a round trip through the store unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("Timestamp out of range: {0} ms")]
pub struct TimestampRangeError(i64);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        // Truncate sub-millisecond digits
        Self(now.replace_millisecond(now.millisecond()).unwrap_or(now))
    }

    pub fn try_from_millis(millis: i64) -> Result<Self, TimestampRangeError> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .map(Self)
            .map_err(|_| TimestampRangeError(millis))
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        let duration = time::Duration::try_from(duration).ok()?;
        self.0.checked_sub(duration).map(Self)
    }

    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        let duration = time::Duration::try_from(duration).ok()?;
        self.0.checked_add(duration).map(Self)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}
