//! Conversions between `TimeSpan` and the standard library and `time` crate
//! duration types.

use crate::*;
use log::trace;

impl From<core::time::Duration> for TimeSpan {
    fn from(other: core::time::Duration) -> Self {
        TimeSpan::from_millis(
            other.as_secs() as f64 * MILLIS_PER_SEC + other.subsec_nanos() as f64 / NANOS_PER_MILLI,
        )
    }
}

/// `core::time::Duration` is unsigned and finite, so negative, NaN, and
/// infinite spans are rejected.
impl TryFrom<TimeSpan> for core::time::Duration {
    type Error = Error;

    fn try_from(other: TimeSpan) -> Result<Self, Self::Error> {
        if !other.is_finite() {
            return Err(Error::NotFinite);
        }

        if other.ms < 0.0 {
            return Err(Error::Negative);
        }

        core::time::Duration::try_from_secs_f64(other.as_secs()).map_err(|_| Error::Overflow)
    }
}

/// NaN becomes a zero duration and values outside of the representable range
/// saturate.
impl From<TimeSpan> for time::Duration {
    fn from(other: TimeSpan) -> Self {
        let duration = time::Duration::saturating_seconds_f64(other.as_secs());

        if other.is_null() || duration == time::Duration::MAX || duration == time::Duration::MIN {
            trace!("span {other} saturated to time::Duration {duration}");
        }

        duration
    }
}

impl From<time::Duration> for TimeSpan {
    fn from(other: time::Duration) -> Self {
        TimeSpan::from_millis(
            other.whole_seconds() as f64 * MILLIS_PER_SEC
                + other.subsec_nanoseconds() as f64 / NANOS_PER_MILLI,
        )
    }
}
