//! The interval value type and its raw nanosecond accessors.

use std::time::Duration as StdDuration;

use chrono::TimeDelta;

use crate::error::Error;

/// A signed time interval with nanosecond resolution.
///
/// The range matches a signed 64-bit nanosecond count, roughly ±292 years.
/// Zero is a legitimate value and is also the [`Default`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Interval(i64);

impl Interval {
    pub const ZERO: Interval = Interval(0);
    pub const NANOSECOND: Interval = Interval(1);
    pub const MICROSECOND: Interval = Interval(1_000);
    pub const MILLISECOND: Interval = Interval(1_000_000);
    pub const SECOND: Interval = Interval(1_000_000_000);
    pub const MINUTE: Interval = Interval(60 * 1_000_000_000);
    pub const HOUR: Interval = Interval(60 * 60 * 1_000_000_000);

    /// Creates an Interval from a nanosecond count.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Creates an Interval from microseconds.
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros.wrapping_mul(Self::MICROSECOND.0))
    }

    /// Creates an Interval from milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.wrapping_mul(Self::MILLISECOND.0))
    }

    /// Creates an Interval from seconds.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.wrapping_mul(Self::SECOND.0))
    }

    /// Creates an Interval from minutes.
    pub const fn from_mins(mins: i64) -> Self {
        Self(mins.wrapping_mul(Self::MINUTE.0))
    }

    /// Creates an Interval from hours.
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours.wrapping_mul(Self::HOUR.0))
    }

    /// Returns the nanosecond count.
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Returns the interval as floating point seconds.
    pub fn as_secs_f64(self) -> f64 {
        let secs = self.0 / Self::SECOND.0;
        let nanos = self.0 % Self::SECOND.0;
        secs as f64 + nanos as f64 / 1e9
    }

    /// Returns true if this interval is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this interval is negative.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for Interval {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl From<Interval> for i64 {
    fn from(d: Interval) -> Self {
        d.0
    }
}

impl From<Interval> for TimeDelta {
    fn from(d: Interval) -> Self {
        TimeDelta::nanoseconds(d.0)
    }
}

impl TryFrom<TimeDelta> for Interval {
    type Error = Error;

    fn try_from(delta: TimeDelta) -> Result<Self, Self::Error> {
        delta
            .num_nanoseconds()
            .map(Self)
            .ok_or(Error::OutOfRange("Interval"))
    }
}

impl TryFrom<StdDuration> for Interval {
    type Error = Error;

    fn try_from(d: StdDuration) -> Result<Self, Self::Error> {
        i64::try_from(d.as_nanos())
            .map(Self)
            .map_err(|_| Error::OutOfRange("Interval"))
    }
}

impl TryFrom<Interval> for StdDuration {
    type Error = Error;

    /// Fails for negative intervals, which `std::time::Duration` cannot hold.
    fn try_from(d: Interval) -> Result<Self, Self::Error> {
        u64::try_from(d.0)
            .map(StdDuration::from_nanos)
            .map_err(|_| Error::OutOfRange("std::time::Duration"))
    }
}
