// File: crates/clock-core/src/time.rs
// Summary: Time sampler; wall-clock snapshots with a last-known-good fallback.

use chrono::Timelike;

use crate::error::{ClockError, Result};

/// Hour/minute/second snapshot taken for exactly one draw pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeSample {
    hour24: u8,
    minute: u8,
    second: u8,
}

impl TimeSample {
    pub const MIDNIGHT: TimeSample = TimeSample { hour24: 0, minute: 0, second: 0 };

    pub fn new(hour24: u32, minute: u32, second: u32) -> Result<Self> {
        if hour24 > 23 {
            return Err(ClockError::OutOfRange { field: "hour", value: hour24 });
        }
        if minute > 59 {
            return Err(ClockError::OutOfRange { field: "minute", value: minute });
        }
        if second > 59 {
            return Err(ClockError::OutOfRange { field: "second", value: second });
        }
        Ok(Self { hour24: hour24 as u8, minute: minute as u8, second: second as u8 })
    }

    /// Leap seconds (reported by chrono as second 59 with an overflowing fraction) stay at 59.
    pub fn from_time<T: Timelike>(t: &T) -> Result<Self> {
        Self::new(t.hour(), t.minute(), t.second())
    }

    pub const fn hour24(&self) -> u32 { self.hour24 as u32 }
    pub const fn minute(&self) -> u32 { self.minute as u32 }
    pub const fn second(&self) -> u32 { self.second as u32 }
}

impl std::fmt::Display for TimeSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour24, self.minute, self.second)
    }
}

pub trait TimeSource {
    fn now(&self) -> Result<TimeSample>;
}

/// Local wall-clock time of the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> Result<TimeSample> {
        TimeSample::from_time(&chrono::Local::now())
    }
}

/// Always reports the same time; used by headless snapshots and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedTime(pub TimeSample);

impl TimeSource for FixedTime {
    fn now(&self) -> Result<TimeSample> {
        Ok(self.0)
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> Result<TimeSample>,
{
    fn now(&self) -> Result<TimeSample> {
        self()
    }
}

/// Queries its source on every call. A failed read yields the last good sample,
/// or midnight before any read has succeeded, so the draw pass can still complete.
pub struct TimeSampler<S> {
    source: S,
    last_good: Option<TimeSample>,
}

impl<S: TimeSource> TimeSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source, last_good: None }
    }

    pub fn sample(&mut self) -> TimeSample {
        match self.source.now() {
            Ok(sample) => {
                self.last_good = Some(sample);
                sample
            }
            Err(e) => {
                let fallback = self.last_good.unwrap_or(TimeSample::MIDNIGHT);
                log::warn!("clock read failed ({e}); drawing {fallback}");
                fallback
            }
        }
    }

    pub fn last_good(&self) -> Option<TimeSample> { self.last_good }
}
