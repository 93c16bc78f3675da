//! Time keeping module for PineTime

use chrono::{DateTime, Duration, NaiveDateTime};
use embassy_time::Instant;

/// Known wall-clock time at a known uptime
pub struct TimeReference {
    /// Local clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Reference from a UTC epoch taken now, shifted into local time
    pub fn from_epoch(utc_secs: i64, offset_secs: i32) -> Self {
        let time = DateTime::from_timestamp(utc_secs + offset_secs as i64, 0)
            .map(|t| t.naive_utc())
            .unwrap_or(NaiveDateTime::UNIX_EPOCH);

        Self {
            time,
            instant: Instant::now(),
        }
    }
}

/// Local wall clock derived from the uptime counter
pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Current local time
    pub fn local_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference.time + Duration::microseconds(elapsed.as_micros() as i64)
    }
}
