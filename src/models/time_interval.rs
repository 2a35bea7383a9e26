use std::fmt;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Half-open time interval, includes start but not end
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeInterval {
        TimeInterval { start, end }
    }

    /// Returns true if the instant is on or after start and before end
    ///
    /// # Arguments
    ///
    /// * 'instant' - the instant to check
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns the one hour slot for a 1-based position counted from the interval start,
    /// or None if the slot falls outside the representable time range
    ///
    /// # Arguments
    ///
    /// * 'position' - hour offset where position 1 is the first hour of the interval
    pub fn hour_slot(&self, position: u32) -> Option<TimeInterval> {
        let start = self.start.checked_add_signed(TimeDelta::try_hours(position as i64 - 1)?)?;
        let end = start.checked_add_signed(TimeDelta::hours(1))?;
        Some(TimeInterval { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.start.format("%Y-%m-%d %H:%M"), self.end.format("%Y-%m-%d %H:%M"))
    }
}
