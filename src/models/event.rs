use super::event_type::EventType;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line of the timesheet: a point in time and whether work started or
/// stopped there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub timestamp: DateTime<Local>, // ⇔ "timestamp" (RFC 3339)
    #[serde(rename = "type")]
    pub kind: EventType, // ⇔ "type" ('s' | 'e')
}

impl Event {
    pub fn new(timestamp: DateTime<Local>, kind: EventType) -> Self {
        Self { timestamp, kind }
    }

    /// Event stamped at `now`, truncated to whole seconds so that it
    /// survives a trip through the file unchanged.
    pub fn now(kind: EventType, now: DateTime<Local>) -> Self {
        let ts = now.with_nanosecond(0).unwrap_or(now);
        Self::new(ts, kind)
    }

    /// Event on `date` at the given wall-clock time, seconds zeroed.
    ///
    /// Returns `None` when the local time does not exist on that date
    /// (DST gap). An ambiguous time resolves to the earlier instant.
    pub fn at(date: NaiveDate, time: NaiveTime, kind: EventType) -> Option<Self> {
        let time = time.with_second(0)?;
        let ts = Local.from_local_datetime(&date.and_time(time)).earliest()?;
        Some(Self::new(ts, kind))
    }

    /// Local calendar date the event falls on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.timestamp_str(), self.kind)
    }
}
