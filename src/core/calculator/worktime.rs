//! Pairing of start/end entries into worked time.

use crate::models::day_summary::DayStatus;
use crate::models::event::Event;
use crate::models::event_type::EventType;
use chrono::{DateTime, Local, TimeDelta};

/// Result of walking a sequence of events once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Sum of all closed sessions.
    pub closed: TimeDelta,
    /// Start of the session still open after the last event, if any.
    pub open_since: Option<DateTime<Local>>,
    /// End entries seen while not working.
    pub orphaned_ends: usize,
}

/// Walk `events` in order, pairing each start with the next end.
///
/// A start while already working is ignored (the first start wins), an end
/// while not working is skipped with a warning.
pub fn tally(events: &[Event]) -> Tally {
    let mut open_since: Option<DateTime<Local>> = None;
    let mut closed = TimeDelta::zero();
    let mut orphaned_ends = 0;

    for ev in events {
        match ev.kind {
            EventType::Start => {
                if open_since.is_none() {
                    open_since = Some(ev.timestamp);
                }
            }
            EventType::End => match open_since.take() {
                Some(start) => closed += ev.timestamp - start,
                None => {
                    tracing::warn!(timestamp = %ev.timestamp_str(), "Ignoring invalid end entry");
                    orphaned_ends += 1;
                }
            },
        }
    }

    Tally {
        closed,
        open_since,
        orphaned_ends,
    }
}

impl Tally {
    /// Worked time. When a session is left open, an ongoing day counts it up
    /// to `now`; any other day yields zero for the whole sequence.
    pub fn worked(&self, is_ongoing_day: bool, now: DateTime<Local>) -> TimeDelta {
        match self.open_since {
            None => self.closed,
            Some(start) if is_ongoing_day => self.closed + (now - start),
            Some(_) => TimeDelta::zero(),
        }
    }

    /// Status of a past day: an open session makes it incomplete.
    pub fn status(&self) -> DayStatus {
        match self.open_since {
            None => DayStatus::Complete(self.closed),
            Some(_) => DayStatus::Incomplete,
        }
    }
}

/// Worked time for `events`, see [`Tally::worked`].
pub fn compute_worktime(events: &[Event], is_ongoing_day: bool, now: DateTime<Local>) -> TimeDelta {
    tally(events).worked(is_ongoing_day, now)
}

/// Evaluate a past day, telling a day with an open session apart from one
/// where nothing was worked.
pub fn day_status(events: &[Event]) -> DayStatus {
    tally(events).status()
}

/// Drop the sub-minute part, rounding toward zero.
pub fn truncate_to_minutes(d: TimeDelta) -> TimeDelta {
    TimeDelta::minutes(d.num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(d: u32, h: u32, m: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 1, d)
                    .unwrap()
                    .and_hms_opt(h, m, 0)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
    }

    fn start(h: u32, m: u32) -> Event {
        Event::new(at(1, h, m), EventType::Start)
    }

    fn end(h: u32, m: u32) -> Event {
        Event::new(at(1, h, m), EventType::End)
    }

    #[test]
    fn two_sessions_sum_up() {
        let events = [start(9, 0), end(12, 0), start(13, 0), end(17, 0)];
        let wt = compute_worktime(&events, false, at(1, 23, 0));
        assert_eq!(wt, TimeDelta::hours(7));
    }

    #[test]
    fn orphaned_end_is_skipped() {
        let events = [end(8, 0), start(9, 0), end(10, 0), end(11, 0)];
        let t = tally(&events);
        assert_eq!(t.closed, TimeDelta::hours(1));
        assert_eq!(t.orphaned_ends, 2);
        assert_eq!(compute_worktime(&events, false, at(1, 23, 0)), TimeDelta::hours(1));
    }

    #[test]
    fn duplicate_start_keeps_first() {
        let events = [start(9, 0), start(10, 0), end(12, 0)];
        assert_eq!(
            compute_worktime(&events, false, at(1, 23, 0)),
            TimeDelta::hours(3)
        );
    }

    #[test]
    fn open_session_counts_until_now_on_ongoing_day() {
        let events = [start(9, 0)];
        let wt = compute_worktime(&events, true, at(1, 9, 30));
        assert_eq!(wt, TimeDelta::minutes(30));
    }

    #[test]
    fn open_session_adds_to_closed_ones_on_ongoing_day() {
        let events = [start(8, 0), end(12, 0), start(13, 0)];
        let wt = compute_worktime(&events, true, at(1, 14, 15));
        assert_eq!(wt, TimeDelta::minutes(5 * 60 + 15));
    }

    #[test]
    fn open_session_zeroes_past_day() {
        let events = [start(8, 0), end(12, 0), start(13, 0)];
        assert_eq!(
            compute_worktime(&events, false, at(2, 9, 0)),
            TimeDelta::zero()
        );
        assert_eq!(day_status(&events), DayStatus::Incomplete);
    }

    #[test]
    fn day_status_distinguishes_idle_day() {
        assert_eq!(day_status(&[end(9, 0)]), DayStatus::Complete(TimeDelta::zero()));
        assert_eq!(
            day_status(&[start(9, 0), end(9, 45)]),
            DayStatus::Complete(TimeDelta::minutes(45))
        );
    }

    #[test]
    fn empty_sequence_is_zero() {
        assert_eq!(compute_worktime(&[], true, at(1, 12, 0)), TimeDelta::zero());
        assert_eq!(day_status(&[]), DayStatus::Complete(TimeDelta::zero()));
    }

    #[test]
    fn truncation_drops_seconds_toward_zero() {
        let d = TimeDelta::seconds(7 * 60 + 59);
        assert_eq!(truncate_to_minutes(d), TimeDelta::minutes(7));
        assert_eq!(truncate_to_minutes(-d), TimeDelta::minutes(-7));
    }
}
