use crate::core::calculator::{buckets, quota, worktime};
use crate::models::day_summary::{AllSummary, DayReport, DayStatus, TodaySummary};
use crate::models::event::Event;
use chrono::{DateTime, Local, TimeDelta};

pub struct Core;

impl Core {
    /// Worked time so far today and when the quota will be reached.
    pub fn build_today_summary(
        events: &[Event],
        now: DateTime<Local>,
        daily_quota: TimeDelta,
    ) -> TodaySummary {
        let today = buckets::filter_today(events, now.date_naive());
        let t = worktime::tally(&today);
        let worked = worktime::truncate_to_minutes(t.worked(true, now));

        TodaySummary {
            worked,
            clock_off: quota::clock_off(now, worked, daily_quota),
            ongoing: t.open_since.is_some(),
            orphaned_ends: t.orphaned_ends,
        }
    }

    /// Per-day totals over the whole timesheet. Days whose last session was
    /// never closed are reported but left out of expected/actual.
    pub fn build_all_summary(events: &[Event], daily_quota: TimeDelta) -> AllSummary {
        let mut days = Vec::new();
        let mut actual = TimeDelta::zero();
        let mut complete_days = 0;
        let mut orphaned_ends = 0;

        for (date, day) in buckets::day_buckets(events) {
            let t = worktime::tally(&day);
            orphaned_ends += t.orphaned_ends;
            let status = match t.status() {
                DayStatus::Complete(wt) => {
                    actual += wt;
                    complete_days += 1;
                    DayStatus::Complete(worktime::truncate_to_minutes(wt))
                }
                DayStatus::Incomplete => DayStatus::Incomplete,
            };
            days.push(DayReport { date, status });
        }

        let expected = quota::expected_for(complete_days, daily_quota);

        AllSummary {
            days,
            complete_days,
            expected,
            actual: worktime::truncate_to_minutes(actual),
            diff: worktime::truncate_to_minutes(quota::diff(actual, expected)),
            orphaned_ends,
        }
    }
}
