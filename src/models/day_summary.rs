use chrono::{DateTime, Local, NaiveDate, TimeDelta};

/// Outcome of evaluating a finished (not ongoing) day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Every session was closed; total worked time.
    Complete(TimeDelta),
    /// The last session of the day was never closed.
    Incomplete,
}

/// What `c` reports for today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodaySummary {
    pub worked: TimeDelta,
    pub clock_off: DateTime<Local>,
    pub ongoing: bool,
    pub orphaned_ends: usize,
}

/// One row of the `a` report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Aggregate over every day in the timesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllSummary {
    pub days: Vec<DayReport>,
    pub complete_days: i32,
    pub expected: TimeDelta,
    pub actual: TimeDelta,
    pub diff: TimeDelta,
    pub orphaned_ends: usize,
}
