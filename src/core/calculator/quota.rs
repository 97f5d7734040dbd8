use chrono::{DateTime, Local, TimeDelta};

/// Expected = quota for every complete day.
pub fn expected_for(complete_days: i32, quota: TimeDelta) -> TimeDelta {
    quota * complete_days
}

/// Positive when more was worked than expected.
pub fn diff(actual: TimeDelta, expected: TimeDelta) -> TimeDelta {
    actual - expected
}

/// When the quota is reached if work continues from `now`. Already past the
/// quota means a clock-off time in the past.
pub fn clock_off(now: DateTime<Local>, worked: TimeDelta, quota: TimeDelta) -> DateTime<Local> {
    now + (quota - worked)
}
