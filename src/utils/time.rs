//! Time utilities: parsing HH:MM and quota durations, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, TimeDelta};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m(?:in)?)?\s*$").unwrap()
});

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Parse a quota such as `8h`, `7h30m`, `450m` or `7h 30min`.
pub fn parse_duration(s: &str) -> AppResult<TimeDelta> {
    let invalid = || AppError::InvalidDuration(s.to_string());
    let caps = DURATION_RE.captures(s).ok_or_else(invalid)?;

    let hours = caps.get(1).map(|m| m.as_str().parse::<i64>());
    let minutes = caps.get(2).map(|m| m.as_str().parse::<i64>());
    if hours.is_none() && minutes.is_none() {
        return Err(invalid());
    }

    let hours = hours.transpose().map_err(|_| invalid())?.unwrap_or(0);
    let minutes = minutes.transpose().map_err(|_| invalid())?.unwrap_or(0);
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .and_then(TimeDelta::try_minutes)
        .ok_or_else(invalid)
}

/// `07h 05m`, with a leading sign when `want_sign` is set.
pub fn format_duration(d: TimeDelta, want_sign: bool) -> String {
    crate::utils::formatting::mins2readable(d.num_minutes(), want_sign, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm() {
        assert_eq!(parse_time("09:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_time("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert!(parse_time("24:00").is_none());
        assert!(parse_time("9h").is_none());
        assert!(parse_time("").is_none());
    }

    #[test]
    fn optional_time_reports_bad_input() {
        assert_eq!(parse_optional_time(None).unwrap(), None);
        let bad = "noon".to_string();
        assert!(matches!(
            parse_optional_time(Some(&bad)),
            Err(AppError::InvalidTime(s)) if s == "noon"
        ));
    }

    #[test]
    fn parses_quota_durations() {
        assert_eq!(parse_duration("8h").unwrap(), TimeDelta::hours(8));
        assert_eq!(parse_duration("7h30m").unwrap(), TimeDelta::minutes(450));
        assert_eq!(parse_duration("7h 30min").unwrap(), TimeDelta::minutes(450));
        assert_eq!(parse_duration("450m").unwrap(), TimeDelta::minutes(450));
        assert!(parse_duration("").is_err());
        assert!(parse_duration("8").is_err());
        assert!(parse_duration("eight hours").is_err());
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(TimeDelta::minutes(425), false), "07h 05m");
        assert_eq!(format_duration(TimeDelta::minutes(-90), true), "-01h 30m");
        assert_eq!(format_duration(TimeDelta::minutes(30), true), "+00h 30m");
        assert_eq!(format_duration(TimeDelta::zero(), true), "00h 00m");
    }
}
