#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use worktime::models::event::Event;
use worktime::models::event_type::EventType;
use worktime::store::{EventStore, JsonFileStore};

pub fn wt() -> Command {
    cargo_bin_cmd!("worktime")
}

/// Unique timesheet path inside the system temp dir, removed if present.
pub fn setup_timesheet(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktime.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the built-in defaults apply.
pub fn setup_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktime.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `worktime --file <ts> --config <conf> <args...>` with a clean log env.
pub fn wt_with(ts: &str, conf: &str, args: &[&str]) -> Command {
    let mut cmd = wt();
    cmd.env_remove("WORKTIME_LOG")
        .args(["--file", ts, "--config", conf])
        .args(args);
    cmd
}

pub fn ev(date: &str, time: &str, kind: EventType) -> Event {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date");
    let t = NaiveTime::parse_from_str(time, "%H:%M").expect("time");
    Event::at(d, t, kind).expect("local time")
}

/// Write a timesheet through the library store.
pub fn write_events(path: &str, events: &[Event]) {
    JsonFileStore::new(path).save(events).expect("save timesheet");
}

pub fn read_events(path: &str) -> Vec<Event> {
    JsonFileStore::new(path).load().expect("load timesheet")
}
