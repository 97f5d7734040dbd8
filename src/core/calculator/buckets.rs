//! Grouping of events by local calendar day.

use crate::models::event::Event;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Group events by the local date they fall on. Iterating the map yields
/// the days in ascending order; each bucket keeps the original order.
pub fn day_buckets(events: &[Event]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut days: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for ev in events {
        days.entry(ev.date()).or_default().push(*ev);
    }
    days
}

/// Events whose local date is `today`, in their original order.
pub fn filter_today(events: &[Event], today: NaiveDate) -> Vec<Event> {
    events.iter().filter(|e| e.date() == today).copied().collect()
}
