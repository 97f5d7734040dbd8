use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::store::EventStore;
use chrono::{DateTime, Local, NaiveTime};

/// High-level business logic for the `s` and `e` commands.
pub struct AddLogic;

impl AddLogic {
    /// Build the new entry: `time` on today's date with zero seconds, or
    /// `now` itself when no time was given.
    pub fn build_event(
        kind: EventType,
        time: Option<NaiveTime>,
        now: DateTime<Local>,
    ) -> AppResult<Event> {
        match time {
            Some(t) => Event::at(now.date_naive(), t, kind).ok_or_else(|| {
                AppError::InvalidTime(format!(
                    "{} does not exist today in the local timezone",
                    t.format("%H:%M")
                ))
            }),
            None => Ok(Event::now(kind, now)),
        }
    }

    /// Append a new entry to the stored log and persist the full list.
    pub fn apply<S: EventStore>(
        store: &S,
        kind: EventType,
        time: Option<NaiveTime>,
        now: DateTime<Local>,
    ) -> AppResult<Event> {
        let mut events = store.load()?;
        let ev = Self::build_event(kind, time, now)?;
        events.push(ev);
        store.save(&events)?;

        tracing::debug!(kind = ev.kind.label(), timestamp = %ev.timestamp_str(), "recorded entry");
        Ok(ev)
    }
}
