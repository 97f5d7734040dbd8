//! Persistence of the event log.
//!
//! The engine never touches storage; commands load the whole log through an
//! [`EventStore`], work on it in memory and hand the full list back.

pub mod json_file;

use crate::errors::AppResult;
use crate::models::event::Event;

pub use json_file::JsonFileStore;

pub trait EventStore {
    /// All events in append order. An absent store reads as empty.
    fn load(&self) -> AppResult<Vec<Event>>;

    /// Replace the stored log with `events`.
    fn save(&self, events: &[Event]) -> AppResult<()>;
}
