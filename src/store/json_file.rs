//! Event log kept as a pretty-printed JSON array in a single file.

use super::EventStore;
use crate::errors::AppResult;
use crate::models::event::Event;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with an empty array if it does not exist yet.
    fn ensure_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        tracing::debug!(path = %self.path.display(), "creating empty timesheet");
        write_private(&self.path, b"[]")
    }
}

impl EventStore for JsonFileStore {
    fn load(&self) -> AppResult<Vec<Event>> {
        self.ensure_exists()?;
        let data = fs::read(&self.path)?;
        let events: Vec<Event> = serde_json::from_slice(&data)?;
        tracing::debug!(count = events.len(), path = %self.path.display(), "loaded timesheet");
        Ok(events)
    }

    fn save(&self, events: &[Event]) -> AppResult<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        events.serialize(&mut ser)?;
        write_private(&self.path, &buf)?;
        tracing::debug!(count = events.len(), path = %self.path.display(), "saved timesheet");
        Ok(())
    }
}

/// Write `data` to `path`, readable only by the owner on Unix.
fn write_private(path: &Path, data: &[u8]) -> AppResult<()> {
    let mut opts = fs::OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts.open(path)?;
    file.write_all(data)?;
    Ok(())
}
