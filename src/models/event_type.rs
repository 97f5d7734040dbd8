use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a timesheet entry. Stored as `"s"` / `"e"`; any other tag is
/// rejected when the file is parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    #[serde(rename = "s")]
    Start,
    #[serde(rename = "e")]
    End,
}

impl EventType {
    /// Short code as written to disk and shown by `list`.
    pub fn code(&self) -> &'static str {
        match self {
            EventType::Start => "s",
            EventType::End => "e",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Start => "start",
            EventType::End => "end",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
