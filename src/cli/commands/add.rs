use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::event_type::EventType;
use crate::store::EventStore;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_time;
use chrono::Local;

/// Record a start (`s`) or end (`e`) entry.
pub fn handle<S: EventStore>(cmd: &Commands, store: &S) -> AppResult<()> {
    let (kind, time) = match cmd {
        Commands::Start { time } => (EventType::Start, time),
        Commands::End { time } => (EventType::End, time),
        _ => return Ok(()),
    };

    // Parse before touching the file so a typo never rewrites it.
    let time = parse_optional_time(time.as_ref())?;
    let ev = AddLogic::apply(store, kind, time, Local::now())?;

    success(format!("{} recorded at {}", capitalize(ev.kind.label()), ev.timestamp_str()));
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
