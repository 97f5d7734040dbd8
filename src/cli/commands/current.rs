use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{info, warning};
use crate::utils::time::format_duration;
use chrono::Local;

/// `c`: worked time so far today and projected clock-off.
pub fn handle<S: EventStore>(store: &S, cfg: &Config) -> AppResult<()> {
    let events = store.load()?;
    let quota = cfg.daily_quota()?;
    let summary = Core::build_today_summary(&events, Local::now(), quota);

    if summary.worked.is_zero() && !summary.ongoing {
        info("No work recorded today");
    }

    let suffix = if summary.ongoing { " (running)" } else { "" };
    println!("Working for: {}{}", format_duration(summary.worked, false), suffix);
    println!("Clock off at: {}", summary.clock_off.format("%H:%M"));

    if summary.orphaned_ends > 0 {
        warning(format!(
            "{} end entries without a matching start were skipped",
            summary.orphaned_ends
        ));
    }
    Ok(())
}
