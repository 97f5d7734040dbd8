use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_summary::{AllSummary, DayStatus};
use crate::store::EventStore;
use crate::ui::messages::warning;
use crate::utils::colors::{dim, paint_diff};
use crate::utils::formatting::separator;
use crate::utils::time::format_duration;

/// `a`: per-day worked time, then expected / actual / diff over complete days.
pub fn handle<S: EventStore>(store: &S, cfg: &Config) -> AppResult<()> {
    let events = store.load()?;
    let summary = Core::build_all_summary(&events, cfg.daily_quota()?);
    print_summary(&summary, &cfg.separator_char);
    Ok(())
}

fn print_summary(summary: &AllSummary, sep: &str) {
    for day in &summary.days {
        match day.status {
            DayStatus::Complete(wt) => println!("{}: {}", day.date, format_duration(wt, false)),
            DayStatus::Incomplete => println!("{}: {}", day.date, dim("No end entry")),
        }
    }

    if !summary.days.is_empty() {
        println!("{}", separator(sep, 24));
    }

    let diff = format_duration(summary.diff, true);
    println!("Expected: {}", format_duration(summary.expected, false));
    println!("Actual: {}", format_duration(summary.actual, false));
    println!("Diff: {}", paint_diff(summary.diff.num_minutes(), &diff));

    if summary.orphaned_ends > 0 {
        warning(format!(
            "{} end entries without a matching start were skipped",
            summary.orphaned_ends
        ));
    }
}
