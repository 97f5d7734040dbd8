use crate::cli::parser::Commands;
use crate::core::calculator::buckets::filter_today;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::store::EventStore;
use crate::ui::messages::header;
use chrono::Local;

/// `l` prints the whole log, `t` only today's part of it.
pub fn handle<S: EventStore>(cmd: &Commands, store: &S) -> AppResult<()> {
    let events = store.load()?;

    match cmd {
        Commands::List => print_events(&events),
        Commands::Today => {
            header("Today:");
            print_events(&filter_today(&events, Local::now().date_naive()));
        }
        _ => {}
    }
    Ok(())
}

fn print_events(events: &[Event]) {
    for ev in events {
        println!("{}", ev);
    }
}
