//! worktime library root.
//! Exposes the CLI parser, the high-level run() function and the engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use store::JsonFileStore;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, store: &JsonFileStore) -> AppResult<()> {
    match &cli.command {
        Commands::List | Commands::Today => cli::commands::list::handle(&cli.command, store),
        Commands::Start { .. } | Commands::End { .. } => {
            cli::commands::add::handle(&cli.command, store)
        }
        Commands::Current => cli::commands::current::handle(store, cfg),
        Commands::All => cli::commands::all::handle(store, cfg),
        Commands::Config { .. } => {
            let path = match &cli.config {
                Some(p) => p.clone(),
                None => Config::config_file()?,
            };
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
    }
}

/// Diagnostics go to stderr; `WORKTIME_LOG` overrides the default `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("WORKTIME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI; help and version still exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(AppError::Usage(e.render().to_string())),
    };

    init_tracing(cli.verbose);

    // load config once
    let cfg = Config::load(cli.config.as_deref())?;

    // --file wins over the configured timesheet
    let path = match &cli.file {
        Some(p) => p.clone(),
        None => cfg.timesheet_path()?,
    };
    let store = JsonFileStore::new(path);
    tracing::debug!(path = %store.path().display(), "using timesheet");

    dispatch(&cli, &cfg, &store)
}
