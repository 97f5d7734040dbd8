use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for worktime
#[derive(Parser, Debug)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out from the terminal and see how much you worked",
    long_about = None
)]
pub struct Cli {
    /// Override the timesheet file (default: ~/.timesheet)
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Override the configuration file (default: ~/.worktime/worktime.conf)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every entry in the timesheet
    #[command(name = "l", visible_alias = "list")]
    List,

    /// List today's entries
    #[command(name = "t", visible_alias = "today")]
    Today,

    /// Record the start of work
    #[command(name = "s", visible_alias = "start")]
    Start {
        /// Time of day (HH:MM) instead of now
        time: Option<String>,
    },

    /// Record the end of work
    #[command(name = "e", visible_alias = "end")]
    End {
        /// Time of day (HH:MM) instead of now
        time: Option<String>,
    },

    /// Show today's worked time and when to clock off
    #[command(name = "c", visible_alias = "current")]
    Current,

    /// Show worked time per day and the overall balance
    #[command(name = "a", visible_alias = "all")]
    All,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
