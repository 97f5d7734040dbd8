//! Unified application error type.
//! Every fallible path (store, config, cli, utils) returns AppError so that
//! main.rs has a single place where errors become an exit status.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Couldn't determine the home directory of the current user")]
    HomeDir,

    // ---------------------------
    // Stored data
    // ---------------------------
    #[error("Malformed timesheet data: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid duration: {0} (expected e.g. 8h, 7h30m, 450m)")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Command line
    // ---------------------------
    #[error("{0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;
