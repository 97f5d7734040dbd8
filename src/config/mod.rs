use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_duration;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_timesheet")]
    pub timesheet: String,
    #[serde(default = "default_daily_quota")]
    pub daily_quota: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_timesheet() -> String {
    "~/.timesheet".to_string()
}
fn default_daily_quota() -> String {
    "8h".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timesheet: default_timesheet(),
            daily_quota: default_daily_quota(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Directory holding the configuration file (`~/.worktime`).
    pub fn config_dir() -> AppResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".worktime"))
            .ok_or(AppError::HomeDir)
    }

    /// Full path of the default config file.
    pub fn config_file() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join("worktime.conf"))
    }

    /// Load configuration from `path` (or the default location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        tracing::debug!(?cfg, path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        self.daily_quota()?;
        if self.timesheet.trim().is_empty() {
            return Err(AppError::Config("timesheet path must not be empty".into()));
        }
        Ok(())
    }

    /// Resolved location of the event file.
    pub fn timesheet_path(&self) -> AppResult<PathBuf> {
        expand_tilde(&self.timesheet)
    }

    /// Expected worked time per day, at most 24h.
    pub fn daily_quota(&self) -> AppResult<TimeDelta> {
        let quota = parse_duration(&self.daily_quota)?;
        if quota > TimeDelta::hours(24) {
            return Err(AppError::InvalidDuration(format!(
                "{} exceeds 24h",
                self.daily_quota
            )));
        }
        Ok(quota)
    }
}
