//! Path utilities: expand `~` against the current user's home directory.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> AppResult<PathBuf> {
    if path == "~" {
        return dirs::home_dir().ok_or(AppError::HomeDir);
    }
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(AppError::HomeDir)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(
            expand_tilde("/var/tmp/ts.json").unwrap(),
            PathBuf::from("/var/tmp/ts.json")
        );
        assert_eq!(expand_tilde("rel/ts").unwrap(), PathBuf::from("rel/ts"));
    }

    #[test]
    fn tilde_is_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/.timesheet").unwrap(), home.join(".timesheet"));
            assert_eq!(expand_tilde("~").unwrap(), home);
        }
    }
}
