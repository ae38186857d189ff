use crate::error::{Result, UserlistError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "USERLIST_HOME";

/// Configuration for userlist, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserlistConfig {
    /// Pretty-print the collection when writing it back
    pub pretty: bool,
}

impl UserlistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(UserlistError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| UserlistError::Config(format!("{}: {}", config_path.display(), e)))
    }
}

/// `$USERLIST_HOME` if set, otherwise the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "userlist", "userlist").map(|dirs| dirs.config_dir().to_path_buf())
}
