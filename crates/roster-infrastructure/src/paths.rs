//! Unified path management for roster files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/roster/            # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── roster.log.YYYY-MM-DD
//!
//! ~/.local/share/roster/       # Data directory
//! └── local_storage.json       # Key-value slots (the roster lives under "employees")
//! ```
//!
//! With an explicit root every file lives directly under that root.

use std::path::PathBuf;

const APP_DIR: &str = "roster";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_FILE: &str = "local_storage.json";
const LOGS_DIR: &str = "logs";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config/data directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for roster_core::RosterError {
    fn from(err: PathError) -> Self {
        roster_core::RosterError::config(err.to_string())
    }
}

/// Resolves where configuration, storage and logs are kept.
#[derive(Debug, Clone, Default)]
pub struct RosterPaths {
    root: Option<PathBuf>,
}

impl RosterPaths {
    /// Creates a resolver. `None` uses the platform directories.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Returns the configuration directory (e.g., `~/.config/roster/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the data directory (e.g., `~/.local/share/roster/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the key-value store file holding every slot.
    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(STORAGE_FILE))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(LOGS_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir() {
        let config_dir = RosterPaths::new(None).config_dir().unwrap();
        assert!(config_dir.ends_with("roster"));
    }

    #[test]
    fn test_config_file_under_config_dir() {
        let paths = RosterPaths::new(None);
        let config_file = paths.config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(paths.config_dir().unwrap()));
    }

    #[test]
    fn test_storage_file_under_data_dir() {
        let paths = RosterPaths::new(None);
        let storage_file = paths.storage_file().unwrap();
        assert!(storage_file.ends_with("local_storage.json"));
        assert!(storage_file.starts_with(paths.data_dir().unwrap()));
    }

    #[test]
    fn test_root_override() {
        let root = PathBuf::from("/tmp/roster-test");
        let paths = RosterPaths::new(Some(root.clone()));
        assert_eq!(paths.config_file().unwrap(), root.join("config.toml"));
        assert_eq!(paths.storage_file().unwrap(), root.join("local_storage.json"));
        assert_eq!(paths.logs_dir().unwrap(), root.join("logs"));
    }
}
