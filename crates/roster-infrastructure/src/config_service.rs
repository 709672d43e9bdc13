//! Configuration file service.
//!
//! Loads [`RosterConfig`] from `config.toml`, writing the defaults out when
//! the file does not exist yet.

use std::fs;
use std::path::{Path, PathBuf};

use roster_core::config::RosterConfig;
use roster_core::error::{Result, RosterError};

use crate::paths::RosterPaths;

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses the config file location resolved by `paths`.
    pub fn from_paths(paths: &RosterPaths) -> Result<Self> {
        Ok(Self::new(paths.config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the configuration, creating the file with defaults if missing.
    pub fn load(&self) -> Result<RosterConfig> {
        if !self.path.exists() {
            let config = RosterConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            RosterError::config(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    pub fn save(&self, config: &RosterConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));

        let config = service.load().unwrap();

        assert_eq!(config, RosterConfig::default());
        assert!(service.path().exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_reads_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[storage]\nslot_key = \"staff\"\n\n[logging]\nfile = false\n").unwrap();

        let config = ConfigService::new(path).load().unwrap();

        assert_eq!(config.storage.slot_key, "staff");
        assert!(!config.logging.file);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[storage\n").unwrap();

        let err = ConfigService::new(path).load().unwrap_err();
        assert!(err.is_config());
    }
}
