//! Application configuration model.
//!
//! Persisted as TOML; every field has a default so a partial or missing
//! file still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key of the slot that holds the serialized roster.
pub const DEFAULT_SLOT_KEY: &str = "employees";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LogSettings,
}

/// Where the roster snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Slot key inside the key-value store.
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
    /// Overrides the key-value store file; the data directory is used otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            file: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to a daily file in the logs directory instead of stderr.
    #[serde(default = "default_log_to_file")]
    pub file: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_to_file(),
        }
    }
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}
