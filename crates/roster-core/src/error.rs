//! Error types for the roster application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Alert text shown when an employee is submitted without its required fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and Department are required!";

/// A shared error type for the entire roster application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RosterError {
    /// A required employee field was empty at the add boundary.
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    Validation { missing: Vec<String> },

    /// The persisted roster snapshot does not have the expected shape.
    #[error("Corrupt roster snapshot in slot '{slot}': {reason}")]
    CorruptSnapshot { slot: String, reason: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage backend error (slot store, locking)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RosterError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error listing the empty required fields
    pub fn validation<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a CorruptSnapshot error
    pub fn corrupt_snapshot(slot: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptSnapshot {
            slot: slot.into(),
            reason: reason.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if the persisted snapshot was rejected at the load boundary
    pub fn is_corrupt_snapshot(&self) -> bool {
        matches!(self, Self::CorruptSnapshot { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RosterError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for RosterError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, RosterError>`.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_alert_text() {
        let err = RosterError::validation(vec!["name"]);
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        assert!(err.is_validation());
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: RosterError = parse.unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: JSON"));
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RosterError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("NotFound"));
    }
}
