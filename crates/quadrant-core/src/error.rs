//! Error types for the Political Quadrant workspace.

use thiserror::Error;

/// A shared error type for every layer of the survey system.
///
/// Validation problems with respondent input are *not* represented here; they
/// live in [`crate::survey::ValidationError`] and never leave the state machine
/// as faults.
#[derive(Error, Debug, Clone)]
pub enum QuadrantError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Local storage error (key-value store, cache document)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote record store or chat API failure
    #[error("Remote error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Remote {
        status: Option<u16>,
        message: String,
    },

    /// A remote call did not finish within its deadline
    #[error("Timed out after {millis} ms: {operation}")]
    Timeout { operation: String, millis: u64 },

    /// The device already submitted the maximum number of results
    #[error("Save limit reached ({limit} results per device)")]
    SaveLimitReached { limit: u32 },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuadrantError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Remote error
    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// Creates a Timeout error
    pub fn timeout(operation: impl Into<String>, millis: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            millis,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error came from talking to a remote service.
    ///
    /// Timeouts count as remote failures: the persistence layer treats both
    /// the same way and falls back to the local cache.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::Timeout { .. })
    }

    /// Check if this is the per-device save limit
    pub fn is_save_limit(&self) -> bool {
        matches!(self, Self::SaveLimitReached { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for QuadrantError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for QuadrantError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for QuadrantError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for QuadrantError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for QuadrantError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, QuadrantError>`.
pub type Result<T> = std::result::Result<T, QuadrantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_display_with_and_without_status() {
        let with_status = QuadrantError::remote(Some(401), "bad token");
        assert_eq!(with_status.to_string(), "Remote error (HTTP 401): bad token");

        let without_status = QuadrantError::remote(None, "connection refused");
        assert_eq!(without_status.to_string(), "Remote error: connection refused");
    }

    #[test]
    fn test_timeout_counts_as_remote() {
        assert!(QuadrantError::timeout("create record", 10_000).is_remote());
        assert!(!QuadrantError::storage("disk full").is_remote());
        assert!(QuadrantError::SaveLimitReached { limit: 3 }.is_save_limit());
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: QuadrantError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        match err {
            QuadrantError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
