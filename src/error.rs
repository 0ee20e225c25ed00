//! Unified error types for laptop-rank.
//!
//! The engine distinguishes three failure classes: malformed preferences
//! (fail fast, never silently default), unscoreable listings reaching the
//! scorer (ingestion contract violation), and bad engine configuration.
//! Extractor ambiguity and empty result sets are *not* errors; the former
//! resolves to documented defaults, the latter is returned as data.

use thiserror::Error;

/// Main error type for laptop-rank operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// Malformed per-request preferences (missing/inverted budget bounds,
    /// degenerate windows). Silent defaults would corrupt ranking semantics,
    /// so these surface to the caller.
    #[error("invalid preferences: {0}")]
    Preferences(String),

    /// A listing without a usable name or a valid price reached the scorer.
    /// Rows like this are the ingestion collaborator's job to exclude; the
    /// scorer rejects rather than guesses.
    #[error("listing cannot be scored: {0}")]
    UnscoreableListing(String),

    /// Engine configuration errors (bad file, out-of-range thresholds).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Create a preferences error.
    pub fn preferences(message: impl Into<String>) -> Self {
        Self::Preferences(message.into())
    }

    /// Create an unscoreable-listing error.
    pub fn unscoreable(message: impl Into<String>) -> Self {
        Self::UnscoreableListing(message.into())
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_yaml::Error> for EngineError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(format!("YAML deserialization: {err}"))
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON deserialization: {err}"))
    }
}

/// Convenient Result type for laptop-rank operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::preferences("min_budget (60000) exceeds max_budget (30000)");
        assert!(err.to_string().contains("invalid preferences"));
        assert!(err.to_string().contains("60000"));

        let err = EngineError::unscoreable("empty name");
        assert!(err.to_string().contains("cannot be scored"));
    }

    #[test]
    fn test_yaml_error_maps_to_config() {
        let bad: std::result::Result<u32, _> = serde_yaml::from_str("[not, a, number]");
        let err: EngineError = bad.unwrap_err().into();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
