//! Core error types for reveal operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.
//! The only runtime failure the page can hit is a missing observation
//! capability, and callers answer that by failing open.

use thiserror::Error;

/// Core error type for folio operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Host capability errors
    #[error("viewport observation unavailable: {reason}")]
    ObserverUnavailable { reason: String },

    // Configuration errors
    #[error("invalid reveal threshold {value}: must be a finite ratio in [0, 1]")]
    InvalidThreshold { value: f64 },

    #[error("invalid {field} {value}: must be finite and non-negative")]
    InvalidDuration { field: &'static str, value: f64 },

    #[error("config parse error: {reason}")]
    ConfigParseFailed { reason: String },
}

impl Error {
    /// Create an observer-unavailable error.
    pub fn observer_unavailable(reason: impl Into<String>) -> Self {
        Self::ObserverUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            reason: reason.into(),
        }
    }

    /// True when the error means the page should degrade to always-visible.
    #[must_use]
    pub const fn is_fail_open(&self) -> bool {
        matches!(self, Self::ObserverUnavailable { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config_parse_failed(err.message())
    }
}
