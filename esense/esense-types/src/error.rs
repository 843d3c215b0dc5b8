//! Error types for electrosensing operations.

use thiserror::Error;

/// Errors that can occur in the electrosensing stack.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SenseError {
    /// Behavior code outside the implemented set {1, 2, 3, 4}.
    #[error("unknown behavior code: {0} (expected 1-4)")]
    UnknownBehavior(u8),

    /// Invalid timestep.
    #[error("invalid timestep: {0} (must be positive and finite)")]
    InvalidTimestep(f64),

    /// Invalid configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl SenseError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::InvalidTimestep(_)
        )
    }
}
