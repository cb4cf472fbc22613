//! Unified error type definition

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export library error type
pub use gitadmin_provider::{ApiError, NetworkErrorKind};

/// Which alert path an error is surfaced through.
///
/// Network-class errors get the dedicated connection alert; every other error
/// goes through the common alert. Both offer the same retry/cancel choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "kind", rename_all = "snake_case")]
pub enum AlertRoute {
    Connection(NetworkErrorKind),
    Common,
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Deep link could not be parsed or is missing required parts
    #[error("Invalid deep link: {0}")]
    InvalidDeeplink(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// API error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Alert path for this error. Only the network class is told apart.
    #[must_use]
    pub fn alert_route(&self) -> AlertRoute {
        match self {
            Self::Api(ApiError::Network { kind, .. }) => AlertRoute::Connection(*kind),
            _ => AlertRoute::Common,
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UserNotFound(_) | Self::InvalidDeeplink(_) | Self::ValidationError(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::ConfigError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
