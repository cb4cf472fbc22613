use serde::{Deserialize, Serialize};

/// Network-level failure classes.
///
/// Only these three are distinguished; everything the transport cannot place
/// more precisely ends up in [`NetworkErrorKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkErrorKind {
    /// The host could not be reached (DNS failure, connection refused, offline).
    NoConnection,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// Any other transport failure.
    Unknown,
}

impl std::fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConnection => write!(f, "no connection"),
            Self::Timeout => write!(f, "request timeout"),
            Self::Unknown => write!(f, "unknown network error"),
        }
    }
}

/// Unified error type for all GitHub API operations.
///
/// Consumers only need to tell [`Network`](Self::Network) apart from the rest;
/// the other variants carry details for logging and for the message shown to
/// the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A transport-level error occurred before a response was received.
    Network {
        /// Failure class.
        kind: NetworkErrorKind,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status code.
    Server {
        /// HTTP status code, if a response was received.
        status: Option<u16>,
        /// Machine-readable error key from the response body, if any.
        key: Option<String>,
        /// Human-readable message from the response body, if any.
        message: Option<String>,
    },

    /// The response body could not be decoded into the expected shape.
    Decoding {
        /// Details about the decode failure.
        detail: String,
    },

    /// Anything that fits none of the above (e.g. the HTTP client could not be built).
    Unknown {
        /// Error details.
        detail: String,
    },
}

impl ApiError {
    /// Whether this error belongs to the network class.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// The network failure class, if this is a network error.
    #[must_use]
    pub fn network_kind(&self) -> Option<NetworkErrorKind> {
        match self {
            Self::Network { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// HTTP status code carried by a [`Server`](Self::Server) error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => *status,
            _ => None,
        }
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Server {
                status: Some(status),
                ..
            } => (400..500).contains(status),
            Self::Network {
                kind: NetworkErrorKind::NoConnection | NetworkErrorKind::Timeout,
                ..
            } => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { kind, detail } => write!(f, "Network error ({kind}): {detail}"),
            Self::Server {
                status, message, ..
            } => match (status, message) {
                (Some(code), Some(msg)) => write!(f, "Server error (HTTP {code}): {msg}"),
                (Some(code), None) => write!(f, "Server error (HTTP {code})"),
                (None, Some(msg)) => write!(f, "Server error: {msg}"),
                (None, None) => write!(f, "Server error"),
            },
            Self::Decoding { detail } => write!(f, "Decoding error: {detail}"),
            Self::Unknown { detail } => write!(f, "Unknown error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
