use serde::{Deserialize, Serialize};

use crate::error::AlertRoute;

/// A failure presented to the user with a retry/cancel choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub route: AlertRoute,
    pub title: String,
    pub message: String,
}

/// The two answers an alert accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertAction {
    Retry,
    Cancel,
}

impl std::str::FromStr for AlertAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "retry" => Ok(Self::Retry),
            "c" | "cancel" => Ok(Self::Cancel),
            other => Err(format!("unknown alert action: {other}")),
        }
    }
}
