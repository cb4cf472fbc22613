//! Application configuration read from the environment.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use gitadmin_core::error::{CoreError, CoreResult};
use gitadmin_core::ProfileConfig;
use gitadmin_provider::{ClientOptions, DEFAULT_REQUEST_TIMEOUT_SECS, GITHUB_API_BASE};
use serde::{Deserialize, Serialize};
use url::Url;

pub const ENV_ENVIRONMENT: &str = "TX_ENV";
pub const ENV_API_HOST: &str = "TX_API_HOST";
pub const ENV_API_TOKEN: &str = "TX_API_TOKEN";
pub const ENV_PAGE_SIZE: &str = "TX_PAGE_SIZE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "TX_REQUEST_TIMEOUT_SECS";

/// Deployment stage the app runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    Dev,
    Sit,
    Uat,
    Pilot,
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEV" => Ok(Self::Dev),
            "SIT" => Ok(Self::Sit),
            "UAT" => Ok(Self::Uat),
            "PILOT" => Ok(Self::Pilot),
            "PRODUCTION" => Ok(Self::Production),
            other => Err(CoreError::ConfigError(format!(
                "{ENV_ENVIRONMENT}: unknown environment '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dev => "DEV",
            Self::Sit => "SIT",
            Self::Uat => "UAT",
            Self::Pilot => "PILOT",
            Self::Production => "PRODUCTION",
        };
        f.write_str(name)
    }
}

/// Everything the bootstrap needs to reach the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    /// API base URL, always with a scheme.
    pub api_host: String,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub profile: ProfileConfig,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            api_host: GITHUB_API_BASE.to_string(),
            access_token: None,
            profile: ProfileConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = get(ENV_ENVIRONMENT) {
            config.environment = v.parse()?;
        }
        if let Some(v) = get(ENV_API_HOST) {
            config.api_host = normalize_api_host(&v)?;
        }
        if let Some(v) = get(ENV_API_TOKEN) {
            config.access_token = Some(v.trim().to_string());
        }
        if let Some(v) = get(ENV_PAGE_SIZE) {
            config.profile.page_size = parse_number(ENV_PAGE_SIZE, &v)?;
        }
        if let Some(v) = get(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = parse_number(ENV_REQUEST_TIMEOUT_SECS, &v)?;
            if secs == 0 {
                return Err(CoreError::ConfigError(format!(
                    "{ENV_REQUEST_TIMEOUT_SECS} must be greater than 0"
                )));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        config.profile.validate()?;
        Ok(config)
    }

    /// HTTP client options for this configuration.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.api_host.clone(),
            access_token: self.access_token.clone(),
            request_timeout: self.request_timeout,
            ..ClientOptions::default()
        }
    }
}

/// Turn `api.github.com` into `https://api.github.com`; full URLs pass through.
pub fn normalize_api_host(raw: &str) -> CoreResult<String> {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let url = Url::parse(&candidate)
        .map_err(|e| CoreError::ConfigError(format!("{ENV_API_HOST}: invalid host '{raw}': {e}")))?;
    if url.host_str().is_none() {
        return Err(CoreError::ConfigError(format!(
            "{ENV_API_HOST}: '{raw}' has no host"
        )));
    }
    Ok(candidate.trim_end_matches('/').to_string())
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> CoreResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::ConfigError(format!("{key}: '{raw}' is not a valid number")))
}
