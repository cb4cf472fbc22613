//! `GithubUserManager` implementation backed by the GitHub REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpUtils, create_http_client,
};
use crate::target::{GithubUserTarget, UserOperation};
use crate::traits::GithubUserManager;
use crate::types::GithubUserDto;

/// Public GitHub API host.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Client construction options.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API host, e.g. `https://api.github.com`.
    pub base_url: String,
    /// Personal access token sent as a bearer token, if any.
    pub access_token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            access_token: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: concat!("gitadmin/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// GitHub user service
pub struct GithubUserService {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl GithubUserService {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = create_http_client(
            options.connect_timeout,
            options.request_timeout,
            &options.user_agent,
        )?;
        Ok(Self {
            client,
            base_url: options.base_url,
            access_token: options.access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn perform<T: DeserializeOwned>(&self, operation: UserOperation) -> Result<T> {
        let target = GithubUserTarget::new(operation, self.base_url.as_str());
        let url = target.url();

        let mut request = self
            .client
            .request(target.method(), &url)
            .query(&target.query())
            .header("Accept", "application/vnd.github+json")
            .header("Content-Type", "application/json");
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let (_, body) =
            HttpUtils::execute_request(request, target.method().as_str(), target.action_name())
                .await?;
        HttpUtils::parse_json(&body)
    }
}

#[async_trait]
impl GithubUserManager for GithubUserService {
    async fn get_users(&self, since: u64, page_size: u32) -> Result<Vec<GithubUserDto>> {
        self.perform(UserOperation::GetUsers { since, page_size })
            .await
    }

    async fn get_user_detail(&self, login: &str) -> Result<GithubUserDto> {
        self.perform(UserOperation::GetUserDetail {
            login: login.to_string(),
        })
        .await
    }
}
