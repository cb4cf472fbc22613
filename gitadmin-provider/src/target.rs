//! Request targets for the GitHub user endpoints.

use reqwest::Method;

/// Operations supported by the user endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserOperation {
    /// `GET /users?per_page={page_size}&since={since}`
    GetUsers { since: u64, page_size: u32 },
    /// `GET /users/{login}`
    GetUserDetail { login: String },
}

/// A fully described request: which operation, against which API host.
#[derive(Debug, Clone)]
pub struct GithubUserTarget {
    pub operation: UserOperation,
    pub base_url: String,
}

impl GithubUserTarget {
    pub fn new(operation: UserOperation, base_url: impl Into<String>) -> Self {
        Self {
            operation,
            base_url: base_url.into(),
        }
    }

    /// Path relative to the API host.
    pub fn path(&self) -> String {
        match &self.operation {
            UserOperation::GetUsers { .. } => "/users".to_string(),
            UserOperation::GetUserDetail { login } => {
                format!("/users/{}", urlencoding::encode(login))
            }
        }
    }

    pub fn method(&self) -> Method {
        match self.operation {
            UserOperation::GetUsers { .. } | UserOperation::GetUserDetail { .. } => Method::GET,
        }
    }

    /// Query string parameters, in the order they are sent.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match &self.operation {
            UserOperation::GetUsers { since, page_size } => vec![
                ("per_page", page_size.to_string()),
                ("since", since.to_string()),
            ],
            UserOperation::GetUserDetail { .. } => Vec::new(),
        }
    }

    /// Absolute URL without the query string.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path())
    }

    /// Short operation name used in log lines.
    pub fn action_name(&self) -> &'static str {
        match self.operation {
            UserOperation::GetUsers { .. } => "GetUsers",
            UserOperation::GetUserDetail { .. } => "GetUserDetail",
        }
    }
}
