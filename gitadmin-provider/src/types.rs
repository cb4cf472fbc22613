use serde::{Deserialize, Serialize};

/// GitHub user payload as returned by `GET /users` and `GET /users/{login}`.
///
/// Every field is optional: the list endpoint only returns the summary subset,
/// and the detail endpoint may omit or null out any of the profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUserDto {
    pub login: Option<String>,
    pub id: Option<u64>,
    pub node_id: Option<String>,
    pub avatar_url: Option<String>,
    pub gravatar_id: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,
    pub followers_url: Option<String>,
    pub following_url: Option<String>,
    pub gists_url: Option<String>,
    pub starred_url: Option<String>,
    pub subscriptions_url: Option<String>,
    pub organizations_url: Option<String>,
    pub repos_url: Option<String>,
    pub events_url: Option<String>,
    pub received_events_url: Option<String>,
    pub site_admin: Option<bool>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
}

/// Error body returned by the GitHub API on non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub key: Option<String>,
    pub message: Option<String>,
}
