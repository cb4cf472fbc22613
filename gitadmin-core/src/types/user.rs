use serde::{Deserialize, Serialize};

use gitadmin_provider::GithubUserDto;

use crate::config::ProfileConfig;

/// GitHub user as the domain sees it. Absent fields are empty strings or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubUser {
    pub id: u64,
    pub login: String,
    pub name: String,
    pub avatar_url: String,
    pub html_url: String,
    pub location: String,
    pub blog: String,
    pub followers: u64,
    pub following: u64,
}

impl From<GithubUserDto> for GithubUser {
    fn from(dto: GithubUserDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            login: dto.login.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            avatar_url: dto.avatar_url.unwrap_or_default(),
            html_url: dto.html_url.unwrap_or_default(),
            location: dto.location.unwrap_or_default(),
            blog: dto.blog.unwrap_or_default(),
            followers: dto.followers.unwrap_or_default(),
            following: dto.following.unwrap_or_default(),
        }
    }
}

/// One row of the profile list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: u64,
    /// Display name, or the login when the user has none.
    pub name: String,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub location: String,
}

impl From<&GithubUser> for UserItem {
    fn from(user: &GithubUser) -> Self {
        let name = if user.name.trim().is_empty() {
            user.login.clone()
        } else {
            user.name.clone()
        };
        Self {
            id: user.id,
            name,
            login: user.login.clone(),
            avatar_url: user.avatar_url.clone(),
            html_url: user.html_url.clone(),
            location: user.location.clone(),
        }
    }
}

impl From<GithubUser> for UserItem {
    fn from(user: GithubUser) -> Self {
        Self::from(&user)
    }
}

/// Profile detail with the display-ready counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(flatten)]
    pub item: UserItem,
    pub followers: String,
    pub following: String,
    pub blog: String,
}

impl UserDetail {
    #[must_use]
    pub fn new(user: &GithubUser, config: &ProfileConfig) -> Self {
        Self {
            item: UserItem::from(user),
            followers: cap_count(user.followers, config.max_follower_number),
            following: cap_count(user.following, config.max_following_number),
            blog: user.blog.clone(),
        }
    }
}

/// Render `value`, or `"<max>+"` once it exceeds `max`.
#[must_use]
pub fn cap_count(value: u64, max: u64) -> String {
    if value > max {
        format!("{max}+")
    } else {
        value.to_string()
    }
}
