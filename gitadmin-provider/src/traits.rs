use async_trait::async_trait;

use crate::error::Result;
use crate::types::GithubUserDto;

/// GitHub user data source.
///
/// Implementations only report success or a classified [`ApiError`](crate::ApiError);
/// they never retry on their own.
#[async_trait]
pub trait GithubUserManager: Send + Sync {
    /// List users whose id is greater than `since`, at most `page_size` of them.
    async fn get_users(&self, since: u64, page_size: u32) -> Result<Vec<GithubUserDto>>;

    /// Fetch the full profile of one user.
    async fn get_user_detail(&self, login: &str) -> Result<GithubUserDto>;
}
