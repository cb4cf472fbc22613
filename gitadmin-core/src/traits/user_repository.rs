//! User data source abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::GithubUser;

/// Source of GitHub users for the list and detail screens.
///
/// Implementations:
/// - `RemoteUserRepository` (GitHub REST API)
/// - in-memory mocks in tests
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// One page of users with an id greater than `since`.
    ///
    /// # Arguments
    /// * `since` - id of the last user already shown, `0` for the first page
    /// * `page_size` - maximum number of users to return
    async fn get_users(&self, since: u64, page_size: u32) -> CoreResult<Vec<GithubUser>>;

    /// Full profile of one user.
    ///
    /// # Arguments
    /// * `login` - GitHub login
    async fn get_user_detail(&self, login: &str) -> CoreResult<GithubUser>;
}
