use std::sync::Arc;

use async_trait::async_trait;
use gitadmin_provider::GithubUserManager;

use crate::error::{CoreError, CoreResult};
use crate::traits::UserRepository;
use crate::types::GithubUser;

/// [`UserRepository`] backed by the GitHub REST API.
pub struct RemoteUserRepository {
    manager: Arc<dyn GithubUserManager>,
}

impl RemoteUserRepository {
    #[must_use]
    pub fn new(manager: Arc<dyn GithubUserManager>) -> Self {
        Self { manager }
    }
}

#[async_trait]
impl UserRepository for RemoteUserRepository {
    async fn get_users(&self, since: u64, page_size: u32) -> CoreResult<Vec<GithubUser>> {
        let dtos = self.manager.get_users(since, page_size).await?;
        Ok(dtos.into_iter().map(GithubUser::from).collect())
    }

    async fn get_user_detail(&self, login: &str) -> CoreResult<GithubUser> {
        match self.manager.get_user_detail(login).await {
            Ok(dto) => Ok(GithubUser::from(dto)),
            Err(e) if e.status() == Some(404) => Err(CoreError::UserNotFound(login.to_string())),
            Err(e) => Err(CoreError::Api(e)),
        }
    }
}
