//! 用户查询服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{UserDetail, UserItem};

/// List and detail use cases of the profile feature.
pub struct UserService {
    ctx: Arc<ServiceContext>,
}

impl UserService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// One page of list items after `since`.
    pub async fn get_users(&self, since: u64, page_size: u32) -> CoreResult<Vec<UserItem>> {
        let users = self
            .ctx
            .user_repository
            .get_users(since, page_size)
            .await?;
        log::debug!(
            "Fetched {} users since {since} (page size {page_size})",
            users.len()
        );
        Ok(users.iter().map(UserItem::from).collect())
    }

    /// Profile of `login`, counters capped per the profile config.
    pub async fn get_user_detail(&self, login: &str) -> CoreResult<UserDetail> {
        if login.trim().is_empty() {
            return Err(CoreError::ValidationError("login must not be empty".to_string()));
        }
        let user = self.ctx.user_repository.get_user_detail(login).await?;
        Ok(UserDetail::new(&user, &self.ctx.config))
    }
}
