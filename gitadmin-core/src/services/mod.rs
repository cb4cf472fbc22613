//! 业务逻辑服务层

mod alert_service;
mod user_service;

pub use alert_service::AlertService;
pub use user_service::UserService;

use std::sync::Arc;

use crate::config::ProfileConfig;
use crate::traits::{ProfileNavigation, UserRepository};

/// 服务上下文 - 持有所有依赖
///
/// 前端需要创建此上下文，并注入数据源与导航实现。
pub struct ServiceContext {
    /// 用户数据源
    pub user_repository: Arc<dyn UserRepository>,
    /// 导航与弹窗
    pub navigation: Arc<dyn ProfileNavigation>,
    /// Profile 配置
    pub config: ProfileConfig,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        navigation: Arc<dyn ProfileNavigation>,
        config: ProfileConfig,
    ) -> Self {
        Self {
            user_repository,
            navigation,
            config,
        }
    }
}
