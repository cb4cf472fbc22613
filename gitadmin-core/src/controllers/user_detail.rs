//! Single profile

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::services::{AlertService, ServiceContext, UserService};
use crate::traits::ProfileNavigation;
use crate::types::{AlertAction, UserDetail};

#[derive(Debug, Default)]
struct DetailInner {
    user: Option<UserDetail>,
    is_loading: bool,
    loaded: bool,
}

/// Fetches one profile, with the same retry/cancel handling as the list.
pub struct UserDetailController {
    login: String,
    users: UserService,
    alerts: AlertService,
    navigation: Arc<dyn ProfileNavigation>,
    inner: Mutex<DetailInner>,
}

impl UserDetailController {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            users: UserService::new(ctx.clone()),
            alerts: AlertService::new(ctx.clone()),
            navigation: ctx.navigation.clone(),
            inner: Mutex::new(DetailInner::default()),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub async fn fetch_detail(&self) {
        loop {
            {
                let mut inner = self.inner.lock().await;
                if inner.is_loading {
                    return;
                }
                inner.is_loading = true;
            }

            match self.users.get_user_detail(&self.login).await {
                Ok(detail) => {
                    let mut inner = self.inner.lock().await;
                    inner.user = Some(detail);
                    inner.loaded = true;
                    inner.is_loading = false;
                    return;
                }
                Err(e) => {
                    self.inner.lock().await.is_loading = false;
                    let action = format!("load profile {}", self.login);
                    if self.alerts.present(&action, &e).await == AlertAction::Cancel {
                        return;
                    }
                }
            }
        }
    }

    pub fn go_back(&self) {
        self.navigation.go_back();
    }

    /// Whether a fetch has succeeded at least once.
    pub async fn loaded(&self) -> bool {
        self.inner.lock().await.loaded
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.is_loading
    }

    pub async fn user(&self) -> Option<UserDetail> {
        self.inner.lock().await.user.clone()
    }
}
