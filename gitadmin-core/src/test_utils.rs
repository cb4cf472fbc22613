//! 测试工具模块 - 提供 Mock 实现

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use crate::config::ProfileConfig;
use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::{ProfileNavigation, UserRepository};
use crate::types::{Alert, AlertAction, GithubUser};

// ===== MockUserRepository =====

/// Scripted user repository.
///
/// Results are handed out in push order; once a queue runs dry the list
/// returns an empty page and the detail a default user. With a gate set,
/// every call blocks until the gate is notified.
pub struct MockUserRepository {
    users: Mutex<VecDeque<CoreResult<Vec<GithubUser>>>>,
    details: Mutex<VecDeque<CoreResult<GithubUser>>>,
    list_calls: Mutex<Vec<(u64, u32)>>,
    detail_calls: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(VecDeque::new()),
            details: Mutex::new(VecDeque::new()),
            list_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn with_gate(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub async fn push_users(&self, result: CoreResult<Vec<GithubUser>>) {
        self.users.lock().await.push_back(result);
    }

    pub async fn push_detail(&self, result: CoreResult<GithubUser>) {
        self.details.lock().await.push_back(result);
    }

    pub async fn list_calls(&self) -> Vec<(u64, u32)> {
        self.list_calls.lock().await.clone()
    }

    pub async fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().await.clone()
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn get_users(&self, since: u64, page_size: u32) -> CoreResult<Vec<GithubUser>> {
        self.list_calls.lock().await.push((since, page_size));
        self.wait_gate().await;
        self.users
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_user_detail(&self, login: &str) -> CoreResult<GithubUser> {
        self.detail_calls.lock().await.push(login.to_string());
        self.wait_gate().await;
        self.details
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(GithubUser::default()))
    }
}

// ===== MockNavigation =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    List,
    Detail(String),
    Back,
    Alert(Alert),
}

/// Records every navigation call. Alerts are answered from a queue,
/// defaulting to cancel.
pub struct MockNavigation {
    events: StdMutex<Vec<NavEvent>>,
    alert_actions: StdMutex<VecDeque<AlertAction>>,
}

impl MockNavigation {
    pub fn new() -> Self {
        Self {
            events: StdMutex::new(Vec::new()),
            alert_actions: StdMutex::new(VecDeque::new()),
        }
    }

    pub fn push_alert_action(&self, action: AlertAction) {
        self.alert_actions.lock().unwrap().push_back(action);
    }

    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NavEvent::Alert(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: NavEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProfileNavigation for MockNavigation {
    fn route_to_list(&self) {
        self.record(NavEvent::List);
    }

    fn route_to_detail(&self, login: &str) {
        self.record(NavEvent::Detail(login.to_string()));
    }

    fn go_back(&self) {
        self.record(NavEvent::Back);
    }

    async fn show_alert(&self, alert: Alert) -> AlertAction {
        self.record(NavEvent::Alert(alert));
        self.alert_actions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(AlertAction::Cancel)
    }
}

// ===== Helpers =====

pub fn user(id: u64, login: &str) -> GithubUser {
    GithubUser {
        id,
        login: login.to_string(),
        ..GithubUser::default()
    }
}

/// Users with consecutive ids starting at `first_id`.
pub fn users(first_id: u64, count: u64) -> Vec<GithubUser> {
    (first_id..first_id + count)
        .map(|id| user(id, &format!("user{id}")))
        .collect()
}

/// Context over `repo` with the default profile config and a fresh mock navigation.
pub fn context(repo: Arc<MockUserRepository>) -> (Arc<ServiceContext>, Arc<MockNavigation>) {
    context_with(repo, ProfileConfig::default())
}

pub fn context_with(
    repo: Arc<MockUserRepository>,
    config: ProfileConfig,
) -> (Arc<ServiceContext>, Arc<MockNavigation>) {
    let navigation = Arc::new(MockNavigation::new());
    let ctx = ServiceContext::new(repo, navigation.clone(), config);
    (Arc::new(ctx), navigation)
}
