//! Paginated profile list

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::services::{AlertService, ServiceContext, UserService};
use crate::traits::ProfileNavigation;
use crate::types::{AlertAction, ListState, UserItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadMode {
    Initial,
    More,
}

impl LoadMode {
    fn label(self) -> &'static str {
        match self {
            Self::Initial => "load users",
            Self::More => "load more users",
        }
    }
}

#[derive(Debug)]
struct ListInner {
    state: ListState,
    cursor: u64,
    is_loading: bool,
    has_more_data: bool,
}

/// Drives the profile list: first page, further pages, retry after failure.
///
/// All state sits behind one lock that is never held across a fetch. A call
/// made while another load is in flight returns at once without fetching.
pub struct UserListController {
    users: UserService,
    alerts: AlertService,
    navigation: Arc<dyn ProfileNavigation>,
    page_size: u32,
    inner: Mutex<ListInner>,
}

impl UserListController {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            users: UserService::new(ctx.clone()),
            alerts: AlertService::new(ctx.clone()),
            navigation: ctx.navigation.clone(),
            page_size: ctx.config.page_size,
            inner: Mutex::new(ListInner {
                state: ListState::Loading,
                cursor: 0,
                is_loading: false,
                has_more_data: false,
            }),
        }
    }

    /// Fetch the first page, replacing whatever is shown.
    pub async fn load_initial(&self) {
        self.load(LoadMode::Initial).await;
    }

    /// Fetch the page after the cursor and append it.
    ///
    /// Does nothing until a full page has loaded, and again once a short page
    /// has been seen or a load failed.
    pub async fn load_more(&self) {
        self.load(LoadMode::More).await;
    }

    pub fn goto_detail(&self, login: &str) {
        self.navigation.route_to_detail(login);
    }

    pub async fn state(&self) -> ListState {
        self.inner.lock().await.state.clone()
    }

    pub async fn items(&self) -> Vec<UserItem> {
        self.inner.lock().await.state.items().to_vec()
    }

    pub async fn cursor(&self) -> u64 {
        self.inner.lock().await.cursor
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.is_loading
    }

    pub async fn has_more_data(&self) -> bool {
        self.inner.lock().await.has_more_data
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn load(&self, mode: LoadMode) {
        // retry 重发同一个请求，不再检查 has_more_data
        let mut check_more = mode == LoadMode::More;
        loop {
            let Some(cursor) = self.begin(mode, check_more).await else {
                return;
            };

            match self.users.get_users(cursor, self.page_size).await {
                Ok(page) => {
                    self.finish(mode, page).await;
                    return;
                }
                Err(e) => {
                    {
                        let mut inner = self.inner.lock().await;
                        inner.is_loading = false;
                        inner.has_more_data = false;
                    }
                    match self.alerts.present(mode.label(), &e).await {
                        AlertAction::Retry => check_more = false,
                        AlertAction::Cancel => return,
                    }
                }
            }
        }
    }

    /// Take the loading guard. Returns the cursor to fetch from, or `None` if
    /// the load must not start.
    async fn begin(&self, mode: LoadMode, check_more: bool) -> Option<u64> {
        let mut inner = self.inner.lock().await;
        if inner.is_loading || (check_more && !inner.has_more_data) {
            return None;
        }
        inner.is_loading = true;
        if mode == LoadMode::Initial {
            inner.cursor = 0;
        }
        Some(inner.cursor)
    }

    async fn finish(&self, mode: LoadMode, page: Vec<UserItem>) {
        let mut inner = self.inner.lock().await;
        let fetched = page.len();

        let items = match (mode, std::mem::take(&mut inner.state)) {
            (LoadMode::More, ListState::Data(mut items)) => {
                items.extend(page);
                items
            }
            _ => page,
        };
        if let Some(last) = items.last() {
            inner.cursor = last.id;
        }
        inner.has_more_data = fetched == self.page_size as usize;
        inner.state = ListState::Data(items);
        inner.is_loading = false;
    }
}
