//! Navigation capability implemented by the front end

use async_trait::async_trait;

use crate::types::{Alert, AlertAction};

/// Screen transitions and alerts for the profile feature.
///
/// The core only calls these; the front end decides how they look.
#[async_trait]
pub trait ProfileNavigation: Send + Sync {
    /// Show the profile list.
    fn route_to_list(&self);

    /// Show the profile of `login`.
    fn route_to_detail(&self, login: &str);

    /// Leave the current screen.
    fn go_back(&self);

    /// Present `alert` and wait for the user's answer.
    async fn show_alert(&self, alert: Alert) -> AlertAction;
}
