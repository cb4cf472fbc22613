//! Error → alert routing

use std::sync::Arc;

use crate::error::{AlertRoute, CoreError, NetworkErrorKind};
use crate::services::ServiceContext;
use crate::types::{Alert, AlertAction};

const CONNECTION_HINT: &str = "Please check your internet connection and try again.";

/// Turns failures into alerts and asks the user what to do next.
pub struct AlertService {
    ctx: Arc<ServiceContext>,
}

impl AlertService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Build the alert shown for `err`.
    ///
    /// Network errors get the connection alert, worded per failure class;
    /// everything else gets the common alert carrying the error text.
    #[must_use]
    pub fn alert_for(err: &CoreError) -> Alert {
        let route = err.alert_route();
        let (title, message) = match route {
            AlertRoute::Connection(NetworkErrorKind::NoConnection) => {
                ("No Internet Connection", CONNECTION_HINT.to_string())
            }
            AlertRoute::Connection(NetworkErrorKind::Timeout) => (
                "Request Timed Out",
                "The server took too long to respond. Please try again.".to_string(),
            ),
            AlertRoute::Connection(NetworkErrorKind::Unknown) => {
                ("Network Error", CONNECTION_HINT.to_string())
            }
            AlertRoute::Common => ("Something Went Wrong", err.to_string()),
        };
        Alert {
            route,
            title: title.to_string(),
            message,
        }
    }

    /// Log `err`, show its alert and return the user's choice.
    pub async fn present(&self, action: &str, err: &CoreError) -> AlertAction {
        if err.is_expected() {
            log::warn!("{action} failed: {err}");
        } else {
            log::error!("{action} failed: {err}");
        }
        let choice = self.ctx.navigation.show_alert(Self::alert_for(err)).await;
        log::debug!("{action}: user chose {choice:?}");
        choice
    }
}
