//! String-level entry point for deep links delivered by the OS or the shell.

use std::sync::Arc;

use gitadmin_core::deeplink::DeeplinkCoordinator;
use url::Url;

/// Parses incoming link strings and hands them to the router.
#[derive(Clone)]
pub struct DeepLinksService {
    coordinator: Arc<DeeplinkCoordinator>,
}

impl DeepLinksService {
    #[must_use]
    pub fn new(coordinator: Arc<DeeplinkCoordinator>) -> Self {
        Self { coordinator }
    }

    /// Route `raw`. Returns `false` if it does not parse or no handler takes it.
    pub fn handle_url(&self, raw: &str) -> bool {
        match parse(raw) {
            Some(url) => {
                let handled = self.coordinator.handle_url(&url);
                if !handled {
                    log::info!("Unhandled deep link: {url}");
                }
                handled
            }
            None => false,
        }
    }

    pub fn can_open_url(&self, raw: &str) -> bool {
        parse(raw).is_some_and(|url| self.coordinator.can_open_url(&url))
    }
}

fn parse(raw: &str) -> Option<Url> {
    match Url::parse(raw.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Rejecting malformed deep link '{raw}': {e}");
            None
        }
    }
}
