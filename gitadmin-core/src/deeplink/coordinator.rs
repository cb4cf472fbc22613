use std::sync::Arc;

use url::Url;

use super::DeeplinkHandler;

/// Ordered deep-link router. The first handler that accepts a URL handles it.
#[derive(Default)]
pub struct DeeplinkCoordinator {
    handlers: Vec<Arc<dyn DeeplinkHandler>>,
}

impl DeeplinkCoordinator {
    #[must_use]
    pub fn new(handlers: Vec<Arc<dyn DeeplinkHandler>>) -> Self {
        Self { handlers }
    }

    /// Append a handler after the ones already registered.
    pub fn register(&mut self, handler: Arc<dyn DeeplinkHandler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn can_open_url(&self, url: &Url) -> bool {
        self.handlers.iter().any(|h| h.can_open_url(url))
    }

    /// Dispatch `url` to the first handler that accepts it.
    ///
    /// Returns `false`, touching no handler, when none does.
    pub fn handle_url(&self, url: &Url) -> bool {
        match self.handlers.iter().find(|h| h.can_open_url(url)) {
            Some(handler) => {
                log::debug!("Opening deep link {url}");
                handler.open_url(url);
                true
            }
            None => {
                log::debug!("No handler for deep link {url}");
                false
            }
        }
    }
}
