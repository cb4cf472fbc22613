use url::Url;

/// Tests and processes one class of deep link.
pub trait DeeplinkHandler: Send + Sync {
    fn can_open_url(&self, url: &Url) -> bool;

    /// Only called after [`can_open_url`](Self::can_open_url) returned `true` for `url`.
    fn open_url(&self, url: &Url);
}
