use std::sync::Arc;

use url::Url;

use super::helper::query_parameters;
use super::path::{GithubProfilePath, LOGIN_USERNAME};
use super::DeeplinkHandler;
use crate::traits::ProfileNavigation;

/// Opens the GitHub profile list and detail screens.
///
/// A detail link whose `loginUsername` is missing or empty is still claimed by
/// this handler but opens nothing; it is logged and dropped.
pub struct GithubProfileDeeplinkHandler {
    navigation: Arc<dyn ProfileNavigation>,
}

impl GithubProfileDeeplinkHandler {
    #[must_use]
    pub fn new(navigation: Arc<dyn ProfileNavigation>) -> Self {
        Self { navigation }
    }
}

impl DeeplinkHandler for GithubProfileDeeplinkHandler {
    fn can_open_url(&self, url: &Url) -> bool {
        GithubProfilePath::from_path(url.path()).is_some()
    }

    fn open_url(&self, url: &Url) {
        match GithubProfilePath::from_path(url.path()) {
            Some(GithubProfilePath::List) => self.navigation.route_to_list(),
            Some(GithubProfilePath::Detail) => {
                let params = query_parameters(url);
                match params.get(LOGIN_USERNAME).filter(|login| !login.is_empty()) {
                    Some(login) => self.navigation.route_to_detail(login),
                    None => log::warn!("Dropping deep link without {LOGIN_USERNAME}: {url}"),
                }
            }
            None => log::debug!("Not a profile deep link: {url}"),
        }
    }
}
