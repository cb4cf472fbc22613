//! Deep-link routing
//!
//! A [`DeeplinkCoordinator`] holds an ordered list of [`DeeplinkHandler`]s and
//! hands each URL to the first one that accepts it. Matching is on the URL's
//! path only; scheme and host are not checked.

mod coordinator;
mod handler;
mod helper;
mod path;
mod profile_handler;

pub use coordinator::DeeplinkCoordinator;
pub use handler::DeeplinkHandler;
pub use helper::{make_deeplink, make_url, make_url_from, query_parameters, APP_HOST, APP_SCHEME};
pub use path::{DeeplinkPath, GithubProfilePath, LOGIN_USERNAME};
pub use profile_handler::GithubProfileDeeplinkHandler;
