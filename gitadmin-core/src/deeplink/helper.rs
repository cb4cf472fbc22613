//! Building and reading app deep links

use std::collections::HashMap;

use url::Url;

use super::path::DeeplinkPath;
use crate::error::{CoreError, CoreResult};

/// URL scheme the app registers for deep links.
pub const APP_SCHEME: &str = "gitadmin-app";

/// Fixed host part of every app deep link.
pub const APP_HOST: &str = "com.tx";

/// Build `gitadmin-app://com.tx/{path}?{params}`.
///
/// A leading `/` is added to `path` when missing. Parameters whose value is
/// `None` are skipped, and no `?` is written when none remain.
pub fn make_url(path: &str, params: &[(&str, Option<&str>)]) -> CoreResult<Url> {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    let mut url = Url::parse(&format!("{APP_SCHEME}://{APP_HOST}{path}"))
        .map_err(|e| CoreError::InvalidDeeplink(format!("{path}: {e}")))?;

    let present: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(key, value)| value.map(|v| (*key, v)))
        .collect();
    if !present.is_empty() {
        url.query_pairs_mut().extend_pairs(present);
    }
    Ok(url)
}

/// Re-home any URL onto the app scheme and host, keeping path, query and fragment.
pub fn make_url_from(raw: &str) -> CoreResult<Url> {
    let source = Url::parse(raw).map_err(|e| CoreError::InvalidDeeplink(format!("{raw}: {e}")))?;
    let mut url = make_url(source.path(), &[])?;
    url.set_query(source.query());
    url.set_fragment(source.fragment());
    Ok(url)
}

/// Deep link to `route`.
pub fn make_deeplink(route: &dyn DeeplinkPath, params: &[(&str, Option<&str>)]) -> CoreResult<Url> {
    make_url(route.path(), params)
}

/// Query pairs of `url`, decoded. A repeated key keeps its last value.
#[must_use]
pub fn query_parameters(url: &Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}
