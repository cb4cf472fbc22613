//! Generic HTTP client tools
//!
//! One place for sending a request, logging it, classifying transport
//! failures and turning non-success responses into [`ApiError::Server`].
//! Nothing here retries; retries are driven by the caller.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, NetworkErrorKind, Result};
use crate::types::ErrorBody;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 240;

/// Create an HTTP client with the given timeouts and user agent.
pub fn create_http_client(
    connect_timeout: Duration,
    request_timeout: Duration,
    user_agent: &str,
) -> Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| ApiError::Unknown {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any 2xx response
    /// * `Err(ApiError::Network)` when no response was received
    /// * `Err(ApiError::Server)` for any other status code
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            let kind = network_kind(e.is_timeout(), e.is_connect());
            log::warn!("{method_name} {url_or_action} failed ({kind}): {e}");
            ApiError::Network {
                kind,
                detail: e.to_string(),
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            let kind = network_kind(e.is_timeout(), e.is_connect());
            ApiError::Network {
                kind,
                detail: format!("Failed to read response body: {e}"),
            }
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        if !(200..300).contains(&status_code) {
            let err = make_response_error(status_code, &response_text);
            log::warn!("{method_name} {url_or_action} rejected: {err}");
            return Err(err);
        }

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::Decoding)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::Decoding {
                detail: e.to_string(),
            }
        })
    }
}

/// Classify a failed send into a network failure class.
fn network_kind(is_timeout: bool, is_connect: bool) -> NetworkErrorKind {
    if is_timeout {
        NetworkErrorKind::Timeout
    } else if is_connect {
        NetworkErrorKind::NoConnection
    } else {
        NetworkErrorKind::Unknown
    }
}

/// Build a [`ApiError::Server`] from a non-success response.
///
/// The body is inspected for the `key` / `message` fields; an empty or
/// non-JSON body still yields a server error carrying just the status.
pub(crate) fn make_response_error(status_code: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { key, message }) => ApiError::Server {
            status: Some(status_code),
            key,
            message,
        },
        Err(_) => ApiError::Server {
            status: Some(status_code),
            key: None,
            message: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- network_kind ----

    #[test]
    fn timeout_wins_over_connect() {
        assert_eq!(network_kind(true, true), NetworkErrorKind::Timeout);
    }

    #[test]
    fn connect_failure_is_no_connection() {
        assert_eq!(network_kind(false, true), NetworkErrorKind::NoConnection);
    }

    #[test]
    fn other_failure_is_unknown() {
        assert_eq!(network_kind(false, false), NetworkErrorKind::Unknown);
    }

    // ---- make_response_error ----

    #[test]
    fn response_error_with_key_and_message() {
        let err = make_response_error(422, r#"{"key":"invalid","message":"Validation Failed"}"#);
        assert!(
            matches!(
                &err,
                ApiError::Server { status: Some(422), key: Some(k), message: Some(m) }
                    if k == "invalid" && m == "Validation Failed"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn response_error_with_message_only() {
        let err = make_response_error(
            404,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#,
        );
        assert!(
            matches!(
                &err,
                ApiError::Server { status: Some(404), key: None, message: Some(m) } if m == "Not Found"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn response_error_with_non_json_body() {
        let err = make_response_error(502, "<html>Bad Gateway</html>");
        assert!(
            matches!(
                &err,
                ApiError::Server {
                    status: Some(502),
                    key: None,
                    message: None
                }
            ),
            "unexpected error: {err:?}"
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ApiError::Decoding { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
