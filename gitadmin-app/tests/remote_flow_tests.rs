#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end: `AppState` over the real HTTP client against a local responder.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gitadmin_app::{AppConfig, AppStateBuilder};
use gitadmin_core::error::{AlertRoute, NetworkErrorKind};
use gitadmin_core::traits::ProfileNavigation;
use gitadmin_core::types::{Alert, AlertAction};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers each accepted connection with the next `(status, body)` and
/// collects the request lines it saw.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let head = String::from_utf8_lossy(&buf).into_owned();
            seen.push(head.lines().next().unwrap_or_default().to_string());
            let raw = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(raw.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
        seen
    });
    (format!("http://{addr}"), handle)
}

#[derive(Default)]
struct AnsweringNavigation {
    alerts: Mutex<Vec<AlertRoute>>,
    answer_retry: bool,
}

#[async_trait]
impl ProfileNavigation for AnsweringNavigation {
    fn route_to_list(&self) {}

    fn route_to_detail(&self, _login: &str) {}

    fn go_back(&self) {}

    async fn show_alert(&self, alert: Alert) -> AlertAction {
        self.alerts.lock().unwrap().push(alert.route);
        if self.answer_retry {
            AlertAction::Retry
        } else {
            AlertAction::Cancel
        }
    }
}

fn config_for(base_url: &str, page_size: &str) -> AppConfig {
    let base_url = base_url.to_string();
    let page_size = page_size.to_string();
    AppConfig::from_lookup(move |key| match key {
        "TX_API_HOST" => Some(base_url.clone()),
        "TX_PAGE_SIZE" => Some(page_size.clone()),
        "TX_REQUEST_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .unwrap()
}

#[tokio::test]
async fn list_pages_over_http() {
    let (base_url, server) = serve(vec![
        (200, r#"[{"login":"mojombo","id":1},{"login":"defunkt","id":2}]"#),
        (200, r#"[{"login":"pjhyett","id":3}]"#),
    ])
    .await;
    let navigation = Arc::new(AnsweringNavigation::default());
    let state = AppStateBuilder::new()
        .config(&config_for(&base_url, "2"))
        .navigation(navigation.clone())
        .build()
        .unwrap();
    let list = state.user_list_controller();

    list.load_initial().await;
    assert_eq!(list.cursor().await, 2);
    assert!(list.has_more_data().await);
    list.load_more().await;
    assert!(!list.has_more_data().await);

    let logins: Vec<String> = list.items().await.into_iter().map(|i| i.login).collect();
    assert_eq!(logins, ["mojombo", "defunkt", "pjhyett"]);
    assert_eq!(
        server.await.unwrap(),
        [
            "GET /users?per_page=2&since=0 HTTP/1.1",
            "GET /users?per_page=2&since=2 HTTP/1.1",
        ]
    );
    assert!(navigation.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn server_error_then_retry_over_http() {
    let (base_url, server) = serve(vec![
        (500, r#"{"message":"Server Error"}"#),
        (200, r#"{"login":"octocat","id":583231,"followers":17000,"following":9}"#),
    ])
    .await;
    let navigation = Arc::new(AnsweringNavigation {
        answer_retry: true,
        ..AnsweringNavigation::default()
    });
    let state = AppStateBuilder::new()
        .config(&config_for(&base_url, "20"))
        .navigation(navigation.clone())
        .build()
        .unwrap();
    let detail = state.user_detail_controller("octocat");

    detail.fetch_detail().await;

    assert!(detail.loaded().await);
    assert_eq!(detail.user().await.unwrap().followers, "100+");
    assert_eq!(*navigation.alerts.lock().unwrap(), vec![AlertRoute::Common]);
    assert_eq!(server.await.unwrap().len(), 2);
}

#[tokio::test]
async fn unreachable_host_takes_connection_alert() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let navigation = Arc::new(AnsweringNavigation::default());
    let state = AppStateBuilder::new()
        .config(&config_for(&format!("http://{addr}"), "20"))
        .navigation(navigation.clone())
        .build()
        .unwrap();
    let list = state.user_list_controller();

    tokio::time::timeout(Duration::from_secs(10), list.load_initial())
        .await
        .expect("load finished");

    assert!(list.state().await.is_loading());
    assert!(!list.is_loading().await);
    assert_eq!(
        *navigation.alerts.lock().unwrap(),
        vec![AlertRoute::Connection(NetworkErrorKind::NoConnection)]
    );
}
