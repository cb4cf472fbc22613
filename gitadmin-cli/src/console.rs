//! Console implementation of the navigation capability.
//!
//! Screen changes are queued on a channel and drained by the single UI task in
//! `main`; alerts are answered on stdin.

use async_trait::async_trait;
use gitadmin_core::traits::ProfileNavigation;
use gitadmin_core::types::{Alert, AlertAction};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tokio::sync::{mpsc, Mutex};

/// Screens the UI task knows how to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(String),
    Back,
}

type Input = Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>;

pub struct ConsoleNavigation {
    routes: mpsc::UnboundedSender<Route>,
    input: Option<Mutex<Input>>,
}

impl ConsoleNavigation {
    /// Navigation that prompts on stdin. `None` as input answers every alert with cancel.
    pub fn new(
        routes: mpsc::UnboundedSender<Route>,
        input: Option<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> Self {
        Self {
            routes,
            input: input.map(|reader| Mutex::new(BufReader::new(reader).lines())),
        }
    }

    fn send(&self, route: Route) {
        if self.routes.send(route).is_err() {
            tracing::warn!("UI task is gone; dropping navigation");
        }
    }

    async fn prompt(&self, input: &Mutex<Input>) -> AlertAction {
        let mut lines = input.lock().await;
        loop {
            eprint!("[r]etry / [c]ancel > ");
            match lines.next_line().await {
                Ok(Some(line)) => match line.parse() {
                    Ok(action) => return action,
                    Err(e) => eprintln!("{e}"),
                },
                Ok(None) => return AlertAction::Cancel,
                Err(e) => {
                    tracing::warn!("Failed to read answer: {e}");
                    return AlertAction::Cancel;
                }
            }
        }
    }
}

#[async_trait]
impl ProfileNavigation for ConsoleNavigation {
    fn route_to_list(&self) {
        self.send(Route::List);
    }

    fn route_to_detail(&self, login: &str) {
        self.send(Route::Detail(login.to_string()));
    }

    fn go_back(&self) {
        self.send(Route::Back);
    }

    async fn show_alert(&self, alert: Alert) -> AlertAction {
        eprintln!("\n! {}\n  {}", alert.title, alert.message);
        match &self.input {
            Some(input) => self.prompt(input).await,
            None => AlertAction::Cancel,
        }
    }
}
