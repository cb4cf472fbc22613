//! Terminal front end for GitAdmin.
//!
//! Opens the profile list (or the screen named by `--deeplink`) and prints it.
//! Navigation requests raised while a screen runs are queued and shown in turn
//! by a single UI task.

mod cli;
mod console;
mod screens;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use gitadmin_app::{AppConfig, AppStateBuilder};
use gitadmin_core::traits::ProfileNavigation;
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use console::{ConsoleNavigation, Route};

#[tokio::main]
async fn main() -> ExitCode {
    // 日志输出到 stderr，stdout 留给页面内容
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli
        .apply(AppConfig::from_env().context("reading environment")?)
        .context("applying command-line options")?;
    tracing::info!(
        "Environment {} against {} (page size {})",
        config.environment,
        config.api_host,
        config.profile.page_size
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let input: Option<Box<dyn AsyncRead + Send + Unpin>> = if cli.assume_cancel {
        None
    } else {
        Some(Box::new(tokio::io::stdin()))
    };
    let navigation = Arc::new(ConsoleNavigation::new(tx, input));
    let state = AppStateBuilder::new()
        .config(&config)
        .navigation(navigation.clone())
        .build()
        .context("building application state")?;

    match &cli.deeplink {
        Some(link) => {
            if !state.deeplinks.handle_url(link) {
                eprintln!("Cannot open deep link: {link}");
                return Ok(ExitCode::from(2));
            }
        }
        None => navigation.route_to_list(),
    }

    // Screens may queue more routes; stop once the queue is drained.
    while let Ok(route) = rx.try_recv() {
        tracing::debug!("Showing {route:?}");
        let page = match route {
            Route::List => screens::show_list(&state, cli.pages).await,
            Route::Detail(login) => screens::show_detail(&state, &login).await,
            Route::Back => break,
        };
        print!("{page}");
    }

    Ok(ExitCode::SUCCESS)
}
