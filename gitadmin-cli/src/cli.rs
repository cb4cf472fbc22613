use clap::Parser;
use gitadmin_app::{normalize_api_host, AppConfig};
use gitadmin_core::error::CoreResult;

#[derive(Parser, Debug)]
#[command(name = "gitadmin")]
#[command(about = "Browse GitHub profiles from the terminal", long_about = None)]
pub struct Cli {
    /// Deep link to open, e.g. gitadmin-app://com.tx/profile/detail?loginUsername=octocat
    #[arg(long)]
    pub deeplink: Option<String>,

    /// API host (overrides TX_API_HOST); a bare host gets https://
    #[arg(long)]
    pub api_host: Option<String>,

    /// Access token (overrides TX_API_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Users per page (overrides TX_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// How many list pages to fetch before stopping
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Answer every error alert with cancel instead of prompting
    #[arg(long)]
    pub assume_cancel: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: AppConfig) -> CoreResult<AppConfig> {
        if let Some(host) = &self.api_host {
            config.api_host = normalize_api_host(host)?;
        }
        if let Some(token) = &self.token {
            config.access_token = Some(token.clone());
        }
        if let Some(page_size) = self.page_size {
            config.profile.page_size = page_size;
        }
        config.profile.validate()?;
        Ok(config)
    }
}
