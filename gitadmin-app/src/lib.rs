//! Platform-agnostic application bootstrap for GitAdmin.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (dependency
//! injection), `AppConfig` (environment configuration) and `DeepLinksService`.

mod config;
mod deeplinks;

pub use config::{
    normalize_api_host, AppConfig, Environment, ENV_API_HOST, ENV_API_TOKEN, ENV_ENVIRONMENT,
    ENV_PAGE_SIZE, ENV_REQUEST_TIMEOUT_SECS,
};
pub use deeplinks::DeepLinksService;

use std::sync::Arc;

use gitadmin_core::deeplink::{DeeplinkCoordinator, DeeplinkHandler, GithubProfileDeeplinkHandler};
use gitadmin_core::error::{CoreError, CoreResult};
use gitadmin_core::repositories::RemoteUserRepository;
use gitadmin_core::services::ServiceContext;
use gitadmin_core::traits::{ProfileNavigation, UserRepository};
use gitadmin_core::{ProfileConfig, UserDetailController, UserListController};
use gitadmin_provider::{ClientOptions, GithubUserService};

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (repository, navigation, profile config)
    pub ctx: Arc<ServiceContext>,
    /// Deep-link entry point
    pub deeplinks: DeepLinksService,
}

impl AppState {
    /// Controller for a fresh profile list screen.
    #[must_use]
    pub fn user_list_controller(&self) -> UserListController {
        UserListController::new(Arc::clone(&self.ctx))
    }

    /// Controller for the profile screen of `login`.
    #[must_use]
    pub fn user_detail_controller(&self, login: &str) -> UserDetailController {
        UserDetailController::new(Arc::clone(&self.ctx), login)
    }
}

/// Builder for constructing `AppState`.
///
/// # Required
/// - `navigation`: the frontend's screen and alert implementation
///
/// # Optional
/// - `user_repository`: defaults to `RemoteUserRepository` over `GithubUserService`
/// - `client_options` / `profile_config`: default values, or taken from `config`
/// - `deeplink_handler`: extra handlers, consulted after the profile handler
pub struct AppStateBuilder {
    navigation: Option<Arc<dyn ProfileNavigation>>,
    user_repository: Option<Arc<dyn UserRepository>>,
    client_options: ClientOptions,
    profile_config: ProfileConfig,
    extra_handlers: Vec<Arc<dyn DeeplinkHandler>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            navigation: None,
            user_repository: None,
            client_options: ClientOptions::default(),
            profile_config: ProfileConfig::default(),
            extra_handlers: Vec::new(),
        }
    }

    /// Take client options and profile settings from `config`.
    #[must_use]
    pub fn config(mut self, config: &AppConfig) -> Self {
        self.client_options = config.client_options();
        self.profile_config = config.profile.clone();
        self
    }

    #[must_use]
    pub fn navigation(mut self, navigation: Arc<dyn ProfileNavigation>) -> Self {
        self.navigation = Some(navigation);
        self
    }

    #[must_use]
    pub fn user_repository(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn client_options(mut self, options: ClientOptions) -> Self {
        self.client_options = options;
        self
    }

    #[must_use]
    pub fn profile_config(mut self, config: ProfileConfig) -> Self {
        self.profile_config = config;
        self
    }

    #[must_use]
    pub fn deeplink_handler(mut self, handler: Arc<dyn DeeplinkHandler>) -> Self {
        self.extra_handlers.push(handler);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// - `CoreError::ValidationError` if `navigation` is missing
    /// - `CoreError::ConfigError` if the profile config is invalid
    /// - `CoreError::Api` if the HTTP client cannot be built
    pub fn build(self) -> CoreResult<AppState> {
        let navigation = self
            .navigation
            .ok_or_else(|| CoreError::ValidationError("navigation is required".to_string()))?;
        self.profile_config.validate()?;

        let user_repository = match self.user_repository {
            Some(repo) => repo,
            None => {
                log::debug!("Using GitHub API at {}", self.client_options.base_url);
                let service = GithubUserService::new(self.client_options)?;
                Arc::new(RemoteUserRepository::new(Arc::new(service))) as Arc<dyn UserRepository>
            }
        };

        let ctx = Arc::new(ServiceContext::new(
            user_repository,
            Arc::clone(&navigation),
            self.profile_config,
        ));

        let profile_handler: Arc<dyn DeeplinkHandler> =
            Arc::new(GithubProfileDeeplinkHandler::new(navigation));
        let mut coordinator = DeeplinkCoordinator::new(vec![profile_handler]);
        for handler in self.extra_handlers {
            coordinator.register(handler);
        }
        let deeplinks = DeepLinksService::new(Arc::new(coordinator));

        Ok(AppState { ctx, deeplinks })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
