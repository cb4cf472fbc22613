//! # gitadmin-provider
//!
//! GitHub user API client: the data source behind the GitAdmin profile
//! browser.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`GithubUserManager::get_users`] | `GET /users?per_page={page_size}&since={cursor}` |
//! | [`GithubUserManager::get_user_detail`] | `GET /users/{login}` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gitadmin_provider::{ClientOptions, GithubUserManager, GithubUserService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = GithubUserService::new(ClientOptions::default())?;
//!
//!     let users = service.get_users(0, 20).await?;
//!     for user in &users {
//!         println!("{:?} ({:?})", user.login, user.id);
//!     }
//!
//!     let octocat = service.get_user_detail("octocat").await?;
//!     println!("{:?} follows {:?}", octocat.login, octocat.following);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::Network`] - no response received; see [`NetworkErrorKind`]
//! - [`ApiError::Server`] - non-2xx status, with the body's `key`/`message`
//! - [`ApiError::Decoding`] - the body did not match the expected shape
//! - [`ApiError::Unknown`] - anything else

mod error;
mod http_client;
mod service;
mod target;
mod traits;
mod types;
mod utils;

pub use error::{ApiError, NetworkErrorKind, Result};
pub use http_client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use service::{ClientOptions, GITHUB_API_BASE, GithubUserService};
pub use target::{GithubUserTarget, UserOperation};
pub use traits::GithubUserManager;
pub use types::GithubUserDto;
