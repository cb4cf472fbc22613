//! GitAdmin Core Library
//!
//! Provides the platform-independent logic of the GitHub profile browser:
//! - Deep-link routing (`deeplink`)
//! - User repository and use cases (`repositories`, `services`)
//! - Paginated list and detail controllers with retry/cancel alerts (`controllers`)
//!
//! The front end plugs in through [`ProfileNavigation`]; data comes in through
//! [`UserRepository`].

pub mod config;
pub mod controllers;
pub mod deeplink;
pub mod error;
pub mod repositories;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ProfileConfig;
pub use controllers::{UserDetailController, UserListController};
pub use deeplink::{DeeplinkCoordinator, DeeplinkHandler, GithubProfileDeeplinkHandler};
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{ProfileNavigation, UserRepository};
