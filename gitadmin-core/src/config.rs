//! Profile feature configuration

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Largest page size the GitHub `/users` endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Settings for the profile list and detail screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileConfig {
    /// Items requested per page.
    pub page_size: u32,
    /// Follower count above which the detail shows `"<max>+"`.
    pub max_follower_number: u64,
    /// Following count above which the detail shows `"<max>+"`.
    pub max_following_number: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_follower_number: 100,
            max_following_number: 10,
        }
    }
}

impl ProfileConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(CoreError::ConfigError(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}
