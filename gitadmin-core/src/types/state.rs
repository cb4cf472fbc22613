use serde::{Deserialize, Serialize};

use super::UserItem;

/// What the profile list shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "items", rename_all = "camelCase")]
pub enum ListState {
    /// Nothing has loaded yet.
    #[default]
    Loading,
    /// Items in server order.
    Data(Vec<UserItem>),
}

impl ListState {
    #[must_use]
    pub fn items(&self) -> &[UserItem] {
        match self {
            Self::Loading => &[],
            Self::Data(items) => items,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
