//! 类型定义模块

mod alert;
mod state;
mod user;

pub use alert::{Alert, AlertAction};
pub use state::ListState;
pub use user::{GithubUser, UserDetail, UserItem, cap_count};

pub use crate::error::AlertRoute;
