//! Screen controllers
//!
//! Each controller owns the state of one screen. Methods take `&self`, so a
//! controller can be shared behind an `Arc` by the task that renders it.

mod user_detail;
mod user_list;

pub use user_detail::UserDetailController;
pub use user_list::UserListController;
