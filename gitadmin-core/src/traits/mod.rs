//! Abstractions the core depends on

mod navigation;
mod user_repository;

pub use navigation::ProfileNavigation;
pub use user_repository::UserRepository;
