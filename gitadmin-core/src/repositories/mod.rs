//! Repository implementations

mod remote_user_repository;

pub use remote_user_repository::RemoteUserRepository;
