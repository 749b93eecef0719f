pub mod repo_impl;
pub mod create;
pub mod delete_by_username;
pub mod find_by_username;

pub use repo_impl::UserRepositoryImpl;
