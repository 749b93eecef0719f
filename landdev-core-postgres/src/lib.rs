pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::{PostgresRepositories, StoreRepositories};
pub use repository::agreement::AgreementRepositoryImpl;
pub use repository::auth::UserRepositoryImpl;
pub use repository::db_init::{cleanup_database, init_database};

#[cfg(test)]
pub mod test_helper;
