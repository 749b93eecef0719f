use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::agreement::AgreementRepositoryImpl;
use crate::repository::auth::UserRepositoryImpl;

/// Owns the connection pool and hands out repositories bound to it
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create every repository over the shared pool
    ///
    /// Each write opens its own transaction, so repositories may be used
    /// concurrently from any number of request handlers.
    pub fn create_all_repositories(&self) -> StoreRepositories {
        StoreRepositories {
            agreement_repository: Arc::new(AgreementRepositoryImpl::new(self.pool.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(self.pool.clone())),
        }
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub struct StoreRepositories {
    pub agreement_repository: Arc<AgreementRepositoryImpl>,
    pub user_repository: Arc<UserRepositoryImpl>,
}
