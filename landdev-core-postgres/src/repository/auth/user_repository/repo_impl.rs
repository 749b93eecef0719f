use landdev_core_db::models::auth::UserModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct UserRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl UserRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for UserModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserModel {
            id: row.try_get("id")?,
            username: get_heapless_string(row, "username")?,
            password_hash: get_heapless_string(row, "password_hash")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
