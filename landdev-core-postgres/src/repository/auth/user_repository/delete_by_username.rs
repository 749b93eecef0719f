use landdev_core_db::repository::delete_by_username::DeleteByUsername;
use super::repo_impl::UserRepositoryImpl;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl DeleteByUsername for UserRepositoryImpl {
    async fn delete_by_username(&self, username: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query(r#"DELETE FROM users WHERE username = $1"#)
            .bind(username)
            .execute(&*self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
