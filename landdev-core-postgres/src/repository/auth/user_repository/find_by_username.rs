use landdev_core_db::models::auth::UserModel;
use landdev_core_db::repository::find_by_username::FindByUsername;
use crate::utils::TryFromRow;
use super::repo_impl::UserRepositoryImpl;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl FindByUsername for UserRepositoryImpl {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(UserModel::try_from_row).transpose()
    }
}
