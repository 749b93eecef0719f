use landdev_core_db::models::auth::UserModel;
use landdev_core_db::repository::create::Create;
use crate::utils::{map_unique_violation, TryFromRow};
use super::repo_impl::UserRepositoryImpl;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl Create<UserModel> for UserRepositoryImpl {
    async fn create(&self, item: UserModel) -> Result<UserModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

impl UserRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &UserRepositoryImpl,
        item: UserModel,
    ) -> Result<UserModel, Box<dyn Error + Send + Sync>> {
        let mut tx = repo.pool.begin().await?;
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(item.username.as_str())
        .bind(item.password_hash.as_str())
        .bind(item.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, item.username.as_str()))?;
        tx.commit().await?;

        UserModel::try_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use landdev_core_db::models::auth::UserModel;
    use landdev_core_db::repository::create::Create;
    use landdev_core_db::repository::delete_by_username::DeleteByUsername;
    use landdev_core_db::repository::error::is_duplicate_key;
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_create_rejects_taken_username() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let user_repo = &ctx.repos().user_repository;

        let username = format!("user-{}", Uuid::new_v4());
        let saved = user_repo.create(UserModel::new(&username, "$2b$04$hash")?).await?;
        assert_eq!(saved.username.as_str(), username);

        let err = user_repo
            .create(UserModel::new(&username, "$2b$04$other")?)
            .await
            .unwrap_err();
        assert!(is_duplicate_key(err.as_ref()));

        user_repo.delete_by_username(&username).await?;
        Ok(())
    }
}
