use landdev_core_db::repository::delete_by_id::DeleteById;
use super::repo_impl::AgreementRepositoryImpl;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl DeleteById for AgreementRepositoryImpl {
    async fn delete_by_id(&self, id: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::delete_by_id_impl(self, id).await
    }
}

impl AgreementRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &AgreementRepositoryImpl,
        id: &str,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut tx = repo.pool.begin().await?;
        let result = sqlx::query(r#"DELETE FROM agreements WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
