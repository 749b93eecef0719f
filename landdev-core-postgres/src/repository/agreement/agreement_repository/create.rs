use landdev_core_db::models::agreement::AgreementModel;
use landdev_core_db::repository::create::Create;
use crate::utils::{map_unique_violation, TryFromRow};
use super::repo_impl::{bind_agreement, AgreementRepositoryImpl, INSERT_AGREEMENT};
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl Create<AgreementModel> for AgreementRepositoryImpl {
    async fn create(
        &self,
        item: AgreementModel,
    ) -> Result<AgreementModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

impl AgreementRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &AgreementRepositoryImpl,
        item: AgreementModel,
    ) -> Result<AgreementModel, Box<dyn Error + Send + Sync>> {
        let query = format!("{INSERT_AGREEMENT} RETURNING *");

        let mut tx = repo.pool.begin().await?;
        let row = bind_agreement(sqlx::query(&query), &item)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, item.id.as_str()))?;
        tx.commit().await?;

        AgreementModel::try_from_row(&row)
    }
}
