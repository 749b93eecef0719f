use landdev_core_db::models::agreement::AgreementModel;
use landdev_core_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use super::repo_impl::AgreementRepositoryImpl;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl FindById<AgreementModel> for AgreementRepositoryImpl {
    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<AgreementModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}

impl AgreementRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &AgreementRepositoryImpl,
        id: &str,
    ) -> Result<Option<AgreementModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(r#"SELECT * FROM agreements WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(AgreementModel::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use landdev_core_db::repository::create::Create;
    use landdev_core_db::repository::delete_by_id::DeleteById;
    use landdev_core_db::repository::find_by_id::FindById;
    use rust_decimal::Decimal;
    use serial_test::serial;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::create_test_agreement;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_id_round_trips_decimals() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let agreement_repo = &ctx.repos().agreement_repository;

        let id = Uuid::new_v4().to_string();
        let created = agreement_repo
            .create(create_test_agreement(&id, "S-201", "0.52.18"))
            .await?;

        let loaded = agreement_repo.find_by_id(&id).await?.expect("agreement should exist");
        assert_eq!(loaded.area_in_guntas, Decimal::new(5218, 2));
        assert_eq!(loaded.total_rent, created.total_rent);
        assert_eq!(loaded.development_end_date, created.development_end_date);

        assert!(agreement_repo.find_by_id(&Uuid::new_v4().to_string()).await?.is_none());

        agreement_repo.delete_by_id(&id).await?;
        Ok(())
    }
}
