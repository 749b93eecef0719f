use landdev_core_db::models::agreement::AgreementModel;
use landdev_core_db::repository::load_all::LoadAll;
use crate::utils::TryFromRow;
use super::repo_impl::AgreementRepositoryImpl;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl LoadAll<AgreementModel> for AgreementRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<AgreementModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}

impl AgreementRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &AgreementRepositoryImpl,
    ) -> Result<Vec<AgreementModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM agreements"#)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(AgreementModel::try_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use landdev_core_db::models::agreement::summarize;
    use landdev_core_db::repository::create::Create;
    use landdev_core_db::repository::delete_by_id::DeleteById;
    use landdev_core_db::repository::load_all::LoadAll;
    use serial_test::serial;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::create_test_agreement;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_load_all_feeds_dashboard() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let agreement_repo = &ctx.repos().agreement_repository;

        let before = summarize(&agreement_repo.load_all().await?);

        let id = Uuid::new_v4().to_string();
        let created = agreement_repo
            .create(create_test_agreement(&id, "S-601", "1.00.0"))
            .await?;

        let after = summarize(&agreement_repo.load_all().await?);
        assert_eq!(after.total_land_count, before.total_land_count + 1);
        assert_eq!(
            after.total_area_guntas,
            before.total_area_guntas + created.area_in_guntas
        );

        agreement_repo.delete_by_id(&id).await?;
        Ok(())
    }
}
