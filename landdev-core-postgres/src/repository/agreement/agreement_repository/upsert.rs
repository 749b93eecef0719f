use landdev_core_db::models::agreement::AgreementModel;
use landdev_core_db::repository::upsert::Upsert;
use crate::utils::TryFromRow;
use super::repo_impl::{bind_agreement, AgreementRepositoryImpl, INSERT_AGREEMENT};
use async_trait::async_trait;
use std::error::Error;

/// Every column except `id` and `created_at` is replaced on conflict.
const ON_CONFLICT_REPLACE: &str = r#"
                ON CONFLICT (id) DO UPDATE SET
                    survey_no = EXCLUDED.survey_no, firm_name = EXCLUDED.firm_name, land_owner = EXCLUDED.land_owner,
                    area = EXCLUDED.area, area_in_guntas = EXCLUDED.area_in_guntas, doc_no_1 = EXCLUDED.doc_no_1,
                    agreement_date = EXCLUDED.agreement_date, development_months = EXCLUDED.development_months, development_end_date = EXCLUDED.development_end_date,
                    possession_status = EXCLUDED.possession_status, rent_per_sqft = EXCLUDED.rent_per_sqft, free_area_bu = EXCLUDED.free_area_bu,
                    free_area_cp = EXCLUDED.free_area_cp, total_months = EXCLUDED.total_months, total_rent = EXCLUDED.total_rent,
                    agreement_value = EXCLUDED.agreement_value, deposit_da = EXCLUDED.deposit_da, stamp_duty_1 = EXCLUDED.stamp_duty_1,
                    regi_dd_1 = EXCLUDED.regi_dd_1, handling_charges_1 = EXCLUDED.handling_charges_1, adjudication_1 = EXCLUDED.adjudication_1,
                    legal_expenses_1 = EXCLUDED.legal_expenses_1, doc_no_2 = EXCLUDED.doc_no_2, date_2 = EXCLUDED.date_2,
                    stamp_duty_2 = EXCLUDED.stamp_duty_2, regi_dd_2 = EXCLUDED.regi_dd_2, handling_charges_2 = EXCLUDED.handling_charges_2,
                    legal_expenses_2 = EXCLUDED.legal_expenses_2, doc_no_3 = EXCLUDED.doc_no_3, date_3 = EXCLUDED.date_3,
                    stamp_duty_3 = EXCLUDED.stamp_duty_3, regi_dd_3 = EXCLUDED.regi_dd_3, handling_charges_3 = EXCLUDED.handling_charges_3,
                    agreement_1_expense = EXCLUDED.agreement_1_expense, agreement_2_expense = EXCLUDED.agreement_2_expense, agreement_3_expense = EXCLUDED.agreement_3_expense,
                    total_agreement_expense = EXCLUDED.total_agreement_expense, real_value_per_acre = EXCLUDED.real_value_per_acre
                RETURNING *
                "#;

#[async_trait]
impl Upsert<AgreementModel> for AgreementRepositoryImpl {
    async fn upsert(
        &self,
        item: AgreementModel,
    ) -> Result<AgreementModel, Box<dyn Error + Send + Sync>> {
        Self::upsert_impl(self, item).await
    }
}

impl AgreementRepositoryImpl {
    pub(super) async fn upsert_impl(
        repo: &AgreementRepositoryImpl,
        item: AgreementModel,
    ) -> Result<AgreementModel, Box<dyn Error + Send + Sync>> {
        let query = format!("{INSERT_AGREEMENT} {ON_CONFLICT_REPLACE}");

        let mut tx = repo.pool.begin().await?;
        let row = bind_agreement(sqlx::query(&query), &item)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        AgreementModel::try_from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use chrono::{Duration, Utc};
    use landdev_core_db::repository::create::Create;
    use landdev_core_db::repository::delete_by_id::DeleteById;
    use landdev_core_db::repository::find_by_id::FindById;
    use landdev_core_db::repository::upsert::Upsert;
    use serial_test::serial;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::create_test_agreement;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_upsert_replaces_fields_and_keeps_created_at() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let agreement_repo = &ctx.repos().agreement_repository;

        let id = Uuid::new_v4().to_string();
        let original = agreement_repo
            .create(create_test_agreement(&id, "S-401", "1.00.0"))
            .await?;

        let mut replacement = create_test_agreement(&id, "S-401-B", "2.00.0");
        replacement.created_at = Utc::now() + Duration::days(30);
        let stored = agreement_repo.upsert(replacement).await?;

        assert_eq!(stored.survey_no.as_str(), "S-401-B");
        assert_eq!(stored.area.as_str(), "2.00.0");
        assert_eq!(
            stored.created_at.timestamp_micros(),
            original.created_at.timestamp_micros()
        );

        let loaded = agreement_repo.find_by_id(&id).await?.expect("agreement should exist");
        assert_eq!(loaded.survey_no.as_str(), "S-401-B");

        agreement_repo.delete_by_id(&id).await?;
        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_upsert_inserts_when_absent() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let agreement_repo = &ctx.repos().agreement_repository;

        let id = Uuid::new_v4().to_string();
        agreement_repo.upsert(create_test_agreement(&id, "S-402", "0.20.0")).await?;
        assert!(agreement_repo.find_by_id(&id).await?.is_some());

        agreement_repo.delete_by_id(&id).await?;
        Ok(())
    }
}
