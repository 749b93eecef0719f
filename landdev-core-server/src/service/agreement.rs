use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use landdev_core_api::{derive, AgreementInput, ApiError, ApiResult, DashboardSummary};
use landdev_core_db::models::agreement::{summarize, AgreementModel, AgreementSortField};
use landdev_core_db::repository::{
    AgreementRepository, Create, DeleteById, FindById, FindPage, LoadAll, PageRequest, SortSpec,
    Upsert,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::store_failure;

/// Runs submissions through the derivation pipeline and persists the results
#[derive(Clone)]
pub struct AgreementService {
    repo: Arc<dyn AgreementRepository>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl AgreementService {
    pub fn new(repo: Arc<dyn AgreementRepository>) -> Self {
        Self {
            repo,
            today: local_today,
        }
    }

    /// Uses `today` instead of the local calendar date when deriving.
    pub fn with_clock(repo: Arc<dyn AgreementRepository>, today: fn() -> NaiveDate) -> Self {
        Self { repo, today }
    }

    /// Validates, derives and stores a new agreement under a fresh id.
    pub async fn create(&self, input: AgreementInput) -> ApiResult<AgreementModel> {
        input.validate()?;
        let id = Uuid::new_v4().to_string();
        let derived = derive(&input, (self.today)());
        let model = AgreementModel::assemble(&id, &input, derived, Utc::now())?;

        let stored = self
            .repo
            .create(model)
            .await
            .map_err(|e| store_failure("create_agreement", e))?;
        info!(id = %stored.id, survey_no = %stored.survey_no, "agreement created");
        Ok(stored)
    }

    pub async fn list(
        &self,
        page: PageRequest,
        sort: SortSpec<AgreementSortField>,
    ) -> ApiResult<Vec<AgreementModel>> {
        self.repo
            .find_page(page, sort)
            .await
            .map_err(|e| store_failure("list_agreements", e))
    }

    pub async fn get(&self, id: &str) -> ApiResult<AgreementModel> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| store_failure("get_agreement", e))?
            .ok_or_else(not_found)
    }

    /// Recomputes every derived field from `input` and replaces the record,
    /// creating it under `id` if it does not exist.
    pub async fn update(&self, id: &str, input: AgreementInput) -> ApiResult<AgreementModel> {
        input.validate()?;
        let derived = derive(&input, (self.today)());
        let model = AgreementModel::assemble(id, &input, derived, Utc::now())?;

        let stored = self
            .repo
            .upsert(model)
            .await
            .map_err(|e| store_failure("update_agreement", e))?;
        info!(id = %stored.id, "agreement updated");
        Ok(stored)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let removed = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(|e| store_failure("delete_agreement", e))?;
        if !removed {
            return Err(not_found());
        }
        info!(id, "agreement deleted");
        Ok(())
    }

    pub async fn dashboard(&self) -> ApiResult<DashboardSummary> {
        let all = self
            .repo
            .load_all()
            .await
            .map_err(|e| store_failure("dashboard_summary", e))?;
        Ok(summarize(&all))
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound("Agreement not found".to_string())
}
