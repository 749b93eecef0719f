use landdev_core_db::models::agreement::{AgreementModel, AgreementSortField};
use landdev_core_db::repository::find_page::FindPage;
use landdev_core_db::repository::pagination::{PageRequest, SortSpec};
use crate::utils::TryFromRow;
use super::repo_impl::AgreementRepositoryImpl;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
impl FindPage<AgreementModel> for AgreementRepositoryImpl {
    async fn find_page(
        &self,
        page: PageRequest,
        sort: SortSpec<AgreementSortField>,
    ) -> Result<Vec<AgreementModel>, Box<dyn Error + Send + Sync>> {
        Self::find_page_impl(self, page, sort).await
    }
}

impl AgreementRepositoryImpl {
    pub(super) async fn find_page_impl(
        repo: &AgreementRepositoryImpl,
        page: PageRequest,
        sort: SortSpec<AgreementSortField>,
    ) -> Result<Vec<AgreementModel>, Box<dyn Error + Send + Sync>> {
        // Column names come from the closed AgreementSortField set, never from input.
        let query = format!(
            "SELECT * FROM agreements ORDER BY {} {}, id ASC LIMIT $1 OFFSET $2",
            sort.field.as_str(),
            sort.order.as_sql(),
        );

        let rows = sqlx::query(&query)
            .bind(sql_bound(page.limit))
            .bind(sql_bound(page.offset))
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(AgreementModel::try_from_row).collect()
    }
}

/// LIMIT/OFFSET take a BIGINT; anything wider means "no bound".
fn sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
