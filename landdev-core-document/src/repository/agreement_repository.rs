use async_trait::async_trait;
use landdev_core_db::models::agreement::{AgreementModel, AgreementSortField};
use landdev_core_db::models::sortable::Sortable;
use landdev_core_db::repository::error::DuplicateKey;
use landdev_core_db::repository::pagination::{PageRequest, SortOrder, SortSpec};
use landdev_core_db::repository::{Create, DeleteById, FindById, FindPage, LoadAll, Upsert};
use serde_json::Value;
use std::error::Error;
use std::sync::Arc;

use crate::collection::{from_document, to_document, Collection};

/// Agreements stored as JSON documents keyed by id
pub struct AgreementDocumentRepository {
    agreements: Arc<Collection>,
}

impl AgreementDocumentRepository {
    pub fn new(agreements: Arc<Collection>) -> Self {
        Self { agreements }
    }
}

#[async_trait]
impl Create<AgreementModel> for AgreementDocumentRepository {
    async fn create(
        &self,
        item: AgreementModel,
    ) -> Result<AgreementModel, Box<dyn Error + Send + Sync>> {
        let document = to_document(&item)?;
        if !self.agreements.insert_new(item.id.as_str(), document) {
            return Err(Box::new(DuplicateKey(item.id.as_str().to_string())));
        }
        tracing::debug!(collection = self.agreements.name(), id = %item.id, "document inserted");
        Ok(item)
    }
}

#[async_trait]
impl FindById<AgreementModel> for AgreementDocumentRepository {
    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<AgreementModel>, Box<dyn Error + Send + Sync>> {
        self.agreements.get(id).map(from_document).transpose()
    }
}

#[async_trait]
impl FindPage<AgreementModel> for AgreementDocumentRepository {
    async fn find_page(
        &self,
        page: PageRequest,
        sort: SortSpec<AgreementSortField>,
    ) -> Result<Vec<AgreementModel>, Box<dyn Error + Send + Sync>> {
        let mut all = self.load_all().await?;

        all.sort_by(|a, b| {
            let by_field = a.compare_by(b, sort.field);
            let by_field = match sort.order {
                SortOrder::Ascending => by_field,
                SortOrder::Descending => by_field.reverse(),
            };
            by_field.then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });

        Ok(all.into_iter().skip(page.offset).take(page.limit).collect())
    }
}

#[async_trait]
impl Upsert<AgreementModel> for AgreementDocumentRepository {
    async fn upsert(
        &self,
        item: AgreementModel,
    ) -> Result<AgreementModel, Box<dyn Error + Send + Sync>> {
        let mut document = to_document(&item)?;

        let stored = self.agreements.write(|documents| {
            let existing_created_at = documents
                .get(item.id.as_str())
                .and_then(|existing| existing.get("created_at"))
                .cloned();
            if let (Some(created_at), Some(fields)) = (existing_created_at, document.as_object_mut()) {
                fields.insert("created_at".to_string(), created_at);
            }
            documents.insert(item.id.as_str().to_string(), document.clone());
            document
        });

        tracing::debug!(collection = self.agreements.name(), id = %item.id, "document replaced");
        from_document(stored)
    }
}

#[async_trait]
impl DeleteById for AgreementDocumentRepository {
    async fn delete_by_id(&self, id: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self.agreements.remove(id))
    }
}

#[async_trait]
impl LoadAll<AgreementModel> for AgreementDocumentRepository {
    async fn load_all(&self) -> Result<Vec<AgreementModel>, Box<dyn Error + Send + Sync>> {
        self.agreements
            .snapshot()
            .into_iter()
            .map(from_document::<AgreementModel>)
            .collect::<Result<Vec<_>, _>>()
    }
}

#[cfg(test)]
impl AgreementDocumentRepository {
    /// The stored JSON document, as written.
    pub fn raw_document(&self, id: &str) -> Option<Value> {
        self.agreements.get(id)
    }
}
