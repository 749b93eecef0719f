use async_trait::async_trait;
use landdev_core_db::models::auth::UserModel;
use landdev_core_db::repository::error::DuplicateKey;
use landdev_core_db::repository::{Create, DeleteByUsername, FindByUsername};
use std::error::Error;
use std::sync::Arc;

use crate::collection::{from_document, to_document, Collection};

/// Users stored as JSON documents keyed by username
pub struct UserDocumentRepository {
    users: Arc<Collection>,
}

impl UserDocumentRepository {
    pub fn new(users: Arc<Collection>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl Create<UserModel> for UserDocumentRepository {
    async fn create(&self, item: UserModel) -> Result<UserModel, Box<dyn Error + Send + Sync>> {
        let document = to_document(&item)?;
        if !self.users.insert_new(item.username.as_str(), document) {
            return Err(Box::new(DuplicateKey(item.username.as_str().to_string())));
        }
        Ok(item)
    }
}

#[async_trait]
impl FindByUsername for UserDocumentRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        self.users.get(username).map(from_document).transpose()
    }
}

#[async_trait]
impl DeleteByUsername for UserDocumentRepository {
    async fn delete_by_username(&self, username: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Ok(self.users.remove(username))
    }
}
