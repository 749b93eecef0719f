use async_trait::async_trait;

use crate::models::auth::UserModel;

#[async_trait]
pub trait FindByUsername: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, Box<dyn std::error::Error + Send + Sync>>;
}
