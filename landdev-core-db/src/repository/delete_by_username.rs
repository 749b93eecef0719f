use async_trait::async_trait;

/// Removes a user. Not reachable over HTTP; used by administration tooling and tests.
#[async_trait]
pub trait DeleteByUsername: Send + Sync {
    async fn delete_by_username(&self, username: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
