use async_trait::async_trait;

/// Generic repository trait for loading every stored entity
///
/// The result is a snapshot taken without isolation from concurrent writes.
#[async_trait]
pub trait LoadAll<T>: Send + Sync {
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
