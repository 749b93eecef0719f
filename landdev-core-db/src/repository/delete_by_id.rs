use async_trait::async_trait;

/// Generic repository trait for deleting an entity by its ID
#[async_trait]
pub trait DeleteById: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - The entity existed and was removed
    /// * `Ok(false)` - No entity had that id
    /// * `Err` - An error if the delete could not be executed
    async fn delete_by_id(&self, id: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
