use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding an entity by its ID
///
/// Returns an Option to handle cases where the entity might not exist.
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
