use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for replacing an entity, inserting it if absent
///
/// The whole stored entity is replaced by `item`, except for its creation
/// timestamp: when an entity with the same id already exists its original
/// `created_at` is kept. Concurrent upserts of the same id are not
/// coordinated; the last one to commit wins.
#[async_trait]
pub trait Upsert<T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(T)` - The entity as stored
    /// * `Err` - An error if the write could not be executed
    async fn upsert(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
