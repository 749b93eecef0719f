use async_trait::async_trait;

/// Generic repository trait for creating a single entity
///
/// The create is performed as one unit: either the entity is fully stored or
/// nothing is. Creating an entity whose unique key already exists fails with a
/// [`DuplicateKey`](crate::repository::error::DuplicateKey) error.
///
/// # Example
/// ```ignore
/// impl Create<AgreementModel> for AgreementRepositoryImpl {
///     async fn create(&self, item: AgreementModel) -> Result<AgreementModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<T>: Send + Sync {
    /// Save a new item
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity
    /// * `Err` - An error if the write could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
