use async_trait::async_trait;

use crate::models::sortable::Sortable;
use crate::repository::pagination::{PageRequest, SortSpec};

/// Generic repository trait for listing one page of entities in a caller-chosen order
///
/// Entities that compare equal on the sort field are ordered by id so that
/// consecutive pages never overlap.
#[async_trait]
pub trait FindPage<T: Sortable>: Send + Sync {
    /// # Arguments
    /// * `page` - Offset and size of the page
    /// * `sort` - Field and direction to order by
    async fn find_page(
        &self,
        page: PageRequest,
        sort: SortSpec<T::SortField>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
