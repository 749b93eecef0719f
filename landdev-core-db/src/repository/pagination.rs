use landdev_core_api::{ApiError, ApiResult};

/// Pagination request parameters for offset-based pagination
///
/// # Example
/// ```
/// use landdev_core_db::repository::pagination::PageRequest;
///
/// let page_request = PageRequest::new(20, 0); // First page with 20 items
/// let next_page = PageRequest::new(20, 20); // Second page
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `limit` - Maximum number of items to return
    /// * `offset` - Number of items to skip
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Parses the wire form: `1` ascending, `-1` descending.
    pub fn from_wire(value: i32) -> ApiResult<Self> {
        match value {
            1 => Ok(SortOrder::Ascending),
            -1 => Ok(SortOrder::Descending),
            other => Err(ApiError::ValidationError(format!(
                "sort_order must be 1 or -1, got {other}"
            ))),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Field and direction a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F> SortSpec<F> {
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }
}
