use std::cmp::Ordering;

/// Trait for entities that can be listed in an order chosen by the caller
pub trait Sortable {
    /// Closed set of fields the entity can be ordered by
    type SortField: Copy + Send + Sync + 'static;

    /// Compares two entities on a single field
    fn compare_by(&self, other: &Self, field: Self::SortField) -> Ordering;
}
