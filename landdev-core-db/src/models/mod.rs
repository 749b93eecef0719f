pub mod agreement;
pub mod auth;
pub mod identifiable;
pub mod sortable;

// Re-exports
pub use agreement::*;
pub use auth::*;
pub use identifiable::*;
pub use sortable::*;
