pub mod create;
pub mod delete_by_id;
pub mod delete_by_username;
pub mod error;
pub mod find_by_id;
pub mod find_by_username;
pub mod find_page;
pub mod load_all;
pub mod pagination;
pub mod stores;
pub mod upsert;

// Re-exports
pub use create::*;
pub use delete_by_id::*;
pub use delete_by_username::*;
pub use error::*;
pub use find_by_id::*;
pub use find_by_username::*;
pub use find_page::*;
pub use load_all::*;
pub use pagination::*;
pub use stores::*;
pub use upsert::*;
