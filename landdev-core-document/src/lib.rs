pub mod collection;
pub mod document_repositories;
pub mod repository;

pub use collection::Collection;
pub use document_repositories::{DocumentRepositories, DocumentStoreRepositories};
pub use repository::{AgreementDocumentRepository, UserDocumentRepository};
