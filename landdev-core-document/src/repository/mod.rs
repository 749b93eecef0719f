pub mod agreement_repository;
pub mod user_repository;

pub use agreement_repository::AgreementDocumentRepository;
pub use user_repository::UserDocumentRepository;
