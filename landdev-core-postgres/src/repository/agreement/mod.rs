pub mod agreement_repository;

pub use agreement_repository::AgreementRepositoryImpl;
