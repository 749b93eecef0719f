pub mod repo_impl;
pub mod create;
pub mod delete_by_id;
pub mod find_by_id;
pub mod find_page;
pub mod load_all;
pub mod upsert;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AgreementRepositoryImpl;
