use thiserror::Error;

/// Returned by a create whose unique key is already taken
#[derive(Error, Debug)]
#[error("Duplicate key: {0}")]
pub struct DuplicateKey(pub String);

/// Whether a repository error reports a duplicate unique key
pub fn is_duplicate_key(err: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    err.downcast_ref::<DuplicateKey>().is_some()
}
