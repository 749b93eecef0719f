pub mod agreement;
pub mod auth;

pub use agreement::AgreementService;
pub use auth::AuthService;

use landdev_core_api::ApiError;
use std::error::Error;

/// Logs a repository failure and converts it to a `DatabaseError`.
pub(crate) fn store_failure(operation: &'static str, err: Box<dyn Error + Send + Sync>) -> ApiError {
    tracing::error!(operation, error = %err, "store operation failed");
    ApiError::DatabaseError(err.to_string())
}
