use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    /// Category name reported to clients. Database failures are reported as
    /// internal errors.
    pub fn category(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "ValidationError",
            Self::Unauthorized(_) => "Unauthorized",
            Self::Conflict(_) => "Conflict",
            Self::NotFound(_) => "NotFound",
            Self::InternalError(_) | Self::DatabaseError(_) => "InternalError",
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::ValidationError(msg)
            | Self::Unauthorized(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg) => msg.clone(),
            Self::InternalError(_) | Self::DatabaseError(_) => "Internal server error".to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

#[cfg(feature = "axum")]
mod response {
    use super::ApiError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl ApiError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
                Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                Self::Conflict(_) => StatusCode::CONFLICT,
                Self::NotFound(_) => StatusCode::NOT_FOUND,
                Self::InternalError(_) | Self::DatabaseError(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    impl IntoResponse for ApiError {
        fn into_response(self) -> Response {
            if matches!(self, Self::InternalError(_) | Self::DatabaseError(_)) {
                tracing::error!(error = %self, "request failed");
            }
            let body = serde_json::json!({
                "category": self.category(),
                "detail": self.public_message(),
            });
            (self.status_code(), Json(body)).into_response()
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_details_are_not_public() {
        let err = ApiError::DatabaseError("connection refused on 10.0.0.4".into());
        assert_eq!(err.category(), "InternalError");
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = ApiError::NotFound("Agreement not found".into());
        assert_eq!(err.category(), "NotFound");
        assert_eq!(err.public_message(), "Agreement not found");
    }
}
