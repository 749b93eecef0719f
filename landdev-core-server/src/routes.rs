use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, agreements, auth, dashboard};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/agreements", post(agreements::create).get(agreements::list))
        .route(
            "/api/agreements/{id}",
            get(agreements::get)
                .put(agreements::update)
                .delete(agreements::delete),
        )
        .route("/api/dashboard/summary", get(dashboard::summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the given origins. An empty list allows any origin.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins = origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_ok());
        assert!(cors_layer(&[]).is_ok());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
    }
}
