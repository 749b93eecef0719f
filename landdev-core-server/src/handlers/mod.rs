pub mod agreements;
pub mod auth;
pub mod dashboard;

use axum::Json;
use landdev_core_api::MessageResponse;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Land Agreement Management API"))
}

pub async fn health() -> &'static str {
    "ok"
}
