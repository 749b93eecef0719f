use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use landdev_core_api::{
    ApiResult, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest, TokenResponse,
};

use crate::extract::JsonBody;
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let message = state.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    Ok(Json(state.auth.login(request).await?))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ForgotPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(state.auth.forgot_password(request).await?))
}
