use axum::extract::State;
use axum::Json;
use landdev_core_api::{ApiResult, DashboardSummary};

use crate::extract::CurrentUser;
use crate::state::AppState;

pub async fn summary(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<DashboardSummary>> {
    Ok(Json(state.agreements.dashboard().await?))
}
