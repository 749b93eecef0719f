use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use landdev_core_api::{AgreementInput, ApiResult, MessageResponse};
use landdev_core_db::models::agreement::{AgreementModel, AgreementSortField};
use landdev_core_db::repository::{PageRequest, SortOrder, SortSpec};
use serde::Deserialize;

use crate::extract::{CurrentUser, JsonBody, QueryParams};
use crate::state::AppState;

/// `GET /agreements` query string
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
    pub sort_by: Option<String>,
    pub sort_order: Option<i32>,
}

impl ListQuery {
    pub fn page(&self) -> PageRequest {
        let default = PageRequest::default();
        PageRequest::new(
            self.limit.unwrap_or(default.limit),
            self.skip.unwrap_or(default.offset),
        )
    }

    pub fn sort(&self) -> ApiResult<SortSpec<AgreementSortField>> {
        let field = match self.sort_by.as_deref() {
            Some(name) => name.parse()?,
            None => AgreementSortField::default(),
        };
        let order = match self.sort_order {
            Some(value) => SortOrder::from_wire(value)?,
            None => SortOrder::default(),
        };
        Ok(SortSpec::new(field, order))
    }
}

pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    JsonBody(input): JsonBody<AgreementInput>,
) -> ApiResult<(StatusCode, Json<AgreementModel>)> {
    let created = state.agreements.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    QueryParams(query): QueryParams<ListQuery>,
) -> ApiResult<Json<Vec<AgreementModel>>> {
    let sort = query.sort()?;
    Ok(Json(state.agreements.list(query.page(), sort).await?))
}

pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AgreementModel>> {
    Ok(Json(state.agreements.get(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<AgreementInput>,
) -> ApiResult<Json<AgreementModel>> {
    Ok(Json(state.agreements.update(&id, input).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.agreements.delete(&id).await?;
    Ok(Json(MessageResponse::new("Agreement deleted successfully")))
}
