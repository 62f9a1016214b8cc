//! Category handlers: list, create, read, update, delete over the in-memory store.

use crate::error::AppError;
use crate::extractors::{JsonBody, RawId};
use crate::handlers::parse_id;
use crate::model::Category;
use crate::response::MessageBody;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

const RESOURCE: &str = "Categories";

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.categories.list())
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Category>,
) -> impl IntoResponse {
    let created = state.categories.create(payload);
    (StatusCode::CREATED, Json(created))
}

/// GET /api/categories/*id
pub async fn read(
    State(state): State<AppState>,
    RawId(id_str): RawId,
) -> Result<Json<Category>, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    Ok(Json(state.categories.get(id)?))
}

/// PUT /api/categories/*id
pub async fn update(
    State(state): State<AppState>,
    RawId(id_str): RawId,
    JsonBody(payload): JsonBody<Category>,
) -> Result<Json<Category>, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    Ok(Json(state.categories.update(id, payload)?))
}

/// DELETE /api/categories/*id
pub async fn delete(
    State(state): State<AppState>,
    RawId(id_str): RawId,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    state.categories.delete(id)?;
    Ok(Json(MessageBody::new("sukses delete")))
}
