//! Product handlers: thin HTTP layer over `ProductService`.

use crate::error::AppError;
use crate::extractors::{JsonBody, RawId};
use crate::handlers::parse_id;
use crate::model::Product;
use crate::response::MessageBody;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

const RESOURCE: &str = "Product";

/// GET /api/produk
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.products.get_all().await?))
}

/// POST /api/produk
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Product>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.products.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/produk/*id
pub async fn read(
    State(state): State<AppState>,
    RawId(id_str): RawId,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    Ok(Json(state.products.get_by_id(id).await?))
}

/// PUT /api/produk/*id
pub async fn update(
    State(state): State<AppState>,
    RawId(id_str): RawId,
    JsonBody(payload): JsonBody<Product>,
) -> Result<Json<Product>, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    Ok(Json(state.products.update(id, payload).await?))
}

/// DELETE /api/produk/*id
pub async fn delete(
    State(state): State<AppState>,
    RawId(id_str): RawId,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    state.products.delete(id).await?;
    Ok(Json(MessageBody::new("Product deleted successfully")))
}
