//! Category CRUD routes. Everything after `/categories/` is the id, so empty, trailing-slash
//! and multi-segment ids reach the handlers and are rejected as malformed.

use crate::handlers::category::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn category_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list).post(create))
        .route("/categories/", get(read).put(update).delete(delete_handler))
        .route("/categories/*id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
