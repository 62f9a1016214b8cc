//! Route tables and the assembled application router.

mod category;
mod common;
mod product;

pub use category::category_routes;
pub use common::common_routes;
pub use product::product_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are refused before decoding.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full router: `/health`, `/api/categories[/*id]`, `/api/produk[/*id]`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(category_routes(state.clone()))
        .merge(product_routes(state));

    Router::new()
        .merge(common_routes())
        .nest("/api", api)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
