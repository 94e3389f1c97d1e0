//! Route definitions for the product resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// `{id}` is matched as a plain segment; handlers reject non-digit ids as an
/// unknown route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", post(product::create))
        .route("/products", get(product::list))
        .route(
            "/product/{id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete),
        )
}
