pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the product route tree.
///
/// ```text
/// POST   /product          create
/// GET    /products         list (?page=&limit=)
/// GET    /product/{id}     get_by_id
/// PUT    /product/{id}     update
/// DELETE /product/{id}     delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(product::router())
}
