//! Response body types shared by API handlers.

use catalog_db::models::product::Product;
use serde::Serialize;

/// One page of the product listing.
///
/// Serialized as `{ "products": [...], "page": n, "maxPage": n, "total": n }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: i64,
    pub max_page: i64,
    pub total: i64,
}
