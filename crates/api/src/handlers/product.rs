//! Handlers for the product resource.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::product::validate_product_name;
use catalog_core::types::DbId;
use catalog_db::models::product::{Product, ProductPatch};
use catalog_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::ProductPage;
use crate::state::AppState;

const ENTITY: &str = "Product";

/// POST /product
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let name = decode_patch(&body)?.into_name();
    validate_product_name(&name)?;

    let product = ProductRepo::create(&state.pool, &name).await?;

    tracing::info!(product_id = product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products?page=&limit=
///
/// The query is taken as raw pairs so repeated or malformed parameters fall
/// back to defaults instead of rejecting the request.
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<ProductPage>> {
    let request = PageParams::from_pairs(pairs).resolve();

    let total = ProductRepo::count(&state.pool).await?;
    let products = ProductRepo::list_page(&state.pool, request.limit, request.offset()).await?;

    Ok(Json(ProductPage {
        products,
        page: request.page,
        max_page: request.max_page(total),
        total,
    }))
}

/// GET /product/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = find_existing(&state, &raw_id).await?;
    Ok(Json(product))
}

/// PUT /product/{id}
///
/// Applies the fields present in the body onto the stored product. Responds
/// 204 but still carries the updated product as its body, which existing
/// clients of this endpoint expect.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let mut product = find_existing(&state, &raw_id).await?;

    let patch = decode_patch(&body)?;
    product.apply(patch);
    validate_product_name(&product.name)?;

    if !ProductRepo::save(&state.pool, &product).await? {
        return Err(not_found(product.id));
    }

    tracing::info!(product_id = product.id, "Product updated");

    Ok((StatusCode::NO_CONTENT, Json(product)))
}

/// DELETE /product/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;

    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Look up the product named by a raw `{id}` path segment.
async fn find_existing(state: &AppState, raw_id: &str) -> AppResult<Product> {
    let id = parse_id(raw_id)?;

    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Parse a `{id}` path segment.
///
/// Non-digit segments do not match the route at all. Digit strings too large
/// for [`DbId`] saturate to `DbId::MAX`, past the last id SQLite assigns.
fn parse_id(raw: &str) -> AppResult<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::UnknownRoute);
    }
    Ok(raw.parse().unwrap_or(DbId::MAX))
}

/// Decode the first JSON value in the body; anything after it is ignored.
fn decode_patch(body: &[u8]) -> AppResult<ProductPatch> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<ProductPatch>()
        .next()
    {
        Some(Ok(patch)) => Ok(patch),
        Some(Err(err)) => Err(AppError::BadRequest(err.to_string())),
        None => Err(AppError::BadRequest("EOF".to_string())),
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
