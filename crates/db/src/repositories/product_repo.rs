//! Repository for the `products` table.

use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row with its assigned id.
    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Product, sqlx::Error> {
        let query = format!("INSERT INTO products (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored products.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;
        Ok(total)
    }

    /// Fetch up to `limit` products after skipping `offset`, in insertion order.
    pub async fn list_page(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column of an existing product.
    ///
    /// Returns `false` if the row no longer exists.
    pub async fn save(pool: &SqlitePool, product: &Product) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE products SET name = ? WHERE id = ?")
            .bind(&product.name)
            .bind(product.id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a product by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
