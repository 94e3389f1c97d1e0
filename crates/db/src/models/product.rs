//! Product entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    /// Omitted from JSON output when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Product {
    /// Overwrite the fields present in `patch`, keeping the rest.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// Request body for creating or updating a product.
///
/// Unknown fields, including a client-supplied `id`, are ignored. A `null`
/// name is treated the same as a missing one. The capitalised key spellings
/// sent by existing clients are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(alias = "Name", alias = "NAME")]
    pub name: Option<String>,
}

impl ProductPatch {
    /// Name for a newly created product; a missing name becomes empty.
    pub fn into_name(self) -> String {
        self.name.unwrap_or_default()
    }
}
