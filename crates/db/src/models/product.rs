//! Product models and DTOs.

use sawmill_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Free-form classification; `type` in the schema.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}
