//! Repository for the `products` table.

use sawmill_core::catalog::DEFAULT_PRODUCT_NAMES;
use sawmill_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::product::{CreateProduct, Product};

const COLUMNS: &str = "id, name, type";

/// Provides CRUD operations for products plus the one-time seed.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product. The `name` column is UNIQUE; duplicates
    /// surface as a constraint violation.
    pub async fn create(pool: &SqlitePool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!("INSERT INTO products (name, type) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.product_type)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ?");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products, oldest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Delete a product by ID. Returns true if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert the default product catalog if absent. Idempotent: keyed by
    /// the unique `name` column, so reruns are no-ops.
    pub async fn seed_defaults(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for name in DEFAULT_PRODUCT_NAMES {
            let result = sqlx::query("INSERT OR IGNORE INTO products (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await?;
            inserted += result.rows_affected();
        }
        if inserted > 0 {
            tracing::info!(inserted, "Seeded default products");
        }
        Ok(inserted)
    }
}
