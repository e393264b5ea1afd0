//! Repository for the `customers` table.

use sawmill_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::customer::{CreateCustomer, Customer};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer.
    pub async fn create(pool: &SqlitePool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!("INSERT INTO customers (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = ?");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all customers, oldest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Delete a customer by ID. Returns true if a row was removed;
    /// deleting a missing id is not an error.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
