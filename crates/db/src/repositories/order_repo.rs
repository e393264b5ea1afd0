//! Repository for the `orders` table.
//!
//! Persistence only; admissibility of edits and promotions is decided by
//! the lifecycle engine in `sawmill_core::order` before anything lands
//! here.

use sawmill_core::order::{Order, OrderStatus, ValidatedEdit};
use sawmill_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::order::{CreateOrder, OrderRow};

const COLUMNS: &str =
    "id, customer_id, product_id, quantity, order_date, completion_date, status, notes";

/// Provides persistence for order snapshots.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order. The status is forced to Draft regardless of
    /// caller input.
    pub async fn insert(pool: &SqlitePool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders \
                (customer_id, product_id, quantity, order_date, completion_date, status, notes) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderRow>(&query)
            .bind(input.customer_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .bind(input.order_date)
            .bind(input.completion_date)
            .bind(OrderStatus::Draft.as_str())
            .bind(&input.notes)
            .fetch_one(pool)
            .await?
            .into_order()
    }

    /// Find an order by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = ?");
        match sqlx::query_as::<_, OrderRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        {
            Some(row) => Ok(Some(row.into_order()?)),
            None => Ok(None),
        }
    }

    /// List orders, oldest first. `filter` restricts to the given
    /// statuses; `None` lists everything (the default view). The
    /// production view passes `PRODUCTION_STATUSES`.
    pub async fn list_all(
        pool: &SqlitePool,
        filter: Option<&[OrderStatus]>,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let rows = match filter {
            Some(statuses) if !statuses.is_empty() => {
                let placeholders = vec!["?"; statuses.len()].join(", ");
                let query = format!(
                    "SELECT {COLUMNS} FROM orders WHERE status IN ({placeholders}) ORDER BY id"
                );
                let mut q = sqlx::query_as::<_, OrderRow>(&query);
                for status in statuses {
                    q = q.bind(status.as_str());
                }
                q.fetch_all(pool).await?
            }
            _ => {
                let query = format!("SELECT {COLUMNS} FROM orders ORDER BY id");
                sqlx::query_as::<_, OrderRow>(&query).fetch_all(pool).await?
            }
        };

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    /// Persist a validated edit. Returns `None` when the row no longer
    /// exists (the order was deleted between validation and persistence).
    pub async fn apply_validated_edit(
        pool: &SqlitePool,
        edit: &ValidatedEdit,
    ) -> Result<Option<Order>, sqlx::Error> {
        let order = &edit.order;
        let query = format!(
            "UPDATE orders SET \
                customer_id = ?, product_id = ?, quantity = ?, order_date = ?, \
                completion_date = ?, status = ?, notes = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        match sqlx::query_as::<_, OrderRow>(&query)
            .bind(order.customer_id)
            .bind(order.product_id)
            .bind(order.quantity)
            .bind(order.order_date)
            .bind(order.completion_date)
            .bind(order.status.as_str())
            .bind(&order.notes)
            .bind(order.id)
            .fetch_optional(pool)
            .await?
        {
            Some(row) => Ok(Some(row.into_order()?)),
            None => Ok(None),
        }
    }

    /// Persist a status change (the guided promotion path). Returns
    /// `None` when the row no longer exists.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("UPDATE orders SET status = ? WHERE id = ? RETURNING {COLUMNS}");
        match sqlx::query_as::<_, OrderRow>(&query)
            .bind(status.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await?
        {
            Some(row) => Ok(Some(row.into_order()?)),
            None => Ok(None),
        }
    }

    /// Delete an order by ID. Returns true if a row was removed;
    /// deleting a missing id is not an error.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
