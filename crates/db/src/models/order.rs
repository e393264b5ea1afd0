//! Order row mapping and DTOs.
//!
//! The domain [`Order`] lives in `sawmill-core` so the lifecycle engine
//! stays free of sqlx; [`OrderRow`] is the raw row with `status` as the
//! stored TEXT, converted on the way out.

use chrono::NaiveDate;
use sawmill_core::order::{Order, OrderStatus};
use sawmill_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A raw row from the `orders` table.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: DbId,
    pub customer_id: Option<DbId>,
    pub product_id: Option<DbId>,
    pub quantity: Option<f64>,
    pub order_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub status: String,
    pub notes: Option<String>,
}

impl OrderRow {
    /// Convert into the domain snapshot. An unknown stored status is a
    /// decode error, never a panic.
    pub fn into_order(self) -> Result<Order, sqlx::Error> {
        let status = OrderStatus::parse(&self.status).ok_or_else(|| {
            sqlx::Error::Decode(format!("unknown order status '{}'", self.status).into())
        })?;

        Ok(Order {
            id: self.id,
            customer_id: self.customer_id,
            product_id: self.product_id,
            quantity: self.quantity,
            order_date: self.order_date,
            completion_date: self.completion_date,
            status,
            notes: self.notes,
        })
    }
}

/// DTO for creating a new order. Any `status` supplied by the caller is
/// ignored; new orders always start in Draft.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub customer_id: Option<DbId>,
    pub product_id: Option<DbId>,
    pub quantity: Option<f64>,
    pub order_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

/// Full proposed snapshot from the edit form.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrder {
    pub customer_id: Option<DbId>,
    pub product_id: Option<DbId>,
    pub quantity: Option<f64>,
    pub order_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub status: OrderStatus,
    pub notes: Option<String>,
}

impl UpdateOrder {
    /// Build the proposed snapshot for the lifecycle engine.
    pub fn into_proposed(self, id: DbId) -> Order {
        Order {
            id,
            customer_id: self.customer_id,
            product_id: self.product_id,
            quantity: self.quantity,
            order_date: self.order_date,
            completion_date: self.completion_date,
            status: self.status,
            notes: self.notes,
        }
    }
}

/// Request body for the guided single-step promotion.
#[derive(Debug, Clone, Deserialize)]
pub struct PromoteOrder {
    pub status: OrderStatus,
}
