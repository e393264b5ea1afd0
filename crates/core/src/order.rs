//! Order lifecycle engine.
//!
//! An order moves through a strictly linear progression:
//!
//! ```text
//! Draft -> AgreedWithClient -> AcceptedForProduction -> Completed
//! ```
//!
//! Every function here is a pure decision over in-memory snapshots; the
//! caller loads the current row, asks the engine whether the proposed
//! change is admissible, and persists the result on success.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Order lifecycle status, stored as TEXT in the `orders` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    AgreedWithClient,
    AcceptedForProduction,
    Completed,
}

/// The linear progression, in promotion order.
pub const STATUS_SEQUENCE: [OrderStatus; 4] = [
    OrderStatus::Draft,
    OrderStatus::AgreedWithClient,
    OrderStatus::AcceptedForProduction,
    OrderStatus::Completed,
];

/// Statuses shown on the production floor view.
pub const PRODUCTION_STATUSES: [OrderStatus; 2] = [
    OrderStatus::AcceptedForProduction,
    OrderStatus::Completed,
];

impl OrderStatus {
    /// Database representation (matches the serde encoding).
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::AgreedWithClient => "agreed_with_client",
            OrderStatus::AcceptedForProduction => "accepted_for_production",
            OrderStatus::Completed => "completed",
        }
    }

    /// Parse the database representation. Returns `None` for unknown text.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(OrderStatus::Draft),
            "agreed_with_client" => Some(OrderStatus::AgreedWithClient),
            "accepted_for_production" => Some(OrderStatus::AcceptedForProduction),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// The immediate successor in the linear progression, or `None` for
    /// the terminal status.
    pub fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Draft => Some(OrderStatus::AgreedWithClient),
            OrderStatus::AgreedWithClient => Some(OrderStatus::AcceptedForProduction),
            OrderStatus::AcceptedForProduction => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Display classification for table rows. Presentation only; has no
    /// effect on validity.
    pub fn presentation_tag(self) -> RowTag {
        match self {
            OrderStatus::Draft => RowTag::Neutral,
            OrderStatus::AgreedWithClient => RowTag::Pending,
            OrderStatus::AcceptedForProduction => RowTag::InProgress,
            OrderStatus::Completed => RowTag::Done,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row display classification derived from [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowTag {
    Neutral,
    Pending,
    InProgress,
    Done,
}

// ---------------------------------------------------------------------------
// Order snapshot
// ---------------------------------------------------------------------------

/// An order snapshot as the engine sees it.
///
/// Draft orders may leave any field but `id` and `status` empty; the
/// completeness guard requires the first four optional fields before the
/// order can leave Draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: DbId,
    pub customer_id: Option<DbId>,
    pub product_id: Option<DbId>,
    pub quantity: Option<f64>,
    pub order_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub status: OrderStatus,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Rejection reasons for order edits and promotions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Customer, product and order date are locked once the order has
    /// left Draft.
    #[error("customer, product and order date cannot change once the order has left draft")]
    RestrictedFieldChange,

    /// Promotion (or keeping a non-draft status) requires customer,
    /// product, positive quantity and order date.
    #[error("order needs a customer, product, positive quantity and order date before it can advance")]
    IncompletePromotionPrerequisites,

    /// The target status is not the immediate successor of the current
    /// one. Should be prevented by only offering valid next-step actions.
    #[error("cannot move order from '{from}' to '{to}'")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

// ---------------------------------------------------------------------------
// Validated edits
// ---------------------------------------------------------------------------

/// A field that differed between the current and proposed snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangedField {
    CustomerId,
    ProductId,
    Quantity,
    OrderDate,
    CompletionDate,
    Status,
    Notes,
}

impl ChangedField {
    fn label(self) -> &'static str {
        match self {
            ChangedField::CustomerId => "customer",
            ChangedField::ProductId => "product",
            ChangedField::Quantity => "quantity",
            ChangedField::OrderDate => "order date",
            ChangedField::CompletionDate => "completion date",
            ChangedField::Status => "status",
            ChangedField::Notes => "notes",
        }
    }
}

/// An admissible edit: the snapshot to persist plus the fields that
/// actually changed, for the user-facing summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEdit {
    pub order: Order,
    pub changes: Vec<ChangedField>,
}

impl ValidatedEdit {
    /// User-facing change summary, e.g. `quantity changed`,
    /// `status changed to "completed"`.
    pub fn summary(&self) -> Vec<String> {
        self.changes
            .iter()
            .map(|change| match change {
                ChangedField::Status => {
                    format!("status changed to \"{}\"", self.order.status)
                }
                other => format!("{} changed", other.label()),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// Completeness guard: an order may hold (or be promoted into) a
/// non-draft status only when customer, product, positive quantity and
/// order date are all present.
pub fn can_promote(order: &Order) -> bool {
    order.customer_id.is_some()
        && order.product_id.is_some()
        && order.quantity.is_some_and(|q| q > 0.0)
        && order.order_date.is_some()
}

/// Validate a generic edit of `current` into `proposed`.
///
/// Both snapshots must carry the same `id`; that is a caller bug, not a
/// user error.
///
/// Guards, in order:
/// 1. Outside Draft, `customer_id`, `product_id` and `order_date` are
///    immutable.
/// 2. A status change must target the immediate successor.
/// 3. A non-draft result must satisfy the completeness guard, so an
///    already-promoted order cannot have its quantity emptied either.
pub fn validate_edit(current: &Order, proposed: &Order) -> Result<ValidatedEdit, EditError> {
    debug_assert_eq!(current.id, proposed.id, "edit must keep the order id");

    if current.status != OrderStatus::Draft
        && (proposed.customer_id != current.customer_id
            || proposed.product_id != current.product_id
            || proposed.order_date != current.order_date)
    {
        return Err(EditError::RestrictedFieldChange);
    }

    if proposed.status != current.status && current.status.next() != Some(proposed.status) {
        return Err(EditError::InvalidTransition {
            from: current.status,
            to: proposed.status,
        });
    }

    if proposed.status != OrderStatus::Draft && !can_promote(proposed) {
        return Err(EditError::IncompletePromotionPrerequisites);
    }

    Ok(ValidatedEdit {
        changes: changed_fields(current, proposed),
        order: proposed.clone(),
    })
}

/// Validate a guided single-step promotion of `current` to `next_status`.
///
/// `next_status` must be the immediate successor of the current status
/// and the completeness guard must hold. On success, returns the order
/// with only `status` replaced.
pub fn validate_promotion(current: &Order, next_status: OrderStatus) -> Result<Order, EditError> {
    if current.status.next() != Some(next_status) {
        return Err(EditError::InvalidTransition {
            from: current.status,
            to: next_status,
        });
    }

    if !can_promote(current) {
        return Err(EditError::IncompletePromotionPrerequisites);
    }

    Ok(Order {
        status: next_status,
        ..current.clone()
    })
}

fn changed_fields(current: &Order, proposed: &Order) -> Vec<ChangedField> {
    let mut changes = Vec::new();
    if proposed.customer_id != current.customer_id {
        changes.push(ChangedField::CustomerId);
    }
    if proposed.product_id != current.product_id {
        changes.push(ChangedField::ProductId);
    }
    if proposed.quantity != current.quantity {
        changes.push(ChangedField::Quantity);
    }
    if proposed.order_date != current.order_date {
        changes.push(ChangedField::OrderDate);
    }
    if proposed.completion_date != current.completion_date {
        changes.push(ChangedField::CompletionDate);
    }
    if proposed.status != current.status {
        changes.push(ChangedField::Status);
    }
    if proposed.notes != current.notes {
        changes.push(ChangedField::Notes);
    }
    changes
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
