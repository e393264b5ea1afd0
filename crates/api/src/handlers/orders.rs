//! Handlers for the `/orders` resource.
//!
//! Every mutation goes through the lifecycle engine first; handlers load
//! the current persisted snapshot, ask the engine whether the intent is
//! admissible, and only then touch the repository. Each repository call
//! is awaited before the response is produced.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use sawmill_core::error::CoreError;
use sawmill_core::order::{self, Order, RowTag, PRODUCTION_STATUSES};
use sawmill_core::types::DbId;
use sawmill_db::models::order::{CreateOrder, PromoteOrder, UpdateOrder};
use sawmill_db::repositories::{CustomerRepo, OrderRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// Query parameters for listing orders.
#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    /// `production` restricts to orders on the production floor
    /// (accepted for production or completed).
    pub scope: Option<String>,
}

/// An order plus its row display tag for the table views.
#[derive(Debug, Serialize)]
pub struct OrderListItem {
    #[serde(flatten)]
    pub order: Order,
    pub tag: RowTag,
}

/// Response for a generic edit: the persisted snapshot plus the
/// user-facing change summary.
#[derive(Debug, Serialize)]
pub struct UpdatedOrder {
    pub order: Order,
    pub changes: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /orders?scope=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersParams>,
) -> AppResult<impl IntoResponse> {
    let filter = match params.scope.as_deref() {
        None => None,
        Some("production") => Some(&PRODUCTION_STATUSES[..]),
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Unknown scope '{other}'; expected 'production'"
            )))
        }
    };

    let orders = OrderRepo::list_all(&state.pool, filter).await?;
    let items: Vec<OrderListItem> = orders
        .into_iter()
        .map(|order| OrderListItem {
            tag: order.status.presentation_tag(),
            order,
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// POST /orders
///
/// New orders always start in Draft; a caller-supplied status is
/// ignored. Referenced customer and product must exist when given.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    if let Some(customer_id) = input.customer_id {
        ensure_customer_exists(&state, customer_id).await?;
    }
    if let Some(product_id) = input.product_id {
        ensure_product_exists(&state, product_id).await?;
    }

    let created = OrderRepo::insert(&state.pool, &input).await?;

    tracing::info!(order_id = created.id, "Order created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = load_order(&state, id).await?;
    Ok(Json(DataResponse { data: found }))
}

/// PUT /orders/{id}
///
/// Generic edit: the body is the full proposed snapshot. The engine
/// checks the restricted-field and promotion guards against the
/// freshly loaded current row.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrder>,
) -> AppResult<impl IntoResponse> {
    let current = load_order(&state, id).await?;
    let proposed = input.into_proposed(id);

    let edit = order::validate_edit(&current, &proposed)?;
    let summary = edit.summary();

    // None here means the order was deleted between validation and
    // persistence; surfaced as a stale-data 404.
    let updated = OrderRepo::apply_validated_edit(&state.pool, &edit)
        .await?
        .ok_or(CoreError::NotFound { entity: "Order", id })?;

    tracing::info!(order_id = id, changes = ?summary, "Order updated");

    Ok(Json(DataResponse {
        data: UpdatedOrder {
            order: updated,
            changes: summary,
        },
    }))
}

/// POST /orders/{id}/promote
///
/// Guided single-step promotion to the immediate successor status.
pub async fn promote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PromoteOrder>,
) -> AppResult<impl IntoResponse> {
    let current = load_order(&state, id).await?;

    let promoted = order::validate_promotion(&current, input.status)?;
    let persisted = OrderRepo::update_status(&state.pool, id, promoted.status)
        .await?
        .ok_or(CoreError::NotFound { entity: "Order", id })?;

    tracing::info!(order_id = id, status = %persisted.status, "Order promoted");

    Ok(Json(DataResponse { data: persisted }))
}

/// DELETE /orders/{id} -- permitted in any status; idempotent, always 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = OrderRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(order_id = id, "Order deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn load_order(state: &AppState, id: DbId) -> Result<Order, AppError> {
    Ok(OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Order", id })?)
}

async fn ensure_customer_exists(state: &AppState, id: DbId) -> Result<(), AppError> {
    CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Customer",
            id,
        })?;
    Ok(())
}

async fn ensure_product_exists(state: &AppState, id: DbId) -> Result<(), AppError> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;
    Ok(())
}
