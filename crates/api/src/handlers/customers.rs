//! Handlers for the `/customers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sawmill_core::catalog::validate_name;
use sawmill_core::error::CoreError;
use sawmill_core::types::DbId;
use sawmill_db::models::customer::CreateCustomer;
use sawmill_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /customers
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let customers = CustomerRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: customers }))
}

/// POST /customers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name).map_err(AppError::BadRequest)?;

    let customer = CustomerRepo::create(&state.pool, &input).await?;

    tracing::info!(customer_id = customer.id, "Customer created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: customer })))
}

/// GET /customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Customer",
            id,
        })?;

    Ok(Json(DataResponse { data: customer }))
}

/// DELETE /customers/{id} -- idempotent, always 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = CustomerRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(customer_id = id, "Customer deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
