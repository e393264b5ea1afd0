//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sawmill_core::catalog::validate_name;
use sawmill_core::error::CoreError;
use sawmill_core::types::DbId;
use sawmill_db::models::product::CreateProduct;
use sawmill_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name).map_err(AppError::BadRequest)?;

    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;

    Ok(Json(DataResponse { data: product }))
}

/// DELETE /products/{id} -- idempotent, always 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ProductRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(product_id = id, "Product deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
