//! Route definitions for the `/orders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /               -> list (?scope=production)
/// POST   /               -> create (always Draft)
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update (generic edit through the engine)
/// DELETE /{id}           -> delete (idempotent)
/// POST   /{id}/promote   -> promote to the immediate successor status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route(
            "/{id}",
            get(orders::get_by_id)
                .put(orders::update)
                .delete(orders::delete),
        )
        .route("/{id}/promote", post(orders::promote))
}
