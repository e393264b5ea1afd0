pub mod customers;
pub mod health;
pub mod orders;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /customers                 list, create
/// /customers/{id}            get, delete
///
/// /products                  list, create
/// /products/{id}             get, delete
///
/// /orders                    list (?scope=production), create
/// /orders/{id}               get, update (generic edit), delete
/// /orders/{id}/promote       guided single-step promotion (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}
