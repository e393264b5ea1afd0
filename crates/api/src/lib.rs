//! HTTP surface for the sawmill order-management backend.
//!
//! The presentation layer dispatches user intents (create, edit, delete,
//! promote) to the lifecycle engine in `sawmill-core` and persists the
//! results through `sawmill-db`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
