//! Pure domain logic for the sawmill order-management backend.
//!
//! Nothing in this crate performs I/O. The order lifecycle engine in
//! [`order`] decides whether an edit or status promotion is admissible;
//! persistence and HTTP live in the `sawmill-db` and `sawmill-api`
//! crates.

pub mod catalog;
pub mod error;
pub mod order;
pub mod types;
