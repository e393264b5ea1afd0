//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod customer_repo;
pub mod order_repo;
pub mod product_repo;

pub use customer_repo::CustomerRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
