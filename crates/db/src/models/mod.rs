//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Update DTOs where the resource supports edits

pub mod customer;
pub mod order;
pub mod product;
