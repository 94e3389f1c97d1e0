//! Domain logic for the product catalog: error types, id aliases,
//! product validation, and pagination arithmetic. No I/O lives here.

pub mod error;
pub mod pagination;
pub mod product;
pub mod types;
