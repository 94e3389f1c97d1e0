//! Repository layer: one zero-sized struct per table with async CRUD methods.

pub mod product_repo;

pub use product_repo::ProductRepo;
