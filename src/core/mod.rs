//! Core business logic - framework-agnostic storage operations.
//!
//! One module per resource, one async function per operation. Every function
//! takes a `&DatabaseConnection` and performs a single storage round trip.

/// Category list/insert/delete
pub mod categories;
/// Order list/insert and status-only updates
pub mod orders;
/// Product CRUD
pub mod products;
/// Site-wide key-value settings, including the native upsert
pub mod settings;
/// The single admin account, lazily created with default credentials
pub mod users;
