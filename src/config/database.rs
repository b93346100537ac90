//! Database configuration module for the storefront backend.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Category, Order, Product, Setting, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tienda.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the database using the `DATABASE_URL` environment variable.
///
/// Falls back to a local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates tables for users, products, orders, settings, and categories.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut user_table = schema.create_table_from_entity(User);
    let mut product_table = schema.create_table_from_entity(Product);
    let mut order_table = schema.create_table_from_entity(Order);
    let mut setting_table = schema.create_table_from_entity(Setting);
    let mut category_table = schema.create_table_from_entity(Category);

    db.execute(builder.build(user_table.if_not_exists())).await?;
    db.execute(builder.build(product_table.if_not_exists()))
        .await?;
    db.execute(builder.build(order_table.if_not_exists()))
        .await?;
    db.execute(builder.build(setting_table.if_not_exists()))
        .await?;
    db.execute(builder.build(category_table.if_not_exists()))
        .await?;

    Ok(())
}
