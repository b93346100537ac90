/// Database connection and schema management
pub mod database;

/// Environment-driven server settings
pub mod server;
