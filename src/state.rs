//! Shared application state handed to every request handler.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::server::ServerConfig;

/// Cloneable handler state: the database connection plus server settings.
#[derive(Clone)]
pub struct AppState {
    /// SeaORM connection (internally pooled, cheap to clone)
    pub db: DatabaseConnection,
    /// Server settings loaded at startup
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Bundles a connection and settings into handler state.
    pub fn new(db: DatabaseConnection, config: ServerConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
