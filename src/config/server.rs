//! Server settings loaded from the environment, with logged fallbacks.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the server binds to
    pub port: u16,
    /// Directory uploaded images are written to and served from
    pub upload_dir: String,
    /// HMAC secret used to sign session tokens
    pub session_secret: String,
    /// Session token lifetime in hours
    pub session_ttl_hours: i64,
}

impl ServerConfig {
    /// Loads the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "5000"),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            session_secret: load_session_secret(),
            session_ttl_hours: try_load("SESSION_TTL_HOURS", "24"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|()| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_session_secret() -> String {
    env::var("SESSION_SECRET").unwrap_or_else(|_| {
        warn!("SESSION_SECRET not set, using an insecure development secret");
        "tienda-dev-secret".to_string()
    })
}
