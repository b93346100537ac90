//! Unified error type for the storefront backend.
//!
//! Every API error leaves the server as a `{"error": "<message>"}` JSON body
//! with a coarse status class: 400 for validation, 401 for auth, 404 for a
//! missing resource, 500 for anything unexpected. Internal variants never leak
//! their underlying message to the wire.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Internal { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Session token error: {0}")]
    SessionToken(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A 400-class validation failure with a user-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// A 404 for an operation whose target row does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound {
            message: message.into(),
        }
    }

    /// A 401 auth failure with a user-facing message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Error::Unauthorized {
            message: message.into(),
        }
    }

    /// A 500 with a fixed public message.
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }

    /// Replaces an unexpected error with a fixed public message, logging the
    /// original. User-facing variants pass through untouched.
    pub fn public(self, message: &str) -> Self {
        match self {
            Error::Validation { .. } | Error::NotFound { .. } | Error::Unauthorized { .. } => self,
            other => {
                tracing::error!("{message}: {other}");
                Error::internal(message)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Only the hand-picked variants carry their message to the client.
        let message = match self {
            Error::Validation { message }
            | Error::NotFound { message }
            | Error::Unauthorized { message }
            | Error::Internal { message } => message,
            other => {
                tracing::error!("Unhandled internal error: {other}");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
