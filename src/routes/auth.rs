//! Auth endpoints for the single admin account.
//!
//! Login verifies the password against the stored bcrypt hash and answers
//! with a signed session token; the other two endpoints require a live
//! session. The admin row is created lazily with the default credential the
//! first time any of these flows runs against an empty table. Login and
//! credential-update error strings are forwarded to the UI verbatim, which is
//! why they are in Spanish.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    core::users,
    errors::Error,
    middleware::auth::{self, AdminSession},
    state::AppState,
};

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Admin username
    pub username: String,
    /// Admin password, plaintext over the wire only
    pub password: String,
}

/// Credential update request body. Empty or absent optional fields mean
/// "leave unchanged".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsUpdate {
    /// Current password, must match the stored hash
    pub current_password: String,
    /// Replacement username
    #[serde(default)]
    pub new_username: Option<String>,
    /// Replacement password
    #[serde(default)]
    pub new_password: Option<String>,
}

/// `POST /api/auth/login` - check the credential and mint a session token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let Json(req) = payload.map_err(|_| Error::validation("Credenciales incorrectas"))?;

    let user = users::ensure_admin_user(&state.db)
        .await
        .map_err(|e| e.public("Error de autenticación"))?;

    let password_ok = users::verify_password(&req.password, &user)
        .map_err(|e| e.public("Error de autenticación"))?;
    if user.username != req.username || !password_ok {
        return Err(Error::unauthorized("Credenciales incorrectas"));
    }

    let token = auth::mint_token(
        &user,
        &state.config.session_secret,
        state.config.session_ttl_hours,
    )
    .map_err(|e| e.public("Error de autenticación"))?;

    tracing::info!("Admin '{}' logged in", user.username);
    Ok(Json(json!({
        "success": true,
        "token": token,
        "user": { "id": user.id, "username": user.username },
    })))
}

/// `GET /api/auth/credentials` - the current admin username, admin only.
pub async fn credentials(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Value>, Error> {
    let user = users::ensure_admin_user(&state.db)
        .await
        .map_err(|e| e.public("Error al obtener credenciales"))?;
    Ok(Json(json!({ "username": user.username })))
}

/// `POST /api/auth/update` - change username and/or password after
/// re-checking the current password.
pub async fn update_credentials(
    State(state): State<AppState>,
    _session: AdminSession,
    payload: Result<Json<CredentialsUpdate>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let Json(req) = payload.map_err(|_| Error::validation("Error al actualizar credenciales"))?;

    let user = users::ensure_admin_user(&state.db)
        .await
        .map_err(|e| e.public("Error al actualizar credenciales"))?;

    let password_ok = users::verify_password(&req.current_password, &user)
        .map_err(|e| e.public("Error al actualizar credenciales"))?;
    if !password_ok {
        return Err(Error::unauthorized("Contraseña actual incorrecta"));
    }

    // Empty strings mean "no change", same as absent fields
    let new_username = req.new_username.filter(|s| !s.is_empty());
    let new_password = req.new_password.filter(|s| !s.is_empty());

    let updated = users::update_user(&state.db, user.id, new_username, new_password.as_deref())
        .await
        .map_err(|e| e.public("Error al actualizar credenciales"))?
        .ok_or_else(|| Error::not_found("Usuario no encontrado"))?;

    tracing::info!("Admin credentials updated, username is now '{}'", updated.username);
    Ok(Json(json!({ "success": true, "username": updated.username })))
}
