//! Admin session tokens.
//!
//! Login mints a signed HS256 token with an explicit expiry; every admin
//! route extracts an [`AdminSession`] from the `Authorization: Bearer` header
//! and rejects the request with 401 when the token is missing, malformed, or
//! expired. There is no server-side session store - the signature and the
//! `exp` claim are the whole session.

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    entities::user,
    errors::{Error, Result},
    state::AppState,
};

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin user ID
    pub sub: String,
    /// Admin username at the time of login
    pub username: String,
    /// Expiry as a unix timestamp
    pub exp: usize,
}

/// Signs a session token for the given admin user.
pub fn mint_token(user: &user::Model, secret: &str, ttl_hours: i64) -> Result<String> {
    let expires_at = chrono::Utc::now() + chrono::Duration::hours(ttl_hours);
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        exp: usize::try_from(expires_at.timestamp()).unwrap_or(usize::MAX),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(Into::into)
}

/// Verifies a session token, returning its claims. Expiry is checked by the
/// default validation.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::unauthorized("Sesión inválida o expirada"))
}

/// Extractor that admits a request only with a valid admin session token.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Claims);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| Error::unauthorized("No autorizado"))?;

        let claims = verify_token(token, &state.config.session_secret)?;
        Ok(AdminSession(claims))
    }
}
