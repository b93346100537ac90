//! Admin account logic - Handles the single admin credential.
//!
//! The storefront has exactly one admin identity. Whichever row sits first in
//! the `users` table is treated as canonical, and it is created lazily with a
//! well-known default credential the first time any auth flow touches an empty
//! table. Passwords are stored as bcrypt hashes and verified with
//! [`verify_password`].

use crate::{
    entities::{User, user},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Username of the lazily-created default admin account.
pub const DEFAULT_ADMIN_USERNAME: &str = "paudronixGt123@";
/// Password of the lazily-created default admin account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "paudronix123GT%";

/// Retrieves a user by its unique ID.
pub async fn get_user(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by login name, returning None when absent.
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the first user row, the canonical admin identity.
pub async fn get_first_user(db: &DatabaseConnection) -> Result<Option<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a user, hashing the password before storage.
pub async fn create_user(
    db: &DatabaseConnection,
    username: String,
    password: &str,
) -> Result<user::Model> {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let user = user::ActiveModel {
        username: Set(username),
        password_hash: Set(password_hash),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Partially updates a user's credentials. `None` fields are left unchanged;
/// a new password is hashed before storage. Returns None when the user does
/// not exist.
pub async fn update_user(
    db: &DatabaseConnection,
    user_id: i64,
    new_username: Option<String>,
    new_password: Option<&str>,
) -> Result<Option<user::Model>> {
    let Some(existing) = User::find_by_id(user_id).one(db).await? else {
        return Ok(None);
    };

    if new_username.is_none() && new_password.is_none() {
        return Ok(Some(existing));
    }

    let mut user: user::ActiveModel = existing.into();
    if let Some(username) = new_username {
        user.username = Set(username);
    }
    if let Some(password) = new_password {
        user.password_hash = Set(bcrypt::hash(password, bcrypt::DEFAULT_COST)?);
    }

    user.update(db).await.map(Some).map_err(Into::into)
}

/// Returns the canonical admin account, creating the default one when the
/// table is empty.
pub async fn ensure_admin_user(db: &DatabaseConnection) -> Result<user::Model> {
    if let Some(user) = get_first_user(db).await? {
        return Ok(user);
    }

    info!("No admin account found, creating the default one");
    create_user(db, DEFAULT_ADMIN_USERNAME.to_string(), DEFAULT_ADMIN_PASSWORD).await
}

/// Checks a plaintext password against a user's stored hash.
pub fn verify_password(password: &str, user: &user::Model) -> Result<bool> {
    bcrypt::verify(password, &user.password_hash).map_err(Into::into)
}
