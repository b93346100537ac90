//! User entity - Represents the single admin account.
//!
//! The system supports exactly one admin identity. The row is created lazily
//! with a default credential the first time any auth endpoint touches the
//! table, and the password is stored as a bcrypt hash.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admin user database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name of the admin account
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt hash of the admin password - never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// `User` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
