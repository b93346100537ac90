//! Setting entity - Stores key-value pairs for site-wide configuration.
//! Used for the store name, the default WhatsApp number, the background
//! image URL, and whatever else the admin panel needs to persist.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Setting database model - stores key-value configuration pairs
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Configuration key (e.g., `"whatsappNumber"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Configuration value stored as string
    pub value: String,
}

/// `Setting` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
