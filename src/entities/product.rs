//! Product entity - Represents a catalog item offered in the storefront.
//!
//! Products carry their display data (image, description, stock flags) plus an
//! optional per-product WhatsApp number that overrides the site-wide default
//! at checkout. `category` is free text, deliberately not a foreign key into
//! the categories table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the product
    pub name: String,
    /// Free-text category used for storefront filtering
    pub category: String,
    /// Price in whole currency units, non-negative
    pub price: i64,
    /// URL of the product image
    pub image: String,
    /// Optional marketing description
    pub description: String,
    /// Per-product WhatsApp number, overrides the site-wide one when set
    pub whatsapp_number: Option<String>,
    /// Whether the price is a monthly subscription
    pub is_monthly: bool,
    /// Whether the product can currently be bought
    pub in_stock: bool,
    /// Whether the feature checkmarks are rendered on the product card
    pub show_checkmarks: bool,
}

/// `Product` has no relationships with other entities - orders snapshot
/// product data instead of referencing it
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
