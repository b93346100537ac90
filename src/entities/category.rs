//! Category entity - Admin-managed category list.
//!
//! Independent of the free-text `Product.category` column: this table only
//! drives pickers and autocomplete in the admin UI. Deleting a category does
//! not touch products that carry the same category string.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Machine name, unique (e.g., `"streaming"`)
    #[sea_orm(unique)]
    pub name: String,
    /// Human-readable label shown in the UI
    pub label: String,
}

/// `Category` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
