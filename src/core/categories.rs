//! Category business logic - Admin-managed category list.
//!
//! Categories only feed the admin UI. There is no referential link to
//! products: deleting a category leaves products carrying that category
//! string untouched.

use crate::{
    entities::{Category, category},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Insert payload for a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    /// Machine name, unique
    pub name: String,
    /// Human-readable label
    pub label: String,
}

/// Retrieves the full category collection.
pub async fn get_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find().all(db).await.map_err(Into::into)
}

/// Creates a new category. The name must be unique and non-empty.
pub async fn create_category(db: &DatabaseConnection, new: NewCategory) -> Result<category::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::validation("Category name cannot be empty"));
    }

    let category = category::ActiveModel {
        name: Set(new.name.trim().to_string()),
        label: Set(new.label),
        ..Default::default()
    };
    category.insert(db).await.map_err(Into::into)
}

/// Deletes a category by ID, returning the number of rows removed.
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<u64> {
    let result = Category::delete_by_id(category_id).exec(db).await?;
    Ok(result.rows_affected)
}
