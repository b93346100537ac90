//! Product business logic - Handles all catalog CRUD operations.
//!
//! Products are the storefront's catalog items. All functions are async and
//! return Result types for proper error handling throughout the system.
//! Updates are partial: fields absent from the patch are left untouched.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Insert payload for a new product. Optional display fields fall back to the
/// catalog defaults when the client omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name
    pub name: String,
    /// Free-text category
    pub category: String,
    /// Price in whole currency units
    pub price: i64,
    /// Product image URL
    pub image: String,
    /// Marketing description, defaults to empty
    #[serde(default)]
    pub description: String,
    /// Per-product WhatsApp number override
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    /// Monthly-subscription flag, defaults to true
    #[serde(default = "default_true")]
    pub is_monthly: bool,
    /// Availability flag, defaults to true
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Card checkmark flag, defaults to true
    #[serde(default = "default_true")]
    pub show_checkmarks: bool,
}

/// Partial update for a product: absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New category string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// New image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New per-product WhatsApp number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    /// New monthly-subscription flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_monthly: Option<bool>,
    /// New availability flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    /// New checkmark flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_checkmarks: Option<bool>,
}

/// Retrieves the full product collection.
pub async fn get_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find().all(db).await.map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product(db: &DatabaseConnection, product_id: i64) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is negative
/// - The database insert operation fails
pub async fn create_product(db: &DatabaseConnection, new: NewProduct) -> Result<product::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::validation("Product name cannot be empty"));
    }

    if new.price < 0 {
        return Err(Error::validation("Product price cannot be negative"));
    }

    let product = product::ActiveModel {
        name: Set(new.name.trim().to_string()),
        category: Set(new.category),
        price: Set(new.price),
        image: Set(new.image),
        description: Set(new.description),
        whatsapp_number: Set(new.whatsapp_number),
        is_monthly: Set(new.is_monthly),
        in_stock: Set(new.in_stock),
        show_checkmarks: Set(new.show_checkmarks),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a product. Returns None when the product does
/// not exist.
///
/// # Errors
/// Returns an error if the patched price is negative or the update fails.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    patch: ProductPatch,
) -> Result<Option<product::Model>> {
    if matches!(patch.price, Some(price) if price < 0) {
        return Err(Error::validation("Product price cannot be negative"));
    }

    let Some(existing) = Product::find_by_id(product_id).one(db).await? else {
        return Ok(None);
    };

    let mut product: product::ActiveModel = existing.clone().into();
    let mut changed = false;

    if let Some(name) = patch.name {
        product.name = Set(name);
        changed = true;
    }
    if let Some(category) = patch.category {
        product.category = Set(category);
        changed = true;
    }
    if let Some(price) = patch.price {
        product.price = Set(price);
        changed = true;
    }
    if let Some(image) = patch.image {
        product.image = Set(image);
        changed = true;
    }
    if let Some(description) = patch.description {
        product.description = Set(description);
        changed = true;
    }
    if let Some(whatsapp_number) = patch.whatsapp_number {
        product.whatsapp_number = Set(Some(whatsapp_number));
        changed = true;
    }
    if let Some(is_monthly) = patch.is_monthly {
        product.is_monthly = Set(is_monthly);
        changed = true;
    }
    if let Some(in_stock) = patch.in_stock {
        product.in_stock = Set(in_stock);
        changed = true;
    }
    if let Some(show_checkmarks) = patch.show_checkmarks {
        product.show_checkmarks = Set(show_checkmarks);
        changed = true;
    }

    if !changed {
        return Ok(Some(existing));
    }

    product.update(db).await.map(Some).map_err(Into::into)
}

/// Deletes a product by ID, returning the number of rows removed. Deleting an
/// absent ID is not an error.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<u64> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    Ok(result.rows_affected)
}
