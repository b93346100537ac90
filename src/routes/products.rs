//! Product endpoints: public catalog listing plus admin CRUD.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::{Value, json};

use crate::{
    core::products::{self, NewProduct, ProductPatch},
    entities::product,
    errors::Error,
    middleware::auth::AdminSession,
    state::AppState,
};

/// `GET /api/products` - the full catalog, public.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<product::Model>>, Error> {
    let items = products::get_products(&state.db)
        .await
        .map_err(|e| e.public("Failed to fetch products"))?;
    Ok(Json(items))
}

/// `POST /api/products` - create a product, admin only.
pub async fn create_product(
    State(state): State<AppState>,
    _session: AdminSession,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<product::Model>, Error> {
    let Json(new) = payload.map_err(|_| Error::validation("Invalid product data"))?;
    let created = products::create_product(&state.db, new)
        .await
        .map_err(|e| e.public("Failed to create product"))?;
    tracing::info!("Created product '{}' (ID: {})", created.name, created.id);
    Ok(Json(created))
}

/// `PATCH /api/products/{id}` - partial update, admin only.
pub async fn update_product(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<product::Model>, Error> {
    let Json(patch) = payload.map_err(|_| Error::validation("Failed to update product"))?;
    let updated = products::update_product(&state.db, id, patch)
        .await
        .map_err(|e| e.public("Failed to update product"))?;
    updated
        .map(Json)
        .ok_or_else(|| Error::not_found("Product not found"))
}

/// `DELETE /api/products/{id}` - admin only. Deleting an absent ID still
/// answers success.
pub async fn delete_product(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Error> {
    products::delete_product(&state.db, id)
        .await
        .map_err(|e| e.public("Failed to delete product"))?;
    Ok(Json(json!({ "success": true })))
}
