//! Category endpoints: public listing plus admin create/delete.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::{Value, json};

use crate::{
    core::categories::{self, NewCategory},
    entities::category,
    errors::Error,
    middleware::auth::AdminSession,
    state::AppState,
};

/// `GET /api/categories` - the admin-managed category list, public.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<category::Model>>, Error> {
    let items = categories::get_categories(&state.db)
        .await
        .map_err(|e| e.public("Failed to fetch categories"))?;
    Ok(Json(items))
}

/// `POST /api/categories` - create a category, admin only.
pub async fn create_category(
    State(state): State<AppState>,
    _session: AdminSession,
    payload: Result<Json<NewCategory>, JsonRejection>,
) -> Result<Json<category::Model>, Error> {
    let Json(new) = payload.map_err(|_| Error::validation("Invalid category data"))?;
    let created = categories::create_category(&state.db, new)
        .await
        .map_err(|e| e.public("Invalid category data"))?;
    Ok(Json(created))
}

/// `DELETE /api/categories/{id}` - admin only. No cascade onto products.
pub async fn delete_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Error> {
    categories::delete_category(&state.db, id)
        .await
        .map_err(|e| e.public("Failed to delete category"))?;
    Ok(Json(json!({ "success": true })))
}
