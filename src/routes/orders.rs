//! Order endpoints: public creation (the checkout path) plus admin listing
//! and status management.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::{
    core::orders::{self, NewOrder},
    entities::order,
    errors::Error,
    middleware::auth::AdminSession,
    state::AppState,
};

/// Body of a status-only update.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    /// The new status value
    pub status: String,
}

/// `GET /api/orders` - the full order book, admin only.
pub async fn list_orders(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Vec<order::Model>>, Error> {
    let items = orders::get_orders(&state.db)
        .await
        .map_err(|e| e.public("Failed to fetch orders"))?;
    Ok(Json(items))
}

/// `POST /api/orders` - create an order, public. Any client-supplied `date`
/// or `status` is dropped; the server sets both.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> Result<Json<order::Model>, Error> {
    let Json(new) = payload.map_err(|_| Error::validation("Invalid order data"))?;
    let created = orders::create_order(&state.db, new)
        .await
        .map_err(|e| e.public("Failed to create order"))?;
    tracing::info!(
        "Created order {} for '{}' ({})",
        created.id,
        created.product_name,
        created.customer_name
    );
    Ok(Json(created))
}

/// `PATCH /api/orders/{id}/status` - status-only update, admin only.
pub async fn update_order_status(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i64>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<order::Model>, Error> {
    let Json(body) = payload.map_err(|_| Error::validation("Failed to update order status"))?;
    let updated = orders::update_order_status(&state.db, id, &body.status)
        .await
        .map_err(|e| e.public("Failed to update order status"))?;
    updated
        .map(Json)
        .ok_or_else(|| Error::not_found("Order not found"))
}
