//! Router assembly: every resource-verb pair from the API contract, the
//! static `/uploads` mount, and the shared tower layers.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Auth endpoints for the single admin account
pub mod auth;
/// Category endpoints
pub mod categories;
/// Order endpoints
pub mod orders;
/// Product endpoints
pub mod products;
/// Settings endpoints
pub mod settings;
/// Image upload endpoint
pub mod upload;

/// Builds the full application router over the given state.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            patch(products::update_product).delete(products::delete_product),
        )
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/orders/{id}/status", patch(orders::update_order_status))
        .route(
            "/settings",
            get(settings::list_settings).post(settings::save_setting),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/{id}", delete(categories::delete_category))
        .route("/upload", post(upload::upload_image))
        .route("/auth/login", post(auth::login))
        .route("/auth/credentials", get(auth::credentials))
        .route("/auth/update", post(auth::update_credentials));

    Router::new()
        .nest("/api", api)
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(DefaultBodyLimit::max(upload::MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
