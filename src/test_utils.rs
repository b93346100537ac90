//! Shared test utilities for the storefront backend.
//!
//! This module provides common helper functions for setting up test databases,
//! building routers over in-memory state, and creating test entities with
//! sensible defaults.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use crate::{
    config::{self, server::ServerConfig},
    core::{orders, products, users},
    entities::{order, product},
    errors::Result,
    routes,
    state::AppState,
};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// Server settings for tests: a temp upload directory and a fixed secret.
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        upload_dir: std::env::temp_dir()
            .join("tienda-test-uploads")
            .to_string_lossy()
            .into_owned(),
        session_secret: "test-session-secret".to_string(),
        session_ttl_hours: 1,
    }
}

/// Builds the full router over a fresh in-memory database. Returns the
/// database handle too so tests can inspect stored rows directly.
pub async fn setup_test_app() -> Result<(Router, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let state = AppState::new(db.clone(), test_server_config());
    Ok((routes::router(state), db))
}

/// Serves a fresh app on an ephemeral local port and returns its base URL.
/// Used by the API-client tests, which need real HTTP.
pub async fn spawn_test_server() -> Result<String> {
    let (app, _db) = setup_test_app().await?;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

/// Logs in with the default admin credential and returns the session token.
pub async fn login_token(app: &Router) -> Result<String> {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            serde_json::json!({
                "username": users::DEFAULT_ADMIN_USERNAME,
                "password": users::DEFAULT_ADMIN_PASSWORD,
            }),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    Ok(body["token"].as_str().unwrap_or_default().to_string())
}

/// Builds a JSON request.
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a JSON request carrying a bearer session token.
pub fn bearer_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a bare GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON.
pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `price`: 55
/// * `image`: `"/uploads/test.png"`
/// * flags: all true
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
) -> Result<product::Model> {
    products::create_product(
        db,
        products::NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            price: 55,
            image: "/uploads/test.png".to_string(),
            description: String::new(),
            whatsapp_number: None,
            is_monthly: true,
            in_stock: true,
            show_checkmarks: true,
        },
    )
    .await
}

/// Creates a test order snapshotting the given product.
pub async fn create_test_order(
    db: &DatabaseConnection,
    product: &product::Model,
    customer: &str,
) -> Result<order::Model> {
    orders::create_order(
        db,
        orders::NewOrder {
            customer_name: customer.to_string(),
            customer_phone: "50255554444".to_string(),
            product_id: product.id,
            product_name: product.name.clone(),
            price: product.price,
        },
    )
    .await
}
