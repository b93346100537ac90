//! Typed API client with per-collection caching.
//!
//! Each resource collection (products, orders, settings, categories) lives in
//! its own cache slot, filled on first read. Every successful mutation
//! invalidates the owning collection's slot only, so the next read re-fetches
//! from the server - there is no optimistic merging of cached data. Login
//! stores the session token for subsequent admin calls.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    core::{categories::NewCategory, orders::NewOrder, products::{NewProduct, ProductPatch}},
    entities::{category, order, product},
    errors::{Error, Result},
    storefront::SiteSettings,
};

/// API client holding one cache slot per resource collection.
pub struct StoreClient {
    base_url: String,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
    products: RwLock<Option<Vec<product::Model>>>,
    orders: RwLock<Option<Vec<order::Model>>>,
    settings: RwLock<Option<HashMap<String, String>>>,
    categories: RwLock<Option<Vec<category::Model>>>,
}

impl StoreClient {
    /// Creates a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            token: RwLock::new(None),
            products: RwLock::new(None),
            orders: RwLock::new(None),
            settings: RwLock::new(None),
            categories: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Logs in as the admin. On success the session token is retained for
    /// admin calls and `true` is returned; a 401 yields `false`.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(false);
        }

        let body: serde_json::Value = response.error_for_status()?.json().await?;
        *self.token.write().await = body["token"].as_str().map(str::to_string);
        Ok(true)
    }

    /// Drops the session token.
    pub async fn logout(&self) {
        *self.token.write().await = None;
    }

    // --- Reads: cached per collection ---

    /// The product collection, from cache when warm.
    pub async fn products(&self) -> Result<Vec<product::Model>> {
        if let Some(cached) = self.products.read().await.as_ref() {
            return Ok(cached.clone());
        }

        debug!("Product cache cold, fetching collection");
        let fetched: Vec<product::Model> = self
            .http
            .get(self.url("/api/products"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.products.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// The order collection, from cache when warm. Requires a session.
    pub async fn orders(&self) -> Result<Vec<order::Model>> {
        if let Some(cached) = self.orders.read().await.as_ref() {
            return Ok(cached.clone());
        }

        debug!("Order cache cold, fetching collection");
        let request = self.authorize(self.http.get(self.url("/api/orders"))).await;
        let fetched: Vec<order::Model> = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.orders.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// The raw settings map, from cache when warm.
    pub async fn settings(&self) -> Result<HashMap<String, String>> {
        if let Some(cached) = self.settings.read().await.as_ref() {
            return Ok(cached.clone());
        }

        debug!("Settings cache cold, fetching collection");
        let fetched: HashMap<String, String> = self
            .http
            .get(self.url("/api/settings"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.settings.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// Settings with the storefront defaults resolved.
    pub async fn site_settings(&self) -> Result<SiteSettings> {
        Ok(SiteSettings::from_map(&self.settings().await?))
    }

    /// The category collection, from cache when warm.
    pub async fn categories(&self) -> Result<Vec<category::Model>> {
        if let Some(cached) = self.categories.read().await.as_ref() {
            return Ok(cached.clone());
        }

        debug!("Category cache cold, fetching collection");
        let fetched: Vec<category::Model> = self
            .http
            .get(self.url("/api/categories"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.categories.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    // --- Mutations: each invalidates its own collection on success ---

    /// Creates a product and invalidates the product cache.
    pub async fn add_product(&self, new: &NewProduct) -> Result<product::Model> {
        let request = self
            .authorize(self.http.post(self.url("/api/products")))
            .await;
        let created = request
            .json(new)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.products.write().await = None;
        Ok(created)
    }

    /// Partially updates a product and invalidates the product cache.
    pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> Result<product::Model> {
        let request = self
            .authorize(self.http.patch(self.url(&format!("/api/products/{id}"))))
            .await;
        let updated = request
            .json(patch)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.products.write().await = None;
        Ok(updated)
    }

    /// Deletes a product and invalidates the product cache.
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        let request = self
            .authorize(self.http.delete(self.url(&format!("/api/products/{id}"))))
            .await;
        request.send().await?.error_for_status()?;
        *self.products.write().await = None;
        Ok(())
    }

    /// Places an order (the API path, not the WhatsApp one) and invalidates
    /// the order cache.
    pub async fn add_order(&self, new: &NewOrder) -> Result<order::Model> {
        let created = self
            .http
            .post(self.url("/api/orders"))
            .json(new)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.orders.write().await = None;
        Ok(created)
    }

    /// Updates an order's status and invalidates the order cache.
    pub async fn update_order_status(&self, id: i64, status: &str) -> Result<order::Model> {
        let request = self
            .authorize(
                self.http
                    .patch(self.url(&format!("/api/orders/{id}/status"))),
            )
            .await;
        let updated = request
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.orders.write().await = None;
        Ok(updated)
    }

    /// Upserts one setting and invalidates the settings cache.
    pub async fn update_setting(&self, key: &str, value: &str) -> Result<()> {
        let request = self
            .authorize(self.http.post(self.url("/api/settings")))
            .await;
        request
            .json(&serde_json::json!({ "key": key, "value": value }))
            .send()
            .await?
            .error_for_status()?;
        *self.settings.write().await = None;
        Ok(())
    }

    /// Creates a category and invalidates the category cache.
    pub async fn add_category(&self, new: &NewCategory) -> Result<category::Model> {
        let request = self
            .authorize(self.http.post(self.url("/api/categories")))
            .await;
        let created = request
            .json(new)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        *self.categories.write().await = None;
        Ok(created)
    }

    /// Deletes a category and invalidates the category cache.
    pub async fn delete_category(&self, id: i64) -> Result<()> {
        let request = self
            .authorize(
                self.http
                    .delete(self.url(&format!("/api/categories/{id}"))),
            )
            .await;
        request.send().await?.error_for_status()?;
        *self.categories.write().await = None;
        Ok(())
    }

    /// Fetches the current admin username. Requires a session.
    pub async fn credentials(&self) -> Result<String> {
        let request = self
            .authorize(self.http.get(self.url("/api/auth/credentials")))
            .await;
        let body: serde_json::Value = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        body["username"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::internal("Malformed credentials response"))
    }

    /// Updates the admin credential. Returns the server's error message
    /// verbatim on failure, matching what the UI shows the user.
    pub async fn update_credentials(
        &self,
        current_password: &str,
        new_username: Option<&str>,
        new_password: Option<&str>,
    ) -> Result<String> {
        let request = self
            .authorize(self.http.post(self.url("/api/auth/update")))
            .await;
        let response = request
            .json(&serde_json::json!({
                "currentPassword": current_password,
                "newUsername": new_username,
                "newPassword": new_password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body["error"].as_str().unwrap_or("No se pudo actualizar");
            return Err(Error::unauthorized(message));
        }

        let body: serde_json::Value = response.json().await?;
        body["username"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::internal("Malformed update response"))
    }
}
