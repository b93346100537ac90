//! Pure storefront presentation logic.
//!
//! Everything here is view-layer computation with no storage access: category
//! filtering, chip derivation, WhatsApp deep links, and the fallback defaults
//! applied when a site setting is absent. The buy link is the whole checkout
//! path - no order is recorded when a customer taps it.

use std::collections::HashMap;

use crate::entities::product;

/// Default site-wide WhatsApp number used when the setting is absent.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "50237871216";
/// Default store name used when the setting is absent.
pub const DEFAULT_STORE_NAME: &str = "PAUDRONIX GT";
/// The active-category value meaning "show everything".
pub const ALL_CATEGORIES: &str = "all";

/// Site-wide settings with defaults resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Site-wide WhatsApp number for checkout chats
    pub whatsapp_number: String,
    /// Background image URL, empty when unset
    pub background_image: String,
    /// Store name shown in the header and chat messages
    pub store_name: String,
}

impl SiteSettings {
    /// Resolves settings from the flat key-value map the API serves. Absent
    /// or empty values fall back to the defaults.
    #[must_use]
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let pick = |key: &str, default: &str| {
            map.get(key)
                .filter(|value| !value.is_empty())
                .map_or_else(|| default.to_string(), Clone::clone)
        };

        Self {
            whatsapp_number: pick("whatsappNumber", DEFAULT_WHATSAPP_NUMBER),
            background_image: pick("backgroundImage", ""),
            store_name: pick("storeName", DEFAULT_STORE_NAME),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::from_map(&HashMap::new())
    }
}

/// Filters the catalog by the active category chip. [`ALL_CATEGORIES`] means
/// no filtering; anything else is an exact match on the product's category.
#[must_use]
pub fn filter_by_category<'a>(
    products: &'a [product::Model],
    active: &str,
) -> Vec<&'a product::Model> {
    products
        .iter()
        .filter(|p| active == ALL_CATEGORIES || p.category == active)
        .collect()
}

/// Derives the category chip list from the live product collection: distinct
/// non-empty category values in first-appearance order. Deliberately NOT read
/// from the categories table.
#[must_use]
pub fn category_chips(products: &[product::Model]) -> Vec<String> {
    let mut chips: Vec<String> = Vec::new();
    for product in products {
        if !product.category.is_empty() && !chips.contains(&product.category) {
            chips.push(product.category.clone());
        }
    }
    chips
}

/// Composes the WhatsApp deep link for buying a product. The product's own
/// number wins over the site-wide one; the pre-filled message carries the
/// store name, product name, and price.
#[must_use]
pub fn buy_link(product: &product::Model, site: &SiteSettings) -> String {
    let number = product
        .whatsapp_number
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&site.whatsapp_number);
    let message = format!(
        "Hola {}! Me interesa comprar: {} (Q{}).",
        site.store_name, product.name, product.price
    );
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(&message))
}

/// The plain store-wide chat link, used outside the buy flow.
#[must_use]
pub fn chat_link(site: &SiteSettings) -> String {
    format!("https://wa.me/{}", site.whatsapp_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, whatsapp: Option<&str>) -> product::Model {
        product::Model {
            id: 0,
            name: name.to_string(),
            category: category.to_string(),
            price: 55,
            image: String::new(),
            description: String::new(),
            whatsapp_number: whatsapp.map(str::to_string),
            is_monthly: true,
            in_stock: true,
            show_checkmarks: true,
        }
    }

    #[test]
    fn test_filter_by_category() {
        let products = vec![
            product("Netflix", "streaming", None),
            product("Spotify", "musica", None),
            product("Disney+", "streaming", None),
        ];

        let all = filter_by_category(&products, ALL_CATEGORIES);
        assert_eq!(all.len(), 3);

        let streaming = filter_by_category(&products, "streaming");
        assert_eq!(streaming.len(), 2);
        assert!(streaming.iter().all(|p| p.category == "streaming"));

        let none = filter_by_category(&products, "juegos");
        assert!(none.is_empty());
    }

    #[test]
    fn test_category_chips_distinct_nonempty_in_order() {
        let products = vec![
            product("Netflix", "streaming", None),
            product("Misterio", "", None),
            product("Spotify", "musica", None),
            product("Disney+", "streaming", None),
        ];

        assert_eq!(category_chips(&products), vec!["streaming", "musica"]);
    }

    #[test]
    fn test_buy_link_prefers_product_number() {
        let site = SiteSettings::default();

        let with_own = product("Netflix", "streaming", Some("50211112222"));
        let link = buy_link(&with_own, &site);
        assert!(link.starts_with("https://wa.me/50211112222?text="));
        // Spaces and punctuation are percent-encoded
        assert!(link.contains("Hola%20PAUDRONIX%20GT%21"));
        assert!(link.contains("Netflix%20%28Q55%29."));

        let without = product("Netflix", "streaming", None);
        let link = buy_link(&without, &site);
        assert!(link.starts_with(&format!("https://wa.me/{DEFAULT_WHATSAPP_NUMBER}?text=")));

        // An empty override also falls back to the site number
        let empty = product("Netflix", "streaming", Some(""));
        let link = buy_link(&empty, &site);
        assert!(link.starts_with(&format!("https://wa.me/{DEFAULT_WHATSAPP_NUMBER}?text=")));
    }

    #[test]
    fn test_site_settings_defaults() {
        let mut map = HashMap::new();
        assert_eq!(
            SiteSettings::from_map(&map),
            SiteSettings {
                whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
                background_image: String::new(),
                store_name: DEFAULT_STORE_NAME.to_string(),
            }
        );

        map.insert("storeName".to_string(), "Tienda Nueva".to_string());
        map.insert("whatsappNumber".to_string(), String::new());
        let resolved = SiteSettings::from_map(&map);
        assert_eq!(resolved.store_name, "Tienda Nueva");
        // Empty values fall back just like absent ones
        assert_eq!(resolved.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
    }
}
