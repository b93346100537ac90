//! Order business logic - Handles customer order creation and status changes.
//!
//! Orders snapshot the product name and price at creation time; those copies
//! are never re-synced with the catalog. The creation path ignores any
//! client-supplied date or status: the date is server-set and every order
//! starts out `pending`.

use crate::{
    entities::{Order, order},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Status of a freshly created order.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// The full set of order statuses accepted by [`update_order_status`].
pub const ORDER_STATUSES: [&str; 3] = ["pending", "completed", "cancelled"];

/// Insert payload for a new order. Unknown fields in the request body (such
/// as a client-supplied `date` or `status`) are dropped during
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Name given by the customer
    pub customer_name: String,
    /// Customer phone number
    pub customer_phone: String,
    /// ID of the ordered product
    pub product_id: i64,
    /// Product name, snapshotted into the order
    pub product_name: String,
    /// Price, snapshotted into the order
    pub price: i64,
}

/// Retrieves the full order collection.
pub async fn get_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>> {
    Order::find().all(db).await.map_err(Into::into)
}

/// Creates a new order with a server-set date and `pending` status.
pub async fn create_order(db: &DatabaseConnection, new: NewOrder) -> Result<order::Model> {
    let order = order::ActiveModel {
        customer_name: Set(new.customer_name),
        customer_phone: Set(new.customer_phone),
        product_id: Set(new.product_id),
        product_name: Set(new.product_name),
        price: Set(new.price),
        date: Set(chrono::Utc::now().naive_utc()),
        status: Set(ORDER_STATUS_PENDING.to_string()),
        ..Default::default()
    };
    order.insert(db).await.map_err(Into::into)
}

/// Updates only an order's status. Returns None when the order does not
/// exist.
///
/// # Errors
/// Returns a validation error when the status is not one of
/// [`ORDER_STATUSES`].
pub async fn update_order_status(
    db: &DatabaseConnection,
    order_id: i64,
    status: &str,
) -> Result<Option<order::Model>> {
    if !ORDER_STATUSES.contains(&status) {
        return Err(Error::validation(format!("Unknown order status: {status}")));
    }

    let Some(existing) = Order::find_by_id(order_id).one(db).await? else {
        return Ok(None);
    };

    let mut order: order::ActiveModel = existing.into();
    order.status = Set(status.to_string());

    order.update(db).await.map(Some).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_order, create_test_product, setup_test_db};

    #[tokio::test]
    async fn test_create_order_snapshots_and_defaults() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Netflix", "streaming").await?;

        let before = chrono::Utc::now().naive_utc();
        let order = create_order(
            &db,
            NewOrder {
                customer_name: "Maria".to_string(),
                customer_phone: "50255554444".to_string(),
                product_id: product.id,
                product_name: product.name.clone(),
                price: product.price,
            },
        )
        .await?;
        let after = chrono::Utc::now().naive_utc();

        assert_eq!(order.status, ORDER_STATUS_PENDING);
        assert!(order.date >= before && order.date <= after);
        assert_eq!(order.product_name, product.name);
        assert_eq!(order.price, product.price);

        Ok(())
    }

    #[tokio::test]
    async fn test_order_snapshot_survives_product_change() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Disney+", "streaming").await?;
        let order = create_test_order(&db, &product, "Carlos").await?;

        // Rename the product and change its price after the order exists
        crate::core::products::update_product(
            &db,
            product.id,
            crate::core::products::ProductPatch {
                name: Some("Disney+ Premium".to_string()),
                price: Some(99),
                ..Default::default()
            },
        )
        .await?;

        let orders = get_orders(&db).await?;
        let stored = orders.iter().find(|o| o.id == order.id).unwrap();
        assert_eq!(stored.product_name, "Disney+");
        assert_eq!(stored.price, product.price);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_order_status() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Spotify", "musica").await?;
        let order = create_test_order(&db, &product, "Lucia").await?;

        let completed = update_order_status(&db, order.id, "completed")
            .await?
            .unwrap();
        assert_eq!(completed.status, "completed");
        // The rest of the order is untouched
        assert_eq!(completed.customer_name, order.customer_name);
        assert_eq!(completed.date, order.date);

        let missing = update_order_status(&db, order.id + 999, "cancelled").await?;
        assert!(missing.is_none());

        let invalid = update_order_status(&db, order.id, "shipped").await;
        assert!(matches!(invalid.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }
}
