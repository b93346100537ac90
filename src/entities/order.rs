//! Order entity - Represents a customer order.
//!
//! `product_name` and `price` are snapshot fields: copied from the product at
//! order time and never re-synced if the product changes later. `date` is set
//! by the server at creation and `status` always starts as `pending`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name given by the customer at checkout
    pub customer_name: String,
    /// Customer phone number for the WhatsApp follow-up
    pub customer_phone: String,
    /// ID of the ordered product at the time of ordering
    pub product_id: i64,
    /// Product name snapshot taken at order time
    pub product_name: String,
    /// Price snapshot taken at order time
    pub price: i64,
    /// Server-set creation timestamp
    pub date: DateTime,
    /// One of `pending`, `completed`, `cancelled`
    pub status: String,
}

/// `Order` has no relationships with other entities - product data is
/// snapshotted, not referenced
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
