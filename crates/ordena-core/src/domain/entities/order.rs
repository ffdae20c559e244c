//! Order entity.

use crate::{OrderId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single product line in an order.
///
/// Quantity and price are caller-supplied and carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Identifier of the purchased product.
    pub product_id: String,

    /// Purchased quantity.
    pub quantity: i32,

    /// Unit price at purchase time.
    pub price: f64,
}

/// Shipping destination for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Order entity: the persisted purchase record.
///
/// An order is immutable after creation. `id` is assigned exactly once, by
/// the store on insert, and is never reassigned; `updated_at` is set at
/// creation and never revised because no update path exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-generated identifier. `None` until the insert completes, so the
    /// document is serialized without `_id` and the store assigns one.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,

    /// Purchasing user, generated server-side at creation.
    pub user_id: UserId,

    /// Ordered sequence of product lines. May be empty.
    pub products: Vec<OrderItem>,

    /// Caller-supplied monetary total. Not recomputed from `products`.
    pub total_amount: f64,

    /// Free-form order status string.
    pub order_status: String,

    /// Free-form payment method string.
    pub payment_method: String,

    /// Shipping destination.
    pub shipping_address: ShippingAddress,

    /// Creation timestamp, server-assigned.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp. Equal to `created_at` for the entity's lifetime.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order from caller-supplied fields.
    ///
    /// Assigns a fresh `user_id` and sets both timestamps to now. The `id`
    /// stays `None` until the store generates one.
    #[must_use]
    pub fn new(
        products: Vec<OrderItem>,
        total_amount: f64,
        order_status: String,
        payment_method: String,
        shipping_address: ShippingAddress,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: UserId::new(),
            products,
            total_amount,
            order_status,
            payment_method,
            shipping_address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of this order with the store-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order::new(
            vec![OrderItem {
                product_id: "p-100".to_string(),
                quantity: 2,
                price: 9.99,
            }],
            19.98,
            "pending".to_string(),
            "credit_card".to_string(),
            ShippingAddress {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip: "62701".to_string(),
                country: "US".to_string(),
            },
        )
    }

    #[test]
    fn test_new_order_has_no_id() {
        let order = sample_order();
        assert!(order.id.is_none());
    }

    #[test]
    fn test_new_order_assigns_fresh_user_id() {
        let a = sample_order();
        let b = sample_order();
        assert_ne!(a.user_id, b.user_id);
    }

    #[test]
    fn test_new_order_timestamps_match() {
        let order = sample_order();
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_unsaved_order_serializes_without_id() {
        let order = sample_order();
        let doc = bson::to_document(&order).unwrap();
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_saved_order_serializes_with_id() {
        let order = sample_order().with_id(OrderId::new());
        let doc = bson::to_document(&order).unwrap();
        assert!(doc.contains_key("_id"));
    }

    #[test]
    fn test_empty_products_is_accepted() {
        let order = Order::new(
            vec![],
            0.0,
            String::new(),
            String::new(),
            ShippingAddress::default(),
        );
        assert!(order.products.is_empty());
    }
}
