//! Order-related DTOs.

use chrono::{DateTime, Utc};
use ordena_core::{Order, OrderItem, ShippingAddress};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product line in a create-order request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

/// Shipping address in a create-order request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShippingAddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Request to create a new order.
///
/// Absent fields default to their zero values; only type mismatches fail the
/// decode. There are deliberately no field constraints: an empty `products`
/// list is accepted, and `total_amount` is trusted as supplied rather than
/// recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct CreateOrderRequest {
    pub products: Vec<OrderItemRequest>,
    pub total_amount: f64,
    pub order_status: String,
    pub payment_method: String,
    pub shipping_address: ShippingAddressRequest,
}

impl CreateOrderRequest {
    /// Builds the domain entity, assigning server-side identity and
    /// timestamps. Any client-supplied id or user id is ignored.
    #[must_use]
    pub fn into_order(self) -> Order {
        Order::new(
            self.products
                .into_iter()
                .map(|item| OrderItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            self.total_amount,
            self.order_status,
            self.payment_method,
            ShippingAddress {
                street: self.shipping_address.street,
                city: self.shipping_address.city,
                state: self.shipping_address.state,
                zip: self.shipping_address.zip,
                country: self.shipping_address.country,
            },
        )
    }
}

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// Hex rendering of the store-generated identifier.
    pub id: String,
}

/// A product line in an order response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

/// Shipping address in an order response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddressResponse {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Full order response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub products: Vec<OrderItemResponse>,
    pub total_amount: f64,
    pub order_status: String,
    pub payment_method: String,
    pub shipping_address: ShippingAddressResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: order.user_id.to_hex(),
            products: order
                .products
                .into_iter()
                .map(|item| OrderItemResponse {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            total_amount: order.total_amount,
            order_status: order.order_status,
            payment_method: order.payment_method,
            shipping_address: ShippingAddressResponse {
                street: order.shipping_address.street,
                city: order.shipping_address.city,
                state: order.shipping_address.state,
                zip: order.shipping_address.zip,
                country: order.shipping_address.country,
            },
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Response to a list request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<Order>> for OrderListResponse {
    fn from(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into_iter().map(OrderResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let request: CreateOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(request.products.is_empty());
        assert_eq!(request.total_amount, 0.0);
        assert!(request.order_status.is_empty());
    }

    #[test]
    fn test_type_mismatch_fails_decode() {
        let result: Result<CreateOrderRequest, _> =
            serde_json::from_str(r#"{"total_amount": "not-a-number"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_order_copies_payload_fields() {
        let request = CreateOrderRequest {
            products: vec![OrderItemRequest {
                product_id: "p-1".to_string(),
                quantity: 3,
                price: 2.5,
            }],
            total_amount: 7.5,
            order_status: "pending".to_string(),
            payment_method: "pix".to_string(),
            shipping_address: ShippingAddressRequest {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip: "62701".to_string(),
                country: "US".to_string(),
            },
        };

        let order = request.into_order();
        assert_eq!(order.products.len(), 1);
        assert_eq!(order.products[0].quantity, 3);
        assert_eq!(order.total_amount, 7.5);
        assert_eq!(order.order_status, "pending");
        assert_eq!(order.shipping_address.city, "Springfield");
        assert!(order.id.is_none());
    }

    #[test]
    fn test_order_response_renders_hex_ids() {
        let order = CreateOrderRequest::default()
            .into_order()
            .with_id(ordena_core::OrderId::new());
        let response = OrderResponse::from(order);
        assert_eq!(response.id.len(), 24);
        assert_eq!(response.user_id.len(), 24);
    }
}
