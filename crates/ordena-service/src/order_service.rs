//! Order service trait definition.

use crate::dto::{CreateOrderRequest, CreateOrderResponse, OrderListResponse, OrderResponse};
use async_trait::async_trait;
use ordena_core::OrdenaResult;

/// Order service: the read/write path over the durable store and the cache.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Creates a new order.
    ///
    /// Persists the order durably, then schedules a fire-and-forget cache
    /// write that never affects the caller's result.
    async fn create_order(&self, request: CreateOrderRequest) -> OrdenaResult<CreateOrderResponse>;

    /// Lists all orders, unbounded, in store iteration order.
    async fn list_orders(&self) -> OrdenaResult<OrderListResponse>;

    /// Gets a single order by its identifier string.
    ///
    /// Cache-aside with store fallback: the cache is probed with the raw
    /// identifier before format validation; a store-path hit is NOT written
    /// back to the cache.
    async fn get_order(&self, id: &str) -> OrdenaResult<OrderResponse>;
}
