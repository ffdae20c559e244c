//! Repository trait definitions.

use async_trait::async_trait;
use ordena_core::{Order, OrderId, OrdenaResult};

/// Durable order store contract.
///
/// Orders are write-once: there is no update or delete operation. The store
/// generates identifiers on insert and never reassigns them.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts a new order and returns the store-generated identifier.
    async fn insert(&self, order: &Order) -> OrdenaResult<OrderId>;

    /// Finds an order by ID.
    async fn find_by_id(&self, id: OrderId) -> OrdenaResult<Option<Order>>;

    /// Finds all orders, unbounded, in store iteration order.
    ///
    /// A single record that fails to decode aborts the whole operation with
    /// a decoding error; there are no partial results.
    async fn find_all(&self) -> OrdenaResult<Vec<Order>>;
}
