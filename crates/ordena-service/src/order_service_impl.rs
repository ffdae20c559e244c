//! Order service implementation.

use crate::cache::{cache_keys, OrderCache};
use crate::dto::{CreateOrderRequest, CreateOrderResponse, OrderListResponse, OrderResponse};
use crate::order_service::OrderService;
use async_trait::async_trait;
use ordena_core::{Order, OrderId, OrdenaError, OrdenaResult, ValidateExt};
use ordena_repository::OrderRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Order service over a durable store and a best-effort cache.
///
/// Stateless apart from its two collaborator handles, which are
/// constructor-injected and shared process-wide.
pub struct OrderServiceImpl<R: OrderRepository> {
    repository: Arc<R>,
    cache: Arc<dyn OrderCache>,
}

impl<R: OrderRepository> OrderServiceImpl<R> {
    /// Creates a new order service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn OrderCache>) -> Self {
        Self { repository, cache }
    }

    /// Schedules a fire-and-forget cache write for a freshly created order.
    ///
    /// The task is detached from the request's lifetime: it is not awaited,
    /// survives the response being sent, and swallows every failure. There is
    /// no ordering guarantee relative to the caller receiving the identifier.
    fn schedule_cache_population(&self, order: Order) {
        let Some(id) = order.id else {
            // Unreachable on the create path; the store just assigned the id.
            warn!("Skipping cache population for an order without an id");
            return;
        };

        let cache = Arc::clone(&self.cache);
        tokio::spawn(async move {
            let key = cache_keys::order_by_id(&id.to_hex());
            let payload = match serde_json::to_string(&order) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Failed to serialize order {} for caching: {}", id, e);
                    return;
                }
            };

            if let Err(e) = cache.set_raw(&key, &payload).await {
                warn!("Failed to cache order {}: {}", id, e);
            } else {
                debug!("Cached order {}", id);
            }
        });
    }
}

#[async_trait]
impl<R: OrderRepository + 'static> OrderService for OrderServiceImpl<R> {
    async fn create_order(&self, request: CreateOrderRequest) -> OrdenaResult<CreateOrderResponse> {
        request.validate_request()?;

        let order = request.into_order();
        let id = self.repository.insert(&order).await?;
        let order = order.with_id(id);

        // Exactly one durable write has happened; the cache write below is
        // best-effort and never affects the caller's result.
        self.schedule_cache_population(order);

        info!("Order created: {}", id);
        Ok(CreateOrderResponse { id: id.to_hex() })
    }

    async fn list_orders(&self) -> OrdenaResult<OrderListResponse> {
        debug!("Listing orders");

        let orders = self.repository.find_all().await?;
        Ok(OrderListResponse::from(orders))
    }

    async fn get_order(&self, id: &str) -> OrdenaResult<OrderResponse> {
        debug!("Getting order: {}", id);

        // Cache first, with the raw identifier: a hit short-circuits format
        // validation entirely, and any cache failure falls through silently.
        let key = cache_keys::order_by_id(id);
        match self.cache.get_raw(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Order>(&payload) {
                Ok(order) => {
                    debug!("Serving order {} from cache", id);
                    return Ok(OrderResponse::from(order));
                }
                Err(e) => {
                    debug!("Undecodable cache entry for '{}', falling back: {}", key, e);
                }
            },
            Ok(None) => {}
            Err(e) => {
                debug!("Cache lookup failed for '{}', falling back: {}", key, e);
            }
        }

        let order_id = OrderId::parse(id).map_err(|_| OrdenaError::invalid_id(id))?;

        let order = self
            .repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrdenaError::not_found("Order", id))?;

        // No read repair: a store-path hit leaves the cache entry absent.
        Ok(OrderResponse::from(order))
    }
}

impl<R: OrderRepository> std::fmt::Debug for OrderServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderServiceImpl").finish_non_exhaustive()
    }
}
