//! Application state for Axum handlers.

use ordena_service::OrderService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<dyn OrderService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(order_service: Arc<dyn OrderService>) -> Self {
        Self { order_service }
    }
}
