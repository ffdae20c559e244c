//! Order management controller.

use crate::{
    extractors::JsonBody,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use ordena_service::{CreateOrderRequest, CreateOrderResponse, OrderListResponse, OrderResponse};
use tracing::debug;

/// Creates the order router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:orderId", get(get_order))
}

/// Create a new order.
async fn create_order(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), AppError> {
    debug!("Create order request");

    let response = state.order_service.create_order(request).await?;
    Ok(created(response))
}

/// List all orders.
async fn list_orders(State(state): State<AppState>) -> ApiResult<OrderListResponse> {
    debug!("List orders request");

    let response = state.order_service.list_orders().await?;
    ok(response)
}

/// Get an order by ID.
async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<OrderResponse> {
    debug!("Get order request: {}", order_id);

    // The raw path parameter goes straight to the service: the cache is
    // probed before the identifier's format is validated.
    let response = state.order_service.get_order(&order_id).await?;
    ok(response)
}
