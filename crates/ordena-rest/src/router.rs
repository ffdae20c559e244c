//! Main application router.

use crate::{
    controllers::{health_controller, order_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use ordena_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .nest("/orders", order_controller::router())
        .with_state(state);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // Order API
        .merge(api_router)
        // Root endpoint
        .route("/", get(root))
        // Middleware layers (the last layer added runs first)
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!("Router created with order endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Ordena Order API v1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use ordena_core::{OrderId, OrdenaError, OrdenaResult};
    use ordena_service::{
        CreateOrderRequest, CreateOrderResponse, OrderListResponse, OrderResponse, OrderService,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Stub service: one seeded order, everything else is a miss.
    struct StubOrderService {
        known_id: String,
    }

    impl StubOrderService {
        fn new() -> Self {
            Self {
                known_id: OrderId::new().to_hex(),
            }
        }

        fn seeded_response(&self) -> OrderResponse {
            OrderResponse::from(
                CreateOrderRequest::default()
                    .into_order()
                    .with_id(OrderId::parse(&self.known_id).unwrap()),
            )
        }
    }

    #[async_trait]
    impl OrderService for StubOrderService {
        async fn create_order(
            &self,
            _request: CreateOrderRequest,
        ) -> OrdenaResult<CreateOrderResponse> {
            Ok(CreateOrderResponse {
                id: self.known_id.clone(),
            })
        }

        async fn list_orders(&self) -> OrdenaResult<OrderListResponse> {
            Ok(OrderListResponse { orders: vec![] })
        }

        async fn get_order(&self, id: &str) -> OrdenaResult<OrderResponse> {
            if id == self.known_id {
                return Ok(self.seeded_response());
            }
            if OrderId::parse(id).is_err() {
                return Err(OrdenaError::invalid_id(id));
            }
            Err(OrdenaError::not_found("Order", id))
        }
    }

    fn test_router() -> Router {
        let state = AppState::new(Arc::new(StubOrderService::new()));
        create_router(state, &ServerConfig::default())
    }

    fn router_with(service: StubOrderService) -> (Router, String) {
        let id = service.known_id.clone();
        let state = AppState::new(Arc::new(service));
        (create_router(state, &ServerConfig::default()), id)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_orders_returns_201_with_id() {
        let router = test_router();

        let response = router
            .oneshot(
                Request::post("/orders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"total_amount": 10.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
    }

    #[tokio::test]
    async fn test_post_orders_malformed_json_is_400_with_message() {
        let router = test_router();

        let response = router
            .oneshot(
                Request::post("/orders")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn test_get_orders_returns_envelope() {
        let router = test_router();

        let response = router
            .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["orders"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_get_order_by_id_returns_order() {
        let (router, id) = router_with(StubOrderService::new());

        let response = router
            .oneshot(
                Request::get(format!("/orders/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"].as_str().unwrap(), id);
    }

    #[tokio::test]
    async fn test_get_order_malformed_id_is_flat_400() {
        let router = test_router();

        let response = router
            .oneshot(
                Request::get("/orders/not-an-objectid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Invalid order ID format");
    }

    #[tokio::test]
    async fn test_get_order_not_found_is_flat_400() {
        let router = test_router();

        let response = router
            .oneshot(
                Request::get(format!("/orders/{}", OrderId::new().to_hex()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // The observed contract collapses not-found to 400, not 404.
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Failed to fetch order");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = test_router();

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let router = test_router();

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_slow_request_hits_server_timeout() {
        /// A service whose listing outlives any reasonable request window.
        struct SlowOrderService;

        #[async_trait]
        impl OrderService for SlowOrderService {
            async fn create_order(
                &self,
                _request: CreateOrderRequest,
            ) -> OrdenaResult<CreateOrderResponse> {
                Err(OrdenaError::internal("unused"))
            }

            async fn list_orders(&self) -> OrdenaResult<OrderListResponse> {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                Ok(OrderListResponse { orders: vec![] })
            }

            async fn get_order(&self, id: &str) -> OrdenaResult<OrderResponse> {
                Err(OrdenaError::not_found("Order", id))
            }
        }

        let state = AppState::new(Arc::new(SlowOrderService));
        let config = ServerConfig {
            request_timeout_secs: 0,
            ..ServerConfig::default()
        };
        let router = create_router(state, &config);

        let response = router
            .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
