//! # Ordena Server
//!
//! Main entry point for the Ordena order API. Wires the MongoDB store, the
//! Redis cache, and the order service together with explicit constructor
//! injection, then serves the Axum router until a shutdown signal arrives.

use ordena_config::{ConfigLoader, RedisConfig};
use ordena_core::{OrdenaError, OrdenaResult};
use ordena_repository::{MongoOrderRepository, MongoStore};
use ordena_rest::{create_router, AppState};
use ordena_service::{OrderCache, OrderServiceImpl, RedisOrderCache};
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Ordena server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

async fn run() -> OrdenaResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Connect to the document store (includes a ping)
    let store = MongoStore::connect(&config.database).await?;
    let repository = Arc::new(MongoOrderRepository::new(
        &store,
        &config.database.orders_collection,
    ));

    // Build the cache, which may be disabled by configuration
    let cache = build_cache(&config.redis)?;

    // Explicit constructor wiring: the service holds its two collaborator
    // handles for the life of the process.
    let order_service = Arc::new(OrderServiceImpl::new(repository, cache));

    // Create application state and router
    let app_state = AppState::new(order_service);
    let router = create_router(app_state, &config.server);

    // Start the HTTP server
    let addr = config.server.addr();
    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| OrdenaError::Internal(format!("Failed to bind {addr}: {e}")))?;

    // Once shutdown begins, in-flight requests get at most the configured
    // drain window before the remaining connections are aborted.
    let (drain_tx, drain_rx) = oneshot::channel();
    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = drain_tx.send(());
        })
        .into_future();

    match drain_with_deadline(server, drain_rx, config.server.shutdown_timeout()).await {
        Some(result) => {
            result.map_err(|e| OrdenaError::Internal(format!("HTTP server error: {e}")))?;
        }
        None => warn!(
            "Drain window of {}s elapsed, aborting remaining connections",
            config.server.shutdown_timeout_secs
        ),
    }

    Ok(())
}

/// Awaits the server future, bounding its drain phase.
///
/// The server runs unbounded until `shutdown_started` resolves; from then on
/// in-flight requests get at most `window` to finish. `None` means the window
/// elapsed with connections still open.
async fn drain_with_deadline<F: Future>(
    server: F,
    shutdown_started: oneshot::Receiver<()>,
    window: Duration,
) -> Option<F::Output> {
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return Some(result),
        _ = shutdown_started => {
            info!("Draining in-flight requests for up to {}s", window.as_secs());
        }
    }

    tokio::time::timeout(window, server).await.ok()
}

/// Builds the Redis-backed cache, or a no-op cache when disabled.
fn build_cache(config: &RedisConfig) -> OrdenaResult<Arc<dyn OrderCache>> {
    if !config.enabled {
        warn!("Redis cache is disabled; all lookups will hit the store");
        return Ok(Arc::new(RedisOrderCache::disabled()));
    }

    let mut pool_config = deadpool_redis::Config::from_url(&config.url);
    pool_config.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size));

    let pool = pool_config
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| OrdenaError::Configuration(format!("Failed to create Redis pool: {e}")))?;

    info!("Redis connection pool created");
    Ok(Arc::new(RedisOrderCache::with_ttl(
        Arc::new(pool),
        config.ttl(),
    )))
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ordena=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
