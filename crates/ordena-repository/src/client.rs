//! MongoDB client management.

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use ordena_config::DatabaseConfig;
use ordena_core::{OrdenaError, OrdenaResult};
use tracing::{info, warn};

/// Document store connection wrapper.
///
/// Holds the process-wide MongoDB client, shared across all concurrent
/// requests. The driver manages its own connection pooling, so the handle is
/// safe for concurrent use without additional locking.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connects to MongoDB using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> OrdenaResult<Self> {
        info!("Connecting to MongoDB at {}...", config.url);

        let mut options = ClientOptions::parse(&config.url).await.map_err(|e| {
            warn!("Failed to parse MongoDB URL: {}", e);
            OrdenaError::Database(format!("Invalid MongoDB URL: {e}"))
        })?;
        options.app_name = Some("ordena".to_string());
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.server_selection_timeout());

        let client = Client::with_options(options)
            .map_err(|e| OrdenaError::Database(format!("Failed to create client: {e}")))?;
        let db = client.database(&config.database);

        let store = Self { client, db };
        store.health_check().await?;

        info!("MongoDB connection established");
        Ok(store)
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> OrdenaResult<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| OrdenaError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    /// Returns a typed collection handle.
    #[must_use]
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Returns a reference to the underlying client.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns a reference to the database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl std::fmt::Debug for MongoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoStore")
            .field("database", &self.db.name())
            .finish_non_exhaustive()
    }
}
