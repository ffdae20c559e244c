//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use ordena_core::OrdenaResult;

/// Key-value cache for serialized order snapshots.
///
/// Implementations hold JSON strings to stay dyn-compatible. Callers must
/// treat every error as non-fatal: a cache entry's absence is always a legal
/// state.
#[async_trait]
pub trait OrderCache: Send + Sync {
    /// Gets a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    async fn get_raw(&self, key: &str) -> OrdenaResult<Option<String>>;

    /// Sets a raw JSON value in the cache.
    async fn set_raw(&self, key: &str, value: &str) -> OrdenaResult<()>;

    /// Checks if caching is enabled.
    ///
    /// A disabled cache behaves as a permanent miss and a no-op write.
    fn is_enabled(&self) -> bool;
}
