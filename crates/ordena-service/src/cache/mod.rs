//! Caching infrastructure for the service layer.
//!
//! A best-effort, disposable acceleration layer holding serialized order
//! snapshots. Every failure here is non-fatal: reads fall through to the
//! store, writes are logged and dropped.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::OrderCache;
pub use redis_cache::RedisOrderCache;
