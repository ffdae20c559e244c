//! # Ordena Repository
//!
//! The Durable Order Store: the system of record for orders. Exposes the
//! narrow [`OrderRepository`] contract consumed by the service layer, backed
//! by a MongoDB collection with store-generated `ObjectId` keys.

mod client;
pub mod mongo;
mod traits;

pub use client::*;
pub use mongo::MongoOrderRepository;
pub use traits::*;
