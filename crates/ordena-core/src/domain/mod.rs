//! # Ordena Domain
//!
//! Domain entities for the order API. The `Order` is the system's central
//! entity: created once, persisted, read many times, never updated or
//! deleted.

pub mod entities;

pub use entities::*;
