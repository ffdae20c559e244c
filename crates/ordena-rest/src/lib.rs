//! # Ordena REST
//!
//! REST API layer using Axum for Ordena.
//! Provides the HTTP endpoints for order management and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
