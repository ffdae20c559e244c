//! # Ordena Service
//!
//! Business logic service layer for Ordena. Contains the order service core:
//! cache-aside reads with store fallback and fire-and-forget cache population
//! on writes.

pub mod cache;
pub mod dto;
pub mod order_service;
pub mod order_service_impl;

pub use cache::*;
pub use dto::*;
pub use order_service::*;
pub use order_service_impl::OrderServiceImpl;
