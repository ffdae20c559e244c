//! Data transfer objects for the service layer.

pub mod order_dto;

pub use order_dto::*;
