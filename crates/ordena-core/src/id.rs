//! Typed ID wrappers for domain entities.
//!
//! Identifiers are store-generated BSON `ObjectId`s: fixed-length,
//! hex-renderable tokens. The wrappers keep order and user identifiers from
//! being mixed up at compile time.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for order IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub ObjectId);

impl OrderId {
    /// Creates a new random order ID.
    ///
    /// In the production path the store assigns the identifier on insert;
    /// this constructor exists for tests and in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Creates an order ID from an `ObjectId`.
    #[must_use]
    pub const fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Parses an order ID from its hex representation.
    pub fn parse(s: &str) -> Result<Self, bson::oid::Error> {
        Ok(Self(ObjectId::parse_str(s)?))
    }

    /// Returns the hex rendering of the identifier.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Returns the inner `ObjectId`.
    #[must_use]
    pub const fn into_inner(self) -> ObjectId {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for OrderId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<OrderId> for ObjectId {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for user IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub ObjectId);

impl UserId {
    /// Creates a new random user ID.
    ///
    /// Assigned server-side at order creation; never taken from the client.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Returns the hex rendering of the identifier.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Returns the inner `ObjectId`.
    #[must_use]
    pub const fn into_inner(self) -> ObjectId {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}
