//! MongoDB order repository.

use crate::{MongoStore, OrderRepository};
use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::error::ErrorKind;
use mongodb::Collection;
use ordena_core::{Order, OrderId, OrdenaError, OrdenaResult};
use tracing::{debug, error};

/// MongoDB-backed order repository.
pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    /// Creates a repository over the given collection.
    #[must_use]
    pub fn new(store: &MongoStore, collection_name: &str) -> Self {
        Self {
            collection: store.collection(collection_name),
        }
    }

    fn map_error(err: &mongodb::error::Error) -> OrdenaError {
        match *err.kind {
            ErrorKind::BsonDeserialization(_) => {
                OrdenaError::Decoding(format!("Failed to decode order document: {err}"))
            }
            _ => OrdenaError::Database(err.to_string()),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    async fn insert(&self, order: &Order) -> OrdenaResult<OrderId> {
        let result = self.collection.insert_one(order).await.map_err(|e| {
            error!("Failed to insert order: {}", e);
            Self::map_error(&e)
        })?;

        // _id is omitted from the document when the entity has no id, so the
        // inserted_id is always a store-generated ObjectId.
        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            OrdenaError::Database("Store returned a non-ObjectId inserted id".to_string())
        })?;

        debug!("Inserted order {}", oid.to_hex());
        Ok(OrderId::from_object_id(oid))
    }

    async fn find_by_id(&self, id: OrderId) -> OrdenaResult<Option<Order>> {
        self.collection
            .find_one(doc! { "_id": id.into_inner() })
            .await
            .map_err(|e| {
                error!("Failed to fetch order {}: {}", id, e);
                Self::map_error(&e)
            })
    }

    async fn find_all(&self) -> OrdenaResult<Vec<Order>> {
        let mut cursor = self.collection.find(doc! {}).await.map_err(|e| {
            error!("Failed to fetch orders: {}", e);
            Self::map_error(&e)
        })?;

        let mut orders = Vec::new();
        // One undecodable record fails the whole listing; no partial results.
        while let Some(order) = cursor.try_next().await.map_err(|e| {
            error!("Error decoding order during listing: {}", e);
            Self::map_error(&e)
        })? {
            orders.push(order);
        }

        Ok(orders)
    }
}

impl std::fmt::Debug for MongoOrderRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoOrderRepository")
            .field("collection", &self.collection.name())
            .finish()
    }
}
