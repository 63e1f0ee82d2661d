//! RecordOrderRepository - typed order repository over a raw record store.
//!
//! This is the one place where loosely-typed records become
//! [`ProductionOrder`]s. Anything that does not decode cleanly is reported as
//! a serialization error instead of leaking a half-valid entity.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::domain::{OrderId, OrderRecord, ProductionOrder};
use crate::ports::{OrderRepository, RecordStore, RecordStoreError, RepositoryError};

/// Attribute updated by [`OrderRepository::update`].
const STATUS_ATTRIBUTE: &str = "Status";

pub struct RecordOrderRepository<S> {
    store: S,
}

impl<S: RecordStore> RecordOrderRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn decode(record: Value) -> Result<ProductionOrder, RepositoryError> {
    let raw: OrderRecord = serde_json::from_value(record)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
    ProductionOrder::try_from(raw).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn encode(order: ProductionOrder) -> Result<Value, RepositoryError> {
    serde_json::to_value(OrderRecord::from(order))
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

impl From<RecordStoreError> for RepositoryError {
    fn from(err: RecordStoreError) -> Self {
        match err {
            RecordStoreError::Malformed(msg) => RepositoryError::Serialization(msg),
            other => RepositoryError::Backend(other.to_string()),
        }
    }
}

#[async_trait]
impl<S: RecordStore> OrderRepository for RecordOrderRepository<S> {
    /// All stored orders, ordered by id.
    async fn get_all(&self) -> Result<Vec<ProductionOrder>, RepositoryError> {
        let records = self.store.scan().await?;
        let mut orders = records
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()?;
        orders.sort_by_key(|order| order.order_id);
        Ok(orders)
    }

    async fn get_by_order_id(
        &self,
        order_id: OrderId,
    ) -> Result<Option<ProductionOrder>, RepositoryError> {
        match self.store.get(&order_id.as_key()).await {
            Ok(record) => decode(record).map(Some),
            Err(RecordStoreError::NotFound) => {
                debug!(%order_id, "no stored order");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create(&self, order: ProductionOrder) -> Result<ProductionOrder, RepositoryError> {
        let record = encode(order)?;
        match self.store.put_if_absent(&order.order_id.as_key(), record).await {
            Ok(()) => Ok(order),
            Err(RecordStoreError::AlreadyExists(_)) => {
                Err(RepositoryError::AlreadyExists(order.order_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, order: ProductionOrder) -> Result<ProductionOrder, RepositoryError> {
        let status = Value::String(order.status.as_str().to_string());
        let record = self
            .store
            .set_attribute(&order.order_id.as_key(), STATUS_ATTRIBUTE, status)
            .await?;
        decode(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductionStatus;
    use crate::impls::{FileRecordStore, InMemoryRecordStore};
    use serde_json::json;

    fn repository() -> RecordOrderRepository<InMemoryRecordStore> {
        RecordOrderRepository::new(InMemoryRecordStore::new())
    }

    #[tokio::test]
    async fn create_then_lookup() {
        let repo = repository();
        let created = repo.create(ProductionOrder::received(5)).await.unwrap();
        assert_eq!(created, ProductionOrder::received(5));

        let found = repo.get_by_order_id(OrderId::new(5)).await.unwrap();
        assert_eq!(found, Some(ProductionOrder::received(5)));
    }

    #[tokio::test]
    async fn lookup_of_unknown_id_is_none_not_error() {
        let repo = repository();
        assert_eq!(repo.get_by_order_id(OrderId::new(999)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn stored_shape_matches_table_layout() {
        let repo = repository();
        repo.create(ProductionOrder::new(3, ProductionStatus::Done))
            .await
            .unwrap();
        assert_eq!(
            repo.store().get("3").await.unwrap(),
            json!({ "ID": 3, "Status": "PRONTO" })
        );
    }

    #[tokio::test]
    async fn duplicate_create_reports_already_exists() {
        let repo = repository();
        repo.create(ProductionOrder::received(1)).await.unwrap();
        let err = repo.create(ProductionOrder::received(1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(id) if id == OrderId::new(1)));
    }

    #[tokio::test]
    async fn update_changes_status_only() {
        let repo = repository();
        repo.store()
            .insert_raw("5", json!({ "ID": 5, "Status": "RECEBIDO", "Table": 12 }))
            .await;

        let updated = repo
            .update(ProductionOrder::new(5, ProductionStatus::InPreparation))
            .await
            .unwrap();
        assert_eq!(updated, ProductionOrder::new(5, ProductionStatus::InPreparation));

        let raw = repo.store().get("5").await.unwrap();
        assert_eq!(raw["Status"], "EM_PREPARACAO");
        assert_eq!(raw["Table"], 12);
    }

    #[tokio::test]
    async fn update_of_missing_record_is_backend_error() {
        let repo = repository();
        let err = repo
            .update(ProductionOrder::new(8, ProductionStatus::Done))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Backend(_)));
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() {
        let repo = repository();
        for id in [10, 2, 33, 4] {
            repo.create(ProductionOrder::received(id)).await.unwrap();
        }
        let ids: Vec<u32> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|o| o.order_id.get())
            .collect();
        assert_eq!(ids, vec![2, 4, 10, 33]);
    }

    #[tokio::test]
    async fn unknown_stored_status_is_a_serialization_error() {
        let repo = repository();
        repo.store()
            .insert_raw("6", json!({ "ID": 6, "Status": "QUEIMADO" }))
            .await;

        let err = repo.get_by_order_id(OrderId::new(6)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
        assert!(matches!(
            repo.get_all().await,
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn record_missing_attributes_is_a_serialization_error() {
        let repo = repository();
        repo.store().insert_raw("7", json!({ "ID": 7 })).await;
        let err = repo.get_by_order_id(OrderId::new(7)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[tokio::test]
    async fn round_trips_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RecordOrderRepository::new(FileRecordStore::new(dir.path(), "production_order"));

        repo.create(ProductionOrder::received(5)).await.unwrap();
        repo.update(ProductionOrder::new(5, ProductionStatus::Done))
            .await
            .unwrap();

        let reopened =
            RecordOrderRepository::new(FileRecordStore::new(dir.path(), "production_order"));
        assert_eq!(
            reopened.get_all().await.unwrap(),
            vec![ProductionOrder::new(5, ProductionStatus::Done)]
        );
    }
}
