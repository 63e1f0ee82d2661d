//! OrderRepository port - typed access to stored production orders.
//!
//! The service only talks to this trait. Storage technology lives behind it
//! (see `impls::RecordOrderRepository` for the bundled adapters).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{OrderId, ProductionOrder};

/// Failures reported by a repository.
///
/// "No such order" is not an error: lookups return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend failed (I/O, connectivity, ...).
    #[error("backend error: {0}")]
    Backend(String),

    /// A stored record could not be encoded or decoded into an order.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A conditional create found the id already taken.
    #[error("order {0} already exists")]
    AlreadyExists(OrderId),
}

/// OrderRepository stores one record per order, keyed by order id.
///
/// # Contract
/// - `get_by_order_id` answers `Ok(None)` when the order does not exist.
/// - `create` refuses an id that is already stored with `AlreadyExists`
///   when the backend supports conditional writes.
/// - `update` changes the status only and returns the stored result.
/// - No retries, no caching: failures go straight back to the caller.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ProductionOrder>, RepositoryError>;

    async fn get_by_order_id(
        &self,
        order_id: OrderId,
    ) -> Result<Option<ProductionOrder>, RepositoryError>;

    async fn create(&self, order: ProductionOrder) -> Result<ProductionOrder, RepositoryError>;

    async fn update(&self, order: ProductionOrder) -> Result<ProductionOrder, RepositoryError>;
}
