//! OrderService - production queue use cases.
//!
//! Orchestrates the repository, the entity rules and the queue policy. This
//! is the only place that makes business decisions; it holds no state of
//! its own besides the injected repository.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{OrderId, ProductionOrder, ProductionStatus};
use crate::error::OrderError;
use crate::observability::QueueCounts;
use crate::ports::{OrderRepository, RepositoryError};
use crate::queue::ProductionQueue;

#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Put a new order on the production queue with status `RECEBIDO`.
    ///
    /// Rejects an id that is already stored, whatever its status: sending
    /// twice is a client error, not a no-op.
    pub async fn send_order_to_production(
        &self,
        order_id: u32,
    ) -> Result<ProductionOrder, OrderError> {
        let order_id = OrderId::new(order_id);
        debug!(%order_id, "send order to production");

        if self.repository.get_by_order_id(order_id).await?.is_some() {
            warn!(%order_id, "order already in production");
            return Err(OrderError::Conflict { order_id });
        }

        let order = ProductionOrder {
            order_id,
            status: ProductionStatus::Received,
        };
        order.validate()?;

        let created = match self.repository.create(order).await {
            Ok(created) => created,
            // Another request created it between our lookup and write.
            Err(RepositoryError::AlreadyExists(_)) => {
                warn!(%order_id, "lost create race for order");
                return Err(OrderError::Conflict { order_id });
            }
            Err(e) => return Err(e.into()),
        };

        info!(%order_id, status = %created.status, "order sent to production");
        Ok(created)
    }

    /// Move an order to `status`.
    ///
    /// Any of the four statuses is accepted from any current status; there
    /// is no forward-only check.
    pub async fn update_production_order_status(
        &self,
        order_id: u32,
        status: &str,
    ) -> Result<ProductionOrder, OrderError> {
        let order_id = OrderId::new(order_id);
        debug!(%order_id, status, "update production order status");

        let Some(mut order) = self.repository.get_by_order_id(order_id).await? else {
            warn!(%order_id, "update for unknown order");
            return Err(OrderError::NotFound { order_id });
        };

        let previous = order.status;
        order.status = status.parse()?;
        order.validate()?;

        let updated = self.repository.update(order).await?;
        info!(%order_id, from = %previous, to = %updated.status, "order status updated");
        Ok(updated)
    }

    /// The kitchen display: unfinished orders, highest priority first.
    pub async fn get_production_order_queue(&self) -> Result<ProductionQueue, OrderError> {
        let orders = self.repository.get_all().await?;
        let stored = orders.len();
        let queue = ProductionQueue::from_orders(orders);
        debug!(stored, queued = queue.len(), "built production queue");
        Ok(queue)
    }

    /// Status breakdown of the current queue view.
    pub async fn queue_counts(&self) -> Result<QueueCounts, OrderError> {
        Ok(self.get_production_order_queue().await?.counts())
    }
}
