//! Queue module: the kitchen display view and the policy that builds it.

pub mod policy;

pub use policy::{comes_first, remove_finished_orders, sort};

use serde::{Deserialize, Serialize};

use crate::domain::ProductionOrder;
use crate::observability::QueueCounts;

/// The production queue as shown to kitchen staff.
///
/// Derived on every read and owned by the caller; nothing keeps it in sync
/// with storage afterwards. Serializes as a bare array of orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionQueue {
    orders: Vec<ProductionOrder>,
}

impl ProductionQueue {
    /// Build the display view: drop finished orders, then sort by priority.
    pub fn from_orders(orders: Vec<ProductionOrder>) -> Self {
        let orders = sort(remove_finished_orders(orders));
        Self { orders }
    }

    pub fn orders(&self) -> &[ProductionOrder] {
        &self.orders
    }

    pub fn into_orders(self) -> Vec<ProductionOrder> {
        self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Status breakdown of the orders on display.
    pub fn counts(&self) -> QueueCounts {
        QueueCounts::from_orders(&self.orders)
    }
}

impl IntoIterator for ProductionQueue {
    type Item = ProductionOrder;
    type IntoIter = std::vec::IntoIter<ProductionOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductionStatus::{Done, Finished, InPreparation, Received};

    #[test]
    fn view_filters_then_sorts() {
        let queue = ProductionQueue::from_orders(vec![
            ProductionOrder::new(1, Received),
            ProductionOrder::new(2, Done),
            ProductionOrder::new(3, Finished),
        ]);
        assert_eq!(
            queue.orders(),
            &[ProductionOrder::new(2, Done), ProductionOrder::new(1, Received)]
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let queue = ProductionQueue::from_orders(vec![ProductionOrder::new(7, InPreparation)]);
        let json = serde_json::to_value(&queue).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "order_id": 7, "status": "EM_PREPARACAO" }])
        );
    }

    #[test]
    fn empty_store_gives_empty_queue() {
        let queue = ProductionQueue::from_orders(vec![]);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
