use serde::{Deserialize, Serialize};

use crate::domain::{ProductionOrder, ProductionStatus};

/// How many orders sit in each status of a queue view.
///
/// Finished orders never reach a queue view, so there is no counter for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub received: usize,
    pub in_preparation: usize,
    pub done: usize,
}

impl QueueCounts {
    pub fn from_orders(orders: &[ProductionOrder]) -> Self {
        let mut counts = QueueCounts::default();
        for order in orders {
            match order.status {
                ProductionStatus::Received => counts.received += 1,
                ProductionStatus::InPreparation => counts.in_preparation += 1,
                ProductionStatus::Done => counts.done += 1,
                ProductionStatus::Finished => {}
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.received + self.in_preparation + self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductionStatus::{Done, Finished, InPreparation, Received};

    #[test]
    fn counts_by_status() {
        let orders = [
            ProductionOrder::new(1, Received),
            ProductionOrder::new(2, Received),
            ProductionOrder::new(3, InPreparation),
            ProductionOrder::new(4, Done),
            ProductionOrder::new(5, Finished),
        ];
        let counts = QueueCounts::from_orders(&orders);
        assert_eq!(counts.received, 2);
        assert_eq!(counts.in_preparation, 1);
        assert_eq!(counts.done, 1);
        assert_eq!(counts.total(), 4);
    }
}
