//! Queue policy: which orders the kitchen display shows, and in what order.
//!
//! Pure functions over slices of orders. Nothing here touches storage.

use crate::domain::{ProductionOrder, ProductionStatus};

/// Drop every finished order, keeping the relative order of the rest.
pub fn remove_finished_orders(orders: Vec<ProductionOrder>) -> Vec<ProductionOrder> {
    orders
        .into_iter()
        .filter(|order| order.status.is_active())
        .collect()
}

/// Kitchen priority: should `a` be shown ahead of `b`?
///
/// Ready orders first, then the ones being prepared, then the newly received.
/// The relation is deliberately not a total order: it answers `true` both
/// ways for two orders in the same status, and for any pair involving a
/// finished order (the fallback). [`sort`] treats those pairs as ties.
pub fn comes_first(a: &ProductionOrder, b: &ProductionOrder) -> bool {
    match a.status {
        ProductionStatus::Done => true,
        ProductionStatus::Received => !matches!(
            b.status,
            ProductionStatus::Done | ProductionStatus::InPreparation
        ),
        ProductionStatus::InPreparation => b.status != ProductionStatus::Done,
        ProductionStatus::Finished => true,
    }
}

/// `a` must move ahead of `b`: the predicate holds one way only.
fn strictly_before(a: &ProductionOrder, b: &ProductionOrder) -> bool {
    comes_first(a, b) && !comes_first(b, a)
}

/// Reorder orders by kitchen priority.
///
/// Stable: ties keep their input order. Implemented as an insertion sort
/// because [`comes_first`] is not transitive once finished orders are
/// involved, and `slice::sort_by` may panic on such comparators. Display
/// queues are a few dozen orders, so the quadratic worst case is moot.
pub fn sort(mut orders: Vec<ProductionOrder>) -> Vec<ProductionOrder> {
    for i in 1..orders.len() {
        let mut j = i;
        while j > 0 && strictly_before(&orders[j], &orders[j - 1]) {
            orders.swap(j, j - 1);
            j -= 1;
        }
    }
    orders
}
