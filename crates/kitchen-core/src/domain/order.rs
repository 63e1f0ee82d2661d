//! Production order entity and its persisted record shape.

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::ids::OrderId;
use super::state::ProductionStatus;

/// One order being tracked through kitchen production.
///
/// A plain value object: the service decides when it is created or changed,
/// `validate` decides whether it may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub order_id: OrderId,
    pub status: ProductionStatus,
}

impl ProductionOrder {
    pub fn new(order_id: u32, status: ProductionStatus) -> Self {
        Self {
            order_id: OrderId::new(order_id),
            status,
        }
    }

    /// A freshly enqueued order.
    pub fn received(order_id: u32) -> Self {
        Self::new(order_id, ProductionStatus::Received)
    }

    /// Check the entity invariants.
    ///
    /// The status half of the invariant is carried by the type; raw strings
    /// are checked when they are parsed (see [`OrderRecord::validate`]).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.order_id.is_blank() {
            return Err(ValidationError::blank("order_id"));
        }
        Ok(())
    }
}

/// Storage representation: one record per order keyed by `ID`.
///
/// `Status` is an untrusted string here. Records only become
/// [`ProductionOrder`]s through `TryFrom`, which validates both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Status")]
    pub status: String,
}

impl OrderRecord {
    pub fn validate(&self) -> Result<ProductionOrder, ValidationError> {
        let status = self.status.parse::<ProductionStatus>()?;
        let order = ProductionOrder::new(self.id, status);
        order.validate()?;
        Ok(order)
    }
}

impl From<ProductionOrder> for OrderRecord {
    fn from(order: ProductionOrder) -> Self {
        Self {
            id: order.order_id.get(),
            status: order.status.as_str().to_string(),
        }
    }
}

impl TryFrom<OrderRecord> for ProductionOrder {
    type Error = ValidationError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        record.validate()
    }
}
