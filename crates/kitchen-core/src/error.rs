use thiserror::Error;

use crate::domain::{ErrorKind, OrderId, ValidationError};
use crate::ports::RepositoryError;

/// Everything an `OrderService` operation can fail with.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("order already sent to production queue (order_id={order_id})")]
    Conflict { order_id: OrderId },

    #[error("cannot find production order (order_id={order_id})")]
    NotFound { order_id: OrderId },

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::Validation(_) | OrderError::Conflict { .. } | OrderError::NotFound { .. } => {
                ErrorKind::Client
            }
            OrderError::Storage(_) => ErrorKind::Infrastructure,
        }
    }
}
