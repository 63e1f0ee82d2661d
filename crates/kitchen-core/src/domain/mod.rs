//! Domain model: order ids, production status, the order entity and
//! validation errors.

pub mod errors;
pub mod ids;
pub mod order;
pub mod state;

pub use self::errors::{ErrorKind, ValidationError};
pub use self::ids::OrderId;
pub use self::order::{OrderRecord, ProductionOrder};
pub use self::state::ProductionStatus;
