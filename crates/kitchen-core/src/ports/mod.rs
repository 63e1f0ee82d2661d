//! Ports - abstraction layer.
//!
//! Hexagonal "ports": the traits the core needs from the outside world.
//!
//! - `OrderRepository`: typed order storage, used by the service.
//! - `RecordStore`: raw key-value table the bundled repository adapter
//!   is built on.

pub mod order_repository;
pub mod record_store;

pub use self::order_repository::{OrderRepository, RepositoryError};
pub use self::record_store::{RecordStore, RecordStoreError};
