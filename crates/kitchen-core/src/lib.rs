//! kitchen-core
//!
//! Production-order queue engine for a kitchen display.
//!
//! # Modules
//! - **domain**: order entity, production status, validation errors
//! - **queue**: the kitchen display view and its filter/priority policy
//! - **ports**: storage abstractions (`OrderRepository`, `RecordStore`)
//! - **impls**: in-memory and file record stores, typed repository adapter
//! - **app**: `OrderService` use cases, configuration, `AppBuilder` wiring
//! - **error**: service error taxonomy
//! - **observability**: queue status counts

pub mod app;
pub mod domain;
pub mod error;
pub mod impls;
pub mod observability;
pub mod ports;
pub mod queue;

pub use app::{App, AppBuilder, AppConfig, OrderService};
pub use domain::{OrderId, ProductionOrder, ProductionStatus, ValidationError};
pub use error::OrderError;
pub use queue::ProductionQueue;
