//! App - application layer.
//!
//! Combines the ports into use cases.
//!
//! # Components
//! - **OrderService**: send / update / queue use cases
//! - **AppBuilder**: configuration check and wiring
//! - **AppConfig**: storage and environment settings

pub mod builder;
pub mod config;
pub mod service;

pub use self::builder::{App, AppBuilder, BuildError};
pub use self::config::{AppConfig, Environment, StorageBackend, StorageConfig};
pub use self::service::OrderService;
