//! Impls - port implementations.
//!
//! # Included
//! - **InMemoryRecordStore**: process-local table (tests, demos)
//! - **FileRecordStore**: one JSON file per order under a data directory
//! - **RecordOrderRepository**: `OrderRepository` on top of any `RecordStore`

pub mod file_records;
pub mod inmem_records;
pub mod record_repository;

pub use self::file_records::FileRecordStore;
pub use self::inmem_records::InMemoryRecordStore;
pub use self::record_repository::RecordOrderRepository;
