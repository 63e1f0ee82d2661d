//! InMemoryRecordStore - record table kept in process memory.
//!
//! Used by tests and by the CLI's `memory` backend. Nothing survives a
//! restart.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::ports::record_store::apply_attribute;
use crate::ports::{RecordStore, RecordStoreError};

/// InMemoryRecordStore keeps records in a `BTreeMap` behind an async lock.
///
/// Cloning shares the same table.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Store a record unconditionally, bypassing the conditional create.
    ///
    /// For seeding fixtures, including malformed ones.
    pub async fn insert_raw(&self, key: impl Into<String>, record: Value) {
        self.records.write().await.insert(key.into(), record);
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn scan(&self) -> Result<Vec<Value>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, key: &str) -> Result<Value, RecordStoreError> {
        let records = self.records.read().await;
        records.get(key).cloned().ok_or(RecordStoreError::NotFound)
    }

    async fn put_if_absent(&self, key: &str, record: Value) -> Result<(), RecordStoreError> {
        let mut records = self.records.write().await;
        match records.entry(key.to_string()) {
            Entry::Occupied(_) => Err(RecordStoreError::AlreadyExists(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn set_attribute(
        &self,
        key: &str,
        attribute: &str,
        value: Value,
    ) -> Result<Value, RecordStoreError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(key).ok_or(RecordStoreError::NotFound)?;
        apply_attribute(record, attribute, value)?;
        Ok(record.clone())
    }
}
