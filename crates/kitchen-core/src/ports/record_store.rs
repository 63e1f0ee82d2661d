//! RecordStore port - loosely-typed table access.
//!
//! A record store knows nothing about orders: it keeps JSON objects under a
//! string hash key, like a single key-value table. Turning those records into
//! entities is the repository adapter's job.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// No record under the requested key.
    #[error("no item found")]
    NotFound,

    /// `put_if_absent` found the key already taken.
    #[error("item already exists: {0}")]
    AlreadyExists(String),

    /// A record could not be read or written as JSON.
    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// RecordStore is the raw table the order repository sits on.
///
/// # Design
/// - Keys are the decimal order id; values are JSON objects.
/// - `put_if_absent` must be atomic: of two concurrent calls for one key,
///   exactly one succeeds.
/// - `set_attribute` updates one attribute in place and returns the whole
///   record as stored afterwards.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every record in the table, in no guaranteed order.
    async fn scan(&self) -> Result<Vec<Value>, RecordStoreError>;

    async fn get(&self, key: &str) -> Result<Value, RecordStoreError>;

    async fn put_if_absent(&self, key: &str, record: Value) -> Result<(), RecordStoreError>;

    async fn set_attribute(
        &self,
        key: &str,
        attribute: &str,
        value: Value,
    ) -> Result<Value, RecordStoreError>;
}

/// Set `attribute` on a JSON object record.
pub(crate) fn apply_attribute(
    record: &mut Value,
    attribute: &str,
    value: Value,
) -> Result<(), RecordStoreError> {
    match record.as_object_mut() {
        Some(fields) => {
            fields.insert(attribute.to_string(), value);
            Ok(())
        }
        None => Err(RecordStoreError::Malformed(format!(
            "expected an object, found {record}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn apply_attribute_overwrites_one_field() {
        let mut record = json!({ "ID": 1, "Status": "RECEBIDO" });
        apply_attribute(&mut record, "Status", json!("PRONTO")).unwrap();
        assert_eq!(record, json!({ "ID": 1, "Status": "PRONTO" }));
    }

    #[test]
    fn apply_attribute_rejects_non_objects() {
        let mut record = json!([1, 2, 3]);
        let err = apply_attribute(&mut record, "Status", json!("PRONTO")).unwrap_err();
        assert!(matches!(err, RecordStoreError::Malformed(_)));
    }
}
