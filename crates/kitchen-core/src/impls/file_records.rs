//! FileRecordStore - record table persisted as JSON files.
//!
//! Layout: `<base_dir>/<table>/<key>.json`, one file per record. Writes go to
//! a temporary file first and are then linked/renamed into place, so readers
//! never observe a half-written record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::ports::record_store::apply_attribute;
use crate::ports::{RecordStore, RecordStoreError};

const RECORD_EXTENSION: &str = "json";

/// FileRecordStore keeps one JSON document per key on disk.
///
/// # Atomicity
/// - `put_if_absent` hard-links a fully written temp file to the final path;
///   the link fails if the path exists, so only one creator can win, even
///   across processes.
/// - `set_attribute` serializes in-process writers with a mutex and replaces
///   the file with an atomic rename. Two processes updating the same record
///   concurrently is last-writer-wins.
pub struct FileRecordStore {
    table_dir: PathBuf,
    write_lock: Mutex<()>,
    tmp_counter: AtomicU64,
}

impl FileRecordStore {
    pub fn new(base_dir: impl Into<PathBuf>, table: &str) -> Self {
        Self {
            table_dir: base_dir.into().join(table),
            write_lock: Mutex::new(()),
            tmp_counter: AtomicU64::new(0),
        }
    }

    pub fn table_dir(&self) -> &Path {
        &self.table_dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.table_dir
            .join(format!("{}.{RECORD_EXTENSION}", sanitize_key(key)))
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        let n = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        self.table_dir.join(format!(
            ".{}.{}.{n}.tmp",
            sanitize_key(key),
            std::process::id()
        ))
    }

    async fn ensure_table_dir(&self) -> Result<(), RecordStoreError> {
        fs::create_dir_all(&self.table_dir)
            .await
            .map_err(|e| backend("create table dir", &self.table_dir, e))
    }

    async fn read_record(path: &Path) -> Result<Value, RecordStoreError> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(RecordStoreError::NotFound),
            Err(e) => return Err(backend("read", path, e)),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| RecordStoreError::Malformed(format!("{}: {e}", path.display())))
    }

    async fn write_tmp(&self, key: &str, record: &Value) -> Result<PathBuf, RecordStoreError> {
        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| RecordStoreError::Malformed(e.to_string()))?;
        let tmp = self.tmp_path(key);
        fs::write(&tmp, bytes)
            .await
            .map_err(|e| backend("write", &tmp, e))?;
        Ok(tmp)
    }
}

/// Keys become file names; keep them inside the table directory.
fn sanitize_key(key: &str) -> String {
    key.replace(['/', '\\', ':', '.'], "_")
}

/// Best-effort removal of a temp file; a leftover is skipped by `scan`.
async fn discard_tmp(tmp: &Path) {
    match fs::remove_file(tmp).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %tmp.display(), error = %e, "failed to remove temp record"),
    }
}

fn backend(action: &str, path: &Path, e: std::io::Error) -> RecordStoreError {
    RecordStoreError::Backend(format!("{action} {}: {e}", path.display()))
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn scan(&self) -> Result<Vec<Value>, RecordStoreError> {
        let mut entries = match fs::read_dir(&self.table_dir).await {
            Ok(entries) => entries,
            // Nothing written yet.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(backend("list", &self.table_dir, e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| backend("list", &self.table_dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            match Self::read_record(&path).await {
                Ok(record) => records.push(record),
                // Removed between listing and reading.
                Err(RecordStoreError::NotFound) => continue,
                Err(e) => return Err(e),
            }
        }
        debug!(table = %self.table_dir.display(), count = records.len(), "scanned records");
        Ok(records)
    }

    async fn get(&self, key: &str) -> Result<Value, RecordStoreError> {
        Self::read_record(&self.record_path(key)).await
    }

    async fn put_if_absent(&self, key: &str, record: Value) -> Result<(), RecordStoreError> {
        self.ensure_table_dir().await?;
        let target = self.record_path(key);
        let tmp = self.write_tmp(key, &record).await?;

        let linked = fs::hard_link(&tmp, &target).await;
        discard_tmp(&tmp).await;
        match linked {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(RecordStoreError::AlreadyExists(key.to_string()))
            }
            Err(e) => Err(backend("create", &target, e)),
        }
    }

    async fn set_attribute(
        &self,
        key: &str,
        attribute: &str,
        value: Value,
    ) -> Result<Value, RecordStoreError> {
        let _guard = self.write_lock.lock().await;
        let target = self.record_path(key);
        let mut record = Self::read_record(&target).await?;
        apply_attribute(&mut record, attribute, value)?;

        let tmp = self.write_tmp(key, &record).await?;
        if let Err(e) = fs::rename(&tmp, &target).await {
            discard_tmp(&tmp).await;
            return Err(backend("replace", &target, e));
        }
        Ok(record)
    }
}
