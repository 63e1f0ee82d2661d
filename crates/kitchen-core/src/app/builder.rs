//! AppBuilder - builds and wires the application once at start-up.
//!
//! Store -> repository -> service, all constructed here and handed out
//! explicitly. No globals.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use super::config::{AppConfig, Environment, StorageBackend};
use super::service::OrderService;
use crate::impls::{FileRecordStore, InMemoryRecordStore, RecordOrderRepository};
use crate::ports::OrderRepository;

/// Data directory used by the file backend in development when none is set.
pub const DEVELOPMENT_DATA_DIR: &str = "./data";

/// AppBuilder validates configuration before anything is constructed.
///
/// # Example
/// ```ignore
/// let app = AppBuilder::new().config(config).build()?;
/// let queue = app.service().get_production_order_queue().await?;
/// ```
///
/// # Fail-fast
/// - A file backend needs a data directory (outside development).
/// - The table name becomes a directory name, so it must be a plain name.
/// - `repository()` overrides the configured backend entirely.
pub struct AppBuilder {
    config: AppConfig,
    repository: Option<Arc<dyn OrderRepository>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("storage backend 'file' requires a data directory")]
    MissingDataDir,

    #[error("invalid table name '{0}': must be non-empty and contain no path separators")]
    InvalidTable(String),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            repository: None,
        }
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this repository instead of building one from the config.
    pub fn repository(mut self, repository: Arc<dyn OrderRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        let repository = match self.repository {
            Some(repository) => repository,
            None => build_repository(&self.config)?,
        };
        Ok(App {
            config: self.config,
            service: OrderService::new(repository),
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_table(table: &str) -> Result<(), BuildError> {
    let bad = table.is_empty()
        || table == "."
        || table == ".."
        || table.contains(['/', '\\']);
    if bad {
        return Err(BuildError::InvalidTable(table.to_string()));
    }
    Ok(())
}

fn build_repository(config: &AppConfig) -> Result<Arc<dyn OrderRepository>, BuildError> {
    let storage = &config.storage;
    validate_table(&storage.table)?;

    match storage.backend {
        StorageBackend::Memory => {
            info!(table = %storage.table, "using in-memory order storage");
            Ok(Arc::new(RecordOrderRepository::new(InMemoryRecordStore::new())))
        }
        StorageBackend::File => {
            let data_dir = match (&storage.data_dir, config.environment) {
                (Some(dir), _) => dir.clone(),
                (None, Environment::Development) => PathBuf::from(DEVELOPMENT_DATA_DIR),
                (None, Environment::Production) => return Err(BuildError::MissingDataDir),
            };
            info!(
                data_dir = %data_dir.display(),
                table = %storage.table,
                "using file order storage"
            );
            Ok(Arc::new(RecordOrderRepository::new(FileRecordStore::new(
                data_dir,
                &storage.table,
            ))))
        }
    }
}

/// The wired application.
pub struct App {
    config: AppConfig,
    service: OrderService,
}

impl App {
    pub fn service(&self) -> &OrderService {
        &self.service
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
