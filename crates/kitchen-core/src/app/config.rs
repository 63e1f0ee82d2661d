//! Application configuration.
//!
//! Plain data with defaults. Loading it (flags, environment, files) is the
//! binary's business; the core only validates and consumes it.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE: &str = "production_order";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

/// Where orders are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process memory; lost on exit.
    #[default]
    Memory,
    /// JSON files under `StorageConfig::data_dir`.
    File,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::File => f.write_str("file"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            other => Err(format!("unknown storage backend '{other}' (expected memory or file)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: Option<PathBuf>,
    pub table: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: None,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub storage: StorageConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_setup() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.table, "production_order");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "storage": { "backend": "file", "data_dir": "/var/lib/kitchen" } }"#)
                .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.table, DEFAULT_TABLE);
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/var/lib/kitchen"))
        );
    }

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!("FILE".parse::<StorageBackend>(), Ok(StorageBackend::File));
        assert_eq!("memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert!("dynamo".parse::<StorageBackend>().is_err());
    }
}
