//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global config file,
//! workspace config files, then `ADDRESSBOOK__*` environment variables.

use crate::error::AddressBookError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

pub const DEFAULT_DATA_FILE_NAME: &str = "addressbook.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBookConfig {
    /// Where the address book is stored
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Explicit data file; relative paths resolve against the workspace root
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// File name used inside the default data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_DATA_FILE_NAME.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            file_name: default_file_name(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.data_file {
            if path.as_os_str().is_empty() {
                return Err("Data file path cannot be empty".to_string());
            }
        }
        if self.file_name.trim().is_empty() {
            return Err("Data file name cannot be empty".to_string());
        }
        Ok(())
    }

    /// Resolve the data file: explicit path first, then the platform data
    /// directory, then `<workspace>/data/`.
    pub fn resolve_data_file(&self, workspace_root: &Path) -> PathBuf {
        if let Some(ref path) = self.data_file {
            return if path.is_absolute() {
                path.clone()
            } else {
                workspace_root.join(path)
            };
        }
        match directories::ProjectDirs::from("", "", "addressbook") {
            Some(dirs) => dirs.data_dir().join(&self.file_name),
            None => workspace_root.join("data").join(&self.file_name),
        }
    }
}

impl AddressBookConfig {
    pub fn validate(&self) -> Result<(), AddressBookError> {
        let mut errors = Vec::new();
        if let Err(e) = self.storage.validate() {
            errors.push(format!("storage: {}", e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(format!("logging: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AddressBookError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}
