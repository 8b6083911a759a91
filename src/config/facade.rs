//! ConfigLoader: the single entry point for reading configuration.

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::AddressBookConfig;
use crate::error::AddressBookError;
use config::{File, FileFormat};
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, global file, workspace
    /// files, then environment overrides.
    pub fn load(workspace_root: &Path) -> Result<AddressBookConfig, AddressBookError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        let builder = environment::add_to_builder(builder);

        let config: AddressBookConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load a single explicit TOML file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<AddressBookConfig, AddressBookError> {
        if !path.exists() {
            return Err(AddressBookError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config: AddressBookConfig = builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[storage]\ndata_file = \"contacts.json\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.storage.data_file, Some(PathBuf::from("contacts.json")));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.output, "stderr");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = ConfigLoader::load_from_file(Path::new("/nonexistent/addressbook.toml"));
        assert!(matches!(err, Err(AddressBookError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_logging_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();
        assert!(ConfigLoader::load_from_file(&path).is_err());
    }
}
