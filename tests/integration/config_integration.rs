//! Integration tests for configuration loading

use addressbook::config::ConfigLoader;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

// Config loading reads process-wide environment variables.
static CONFIG_ENV_MUTEX: Mutex<()> = Mutex::new(());

fn restore_var(key: &str, original: Option<String>) {
    match original {
        Some(value) => std::env::set_var(key, value),
        None => std::env::remove_var(key),
    }
}

fn write_workspace_file(workspace: &Path, name: &str, contents: &str) {
    let config_dir = workspace.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join(name), contents).unwrap();
}

/// Workspace config/config.toml is picked up
#[test]
fn test_workspace_config_file() {
    let _guard = CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    write_workspace_file(
        temp_dir.path(),
        "config.toml",
        "[storage]\ndata_file = \"contacts/book.json\"\n\n[logging]\nformat = \"json\"\n",
    );

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(
        config.storage.data_file,
        Some(PathBuf::from("contacts/book.json"))
    );
    assert_eq!(config.logging.format, "json");
    assert_eq!(
        config.storage.resolve_data_file(temp_dir.path()),
        temp_dir.path().join("contacts/book.json")
    );
}

/// Invalid values in a workspace file fail validation
#[test]
fn test_workspace_config_validation_error() {
    let _guard = CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    write_workspace_file(temp_dir.path(), "config.toml", "[logging]\noutput = \"printer\"\n");

    let err = ConfigLoader::load(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid log output"));
}

/// ADDRESSBOOK__SECTION__KEY variables override workspace files
#[test]
fn test_environment_overrides_workspace_file() {
    let _guard = CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var("ADDRESSBOOK__STORAGE__DATA_FILE").ok();

    let temp_dir = TempDir::new().unwrap();
    write_workspace_file(
        temp_dir.path(),
        "config.toml",
        "[storage]\ndata_file = \"from_file.json\"\n",
    );
    std::env::set_var("ADDRESSBOOK__STORAGE__DATA_FILE", "from_env.json");

    let loaded = ConfigLoader::load(temp_dir.path());
    restore_var("ADDRESSBOOK__STORAGE__DATA_FILE", original);

    let config = loaded.unwrap();
    assert_eq!(config.storage.data_file, Some(PathBuf::from("from_env.json")));
}

/// ADDRESSBOOK_ENV selects config/{env}.toml, which overrides config/config.toml
#[test]
fn test_environment_specific_workspace_file() {
    let _guard = CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var("ADDRESSBOOK_ENV").ok();

    let temp_dir = TempDir::new().unwrap();
    write_workspace_file(
        temp_dir.path(),
        "config.toml",
        "[storage]\ndata_file = \"base.json\"\n\n[logging]\nlevel = \"info\"\n",
    );
    write_workspace_file(
        temp_dir.path(),
        "staging.toml",
        "[storage]\ndata_file = \"staging.json\"\n",
    );
    std::env::set_var("ADDRESSBOOK_ENV", "staging");

    let loaded = ConfigLoader::load(temp_dir.path());
    restore_var("ADDRESSBOOK_ENV", original);

    let config = loaded.unwrap();
    assert_eq!(config.storage.data_file, Some(PathBuf::from("staging.json")));
    assert_eq!(config.logging.level, "info");
}

/// Global file under XDG_CONFIG_HOME is read and the workspace file wins over it
#[test]
fn test_global_config_below_workspace_file() {
    let _guard = CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var("XDG_CONFIG_HOME").ok();

    let config_home = TempDir::new().unwrap();
    let global_dir = config_home.path().join("addressbook");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.toml"),
        "[storage]\ndata_file = \"global.json\"\n\n[logging]\nformat = \"json\"\n",
    )
    .unwrap();
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());

    let bare_workspace = TempDir::new().unwrap();
    let global_only = ConfigLoader::load(bare_workspace.path());

    let workspace = TempDir::new().unwrap();
    write_workspace_file(
        workspace.path(),
        "config.toml",
        "[storage]\ndata_file = \"workspace.json\"\n",
    );
    let layered = ConfigLoader::load(workspace.path());
    restore_var("XDG_CONFIG_HOME", original);

    let global_only = global_only.unwrap();
    assert_eq!(
        global_only.storage.data_file,
        Some(PathBuf::from("global.json"))
    );
    assert_eq!(global_only.logging.format, "json");

    let layered = layered.unwrap();
    assert_eq!(layered.storage.data_file, Some(PathBuf::from("workspace.json")));
    assert_eq!(layered.logging.format, "json");
}
