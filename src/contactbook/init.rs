//! Session setup: where the data lives and which settings apply.
//!
//! Data directory precedence:
//! 1. an explicit override (the `--data-dir` flag),
//! 2. the `CONTACTBOOK_HOME` environment variable,
//! 3. the OS data directory from the `directories` crate.
//!
//! `config.json` is read from that directory; the address book file named by the
//! config (or by `--file`) lives next to it.

use crate::config::BookConfig;
use crate::error::{ContactError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const HOME_ENV: &str = "CONTACTBOOK_HOME";

pub struct BookContext {
    pub config: BookConfig,
    pub store: FileStore,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "contactbook", "contactbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ContactError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>, file_override: Option<String>) -> Result<BookContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = BookConfig::load(&data_dir)?.with_data_file(file_override);
    let store = FileStore::in_dir(&data_dir, &config.data_file);

    tracing::debug!(data_dir = %data_dir.display(), file = %config.data_file, "initialized");

    Ok(BookContext { config, store })
}
