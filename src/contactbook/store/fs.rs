use super::BookStore;
use crate::book::AddressBook;
use crate::error::{ContactError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `file_name` inside `dir`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "addressbook".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()))
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no saved address book, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(ContactError::Io)?;
        let book: AddressBook =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;
        tracing::info!(path = %self.path.display(), contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;

        let content = serde_json::to_string_pretty(book).map_err(ContactError::Serialization)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(ContactError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ContactError::Io)?;

        tracing::info!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }
}
