//! File-backed slot store
//!
//! One `<key>.json` file per slot inside a directory. Lets the core run
//! outside a browser.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the slot directory
    pub fn open(dir: impl AsRef<Path>) -> DomainResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| DomainError::Storage(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> DomainResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(DomainError::InvalidInput(format!("slot key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!("{}: {}", path.display(), e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        let path = self.slot_path(key)?;
        fs::write(&path, value).map_err(|e| DomainError::Storage(format!("{}: {}", path.display(), e)))
    }
}
