//! File-backed implementation of the StringStore trait.
//!
//! One file per key under a root directory, the desktop analog of the web
//! client's localStorage. Values are rewritten whole through a temp file
//! and rename, so a reader never observes a torn value.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;
use crate::traits::StringStore;

/// File-per-key store rooted at a directory.
///
/// Keys are used as file names; the stores in this crate only ever use
/// simple names (`cart`, `token`).
///
/// ## Example
/// ```rust,ignore
/// let store = FileStore::open("~/.velo-shop")?;
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "file store opened");
        Ok(FileStore { root })
    }

    /// The directory this store reads and writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StringStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        // Full rewrite through a sibling temp file; rename is atomic on
        // the same filesystem.
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[{\"quantity\":2}]").unwrap();
        assert_eq!(
            store.get("cart").unwrap().as_deref(),
            Some("[{\"quantity\":2}]")
        );
    }

    #[test]
    fn test_reopen_sees_previous_writes() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("token", "abc123").unwrap();
        }

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("token").unwrap().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("token", "abc123").unwrap();
        store.remove("token").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("profile").join("velo");

        let mut store = FileStore::open(&nested).unwrap();
        store.set("cart", "[]").unwrap();
        assert!(nested.join("cart").exists());
    }
}
