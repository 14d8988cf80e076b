// Storage backends for the cache.
// A storage is a flat set of named string slots, on disk or in memory.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{FolioError, Result};

use super::paths::slot_path;

/// Namespaced string slots, the way a browser exposes local storage.
pub trait Storage: Send + Sync {
    fn get_item(&self, slot: &str) -> Result<Option<String>>;
    fn set_item(&self, slot: &str, value: &str) -> Result<()>;
    fn remove_item(&self, slot: &str) -> Result<()>;
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn get_item(&self, slot: &str) -> Result<Option<String>> {
        (**self).get_item(slot)
    }

    fn set_item(&self, slot: &str, value: &str) -> Result<()> {
        (**self).set_item(slot, value)
    }

    fn remove_item(&self, slot: &str) -> Result<()> {
        (**self).remove_item(slot)
    }
}

/// One JSON file per slot under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[cfg(test)]
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn get_item(&self, slot: &str) -> Result<Option<String>> {
        let path = slot_path(&self.dir, slot);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set_item(&self, slot: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = slot_path(&self.dir, slot);

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn remove_item(&self, slot: &str) -> Result<()> {
        let path = slot_path(&self.dir, slot);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-process storage, used with `--no-cache` and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage that rejects every write, like a full or disabled store.
    pub fn read_only() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| FolioError::Storage("memory storage lock poisoned".to_string()))
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(slot).cloned())
    }

    fn set_item(&self, slot: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(FolioError::Storage(format!("quota exceeded writing {slot}")));
        }
        self.lock()?.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, slot: &str) -> Result<()> {
        self.lock()?.remove(slot);
        Ok(())
    }
}
