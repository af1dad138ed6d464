//! Key-value persistence layer (lightweight for CLI usage).
//!
//! Every piece of persisted state lives under one key: the record
//! collection, the two role credentials, the session flags and the display
//! preferences. The backend is constructed once per process and passed by
//! reference to the components that need it, so tests can substitute the
//! in-memory variant.

pub mod defaults;
pub mod records;
pub mod watch;

pub use records::ServiceStore;
pub use watch::StoreWatcher;

use crate::errors::AppResult;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persisted key names. Stable within one data directory.
pub mod keys {
    pub const SERVICES: &str = "services.json";
    pub const PWD_ADMIN: &str = "pwd_admin";
    pub const PWD_EDITOR: &str = "pwd_editor";
    pub const AUTH: &str = "auth";
    pub const ROLE: &str = "role";
    pub const THEME: &str = "theme";
    pub const LANGUAGE: &str = "language";
}

/// Minimal key-value contract every backend provides.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// File-per-key backend rooted at the catalog data directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: &str) -> AppResult<Self> {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_of(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeyValue for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_of(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.path_of(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_of(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryBackend {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        if let Ok(mut map) = self.map.lock() {
            map.remove(key);
        }
        Ok(())
    }
}
