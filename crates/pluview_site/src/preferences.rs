// --- File: crates/pluview_site/src/preferences.rs ---
//! Key-value storage for visitor preferences. Values never expire.

use pluview_common::{storage_error, PluviewError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PluviewError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PluviewError>;
    fn remove(&mut self, key: &str) -> Result<(), PluviewError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PluviewError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PluviewError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PluviewError> {
        self.values.remove(key);
        Ok(())
    }
}

/// A flat JSON object on disk, rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PluviewError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|err| {
                storage_error(format!("corrupted preference file {}: {}", path.display(), err))
            })?
        } else {
            BTreeMap::new()
        };
        debug!("Opened preference store {} ({} keys)", path.display(), values.len());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PluviewError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PluviewError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PluviewError> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), PluviewError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
