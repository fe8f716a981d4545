//!
//! The JSON file store.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::settings::value::Value;

use super::memory::MemoryStore;
use super::Store;

///
/// The JSON file store.
///
/// Changes are kept in memory until `flush` is called.
///
#[derive(Debug)]
pub struct JsonStore {
    /// The file path.
    path: PathBuf,
    /// The loaded groups.
    inner: MemoryStore,
}

impl JsonStore {
    ///
    /// Opens the store. A missing file yields an empty store.
    ///
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let inner = if path.exists() {
            let text = std::fs::read_to_string(path)
                .map_err(|error| anyhow::anyhow!("Settings file {path:?} reading error: {error}"))?;
            serde_json::from_str(text.as_str())
                .map_err(|error| anyhow::anyhow!("Settings file {path:?} parsing error: {error}"))?
        } else {
            MemoryStore::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    ///
    /// Writes the store to its file, creating the parent directories.
    ///
    pub fn flush(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Settings directory {parent:?} creating error: {error}")
            })?;
        }
        let contents = serde_json::to_string_pretty(&self.inner).expect("Always valid");
        std::fs::write(self.path.as_path(), contents).map_err(|error| {
            anyhow::anyhow!("Settings file {:?} writing error: {error}", self.path)
        })?;
        Ok(())
    }

    ///
    /// The file path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// The loaded groups.
    ///
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl Store for JsonStore {
    fn value(&self, group: &str, key: &str) -> Option<Value> {
        self.inner.value(group, key)
    }

    fn set_value(&mut self, group: &str, key: &str, value: Value) {
        self.inner.set_value(group, key, value);
    }

    fn remove_group(&mut self, group: &str) {
        self.inner.remove_group(group);
    }
}
