//!
//! The settings.
//!

pub mod path;
pub mod store;
pub mod value;


use std::path::Path;
use std::path::PathBuf;

use self::store::Store;
use self::value::Value;

/// The directories group.
pub const DIRS_GROUP: &str = "Dirs";

/// The application directory key of the directories group.
pub const APP_KEY: &str = "app";

///
/// The settings.
///
/// Wraps the store with typed accessors and the portable path conversion
/// relative to the application directory.
///
#[derive(Debug)]
pub struct Settings<S: Store> {
    /// The underlying store.
    store: S,
    /// The application directory.
    app_directory: PathBuf,
}

impl<S: Store> Settings<S> {
    ///
    /// Creates the settings and records the application directory.
    ///
    pub fn new(mut store: S, app_directory: PathBuf) -> Self {
        let app_directory = std::path::absolute(app_directory.as_path()).unwrap_or(app_directory);
        store.set_value(
            DIRS_GROUP,
            APP_KEY,
            Value::from(app_directory.to_string_lossy().into_owned()),
        );
        Self {
            store,
            app_directory,
        }
    }

    ///
    /// The application directory.
    ///
    pub fn app_directory(&self) -> &Path {
        self.app_directory.as_path()
    }

    ///
    /// The underlying store.
    ///
    pub fn store(&self) -> &S {
        &self.store
    }

    ///
    /// Unwraps the underlying store.
    ///
    pub fn into_store(self) -> S {
        self.store
    }

    ///
    /// Returns the string, or an empty one if the key is missing.
    ///
    pub fn string(&self, group: &str, key: &str) -> String {
        self.store
            .value(group, key)
            .map(Value::into_string)
            .unwrap_or_default()
    }

    ///
    /// Returns the boolean, or `false` if the key is missing.
    ///
    pub fn bool(&self, group: &str, key: &str) -> bool {
        self.store
            .value(group, key)
            .map(|value| value.to_bool())
            .unwrap_or_default()
    }

    ///
    /// Returns the integer, or the `default` if the key is missing.
    ///
    pub fn integer(&self, group: &str, key: &str, default: i64) -> i64 {
        self.store
            .value(group, key)
            .map(|value| value.to_integer())
            .unwrap_or(default)
    }

    ///
    /// Returns the string list, or an empty one if the key is missing.
    ///
    pub fn list(&self, group: &str, key: &str) -> Vec<String> {
        self.store
            .value(group, key)
            .map(Value::into_list)
            .unwrap_or_default()
    }

    ///
    /// Returns the path stored in the portable form.
    ///
    pub fn path(&self, group: &str, key: &str) -> PathBuf {
        path::from_portable(self.string(group, key).as_str(), self.app_directory())
    }

    ///
    /// Returns the path list stored in the portable form.
    ///
    pub fn paths(&self, group: &str, key: &str) -> Vec<PathBuf> {
        self.list(group, key)
            .iter()
            .filter(|value| !value.is_empty())
            .map(|value| path::from_portable(value.as_str(), self.app_directory()))
            .collect()
    }

    ///
    /// Sets the value.
    ///
    pub fn set<V>(&mut self, group: &str, key: &str, value: V)
    where
        V: Into<Value>,
    {
        self.store.set_value(group, key, value.into());
    }

    ///
    /// Sets the path in the portable form.
    ///
    pub fn set_path(&mut self, group: &str, key: &str, path: &Path) {
        let value = path::to_portable(path, self.app_directory.as_path());
        self.store.set_value(group, key, Value::String(value));
    }

    ///
    /// Sets the path list in the portable form.
    ///
    pub fn set_paths(&mut self, group: &str, key: &str, paths: &[PathBuf]) {
        let values = paths
            .iter()
            .map(|path| path::to_portable(path.as_path(), self.app_directory.as_path()))
            .collect();
        self.store.set_value(group, key, Value::List(values));
    }

    ///
    /// Removes the group.
    ///
    pub fn remove_group(&mut self, group: &str) {
        self.store.remove_group(group);
    }
}
