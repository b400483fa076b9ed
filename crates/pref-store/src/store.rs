//! Persisted boolean key/value storage
//!
//! Keys are full preference symbols. Only raw values are ever written here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{Result, io};

/// Backend that remembers raw preference values between sessions
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `default` if nothing is stored.
    fn get_bool(&self, key: &str, default: bool) -> Result<bool>;

    /// Store `value` under `key`.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()>;

    /// Make previous `set_bool` calls durable.
    ///
    /// Backends that write through on every call can keep the default no-op.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory store, used by tests and by hosts that persist elsewhere
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for `key`, without a fallback
    pub fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.get(key).unwrap_or(default))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a flat TOML table of `SYMBOL = true|false`
///
/// The file is read once on [`open`](Self::open). Writes are buffered and
/// written atomically on [`flush`](PreferenceStore::flush).
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
    /// Unflushed writes pending
    dirty: bool,
}

impl TomlPreferenceStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// table of booleans.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values: BTreeMap<String, bool> = io::load_toml_or_default(&path)?;
        tracing::debug!(?path, entries = values.len(), "Opened preference store");
        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored value for `key`, without a fallback
    pub fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.get(key).unwrap_or(default))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        if self.values.insert(key.to_string(), value) != Some(value) {
            self.dirty = true;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty && self.path.exists() {
            return Ok(());
        }
        io::save_toml(&self.path, &self.values)?;
        self.dirty = false;
        tracing::debug!(path = ?self.path, entries = self.values.len(), "Flushed preference store");
        Ok(())
    }
}
