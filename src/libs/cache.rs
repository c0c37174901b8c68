//! Owner-scoped key-value cache for client-side data.
//!
//! Entries are addressed by a [`Scope`] (a signed-in owner or the guest) and a
//! base key such as `"tasks"`. Scopes never share entries, and
//! [`ScopedCache::invalidate`] drops everything held for one scope, which is
//! what logging out does.
//!
//! Two implementations are provided: [`MemoryCache`] for tests and short-lived
//! processes, and [`FileCache`] which keeps one JSON document per scope in the
//! data directory.

use super::data_storage::DataStorage;
use anyhow::Result;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub const CACHE_DIR_NAME: &str = "cache";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Guest,
    User(String),
}

impl Scope {
    fn file_stem(&self) -> String {
        match self {
            Scope::Guest => "guest".to_string(),
            Scope::User(owner) => {
                let safe: String = owner
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
                    .collect();
                format!("user-{}", safe)
            }
        }
    }
}

pub trait ScopedCache {
    fn get(&self, scope: &Scope, base_key: &str) -> Result<Option<Value>>;
    fn put(&self, scope: &Scope, base_key: &str, value: Value) -> Result<()>;
    fn invalidate(&self, scope: &Scope) -> Result<()>;
}

/// Typed read; an entry that no longer matches `T` is treated as absent.
pub fn get_as<T: DeserializeOwned>(cache: &dyn ScopedCache, scope: &Scope, base_key: &str) -> Result<Option<T>> {
    match cache.get(scope, base_key)? {
        Some(value) => match serde_json::from_value(value) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(err) => {
                tracing::warn!(base_key, %err, "discarding unreadable cache entry");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

pub fn put_as<T: Serialize + ?Sized>(cache: &dyn ScopedCache, scope: &Scope, base_key: &str, value: &T) -> Result<()> {
    cache.put(scope, base_key, serde_json::to_value(value)?)
}

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<Scope, HashMap<String, Value>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScopedCache for MemoryCache {
    fn get(&self, scope: &Scope, base_key: &str) -> Result<Option<Value>> {
        Ok(self.entries.lock().get(scope).and_then(|entries| entries.get(base_key)).cloned())
    }

    fn put(&self, scope: &Scope, base_key: &str, value: Value) -> Result<()> {
        self.entries
            .lock()
            .entry(scope.clone())
            .or_default()
            .insert(base_key.to_string(), value);
        Ok(())
    }

    fn invalidate(&self, scope: &Scope) -> Result<()> {
        self.entries.lock().remove(scope);
        Ok(())
    }
}

/// One `<scope>.json` object per scope, mapping base keys to values.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new() -> Result<Self> {
        Ok(Self::at(DataStorage::new().get_dir(CACHE_DIR_NAME)?))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, scope: &Scope) -> PathBuf {
        self.dir.join(format!("{}.json", scope.file_stem()))
    }

    fn load(&self, scope: &Scope) -> Result<Map<String, Value>> {
        let path = self.path(scope);
        if !path.exists() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&fs::read_to_string(&path)?)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

impl ScopedCache for FileCache {
    fn get(&self, scope: &Scope, base_key: &str) -> Result<Option<Value>> {
        Ok(self.load(scope)?.remove(base_key))
    }

    fn put(&self, scope: &Scope, base_key: &str, value: Value) -> Result<()> {
        let mut entries = self.load(scope)?;
        entries.insert(base_key.to_string(), value);
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(scope), serde_json::to_string_pretty(&Value::Object(entries))?)?;
        Ok(())
    }

    fn invalidate(&self, scope: &Scope) -> Result<()> {
        let path = self.path(scope);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
