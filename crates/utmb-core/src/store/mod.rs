//! Local key-value persistence for history and templates.
//!
//! Generation never reads or writes here; the CLI records requests after the fact.

mod file;
mod history;
mod templates;

pub use file::FileStore;
pub use history::{History, DEFAULT_HISTORY_LIMIT};
pub use templates::{Templates, UtmTemplate, TEMPLATES_KEY};

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no saved templates")]
    NoTemplates,
    #[error("template '{0}' not found")]
    TemplateNotFound(String),
    #[error("invalid template: {0}")]
    InvalidTemplate(String),
    #[error("cannot locate data directory: {0}")]
    DataDir(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// String key → string value storage (values are JSON documents).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads a JSON list under `key`; a missing or corrupt value reads as empty.
pub(crate) fn load_list<T, S>(store: &S, key: &str) -> StoreResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(list) => Ok(list),
        Err(e) => {
            tracing::warn!("discarding unreadable store value under {key}: {e}");
            Ok(Vec::new())
        }
    }
}

pub(crate) fn save_list<T, S>(store: &mut S, key: &str, list: &[T]) -> StoreResult<()>
where
    T: serde::Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(list)?;
    store.set(key, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut s = MemoryStore::new();
        assert_eq!(s.get("k").unwrap(), None);
        s.set("k", "v".into()).unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("v"));
        s.remove("k").unwrap();
        assert_eq!(s.get("k").unwrap(), None);
    }

    #[test]
    fn corrupt_list_reads_empty() {
        let mut s = MemoryStore::new();
        s.set("list", "{not json".into()).unwrap();
        let list: Vec<String> = load_list(&s, "list").unwrap();
        assert!(list.is_empty());
    }
}
