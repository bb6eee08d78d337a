use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::error::Result;

/// Key holding the comparison history array
pub const HISTORY_KEY: &str = "lingoDiffHistory";
/// Key holding the first-visit flag
pub const VISITED_KEY: &str = "lingoDiffVisited";

/// JSON key/value document on disk. A missing file reads as an empty store;
/// every write rewrites the whole document.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let mut document = self.load()?;
        match document.remove(key) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut document = self.load()?;
        document.insert(key.to_string(), serde_json::to_value(value)?);
        self.save(&document)
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut document = self.load()?;
        let removed = document.remove(key).is_some();
        if removed {
            self.save(&document)?;
        }
        Ok(removed)
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), keys = document.len(), "Store written");
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("absent.json"));
        let value: Option<bool> = store.get(VISITED_KEY).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("nested").join("store.json"));

        store.set(VISITED_KEY, &true).unwrap();
        store.set(HISTORY_KEY, &vec!["x".to_string()]).unwrap();

        assert_eq!(store.get::<bool>(VISITED_KEY).unwrap(), Some(true));
        assert_eq!(
            store.get::<Vec<String>>(HISTORY_KEY).unwrap(),
            Some(vec!["x".to_string()])
        );

        assert!(store.remove(VISITED_KEY).unwrap());
        assert!(!store.remove(VISITED_KEY).unwrap());
        assert_eq!(store.get::<bool>(VISITED_KEY).unwrap(), None);
        assert!(store.get::<Vec<String>>(HISTORY_KEY).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_document_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let err = LocalStore::new(&path).get::<bool>(VISITED_KEY).unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }
}
