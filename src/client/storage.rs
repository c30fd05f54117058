/**
 * Client-Side Token Storage
 *
 * Persists the auth token the backend returns on login, under a fixed
 * key in a JSON file in the platform data directory. This is the
 * client's equivalent of a browser's localStorage slot.
 */

use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed storage key for the auth token
pub const TOKEN_KEY: &str = "token";

/// Storage file name inside the app data directory
const STORAGE_FILE: &str = "session.json";

/// Token storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no data directory available on this platform")]
    NoDataDir,
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed token store
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store at the default platform location
    /// (`<data_dir>/authgate/session.json`)
    pub fn new() -> Result<Self, StorageError> {
        let mut path = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        path.push("authgate");
        path.push(STORAGE_FILE);
        Ok(Self { path })
    }

    /// Create a store at an explicit path (used by tests)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let value: Value = serde_json::from_str(&contents)?;
                Ok(value.as_object().cloned().unwrap_or_default())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    /// Persist a token under the fixed key, replacing any previous one
    pub fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_map(&map)
    }

    /// Load the stored token, if any
    pub fn load_token(&self) -> Result<Option<String>, StorageError> {
        let map = self.read_map()?;
        Ok(map
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(String::from))
    }

    /// Remove the stored token (logout)
    pub fn clear_token(&self) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        if map.remove(TOKEN_KEY).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
