use crate::errors::AppError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{error, warn};

pub const TASKS_KEY: &str = "todo-items";
pub const RECORDS_PREFIX: &str = "todo-items-records-";
pub const GOAL_COUNT_KEY: &str = "todo-goal-count";
pub const GOAL_DESCRIPTION_KEY: &str = "todo-goal-description";

/// String-keyed store of every persisted value, held in its stored textual
/// encoding: JSON for everything except the goal description, which is kept
/// as a plain string. Serializes transparently, so the data file is a flat
/// key-to-string JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KvStore {
    entries: BTreeMap<String, String>,
}

impl KvStore {
    /// JSON-encodes `value` and stores it under `key`. An encoding failure
    /// is logged and reported as `false`; it never reaches the caller.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(encoded) => {
                self.entries.insert(key.to_string(), encoded);
                true
            }
            Err(err) => {
                error!("failed to encode value for {key}: {err}");
                false
            }
        }
    }

    /// Stores a plain unencoded string. Only the goal description uses this.
    pub fn set_text(&mut self, key: &str, value: &str) -> bool {
        self.entries.insert(key.to_string(), value.to_string());
        true
    }

    /// Decodes the value stored under `key`; an absent key or a value that
    /// fails to decode yields `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.entries.get(key) {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!("malformed value for {key}: {err}");
                    default
                }
            },
            None => default,
        }
    }

    pub fn get_text(&self, key: &str, default: &str) -> String {
        match self.entries.get(key) {
            Some(raw) if !raw.is_empty() => raw.clone(),
            _ => default.to_string(),
        }
    }

    pub fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .keys()
            .filter(move |key| key.starts_with(prefix))
            .map(String::as_str)
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/todo.json"))
}

pub async fn load_store(path: &Path) -> KvStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file: {err}");
                KvStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => KvStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            KvStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &KvStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
