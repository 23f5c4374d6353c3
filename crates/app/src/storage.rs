use std::{
    collections::{BTreeMap, VecDeque},
    sync::Mutex,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Settings, SettingsRepository, log};

const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

/// Key-value store holding JSON documents, the in-process counterpart of the browser's
/// local storage.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a storage from previously stored documents.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let json = self
            .entries
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .get(key)
            .cloned();
        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.entries
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .insert(key.to_string(), json);
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("invalid document: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

impl SettingsRepository for MemoryStorage {
    fn read_settings(&self) -> Result<Settings, StorageError> {
        Ok(self.get(KEY_SETTINGS)?.unwrap_or_default())
    }

    fn write_settings(&self, settings: Settings) -> Result<(), StorageError> {
        self.set(KEY_SETTINGS, &settings)
    }
}

impl log::Repository for MemoryStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.get(KEY_LOG)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        self.set(KEY_LOG, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
