use std::{collections::HashMap, sync::Mutex};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, KeyValueStore};

/// An in-process store for environments without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<Key, String>>,
}

impl MemoryStorage {
    pub fn get_raw(&self, key: Key) -> Result<Option<String>, Error> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| Error::Poisoned)?
            .get(&key)
            .cloned())
    }

    pub fn set_raw(&self, key: Key, value: &str) -> Result<(), Error> {
        self.entries
            .lock()
            .map_err(|_| Error::Poisoned)?
            .insert(key, value.to_string());
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error> {
        match self.get_raw(key)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error> {
        self.set_raw(key, &serde_json::to_string(value)?)
    }
}
