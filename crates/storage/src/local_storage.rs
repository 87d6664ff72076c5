use gloo_storage::{Storage as GlooStorage, errors::StorageError};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, KeyValueStore};

/// The browser's local storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error> {
        match gloo_storage::LocalStorage::get(key.as_ref()) {
            Ok(value) => Ok(Some(value)),
            Err(err) => match err {
                StorageError::KeyNotFound(_) => Ok(None),
                StorageError::SerdeError(err) => Err(Error::Serde(err)),
                err => Err(Error::Browser(err.to_string())),
            },
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error> {
        gloo_storage::LocalStorage::set(key.as_ref(), value).map_err(|err| match err {
            StorageError::SerdeError(err) => Error::Serde(err),
            err => Error::Browser(err.to_string()),
        })
    }
}

impl LocalStorage {
    pub fn delete(key: Key) {
        gloo_storage::LocalStorage::delete(key.as_ref());
    }
}
