#![warn(clippy::pedantic)]

use std::collections::VecDeque;

use fitai_domain as domain;
use fitai_web_app::{self as web_app, Settings, log};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

pub mod local_storage;
pub mod memory;
pub mod schema;


pub use local_storage::LocalStorage;
pub use memory::MemoryStorage;

const MAX_LOG_ENTRIES: usize = 100;

/// A string-keyed store holding one JSON document per key.
pub trait KeyValueStore {
    /// Returns `Ok(None)` if the key does not exist.
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error>;
    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    #[strum(serialize = "workoutPlans")]
    WorkoutPlans,
    #[strum(serialize = "workoutProgress")]
    WorkoutProgress,
    #[strum(serialize = "userProfile")]
    UserProfile,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Browser(String),
    #[error("storage lock poisoned")]
    Poisoned,
}

impl From<Error> for domain::StorageError {
    fn from(value: Error) -> Self {
        match value {
            Error::Serde(err) => domain::StorageError::InvalidData(err.to_string()),
            Error::Browser(message) => domain::StorageError::Other(message.into()),
            Error::Poisoned => domain::StorageError::Unavailable,
        }
    }
}

fn read_error(err: Error) -> domain::ReadError {
    domain::ReadError::Storage(err.into())
}

fn write_error(err: Error) -> domain::WriteError {
    domain::WriteError::Storage(err.into())
}

/// Repositories of the application backed by a key-value store.
#[derive(Debug, Default, Clone)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> domain::PlanRepository for Storage<S> {
    fn read_plans(&self) -> Result<Option<Vec<domain::WorkoutPlan>>, domain::ReadError> {
        Ok(self
            .store
            .get::<Vec<schema::WorkoutPlan>>(Key::WorkoutPlans)
            .map_err(read_error)?
            .map(|plans| plans.into_iter().map(domain::WorkoutPlan::from).collect()))
    }

    fn write_plans(&self, plans: &[domain::WorkoutPlan]) -> Result<(), domain::WriteError> {
        self.store
            .set(
                Key::WorkoutPlans,
                &plans
                    .iter()
                    .map(schema::WorkoutPlan::from)
                    .collect::<Vec<_>>(),
            )
            .map_err(write_error)
    }

    fn read_progress(
        &self,
    ) -> Result<Option<Vec<domain::WorkoutProgressRecord>>, domain::ReadError> {
        Ok(self
            .store
            .get::<Vec<schema::WorkoutProgress>>(Key::WorkoutProgress)
            .map_err(read_error)?
            .map(|progress| {
                progress
                    .into_iter()
                    .map(domain::WorkoutProgressRecord::from)
                    .collect()
            }))
    }

    fn write_progress(
        &self,
        progress: &[domain::WorkoutProgressRecord],
    ) -> Result<(), domain::WriteError> {
        self.store
            .set(
                Key::WorkoutProgress,
                &progress
                    .iter()
                    .map(schema::WorkoutProgress::from)
                    .collect::<Vec<_>>(),
            )
            .map_err(write_error)
    }
}

impl<S: KeyValueStore> web_app::Repository for Storage<S> {
    fn read_settings(&self) -> Result<Settings, domain::ReadError> {
        Ok(self
            .store
            .get(Key::Settings)
            .map_err(read_error)?
            .unwrap_or_default())
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), domain::WriteError> {
        self.store.set(Key::Settings, settings).map_err(write_error)
    }

    fn read_profile(&self) -> Result<Option<domain::UserProfile>, domain::ReadError> {
        Ok(self
            .store
            .get::<schema::UserProfile>(Key::UserProfile)
            .map_err(read_error)?
            .map(domain::UserProfile::from))
    }

    fn write_profile(&self, profile: &domain::UserProfile) -> Result<(), domain::WriteError> {
        self.store
            .set(Key::UserProfile, &schema::UserProfile::from(profile))
            .map_err(write_error)
    }
}

impl<S: KeyValueStore + Send + Sync + 'static> log::Repository for Storage<S> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.store
            .get(Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        self.store
            .set(Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
