use std::{marker::PhantomData, sync::Arc};

use anyhow::{Context, Result};
use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    models::{Goals, Settings},
    storage::{load_json, store_json, KeyValueStore, StorageKey},
};

/// A record that is stored as a single document under its own key.
///
/// Saving replaces the whole document (last write wins, no merging), and
/// reading an absent or unreadable document yields `Default::default()`.
pub trait SingletonRecord: Serialize + DeserializeOwned + Default {
    const KEY: StorageKey;

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl SingletonRecord for Goals {
    const KEY: StorageKey = StorageKey::Goals;

    fn validate(&self) -> Result<()> {
        Goals::validate(self)
    }
}

impl SingletonRecord for Settings {
    const KEY: StorageKey = StorageKey::Settings;
}

pub struct SingletonRepository<T> {
    store: Arc<dyn KeyValueStore>,
    _record: PhantomData<fn() -> T>,
}

pub type GoalsRepository = SingletonRepository<Goals>;
pub type SettingsRepository = SingletonRepository<Settings>;

impl<T> Clone for SingletonRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: SingletonRecord> SingletonRepository<T> {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub fn get(&self) -> Result<T> {
        Ok(load_json(self.store.as_ref(), T::KEY)?.unwrap_or_default())
    }

    pub fn save(&self, record: &T) -> Result<()> {
        record.validate()?;
        store_json(self.store.as_ref(), T::KEY, record)
            .with_context(|| format!("failed to save {}", T::KEY.as_str()))?;
        debug!("Saved {}", T::KEY.as_str());
        Ok(())
    }
}
