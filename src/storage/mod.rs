//! Key-value persistence adapter.
//!
//! Every record the tracker owns is stored as one JSON document under a fixed
//! key. Backends only move raw text around; decoding lives in [`load_json`] so
//! that every repository shares the same swallow-and-default policy.

mod memory;

pub use memory::MemoryStore;

use anyhow::{Context, Result};
use log::error;
use serde::{de::DeserializeOwned, Serialize};

/// Fixed keys owned by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    FoodEntries,
    Goals,
    Settings,
    WaterIntake,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::FoodEntries,
        StorageKey::Goals,
        StorageKey::Settings,
        StorageKey::WaterIntake,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::FoodEntries => "calorieTracker_foodEntries",
            StorageKey::Goals => "calorieTracker_goals",
            StorageKey::Settings => "calorieTracker_settings",
            StorageKey::WaterIntake => "calorieTracker_waterIntake",
        }
    }
}

/// A durable, synchronous string store.
///
/// Implementations must be safe to share behind an `Arc`, but callers do not
/// get any atomicity across a `get` followed by a `set`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Read and decode the document stored under `key`.
///
/// Returns `Ok(None)` when the key is absent *or* when the stored text cannot
/// be decoded into `T`. Decode failures are logged and otherwise swallowed.
pub fn load_json<T>(store: &dyn KeyValueStore, key: StorageKey) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key.as_str())? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            error!("Error loading {}: {err}; falling back to default", key.as_str());
            Ok(None)
        }
    }
}

/// Encode `value` and overwrite whatever is stored under `key`.
pub fn store_json<T>(store: &dyn KeyValueStore, key: StorageKey, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let serialized = serde_json::to_string(value)
        .with_context(|| format!("failed to encode {}", key.as_str()))?;
    store.set(key.as_str(), &serialized)
}
