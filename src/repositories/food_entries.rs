use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use crate::{
    models::{food_entry::validation, FoodEntry, NewFoodEntry},
    storage::{load_json, store_json, KeyValueStore, StorageKey},
};

/// The ordered list of everything the user has logged.
#[derive(Clone)]
pub struct FoodEntryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl FoodEntryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Validate, assign an id, append and persist.
    pub fn save(&self, entry: NewFoodEntry) -> Result<FoodEntry> {
        validation::validate_new_entry(&entry)?;

        let entry = entry.with_id(Uuid::new_v4().to_string());
        let mut entries = self.list()?;
        entries.push(entry.clone());
        self.persist(&entries)
            .with_context(|| format!("failed to save food entry {}", entry.id))?;

        debug!("Saved food entry {} ({})", entry.id, entry.name);
        Ok(entry)
    }

    /// All entries in insertion order. Missing or unreadable data yields an
    /// empty list.
    pub fn list(&self) -> Result<Vec<FoodEntry>> {
        Ok(load_json(self.store.as_ref(), StorageKey::FoodEntries)?.unwrap_or_default())
    }

    pub fn list_for_date(&self, date: NaiveDate) -> Result<Vec<FoodEntry>> {
        let mut entries = self.list()?;
        entries.retain(|entry| entry.date == date);
        Ok(entries)
    }

    /// Entries whose date falls in `start..=end`, in insertion order.
    pub fn list_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<FoodEntry>> {
        let mut entries = self.list()?;
        entries.retain(|entry| entry.date >= start && entry.date <= end);
        Ok(entries)
    }

    /// Remove the entry with `id`. Returns `false` without touching the store
    /// if no such entry exists.
    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            debug!("Food entry {id} not found; nothing to delete");
            return Ok(false);
        }

        self.persist(&entries)
            .with_context(|| format!("failed to delete food entry {id}"))?;
        debug!("Deleted food entry {id}");
        Ok(true)
    }

    fn persist(&self, entries: &[FoodEntry]) -> Result<()> {
        store_json(self.store.as_ref(), StorageKey::FoodEntries, entries)
    }
}
