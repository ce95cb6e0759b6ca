use std::{collections::BTreeMap, sync::Arc};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;

use crate::storage::{load_json, store_json, KeyValueStore, StorageKey};

/// Glasses of water per calendar day.
#[derive(Clone)]
pub struct WaterIntakeRepository {
    store: Arc<dyn KeyValueStore>,
}

impl WaterIntakeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Result<BTreeMap<NaiveDate, u32>> {
        Ok(load_json(self.store.as_ref(), StorageKey::WaterIntake)?.unwrap_or_default())
    }

    pub fn get_for_date(&self, date: NaiveDate) -> Result<u32> {
        Ok(self.all()?.get(&date).copied().unwrap_or(0))
    }

    /// Overwrite the count for `date`, keeping every other day as stored.
    pub fn set_for_date(&self, date: NaiveDate, glasses: u32) -> Result<()> {
        let mut intake = self.all()?;
        intake.insert(date, glasses);
        store_json(self.store.as_ref(), StorageKey::WaterIntake, &intake)
            .with_context(|| format!("failed to save water intake for {date}"))?;
        debug!("Water intake for {date} set to {glasses}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn unknown_day_is_zero() {
        let repo = WaterIntakeRepository::new(Arc::new(MemoryStore::new()));
        assert_eq!(repo.get_for_date(date(1)).unwrap(), 0);
    }

    #[test]
    fn set_overwrites_only_that_day() {
        let repo = WaterIntakeRepository::new(Arc::new(MemoryStore::new()));
        repo.set_for_date(date(1), 3).unwrap();
        repo.set_for_date(date(2), 5).unwrap();
        repo.set_for_date(date(1), 8).unwrap();

        assert_eq!(repo.get_for_date(date(1)).unwrap(), 8);
        assert_eq!(repo.get_for_date(date(2)).unwrap(), 5);
        assert_eq!(repo.all().unwrap().len(), 2);
    }

    #[test]
    fn stored_shape_is_date_keyed_object() {
        let store = Arc::new(MemoryStore::new());
        let repo = WaterIntakeRepository::new(store.clone());
        repo.set_for_date(date(9), 6).unwrap();
        assert_eq!(
            store.get(StorageKey::WaterIntake.as_str()).unwrap().as_deref(),
            Some(r#"{"2024-02-09":6}"#)
        );
    }

    #[test]
    fn negative_count_in_storage_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(StorageKey::WaterIntake.as_str(), r#"{"2024-02-01":-2}"#)
            .unwrap();
        let repo = WaterIntakeRepository::new(store);
        assert!(repo.all().unwrap().is_empty());
    }
}
