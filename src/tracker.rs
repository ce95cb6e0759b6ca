use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::{
    clock,
    config::TrackerConfig,
    db::Database,
    export,
    models::{FoodDraft, FoodEntry, Goals},
    repositories::{
        FoodEntryRepository, GoalsRepository, SettingsRepository, WaterIntakeRepository,
    },
    storage::{KeyValueStore, MemoryStore, StorageKey},
    summary::{self, GoalProgress, MacroSplit, MealTotals, NutritionTotals, WeeklySummary},
};

/// Everything the dashboard and food log show for one day.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub entries: Vec<FoodEntry>,
    pub totals: NutritionTotals,
    pub goals: Goals,
    pub progress: GoalProgress,
    pub remaining_calories: f64,
    pub meals: Vec<MealTotals>,
    pub macro_split: MacroSplit,
    pub water_glasses: u32,
}

/// The four repositories over one shared store.
#[derive(Clone)]
pub struct Tracker {
    store: Arc<dyn KeyValueStore>,
    food_entries: FoodEntryRepository,
    goals: GoalsRepository,
    settings: SettingsRepository,
    water_intake: WaterIntakeRepository,
}

impl Tracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            food_entries: FoodEntryRepository::new(store.clone()),
            goals: GoalsRepository::new(store.clone()),
            settings: SettingsRepository::new(store.clone()),
            water_intake: WaterIntakeRepository::new(store.clone()),
            store,
        }
    }

    /// Open (or create) the on-disk store described by `config`.
    pub fn open(config: &TrackerConfig) -> Result<Self> {
        let database = Database::new(config.database_path()).with_context(|| {
            format!(
                "failed to open tracker data in {}",
                config.data_dir().display()
            )
        })?;
        Ok(Self::new(Arc::new(database)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn food_entries(&self) -> &FoodEntryRepository {
        &self.food_entries
    }

    pub fn goals(&self) -> &GoalsRepository {
        &self.goals
    }

    pub fn settings(&self) -> &SettingsRepository {
        &self.settings
    }

    pub fn water_intake(&self) -> &WaterIntakeRepository {
        &self.water_intake
    }

    /// Save a form submission stamped with today's date and the current time.
    pub fn log_food(&self, draft: FoodDraft) -> Result<FoodEntry> {
        self.food_entries
            .save(draft.logged_at(clock::today(), clock::current_time()))
    }

    pub fn daily_summary(&self, date: NaiveDate) -> Result<DailySummary> {
        let entries = self.food_entries.list_for_date(date)?;
        let goals = self.goals.get()?;
        let totals = summary::totals(&entries);

        Ok(DailySummary {
            date,
            progress: summary::goal_progress(&totals, &goals),
            remaining_calories: summary::remaining_calories(&totals, &goals),
            meals: summary::meal_breakdown(&entries),
            macro_split: summary::macro_split(&goals),
            water_glasses: self.water_intake.get_for_date(date)?,
            entries,
            totals,
            goals,
        })
    }

    pub fn today_summary(&self) -> Result<DailySummary> {
        self.daily_summary(clock::today())
    }

    /// Week containing `date`, starting on the day chosen in settings.
    pub fn weekly_summary(&self, date: NaiveDate) -> Result<WeeklySummary> {
        let week_start = self.settings.get()?.week_starts_on;
        let entries = self.food_entries.list()?;
        Ok(summary::weekly_summary(&entries, date, week_start))
    }

    pub fn export_csv(&self) -> Result<String> {
        let entries = self.food_entries.list()?;
        let goals = self.goals.get()?;
        Ok(export::to_csv(&entries, &goals))
    }

    /// Remove every record the tracker owns. There is no undo.
    pub fn clear_all_data(&self) -> Result<()> {
        for key in StorageKey::ALL {
            self.store
                .remove(key.as_str())
                .with_context(|| format!("failed to clear {}", key.as_str()))?;
        }
        info!("Cleared all tracker data");
        Ok(())
    }
}
