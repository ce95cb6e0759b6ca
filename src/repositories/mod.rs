//! Typed repositories over the key-value store.
//!
//! Each repository owns exactly one storage key and is constructed with the
//! store it should use, so tests can hand in a [`MemoryStore`] and the
//! application hands in the SQLite-backed [`Database`].
//!
//! [`MemoryStore`]: crate::storage::MemoryStore
//! [`Database`]: crate::db::Database

mod food_entries;
mod singleton;
mod water_intake;

pub use food_entries::FoodEntryRepository;
pub use singleton::{GoalsRepository, SettingsRepository, SingletonRecord, SingletonRepository};
pub use water_intake::WaterIntakeRepository;
