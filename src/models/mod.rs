pub mod food_entry;
pub mod goals;
pub mod settings;

pub use food_entry::{FoodDraft, FoodEntry, Meal, NewFoodEntry};
pub use goals::{GoalPreset, Goals};
pub use settings::{Settings, UnitSystem, WeekStart};
