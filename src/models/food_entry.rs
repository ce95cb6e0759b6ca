//! Logged food entries.
//!
//! Entries are stored in the same JSON shape the tracker has always used:
//! camelCase fields, lower-case meal names, ISO calendar dates.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    /// All meals in the order they happen during a day.
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snacks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snacks => "snacks",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the add-food form collects. Date and time are stamped when logged.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal: Meal,
    pub serving: String,
}

impl FoodDraft {
    pub fn logged_at(self, date: NaiveDate, time: String) -> NewFoodEntry {
        NewFoodEntry {
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            meal: self.meal,
            serving: self.serving,
            date,
            time,
        }
    }
}

/// A food entry as submitted by the user, before it has an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodEntry {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal: Meal,
    pub serving: String,
    pub date: NaiveDate,
    pub time: String, // display-formatted, e.g. "8:30 AM"
}

impl NewFoodEntry {
    pub fn with_id(self, id: String) -> FoodEntry {
        FoodEntry {
            id,
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            meal: self.meal,
            serving: self.serving,
            date: self.date,
            time: self.time,
        }
    }
}

/// One logged consumption event. Immutable once saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal: Meal,
    pub serving: String,
    pub date: NaiveDate,
    pub time: String,
}

/// Validation functions for food entry input
pub mod validation {
    use super::NewFoodEntry;
    use anyhow::{bail, Result};

    pub fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            bail!("Food name is required");
        }
        Ok(())
    }

    /// Zero is allowed: black coffee and water are worth logging.
    pub fn validate_amount(field: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            bail!("{field} must be a non-negative number");
        }
        Ok(())
    }

    pub fn validate_new_entry(entry: &NewFoodEntry) -> Result<()> {
        validate_name(&entry.name)?;
        validate_amount("Calories", entry.calories)?;
        validate_amount("Protein", entry.protein)?;
        validate_amount("Carbs", entry.carbs)?;
        validate_amount("Fat", entry.fat)?;
        Ok(())
    }
}
