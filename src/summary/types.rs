use std::ops::Add;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, Meal};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    pub fn of(entry: &FoodEntry) -> Self {
        Self {
            calories: entry.calories,
            protein: entry.protein,
            carbs: entry.carbs,
            fat: entry.fat,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

/// Percent of each daily goal reached, each clamped to `0..=100`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Calories contributed by each macro goal and its rounded share of the sum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein_calories: f64,
    pub carbs_calories: f64,
    pub fat_calories: f64,
    pub protein_percent: u32,
    pub carbs_percent: u32,
    pub fat_percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealTotals {
    pub meal: Meal,
    pub entry_count: usize,
    pub totals: NutritionTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayTotals {
    pub date: NaiveDate,
    pub entry_count: usize,
    pub totals: NutritionTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// Seven entries, `week_start` first.
    pub days: Vec<DayTotals>,
    pub total: NutritionTotals,
    /// Averages over days with at least one entry.
    pub average: NutritionTotals,
    pub days_logged: usize,
    pub previous_average: NutritionTotals,
    pub previous_days_logged: usize,
}

impl WeeklySummary {
    pub fn calorie_change(&self) -> f64 {
        self.average.calories - self.previous_average.calories
    }

    pub fn protein_change(&self) -> f64 {
        self.average.protein - self.previous_average.protein
    }
}
