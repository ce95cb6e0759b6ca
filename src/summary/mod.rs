//! Display-ready numbers derived from logged entries and goals.
//!
//! Everything here is pure: callers fetch entries and goals from the
//! repositories and pass them in.

mod types;

pub use types::{DayTotals, GoalProgress, MacroSplit, MealTotals, NutritionTotals, WeeklySummary};

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{FoodEntry, Goals, Meal, WeekStart};

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

const DAYS_PER_WEEK: u64 = 7;

pub fn totals<'a>(entries: impl IntoIterator<Item = &'a FoodEntry>) -> NutritionTotals {
    entries
        .into_iter()
        .map(NutritionTotals::of)
        .fold(NutritionTotals::default(), |acc, t| acc + t)
}

/// Sum of every entry logged on `date`.
pub fn daily_totals(entries: &[FoodEntry], date: NaiveDate) -> NutritionTotals {
    totals(entries.iter().filter(|entry| entry.date == date))
}

/// `min(100, 100 * consumed / goal)`. A goal of zero (or less) reports 0%.
pub fn progress_percent(consumed: f64, goal: f64) -> f64 {
    if goal <= 0.0 || !goal.is_finite() {
        return 0.0;
    }
    (consumed / goal * 100.0).min(100.0)
}

pub fn goal_progress(consumed: &NutritionTotals, goals: &Goals) -> GoalProgress {
    GoalProgress {
        calories: progress_percent(consumed.calories, goals.calories),
        protein: progress_percent(consumed.protein, goals.protein),
        carbs: progress_percent(consumed.carbs, goals.carbs),
        fat: progress_percent(consumed.fat, goals.fat),
    }
}

/// Negative once the goal has been exceeded.
pub fn remaining_calories(consumed: &NutritionTotals, goals: &Goals) -> f64 {
    goals.calories - consumed.calories
}

/// Convert macro goals to calories and each macro's share of their sum.
///
/// All shares are 0 when every macro goal is zero.
pub fn macro_split(goals: &Goals) -> MacroSplit {
    let protein_calories = goals.protein * PROTEIN_KCAL_PER_GRAM;
    let carbs_calories = goals.carbs * CARBS_KCAL_PER_GRAM;
    let fat_calories = goals.fat * FAT_KCAL_PER_GRAM;
    let total = protein_calories + carbs_calories + fat_calories;

    let share = |calories: f64| -> u32 {
        if total <= 0.0 {
            0
        } else {
            (calories / total * 100.0).round() as u32
        }
    };

    MacroSplit {
        protein_calories,
        carbs_calories,
        fat_calories,
        protein_percent: share(protein_calories),
        carbs_percent: share(carbs_calories),
        fat_percent: share(fat_calories),
    }
}

/// Totals per meal, always all four meals in day order.
pub fn meal_breakdown(entries: &[FoodEntry]) -> Vec<MealTotals> {
    Meal::ALL
        .iter()
        .map(|&meal| {
            let in_meal: Vec<&FoodEntry> = entries.iter().filter(|e| e.meal == meal).collect();
            MealTotals {
                meal,
                entry_count: in_meal.len(),
                totals: totals(in_meal),
            }
        })
        .collect()
}

/// First and last day of the week containing `date`.
pub fn week_bounds(date: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
    let offset = match week_start {
        WeekStart::Monday => date.weekday().num_days_from_monday(),
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
    };
    let start = date - Days::new(u64::from(offset));
    let end = start + Days::new(DAYS_PER_WEEK - 1);
    (start, end)
}

fn days_of_week(entries: &[FoodEntry], start: NaiveDate) -> Vec<DayTotals> {
    start
        .iter_days()
        .take(DAYS_PER_WEEK as usize)
        .map(|date| {
            let on_day: Vec<&FoodEntry> = entries.iter().filter(|e| e.date == date).collect();
            DayTotals {
                date,
                entry_count: on_day.len(),
                totals: totals(on_day),
            }
        })
        .collect()
}

fn average_over_logged(days: &[DayTotals]) -> (NutritionTotals, usize) {
    let logged: Vec<&DayTotals> = days.iter().filter(|d| d.entry_count > 0).collect();
    if logged.is_empty() {
        return (NutritionTotals::default(), 0);
    }
    let sum = logged
        .iter()
        .fold(NutritionTotals::default(), |acc, d| acc + d.totals);
    (sum.scaled(1.0 / logged.len() as f64), logged.len())
}

/// Summary of the week containing `reference`, compared to the week before.
pub fn weekly_summary(
    entries: &[FoodEntry],
    reference: NaiveDate,
    week_start: WeekStart,
) -> WeeklySummary {
    let (start, end) = week_bounds(reference, week_start);
    let previous_start = start - Days::new(DAYS_PER_WEEK);

    let days = days_of_week(entries, start);
    let previous_days = days_of_week(entries, previous_start);

    let total = days
        .iter()
        .fold(NutritionTotals::default(), |acc, d| acc + d.totals);
    let (average, days_logged) = average_over_logged(&days);
    let (previous_average, previous_days_logged) = average_over_logged(&previous_days);

    WeeklySummary {
        week_start: start,
        week_end: end,
        days,
        total,
        average,
        days_logged,
        previous_average,
        previous_days_logged,
    }
}
