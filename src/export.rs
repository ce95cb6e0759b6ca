//! CSV export of the food log.

use crate::models::{FoodEntry, Goals};

const HEADER: [&str; 9] = [
    "Date",
    "Time",
    "Meal",
    "Food Name",
    "Serving",
    "Calories",
    "Protein (g)",
    "Carbs (g)",
    "Fat (g)",
];

/// Always wraps `value` in double quotes, doubling any quotes inside it.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn entry_row(entry: &FoodEntry) -> String {
    [
        entry.date.to_string(),
        entry.time.clone(),
        entry.meal.to_string(),
        quoted(&entry.name),
        quoted(&entry.serving),
        entry.calories.to_string(),
        entry.protein.to_string(),
        entry.carbs.to_string(),
        entry.fat.to_string(),
    ]
    .join(",")
}

/// Render every entry (in storage order) followed by a goals trailer.
///
/// Lines are separated by `\n` with no trailing newline. Writing the text
/// somewhere is up to the caller.
pub fn to_csv(entries: &[FoodEntry], goals: &Goals) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push(HEADER.join(","));
    lines.extend(entries.iter().map(entry_row));
    lines.push(String::new());
    lines.push(format!(
        "Current Goals:,,,,,{},{},{},{}",
        goals.calories, goals.protein, goals.carbs, goals.fat
    ));
    lines.join("\n")
}
