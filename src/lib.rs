pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod models;
pub mod repositories;
pub mod storage;
pub mod summary;
mod tracker;

use anyhow::Result;

pub use config::TrackerConfig;
pub use db::Database;
pub use storage::{KeyValueStore, MemoryStore, StorageKey};
pub use tracker::{DailySummary, Tracker};

fn print_daily_summary(day: &DailySummary) {
    println!("{}", day.date.format("%A, %B %-d"));
    println!(
        "Calories: {:.0} / {:.0} kcal ({:.0}%), {:.0} remaining",
        day.totals.calories,
        day.goals.calories,
        day.progress.calories,
        day.remaining_calories
    );
    println!(
        "Protein {:.1}/{:.0}g  Carbs {:.1}/{:.0}g  Fat {:.1}/{:.0}g",
        day.totals.protein,
        day.goals.protein,
        day.totals.carbs,
        day.goals.carbs,
        day.totals.fat,
        day.goals.fat
    );
    for meal in &day.meals {
        println!(
            "  {:<10} {:>6.0} kcal  ({} items)",
            meal.meal.display_name(),
            meal.totals.calories,
            meal.entry_count
        );
    }
    println!("Water: {} glasses", day.water_glasses);
}

pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Calorie tracker starting up...");

    let config = TrackerConfig::from_default_dirs()?;
    let tracker = Tracker::open(&config)?;

    print_daily_summary(&tracker.today_summary()?);
    Ok(())
}
