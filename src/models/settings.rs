use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub notifications: bool,
    pub reminder_time: String, // "H:MM", 24h
    pub water_reminders: bool,
    pub dark_mode: bool,
    pub units: UnitSystem,
    pub week_starts_on: WeekStart,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            reminder_time: "8:00".into(),
            water_reminders: true,
            dark_mode: false,
            units: UnitSystem::Metric,
            week_starts_on: WeekStart::Monday,
        }
    }
}
