use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Daily nutrition targets. Calories in kcal, macros in grams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Goals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fat: 67.0,
        }
    }
}

impl Goals {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{field} goal must be a non-negative number");
            }
        }
        Ok(())
    }
}

/// Quick-pick targets offered next to the goal editor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GoalPreset {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl GoalPreset {
    pub const ALL: [GoalPreset; 3] = [
        GoalPreset::WeightLoss,
        GoalPreset::Maintenance,
        GoalPreset::MuscleGain,
    ];

    pub fn goals(&self) -> Goals {
        match self {
            GoalPreset::WeightLoss => Goals {
                calories: 1800.0,
                protein: 135.0,
                carbs: 202.0,
                fat: 60.0,
            },
            GoalPreset::Maintenance => Goals {
                calories: 2200.0,
                protein: 165.0,
                carbs: 247.0,
                fat: 73.0,
            },
            GoalPreset::MuscleGain => Goals {
                calories: 2600.0,
                protein: 195.0,
                carbs: 292.0,
                fat: 87.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets() {
        let goals = Goals::default();
        assert_eq!(goals.calories, 2000.0);
        assert_eq!(goals.protein, 150.0);
        assert_eq!(goals.carbs, 250.0);
        assert_eq!(goals.fat, 67.0);
    }

    #[test]
    fn presets_are_valid_and_increasing() {
        let calories: Vec<f64> = GoalPreset::ALL.iter().map(|p| p.goals().calories).collect();
        assert_eq!(calories, vec![1800.0, 2200.0, 2600.0]);
        for preset in GoalPreset::ALL {
            preset.goals().validate().unwrap();
        }
    }

    #[test]
    fn negative_or_nan_goal_is_invalid() {
        let mut goals = Goals::default();
        goals.fat = -1.0;
        assert!(goals.validate().is_err());

        let mut goals = Goals::default();
        goals.calories = f64::INFINITY;
        assert!(goals.validate().is_err());

        let zero = Goals {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        };
        assert!(zero.validate().is_ok());
    }
}
