//! Body-mass index classification and the recommendation table

use serde::Serialize;

use crate::entities::{ExerciseCategory, Goal};
use crate::error::DomainError;

/// WHO adult BMI bands, bounds half-open on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    pub const NORMAL_BELOW: f64 = 25.0;
    pub const OVERWEIGHT_BELOW: f64 = 30.0;

    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < Self::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < Self::NORMAL_BELOW {
            Self::Normal
        } else if bmi < Self::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    pub fn recommendation(self) -> Recommendation {
        match self {
            Self::Underweight => Recommendation {
                goals: &[Goal::MuscleGain],
                calories: CalorieRange::at_least(2500),
                focus: ExerciseFocus::Strength,
            },
            Self::Normal => Recommendation {
                goals: &[Goal::GeneralFitness],
                calories: CalorieRange::between(2000, 2500),
                focus: ExerciseFocus::FullBody,
            },
            Self::Overweight | Self::Obese => Recommendation {
                goals: &[Goal::GeneralFitness, Goal::FatLoss],
                calories: CalorieRange::at_most(2000),
                focus: ExerciseFocus::Cardio,
            },
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`classify`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Compute BMI from kilograms and metres
pub fn classify(weight_kg: f64, height_m: f64) -> Result<BmiReading, DomainError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(DomainError::invalid_field("weight", "must be greater than 0"));
    }
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(DomainError::invalid_field("height", "must be greater than 0"));
    }

    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiReading {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// Inclusive calorie bounds for nutrition plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl CalorieRange {
    pub const fn at_least(min: i32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: i32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, calories: i32) -> bool {
        self.min.map_or(true, |min| calories >= min) && self.max.map_or(true, |max| calories <= max)
    }
}

/// Kind of exercise to suggest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFocus {
    Strength,
    FullBody,
    Cardio,
}

impl ExerciseFocus {
    pub fn categories(self) -> &'static [ExerciseCategory] {
        match self {
            Self::Strength => ExerciseCategory::STRENGTH,
            Self::FullBody => &[ExerciseCategory::FullBody],
            Self::Cardio => &[ExerciseCategory::Cardio],
        }
    }
}

/// Filters applied to plans, nutrition and exercises for a BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub goals: &'static [Goal],
    pub calories: CalorieRange,
    pub focus: ExerciseFocus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_classify_examples() {
        let r = classify(70.0, 1.75).unwrap();
        assert!(approx(r.bmi, 22.86));
        assert_eq!(r.category, BmiCategory::Normal);

        let r = classify(50.0, 1.60).unwrap();
        assert!(approx(r.bmi, 19.53));
        assert_eq!(r.category, BmiCategory::Normal);

        let r = classify(120.0, 1.70).unwrap();
        assert!(approx(r.bmi, 41.52));
        assert_eq!(r.category, BmiCategory::Obese);
    }

    #[test]
    fn test_classify_rejects_non_positive_input() {
        assert!(classify(-5.0, 1.70).unwrap_err().is_validation());
        assert!(classify(70.0, 0.0).unwrap_err().is_validation());
        assert!(classify(f64::NAN, 1.70).is_err());
        assert!(classify(70.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_band_edges_are_half_open() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.999), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_labels_serialize() {
        assert_eq!(
            serde_json::to_string(&BmiCategory::Normal).unwrap(),
            "\"Normal weight\""
        );
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
    }

    #[test]
    fn test_recommendation_table() {
        let under = BmiCategory::Underweight.recommendation();
        assert_eq!(under.goals, &[Goal::MuscleGain]);
        assert!(under.calories.contains(2500));
        assert!(!under.calories.contains(2499));
        assert_eq!(under.focus, ExerciseFocus::Strength);
        assert!(under.focus.categories().contains(&ExerciseCategory::Legs));

        let normal = BmiCategory::Normal.recommendation();
        assert!(normal.calories.contains(2000) && normal.calories.contains(2500));
        assert!(!normal.calories.contains(2501));
        assert_eq!(normal.focus.categories(), &[ExerciseCategory::FullBody]);

        let heavy = BmiCategory::Obese.recommendation();
        assert_eq!(heavy, BmiCategory::Overweight.recommendation());
        assert!(heavy.goals.contains(&Goal::FatLoss));
        assert!(heavy.calories.contains(2000));
        assert!(!heavy.calories.contains(2001));
        assert_eq!(heavy.focus, ExerciseFocus::Cardio);
    }
}
