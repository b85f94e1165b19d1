//! Exercise catalog entry

use chrono::{DateTime, Utc};

use crate::value_objects::{string_enum, Snowflake};

string_enum! {
    pub enum ExerciseCategory {
        Chest => "chest",
        Back => "back",
        Shoulders => "shoulders",
        Biceps => "biceps",
        Triceps => "triceps",
        Legs => "legs",
        Abs => "abs",
        Cardio => "cardio",
        FullBody => "full_body",
    }
}

impl ExerciseCategory {
    /// Resistance-training categories
    pub const STRENGTH: &'static [ExerciseCategory] = &[
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
    ];
}

string_enum! {
    #[derive(Default)]
    pub enum Difficulty {
        #[default]
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

/// Globally shared exercise definition
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Snowflake,
    pub name: String,
    pub category: ExerciseCategory,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub muscle_groups: String,
    pub equipment_needed: Option<String>,
    pub difficulty_level: Difficulty,
    pub calories_per_minute: Option<f64>,
    pub exercise_image: Option<String>,
    pub video_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
