//! Workout plan entity

use chrono::{DateTime, Utc};

use crate::value_objects::{string_enum, Snowflake};

string_enum! {
    /// Training goal of a plan
    pub enum Goal {
        FatLoss => "fat_loss",
        WeightLoss => "weight_loss",
        MuscleGain => "muscle_gain",
        Strength => "strength",
        Endurance => "endurance",
        GeneralFitness => "general_fitness",
    }
}

string_enum! {
    pub enum DayOfWeek {
        Sunday => "sunday",
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
    }
}

/// A plan a trainer writes for one member
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub id: Snowflake,
    pub trainer_id: Snowflake,
    pub member_id: Snowflake,
    pub name: String,
    pub description: String,
    pub goal: Goal,
    pub day_of_week: DayOfWeek,
    pub duration_weeks: i32,
    pub calories_target: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    pub const DEFAULT_DURATION_WEEKS: i32 = 4;
}
