//! Workout plan database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct WorkoutPlanModel {
    pub id: i64,
    pub trainer_id: i64,
    pub member_id: i64,
    pub name: String,
    pub description: String,
    pub goal: String,
    pub day_of_week: String,
    pub duration_weeks: i32,
    pub calories_target: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for workout_plan_exercises
#[derive(Debug, Clone, FromRow)]
pub struct PlanExerciseModel {
    pub id: i64,
    pub workout_plan_id: i64,
    pub exercise_id: i64,
    pub sets: i32,
    pub reps: i32,
    pub weight: Option<f64>,
    pub rest_time_seconds: i32,
    /// Quoted in SQL; `order` is reserved
    pub order: i32,
    pub notes: Option<String>,
}
