//! Member activity models: workout logs, progress entries, workout sessions

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct WorkoutLogModel {
    pub id: i64,
    pub member_id: i64,
    pub workout_plan_id: Option<i64>,
    pub exercise_id: i64,
    pub date: NaiveDate,
    pub sets_completed: i32,
    pub reps_completed: i32,
    pub weight_used: Option<f64>,
    pub notes: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProgressModel {
    pub id: i64,
    pub member_id: i64,
    pub weight: f64,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass: Option<f64>,
    /// JSONB
    pub measurements: Option<Json<serde_json::Value>>,
    pub progress_photo: Option<String>,
    pub notes: Option<String>,
    pub recorded_date: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct WorkoutSessionModel {
    pub id: i64,
    pub member_id: i64,
    pub workout_plan_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_calories_burned: Option<i32>,
    pub completed: bool,
    pub rating: Option<i16>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}
