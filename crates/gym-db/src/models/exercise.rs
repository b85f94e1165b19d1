//! Exercise catalog database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ExerciseModel {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub muscle_groups: String,
    pub equipment_needed: Option<String>,
    pub difficulty_level: String,
    pub calories_per_minute: Option<f64>,
    pub exercise_image: Option<String>,
    pub video_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
