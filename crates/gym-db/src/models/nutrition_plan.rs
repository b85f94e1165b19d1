//! Nutrition plan database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct NutritionPlanModel {
    pub id: i64,
    pub trainer_id: i64,
    pub member_id: i64,
    pub name: String,
    pub description: String,
    pub meal_type: String,
    pub calories: i32,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    pub meal_details: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
