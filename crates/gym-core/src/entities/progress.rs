//! Member progress measurement

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberProgress {
    pub id: Snowflake,
    pub member_id: Snowflake,
    /// Kilograms
    pub weight: f64,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass: Option<f64>,
    /// Free-form body measurements, e.g. `{"waist": 82}`
    pub measurements: Option<serde_json::Value>,
    pub progress_photo: Option<String>,
    pub notes: Option<String>,
    pub recorded_date: DateTime<Utc>,
}
