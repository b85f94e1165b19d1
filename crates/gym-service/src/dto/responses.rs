//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use gym_core::entities::{
    DayOfWeek, Difficulty, ExerciseCategory, Gender, Goal, MealType, PlanType,
};
use gym_core::policy::{CalorieRange, ExerciseFocus};
use gym_core::Role;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with cursor-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, after: Option<String>, has_more: bool, limit: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                after,
                has_more,
                limit,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Cursor for fetching the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// A full page came back, so more rows may follow
    pub has_more: bool,
    pub limit: i64,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ActorResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub is_super: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Assignment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TrainerLinkResponse {
    pub id: String,
    pub trainer_id: String,
    pub member_id: String,
    pub assigned_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    pub id: String,
    pub member_id: String,
    pub plan_type: PlanType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub muscle_groups: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_needed: Option<String>,
    pub difficulty_level: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_minute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlanResponse {
    pub id: String,
    pub trainer_id: String,
    pub member_id: String,
    pub name: String,
    pub description: String,
    pub goal: Goal,
    pub day_of_week: DayOfWeek,
    pub duration_weeks: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_target: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanExerciseResponse {
    pub id: String,
    pub workout_plan_id: String,
    pub exercise_id: String,
    pub sets: i32,
    pub reps: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub rest_time_seconds: i32,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlanResponse {
    pub id: String,
    pub trainer_id: String,
    pub member_id: String,
    pub name: String,
    pub description: String,
    pub meal_type: MealType,
    pub calories: i32,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    pub meal_details: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Activity Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutLogResponse {
    pub id: String,
    pub member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_plan_id: Option<String>,
    pub exercise_id: String,
    pub date: NaiveDate,
    pub sets_completed: i32,
    pub reps_completed: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_used: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub id: String,
    pub member_id: String,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub recorded_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSessionResponse {
    pub id: String,
    pub member_id: String,
    pub workout_plan_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calories_burned: Option<i32>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Recommendation Responses
// ============================================================================

/// Filters that produced the recommended lists
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationCriteria {
    pub goals: Vec<Goal>,
    pub calories: CalorieRange,
    pub exercise_focus: ExerciseFocus,
    pub exercise_categories: Vec<ExerciseCategory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    /// Rounded to two decimals
    pub bmi: f64,
    pub category: String,
    pub criteria: RecommendationCriteria,
    pub workout_plans: Vec<WorkoutPlanResponse>,
    pub nutrition_plans: Vec<NutritionPlanResponse>,
    pub exercises: Vec<ExerciseResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response() {
        let response = PaginatedResponse::new(vec![1, 2, 3], Some("3".to_string()), true, 3);
        assert!(response.pagination.has_more);
        assert_eq!(response.pagination.limit, 3);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["pagination"]["after"], "3");
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_last_page_omits_cursor() {
        let response: PaginatedResponse<i32> = PaginatedResponse::new(vec![], None, false, 50);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["pagination"].get("after").is_none());
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
